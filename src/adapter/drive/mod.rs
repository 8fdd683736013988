//! Google Drive Adapter Modules
//!
//! google-drive3 による Drive v3 API 統合のためのアダプターモジュール

pub mod client;
pub mod models;

pub use client::{DriveClient, DriveClientFactory, GoogleDriveClientFactory};
