//! Adapter Layer
//!
//! 外部システム（GitHub Actions, Google 認証, Drive API, ファイルシステム）との統合

pub mod actions;
pub mod auth;
pub mod config;
pub mod drive;
pub mod repositories;
