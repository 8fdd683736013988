//! Authentication Module
//!
//! Google サービスアカウント認証

pub mod service_account;

pub use service_account::{authorization_headers, build_credentials, CredentialsToken};
