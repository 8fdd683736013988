//! GitHub Actions Adapter
//!
//! ワークフローコマンド、ログ整形、実行環境の実装

pub mod commands;
pub mod logging;
pub mod runtime;

pub use logging::{init_logger, SecretRegistry};
pub use runtime::GithubActionsRuntime;
