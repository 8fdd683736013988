//! # Upload Errors
//!
//! 実行を中断するエラーの分類
//!
//! どのエラーも終端であり、リトライはしない。`Display` の出力はそのまま
//! ワークフローの `::error::` 行になる。

use thiserror::Error;

/// アップロード処理のエラー
#[derive(Debug, Error)]
pub enum UploadError {
    /// 必須入力が空
    #[error("missing input '{0}'")]
    MissingInput(String),

    /// 入力値が不正
    #[error("{}", incorrect_input_message(.field, .reason))]
    IncorrectInput { field: String, reason: String },

    /// ローカルファイルの読み込み失敗
    #[error("opening file with filename: {path} failed with error: {cause}")]
    LocalIo { path: String, cause: String },

    /// 認証情報の交換失敗
    #[error("fetching JWT credentials failed with error: {0}")]
    Auth(String),

    /// Drive API 呼び出しの失敗
    #[error("{operation} failed with error: {cause}")]
    RemoteApi { operation: String, cause: String },

    /// ステップ出力の書き込み失敗
    #[error("setting output '{name}' failed with error: {cause}")]
    Output { name: String, cause: String },
}

impl UploadError {
    pub fn missing_input(field: &str) -> Self {
        Self::MissingInput(field.to_string())
    }

    pub fn incorrect_input(field: &str, reason: impl Into<String>) -> Self {
        Self::IncorrectInput {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    /// anyhow のエラーチェーンを1行にまとめて `RemoteApi` を作る
    pub fn remote(operation: impl Into<String>, error: &anyhow::Error) -> Self {
        Self::RemoteApi {
            operation: operation.into(),
            cause: error_chain_to_string(error),
        }
    }
}

fn incorrect_input_message(field: &str, reason: &str) -> String {
    if reason.is_empty() {
        format!("incorrect input '{}'", field)
    } else {
        format!("incorrect input '{}' reason: {}", field, reason)
    }
}

/// Convert error chain to string including all causes
pub fn error_chain_to_string(e: &anyhow::Error) -> String {
    let mut messages = Vec::new();
    for cause in e.chain() {
        messages.push(cause.to_string());
    }
    messages.join(" | ")
}
