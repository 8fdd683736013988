//! # Domain Services
//!
//! 外部依存を持たないビジネスルール
//!
//! - **flag_parser**: 真偽値入力の厳密なパース
//! - **credential_decoder**: 認証情報の正規化
//! - **file_query**: 名前 + フォルダでの検索条件

pub mod credential_decoder;
pub mod file_query;
pub mod flag_parser;
