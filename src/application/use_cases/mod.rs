//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **ResolveInputsUseCase**: 入力の取得・検証と認証情報のデコード
//! - **UploadFileUseCase**: 作成 / 更新の判定と実行

pub mod resolve_inputs;
pub mod upload_file;
