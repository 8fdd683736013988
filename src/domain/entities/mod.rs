//! # Domain Entities
//!
//! ビジネスエンティティとバリューオブジェクトを定義するモジュール
//!
//! ## エンティティ
//!
//! - **UploadRequest**: 1回の実行のアップロード要求
//! - **Credential**: サービスアカウント鍵（秘密情報）
//! - **LocalFile**: 読み込み済みのアップロード元ファイル
//! - **RemoteFile**: Drive 上のファイルの投影

pub mod credential;
pub mod local_file;
pub mod remote_file;
pub mod upload_request;
