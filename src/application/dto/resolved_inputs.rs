//! # Resolved Inputs DTO
//!
//! 検証済みの入力一式

use crate::domain::entities::credential::Credential;
use crate::domain::entities::upload_request::UploadRequest;

/// 検証・デコード済みの入力
///
/// 認証情報はマスク登録済み
#[derive(Debug, Clone)]
pub struct ResolvedInputs {
    pub request: UploadRequest,
    pub credential: Credential,
}
