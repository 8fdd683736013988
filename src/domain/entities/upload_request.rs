//! # UploadRequest Entity
//!
//! 1回の実行で行うアップロード要求

use std::path::PathBuf;

use super::local_file::LocalFile;

/// アップロード要求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    /// ローカルのアップロード元パス
    pub source_path: PathBuf,
    /// Drive 上の表示名（未指定ならファイルのベース名）
    pub display_name: Option<String>,
    /// アップロード先フォルダID
    pub folder_id: String,
    /// 同名ファイルを上書きするかどうか
    pub overwrite: bool,
}

impl UploadRequest {
    pub fn new(
        source_path: impl Into<PathBuf>,
        display_name: Option<String>,
        folder_id: impl Into<String>,
        overwrite: bool,
    ) -> Self {
        Self {
            source_path: source_path.into(),
            display_name: display_name.filter(|name| !name.is_empty()),
            folder_id: folder_id.into(),
            overwrite,
        }
    }

    /// Drive 上で使う表示名を決定します。
    ///
    /// # 例
    ///
    /// ```
    /// use gdrive_upload::domain::entities::local_file::LocalFile;
    /// use gdrive_upload::domain::entities::upload_request::UploadRequest;
    ///
    /// let file = LocalFile::new("dist/report.pdf", vec![]);
    ///
    /// let unnamed = UploadRequest::new("dist/report.pdf", None, "folder", true);
    /// assert_eq!(unnamed.resolve_display_name(&file), "report.pdf");
    ///
    /// let named = UploadRequest::new("dist/report.pdf", Some("latest.pdf".to_string()), "folder", true);
    /// assert_eq!(named.resolve_display_name(&file), "latest.pdf");
    /// ```
    pub fn resolve_display_name(&self, file: &LocalFile) -> String {
        match &self.display_name {
            Some(name) if !name.is_empty() => name.clone(),
            _ => file.base_name().to_string(),
        }
    }
}
