//! # Upload Outcome DTO
//!
//! アップロード処理の結果（作成 or 更新のどちらか一方）

use crate::domain::entities::remote_file::RemoteFile;

/// アップロード結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    /// 新規ファイルを1つ作成した
    Created {
        file: RemoteFile,
        download_link: Option<String>,
    },
    /// 既存ファイルを更新した（1件以上）
    Updated { files: Vec<RemoteFile> },
}

impl UploadOutcome {
    /// 作成時のダウンロードリンク。更新時は常に `None`
    ///
    /// # 例
    ///
    /// ```
    /// use gdrive_upload::application::dto::upload_outcome::UploadOutcome;
    /// use gdrive_upload::domain::entities::remote_file::RemoteFile;
    ///
    /// let created = UploadOutcome::Created {
    ///     file: RemoteFile::new("id-1", "a.txt", vec![]),
    ///     download_link: Some("https://drive.google.com/uc?id=id-1".to_string()),
    /// };
    /// assert_eq!(created.download_link(), Some("https://drive.google.com/uc?id=id-1"));
    ///
    /// let updated = UploadOutcome::Updated { files: vec![] };
    /// assert_eq!(updated.download_link(), None);
    /// ```
    pub fn download_link(&self) -> Option<&str> {
        match self {
            Self::Created { download_link, .. } => download_link.as_deref(),
            Self::Updated { .. } => None,
        }
    }

    /// 影響を受けたファイル
    pub fn files(&self) -> Vec<&RemoteFile> {
        match self {
            Self::Created { file, .. } => vec![file],
            Self::Updated { files } => files.iter().collect(),
        }
    }
}
