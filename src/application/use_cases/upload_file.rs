//! # Upload File Use Case
//!
//! 作成するか既存ファイルを更新するかを決めて実行する
//!
//! - overwrite が偽なら常に新規作成
//! - overwrite が真なら「名前 + 親フォルダ」で検索し、一致が無ければ新規作成、
//!   一致があれば全てを更新する（作成はしない）
//!
//! 検索と更新の間に他者が書き込む競合は許容する（Drive にはバージョン検査がない）。

use log::{debug, info, warn};
use std::sync::Arc;

use crate::application::dto::upload_outcome::UploadOutcome;
use crate::domain::entities::local_file::LocalFile;
use crate::domain::entities::remote_file::NewFile;
use crate::domain::entities::upload_request::UploadRequest;
use crate::domain::errors::UploadError;
use crate::domain::repositories::drive_repository::DriveRepository;
use crate::domain::services::file_query::FileQuery;

/// ファイルアップロードユースケース
pub struct UploadFileUseCase<D: DriveRepository + ?Sized> {
    drive_repository: Arc<D>,
}

impl<D: DriveRepository + ?Sized> UploadFileUseCase<D> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `drive_repository` - 認証済みの Drive リポジトリ
    pub fn new(drive_repository: Arc<D>) -> Self {
        Self { drive_repository }
    }

    /// アップロードを実行
    ///
    /// # Arguments
    ///
    /// * `request` - アップロード要求
    /// * `file` - 読み込み済みのローカルファイル
    ///
    /// # Errors
    ///
    /// Drive API の失敗は全て `RemoteApi`。更新は最初の失敗で中断する。
    pub async fn execute(
        &self,
        request: &UploadRequest,
        file: &LocalFile,
    ) -> Result<UploadOutcome, UploadError> {
        let name = request.resolve_display_name(file);

        if request.overwrite {
            let query = FileQuery::new(&name, &request.folder_id);
            let matches = self
                .drive_repository
                .find_files(&query)
                .await
                .map_err(|e| UploadError::remote(format!("querying file: {}", query), &e))?;

            if !matches.is_empty() {
                debug!(
                    "Found {} files matching file name and folder",
                    matches.len()
                );

                let mut updated = Vec::with_capacity(matches.len());
                for existing in matches {
                    debug!(
                        "Updating file {} (in folder {}) with id {}",
                        existing.name, request.folder_id, existing.id
                    );
                    let replaced = self
                        .drive_repository
                        .update_file(&existing.id, &name, file)
                        .await
                        .map_err(|e| {
                            UploadError::remote(format!("updating file: {}", existing.id), &e)
                        })?;
                    updated.push(replaced);
                }

                info!("Updated {} existing file(s) named {}", updated.len(), name);
                return Ok(UploadOutcome::Updated { files: updated });
            }
        }

        self.create(&name, &request.folder_id, file).await
    }

    async fn create(
        &self,
        name: &str,
        folder_id: &str,
        file: &LocalFile,
    ) -> Result<UploadOutcome, UploadError> {
        let metadata = NewFile::in_folder(name, folder_id);
        debug!("Creating file {} in folder {}", metadata.name, folder_id);

        let created = self
            .drive_repository
            .create_file(&metadata, file)
            .await
            .map_err(|e| UploadError::remote(format!("creating file: {}", metadata.name), &e))?;

        let download_link = self
            .drive_repository
            .download_link(&created.id)
            .await
            .map_err(|e| {
                UploadError::remote(format!("fetching file metadata: {}", created.id), &e)
            })?;

        if download_link.is_none() {
            warn!("File {} has no download link", created.id);
        }

        info!("Created file {} with id {}", created.name, created.id);
        Ok(UploadOutcome::Created {
            file: created,
            download_link,
        })
    }
}
