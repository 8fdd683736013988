//! Workflow Orchestration
//!
//! ワークフローのオーケストレーション
//!
//! 入力解決 → ファイル読み込み → 認証 → アップロード → 出力設定 の順に実行する。
//! ファイルは認証（最初のリモート呼び出し）より前に読み込む。

use log::info;
use std::sync::Arc;

use crate::adapter::config::Config;
use crate::adapter::drive::client::{DriveClientFactory, GoogleDriveClientFactory};
use crate::adapter::repositories::local_file_repository::LocalFileRepository;
use crate::application::dto::upload_outcome::UploadOutcome;
use crate::application::use_cases::resolve_inputs::ResolveInputsUseCase;
use crate::application::use_cases::upload_file::UploadFileUseCase;
use crate::domain::errors::{error_chain_to_string, UploadError};
use crate::domain::repositories::action_environment::ActionEnvironment;
use crate::domain::repositories::file_repository::FileRepository;

/// Output name for the link of a newly created file
pub const DOWNLOAD_LINKS_OUTPUT: &str = "download-links";

/// Drive Upload Workflow
pub struct DriveUploadWorkflow {
    environment: Arc<dyn ActionEnvironment>,
    resolve_use_case: ResolveInputsUseCase<dyn ActionEnvironment>,
    file_repository: Arc<dyn FileRepository>,
    client_factory: Arc<dyn DriveClientFactory>,
}

impl DriveUploadWorkflow {
    /// Create a workflow backed by the local filesystem and the Drive API
    pub fn new(config: Config, environment: Arc<dyn ActionEnvironment>) -> Self {
        let default_overwrite = config.default_overwrite;
        Self::with_dependencies(
            environment,
            default_overwrite,
            Arc::new(LocalFileRepository::new()),
            Arc::new(GoogleDriveClientFactory::new(config)),
        )
    }

    /// Create a workflow with injected dependencies
    pub fn with_dependencies(
        environment: Arc<dyn ActionEnvironment>,
        default_overwrite: bool,
        file_repository: Arc<dyn FileRepository>,
        client_factory: Arc<dyn DriveClientFactory>,
    ) -> Self {
        let resolve_use_case = ResolveInputsUseCase::new(environment.clone(), default_overwrite);
        Self {
            environment,
            resolve_use_case,
            file_repository,
            client_factory,
        }
    }

    /// Execute the upload workflow
    pub async fn execute(&self) -> Result<UploadOutcome, UploadError> {
        let inputs = self.resolve_use_case.execute()?;
        let request = inputs.request;

        let file = self
            .file_repository
            .open(&request.source_path)
            .await
            .map_err(|e| UploadError::LocalIo {
                path: request.source_path.display().to_string(),
                cause: error_chain_to_string(&e),
            })?;
        info!(
            "Uploading {} ({} bytes) to folder {}",
            request.source_path.display(),
            file.len(),
            request.folder_id
        );

        let drive = self
            .client_factory
            .create_client(&inputs.credential)
            .await
            .map_err(|e| UploadError::Auth(error_chain_to_string(&e)))?;

        let outcome = UploadFileUseCase::new(drive)
            .execute(&request, &file)
            .await?;

        if let Some(link) = outcome.download_link() {
            self.environment
                .set_output(DOWNLOAD_LINKS_OUTPUT, link)
                .map_err(|e| UploadError::Output {
                    name: DOWNLOAD_LINKS_OUTPUT.to_string(),
                    cause: error_chain_to_string(&e),
                })?;
        }

        Ok(outcome)
    }
}
