//! Drive Client
//!
//! DriveRepository の google-drive3 (DriveHub) 実装と、その生成ファクトリ

use anyhow::{anyhow, bail, Context, Result};
use async_trait::async_trait;
use google_cloud_auth::credentials::Credentials;
use google_drive3 as drive3;
use hyper_rustls::{HttpsConnector, HttpsConnectorBuilder};
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;
use log::debug;
use std::future::Future;
use std::io::Cursor;
use std::sync::Arc;
use std::time::Duration;

use super::models::{
    create_metadata, rename_metadata, to_remote_file, FILE_FIELDS, LINK_FIELDS, LIST_FIELDS,
};
use crate::adapter::auth::{authorization_headers, build_credentials, CredentialsToken};
use crate::adapter::config::Config;
use crate::domain::entities::credential::Credential;
use crate::domain::entities::local_file::LocalFile;
use crate::domain::entities::remote_file::{NewFile, RemoteFile};
use crate::domain::repositories::drive_repository::DriveRepository;
use crate::domain::services::file_query::FileQuery;

type Connector = HttpsConnector<HttpConnector>;

/// Drive v3 client authorized with service-account credentials
pub struct DriveClient {
    hub: drive3::DriveHub<Connector>,
    credentials: Credentials,
    timeout: Duration,
}

impl DriveClient {
    pub fn new(config: &Config, credentials: Credentials) -> Result<Self> {
        // TLS connector + HTTP client. Plain http is allowed for a local root_url.
        let connector = HttpsConnectorBuilder::new()
            .with_provider_and_webpki_roots(rustls::crypto::ring::default_provider())
            .context("Failed to configure TLS")?
            .https_or_http()
            .enable_http1()
            .enable_http2()
            .build();
        let client = Client::builder(TokioExecutor::new()).build(connector);

        let mut hub = drive3::DriveHub::new(client, CredentialsToken::new(credentials.clone()));
        hub.root_url(config.root_url.clone());
        hub.base_url(config.api_base_url());

        Ok(Self {
            hub,
            credentials,
            timeout: Duration::from_secs(config.request_timeout_secs),
        })
    }

    /// Verify the credentials by fetching a token once
    pub async fn authorize(&self) -> Result<()> {
        authorization_headers(&self.credentials).await?;
        Ok(())
    }

    /// Await a hub call within the request timeout and keep only the payload
    async fn call<R, T, F>(&self, request: F) -> Result<T>
    where
        F: Future<Output = std::result::Result<(R, T), drive3::Error>>,
    {
        match tokio::time::timeout(self.timeout, request).await {
            Ok(Ok((_, value))) => Ok(value),
            Ok(Err(e)) => Err(api_error(e)),
            Err(_) => bail!(
                "Drive API request timed out after {}s",
                self.timeout.as_secs()
            ),
        }
    }
}

/// Flatten a hub error into a one-line message with the HTTP status when known
fn api_error(error: drive3::Error) -> anyhow::Error {
    match error {
        drive3::Error::BadRequest(body) => {
            let code = body.pointer("/error/code").and_then(|c| c.as_u64());
            let message = body.pointer("/error/message").and_then(|m| m.as_str());
            match (code, message) {
                (Some(code), Some(message)) => anyhow!("Drive API returned {}: {}", code, message),
                _ => anyhow!("Drive API returned an error: {}", body),
            }
        }
        drive3::Error::Failure(response) => anyhow!("Drive API returned {}", response.status()),
        other => anyhow!("Drive API request failed: {}", other),
    }
}

fn media_type(media: &LocalFile) -> mime_guess::mime::Mime {
    media
        .content_type()
        .parse()
        .unwrap_or(mime_guess::mime::APPLICATION_OCTET_STREAM)
}

#[async_trait]
impl DriveRepository for DriveClient {
    async fn find_files(&self, query: &FileQuery) -> Result<Vec<RemoteFile>> {
        let q = query.to_string();
        let mut files = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut request = self
                .hub
                .files()
                .list()
                .q(&q)
                // 共有ドライブ上のファイルも対象にする
                .include_items_from_all_drives(true)
                .supports_all_drives(true)
                .param("fields", LIST_FIELDS);
            if let Some(token) = &page_token {
                request = request.page_token(token);
            }

            let page = self.call(request.doit()).await?;
            files.extend(page.files.unwrap_or_default().into_iter().map(to_remote_file));

            match page.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }

        debug!("Query {} matched {} files", q, files.len());
        Ok(files)
    }

    async fn create_file(&self, metadata: &NewFile, media: &LocalFile) -> Result<RemoteFile> {
        let request = self
            .hub
            .files()
            .create(create_metadata(metadata))
            .supports_all_drives(true)
            .param("fields", FILE_FIELDS)
            .upload(Cursor::new(media.content().to_vec()), media_type(media));

        Ok(to_remote_file(self.call(request).await?))
    }

    async fn update_file(
        &self,
        file_id: &str,
        name: &str,
        media: &LocalFile,
    ) -> Result<RemoteFile> {
        let request = self
            .hub
            .files()
            .update(rename_metadata(name), file_id)
            .supports_all_drives(true)
            .param("fields", FILE_FIELDS)
            .upload(Cursor::new(media.content().to_vec()), media_type(media));

        Ok(to_remote_file(self.call(request).await?))
    }

    async fn download_link(&self, file_id: &str) -> Result<Option<String>> {
        let request = self
            .hub
            .files()
            .get(file_id)
            .supports_all_drives(true)
            .param("fields", LINK_FIELDS)
            .doit();

        Ok(self.call(request).await?.web_content_link)
    }
}

/// Factory for creating authorized Drive repositories
#[async_trait]
pub trait DriveClientFactory: Send + Sync {
    async fn create_client(&self, credential: &Credential) -> Result<Arc<dyn DriveRepository>>;
}

/// Production implementation of DriveClientFactory
pub struct GoogleDriveClientFactory {
    config: Config,
}

impl GoogleDriveClientFactory {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

#[async_trait]
impl DriveClientFactory for GoogleDriveClientFactory {
    async fn create_client(&self, credential: &Credential) -> Result<Arc<dyn DriveRepository>> {
        let credentials = build_credentials(credential, &self.config.scope)?;
        let client = DriveClient::new(&self.config, credentials)?;
        client.authorize().await?;
        Ok(Arc::new(client))
    }
}
