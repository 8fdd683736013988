//! Service Account Authentication
//!
//! サービスアカウント鍵からアクセストークン付きヘッダーを得る

use anyhow::{bail, Context, Result};
use google_cloud_auth::credentials::service_account::{AccessSpecifier, Builder};
use google_cloud_auth::credentials::{CacheableResource, Credentials};
use google_drive3::common::GetToken;
use http::header::AUTHORIZATION;
use http::{Extensions, HeaderMap};
use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;

use crate::domain::entities::credential::Credential;

/// Parse the key JSON and build scoped service-account credentials
///
/// Only the shape of the key is checked here; the token exchange happens on
/// the first call to [`authorization_headers`].
pub fn build_credentials(credential: &Credential, scope: &str) -> Result<Credentials> {
    // serde_json errors carry line/column only, never the input
    let key: serde_json::Value = serde_json::from_str(credential.expose_secret())
        .context("credentials are not valid JSON")?;
    if !key.is_object() {
        bail!("credentials must be a JSON object");
    }

    Builder::new(key)
        .with_access_specifier(AccessSpecifier::from_scopes([scope]))
        .build()
        .context("Failed to build service account credentials")
}

/// Fetch (or reuse a cached) bearer token as request headers
pub async fn authorization_headers(credentials: &Credentials) -> Result<HeaderMap> {
    let headers = credentials
        .headers(Extensions::new())
        .await
        .context("Failed to obtain access token")?;

    match headers {
        CacheableResource::New { data, .. } => Ok(data),
        CacheableResource::NotModified => bail!("credentials returned no authorization headers"),
    }
}

/// Bearer token carried by the `Authorization` header, if any
pub fn bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::to_string)
}

/// Token source for the Drive hub backed by google-cloud-auth credentials
///
/// The credentials are already scoped, so the per-call scopes are ignored.
#[derive(Clone)]
pub struct CredentialsToken {
    credentials: Credentials,
}

impl CredentialsToken {
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }
}

type TokenResult = std::result::Result<Option<String>, Box<dyn StdError + Send + Sync>>;

impl GetToken for CredentialsToken {
    fn get_token<'a>(
        &'a self,
        _scopes: &'a [&str],
    ) -> Pin<Box<dyn Future<Output = TokenResult> + Send + 'a>> {
        Box::pin(async move {
            let headers = authorization_headers(&self.credentials).await?;
            Ok(bearer_token(&headers))
        })
    }
}
