//! # Credential Decoder Service
//!
//! base64 で包まれた認証情報を正規の JSON テキストに戻す

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::domain::entities::credential::Credential;
use crate::domain::errors::UploadError;

const CREDENTIALS_FIELD: &str = "credentials";

/// 認証情報デコーダー
pub struct CredentialDecoder;

impl CredentialDecoder {
    /// 認証情報を正規化します。
    ///
    /// `encoded` が真なら base64 デコードする。その後、末尾の改行を1つだけ取り除く。
    ///
    /// # Errors
    ///
    /// base64 として不正、または UTF-8 でない場合に `IncorrectInput("credentials", ..)`
    pub fn decode(raw: &str, encoded: bool) -> Result<Credential, UploadError> {
        let text = if encoded {
            let bytes = STANDARD.decode(raw.as_bytes()).map_err(|e| {
                UploadError::incorrect_input(
                    CREDENTIALS_FIELD,
                    format!("base64 decoding failed: {}", e),
                )
            })?;
            String::from_utf8(bytes).map_err(|e| {
                UploadError::incorrect_input(
                    CREDENTIALS_FIELD,
                    format!("decoded credentials are not valid UTF-8: {}", e),
                )
            })?
        } else {
            raw.to_string()
        };

        Ok(Credential::new(Self::trim_trailing_newline(text)))
    }

    /// 末尾の `\n` を1つだけ取り除く
    fn trim_trailing_newline(mut text: String) -> String {
        if text.ends_with('\n') {
            text.pop();
        }
        text
    }
}
