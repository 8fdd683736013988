//! # Credential Value Object
//!
//! サービスアカウント鍵（秘密情報）のバリューオブジェクト

use std::fmt;

/// サービスアカウントの認証情報
///
/// 中身は JSON 形式の鍵。`Debug` では中身を出力しない。
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// 秘密情報そのものを返す
    ///
    /// 呼び出し側はログやエラーメッセージに含めないこと
    pub fn expose_secret(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}
