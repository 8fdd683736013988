//! # Flag Parser Service
//!
//! 真偽値入力（空 / "true" / "false"）の厳密なパース

use crate::domain::errors::UploadError;

/// 真偽値フラグのパーサー
///
/// 受け付けるのは空文字列・`"true"`・`"false"` のみ。
/// `"yes"` や `"1"` のような値はエラーにする。
pub struct FlagParser;

impl FlagParser {
    /// 入力値を真偽値に変換します。
    ///
    /// # Arguments
    ///
    /// * `field` - 入力名（エラーメッセージに使う）
    /// * `value` - 入力値
    /// * `default` - 空の場合の値
    ///
    /// # 例
    ///
    /// ```
    /// use gdrive_upload::domain::services::flag_parser::FlagParser;
    ///
    /// assert!(FlagParser::parse("overwrite", "", true).unwrap());
    /// assert!(!FlagParser::parse("overwrite", "false", true).unwrap());
    /// assert!(FlagParser::parse("overwrite", "yes", true).is_err());
    /// ```
    pub fn parse(field: &str, value: &str, default: bool) -> Result<bool, UploadError> {
        match value {
            "" => Ok(default),
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err(UploadError::incorrect_input(
                field,
                format!("{} needs to be either empty, 'false' or 'true'.", field),
            )),
        }
    }
}
