//! # Resolve Inputs Use Case
//!
//! 入力の取得・検証と認証情報のデコード

use std::sync::Arc;

use crate::application::dto::resolved_inputs::ResolvedInputs;
use crate::domain::entities::upload_request::UploadRequest;
use crate::domain::errors::UploadError;
use crate::domain::repositories::action_environment::ActionEnvironment;
use crate::domain::services::credential_decoder::CredentialDecoder;
use crate::domain::services::flag_parser::FlagParser;

/// 入力名
pub mod inputs {
    pub const FILENAME: &str = "filename";
    pub const NAME: &str = "name";
    pub const FOLDER_ID: &str = "folderId";
    pub const CREDENTIALS: &str = "credentials";
    pub const ENCODED: &str = "encoded";
    pub const OVERWRITE: &str = "overwrite";
}

/// 入力解決ユースケース
///
/// 必須入力は filename, folderId, credentials の順に検査し、最初に欠けたものを報告する。
/// 生の認証情報とデコード後の認証情報は、それぞれ取得直後にマスク登録する。
pub struct ResolveInputsUseCase<E: ActionEnvironment + ?Sized> {
    environment: Arc<E>,
    default_overwrite: bool,
}

impl<E: ActionEnvironment + ?Sized> ResolveInputsUseCase<E> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `environment` - 入力を提供する実行環境
    /// * `default_overwrite` - overwrite が空の場合の値
    pub fn new(environment: Arc<E>, default_overwrite: bool) -> Self {
        Self {
            environment,
            default_overwrite,
        }
    }

    /// 入力を解決する
    ///
    /// # Errors
    ///
    /// 必須入力の欠落は `MissingInput`、不正なフラグや認証情報は `IncorrectInput`
    pub fn execute(&self) -> Result<ResolvedInputs, UploadError> {
        let filename = self.required(inputs::FILENAME)?;
        let name = self.environment.get_input(inputs::NAME);
        let folder_id = self.required(inputs::FOLDER_ID)?;

        let raw_credentials = self.required(inputs::CREDENTIALS)?;
        self.environment.add_mask(&raw_credentials);

        let encoded = FlagParser::parse(
            inputs::ENCODED,
            &self.environment.get_input(inputs::ENCODED),
            true,
        )?;
        let credential = CredentialDecoder::decode(&raw_credentials, encoded)?;
        self.environment.add_mask(credential.expose_secret());

        let overwrite = FlagParser::parse(
            inputs::OVERWRITE,
            &self.environment.get_input(inputs::OVERWRITE),
            self.default_overwrite,
        )?;

        let display_name = if name.is_empty() { None } else { Some(name) };

        Ok(ResolvedInputs {
            request: UploadRequest::new(filename, display_name, folder_id, overwrite),
            credential,
        })
    }

    fn required(&self, name: &str) -> Result<String, UploadError> {
        let value = self.environment.get_input(name);
        if value.is_empty() {
            return Err(UploadError::missing_input(name));
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::action_environment::MockActionEnvironment;
    use base64::{engine::general_purpose::STANDARD, Engine as _};
    use std::collections::HashMap;
    use std::path::PathBuf;
    use std::sync::Mutex;

    const KEY_JSON: &str = r#"{"type":"service_account"}"#;

    /// 入力マップから環境モックを作る。マスク登録された値は `masks` に記録する
    fn mock_environment(
        values: &[(&str, &str)],
        masks: Arc<Mutex<Vec<String>>>,
    ) -> MockActionEnvironment {
        let values: HashMap<String, String> = values
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        let mut mock = MockActionEnvironment::new();
        mock.expect_get_input()
            .returning(move |name| values.get(name).cloned().unwrap_or_default());
        mock.expect_add_mask()
            .returning(move |value| masks.lock().unwrap().push(value.to_string()));
        mock.expect_set_output().never();
        mock
    }

    fn full_inputs(encoded_credentials: &str) -> Vec<(&'static str, String)> {
        vec![
            (inputs::FILENAME, "dist/app.zip".to_string()),
            (inputs::FOLDER_ID, "folder-1".to_string()),
            (inputs::CREDENTIALS, encoded_credentials.to_string()),
        ]
    }

    fn resolve(values: &[(&str, String)]) -> (Result<ResolvedInputs, UploadError>, Vec<String>) {
        let masks = Arc::new(Mutex::new(Vec::new()));
        let borrowed: Vec<(&str, &str)> = values.iter().map(|(k, v)| (*k, v.as_str())).collect();
        let environment = Arc::new(mock_environment(&borrowed, masks.clone()));
        let use_case = ResolveInputsUseCase::new(environment, true);
        let result = use_case.execute();
        let masks = masks.lock().unwrap().clone();
        (result, masks)
    }

    #[test]
    fn test_resolve_all_defaults() {
        let encoded = STANDARD.encode(format!("{}\n", KEY_JSON));
        let (result, masks) = resolve(&full_inputs(&encoded));

        let resolved = result.unwrap();
        assert_eq!(resolved.request.source_path, PathBuf::from("dist/app.zip"));
        assert_eq!(resolved.request.display_name, None);
        assert_eq!(resolved.request.folder_id, "folder-1");
        assert!(resolved.request.overwrite);
        assert_eq!(resolved.credential.expose_secret(), KEY_JSON);

        // 生の値とデコード後の値の両方がマスクされる
        assert_eq!(masks, vec![encoded, KEY_JSON.to_string()]);
    }

    #[test]
    fn test_missing_required_inputs() {
        for missing in [inputs::FILENAME, inputs::FOLDER_ID, inputs::CREDENTIALS] {
            let values: Vec<(&str, String)> = full_inputs("Zm9v")
                .into_iter()
                .filter(|(k, _)| *k != missing)
                .collect();

            let (result, _) = resolve(&values);
            let err = result.unwrap_err();
            assert_eq!(err.to_string(), format!("missing input '{}'", missing));
        }
    }

    #[test]
    fn test_first_missing_input_is_reported() {
        let (result, masks) = resolve(&[]);
        assert_eq!(result.unwrap_err().to_string(), "missing input 'filename'");
        assert!(masks.is_empty());
    }

    #[test]
    fn test_encoded_garbage() {
        let mut values = full_inputs("Zm9v");
        values.push((inputs::ENCODED, "garbage".to_string()));

        let (result, masks) = resolve(&values);
        assert_eq!(
            result.unwrap_err().to_string(),
            "incorrect input 'encoded' reason: encoded needs to be either empty, 'false' or 'true'."
        );
        // 生の認証情報はフラグ検査より前にマスク済み
        assert_eq!(masks, vec!["Zm9v".to_string()]);
    }

    #[test]
    fn test_overwrite_garbage() {
        let mut values = full_inputs("Zm9v");
        values.push((inputs::OVERWRITE, "maybe".to_string()));

        let (result, _) = resolve(&values);
        assert_eq!(
            result.unwrap_err().to_string(),
            "incorrect input 'overwrite' reason: overwrite needs to be either empty, 'false' or 'true'."
        );
    }

    #[test]
    fn test_raw_credentials_and_explicit_flags() {
        let mut values = full_inputs(KEY_JSON);
        values.push((inputs::ENCODED, "false".to_string()));
        values.push((inputs::OVERWRITE, "false".to_string()));
        values.push((inputs::NAME, "a.txt".to_string()));

        let (result, masks) = resolve(&values);
        let resolved = result.unwrap();
        assert_eq!(resolved.credential.expose_secret(), KEY_JSON);
        assert_eq!(resolved.request.display_name.as_deref(), Some("a.txt"));
        assert!(!resolved.request.overwrite);
        assert_eq!(masks.len(), 2);
    }

    #[test]
    fn test_default_overwrite_is_configurable() {
        let masks = Arc::new(Mutex::new(Vec::new()));
        let values = [
            (inputs::FILENAME, "a.txt"),
            (inputs::FOLDER_ID, "folder-1"),
            (inputs::CREDENTIALS, KEY_JSON),
            (inputs::ENCODED, "false"),
        ];
        let environment = Arc::new(mock_environment(&values, masks));
        let use_case = ResolveInputsUseCase::new(environment, false);

        let resolved = use_case.execute().unwrap();
        assert!(!resolved.request.overwrite);
    }

    #[test]
    fn test_invalid_base64_credentials() {
        let (result, _) = resolve(&full_inputs("%%%not-base64%%%"));
        let err = result.unwrap_err();
        assert!(err
            .to_string()
            .starts_with("incorrect input 'credentials' reason: base64 decoding failed"));
    }
}
