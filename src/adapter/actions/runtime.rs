//! GitHub Actions Runtime
//!
//! ActionEnvironment の GitHub Actions 実装
//!
//! - 入力は `INPUT_<NAME>` 環境変数（大文字化、空白は `_`、前後の空白は除去）
//! - マスクは `::add-mask::` コマンド
//! - 出力は `GITHUB_OUTPUT` ファイル。無ければ `::set-output` コマンド

use anyhow::{bail, Context, Result};
use std::collections::HashMap;
use std::ffi::OsString;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::commands::format_command;
use super::logging::SecretRegistry;
use crate::domain::repositories::action_environment::ActionEnvironment;

const INPUT_PREFIX: &str = "INPUT_";
const OUTPUT_FILE_ENV: &str = "GITHUB_OUTPUT";

/// Environment variable name for an input
pub fn input_env_name(name: &str) -> String {
    format!("{}{}", INPUT_PREFIX, name.replace(' ', "_").to_uppercase())
}

fn utf8_vars<I>(vars: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = (OsString, OsString)>,
{
    vars.into_iter()
        .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
        .collect()
}

/// GitHub Actions runtime writing workflow commands to `W`
pub struct GithubActionsRuntime<W: Write + Send = io::Stdout> {
    env: HashMap<String, String>,
    overrides: HashMap<String, String>,
    output_file: Option<PathBuf>,
    registry: SecretRegistry,
    writer: Mutex<W>,
}

impl GithubActionsRuntime<io::Stdout> {
    /// Snapshot the process environment
    ///
    /// Variables whose name or value is not valid UTF-8 are skipped.
    pub fn from_env(registry: SecretRegistry) -> Self {
        Self::new(utf8_vars(std::env::vars_os()), registry, io::stdout())
    }
}

impl<W: Write + Send> GithubActionsRuntime<W> {
    pub fn new(env: HashMap<String, String>, registry: SecretRegistry, writer: W) -> Self {
        let output_file = env
            .get(OUTPUT_FILE_ENV)
            .filter(|path| !path.is_empty())
            .map(PathBuf::from);

        Self {
            env,
            overrides: HashMap::new(),
            output_file,
            registry,
            writer: Mutex::new(writer),
        }
    }

    /// Values that take precedence over `INPUT_*` variables, keyed by input name
    pub fn with_overrides(mut self, overrides: HashMap<String, String>) -> Self {
        self.overrides = overrides;
        self
    }

    /// Report a fatal error as a single `::error::` line
    pub fn error(&self, message: &str) {
        let message = self.registry.redact(message);
        self.issue(&format_command("error", &[], &message));
    }

    pub fn registry(&self) -> &SecretRegistry {
        &self.registry
    }

    pub fn into_writer(self) -> W {
        match self.writer.into_inner() {
            Ok(writer) => writer,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn issue(&self, line: &str) {
        let mut writer = match self.writer.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        // a closed stdout leaves nothing useful to report to
        let _ = writeln!(writer, "{}", line);
        let _ = writer.flush();
    }

    fn append_output_file(&self, path: &Path, name: &str, value: &str) -> Result<()> {
        let delimiter = format!("ghadelimiter_{}", uuid::Uuid::new_v4());
        if name.contains(&delimiter) || value.contains(&delimiter) {
            bail!("unexpected input: name or value contains delimiter {}", delimiter);
        }

        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(path)
            .with_context(|| format!("Failed to open output file: {}", path.display()))?;
        write!(file, "{}<<{}\n{}\n{}\n", name, delimiter, value, delimiter)
            .with_context(|| format!("Failed to write output file: {}", path.display()))?;
        Ok(())
    }
}

impl<W: Write + Send> ActionEnvironment for GithubActionsRuntime<W> {
    fn get_input(&self, name: &str) -> String {
        if let Some(value) = self.overrides.get(name) {
            return value.trim().to_string();
        }
        self.env
            .get(&input_env_name(name))
            .map(|value| value.trim().to_string())
            .unwrap_or_default()
    }

    fn add_mask(&self, value: &str) {
        if value.is_empty() {
            return;
        }
        self.registry.register(value);
        self.issue(&format_command("add-mask", &[], value));
    }

    fn set_output(&self, name: &str, value: &str) -> Result<()> {
        match &self.output_file {
            Some(path) => self.append_output_file(path, name, value),
            None => {
                self.issue(&format_command("set-output", &[("name", name)], value));
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn runtime(vars: &[(&str, &str)]) -> GithubActionsRuntime<Vec<u8>> {
        let env = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        GithubActionsRuntime::new(env, SecretRegistry::new(), Vec::new())
    }

    fn written(runtime: GithubActionsRuntime<Vec<u8>>) -> String {
        String::from_utf8(runtime.into_writer()).unwrap()
    }

    #[test]
    fn test_input_env_name() {
        assert_eq!(input_env_name("folderId"), "INPUT_FOLDERID");
        assert_eq!(input_env_name("my input"), "INPUT_MY_INPUT");
    }

    #[cfg(unix)]
    #[test]
    fn test_utf8_vars_skips_invalid_entries() {
        use std::os::unix::ffi::OsStringExt;

        let vars = utf8_vars(vec![
            (OsString::from("INPUT_FOLDERID"), OsString::from("abc")),
            (OsString::from("SOME_UNRELATED"), OsString::from_vec(vec![0xff, 0xfe])),
            (OsString::from_vec(vec![0xff]), OsString::from("x")),
        ]);

        assert_eq!(vars.len(), 1);
        assert_eq!(vars["INPUT_FOLDERID"], "abc");
    }

    #[test]
    fn test_get_input_trims_whitespace() {
        let runtime = runtime(&[("INPUT_FOLDERID", "  abc123 \n")]);
        assert_eq!(runtime.get_input("folderId"), "abc123");
        assert_eq!(runtime.get_input("name"), "");
    }

    #[test]
    fn test_overrides_take_precedence() {
        let mut overrides = HashMap::new();
        overrides.insert("filename".to_string(), "cli.txt".to_string());
        let runtime = runtime(&[("INPUT_FILENAME", "env.txt")]).with_overrides(overrides);
        assert_eq!(runtime.get_input("filename"), "cli.txt");
    }

    #[test]
    fn test_add_mask_emits_command_and_registers() {
        let runtime = runtime(&[]);
        runtime.add_mask("secret\nvalue");
        runtime.add_mask("");
        assert_eq!(runtime.registry().redact("secret\nvalue"), "***");
        assert_eq!(written(runtime), "::add-mask::secret%0Avalue\n");
    }

    #[test]
    fn test_error_is_redacted() {
        let runtime = runtime(&[]);
        runtime.add_mask("hunter2");
        runtime.error("auth failed for hunter2");
        assert_eq!(
            written(runtime),
            "::add-mask::hunter2\n::error::auth failed for ***\n"
        );
    }

    #[test]
    fn test_set_output_legacy_command() {
        let runtime = runtime(&[]);
        runtime
            .set_output("download-links", "https://drive.google.com/uc?id=1")
            .unwrap();
        assert_eq!(
            written(runtime),
            "::set-output name=download-links::https://drive.google.com/uc?id=1\n"
        );
    }

    #[test]
    fn test_set_output_file() {
        let dir = TempDir::new().unwrap();
        let output_path = dir.path().join("output");
        fs::write(&output_path, "existing=1\n").unwrap();

        let path = output_path.to_str().unwrap().to_string();
        let runtime = runtime(&[("GITHUB_OUTPUT", path.as_str())]);
        runtime
            .set_output("download-links", "https://drive.google.com/uc?id=1")
            .unwrap();

        let content = fs::read_to_string(&output_path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "existing=1");
        assert!(lines[1].starts_with("download-links<<ghadelimiter_"));
        assert_eq!(lines[2], "https://drive.google.com/uc?id=1");
        assert_eq!(lines[3], &lines[1]["download-links<<".len()..]);
        // nothing printed on stdout
        assert_eq!(written(runtime), "");
    }
}
