//! Logging
//!
//! env_logger の出力をワークフローコマンドに整形し、登録済みの秘密情報を伏せる

use anyhow::{Context, Result};
use log::Level;
use std::io::Write;
use std::sync::{Arc, RwLock};

use super::commands::format_command;

const REDACTED: &str = "***";

/// Set of secret values that must never reach a log sink in cleartext
#[derive(Debug, Clone, Default)]
pub struct SecretRegistry {
    secrets: Arc<RwLock<Vec<String>>>,
}

impl SecretRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a value; empty values are ignored
    pub fn register(&self, secret: &str) {
        if secret.is_empty() {
            return;
        }
        let mut secrets = match self.secrets.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if !secrets.iter().any(|s| s == secret) {
            secrets.push(secret.to_string());
            // longest first so a secret containing another is replaced whole
            secrets.sort_by_key(|s| std::cmp::Reverse(s.len()));
        }
    }

    /// Replace every registered secret in `text` with `***`
    pub fn redact(&self, text: &str) -> String {
        let secrets = match self.secrets.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let mut redacted = text.to_string();
        for secret in secrets.iter() {
            if redacted.contains(secret.as_str()) {
                redacted = redacted.replace(secret.as_str(), REDACTED);
            }
        }
        redacted
    }
}

/// Map a log record onto the matching workflow command
pub fn format_record(level: Level, message: &str) -> String {
    match level {
        Level::Error => format_command("error", &[], message),
        Level::Warn => format_command("warning", &[], message),
        Level::Info => message.to_string(),
        Level::Debug | Level::Trace => format_command("debug", &[], message),
    }
}

/// Default filter: `debug` when the runner has step debugging enabled
pub fn default_filter(runner_debug: Option<&str>) -> &'static str {
    match runner_debug {
        Some("1") => "debug",
        _ => "info",
    }
}

/// Install env_logger writing redacted workflow commands to stdout
pub fn init_logger(registry: SecretRegistry) -> Result<()> {
    let runner_debug = std::env::var("RUNNER_DEBUG").ok();
    let env = env_logger::Env::default().default_filter_or(default_filter(runner_debug.as_deref()));

    env_logger::Builder::from_env(env)
        .target(env_logger::Target::Stdout)
        .format(move |buf, record| {
            let message = registry.redact(&record.args().to_string());
            writeln!(buf, "{}", format_record(record.level(), &message))
        })
        .try_init()
        .context("Failed to initialize logger")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact_registered_secret() {
        let registry = SecretRegistry::new();
        registry.register("s3cr3t");
        assert_eq!(registry.redact("token=s3cr3t;"), "token=***;");
    }

    #[test]
    fn test_redact_prefers_longest_secret() {
        let registry = SecretRegistry::new();
        registry.register("abc");
        registry.register("abcdef");
        assert_eq!(registry.redact("x abcdef y abc"), "x *** y ***");
    }

    #[test]
    fn test_empty_secret_is_ignored() {
        let registry = SecretRegistry::new();
        registry.register("");
        assert_eq!(registry.redact("nothing hidden"), "nothing hidden");
    }

    #[test]
    fn test_clones_share_secrets() {
        let registry = SecretRegistry::new();
        let clone = registry.clone();
        clone.register("shared");
        assert_eq!(registry.redact("shared"), "***");
    }

    #[test]
    fn test_format_record_levels() {
        assert_eq!(format_record(Level::Error, "boom"), "::error::boom");
        assert_eq!(format_record(Level::Warn, "careful"), "::warning::careful");
        assert_eq!(format_record(Level::Info, "hello"), "hello");
        assert_eq!(format_record(Level::Debug, "a\nb"), "::debug::a%0Ab");
        assert_eq!(format_record(Level::Trace, "t"), "::debug::t");
    }

    #[test]
    fn test_default_filter() {
        assert_eq!(default_filter(Some("1")), "debug");
        assert_eq!(default_filter(Some("0")), "info");
        assert_eq!(default_filter(None), "info");
    }
}
