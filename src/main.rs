//! gdrive-upload - Google Drive Uploader
//!
//! CI のステップから1つのファイルを Google Drive にアップロード

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use clap::Parser;
use std::process::ExitCode;
use std::sync::Arc;

use gdrive_upload::adapter::actions::{init_logger, GithubActionsRuntime, SecretRegistry};
use gdrive_upload::adapter::config::Config;
use gdrive_upload::driver::{Args, DriveUploadWorkflow};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() -> ExitCode {
    let registry = SecretRegistry::new();
    if let Err(e) = init_logger(registry.clone()) {
        eprintln!("{:#}", e);
    }

    let args = Args::parse();
    let runtime = Arc::new(
        GithubActionsRuntime::from_env(registry).with_overrides(args.input_overrides()),
    );

    let config = match Config::resolve(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            runtime.error(&format!("loading config failed with error: {:#}", e));
            return ExitCode::FAILURE;
        }
    };

    let workflow = DriveUploadWorkflow::new(config, runtime.clone());
    match workflow.execute().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            runtime.error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
