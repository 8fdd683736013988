//! CLI Argument Parsing
//!
//! CLIの引数解析
//!
//! 各フラグは同名のアクション入力（`INPUT_*`）より優先される。

use clap::Parser;
use std::collections::HashMap;

use crate::application::use_cases::resolve_inputs::inputs;

/// ファイルを Google Drive にアップロードするCLI
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "gdrive-upload")]
#[command(about = "Upload a file to a Google Drive folder", long_about = None)]
pub struct Args {
    /// Local file to upload (overrides INPUT_FILENAME)
    #[arg(long)]
    pub filename: Option<String>,

    /// Name of the file in Drive (overrides INPUT_NAME)
    #[arg(long)]
    pub name: Option<String>,

    /// Target folder id (overrides INPUT_FOLDERID)
    #[arg(long)]
    pub folder_id: Option<String>,

    /// Service account key, base64 or raw JSON (overrides INPUT_CREDENTIALS)
    #[arg(long)]
    pub credentials: Option<String>,

    /// Whether credentials are base64 encoded: "", "true" or "false"
    #[arg(long)]
    pub encoded: Option<String>,

    /// Overwrite files with the same name: "", "true" or "false"
    #[arg(long)]
    pub overwrite: Option<String>,

    /// Config file path
    #[arg(short, long)]
    pub config: Option<String>,
}

impl Args {
    /// フラグで指定された入力を入力名をキーにして返す
    pub fn input_overrides(&self) -> HashMap<String, String> {
        [
            (inputs::FILENAME, &self.filename),
            (inputs::NAME, &self.name),
            (inputs::FOLDER_ID, &self.folder_id),
            (inputs::CREDENTIALS, &self.credentials),
            (inputs::ENCODED, &self.encoded),
            (inputs::OVERWRITE, &self.overwrite),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.as_ref().map(|v| (name.to_string(), v.clone())))
        .collect()
    }
}
