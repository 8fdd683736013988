//! # File Repository Trait
//!
//! ローカルファイルの読み込みを抽象化

use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;

use crate::domain::entities::local_file::LocalFile;

/// ファイルリポジトリ
#[async_trait]
pub trait FileRepository: Send + Sync {
    /// ファイルを開いて中身を全て読み込む
    ///
    /// # Errors
    ///
    /// ファイルが存在しない、または読めない場合にエラーを返す
    async fn open(&self, path: &Path) -> Result<LocalFile>;
}
