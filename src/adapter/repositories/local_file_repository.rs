//! Local File Repository Implementation
//!
//! FileRepositoryのファイルシステム実装

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::entities::local_file::LocalFile;
use crate::domain::repositories::file_repository::FileRepository;

/// ファイルシステムベースのファイルリポジトリ
pub struct LocalFileRepository;

impl LocalFileRepository {
    /// 新しいリポジトリを作成
    pub fn new() -> Self {
        Self
    }

    /// ファイルを読み込む（同期処理）
    ///
    /// `~` はホームディレクトリに展開する。ベース名は入力されたパスから取り、
    /// Content-Type はその拡張子から推測する。
    fn read_sync(path: &Path) -> Result<LocalFile> {
        let display = path.to_string_lossy();
        let expanded = PathBuf::from(shellexpand::tilde(&display).into_owned());

        if expanded.is_dir() {
            return Err(anyhow!("{} is a directory", expanded.display()));
        }

        let content = fs::read(&expanded)
            .with_context(|| format!("Failed to read file: {}", expanded.display()))?;

        let content_type = mime_guess::from_path(&expanded).first_or_octet_stream();
        debug!(
            "Read {} bytes ({}) from {}",
            content.len(),
            content_type,
            expanded.display()
        );
        Ok(LocalFile::new(path, content).with_content_type(content_type.essence_str()))
    }
}

#[async_trait]
impl FileRepository for LocalFileRepository {
    async fn open(&self, path: &Path) -> Result<LocalFile> {
        let path = path.to_path_buf();
        tokio::task::spawn_blocking(move || Self::read_sync(&path))
            .await
            .map_err(|e| anyhow!("Failed to spawn blocking task: {}", e))?
    }
}

impl Default for LocalFileRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_open_reads_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.csv");
        fs::write(&path, b"a,b\n1,2\n").unwrap();

        let file = LocalFileRepository::new().open(&path).await.unwrap();
        assert_eq!(file.base_name(), "report.csv");
        assert_eq!(file.content(), b"a,b\n1,2\n");
        assert_eq!(file.path(), path.as_path());
        assert_eq!(file.content_type(), "text/csv");
    }

    #[tokio::test]
    async fn test_open_unknown_extension_is_octet_stream() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("artifact.unknownext");
        fs::write(&path, b"\x00\x01").unwrap();

        let file = LocalFileRepository::new().open(&path).await.unwrap();
        assert_eq!(file.content_type(), "application/octet-stream");
    }

    #[tokio::test]
    async fn test_open_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.txt");

        let err = LocalFileRepository::new().open(&path).await.unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }

    #[tokio::test]
    async fn test_open_directory_fails() {
        let dir = TempDir::new().unwrap();
        let err = LocalFileRepository::new().open(dir.path()).await.unwrap_err();
        assert!(err.to_string().contains("is a directory"));
    }

    #[tokio::test]
    async fn test_open_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.bin");
        fs::write(&path, b"").unwrap();

        let file = LocalFileRepository::new().open(&path).await.unwrap();
        assert!(file.is_empty());
    }
}
