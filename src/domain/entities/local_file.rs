//! # LocalFile Value Object
//!
//! 読み込み済みのアップロード元ファイル

use std::path::{Path, PathBuf};

/// 種類が分からないファイルの Content-Type
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// ローカルファイル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalFile {
    path: PathBuf,
    base_name: String,
    content: Vec<u8>,
    content_type: String,
}

impl LocalFile {
    /// 新しいローカルファイルを作成
    ///
    /// ベース名はパスの最後の要素。取れない場合はパス全体を使う。
    pub fn new(path: impl Into<PathBuf>, content: Vec<u8>) -> Self {
        let path = path.into();
        let base_name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| path.to_string_lossy().to_string());

        Self {
            path,
            base_name,
            content,
            content_type: DEFAULT_CONTENT_TYPE.to_string(),
        }
    }

    /// Content-Type を指定する（空なら既定値のまま）
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        let content_type = content_type.into();
        if !content_type.is_empty() {
            self.content_type = content_type;
        }
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// パスの最後の要素（ファイル名）
    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    /// ファイルの中身
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// アップロード時の Content-Type
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.content.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
