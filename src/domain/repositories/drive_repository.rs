//! # Drive Repository Trait
//!
//! Drive 上のファイル操作を抽象化

use anyhow::Result;
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::local_file::LocalFile;
use crate::domain::entities::remote_file::{NewFile, RemoteFile};
use crate::domain::services::file_query::FileQuery;

/// Drive リポジトリ
///
/// 認証済みセッションを通して Drive のファイルを検索・作成・更新する
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DriveRepository: Send + Sync {
    /// 条件に一致するファイルを全て返す（共有ドライブを含む）
    async fn find_files(&self, query: &FileQuery) -> Result<Vec<RemoteFile>>;

    /// ファイルを新規作成
    ///
    /// # Arguments
    ///
    /// * `metadata` - 名前と親フォルダ
    /// * `media` - 中身と Content-Type
    async fn create_file(&self, metadata: &NewFile, media: &LocalFile) -> Result<RemoteFile>;

    /// 既存ファイルの中身を置き換え、名前を付け直す（親フォルダは変えない）
    async fn update_file(&self, file_id: &str, name: &str, media: &LocalFile)
        -> Result<RemoteFile>;

    /// ファイルのダウンロードリンク（webContentLink）を取得
    ///
    /// リンクが存在しないファイルでは `None`
    async fn download_link(&self, file_id: &str) -> Result<Option<String>>;
}
