//! # gdrive-upload
//!
//! CI パイプラインから1つのファイルを Google Drive にアップロードするツール
//!
//! このプロジェクトはクリーンアーキテクチャを採用しており、以下の4層で構成されています：
//!
//! - **Domain層**: アップロード要求、エラー分類、Repository trait（外部依存なし）
//! - **Application層**: 入力解決と作成 / 更新判定のユースケース
//! - **Adapter層**: GitHub Actions, Google 認証, Drive API, ファイルシステム
//! - **Driver層**: CLI、依存性注入

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
// カバレッジ計測時に外部サービス依存コードを除外するために使用
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

// Domain層（純粋なビジネスロジック）
pub mod domain;

// Application層（ユースケース）
pub mod application;

// Adapter層（Infrastructure）
pub mod adapter;

// Driver層（Presentation）
pub mod driver;
