//! # Action Environment Trait
//!
//! CI 実行環境（入力・マスク・出力）を抽象化

use anyhow::Result;

#[cfg(test)]
use mockall::automock;

/// アクション実行環境
///
/// 入力の取得、秘密情報のマスク登録、ステップ出力の設定を担当する
#[cfg_attr(test, automock)]
pub trait ActionEnvironment: Send + Sync {
    /// 入力値を取得（未設定なら空文字列）
    fn get_input(&self, name: &str) -> String;

    /// 値をマスク対象に登録
    ///
    /// 登録後、その値はログに平文で現れない
    fn add_mask(&self, value: &str);

    /// ステップ出力を設定
    fn set_output(&self, name: &str, value: &str) -> Result<()>;
}
