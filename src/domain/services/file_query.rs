//! # File Query Value Object
//!
//! 「名前 + 親フォルダ」での完全一致検索条件
//!
//! Drive には名前の一意制約がないため、この組を事実上の冪等キーとして扱う。

use std::fmt;

/// ファイル検索条件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileQuery {
    pub name: String,
    pub folder_id: String,
}

impl FileQuery {
    pub fn new(name: impl Into<String>, folder_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            folder_id: folder_id.into(),
        }
    }
}

/// Drive の検索構文（`q` パラメータ）として出力
impl fmt::Display for FileQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "name = '{}' and '{}' in parents",
            escape_literal(&self.name),
            escape_literal(&self.folder_id)
        )
    }
}

/// 文字列リテラル内の `\` と `'` をエスケープ
fn escape_literal(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if c == '\\' || c == '\'' {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_format() {
        let query = FileQuery::new("a.txt", "folder-1");
        assert_eq!(query.to_string(), "name = 'a.txt' and 'folder-1' in parents");
    }

    #[test]
    fn test_query_escapes_quotes() {
        let query = FileQuery::new("it's.txt", "folder-1");
        assert_eq!(
            query.to_string(),
            r"name = 'it\'s.txt' and 'folder-1' in parents"
        );
    }

    #[test]
    fn test_query_escapes_backslash() {
        let query = FileQuery::new(r"a\b", "f");
        assert_eq!(query.to_string(), r"name = 'a\\b' and 'f' in parents");
    }
}
