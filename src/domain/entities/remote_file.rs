//! # RemoteFile Entity
//!
//! Drive 上のファイルの投影

/// Drive 上のファイル
///
/// 問い合わせ時点のリモート状態。更新時には古くなっている可能性がある。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteFile {
    pub id: String,
    pub name: String,
    pub parents: Vec<String>,
}

impl RemoteFile {
    pub fn new(id: impl Into<String>, name: impl Into<String>, parents: Vec<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            parents,
        }
    }
}

/// 新規作成するファイルのメタデータ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFile {
    pub name: String,
    pub parents: Vec<String>,
}

impl NewFile {
    /// フォルダ直下に置くファイルのメタデータを作成
    pub fn in_folder(name: impl Into<String>, folder_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parents: vec![folder_id.into()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_file_in_folder() {
        let file = NewFile::in_folder("a.txt", "folder-1");
        assert_eq!(file.name, "a.txt");
        assert_eq!(file.parents, vec!["folder-1".to_string()]);
    }
}
