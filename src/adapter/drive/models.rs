//! Drive API Models
//!
//! `google_drive3::api::File` とドメインのファイル表現の相互変換

use google_drive3::api::File;

use crate::domain::entities::remote_file::{NewFile, RemoteFile};

/// Fields requested for every file resource
pub const FILE_FIELDS: &str = "id,name,parents";
/// Fields requested for a files.list page
pub const LIST_FIELDS: &str = "nextPageToken,files(id,name,parents)";
pub const LINK_FIELDS: &str = "webContentLink";

/// Metadata for a create: name and parent folder
pub fn create_metadata(file: &NewFile) -> File {
    File {
        name: Some(file.name.clone()),
        parents: Some(file.parents.clone()),
        ..Default::default()
    }
}

/// Metadata for an update: rename only, parents untouched
pub fn rename_metadata(name: &str) -> File {
    File {
        name: Some(name.to_string()),
        ..Default::default()
    }
}

/// Project a Drive file resource onto the domain
///
/// Absent fields become empty; `FILE_FIELDS` asks for all of them.
pub fn to_remote_file(file: File) -> RemoteFile {
    RemoteFile::new(
        file.id.unwrap_or_default(),
        file.name.unwrap_or_default(),
        file.parents.unwrap_or_default(),
    )
}
