//! Repository Implementations
//!
//! Domain層のRepositoryトレイトの実装

pub mod local_file_repository;
