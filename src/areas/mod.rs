//! Persisted repository areas
//!
//! - `database`: object store for blobs and commits
//! - `refs`: branch table and HEAD
//! - `stages`: per-branch staged additions and removals
//! - `repository`: the handle every operation runs against
//! - `workspace`: working directory file system operations

pub mod database;
pub mod refs;
pub mod repository;
pub mod stages;
pub mod workspace;
