//! Working state of a branch
//!
//! Changes recorded for the next commit live here, keyed by branch, instead of
//! on the tip commit itself. A [`Stage`] holds two disjoint sets:
//!
//! - `staged`: path to blob id, the content the next commit will record
//! - `removed`: paths the next commit will stop tracking
//!
//! ## File Format
//!
//! ```text
//! Header (16 bytes):
//!   - Signature: "STAG" (4 bytes)
//!   - Version: 1 (4 bytes)
//!   - Staged entry count (4 bytes)
//!   - Removed entry count (4 bytes)
//!
//! Staged entries:
//!   - Blob id (20 bytes)
//!   - Path length (2 bytes) and path bytes
//!
//! Removed entries:
//!   - Path length (2 bytes) and path bytes
//!
//! Checksum (20 bytes):
//!   - SHA-1 hash of all preceding bytes
//! ```

pub mod checksum;
pub mod stage_entry;
pub mod stage_header;

use crate::artifacts::objects::commit::FileTable;
use crate::artifacts::objects::object_id::ObjectId;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Size of SHA-1 checksum in bytes
pub const CHECKSUM_SIZE: usize = 20;

/// Size of stage header in bytes
pub const HEADER_SIZE: usize = 16;

/// Stage file signature
pub const SIGNATURE: &str = "STAG";

/// Stage file format version
pub const VERSION: u32 = 1;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stage {
    staged: FileTable,
    removed: BTreeSet<PathBuf>,
}

impl Stage {
    pub fn from_parts(staged: FileTable, removed: BTreeSet<PathBuf>) -> Self {
        let mut stage = Stage::default();
        for path in removed {
            stage.mark_removed(path);
        }
        for (path, oid) in staged {
            stage.stage(path, oid);
        }
        stage
    }

    pub fn staged(&self) -> &FileTable {
        &self.staged
    }

    pub fn removed(&self) -> &BTreeSet<PathBuf> {
        &self.removed
    }

    pub fn is_empty(&self) -> bool {
        self.staged.is_empty() && self.removed.is_empty()
    }

    pub fn is_staged(&self, path: &Path) -> bool {
        self.staged.contains_key(path)
    }

    pub fn is_removed(&self, path: &Path) -> bool {
        self.removed.contains(path)
    }

    /// Record `oid` as the next content of `path`
    pub fn stage(&mut self, path: PathBuf, oid: ObjectId) {
        self.removed.remove(&path);
        self.staged.insert(path, oid);
    }

    /// Drop a staged entry, returning whether one existed
    pub fn unstage(&mut self, path: &Path) -> bool {
        self.staged.remove(path).is_some()
    }

    /// Mark `path` to stop being tracked by the next commit
    pub fn mark_removed(&mut self, path: PathBuf) {
        self.staged.remove(&path);
        self.removed.insert(path);
    }

    /// Undo a removal mark, returning whether one existed
    pub fn unmark_removed(&mut self, path: &Path) -> bool {
        self.removed.remove(path)
    }

    pub fn clear(&mut self) {
        self.staged.clear();
        self.removed.clear();
    }
}
