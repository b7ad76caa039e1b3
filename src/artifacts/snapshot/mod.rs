//! Snapshot builder
//!
//! Folds a branch's working state into its tip's file table to produce the
//! `tracked` table of the next commit. Removals are applied first, then staged
//! entries override whatever is left.

use crate::artifacts::core::errors::{BitletError, BitletResult};
use crate::artifacts::objects::commit::{Commit, FileTable};
use crate::artifacts::stage::Stage;

#[derive(Debug)]
pub struct SnapshotBuilder<'r> {
    parent: Option<&'r Commit>,
    stage: &'r Stage,
    allow_empty: bool,
}

impl<'r> SnapshotBuilder<'r> {
    pub fn new(parent: Option<&'r Commit>, stage: &'r Stage) -> Self {
        SnapshotBuilder {
            parent,
            stage,
            allow_empty: false,
        }
    }

    /// Accept a stage with no changes
    ///
    /// Merge commits are recorded even when both sides already converged.
    pub fn allow_empty(mut self) -> Self {
        self.allow_empty = true;
        self
    }

    pub fn build(&self) -> BitletResult<FileTable> {
        let Some(parent) = self.parent else {
            return Ok(FileTable::new());
        };

        if self.stage.is_empty() && !self.allow_empty {
            return Err(BitletError::NothingToCommit);
        }

        let mut tracked = parent
            .tracked()
            .iter()
            .filter(|(path, _)| !self.stage.is_removed(path))
            .map(|(path, oid)| (path.clone(), oid.clone()))
            .collect::<FileTable>();

        tracked.extend(
            self.stage
                .staged()
                .iter()
                .map(|(path, oid)| (path.clone(), oid.clone())),
        );

        Ok(tracked)
    }
}
