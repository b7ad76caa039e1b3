//! Snapshot migration
//!
//! Moves the working directory from the `from` snapshot to the `to` snapshot:
//!
//! 1. Detect untracked files the move would clobber, for every path, before
//!    touching anything
//! 2. Plan the file system actions (add, modify, delete)
//! 3. Apply them to the workspace
//!
//! Every file of the target snapshot is written, including ones whose blob id
//! did not change, so local edits to tracked files are discarded.

use crate::areas::repository::Repository;
use crate::artifacts::checkout::conflict::{ensure_unobstructed, find_obstructions};
use crate::artifacts::core::errors::BitletResult;
use crate::artifacts::objects::commit::FileTable;
use crate::artifacts::objects::object_id::ObjectId;
use bytes::Bytes;
use std::collections::HashMap;
use std::path::PathBuf;

/// Type of file system action required for checkout
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ActionType {
    /// Create new file
    Add,
    /// Delete file
    Delete,
    /// Overwrite a file both snapshots track
    Modify,
}

/// Set of planned actions grouped by type
pub type ActionsSet = HashMap<ActionType, Vec<(PathBuf, Option<ObjectId>)>>;

pub struct Migration<'r> {
    repository: &'r Repository,
    from: &'r FileTable,
    to: &'r FileTable,
    actions: ActionsSet,
}

impl<'r> Migration<'r> {
    pub fn new(repository: &'r Repository, from: &'r FileTable, to: &'r FileTable) -> Self {
        let actions = HashMap::from([
            (ActionType::Add, Vec::new()),
            (ActionType::Delete, Vec::new()),
            (ActionType::Modify, Vec::new()),
        ]);

        Self {
            repository,
            from,
            to,
            actions,
        }
    }

    pub fn actions(&self) -> &ActionsSet {
        &self.actions
    }

    pub fn apply_changes(&mut self) -> BitletResult<()> {
        self.check_for_conflicts()?;
        self.plan_changes();
        self.repository.workspace().apply_migration(self)?;

        Ok(())
    }

    fn check_for_conflicts(&self) -> BitletResult<()> {
        let working_files = self.repository.workspace().list_files()?;
        let obstructions = find_obstructions(
            working_files.iter().map(PathBuf::as_path),
            self.from,
            self.to,
            |path| self.repository.working_blob_id(path),
        )?;

        ensure_unobstructed(obstructions)
    }

    fn plan_changes(&mut self) {
        for path in self.from.keys() {
            if !self.to.contains_key(path) {
                self.record_change(ActionType::Delete, path.clone(), None);
            }
        }

        for (path, oid) in self.to {
            let action = if self.from.contains_key(path) {
                ActionType::Modify
            } else {
                ActionType::Add
            };
            self.record_change(action, path.clone(), Some(oid.clone()));
        }
    }

    fn record_change(&mut self, action: ActionType, path: PathBuf, oid: Option<ObjectId>) {
        self.actions.entry(action).or_default().push((path, oid));
    }

    pub fn load_blob_data(&self, object_id: &ObjectId) -> anyhow::Result<Bytes> {
        Ok(self.repository.database().blob_content(object_id)?)
    }
}
