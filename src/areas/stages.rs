//! Per-branch working state
//!
//! Each branch owns one stage file at `.bitlet/stages/<branch>`. A missing
//! file means nothing is staged. Reads take a shared lock, writes an exclusive
//! one, and every file ends with a SHA-1 of its contents that is verified on
//! load.

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::commit::FileTable;
use crate::artifacts::objects::object::{Packable, Unpackable};
use crate::artifacts::stage::checksum::Checksum;
use crate::artifacts::stage::stage_entry::StageEntry;
use crate::artifacts::stage::stage_header::StageHeader;
use crate::artifacts::stage::{HEADER_SIZE, Stage};
use anyhow::Context;
use std::collections::BTreeSet;
use std::ops::DerefMut;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct StageArea {
    /// Path to the stages directory (typically `.bitlet/stages`)
    path: Box<Path>,
}

impl StageArea {
    pub fn new(path: Box<Path>) -> Self {
        StageArea { path }
    }

    fn stage_path(&self, branch_name: &BranchName) -> PathBuf {
        self.path.join(branch_name.as_ref())
    }

    pub fn load(&self, branch_name: &BranchName) -> anyhow::Result<Stage> {
        let stage_path = self.stage_path(branch_name);
        if !stage_path.is_file() {
            return Ok(Stage::default());
        }

        let mut stage_file = std::fs::OpenOptions::new()
            .read(true)
            .open(&stage_path)
            .with_context(|| format!("failed to open stage file at {:?}", stage_path))?;
        let mut lock = file_guard::lock(&mut stage_file, file_guard::Lock::Shared, 0, 1)?;

        if lock.deref_mut().metadata()?.len() == 0 {
            return Ok(Stage::default());
        }

        let mut reader = Checksum::new(lock);

        let header_bytes = reader.read(HEADER_SIZE)?;
        let header = StageHeader::deserialize(std::io::Cursor::new(header_bytes))?;
        header.validate()?;

        let mut staged = FileTable::new();
        for _ in 0..header.staged_count {
            if let StageEntry::Staged { path, oid } = StageEntry::read_staged(&mut reader)? {
                staged.insert(path, oid);
            }
        }

        let mut removed = BTreeSet::new();
        for _ in 0..header.removed_count {
            if let StageEntry::Removed { path } = StageEntry::read_removed(&mut reader)? {
                removed.insert(path);
            }
        }

        reader
            .verify()
            .with_context(|| format!("corrupt stage file at {:?}", stage_path))?;

        Ok(Stage::from_parts(staged, removed))
    }

    pub fn save(&self, branch_name: &BranchName, stage: &Stage) -> anyhow::Result<()> {
        if stage.is_empty() {
            return self.clear(branch_name);
        }

        let stage_path = self.stage_path(branch_name);
        if let Some(parent) = stage_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut stage_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&stage_path)
            .with_context(|| format!("failed to open stage file at {:?}", stage_path))?;
        let lock = file_guard::lock(&mut stage_file, file_guard::Lock::Exclusive, 0, 1)?;

        let mut writer = Checksum::new(lock);

        let header = StageHeader::for_counts(stage.staged().len(), stage.removed().len());
        writer.write(&header.serialize()?)?;

        for (path, oid) in stage.staged() {
            let entry = StageEntry::Staged {
                path: path.clone(),
                oid: oid.clone(),
            };
            writer.write(&entry.serialize()?)?;
        }

        for path in stage.removed() {
            let entry = StageEntry::Removed { path: path.clone() };
            writer.write(&entry.serialize()?)?;
        }

        writer.write_checksum()
    }

    /// Forget everything staged on a branch
    pub fn clear(&self, branch_name: &BranchName) -> anyhow::Result<()> {
        let stage_path = self.stage_path(branch_name);

        if stage_path.is_file() {
            std::fs::remove_file(&stage_path)
                .with_context(|| format!("failed to remove stage file at {:?}", stage_path))?;
        }

        Ok(())
    }
}
