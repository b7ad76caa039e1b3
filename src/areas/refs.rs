//! Branch table and HEAD
//!
//! Branches are plain files under `refs/heads/` holding the 40-hex id of
//! their tip. HEAD always names a branch:
//!
//! ```text
//! ref: refs/heads/<branch>
//! ```

use crate::artifacts::branch::HEAD_SYMREF_REGEX;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::core::errors::{BitletError, BitletResult};
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use derive_new::new;
use file_guard::Lock;
use std::io::Write;
use std::ops::DerefMut;
use std::path::Path;
use walkdir::WalkDir;

/// Branch and HEAD manager
///
/// Writes take an exclusive lock on the file being replaced.
#[derive(Debug, new)]
pub struct Refs {
    /// Path to the metadata directory (typically `.bitlet`)
    path: Box<Path>,
}

impl Refs {
    /// Branch HEAD points at
    pub fn current_branch(&self) -> anyhow::Result<BranchName> {
        let head_path = self.head_path();
        let content = std::fs::read_to_string(&head_path)
            .with_context(|| format!("failed to read HEAD at {:?}", head_path))?;

        let captures = regex::Regex::new(HEAD_SYMREF_REGEX)?
            .captures(content.trim())
            .with_context(|| format!("malformed HEAD content {:?}", content.trim()))?;

        Ok(BranchName::try_parse(captures[1].to_string())?)
    }

    pub fn is_current_branch(&self, branch_name: &BranchName) -> anyhow::Result<bool> {
        Ok(&self.current_branch()? == branch_name)
    }

    pub fn set_head(&self, branch_name: &BranchName) -> anyhow::Result<()> {
        tracing::debug!(branch = %branch_name, "moving HEAD");
        self.update_ref_file(&self.head_path(), format!("ref: refs/heads/{}", branch_name))
    }

    pub fn branch_exists(&self, branch_name: &BranchName) -> bool {
        self.heads_path().join(branch_name.as_ref()).is_file()
    }

    pub fn read_branch(&self, branch_name: &BranchName) -> anyhow::Result<Option<ObjectId>> {
        let branch_path = self.heads_path().join(branch_name.as_ref());
        if !branch_path.is_file() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&branch_path)
            .with_context(|| format!("failed to read ref file at {:?}", branch_path))?;

        Ok(Some(ObjectId::try_parse(content.trim().to_string())?))
    }

    /// Point a branch at `oid`, creating it if needed
    pub fn update_branch(&self, branch_name: &BranchName, oid: &ObjectId) -> anyhow::Result<()> {
        tracing::debug!(branch = %branch_name, %oid, "moving branch");
        let branch_path = self.heads_path().join(branch_name.as_ref());

        self.update_ref_file(&branch_path, oid.as_ref().to_string())
    }

    pub fn create_branch(&self, branch_name: &BranchName, oid: &ObjectId) -> BitletResult<()> {
        if self.branch_exists(branch_name) {
            return Err(BitletError::BranchExists {
                name: branch_name.to_string(),
            });
        }

        Ok(self.update_branch(branch_name, oid)?)
    }

    pub fn delete_branch(&self, branch_name: &BranchName) -> BitletResult<ObjectId> {
        let branch_path = self.heads_path().join(branch_name.as_ref());

        let oid = self
            .read_branch(branch_name)?
            .ok_or_else(|| BitletError::NoSuchBranch {
                name: branch_name.to_string(),
            })?;

        std::fs::remove_file(&branch_path)
            .with_context(|| format!("failed to delete branch file at {:?}", branch_path))?;
        self.prune_branch_empty_parent_dirs(&branch_path)?;

        Ok(oid)
    }

    /// All branch names, sorted
    pub fn list_branches(&self) -> anyhow::Result<Vec<BranchName>> {
        let heads_path = self.heads_path();

        let mut branches = WalkDir::new(&heads_path)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| {
                let relative_path = entry.path().strip_prefix(&heads_path).ok()?;
                BranchName::try_parse(relative_path.to_string_lossy().to_string()).ok()
            })
            .collect::<Vec<_>>();

        branches.sort();
        Ok(branches)
    }

    fn update_ref_file(&self, path: &Path, raw_ref: String) -> anyhow::Result<()> {
        std::fs::create_dir_all(path.parent().with_context(|| {
            format!("failed to create parent directories for ref file at {:?}", path)
        })?)?;

        let mut ref_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .with_context(|| format!("failed to open ref file at {:?}", path))?;
        let mut lock = file_guard::lock(&mut ref_file, Lock::Exclusive, 0, 1)?;
        lock.deref_mut().write_all(raw_ref.as_bytes())?;

        Ok(())
    }

    fn prune_branch_empty_parent_dirs(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent()
            && parent != self.heads_path().as_ref()
            && parent.read_dir()?.next().is_none()
        {
            std::fs::remove_dir(parent).with_context(|| {
                format!("failed to remove empty branch directory at {:?}", parent)
            })?;
            self.prune_branch_empty_parent_dirs(parent)?;
        }

        Ok(())
    }

    pub fn head_path(&self) -> Box<Path> {
        self.path.join("HEAD").into_boxed_path()
    }

    pub fn refs_path(&self) -> Box<Path> {
        self.path.join("refs").into_boxed_path()
    }

    pub fn heads_path(&self) -> Box<Path> {
        self.refs_path().join("heads").into_boxed_path()
    }
}
