use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::core::errors::BitletResult;
use crate::artifacts::status::file_change::WorkspaceChangeType;
use colored::Colorize;
use derive_new::new;
use std::collections::{BTreeMap, BTreeSet};
use std::io::Write;
use std::path::PathBuf;

pub type ChangeSet = BTreeMap<PathBuf, WorkspaceChangeType>;
pub type FileSet = BTreeSet<PathBuf>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusInfo {
    pub branches: Vec<BranchName>,
    pub current_branch: BranchName,
    pub staged_files: FileSet,
    pub removed_files: FileSet,
    pub workspace_changeset: ChangeSet,
    pub untracked_files: FileSet,
}

#[derive(new)]
pub struct Status<'r> {
    repository: &'r Repository,
}

impl<'r> Status<'r> {
    pub fn initialize(&self) -> BitletResult<StatusInfo> {
        let head = self.repository.head()?;
        let stage = self.repository.stages().load(&head.branch)?;
        let working_files = self
            .repository
            .workspace()
            .list_files()?
            .into_iter()
            .collect::<FileSet>();

        let mut workspace_changeset = ChangeSet::new();

        for (path, staged_oid) in stage.staged() {
            if !working_files.contains(path) {
                workspace_changeset.insert(path.clone(), WorkspaceChangeType::Deleted);
            } else if &self.repository.working_blob_id(path)? != staged_oid {
                workspace_changeset.insert(path.clone(), WorkspaceChangeType::Modified);
            }
        }

        for (path, tracked_oid) in head.commit.tracked() {
            if stage.is_staged(path) || stage.is_removed(path) {
                continue;
            }

            if !working_files.contains(path) {
                workspace_changeset.insert(path.clone(), WorkspaceChangeType::Deleted);
            } else if &self.repository.working_blob_id(path)? != tracked_oid {
                workspace_changeset.insert(path.clone(), WorkspaceChangeType::Modified);
            }
        }

        let untracked_files = working_files
            .into_iter()
            .filter(|path| {
                stage.is_removed(path) || !(stage.is_staged(path) || head.commit.is_tracked(path))
            })
            .collect::<FileSet>();

        Ok(StatusInfo {
            branches: self.repository.refs().list_branches()?,
            current_branch: head.branch,
            staged_files: stage.staged().keys().cloned().collect(),
            removed_files: stage.removed().clone(),
            workspace_changeset,
            untracked_files,
        })
    }
}

impl StatusInfo {
    pub fn render(&self, writer: &mut impl Write) -> std::io::Result<()> {
        writeln!(writer, "=== Branches ===")?;
        for branch in &self.branches {
            if branch == &self.current_branch {
                writeln!(writer, "{}", format!("*{}", branch).green())?;
            } else {
                writeln!(writer, "{}", branch)?;
            }
        }
        writeln!(writer)?;

        writeln!(writer, "=== Staged Files ===")?;
        for path in &self.staged_files {
            writeln!(writer, "{}", path.display().to_string().green())?;
        }
        writeln!(writer)?;

        writeln!(writer, "=== Removed Files ===")?;
        for path in &self.removed_files {
            writeln!(writer, "{}", path.display().to_string().red())?;
        }
        writeln!(writer)?;

        writeln!(writer, "=== Modifications Not Staged For Commit ===")?;
        for (path, change) in &self.workspace_changeset {
            writeln!(writer, "{} {}", path.display(), change)?;
        }
        writeln!(writer)?;

        writeln!(writer, "=== Untracked Files ===")?;
        for path in &self.untracked_files {
            writeln!(writer, "{}", path.display().to_string().red())?;
        }
        writeln!(writer)?;

        Ok(())
    }
}
