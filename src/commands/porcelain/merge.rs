use crate::areas::repository::{Repository, Tip};
use crate::artifacts::checkout::conflict::{ensure_unobstructed, find_obstructions};
use crate::artifacts::checkout::migration::Migration;
use crate::artifacts::core::errors::{BitletError, BitletResult};
use crate::artifacts::merge::MergeOutcome;
use crate::artifacts::merge::classifier::{MergeAction, classify_all};
use crate::artifacts::merge::conflict::render_conflict;
use crate::artifacts::stage::Stage;
use bytes::Bytes;
use std::path::{Path, PathBuf};

impl Repository {
    /// Merge the tip of `raw_name` into the current branch
    ///
    /// Preconditions are checked in order: the branch exists, nothing is
    /// staged, it is not the current branch, and no untracked working file
    /// would be overwritten. Nothing on disk changes when one fails.
    pub fn merge(&mut self, raw_name: &str) -> BitletResult<MergeOutcome> {
        let other_branch = self.existing_branch(raw_name)?;
        let head = self.head()?;

        if !self.stages().load(&head.branch)?.is_empty() {
            return Err(BitletError::UncommittedChanges);
        }
        if other_branch == head.branch {
            return Err(BitletError::SelfMerge);
        }

        let other = self.tip(&other_branch)?;
        self.check_merge_obstructions(&head, &other)?;

        let split_finder = self.split_finder();

        if split_finder.is_ancestor(&other.oid, &head.oid)? {
            writeln!(
                self.writer(),
                "Given branch is an ancestor of the current branch."
            )?;
            return Ok(MergeOutcome::AlreadyUpToDate);
        }

        if split_finder.is_ancestor(&head.oid, &other.oid)? {
            Migration::new(self, head.commit.tracked(), other.commit.tracked()).apply_changes()?;
            self.refs().update_branch(&head.branch, &other.oid)?;
            self.stages().clear(&head.branch)?;

            tracing::info!(branch = %head.branch, to = %other.oid, "fast-forwarded");
            writeln!(self.writer(), "Current branch fast-forwarded.")?;
            return Ok(MergeOutcome::FastForwarded);
        }

        let split_id = split_finder.find_split_point(&other.oid, &head.oid)?;
        let split = self.database().load_commit(&split_id)?;

        let plan = classify_all(split.tracked(), head.commit.tracked(), other.commit.tracked());
        let mut stage = Stage::default();
        let mut conflicted = false;

        for (path, action) in plan {
            match action {
                MergeAction::KeepHead => {}
                MergeAction::TakeOther => {
                    if let Some(blob_id) = other.commit.blob_for(&path) {
                        let content = self.database().blob_content(blob_id)?;
                        self.workspace().write_file(&path, &content)?;
                        stage.stage(path, blob_id.clone());
                    }
                }
                MergeAction::Delete => {
                    self.workspace().delete_file(&path)?;
                    stage.mark_removed(path);
                }
                MergeAction::Conflict => {
                    let head_content = self.version_content(&head, &path)?;
                    let other_content = self.version_content(&other, &path)?;
                    let content = render_conflict(head_content.as_deref(), other_content.as_deref());

                    let blob_id = self.database().put(content.clone())?;
                    self.workspace().write_file(&path, &content)?;
                    stage.stage(path, blob_id);
                    conflicted = true;
                }
            }
        }

        let message = format!("Merged {} into {}.", other.branch, head.branch);
        let merge_id = self.record_commit(&head, &stage, message, Some(other.oid.clone()))?;

        tracing::info!(%merge_id, split = %split_id, conflicted, "merged");

        if conflicted {
            writeln!(self.writer(), "Encountered a merge conflict.")?;
        }

        Ok(MergeOutcome::Merged { conflicted })
    }

    fn check_merge_obstructions(&self, head: &Tip, other: &Tip) -> BitletResult<()> {
        let working_files = self.workspace().list_files()?;
        let obstructions = find_obstructions(
            working_files.iter().map(PathBuf::as_path),
            head.commit.tracked(),
            other.commit.tracked(),
            |path| self.working_blob_id(path),
        )?;

        ensure_unobstructed(obstructions)
    }

    fn version_content(&self, tip: &Tip, path: &Path) -> BitletResult<Option<Bytes>> {
        tip.commit
            .blob_for(path)
            .map(|blob_id| self.database().blob_content(blob_id))
            .transpose()
    }
}
