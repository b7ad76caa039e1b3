use crate::areas::repository::Repository;
use crate::artifacts::checkout::migration::Migration;
use crate::artifacts::core::errors::{BitletError, BitletResult};
use std::path::PathBuf;

impl Repository {
    /// Overwrite one working file with its version in a commit
    ///
    /// Without `commit_id` the current tip is used. The stage is left alone.
    pub fn checkout_file(&self, commit_id: Option<&str>, raw_path: &str) -> BitletResult<()> {
        let path = self
            .workspace()
            .normalize(raw_path)
            .ok_or_else(|| BitletError::PathNotInCommit {
                path: PathBuf::from(raw_path),
            })?;

        let commit = match commit_id {
            Some(commit_id) => self.commit_by_id(commit_id)?,
            None => self.head()?.commit,
        };

        let blob_id = commit
            .blob_for(&path)
            .ok_or_else(|| BitletError::PathNotInCommit { path: path.clone() })?;
        let content = self.database().blob_content(blob_id)?;

        self.workspace().write_file(&path, &content)?;

        Ok(())
    }

    /// Switch HEAD to another branch, rewriting the working directory
    pub fn checkout_branch(&mut self, raw_name: &str) -> BitletResult<()> {
        let target_branch = self.existing_branch(raw_name)?;

        if self.refs().is_current_branch(&target_branch)? {
            return Err(BitletError::CheckoutCurrentBranch);
        }

        let head = self.head()?;
        let target = self.tip(&target_branch)?;

        Migration::new(self, head.commit.tracked(), target.commit.tracked()).apply_changes()?;

        self.stages().clear(&target.branch)?;
        self.refs().set_head(&target.branch)?;

        tracing::info!(from = %head.branch, to = %target.branch, "switched branch");

        Ok(())
    }
}
