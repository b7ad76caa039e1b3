use crate::areas::repository::Repository;
use crate::artifacts::checkout::migration::Migration;
use crate::artifacts::core::errors::BitletResult;

impl Repository {
    /// Move the current branch to an arbitrary commit
    ///
    /// Files tracked by the current tip but not by the target are deleted.
    pub fn reset(&mut self, raw_id: &str) -> BitletResult<()> {
        let target_id = self.resolve_commit_id(raw_id)?;
        let target = self.database().load_commit(&target_id)?;
        let head = self.head()?;

        Migration::new(self, head.commit.tracked(), target.tracked()).apply_changes()?;

        self.stages().clear(&head.branch)?;
        self.refs().update_branch(&head.branch, &target_id)?;

        tracing::info!(branch = %head.branch, from = %head.oid, to = %target_id, "reset branch");

        Ok(())
    }
}
