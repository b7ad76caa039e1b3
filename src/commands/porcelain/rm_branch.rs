use crate::areas::repository::Repository;
use crate::artifacts::core::errors::{BitletError, BitletResult};

impl Repository {
    /// Delete a branch pointer and its working state; commits stay in the store
    pub fn remove_branch(&mut self, raw_name: &str) -> BitletResult<()> {
        let branch_name = self.existing_branch(raw_name)?;

        if self.refs().is_current_branch(&branch_name)? {
            return Err(BitletError::RemoveCurrentBranch);
        }

        let oid = self.refs().delete_branch(&branch_name)?;
        self.stages().clear(&branch_name)?;

        tracing::info!(branch = %branch_name, tip = %oid, "deleted branch");

        Ok(())
    }
}
