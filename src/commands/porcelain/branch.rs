use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::core::errors::BitletResult;

impl Repository {
    /// Create a branch at the current tip without switching to it
    pub fn branch(&mut self, raw_name: &str) -> BitletResult<()> {
        let branch_name = BranchName::try_parse(raw_name.to_string())?;
        let head = self.head()?;

        self.refs().create_branch(&branch_name, &head.oid)?;

        Ok(())
    }
}
