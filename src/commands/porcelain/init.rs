use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::core::errors::{BitletError, BitletResult};
use crate::artifacts::objects::commit::Commit;
use anyhow::Context;
use std::fs;

impl Repository {
    pub fn init(&mut self) -> BitletResult<()> {
        if self.is_initialized() {
            return Err(BitletError::AlreadyInitialized);
        }

        fs::create_dir_all(self.database().objects_path())
            .context("Failed to create .bitlet/objects directory")?;

        fs::create_dir_all(self.refs().heads_path())
            .context("Failed to create .bitlet/refs/heads directory")?;

        fs::create_dir_all(self.metadata_path().join("stages"))
            .context("Failed to create .bitlet/stages directory")?;

        let root_oid = self
            .database()
            .put_commit(&Commit::root())
            .context("Failed to store the initial commit")?;

        let default_branch = BranchName::default_branch();
        self.refs()
            .update_branch(&default_branch, &root_oid)
            .context("Failed to create the default branch")?;
        self.refs()
            .set_head(&default_branch)
            .context("Failed to create initial HEAD reference")?;

        tracing::info!(root = %root_oid, "initialized repository");

        writeln!(
            self.writer(),
            "Initialized empty bitlet repository in {}",
            self.metadata_path().display()
        )?;

        Ok(())
    }
}
