use crate::areas::repository::Repository;
use crate::artifacts::core::errors::BitletResult;
use crate::artifacts::log::{History, all_commits, format_entry};

impl Repository {
    /// History of the current branch, following primary parents only
    pub fn log(&self) -> BitletResult<()> {
        let head = self.head()?;

        for entry in History::new(self.database(), head.oid) {
            let (oid, commit) = entry?;
            write!(self.writer(), "{}", format_entry(&oid, &commit))?;
        }

        Ok(())
    }

    pub fn global_log(&self) -> BitletResult<()> {
        for (oid, commit) in all_commits(self.database())? {
            write!(self.writer(), "{}", format_entry(&oid, &commit))?;
        }

        Ok(())
    }
}
