use crate::areas::repository::Repository;
use crate::artifacts::core::errors::{BitletError, BitletResult};
use crate::artifacts::log::all_commits;
use crate::artifacts::objects::object_id::ObjectId;

impl Repository {
    /// Ids of every commit whose message is exactly `message`
    ///
    /// `message` is trimmed the way `commit` trims what it records.
    pub fn find(&self, message: &str) -> BitletResult<Vec<ObjectId>> {
        let message = message.trim();
        let matches = all_commits(self.database())?
            .into_iter()
            .filter(|(_, commit)| commit.message() == message)
            .map(|(oid, _)| oid)
            .collect::<Vec<_>>();

        if matches.is_empty() {
            return Err(BitletError::NoCommitWithMessage);
        }

        for oid in &matches {
            writeln!(self.writer(), "{}", oid)?;
        }

        Ok(matches)
    }
}
