use crate::areas::repository::{Repository, Tip};
use crate::artifacts::core::errors::{BitletError, BitletResult};
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::snapshot::SnapshotBuilder;
use crate::artifacts::stage::Stage;

impl Repository {
    pub fn commit(&mut self, message: &str) -> BitletResult<ObjectId> {
        let message = message.trim().to_string();
        if message.is_empty() {
            return Err(BitletError::EmptyMessage);
        }

        let head = self.head()?;
        let stage = self.stages().load(&head.branch)?;

        let commit_id = self.record_commit(&head, &stage, message, None)?;
        let commit = self.database().load_commit(&commit_id)?;

        writeln!(
            self.writer(),
            "[{} {}] {}",
            head.branch,
            commit_id.to_short_oid(),
            commit.short_message()
        )?;

        Ok(commit_id)
    }

    /// Fold `stage` into a new commit on top of `head` and advance its branch
    ///
    /// Merge commits (those with `other_parent`) are recorded even when the
    /// stage is empty.
    pub(crate) fn record_commit(
        &self,
        head: &Tip,
        stage: &Stage,
        message: String,
        other_parent: Option<ObjectId>,
    ) -> BitletResult<ObjectId> {
        let mut snapshot = SnapshotBuilder::new(Some(&head.commit), stage);
        if other_parent.is_some() {
            snapshot = snapshot.allow_empty();
        }
        let tracked = snapshot.build()?;

        let commit = Commit::new(
            message,
            Commit::timestamp_from_env(),
            Some(head.oid.clone()),
            other_parent,
            tracked,
        )?;
        let commit_id = self.database().put_commit(&commit)?;

        self.refs().update_branch(&head.branch, &commit_id)?;
        self.stages().clear(&head.branch)?;

        tracing::info!(
            branch = %head.branch,
            commit = %commit_id,
            merge = commit.is_merge(),
            "recorded commit"
        );

        Ok(commit_id)
    }
}
