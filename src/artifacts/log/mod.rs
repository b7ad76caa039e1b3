//! Commit history traversal
//!
//! `log` follows primary parents from the current tip back to the root;
//! `global-log` and `find` visit every commit in the object store instead.

use crate::areas::database::Database;
use crate::artifacts::core::errors::BitletResult;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use std::fmt::Write;

/// Iterator over a primary-parent chain, newest first
pub struct History<'d> {
    database: &'d Database,
    next: Option<ObjectId>,
}

impl<'d> History<'d> {
    pub fn new(database: &'d Database, start: ObjectId) -> Self {
        History {
            database,
            next: Some(start),
        }
    }
}

impl Iterator for History<'_> {
    type Item = BitletResult<(ObjectId, Commit)>;

    fn next(&mut self) -> Option<Self::Item> {
        let oid = self.next.take()?;

        match self.database.load_commit(&oid) {
            Ok(commit) => {
                self.next = commit.parent().cloned();
                Some(Ok((oid, commit)))
            }
            Err(error) => Some(Err(error)),
        }
    }
}

/// Every commit in the object store, in id order
pub fn all_commits(database: &Database) -> BitletResult<Vec<(ObjectId, Commit)>> {
    let mut commits = vec![];

    for oid in database.list_objects()? {
        if let Some(commit) = database.parse_object_as_commit(&oid)? {
            commits.push((oid, commit));
        }
    }

    Ok(commits)
}

/// One `log` entry, trailing blank line included
///
/// ```text
/// ===
/// commit <id>
/// Merge: <parent7> <other-parent7>
/// Date: Thu Jan 1 00:00:00 1970 +0000
/// <message>
///
/// ```
pub fn format_entry(oid: &ObjectId, commit: &Commit) -> String {
    let mut entry = String::new();

    let _ = writeln!(entry, "===");
    let _ = writeln!(entry, "commit {}", oid);
    if let (Some(parent), Some(other_parent)) = (commit.parent(), commit.other_parent()) {
        let _ = writeln!(
            entry,
            "Merge: {} {}",
            parent.to_short_oid(),
            other_parent.to_short_oid()
        );
    }
    let _ = writeln!(entry, "Date: {}", commit.readable_timestamp());
    let _ = writeln!(entry, "{}", commit.message());
    let _ = writeln!(entry);

    entry
}
