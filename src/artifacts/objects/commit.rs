//! Commit object
//!
//! A commit is an immutable snapshot record. Unlike git there is no separate
//! tree object: the commit carries the full path to blob table of every file
//! that exists as of this commit, not just the changes.
//!
//! Pending changes (staged additions and removals) are deliberately not part of
//! this record; they live in the stage area keyed by branch, so a commit's id
//! never depends on uncommitted work.
//!
//! ## Format
//!
//! On disk:
//! ```text
//! commit <size>\0
//! parent <parent-sha | null-sha>
//! parent <other-parent-sha>            (merge commits only)
//! timestamp <unix-seconds> <timezone>
//! file <blob-sha> <path>               (one per tracked path, sorted)
//!
//! <commit message>
//! ```

use crate::artifacts::core::errors::{BitletError, BitletResult};
use crate::artifacts::objects::object::{Object, Packable, Unpackable, frame};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use anyhow::Context;
use bytes::Bytes;
use chrono::{DateTime, FixedOffset};
use std::collections::BTreeMap;
use std::io::{BufRead, Read};
use std::path::{Path, PathBuf};

/// Full snapshot of the files recorded by a commit
pub type FileTable = BTreeMap<PathBuf, ObjectId>;

/// Message of the commit created by `init`
pub const ROOT_MESSAGE: &str = "initial commit";

/// Environment variable that pins the timestamp of new commits
pub const COMMIT_DATE_ENV: &str = "BITLET_COMMIT_DATE";

/// Slim representation of a commit
///
/// Contains only what ancestry walks need, so a commit cache can hand out
/// owned copies without cloning whole file tables.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SlimCommit {
    pub oid: ObjectId,
    pub parent: Option<ObjectId>,
    pub other_parent: Option<ObjectId>,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Commit {
    /// Commit message, never blank
    message: String,
    timestamp: DateTime<FixedOffset>,
    /// Primary parent, `None` only for the root commit
    parent: Option<ObjectId>,
    /// Incoming tip of a merge
    other_parent: Option<ObjectId>,
    tracked: FileTable,
}

impl Commit {
    /// Create a new commit
    ///
    /// Fails with `EmptyMessage` when the message is blank.
    pub fn new(
        message: String,
        timestamp: DateTime<FixedOffset>,
        parent: Option<ObjectId>,
        other_parent: Option<ObjectId>,
        tracked: FileTable,
    ) -> BitletResult<Self> {
        if message.trim().is_empty() {
            return Err(BitletError::EmptyMessage);
        }

        Ok(Commit {
            message,
            timestamp,
            parent: parent.filter(|oid| !oid.is_null()),
            other_parent: other_parent.filter(|oid| !oid.is_null()),
            tracked,
        })
    }

    /// The commit every repository starts from
    pub fn root() -> Self {
        Commit {
            message: ROOT_MESSAGE.to_string(),
            timestamp: DateTime::UNIX_EPOCH.fixed_offset(),
            parent: None,
            other_parent: None,
            tracked: FileTable::new(),
        }
    }

    /// Timestamp for a commit created now
    ///
    /// Honors `BITLET_COMMIT_DATE` (RFC 2822 or `%Y-%m-%d %H:%M:%S %z`); an
    /// unset or unparsable value falls back to the local clock.
    pub fn timestamp_from_env() -> DateTime<FixedOffset> {
        std::env::var(COMMIT_DATE_ENV)
            .ok()
            .and_then(|date_str| {
                DateTime::parse_from_rfc2822(&date_str)
                    .or_else(|_| DateTime::parse_from_str(&date_str, "%Y-%m-%d %H:%M:%S %z"))
                    .ok()
            })
            .unwrap_or_else(|| chrono::Local::now().fixed_offset())
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// First line of the commit message
    pub fn short_message(&self) -> String {
        self.message.lines().next().unwrap_or("").to_string()
    }

    pub fn timestamp(&self) -> DateTime<FixedOffset> {
        self.timestamp
    }

    /// String like "Thu Jan 1 00:00:00 1970 +0000"
    pub fn readable_timestamp(&self) -> String {
        self.timestamp
            .format("%a %b %-d %H:%M:%S %Y %z")
            .to_string()
    }

    pub fn parent(&self) -> Option<&ObjectId> {
        self.parent.as_ref()
    }

    pub fn other_parent(&self) -> Option<&ObjectId> {
        self.other_parent.as_ref()
    }

    pub fn is_merge(&self) -> bool {
        self.other_parent.is_some()
    }

    pub fn tracked(&self) -> &FileTable {
        &self.tracked
    }

    pub fn is_tracked(&self, path: &Path) -> bool {
        self.tracked.contains_key(path)
    }

    pub fn blob_for(&self, path: &Path) -> Option<&ObjectId> {
        self.tracked.get(path)
    }

    /// Whether `path` survives a trip through the `file` line unchanged
    ///
    /// Paths must be valid UTF-8 and hold no line breaks.
    pub fn is_recordable_path(path: &Path) -> bool {
        path.to_str().is_some_and(|path| !path.contains(['\n', '\r']))
    }

    pub fn slim(&self, oid: ObjectId) -> SlimCommit {
        SlimCommit {
            oid,
            parent: self.parent.clone(),
            other_parent: self.other_parent.clone(),
        }
    }

    fn header_lines(&self) -> anyhow::Result<Vec<String>> {
        let mut lines = vec![];

        let parent = self.parent.clone().unwrap_or_else(ObjectId::null);
        lines.push(format!("parent {}", parent));
        if let Some(other_parent) = &self.other_parent {
            lines.push(format!("parent {}", other_parent));
        }
        lines.push(format!(
            "timestamp {} {}",
            self.timestamp.timestamp(),
            self.timestamp.format("%z")
        ));
        for (path, oid) in &self.tracked {
            if !Self::is_recordable_path(path) {
                anyhow::bail!("Unable to record path {:?} in a commit", path);
            }
            lines.push(format!("file {} {}", oid, path.display()));
        }

        Ok(lines)
    }
}

fn parse_timestamp(value: &str) -> anyhow::Result<DateTime<FixedOffset>> {
    let (seconds, timezone) = value
        .split_once(' ')
        .context("Invalid commit object: malformed timestamp")?;
    let seconds = seconds
        .parse::<i64>()
        .context("Invalid commit object: malformed timestamp seconds")?;

    if timezone.len() != 5 || !timezone[1..].chars().all(|c| c.is_ascii_digit()) {
        anyhow::bail!("Invalid commit object: malformed timezone {timezone}");
    }
    let sign = match &timezone[..1] {
        "+" => 1,
        "-" => -1,
        _ => anyhow::bail!("Invalid commit object: malformed timezone {timezone}"),
    };
    let hours = timezone[1..3].parse::<i32>()?;
    let minutes = timezone[3..5].parse::<i32>()?;
    let offset = FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
        .context("Invalid commit object: timezone out of range")?;

    let instant = DateTime::from_timestamp(seconds, 0)
        .context("Invalid commit object: timestamp out of range")?;

    Ok(instant.with_timezone(&offset))
}

impl Packable for Commit {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let content = format!("{}\n\n{}", self.header_lines()?.join("\n"), self.message);

        frame(self.object_type(), content.as_bytes())
    }
}

impl Unpackable for Commit {
    fn deserialize(mut reader: impl BufRead) -> anyhow::Result<Self> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;

        let (header, message) = content
            .split_once("\n\n")
            .context("Invalid commit object: missing message separator")?;
        let mut lines = header.lines().peekable();

        let parent = lines
            .next()
            .and_then(|line| line.strip_prefix("parent "))
            .context("Invalid commit object: missing parent line")?;
        let parent = ObjectId::try_parse(parent.to_string())?;

        let other_parent = match lines.peek().and_then(|line| line.strip_prefix("parent ")) {
            Some(other_parent) => {
                let other_parent = ObjectId::try_parse(other_parent.to_string())?;
                lines.next();
                Some(other_parent)
            }
            None => None,
        };

        let timestamp = lines
            .next()
            .and_then(|line| line.strip_prefix("timestamp "))
            .context("Invalid commit object: missing timestamp line")?;
        let timestamp = parse_timestamp(timestamp)?;

        let mut tracked = FileTable::new();
        for line in lines {
            let entry = line
                .strip_prefix("file ")
                .with_context(|| format!("Invalid commit object: unexpected line {line:?}"))?;
            let (oid, path) = entry
                .split_once(' ')
                .context("Invalid commit object: malformed file line")?;
            tracked.insert(PathBuf::from(path), ObjectId::try_parse(oid.to_string())?);
        }

        Ok(Commit {
            message: message.to_string(),
            timestamp,
            parent: Some(parent).filter(|oid| !oid.is_null()),
            other_parent,
            tracked,
        })
    }
}

impl Object for Commit {
    fn object_type(&self) -> ObjectType {
        ObjectType::Commit
    }
}
