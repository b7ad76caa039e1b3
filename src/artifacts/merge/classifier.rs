//! Per-path merge decisions
//!
//! Every path tracked by the split point, the current tip or the incoming tip
//! is classified by comparing blob ids only. An absent entry compares equal
//! only to another absent entry.

use crate::artifacts::objects::commit::FileTable;
use crate::artifacts::objects::object_id::ObjectId;
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeAction {
    /// Leave the current tip's version (or absence) alone
    KeepHead,
    /// Write the incoming version and stage it
    TakeOther,
    /// Stage a removal and delete the working file
    Delete,
    /// Write conflict markers and stage the result
    Conflict,
}

pub fn classify(
    split: Option<&ObjectId>,
    head: Option<&ObjectId>,
    other: Option<&ObjectId>,
) -> MergeAction {
    if other == split {
        MergeAction::KeepHead
    } else if head == split {
        match other {
            Some(_) => MergeAction::TakeOther,
            None => MergeAction::Delete,
        }
    } else if other == head {
        MergeAction::KeepHead
    } else {
        MergeAction::Conflict
    }
}

/// Classification of every path across the three snapshots, sorted by path
pub fn classify_all(
    split: &FileTable,
    head: &FileTable,
    other: &FileTable,
) -> BTreeMap<PathBuf, MergeAction> {
    split
        .keys()
        .chain(head.keys())
        .chain(other.keys())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(|path| {
            let action = classify(split.get(path), head.get(path), other.get(path));
            tracing::debug!(path = %path.display(), ?action, "classified merge path");
            (path.clone(), action)
        })
        .collect()
}
