//! Split point discovery
//!
//! The split point of two tips is found by walking primary parents only:
//!
//! 1. Walk the current tip's chain starting at its parent, recording every id.
//! 2. Walk the incoming tip's chain starting at the tip itself; the first
//!    recorded id is the split point.
//! 3. If the chains never meet, the incoming tip's root is used.
//!
//! Second parents of merge commits are never followed, so on histories with
//! merges the result can be an older ancestor than the true lowest common
//! ancestor.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let finder = SplitFinder::new(|oid| repository.slim_commit(oid));
//! let split = finder.find_split_point(&other_tip, &head_tip)?;
//! ```

use crate::artifacts::objects::commit::SlimCommit;
use crate::artifacts::objects::object_id::ObjectId;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

/// Per-invocation memo of loaded commits
#[derive(Debug, Default)]
struct CommitCache {
    commits: RefCell<HashMap<ObjectId, SlimCommit>>,
}

pub struct SplitFinder<CommitLoaderFn>
where
    CommitLoaderFn: Fn(&ObjectId) -> anyhow::Result<SlimCommit>,
{
    commit_loader: CommitLoaderFn,
    cache: CommitCache,
}

impl<CommitLoaderFn> SplitFinder<CommitLoaderFn>
where
    CommitLoaderFn: Fn(&ObjectId) -> anyhow::Result<SlimCommit>,
{
    pub fn new(commit_loader: CommitLoaderFn) -> Self {
        Self {
            commit_loader,
            cache: CommitCache::default(),
        }
    }

    fn load(&self, oid: &ObjectId) -> anyhow::Result<SlimCommit> {
        if let Some(commit) = self.cache.commits.borrow().get(oid) {
            return Ok(commit.clone());
        }

        let commit = (self.commit_loader)(oid)?;
        self.cache
            .commits
            .borrow_mut()
            .insert(oid.clone(), commit.clone());

        Ok(commit)
    }

    /// Primary-parent chain of `start`, `start` included
    fn primary_chain(&self, start: &ObjectId) -> anyhow::Result<Vec<ObjectId>> {
        let mut chain = vec![];
        let mut current = Some(start.clone());

        while let Some(oid) = current {
            current = self.load(&oid)?.parent;
            chain.push(oid);
        }

        Ok(chain)
    }

    /// Split point of `other` (the incoming tip) and `head` (the current tip)
    pub fn find_split_point(&self, other: &ObjectId, head: &ObjectId) -> anyhow::Result<ObjectId> {
        let visited = self
            .primary_chain(head)?
            .into_iter()
            .skip(1)
            .collect::<HashSet<_>>();

        let other_chain = self.primary_chain(other)?;
        let split = other_chain
            .iter()
            .find(|oid| visited.contains(*oid))
            .or_else(|| other_chain.last())
            .cloned()
            .unwrap_or_else(|| other.clone());

        tracing::debug!(%other, %head, %split, "found split point");

        Ok(split)
    }

    /// Whether `ancestor` lies on the primary-parent chain of `descendant`
    ///
    /// A commit counts as its own ancestor.
    pub fn is_ancestor(&self, ancestor: &ObjectId, descendant: &ObjectId) -> anyhow::Result<bool> {
        let mut current = Some(descendant.clone());

        while let Some(oid) = current {
            if &oid == ancestor {
                return Ok(true);
            }
            current = self.load(&oid)?.parent;
        }

        Ok(false)
    }
}
