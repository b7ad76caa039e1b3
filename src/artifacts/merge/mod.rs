//! Three-way merge
//!
//! - `split_finder`: locates the split point of two branch tips along primary
//!   parent chains
//! - `classifier`: decides, per path, what the merge does with it
//! - `conflict`: renders the working file written for a conflicting path

pub mod classifier;
pub mod conflict;
pub mod split_finder;

/// What a merge ended up doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// The incoming tip is already part of the current history
    AlreadyUpToDate,
    /// The current tip was an ancestor of the incoming one; only the branch moved
    FastForwarded,
    /// A two-parent commit was recorded
    Merged { conflicted: bool },
}
