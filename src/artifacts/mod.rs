//! Repository data types and algorithms
//!
//! - `branch`: branch name validation
//! - `checkout`: obstruction detection and snapshot migration
//! - `core`: error taxonomy and pager output
//! - `log`: commit history traversal and formatting
//! - `merge`: split point discovery, per-path classification, conflict files
//! - `objects`: object ids, blobs and commits
//! - `snapshot`: building the file table of a new commit
//! - `stage`: per-branch staged additions and removals
//! - `status`: working tree status report

pub mod branch;
pub mod checkout;
pub mod core;
pub mod log;
pub mod merge;
pub mod objects;
pub mod snapshot;
pub mod stage;
pub mod status;
