//! Moving the working directory between snapshots
//!
//! - `conflict`: detects untracked working files a snapshot change would
//!   clobber
//! - `migration`: plans and applies the file writes and deletions that turn
//!   one snapshot's working copy into another's
//!
//! Obstructions are always detected for every path before anything is
//! written, so a refused checkout leaves the working directory untouched.

pub mod conflict;
pub mod migration;
