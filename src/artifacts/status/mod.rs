//! Working tree status inspection
//!
//! Compares the working directory against the current tip and the branch's
//! stage.
//!
//! ## Components
//!
//! - `file_change`: categories of unstaged working changes
//! - `status_info`: report computation and rendering

pub mod file_change;
pub mod status_info;
