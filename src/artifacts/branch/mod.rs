//! Branch naming
//!
//! Branch names follow the same shape rules as git ref names so they can be
//! stored as plain files under `refs/heads/` without escaping.

pub mod branch_name;

pub const INVALID_BRANCH_NAME_REGEX: &str =
    r"^\.|\/\.|\.\.|^\/|\/$|\.lock$|@\{|[\x00-\x20\*:\?\[\\~\^\x7f]";

/// Branch created by `init`
pub const DEFAULT_BRANCH: &str = "master";

/// HEAD content pointing at a branch
pub const HEAD_SYMREF_REGEX: &str = r"^ref: refs/heads/(.+)$";
