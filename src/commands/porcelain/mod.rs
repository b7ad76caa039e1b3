//! Porcelain commands (user-facing operations)
//!
//! Every command is an `impl Repository` block that reads what it needs from
//! disk, persists its mutations, and writes user-facing output to the
//! repository's writer.
//!
//! ## Commands
//!
//! - `init`: create the repository layout and the root commit
//! - `add` / `rm`: stage additions and removals
//! - `commit`: record the staged snapshot
//! - `log` / `global-log` / `find`: inspect history
//! - `status`: report staged, removed, modified and untracked files
//! - `checkout`: restore files or switch branches
//! - `branch` / `rm-branch`: create and delete branches
//! - `reset`: move the current branch to another commit
//! - `merge`: three-way merge of another branch into the current one

pub mod add;
pub mod branch;
pub mod checkout;
pub mod commit;
pub mod find;
pub mod init;
pub mod log;
pub mod merge;
pub mod reset;
pub mod rm;
pub mod rm_branch;
pub mod status;
