//! bitlet: a minimal single-user version-control engine
//!
//! - `areas`: the persisted parts of a repository (object store, branch table,
//!   per-branch stages, working directory) and the [`areas::repository::Repository`]
//!   handle tying them together
//! - `artifacts`: the value types and algorithms those areas operate on
//! - `commands`: user-facing operations, implemented on `Repository`

pub mod areas;
pub mod artifacts;
pub mod commands;
