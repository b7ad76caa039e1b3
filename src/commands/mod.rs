//! Command implementations
//!
//! Only porcelain commands are exposed: every operation a user can run is an
//! `impl Repository` block under `porcelain`.

pub mod porcelain;
