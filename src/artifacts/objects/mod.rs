//! Object types and operations
//!
//! Everything is stored as an object identified by a SHA-1 digest:
//!
//! - **Blob**: the raw bytes of one file version
//! - **Commit**: a snapshot record (message, timestamp, parents, and the full
//!   path to blob table)
//!
//! All objects implement serialization/deserialization for the object format:
//! `<type> <size>\0<content>`

pub mod blob;
pub mod commit;
pub mod object;
pub mod object_id;
pub mod object_type;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;
