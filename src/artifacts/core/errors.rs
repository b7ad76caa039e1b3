//! Error taxonomy for repository operations
//!
//! Every failure the engine can report to a user is a [`BitletError`]. Each
//! variant belongs to exactly one [`ErrorKind`], which decides how the command
//! boundary treats it:
//!
//! - `Validation`: malformed input (empty message, bad operands, bad names)
//! - `NotFound`: a commit, branch, object or path that does not exist
//! - `Obstruction`: an untracked working file would be clobbered
//! - `State`: the repository is not in a state that allows the operation
//! - `Storage`: an I/O or decoding failure in the persisted areas; fatal
//!
//! The persisted areas report through `anyhow::Error`; those errors enter the
//! taxonomy as [`BitletError::Storage`].

use std::path::PathBuf;

/// Result type for engine operations
pub type BitletResult<T> = Result<T, BitletError>;

/// Coarse classification of a [`BitletError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Obstruction,
    State,
    Storage,
}

#[derive(Debug, thiserror::Error)]
pub enum BitletError {
    #[error("A bitlet version-control system already exists in the current directory.")]
    AlreadyInitialized,

    #[error("Not in an initialized bitlet directory.")]
    NotInitialized,

    #[error("Incorrect operands.")]
    IncorrectOperands,

    #[error("Please enter a commit message.")]
    EmptyMessage,

    #[error("Invalid branch name: {name}")]
    InvalidBranchName { name: String },

    #[error("No changes added to the commit.")]
    NothingToCommit,

    #[error("File does not exist.")]
    FileNotFound { path: PathBuf },

    #[error("File name {path:?} cannot be recorded.")]
    UnsupportedPath { path: PathBuf },

    #[error("No reason to remove the file.")]
    NothingToRemove { path: PathBuf },

    #[error("No commit with that id exists.")]
    NoSuchCommit { id: String },

    #[error("Commit id {prefix} is ambiguous.")]
    AmbiguousCommitId { prefix: String },

    #[error("Object {oid} does not exist.")]
    ObjectNotFound { oid: String },

    #[error("File does not exist in that commit.")]
    PathNotInCommit { path: PathBuf },

    #[error("A branch with that name does not exist.")]
    NoSuchBranch { name: String },

    #[error("A branch with that name already exists.")]
    BranchExists { name: String },

    #[error("No need to checkout the current branch.")]
    CheckoutCurrentBranch,

    #[error("Cannot remove the current branch.")]
    RemoveCurrentBranch,

    #[error("Found no commit with that message.")]
    NoCommitWithMessage,

    #[error("There is an untracked file in the way; delete it, or add and commit it first.")]
    UntrackedObstruction { paths: Vec<PathBuf> },

    #[error("You have uncommitted changes.")]
    UncommittedChanges,

    #[error("Cannot merge a branch with itself.")]
    SelfMerge,

    #[error("fatal: {0:#}")]
    Storage(#[from] anyhow::Error),
}

impl BitletError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BitletError::IncorrectOperands
            | BitletError::EmptyMessage
            | BitletError::InvalidBranchName { .. }
            | BitletError::UnsupportedPath { .. }
            | BitletError::AmbiguousCommitId { .. } => ErrorKind::Validation,
            BitletError::FileNotFound { .. }
            | BitletError::NoSuchCommit { .. }
            | BitletError::ObjectNotFound { .. }
            | BitletError::PathNotInCommit { .. }
            | BitletError::NoSuchBranch { .. }
            | BitletError::NoCommitWithMessage => ErrorKind::NotFound,
            BitletError::UntrackedObstruction { .. } => ErrorKind::Obstruction,
            BitletError::AlreadyInitialized
            | BitletError::NotInitialized
            | BitletError::NothingToCommit
            | BitletError::NothingToRemove { .. }
            | BitletError::BranchExists { .. }
            | BitletError::CheckoutCurrentBranch
            | BitletError::RemoveCurrentBranch
            | BitletError::UncommittedChanges
            | BitletError::SelfMerge => ErrorKind::State,
            BitletError::Storage(_) => ErrorKind::Storage,
        }
    }

    /// Whether the process should treat this error as unrecoverable
    pub fn is_fatal(&self) -> bool {
        self.kind() == ErrorKind::Storage
    }
}

impl From<std::io::Error> for BitletError {
    fn from(error: std::io::Error) -> Self {
        BitletError::Storage(error.into())
    }
}
