use crate::areas::database::Database;
use crate::areas::refs::Refs;
use crate::areas::stages::StageArea;
use crate::areas::workspace::{METADATA_DIR, Workspace};
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::core::errors::{BitletError, BitletResult};
use crate::artifacts::merge::split_finder::SplitFinder;
use crate::artifacts::objects::commit::{Commit, SlimCommit};
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::stage::Stage;
use anyhow::Context;
use std::cell::{RefCell, RefMut};
use std::path::{Path, PathBuf};

/// Explicit handle on one repository
///
/// Holds no state besides paths and the output sink: every operation reads
/// what it needs from disk and persists its mutations before returning.
pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    database: Database,
    workspace: Workspace,
    refs: Refs,
    stages: StageArea,
}

/// A branch together with the commit it points at
#[derive(Debug, Clone)]
pub struct Tip {
    pub branch: BranchName,
    pub oid: ObjectId,
    pub commit: Commit,
}

impl Repository {
    /// Handle on `path`, which may not be initialized yet
    pub fn new(path: &Path, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        if !path.exists() {
            std::fs::create_dir_all(path)
                .with_context(|| format!("Failed to create directory {}", path.display()))?;
        }
        let path = path
            .canonicalize()
            .with_context(|| format!("Failed to resolve {}", path.display()))?;

        let metadata_path = path.join(METADATA_DIR);

        Ok(Repository {
            database: Database::new(metadata_path.join("objects").into_boxed_path()),
            workspace: Workspace::new(path.clone().into_boxed_path()),
            refs: Refs::new(metadata_path.clone().into_boxed_path()),
            stages: StageArea::new(metadata_path.join("stages").into_boxed_path()),
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
        })
    }

    /// Handle on an initialized repository
    pub fn open(path: &Path, writer: Box<dyn std::io::Write>) -> BitletResult<Self> {
        let repository = Repository::new(path, writer)?;

        if !repository.is_initialized() {
            return Err(BitletError::NotInitialized);
        }

        Ok(repository)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn metadata_path(&self) -> PathBuf {
        self.path.join(METADATA_DIR)
    }

    pub fn is_initialized(&self) -> bool {
        self.metadata_path().is_dir()
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    pub fn stages(&self) -> &StageArea {
        &self.stages
    }

    pub fn current_branch(&self) -> BitletResult<BranchName> {
        Ok(self.refs.current_branch()?)
    }

    /// Tip of `branch_name`
    pub fn tip(&self, branch_name: &BranchName) -> BitletResult<Tip> {
        let oid = self
            .refs
            .read_branch(branch_name)?
            .ok_or_else(|| BitletError::NoSuchBranch {
                name: branch_name.to_string(),
            })?;
        let commit = self.database.load_commit(&oid)?;

        Ok(Tip {
            branch: branch_name.clone(),
            oid,
            commit,
        })
    }

    /// Parse `raw_name` and require that the branch exists
    pub fn existing_branch(&self, raw_name: &str) -> BitletResult<BranchName> {
        let no_such_branch = || BitletError::NoSuchBranch {
            name: raw_name.to_string(),
        };

        let branch_name =
            BranchName::try_parse(raw_name.to_string()).map_err(|_| no_such_branch())?;
        if !self.refs.branch_exists(&branch_name) {
            return Err(no_such_branch());
        }

        Ok(branch_name)
    }

    /// Tip of the branch HEAD points at
    pub fn head(&self) -> BitletResult<Tip> {
        self.tip(&self.current_branch()?)
    }

    /// Working state of the current branch
    pub fn staged_changes(&self) -> BitletResult<Stage> {
        Ok(self.stages.load(&self.current_branch()?)?)
    }

    pub fn commit_by_id(&self, raw_id: &str) -> BitletResult<Commit> {
        let oid = self.resolve_commit_id(raw_id)?;
        self.database.load_commit(&oid)
    }

    /// Resolve a full or abbreviated commit id
    pub fn resolve_commit_id(&self, raw_id: &str) -> BitletResult<ObjectId> {
        let prefix = raw_id.trim().to_ascii_lowercase();
        let no_such_commit = || BitletError::NoSuchCommit {
            id: raw_id.to_string(),
        };

        if !ObjectId::is_valid_prefix(&prefix) {
            return Err(no_such_commit());
        }

        let mut candidates = self.database.find_objects_by_prefix(&prefix)?;
        candidates.retain(|oid| {
            matches!(
                self.database.get_object_type(oid),
                Ok(Some(ObjectType::Commit))
            )
        });

        match candidates.len() {
            0 => Err(no_such_commit()),
            1 => Ok(candidates.remove(0)),
            _ => Err(BitletError::AmbiguousCommitId { prefix }),
        }
    }

    /// Id the working copy of `path` would get as a blob
    pub fn working_blob_id(&self, path: &Path) -> anyhow::Result<ObjectId> {
        self.workspace.parse_blob(path)?.object_id()
    }

    pub fn split_finder(
        &self,
    ) -> SplitFinder<impl Fn(&ObjectId) -> anyhow::Result<SlimCommit> + '_> {
        SplitFinder::new(|oid: &ObjectId| self.database.slim_commit(oid))
    }

    pub fn find_split_point(&self, other: &ObjectId, head: &ObjectId) -> BitletResult<ObjectId> {
        Ok(self.split_finder().find_split_point(other, head)?)
    }
}
