use crate::artifacts::core::errors::{BitletError, BitletResult};
use crate::artifacts::objects::commit::FileTable;
use crate::artifacts::objects::object_id::ObjectId;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ConflictType {
    /// An untracked file would be replaced by different content
    UntrackedOverwritten,
}

impl ConflictType {
    /// Conflict raised by one working file, if any
    ///
    /// Only files the current snapshot does not track can conflict, and only
    /// when the target snapshot records different content for them.
    pub fn get_conflict_type(
        current_entry: Option<&ObjectId>,
        target_entry: Option<&ObjectId>,
        working_oid: &ObjectId,
    ) -> Option<ConflictType> {
        match (current_entry, target_entry) {
            (None, Some(target_oid)) if target_oid != working_oid => {
                Some(ConflictType::UntrackedOverwritten)
            }
            _ => None,
        }
    }
}

/// Untracked working files the target snapshot would overwrite
pub fn find_obstructions<'p>(
    working_files: impl IntoIterator<Item = &'p Path>,
    current: &FileTable,
    target: &FileTable,
    working_oid: impl Fn(&Path) -> anyhow::Result<ObjectId>,
) -> anyhow::Result<Vec<PathBuf>> {
    let mut obstructions = vec![];

    for path in working_files {
        let current_entry = current.get(path);
        let target_entry = target.get(path);

        // hashing is only needed for untracked files the target also has
        if current_entry.is_some() || target_entry.is_none() {
            continue;
        }

        if ConflictType::get_conflict_type(current_entry, target_entry, &working_oid(path)?)
            .is_some()
        {
            obstructions.push(path.to_path_buf());
        }
    }

    Ok(obstructions)
}

pub fn ensure_unobstructed(obstructions: Vec<PathBuf>) -> BitletResult<()> {
    if obstructions.is_empty() {
        Ok(())
    } else {
        tracing::debug!(?obstructions, "untracked files in the way");
        Err(BitletError::UntrackedObstruction {
            paths: obstructions,
        })
    }
}
