use crate::areas::repository::Repository;
use crate::artifacts::core::errors::{BitletError, BitletResult};
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::Object;
use std::path::PathBuf;

impl Repository {
    /// Stage the working copy of one file
    ///
    /// Re-adding a path marked for removal only lifts the mark. Content equal
    /// to what the tip already tracks is unstaged instead of staged. Paths
    /// outside the working tree or inside `.bitlet` count as missing.
    pub fn add(&mut self, raw_path: &str) -> BitletResult<()> {
        let path = self
            .workspace()
            .normalize(raw_path)
            .filter(|path| self.workspace().file_exists(path))
            .ok_or_else(|| BitletError::FileNotFound {
                path: PathBuf::from(raw_path),
            })?;

        if !Commit::is_recordable_path(&path) {
            return Err(BitletError::UnsupportedPath { path });
        }

        let head = self.head()?;
        let mut stage = self.stages().load(&head.branch)?;

        if stage.unmark_removed(&path) {
            tracing::debug!(path = %path.display(), "lifted removal mark");
        } else {
            let blob = self.workspace().parse_blob(&path)?;
            let blob_id = blob.object_id()?;

            if head.commit.blob_for(&path) == Some(&blob_id) {
                stage.unstage(&path);
            } else {
                self.database().store(&blob)?;
                stage.stage(path, blob_id);
            }
        }

        self.stages().save(&head.branch, &stage)?;

        Ok(())
    }
}
