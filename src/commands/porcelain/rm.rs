use crate::areas::repository::Repository;
use crate::artifacts::core::errors::{BitletError, BitletResult};
use std::path::PathBuf;

impl Repository {
    /// Unstage a file and, if the tip tracks it, mark it removed and delete it
    pub fn remove(&mut self, raw_path: &str) -> BitletResult<()> {
        let path = self
            .workspace()
            .normalize(raw_path)
            .ok_or_else(|| BitletError::NothingToRemove {
                path: PathBuf::from(raw_path),
            })?;

        let head = self.head()?;
        let mut stage = self.stages().load(&head.branch)?;

        let is_tracked = head.commit.is_tracked(&path);
        if !stage.is_staged(&path) && !is_tracked {
            return Err(BitletError::NothingToRemove { path });
        }

        stage.unstage(&path);
        if is_tracked {
            self.workspace().delete_file(&path)?;
            stage.mark_removed(path);
        }

        self.stages().save(&head.branch, &stage)?;

        Ok(())
    }
}
