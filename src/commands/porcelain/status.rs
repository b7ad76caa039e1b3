use crate::areas::repository::Repository;
use crate::artifacts::core::errors::BitletResult;
use crate::artifacts::status::status_info::Status;

impl Repository {
    pub fn status(&self) -> BitletResult<()> {
        let status_info = Status::new(self).initialize()?;

        status_info.render(&mut *self.writer())?;

        Ok(())
    }
}
