use std::fs;
use std::path::Path;

use crate::domain::AppError;
use crate::ports::ConfigFileStore;

/// Filesystem-based config store. Writes go straight to the target path.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilesystemConfigStore;

impl ConfigFileStore for FilesystemConfigStore {
    fn dir_exists(&self, dir: &Path) -> bool {
        dir.is_dir()
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        fs::write(path, content)?;
        Ok(())
    }
}
