use std::path::Path;

use crate::domain::AppError;

/// Port for the directories generated config files are written into.
pub trait ConfigFileStore {
    /// Whether `dir` exists and is a directory.
    fn dir_exists(&self, dir: &Path) -> bool;

    /// Write `content` to `path`, replacing any previous file.
    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError>;
}
