use std::cell::RefCell;
use std::collections::{BTreeMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::ConfigFileStore;

/// In-memory config store for testing.
#[derive(Debug, Default)]
pub struct MemoryConfigStore {
    dirs: HashSet<PathBuf>,
    files: RefCell<BTreeMap<PathBuf, String>>,
    fail_on: Option<PathBuf>,
}

impl MemoryConfigStore {
    pub fn with_dirs(dirs: &[&str]) -> Self {
        Self { dirs: dirs.iter().map(PathBuf::from).collect(), ..Self::default() }
    }

    /// Make writes to `path` fail with a permission error.
    pub fn fail_on(mut self, path: &str) -> Self {
        self.fail_on = Some(PathBuf::from(path));
        self
    }

    pub fn files(&self) -> BTreeMap<PathBuf, String> {
        self.files.borrow().clone()
    }

    pub fn read(&self, path: &str) -> Option<String> {
        self.files.borrow().get(Path::new(path)).cloned()
    }
}

impl ConfigFileStore for MemoryConfigStore {
    fn dir_exists(&self, dir: &Path) -> bool {
        self.dirs.contains(dir)
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        if self.fail_on.as_deref() == Some(path) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only").into());
        }
        let parent = path.parent().filter(|p| !p.as_os_str().is_empty());
        if parent.is_some_and(|p| !self.dirs.contains(p)) {
            return Err(io::Error::new(io::ErrorKind::NotFound, "no such directory").into());
        }
        self.files.borrow_mut().insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}
