//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use mixgen_core::{
    application::{ApplicationError, Filesystem},
    error::MixgenResult,
};

/// In-memory filesystem for testing.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: impl AsRef<Path>) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path.as_ref()).cloned()
    }

    /// List all files, sorted for stable assertions.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        let mut files: Vec<_> = inner.files.keys().cloned().collect();
        files.sort();
        files
    }

    /// Number of files written.
    pub fn file_count(&self) -> usize {
        self.inner.read().unwrap().files.len()
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> MixgenResult<()> {
        let mut inner = self.inner.write().map_err(|_| ApplicationError::LockPoisoned)?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_new(&self, path: &Path, content: &str) -> MixgenResult<()> {
        let mut inner = self.inner.write().map_err(|_| ApplicationError::LockPoisoned)?;

        if inner.files.contains_key(path) {
            return Err(ApplicationError::PathCollision {
                path: path.to_path_buf(),
            }
            .into());
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::Filesystem {
                    path: path.to_path_buf(),
                    reason: "parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn append(&self, path: &Path, content: &str) -> MixgenResult<()> {
        let mut inner = self.inner.write().map_err(|_| ApplicationError::LockPoisoned)?;

        match inner.files.get_mut(path) {
            Some(existing) => existing.push_str(content),
            None => {
                inner.files.insert(path.to_path_buf(), content.to_string());
            }
        }
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mixgen_core::error::MixgenError;

    #[test]
    fn write_new_requires_parent_and_rejects_collision() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("out")).unwrap();

        fs.write_new(Path::new("out/a.txt"), "x").unwrap();
        assert!(matches!(
            fs.write_new(Path::new("out/a.txt"), "y").unwrap_err(),
            MixgenError::Application(ApplicationError::PathCollision { .. })
        ));
        assert!(fs.write_new(Path::new("missing/b.txt"), "z").is_err());
    }

    #[test]
    fn append_creates_when_absent() {
        let fs = MemoryFilesystem::new();
        fs.append(Path::new(".env"), "A=1\n").unwrap();
        fs.append(Path::new(".env"), "B=2\n").unwrap();
        assert_eq!(fs.read_file(".env").unwrap(), "A=1\nB=2\n");
    }

    #[test]
    fn exists_sees_files_and_directories() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("a/b")).unwrap();
        assert!(fs.exists(Path::new("a")));
        assert!(fs.exists(Path::new("a/b")));
        assert!(!fs.exists(Path::new("a/b/c")));
    }
}
