//! Local filesystem adapter using std::fs.

use std::io::{self, Write};
use std::path::Path;

use mixgen_core::{application::Filesystem, error::MixgenResult};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> MixgenResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_new(&self, path: &Path, content: &str) -> MixgenResult<()> {
        // create_new turns a pre-existing file into an error atomically,
        // which is the collision rule the engine relies on.
        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map_err(|e| {
                if e.kind() == io::ErrorKind::AlreadyExists {
                    mixgen_core::application::ApplicationError::PathCollision {
                        path: path.to_path_buf(),
                    }
                    .into()
                } else {
                    map_io_error(path, e, "create file")
                }
            })?;
        file.write_all(content.as_bytes())
            .map_err(|e| map_io_error(path, e, "write file"))
    }

    fn append(&self, path: &Path, content: &str) -> MixgenResult<()> {
        let mut file = std::fs::OpenOptions::new()
            .append(true)
            .create(true)
            .open(path)
            .map_err(|e| map_io_error(path, e, "open file for append"))?;
        file.write_all(content.as_bytes())
            .map_err(|e| map_io_error(path, e, "append to file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> mixgen_core::error::MixgenError {
    use mixgen_core::application::ApplicationError;

    ApplicationError::Filesystem {
        path: path.to_path_buf(),
        reason: format!("failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mixgen_core::application::ApplicationError;
    use mixgen_core::error::MixgenError;
    use tempfile::TempDir;

    #[test]
    fn write_new_then_collision() {
        let temp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let path = temp.path().join("mix.exs");

        fs.write_new(&path, "first").unwrap();
        let err = fs.write_new(&path, "second").unwrap_err();
        assert!(matches!(
            err,
            MixgenError::Application(ApplicationError::PathCollision { .. })
        ));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "first");
    }

    #[test]
    fn append_creates_then_extends() {
        let temp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let path = temp.path().join(".env");

        fs.append(&path, "export A=1\n").unwrap();
        fs.append(&path, "export B=2\n").unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "export A=1\nexport B=2\n"
        );
    }

    #[test]
    fn create_dir_all_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let path = temp.path().join("a/b/c");

        fs.create_dir_all(&path).unwrap();
        fs.create_dir_all(&path).unwrap();
        assert!(fs.exists(&path));
    }
}
