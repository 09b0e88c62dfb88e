//! Driven (output) ports - implemented by infrastructure.
//!
//! The engine never touches storage directly; every write goes through
//! this capability. The `mixgen-adapters` crate provides implementations.

use std::path::Path;

use crate::error::MixgenResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `mixgen_adapters::filesystem::LocalFilesystem` (production)
/// - `mixgen_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - `write_new` is create-only: a pre-existing file is a collision error,
///   never an overwrite. Generation targets a directory assumed absent.
/// - `append` creates the file with the given content when it is absent,
///   so append order between generators is not load-bearing.
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories; no-op if present.
    fn create_dir_all(&self, path: &Path) -> MixgenResult<()>;

    /// Create a new file with the given content. Collision if it exists.
    fn write_new(&self, path: &Path, content: &str) -> MixgenResult<()>;

    /// Append content to a file, creating it with the content if absent.
    fn append(&self, path: &Path, content: &str) -> MixgenResult<()>;

    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;
}
