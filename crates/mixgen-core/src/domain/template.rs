//! Template registry and filesystem operations.
//!
//! A [`TemplateDescriptor`] names a static template body, the destination
//! pattern it renders into, and how it lands on disk (create, append, or
//! bare directory). The full set ships compiled into the adapters crate and
//! is loaded once at startup into a [`TemplateRegistry`]; nothing mutates
//! the registry afterwards.
//!
//! [`Operation`] is the engine's output: the only value that crosses into
//! the filesystem collaborator.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::domain::error::DomainError;
use crate::domain::render::RenderContext;

/// How a template lands on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    /// Render and create a new file; colliding with an existing file is fatal.
    Copy,
    /// Render and append to a shared file, creating it if absent.
    Append,
    /// Create a directory (the body is ignored and empty by convention).
    Directory,
}

/// One registered template: name, body, destination pattern, operation kind.
#[derive(Debug, Clone, Copy)]
pub struct TemplateDescriptor {
    pub name: &'static str,
    pub body: &'static str,
    pub dest_pattern: &'static str,
    pub kind: OperationKind,
}

/// Immutable name → descriptor table, populated once at startup.
#[derive(Debug, Default)]
pub struct TemplateRegistry {
    entries: HashMap<&'static str, TemplateDescriptor>,
}

impl TemplateRegistry {
    /// Build a registry from a static descriptor table.
    ///
    /// A duplicate name is a packaging bug and fails construction.
    pub fn from_descriptors(descriptors: &[TemplateDescriptor]) -> Result<Self, DomainError> {
        let mut entries = HashMap::with_capacity(descriptors.len());
        for descriptor in descriptors {
            if entries.insert(descriptor.name, *descriptor).is_some() {
                return Err(DomainError::DuplicateTemplate {
                    name: descriptor.name.to_string(),
                });
            }
        }
        Ok(Self { entries })
    }

    /// Resolve a template by name. An unknown name indicates a packaging
    /// bug, not a user error.
    pub fn resolve(&self, name: &str) -> Result<&TemplateDescriptor, DomainError> {
        self.entries.get(name).ok_or_else(|| DomainError::UnknownTemplate {
            name: name.to_string(),
        })
    }

    /// Resolve a template and turn it into the operation it implies,
    /// rendering the destination pattern against `context`.
    pub fn plan(&self, name: &str, context: &RenderContext) -> Result<Operation, DomainError> {
        let descriptor = self.resolve(name)?;
        let dest = context.render_path(descriptor.dest_pattern)?;
        Ok(match descriptor.kind {
            OperationKind::Directory => Operation::MakeDirectory { path: dest },
            OperationKind::Copy => Operation::CopyTemplate {
                source: descriptor.name,
                dest,
                context: context.clone(),
            },
            OperationKind::Append => Operation::AppendTemplate {
                source: descriptor.name,
                dest,
                context: context.clone(),
            },
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A concrete filesystem action produced by a generator's apply pass.
#[derive(Debug, Clone)]
pub enum Operation {
    MakeDirectory {
        path: PathBuf,
    },
    CopyTemplate {
        source: &'static str,
        dest: PathBuf,
        context: RenderContext,
    },
    AppendTemplate {
        source: &'static str,
        dest: PathBuf,
        context: RenderContext,
    },
}

impl Operation {
    /// Destination path relative to the project root.
    pub fn dest(&self) -> &Path {
        match self {
            Self::MakeDirectory { path } => path,
            Self::CopyTemplate { dest, .. } | Self::AppendTemplate { dest, .. } => dest,
        }
    }

    /// Source template name, when the operation renders one.
    pub fn source(&self) -> Option<&'static str> {
        match self {
            Self::MakeDirectory { .. } => None,
            Self::CopyTemplate { source, .. } | Self::AppendTemplate { source, .. } => Some(source),
        }
    }
}
