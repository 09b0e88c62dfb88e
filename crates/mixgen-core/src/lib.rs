//! mixgen core - template selection and composition engine.
//!
//! Given a [`domain::ProjectConfig`], the engine computes a deterministic
//! ordered list of generation operations and executes them through a
//! filesystem port. The crate follows a hexagonal split:
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           mixgen-cli (CLI)              │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      ScaffoldService (two passes)       │
//! │  settings fold  →  apply + execute      │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   Filesystem port + TemplateRegistry    │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented / seeded by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    mixgen-adapters (infrastructure)     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! The generator list is closed and explicitly ordered; see
//! [`generators::registered`].

pub mod application;
pub mod domain;
pub mod error;
pub mod generators;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{Filesystem, GenerationPlan, ScaffoldService};
    pub use crate::domain::{
        Operation, ProjectConfig, RenderContext, SettingsContext, TemplateRegistry,
    };
    pub use crate::error::{MixgenError, MixgenResult};
    pub use crate::generators::Generator;
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
