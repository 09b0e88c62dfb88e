//! Application layer for mixgen.
//!
//! This layer contains:
//! - **ScaffoldService**: the two-pass composition driver
//! - **Ports**: interface definitions (traits) for external dependencies
//! - **Errors**: application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain` and
//! `crate::generators`.

pub mod error;
pub mod ports;
pub mod scaffold;

pub use error::ApplicationError;
pub use ports::Filesystem;
pub use scaffold::{GenerationPlan, ScaffoldService};
