//! Plugin project generation: request types, file layout, template rendering
//! and archive packaging.
//!
//! Everything in this crate is pure. Given the same [`GenerateRequest`] the
//! produced files and archive bytes are identical.

pub mod archive;
pub mod error;
pub mod layout;
pub mod naming;
pub mod template;
pub mod types;

pub use archive::{ArchiveBuilder, GeneratedArchive};
pub use error::GenerateError;
pub use layout::{FileKind, PlannedFile, ProjectLayout};
pub use template::TemplateEngine;
pub use types::{CommandSpec, GenerateRequest};
