//! Jimport - idempotent Java import insertion.
//!
//! This crate provides the CLI binary for jimport.
//!
//! ## Modules
//!
//! - `cli` - command orchestration and output rendering
//! - `files` - target collection and filtering
//!
//! The insertion algorithm itself lives in `jimport-core`.

pub mod cli;
pub mod files;

// Re-export core types for convenience
pub use jimport_core::error::{JimportError, OutputErrorCode};
pub use jimport_core::output::{AddResponse, ErrorResponse, FileReport, Summary, SCHEMA_VERSION};
pub use jimport_core::statement::{ImportKind, ImportStatement};
