//! Core infrastructure for jimport.
//!
//! This crate provides everything below the CLI surface:
//! - Import statement model and FQN validation
//! - Line-based text utilities with terminator fidelity
//! - The insertion algorithm (duplicate detection, placement precedence)
//! - Per-file apply pipeline with atomic write-back
//! - Unified-diff rendering for dry-run previews
//! - JSON output types for CLI responses
//! - Error types and error codes

pub mod apply;
pub mod diff;
pub mod error;
pub mod insert;
pub mod output;
pub mod statement;
pub mod text;
