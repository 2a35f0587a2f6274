//! Hamsieve Core — shared types, errors, and utilities.
//!
//! This crate provides the foundational types used across all Hamsieve
//! crates. It has no internal Hamsieve dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`label`]: Classification label newtype

pub mod error;
pub mod label;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use label::Label;
