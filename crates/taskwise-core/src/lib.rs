//! # taskwise-core
//!
//! Core types, traits, and abstractions for the taskwise assistance engine.
//!
//! This crate provides the foundational data structures and trait definitions
//! that other taskwise crates depend on: task records and enums, the
//! structured results produced by assistance operations, the shared error
//! type, and the inference backend traits.

pub mod error;
pub mod models;
pub mod traits;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use models::*;
pub use traits::*;
