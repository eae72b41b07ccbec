//! Common traits
//!
//! Shared by the collections, the field adapter and the generated code.

pub mod traits;

// Re-export common traits for easier imports
pub use traits::*;
