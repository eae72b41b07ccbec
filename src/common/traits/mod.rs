//! Common traits used across the codebase
//!
//! `ChoiceEnum` is what the derive implements; `ChoiceValue` bounds the
//! primitives a constant may hold.

pub mod choice;
pub mod value;

// Re-export core traits for convenience
pub use choice::ChoiceEnum;
pub use value::ChoiceValue;
