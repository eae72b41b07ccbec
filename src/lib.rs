//! Enumerated constants that are both framework choices and typed values.
//!
//! `#[derive(ChoiceEnum)]` turns a fieldless enum into a closed set of
//! declared constants. Every constant has a declared name, a human-readable
//! description and a generated value, which is either the name itself or the
//! constant's 1-based declaration position:
//!
//! ```rust
//! use choice_enum::ChoiceEnum;
//!
//! #[derive(Clone, Copy, PartialEq, Eq, ChoiceEnum)]
//! enum Letter {
//!     /// A foo
//!     FOO,
//!     /// A bar
//!     BAR,
//! }
//!
//! assert_eq!(Letter::FOO, "FOO");
//! assert_eq!(format!("{:?}", Letter::BAR), "Letter.BAR");
//! assert_eq!(
//!     Letter::choices().to_vec(),
//!     vec![(Letter::FOO, "A foo"), (Letter::BAR, "A bar")]
//! );
//! ```

// Lets the derive's `::choice_enum` paths resolve inside this crate too
extern crate self as choice_enum;

pub mod collections;
pub mod common;
pub mod config;
pub mod error;
pub mod field;

// Re-export the most common types for easier use
pub use collections::{Choices, Members};
pub use common::traits::{ChoiceEnum, ChoiceValue};
pub use config::ChoiceFieldConfig;
pub use error::{ChoiceError, Result};
pub use field::ChoiceField;

// Derive macro
pub use choice_enum_macros::ChoiceEnum;

#[doc(hidden)]
pub mod __private {
    pub use serde;
}
