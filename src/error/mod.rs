//! Error handling for choice lookups and the field adapter.

use std::fmt;

use crate::common::traits::ChoiceEnum;

/// Errors raised when input does not name or hold a declared constant
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChoiceError {
    /// No constant is declared under the given name
    #[error("{enum_name} has no constant named \"{name}\"")]
    UnknownName {
        enum_name: &'static str,
        name: String,
    },

    /// No constant holds the given value
    #[error("{enum_name} has no constant with value {value}")]
    UnknownValue {
        enum_name: &'static str,
        value: String,
    },

    /// Input rejected at the serialization boundary
    #[error("\"{input}\" is not a valid choice.")]
    InvalidChoice { input: String },

    /// Blank input where a choice is required
    #[error("This field may not be blank.")]
    Blank,
}

impl ChoiceError {
    /// Build an `UnknownName` error for `E`
    #[must_use]
    pub fn unknown_name<E: ChoiceEnum>(name: &str) -> Self {
        Self::UnknownName {
            enum_name: E::TYPE_NAME,
            name: name.to_owned(),
        }
    }

    /// Build an `UnknownValue` error for `E`
    #[must_use]
    pub fn unknown_value<E: ChoiceEnum>(value: &(impl fmt::Display + ?Sized)) -> Self {
        Self::UnknownValue {
            enum_name: E::TYPE_NAME,
            value: value.to_string(),
        }
    }

    /// Build an `InvalidChoice` error from the raw input
    #[must_use]
    pub fn invalid_choice(input: &str) -> Self {
        Self::InvalidChoice {
            input: input.to_owned(),
        }
    }
}

/// Result type for choice operations
pub type Result<T> = std::result::Result<T, ChoiceError>;
