//! Procedural macros for the choice-enum crate
//!
//! This crate provides the `ChoiceEnum` derive, which turns a fieldless enum
//! into a closed set of declared constants with static name, value and
//! description tables.

use proc_macro::TokenStream;

// Import modules
mod utils;
mod choice_enum_impl;

// Tests
#[cfg(test)]
mod tests;

/// Derive macro for declaring choice constants
///
/// Each unit variant becomes one constant. Its generated value is either its
/// declared name (the default) or its 1-based declaration position.
///
/// # Example with names as values
///
/// ```rust,ignore
/// #[derive(Clone, Copy, PartialEq, Eq, ChoiceEnum)]
/// #[choice(rename_all = "SCREAMING_SNAKE_CASE")]
/// enum Status {
///     /// Waiting for review
///     Pending,
///
///     #[choice(description = "Accepted by a reviewer")]
///     Accepted,
/// }
///
/// assert_eq!(Status::Pending, "PENDING");
/// assert_eq!(format!("{:?}", Status::Accepted), "Status.ACCEPTED");
/// ```
///
/// # Example with ordinals as values
///
/// ```rust,ignore
/// #[derive(Clone, Copy, PartialEq, Eq, ChoiceEnum)]
/// #[choice(values = "ordinal")]
/// enum Priority {
///     #[choice(description = "Can wait")]
///     LOW,
///     #[choice(description = "Needs attention")]
///     HIGH,
///     #[choice(description = "Drop everything", value = 99)]
///     URGENT,
/// }
///
/// assert_eq!(Priority::HIGH, 2_i64);
/// assert_eq!(Priority::HIGH.to_string(), "HIGH");
/// ```
#[proc_macro_derive(ChoiceEnum, attributes(choice))]
pub fn derive_choice_enum(input: TokenStream) -> TokenStream {
    choice_enum_impl::process_derive_choice_enum(input)
}
