//! The trait implemented by every `#[derive(ChoiceEnum)]` type

use std::fmt;
use std::hash::Hash;

use crate::collections::{Choices, Members};
use crate::common::traits::ChoiceValue;
use crate::error::{ChoiceError, Result};

/// A closed set of declared constants
///
/// Each constant carries three things: its declared name, a human-readable
/// description, and a generated value of type [`ChoiceEnum::Value`]. All of
/// them are fixed at compile time by the derive and listed in declaration
/// order by [`ChoiceEnum::MEMBERS`].
///
/// Equality and hashing follow the generated value, so a name-valued constant
/// can be used wherever a `&str` key is expected and an ordinal-valued one
/// wherever an `i64` is expected.
pub trait ChoiceEnum: Copy + Eq + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// The primitive each constant holds
    type Value: ChoiceValue;

    /// Name of the enum type, used by `Debug` and in errors
    const TYPE_NAME: &'static str;

    /// Every constant in declaration order
    const MEMBERS: &'static [Self];

    /// Declared name of this constant
    fn name(self) -> &'static str;

    /// Human-readable description of this constant
    fn description(self) -> &'static str;

    /// Generated value of this constant
    fn value(self) -> Self::Value;

    /// 1-based declaration position of this constant
    fn position(self) -> usize;

    /// Find a constant by declared name
    fn from_name(name: &str) -> Option<Self>;

    /// Find a constant by generated value
    fn from_value(value: &<Self::Value as ChoiceValue>::Lookup) -> Option<Self>;

    /// Iterate over the constants in declaration order
    #[must_use]
    fn iter() -> Members<Self> {
        Self::MEMBERS.iter().copied()
    }

    /// Constant to description mapping, in declaration order
    #[must_use]
    fn choices() -> Choices<Self> {
        Choices::new()
    }

    /// Declared names in declaration order
    fn names() -> impl Iterator<Item = &'static str> {
        Self::iter().map(Self::name)
    }

    /// Number of declared constants
    #[must_use]
    fn count() -> usize {
        Self::MEMBERS.len()
    }

    /// Like [`ChoiceEnum::from_name`], failing with [`ChoiceError::UnknownName`]
    fn parse_name(name: &str) -> Result<Self> {
        Self::from_name(name).ok_or_else(|| ChoiceError::unknown_name::<Self>(name))
    }

    /// Like [`ChoiceEnum::from_value`], failing with [`ChoiceError::UnknownValue`]
    fn parse_value(value: &<Self::Value as ChoiceValue>::Lookup) -> Result<Self> {
        Self::from_value(value).ok_or_else(|| ChoiceError::unknown_value::<Self>(value))
    }
}
