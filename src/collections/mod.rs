//! Declaration-ordered views over a choice enum's constants
//!
//! Nothing here owns storage: every view walks `ChoiceEnum::MEMBERS`, the
//! static table emitted by the derive.

use std::fmt;
use std::iter::{Copied, Map};
use std::marker::PhantomData;
use std::slice;

use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::common::traits::{ChoiceEnum, ChoiceValue};

/// Iterator over the constants of `E` in declaration order
pub type Members<E> = Copied<slice::Iter<'static, E>>;

/// Iterator over `(constant, description)` pairs
pub type ChoicesIter<E> = Map<Members<E>, fn(E) -> (E, &'static str)>;

/// Mapping from every constant of `E` to its description
///
/// This is what a presentation layer consumes as a choices list. Keys are the
/// constants themselves, so they compare and hash like their generated value.
pub struct Choices<E> {
    _marker: PhantomData<fn() -> E>,
}

impl<E: ChoiceEnum> Choices<E> {
    /// Create the view for `E`
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }

    /// Number of declared constants
    #[must_use]
    pub fn len(&self) -> usize {
        E::MEMBERS.len()
    }

    /// Whether `E` declares no constants
    #[must_use]
    pub fn is_empty(&self) -> bool {
        E::MEMBERS.is_empty()
    }

    /// Description of a constant
    #[must_use]
    pub fn get(&self, member: E) -> Option<&'static str> {
        Some(member.description())
    }

    /// Description of the constant holding `value`
    #[must_use]
    pub fn get_by_value(&self, value: &<E::Value as ChoiceValue>::Lookup) -> Option<&'static str> {
        E::from_value(value).map(E::description)
    }

    /// Whether some constant holds `value`
    #[must_use]
    pub fn contains_value(&self, value: &<E::Value as ChoiceValue>::Lookup) -> bool {
        E::from_value(value).is_some()
    }

    /// Iterate over `(constant, description)` pairs in declaration order
    #[must_use]
    pub fn iter(&self) -> ChoicesIter<E> {
        E::iter().map(with_description::<E> as fn(E) -> (E, &'static str))
    }

    /// The constants, in declaration order
    #[must_use]
    pub fn keys(&self) -> Members<E> {
        E::iter()
    }

    /// The descriptions, in declaration order
    pub fn descriptions(&self) -> impl Iterator<Item = &'static str> {
        E::iter().map(E::description)
    }

    /// Collect the pairs into a vector
    #[must_use]
    pub fn to_vec(&self) -> Vec<(E, &'static str)> {
        self.iter().collect()
    }
}

fn with_description<E: ChoiceEnum>(member: E) -> (E, &'static str) {
    (member, member.description())
}

impl<E: ChoiceEnum> Default for Choices<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for Choices<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for Choices<E> {}

impl<E: ChoiceEnum> fmt::Debug for Choices<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<E: ChoiceEnum> IntoIterator for Choices<E> {
    type Item = (E, &'static str);
    type IntoIter = ChoicesIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<E: ChoiceEnum> IntoIterator for &Choices<E> {
    type Item = (E, &'static str);
    type IntoIter = ChoicesIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Serialized as a sequence of `[value, description]` pairs
impl<E: ChoiceEnum> Serialize for Choices<E> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for (member, description) in self.iter() {
            seq.serialize_element(&(member.value(), description))?;
        }
        seq.end()
    }
}
