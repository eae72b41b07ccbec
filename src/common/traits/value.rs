//! Primitive types a generated constant value can have

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;

use serde::Serialize;
use serde::de::DeserializeOwned;

mod private {
    pub trait Sealed {}

    impl Sealed for &'static str {}
    impl Sealed for i64 {}
}

/// The underlying primitive of a choice constant
///
/// Implemented for `&'static str` (name-valued constants) and `i64`
/// (ordinal-valued constants). Sealed, the derive only emits these two.
pub trait ChoiceValue:
    Copy + Eq + Hash + fmt::Debug + fmt::Display + Serialize + Send + Sync + 'static + private::Sealed
{
    /// Borrowed form used to look a constant up by value
    type Lookup: ?Sized + Eq + Hash + fmt::Display;

    /// Owned form read from a deserializer
    type Owned: DeserializeOwned + Borrow<Self::Lookup>;

    /// View this value as its lookup form
    fn as_lookup(&self) -> &Self::Lookup;
}

impl ChoiceValue for &'static str {
    type Lookup = str;
    type Owned = String;

    fn as_lookup(&self) -> &str {
        self
    }
}

impl ChoiceValue for i64 {
    type Lookup = i64;
    type Owned = i64;

    fn as_lookup(&self) -> &i64 {
        self
    }
}
