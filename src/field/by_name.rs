//! Serde helpers that put the declared name on the wire
//!
//! ```rust,ignore
//! #[derive(Serialize, Deserialize)]
//! struct Ticket {
//!     #[serde(with = "choice_enum::field::by_name")]
//!     priority: Priority,
//! }
//! ```

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, Deserializer, Visitor};
use serde::ser::Serializer;

use crate::common::traits::ChoiceEnum;
use crate::field::ChoiceField;

/// Serialize a constant as its declared name
pub fn serialize<E, S>(member: &E, serializer: S) -> Result<S::Ok, S::Error>
where
    E: ChoiceEnum,
    S: Serializer,
{
    serializer.serialize_str(member.name())
}

/// Deserialize a constant from its declared name
pub fn deserialize<'de, E, D>(deserializer: D) -> Result<E, D::Error>
where
    E: ChoiceEnum,
    D: Deserializer<'de>,
{
    deserializer.deserialize_str(NameVisitor(PhantomData))
}

struct NameVisitor<E>(PhantomData<fn() -> E>);

impl<E: ChoiceEnum> Visitor<'_> for NameVisitor<E> {
    type Value = E;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a declared name of {}", E::TYPE_NAME)
    }

    fn visit_str<DeError>(self, value: &str) -> Result<Self::Value, DeError>
    where
        DeError: de::Error,
    {
        ChoiceField::<E>::new()
            .to_internal_value(value)
            .map_err(de::Error::custom)
    }
}
