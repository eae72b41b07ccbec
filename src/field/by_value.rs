//! Serde helpers that put the generated value on the wire
//!
//! Useful where storage expects the primitive, e.g. an integer column for an
//! ordinal-valued enum.

use std::borrow::Borrow;

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::common::traits::{ChoiceEnum, ChoiceValue};
use crate::error::ChoiceError;

/// Serialize a constant as its generated value
pub fn serialize<E, S>(member: &E, serializer: S) -> Result<S::Ok, S::Error>
where
    E: ChoiceEnum,
    S: Serializer,
{
    member.value().serialize(serializer)
}

/// Deserialize a constant from its generated value
pub fn deserialize<'de, E, D>(deserializer: D) -> Result<E, D::Error>
where
    E: ChoiceEnum,
    D: Deserializer<'de>,
{
    let raw = <<E::Value as ChoiceValue>::Owned as Deserialize>::deserialize(deserializer)?;
    let lookup: &<E::Value as ChoiceValue>::Lookup = raw.borrow();

    E::from_value(lookup).ok_or_else(|| {
        log::debug!("Rejected value {lookup} for {}", E::TYPE_NAME);
        de::Error::custom(ChoiceError::unknown_value::<E>(lookup))
    })
}
