//! Field adapter for the request/response boundary
//!
//! On the wire a constant travels as its declared name; in application code
//! it is the typed constant. `ChoiceField` converts between the two, and the
//! [`by_name`] and [`by_value`] modules expose the same mapping to serde via
//! `#[serde(with = "...")]`.

pub mod by_name;
pub mod by_value;

use std::fmt;
use std::marker::PhantomData;

use log::{debug, trace};

use crate::common::traits::ChoiceEnum;
use crate::config::ChoiceFieldConfig;
use crate::error::{ChoiceError, Result};

/// Converts between constants of `E` and their declared names
pub struct ChoiceField<E> {
    config: ChoiceFieldConfig,
    _marker: PhantomData<fn() -> E>,
}

impl<E: ChoiceEnum> ChoiceField<E> {
    /// Create a field with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ChoiceFieldConfig::default())
    }

    /// Create a field with a custom configuration
    #[must_use]
    pub fn with_config(config: ChoiceFieldConfig) -> Self {
        trace!("Creating choice field for {} with {config:?}", E::TYPE_NAME);
        Self {
            config,
            _marker: PhantomData,
        }
    }

    /// The active configuration
    #[must_use]
    pub const fn config(&self) -> &ChoiceFieldConfig {
        &self.config
    }

    /// `(name, description)` pairs as a client sees them
    pub fn choices(&self) -> impl Iterator<Item = (&'static str, &'static str)> {
        E::iter().map(|member| (member.name(), member.description()))
    }

    /// Outgoing representation of a constant
    #[must_use]
    pub fn to_representation(&self, member: E) -> &'static str {
        member.name()
    }

    /// Read a declared name back into a constant
    ///
    /// Blank input is always an error here; use [`ChoiceField::parse_optional`]
    /// where a missing choice is acceptable.
    pub fn to_internal_value(&self, data: &str) -> Result<E> {
        let input = self.normalize(data);
        if input.is_empty() {
            debug!("Rejected blank input for {}", E::TYPE_NAME);
            return Err(ChoiceError::Blank);
        }

        let found = match E::from_name(input) {
            Some(member) => Some(member),
            None if self.config.case_insensitive => Self::find_ignoring_case(input),
            None => None,
        };

        found.ok_or_else(|| {
            debug!("Rejected {data:?}, not a declared name of {}", E::TYPE_NAME);
            ChoiceError::invalid_choice(data)
        })
    }

    /// Like [`ChoiceField::to_internal_value`], mapping blank input to `None`
    /// when the configuration allows it
    pub fn parse_optional(&self, data: &str) -> Result<Option<E>> {
        if self.config.allow_blank && self.normalize(data).is_empty() {
            return Ok(None);
        }
        self.to_internal_value(data).map(Some)
    }

    /// The single constant whose name matches ignoring ASCII case
    ///
    /// Input matching several names is ambiguous and resolves to nothing.
    fn find_ignoring_case(input: &str) -> Option<E> {
        let mut matches = E::iter().filter(|member| member.name().eq_ignore_ascii_case(input));
        let first = matches.next()?;
        if matches.next().is_some() {
            debug!("Ambiguous input {input:?}, matches several names of {}", E::TYPE_NAME);
            return None;
        }
        Some(first)
    }

    fn normalize<'a>(&self, data: &'a str) -> &'a str {
        if self.config.trim_whitespace {
            data.trim()
        } else {
            data
        }
    }
}

impl<E: ChoiceEnum> Default for ChoiceField<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for ChoiceField<E> {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            _marker: PhantomData,
        }
    }
}

impl<E: ChoiceEnum> fmt::Debug for ChoiceField<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChoiceField")
            .field("enum", &E::TYPE_NAME)
            .field("config", &self.config)
            .finish()
    }
}
