//! Configuration for `ChoiceField`.

/// How a [`crate::field::ChoiceField`] reads incoming text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChoiceFieldConfig {
    /// Accept empty input as "no choice" in `parse_optional`
    pub allow_blank: bool,
    /// Strip surrounding whitespace before matching
    pub trim_whitespace: bool,
    /// Match declared names ignoring ASCII case
    pub case_insensitive: bool,
}

impl ChoiceFieldConfig {
    /// Set whether blank input is accepted
    #[must_use]
    pub const fn with_allow_blank(mut self, allow_blank: bool) -> Self {
        self.allow_blank = allow_blank;
        self
    }

    /// Set whether surrounding whitespace is stripped
    #[must_use]
    pub const fn with_trim_whitespace(mut self, trim_whitespace: bool) -> Self {
        self.trim_whitespace = trim_whitespace;
        self
    }

    /// Set whether names match ignoring ASCII case
    #[must_use]
    pub const fn with_case_insensitive(mut self, case_insensitive: bool) -> Self {
        self.case_insensitive = case_insensitive;
        self
    }
}
