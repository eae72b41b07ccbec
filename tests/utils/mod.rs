//! Shared fixtures for the integration tests
#![allow(dead_code, clippy::upper_case_acronyms)]

use choice_enum::ChoiceEnum;

/// Install a test logger once per test binary
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Name-valued constants
#[derive(Clone, Copy, PartialEq, Eq, ChoiceEnum)]
pub enum Letter {
    #[choice(description = "A foo")]
    FOO,
    #[choice(description = "A bar")]
    BAR,
}

/// Ordinal-valued constants
#[derive(Clone, Copy, PartialEq, Eq, ChoiceEnum)]
#[choice(values = "ordinal")]
pub enum Priority {
    /// Can wait
    LOW,
    /// Regular work
    NORMAL,
    /// Needs attention today
    HIGH,
}

/// Idiomatic variant names exposed under upper-case declared names
#[derive(Clone, Copy, PartialEq, Eq, ChoiceEnum)]
#[choice(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewState {
    /// Waiting for a reviewer
    InReview,
    /// Accepted by a reviewer
    Approved,
    #[choice(value = "rejected-v2", description = "Sent back to the author")]
    ChangesRequested,
}

/// Ordinals with a custom start and explicit overrides
#[derive(Clone, Copy, PartialEq, Eq, ChoiceEnum)]
#[choice(values = "ordinal", start = 0, serde = "value")]
pub enum Weekday {
    Monday,
    Tuesday,
    #[choice(description = "Day off")]
    Sunday = 6,
    #[choice(value = -1)]
    Unknown,
}
