use thiserror::Error as ThisError;

use crate::phonemes::Role;

/// Everything that can reject a generation call.
///
/// All of these are raised while the configuration is validated, before any
/// random draw, so a failed call never yields a partial batch.
#[derive(ThisError, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// Language code outside the supported packs
    #[error("unknown language code '{code}' (expected one of: en, nl, de, sv, no)")]
    UnknownLanguage { code: String },

    /// Syllable complexity outside 1..=3
    #[error("syllable complexity must be 1, 2 or 3, got {level}")]
    InvalidComplexity { level: u8 },

    /// Minimum syllable count above the maximum
    #[error("min syllables ({min}) cannot be greater than max syllables ({max})")]
    InvalidRange { min: u32, max: u32 },

    /// Syllable counts start at one
    #[error("syllable counts must be at least 1")]
    InvalidSyllableCount,

    /// A style stripped every fragment out of a role that must not be empty
    #[error("style '{style}' leaves no {role} fragments")]
    EmptyRoleSet { style: String, role: Role },

    /// An embedded pack could not be deserialized
    #[error("phoneme pack '{code}' is corrupt: {reason}")]
    PackLoad { code: String, reason: String },
}

pub type Result<T> = std::result::Result<T, GenerationError>;
