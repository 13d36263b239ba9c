// Library surface shared by the CLI and the integration tests.
pub mod capitalization;
pub mod config;
pub mod error;
pub mod output;
pub mod phonemes;
pub mod style;
pub mod syllable;
pub mod username;

pub use capitalization::{capitalize, Capitalization};
pub use error::GenerationError;
pub use phonemes::{lookup, Language, PhonemeSet, Role};
pub use style::{EffectiveInventory, Style};
pub use syllable::{generate_syllable, Complexity};
pub use username::{generate_batch, generate_batch_with, GenerationConfig, UsernameGenerator};
