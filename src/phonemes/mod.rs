pub mod core;

// Re-export the main types for convenience
pub use self::core::{lookup, Language, PhonemePack, PhonemeSet, Role};
