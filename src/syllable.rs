use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::GenerationError;
use crate::phonemes::Role;
use crate::style::EffectiveInventory;

/// Chance that a level-3 syllable gets a trailing extra nucleus
const TRAILING_NUCLEUS_PROBABILITY: f64 = 0.5;

/// Which roles make up a syllable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Complexity {
    /// onset + nucleus
    Simple = 1,
    /// onset + nucleus + coda
    Closed = 2,
    /// onset + nucleus + coda, sometimes followed by another nucleus
    Extended = 3,
}

impl Complexity {
    pub fn level(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Complexity {
    type Error = GenerationError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        match level {
            1 => Ok(Complexity::Simple),
            2 => Ok(Complexity::Closed),
            3 => Ok(Complexity::Extended),
            _ => Err(GenerationError::InvalidComplexity { level }),
        }
    }
}

/// Compose one syllable from independent uniform draws over the inventory.
///
/// Duplicate fragments in a role are drawn proportionally more often.
pub fn generate_syllable<R: Rng + ?Sized>(
    inventory: &EffectiveInventory,
    complexity: Complexity,
    rng: &mut R,
) -> String {
    let mut syllable = String::with_capacity(8);

    syllable.push_str(pick(inventory, Role::Onset, rng));
    syllable.push_str(pick(inventory, Role::Nucleus, rng));

    if complexity == Complexity::Simple {
        return syllable;
    }

    syllable.push_str(pick(inventory, Role::Coda, rng));

    if complexity == Complexity::Extended && rng.gen_bool(TRAILING_NUCLEUS_PROBABILITY) {
        syllable.push_str(pick(inventory, Role::Nucleus, rng));
    }

    syllable
}

fn pick<'a, R: Rng + ?Sized>(
    inventory: &'a EffectiveInventory,
    role: Role,
    rng: &mut R,
) -> &'a str {
    // Every role of an effective inventory is non-empty
    inventory
        .fragments(role)
        .choose(rng)
        .map(String::as_str)
        .unwrap_or_default()
}
