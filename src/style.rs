use std::fmt;
use tracing::{debug, warn};

use crate::error::{GenerationError, Result};
use crate::phonemes::{PhonemeSet, Role};

/// Phonetic flavor applied on top of a language pack.
///
/// Names outside the curated set map to [`Style::Unrecognized`], which leaves
/// the base inventory untouched. Build values with `From<&str>`; a hand-built
/// `Unrecognized("Modern")` is normalized to [`Style::Modern`] when a saved
/// config is read back.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Style {
    Medieval,
    Modern,
    Fantasy,
    Unrecognized(String),
}

/// Fragments a style appends to or strips from one role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleEdit {
    pub additions: &'static [&'static str],
    pub removals: &'static [&'static str],
}

impl RoleEdit {
    const fn add(additions: &'static [&'static str]) -> Self {
        Self {
            additions,
            removals: &[],
        }
    }

    const fn remove(removals: &'static [&'static str]) -> Self {
        Self {
            additions: &[],
            removals,
        }
    }
}

/// Per-role edits for one named style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleModifier {
    pub onsets: RoleEdit,
    pub nuclei: RoleEdit,
    pub codas: RoleEdit,
}

impl StyleModifier {
    pub fn edit(&self, role: Role) -> &RoleEdit {
        match role {
            Role::Onset => &self.onsets,
            Role::Nucleus => &self.nuclei,
            Role::Coda => &self.codas,
        }
    }
}

const MEDIEVAL: StyleModifier = StyleModifier {
    onsets: RoleEdit::add(&["th", "wh", "gh", "kn", "wr", "st", "sc"]),
    nuclei: RoleEdit::add(&["ae", "ea", "eo", "io"]),
    codas: RoleEdit::add(&["th", "ld", "rd", "st", "sh"]),
};

const MODERN: StyleModifier = StyleModifier {
    onsets: RoleEdit::remove(&["kn", "wr", "gh", "sc"]),
    nuclei: RoleEdit::add(&["oo", "ee", "ai", "ou"]),
    codas: RoleEdit::remove(&["th", "ld", "rd", "sh"]),
};

const FANTASY: StyleModifier = StyleModifier {
    onsets: RoleEdit::add(&["x", "z", "q", "zh", "kh", "gh", "th"]),
    nuclei: RoleEdit::add(&["ae", "io", "ua", "eu", "yy"]),
    codas: RoleEdit::add(&["x", "z", "q", "th", "sh", "kh"]),
};

impl Style {
    pub const CURATED: [Style; 3] = [Style::Medieval, Style::Modern, Style::Fantasy];

    /// The edits this style makes, or `None` for an unrecognized name
    pub fn modifier(&self) -> Option<&'static StyleModifier> {
        match self {
            Style::Medieval => Some(&MEDIEVAL),
            Style::Modern => Some(&MODERN),
            Style::Fantasy => Some(&FANTASY),
            Style::Unrecognized(_) => None,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Style::Medieval => "Medieval",
            Style::Modern => "Modern",
            Style::Fantasy => "Fantasy",
            Style::Unrecognized(name) => name,
        }
    }

    /// Build the effective inventory for this style from a base set.
    ///
    /// Per role, additions are appended after the base fragments and only then
    /// are removals filtered out, so a style cannot cancel its own additions.
    /// Onsets and nuclei must survive non-empty; an emptied coda role falls
    /// back to the single "no coda" fragment.
    pub fn apply(&self, base: &PhonemeSet) -> Result<EffectiveInventory> {
        let mut phonemes = base.clone();

        match self.modifier() {
            Some(modifier) => {
                for role in [Role::Onset, Role::Nucleus, Role::Coda] {
                    apply_edit(phonemes.fragments_mut(role), modifier.edit(role));
                }
            }
            None => warn!(style = self.name(), "unrecognized style, using base inventory"),
        }

        for role in [Role::Onset, Role::Nucleus] {
            if phonemes.fragments(role).is_empty() {
                return Err(GenerationError::EmptyRoleSet {
                    style: self.name().to_string(),
                    role,
                });
            }
        }
        if phonemes.codas.is_empty() {
            phonemes.codas.push(String::new());
        }

        debug!(
            style = self.name(),
            onsets = phonemes.onsets.len(),
            nuclei = phonemes.nuclei.len(),
            codas = phonemes.codas.len(),
            "built effective inventory"
        );

        Ok(EffectiveInventory { phonemes })
    }
}

fn apply_edit(fragments: &mut Vec<String>, edit: &RoleEdit) {
    fragments.extend(edit.additions.iter().map(|f| f.to_string()));
    if !edit.removals.is_empty() {
        fragments.retain(|f| !edit.removals.contains(&f.as_str()));
    }
}

impl From<&str> for Style {
    fn from(name: &str) -> Self {
        match name {
            "Medieval" => Style::Medieval,
            "Modern" => Style::Modern,
            "Fantasy" => Style::Fantasy,
            other => Style::Unrecognized(other.to_string()),
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A phoneme set that has been through a style and is ready to draw from.
///
/// Only [`Style::apply`] builds one, so onsets, nuclei and codas are all
/// guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveInventory {
    phonemes: PhonemeSet,
}

impl EffectiveInventory {
    pub fn fragments(&self, role: Role) -> &[String] {
        self.phonemes.fragments(role)
    }

    pub fn phonemes(&self) -> &PhonemeSet {
        &self.phonemes
    }
}
