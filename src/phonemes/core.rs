use include_dir::{include_dir, Dir};
use serde::Deserialize;
use serde_json::from_str;
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::LazyLock;
use strum::IntoEnumIterator;
use tracing::debug;

use crate::error::{GenerationError, Result};

static PACK_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/phonemes/packs");

static PACKS: LazyLock<Result<HashMap<Language, PhonemePack>>> = LazyLock::new(load_packs);

/// The curated language packs
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum_macros::Display,
    strum_macros::EnumIter,
    strum_macros::IntoStaticStr,
)]
pub enum Language {
    #[strum(serialize = "en")]
    English,
    #[strum(serialize = "nl")]
    Dutch,
    #[strum(serialize = "de")]
    German,
    #[strum(serialize = "sv")]
    Swedish,
    #[strum(serialize = "no")]
    Norwegian,
}

impl Language {
    /// Two-letter pack code, e.g. `"en"`
    pub fn code(self) -> &'static str {
        self.into()
    }

    /// The embedded pack for this language, shared by every caller
    pub fn pack(self) -> Result<&'static PhonemePack> {
        match &*PACKS {
            Ok(packs) => packs.get(&self).ok_or_else(|| GenerationError::PackLoad {
                code: self.code().to_string(),
                reason: "pack missing from table".to_string(),
            }),
            Err(err) => Err(err.clone()),
        }
    }

    /// An owned copy of this language's base phoneme set
    pub fn phonemes(self) -> Result<PhonemeSet> {
        self.pack().map(|pack| pack.phonemes.clone())
    }
}

impl FromStr for Language {
    type Err = GenerationError;

    fn from_str(code: &str) -> Result<Self> {
        Language::iter()
            .find(|language| language.code() == code)
            .ok_or_else(|| GenerationError::UnknownLanguage {
                code: code.to_string(),
            })
    }
}

/// The three syllable-internal fragment roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display, strum_macros::EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    Onset,
    Nucleus,
    Coda,
}

/// Onset, nucleus and coda fragments for one language.
///
/// Duplicated fragments are kept on purpose: selection is uniform over the
/// list, so a fragment listed twice is drawn twice as often.
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PhonemeSet {
    pub onsets: Vec<String>,
    pub nuclei: Vec<String>,
    /// May hold the empty fragment, meaning "no coda"
    pub codas: Vec<String>,
}

impl PhonemeSet {
    pub fn new(onsets: Vec<String>, nuclei: Vec<String>, codas: Vec<String>) -> Self {
        Self {
            onsets,
            nuclei,
            codas,
        }
    }

    pub fn fragments(&self, role: Role) -> &[String] {
        match role {
            Role::Onset => &self.onsets,
            Role::Nucleus => &self.nuclei,
            Role::Coda => &self.codas,
        }
    }

    pub(crate) fn fragments_mut(&mut self, role: Role) -> &mut Vec<String> {
        match role {
            Role::Onset => &mut self.onsets,
            Role::Nucleus => &mut self.nuclei,
            Role::Coda => &mut self.codas,
        }
    }

    pub fn contains(&self, role: Role, fragment: &str) -> bool {
        self.fragments(role).iter().any(|f| f == fragment)
    }
}

/// One embedded pack file: metadata plus the base phoneme set
#[derive(Deserialize, Clone, Debug)]
pub struct PhonemePack {
    pub code: String,
    pub name: String,
    #[serde(flatten)]
    pub phonemes: PhonemeSet,
}

/// Resolve a language code to a fresh copy of its base phoneme set
pub fn lookup(code: &str) -> Result<PhonemeSet> {
    code.parse::<Language>()?.phonemes()
}

fn load_packs() -> Result<HashMap<Language, PhonemePack>> {
    Language::iter()
        .map(|language| read_pack(language).map(|pack| (language, pack)))
        .collect()
}

fn read_pack(language: Language) -> Result<PhonemePack> {
    let code = language.code();
    let pack_error = |reason: String| GenerationError::PackLoad {
        code: code.to_string(),
        reason,
    };

    let file = PACK_DIR
        .get_file(format!("{code}.json"))
        .ok_or_else(|| pack_error("pack file not found".to_string()))?;

    let file_as_str = file
        .contents_utf8()
        .ok_or_else(|| pack_error("pack file is not valid UTF-8".to_string()))?;

    let pack: PhonemePack = from_str(file_as_str).map_err(|e| pack_error(e.to_string()))?;

    if pack.code != code {
        return Err(pack_error(format!("pack declares code '{}'", pack.code)));
    }

    debug!(
        code,
        onsets = pack.phonemes.onsets.len(),
        nuclei = pack.phonemes.nuclei.len(),
        codas = pack.phonemes.codas.len(),
        "loaded phoneme pack"
    );

    Ok(pack)
}
