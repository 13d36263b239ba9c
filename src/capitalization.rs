use std::fmt;

/// The only delimiter `camelCase` splits on; the suffix step is the sole source of it
const CAMEL_CASE_DELIMITER: char = '_';

/// Trait for case transforms applied to a finished username
pub trait CaseFormatter: Send + Sync {
    fn format(&self, raw: &str) -> String;
}

/// Every character lowercased
pub struct LowercaseFormatter;

impl CaseFormatter for LowercaseFormatter {
    fn format(&self, raw: &str) -> String {
        raw.to_lowercase()
    }
}

/// First character uppercased, everything after it lowercased
pub struct CapitalizeFormatter;

impl CaseFormatter for CapitalizeFormatter {
    fn format(&self, raw: &str) -> String {
        capitalize_word(raw)
    }
}

/// Each underscore-separated part capitalized, then joined with no separator
pub struct CamelCaseFormatter;

impl CaseFormatter for CamelCaseFormatter {
    fn format(&self, raw: &str) -> String {
        raw.split(CAMEL_CASE_DELIMITER).map(capitalize_word).collect()
    }
}

/// Leaves the username untouched
pub struct IdentityFormatter;

impl CaseFormatter for IdentityFormatter {
    fn format(&self, raw: &str) -> String {
        raw.to_string()
    }
}

static LOWERCASE: LowercaseFormatter = LowercaseFormatter;
static CAPITALIZE: CapitalizeFormatter = CapitalizeFormatter;
static CAMEL_CASE: CamelCaseFormatter = CamelCaseFormatter;
static IDENTITY: IdentityFormatter = IdentityFormatter;

/// Case mode for the final username.
///
/// Unknown mode names are kept as [`Capitalization::Unrecognized`] and format
/// as the identity. Build values with `From<&str>`: an `Unrecognized` holding a
/// known name such as `"lowercase"` still formats as the identity, but it comes
/// back as the recognized variant once it goes through a saved config.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Capitalization {
    Lowercase,
    Capitalize,
    CamelCase,
    Unrecognized(String),
}

impl Capitalization {
    pub fn formatter(&self) -> &'static dyn CaseFormatter {
        match self {
            Capitalization::Lowercase => &LOWERCASE,
            Capitalization::Capitalize => &CAPITALIZE,
            Capitalization::CamelCase => &CAMEL_CASE,
            Capitalization::Unrecognized(_) => &IDENTITY,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Capitalization::Lowercase => "lowercase",
            Capitalization::Capitalize => "capitalize",
            Capitalization::CamelCase => "camelCase",
            Capitalization::Unrecognized(name) => name,
        }
    }
}

impl From<&str> for Capitalization {
    fn from(name: &str) -> Self {
        match name {
            "lowercase" => Capitalization::Lowercase,
            "capitalize" => Capitalization::Capitalize,
            "camelCase" => Capitalization::CamelCase,
            other => Capitalization::Unrecognized(other.to_string()),
        }
    }
}

impl fmt::Display for Capitalization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Apply `mode` to a raw username
pub fn capitalize(raw: &str, mode: &Capitalization) -> String {
    mode.formatter().format(raw)
}

fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut word: String = first.to_uppercase().collect();
            word.push_str(&chars.as_str().to_lowercase());
            word
        }
        None => String::new(),
    }
}
