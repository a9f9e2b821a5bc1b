use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported site languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Mk,
    Sq,
}

impl Locale {
    /// Every supported locale, in URL listing order
    pub const ALL: [Locale; 3] = [Locale::En, Locale::Mk, Locale::Sq];

    /// Fallback for localized text tables
    pub const TEXT_DEFAULT: Locale = Locale::En;

    /// Fallback for the locale path segment
    pub const ROUTING_DEFAULT: Locale = Locale::Mk;

    pub fn as_str(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Mk => "mk",
            Locale::Sq => "sq",
        }
    }

    /// Parse a locale code, ignoring case and surrounding whitespace
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Locale::En),
            "mk" => Some(Locale::Mk),
            "sq" => Some(Locale::Sq),
            _ => None,
        }
    }

    /// Parse a locale code, using `default` for anything unrecognized
    pub fn from_code_or(code: &str, default: Locale) -> Self {
        Self::from_code(code).unwrap_or(default)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
