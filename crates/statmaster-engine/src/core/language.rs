use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::UnsupportedLanguageError;

/// Languages the exercises are written in.
///
/// French is the default: Stat'Master follows the French middle-school
/// curriculum and English is the secondary locale.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    #[display("fr")]
    Fr,
    #[display("en")]
    En,
}

impl Language {
    pub const ALL: [Self; 2] = [Self::Fr, Self::En];

    /// Returns the locale code (`"fr"` or `"en"`).
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Fr => "fr",
            Self::En => "en",
        }
    }

    /// Returns the decimal separator used when formatting numbers.
    #[must_use]
    pub const fn decimal_separator(self) -> char {
        match self {
            Self::Fr => ',',
            Self::En => '.',
        }
    }

    /// Parses a locale code, falling back to the default language with a
    /// warning.
    ///
    /// ```
    /// use statmaster_engine::Language;
    ///
    /// assert_eq!(Language::from_code_or_default("EN"), Language::En);
    /// assert_eq!(Language::from_code_or_default("de"), Language::Fr);
    /// ```
    #[must_use]
    pub fn from_code_or_default(code: &str) -> Self {
        code.parse().unwrap_or_else(|err| {
            let fallback = Self::default();
            tracing::warn!(%err, %fallback, "using the default language");
            fallback
        })
    }
}

impl FromStr for Language {
    type Err = UnsupportedLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnsupportedLanguageError { code: s.to_owned() })
    }
}

/// A string available in every supported language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalizedText {
    pub fr: &'static str,
    pub en: &'static str,
}

impl LocalizedText {
    #[must_use]
    pub const fn new(fr: &'static str, en: &'static str) -> Self {
        Self { fr, en }
    }

    /// Returns the text for `language`.
    #[must_use]
    pub const fn get(&self, language: Language) -> &'static str {
        match language {
            Language::Fr => self.fr,
            Language::En => self.en,
        }
    }
}
