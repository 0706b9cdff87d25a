//! Localized notification and label texts
//!
//! Plain Rust structs per language, checked at compile time.
//! The language is chosen per screen instead of through a global switch.

use serde::{Deserialize, Serialize};

mod en_us;
pub mod keys;
mod pt_br;

pub use keys::*;

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    /// English (United States)
    #[default]
    #[serde(rename = "en-US", alias = "en")]
    EnUs,
    /// Portuguese (Brazil)
    #[serde(rename = "pt-BR", alias = "pt")]
    PtBr,
}

impl Language {
    /// All supported languages
    pub fn all() -> &'static [Language] {
        &[Language::EnUs, Language::PtBr]
    }

    /// Display name, written in the language itself
    pub fn display_name(self) -> &'static str {
        match self {
            Language::EnUs => "English",
            Language::PtBr => "Português (Brasil)",
        }
    }

    /// BCP 47 code
    pub fn code(self) -> &'static str {
        match self {
            Language::EnUs => "en-US",
            Language::PtBr => "pt-BR",
        }
    }

    /// Parse from a BCP 47 code
    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "en-US" | "en" => Some(Language::EnUs),
            "pt-BR" | "pt" => Some(Language::PtBr),
            _ => None,
        }
    }
}

/// Translations for `lang`
///
/// # Example
///
/// ```
/// use airdesk_core::i18n::{texts, Language};
///
/// assert_eq!(texts(Language::PtBr).users.created, "Usuário criado com sucesso!");
/// ```
pub fn texts(lang: Language) -> &'static Translations {
    match lang {
        Language::EnUs => &en_us::TRANSLATIONS,
        Language::PtBr => &pt_br::TRANSLATIONS,
    }
}
