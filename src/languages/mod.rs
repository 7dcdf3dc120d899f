//! Per-language rule tables and lookup by language.
//!
//! Enable languages via Cargo features:
//! - `latin` - Latin, classical and ecclesiastical pronunciations (default)
//!
//! Languages without rule tables get a transcriber whose results are always
//! empty, so callers never have to special-case them.

pub mod base;

#[cfg(feature = "latin")]
pub mod latin;

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{CompletionStatus, TranscribeError, Transcriber, Variant};

/// Languages known to the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    French,
    German,
    Hindi,
    Italian,
    Latin,
    Portuguese,
    Russian,
    Spanish,
}

impl Language {
    pub const ALL: &'static [Language] = &[
        Language::English,
        Language::French,
        Language::German,
        Language::Hindi,
        Language::Italian,
        Language::Latin,
        Language::Portuguese,
        Language::Russian,
        Language::Spanish,
    ];

    /// ISO 639-1 code.
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::French => "fr",
            Language::German => "de",
            Language::Hindi => "hi",
            Language::Italian => "it",
            Language::Latin => "la",
            Language::Portuguese => "pt",
            Language::Russian => "ru",
            Language::Spanish => "es",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::French => "French",
            Language::German => "German",
            Language::Hindi => "Hindi",
            Language::Italian => "Italian",
            Language::Latin => "Latin",
            Language::Portuguese => "Portuguese",
            Language::Russian => "Russian",
            Language::Spanish => "Spanish",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = TranscribeError;

    /// Parse an ISO 639-1 code or an English language name, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Language::ALL
            .iter()
            .copied()
            .find(|lang| {
                lang.code().eq_ignore_ascii_case(wanted) || lang.name().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| TranscribeError::UnknownLanguage(s.to_string()))
    }
}

/// Get a transcriber for `language`.
///
/// Languages without rule tables (or whose feature is disabled) get a
/// transcriber that always returns an empty set. Errors only if a built-in
/// rule table is malformed.
pub fn transcriber_for(language: Language) -> Result<Box<dyn Transcriber>, TranscribeError> {
    match language {
        #[cfg(feature = "latin")]
        Language::Latin => Ok(Box::new(latin::transcriber()?)),
        _ => {
            log::debug!("No rule tables for {language}, using an empty transcriber");
            Ok(Box::new(NoOpTranscriber))
        }
    }
}

/// Like [`transcriber_for`], but takes a language code or name. Unknown
/// identifiers get the empty transcriber rather than an error.
pub fn transcriber_for_code(code: &str) -> Result<Box<dyn Transcriber>, TranscribeError> {
    match code.parse::<Language>() {
        Ok(language) => transcriber_for(language),
        Err(_) => {
            log::debug!("Unknown language '{code}', using an empty transcriber");
            Ok(Box::new(NoOpTranscriber))
        }
    }
}

/// Transcriber for languages with no rules: every result set is empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpTranscriber;

impl Transcriber for NoOpTranscriber {
    fn transcribe(&self, _native_text: &str) -> Result<BTreeSet<Variant>, TranscribeError> {
        Ok(BTreeSet::new())
    }

    fn variant_labels(&self) -> Vec<&str> {
        Vec::new()
    }

    fn completion_status(&self) -> CompletionStatus {
        CompletionStatus::Stub
    }
}
