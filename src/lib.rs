//! # ipa-transcribe
//!
//! A Rust library for transcribing text written in a language's native
//! orthography into the International Phonetic Alphabet.
//!
//! ## Features
//!
//! - **Rule-based engine**: ordered regex rules with lookback context, explicit
//!   consume counts and output transforms that can read the output so far
//! - **Prestige variants**: one input, several labelled pronunciations
//! - **Language dispatch**: unsupported languages yield an empty result instead
//!   of an error
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! ipa-transcribe = { version = "2026.10", features = ["latin"] }
//! ```
//!
//! ```
//! use ipa_transcribe::{languages::{transcriber_for, Language}, Transcriber};
//!
//! let latin = transcriber_for(Language::Latin)?;
//! for variant in latin.transcribe("Gallia est omnis divisa")? {
//!     println!("{}: {}", variant.label, variant.ipa);
//! }
//! # Ok::<(), ipa_transcribe::TranscribeError>(())
//! ```

pub mod engine;
pub mod ipa;
pub mod languages;
pub mod transcriber;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

pub use engine::TranscribeError;
pub use transcriber::RuleBasedTranscriber;

/// One labelled pronunciation of an input text.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Variant {
    /// Variant label (e.g. `"classical"`).
    pub label: String,
    /// Broad IPA transcription.
    pub ipa: String,
}

impl Variant {
    pub fn new(label: impl Into<String>, ipa: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ipa: ipa.into(),
        }
    }
}

/// How far a transcriber's rule tables are from covering the orthography.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionStatus {
    Complete,
    InProgress,
    /// No rules at all; every transcription is empty.
    Stub,
}

/// Common interface for native-text to IPA transcribers.
///
/// Transcribers hold no per-call state, so one instance can serve many
/// threads at once.
///
/// The aim is not to capture every dialect, only the pronunciation of one or
/// a few standard or prestige varieties that every speaker understands.
pub trait Transcriber: Send + Sync {
    /// Transcribe the text into one IPA string per supported variant.
    ///
    /// An empty set means no transcription is available.
    fn transcribe(&self, native_text: &str) -> Result<BTreeSet<Variant>, TranscribeError>;

    /// Labels of the variants [`transcribe`](Transcriber::transcribe) produces.
    fn variant_labels(&self) -> Vec<&str>;

    fn completion_status(&self) -> CompletionStatus;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_order_by_label() {
        let set: BTreeSet<Variant> = [Variant::new("b", "x"), Variant::new("a", "y")]
            .into_iter()
            .collect();
        let labels: Vec<&str> = set.iter().map(|v| v.label.as_str()).collect();
        assert_eq!(labels, vec!["a", "b"]);
    }

    #[test]
    fn variant_serializes_to_json() {
        let json = serde_json::to_string(&Variant::new("classical", "kas̠a")).unwrap();
        assert_eq!(json, r#"{"label":"classical","ipa":"kas̠a"}"#);
    }
}
