use std::path::Path;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use super::error::TranscribeError;

/// What to do with a character no rule matches.
///
/// Every policy advances exactly one character, so the rewriter always
/// terminates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fallback {
    /// Copy the character to the output unchanged.
    #[default]
    PassThrough,
    /// Copy the character and record it as unmatched.
    Report,
    /// Record the character as unmatched and leave it out of the output.
    Skip,
}

/// Parameters for a transcription request.
///
/// ```
/// use ipa_transcribe::engine::{Fallback, TranscribeParamsBuilder};
///
/// let params = TranscribeParamsBuilder::default()
///     .fallback(Fallback::Report)
///     .build()
///     .unwrap();
/// assert!(params.lowercase);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(default)]
#[serde(default)]
pub struct TranscribeParams {
    /// Policy for characters no rule matches.
    pub fallback: Fallback,
    /// Case-fold the input before rewriting.
    pub lowercase: bool,
    /// Give each word its own state and copy separators through verbatim.
    /// When false the whole input is rewritten as a single word.
    pub per_word: bool,
}

impl Default for TranscribeParams {
    fn default() -> Self {
        Self {
            fallback: Fallback::PassThrough,
            lowercase: true,
            per_word: true,
        }
    }
}

impl TranscribeParams {
    /// Load params from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self, TranscribeError> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| TranscribeError::Config(format!("Failed to parse JSON: {e}")))
    }
}
