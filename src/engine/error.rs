/// Errors raised while building rule tables or running a transcription.
///
/// Everything except [`TranscribeError::Io`] and [`TranscribeError::Config`]
/// points at a malformed rule table, never at bad user input: any finite
/// input string is transcribable by a well-formed table.
#[derive(thiserror::Error, Debug)]
pub enum TranscribeError {
    #[error("Invalid rule pattern `{pattern}`: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error("Rule #{index} (`{pattern}`) consumes no input and has no lookback pattern")]
    ZeroConsumption { index: usize, pattern: String },
    #[error(
        "Zero-width rule #{index} (`{pattern}`) must be immediately followed by a \
         consuming rule with the same forward pattern"
    )]
    UnpairedZeroWidth { index: usize, pattern: String },
    #[error("Rule #{index} (`{pattern}`) matched an empty string without an explicit consume count")]
    EmptyMatch { index: usize, pattern: String },
    #[error("Rule #{index} (`{pattern}`) consumes {requested} characters but only {available} remain")]
    OverConsumption {
        index: usize,
        pattern: String,
        requested: usize,
        available: usize,
    },
    #[error("Variant '{0}' not found. Call variant_labels() to see available variants.")]
    VariantNotFound(String),
    #[error("Unknown language '{0}'")]
    UnknownLanguage(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid params: {0}")]
    Config(String),
}
