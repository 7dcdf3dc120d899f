use std::fmt;
use std::sync::Arc;

use regex::Regex;

use super::error::TranscribeError;

/// Signature of a dynamic output function: takes the output produced so far
/// and returns the complete new output.
pub type TransformFn = dyn Fn(&str) -> String + Send + Sync;

/// What a rule writes when it fires.
#[derive(Clone)]
pub enum Emit {
    /// Append a fixed string to the output.
    Append(String),
    /// Replace the whole output with the result of the function.
    Transform(Arc<TransformFn>),
}

impl Emit {
    /// Compute the new output from the output produced so far.
    pub fn apply(&self, so_far: &str) -> String {
        match self {
            Emit::Append(text) => {
                let mut out = String::with_capacity(so_far.len() + text.len());
                out.push_str(so_far);
                out.push_str(text);
                out
            }
            Emit::Transform(transform) => transform(so_far),
        }
    }
}

impl fmt::Debug for Emit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Emit::Append(text) => f.debug_tuple("Append").field(text).finish(),
            Emit::Transform(_) => f.write_str("Transform(..)"),
        }
    }
}

/// A compiled regex that remembers the source it was written as.
#[derive(Debug, Clone)]
struct Pattern {
    source: String,
    regex: Regex,
}

impl Pattern {
    /// Anchored at the start of the unconsumed input.
    fn forward(source: &str) -> Result<Self, TranscribeError> {
        Self::compile(source, format!("^(?:{source})"))
    }

    /// Anchored at the end of the consumed input.
    fn backward(source: &str) -> Result<Self, TranscribeError> {
        Self::compile(source, format!("(?:{source})$"))
    }

    fn compile(source: &str, anchored: String) -> Result<Self, TranscribeError> {
        let regex = Regex::new(&anchored).map_err(|e| TranscribeError::Pattern {
            pattern: source.to_string(),
            source: e,
        })?;
        Ok(Self {
            source: source.to_string(),
            regex,
        })
    }
}

/// One replacement rule, from a regex matching native text to the IPA it
/// produces.
///
/// The forward pattern is matched at the cursor against the unconsumed part
/// of the word. A lookback rule additionally carries a backward pattern that
/// must match the tail of the already-consumed part; both must match for the
/// rule to fire.
///
/// Rules are immutable once built. Any state a rule depends on (a vowel
/// count, the previous symbol) is read from the output passed to [`Emit`].
///
/// # Examples
///
/// ```
/// use ipa_transcribe::engine::Rule;
///
/// let geminate = Rule::new("tt", "tː")?;
/// assert_eq!(geminate.match_len("ga", "tto"), Some(2));
///
/// // "ch" before a vowel: look at three letters, consume two.
/// let aspirate = Rule::new("ch[aeiou]", "kʰ")?.consuming(2);
/// assert_eq!(aspirate.consume_count(), Some(2));
/// # Ok::<(), ipa_transcribe::TranscribeError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Rule {
    lookback: Option<Pattern>,
    pattern: Pattern,
    emit: Emit,
    consume: Option<usize>,
}

impl Rule {
    /// Rule that appends `output` when `pattern` matches at the cursor.
    pub fn new(pattern: &str, output: impl Into<String>) -> Result<Self, TranscribeError> {
        Ok(Self {
            lookback: None,
            pattern: Pattern::forward(pattern)?,
            emit: Emit::Append(output.into()),
            consume: None,
        })
    }

    /// Rule whose output is computed from the output produced so far.
    ///
    /// `transform` must return the complete new output, not a fragment.
    pub fn transform<F>(pattern: &str, transform: F) -> Result<Self, TranscribeError>
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        Ok(Self {
            lookback: None,
            pattern: Pattern::forward(pattern)?,
            emit: Emit::Transform(Arc::new(transform)),
            consume: None,
        })
    }

    /// Rule that only fires when `behind` matches the end of the consumed input.
    pub fn lookback(
        behind: &str,
        pattern: &str,
        output: impl Into<String>,
    ) -> Result<Self, TranscribeError> {
        Ok(Self {
            lookback: Some(Pattern::backward(behind)?),
            ..Self::new(pattern, output)?
        })
    }

    /// Lookback rule with a dynamic output.
    pub fn lookback_transform<F>(
        behind: &str,
        pattern: &str,
        transform: F,
    ) -> Result<Self, TranscribeError>
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        Ok(Self {
            lookback: Some(Pattern::backward(behind)?),
            ..Self::transform(pattern, transform)?
        })
    }

    /// Override the number of input characters consumed when the rule fires.
    ///
    /// Without this the rule consumes the length of its forward match.
    /// A count of zero is only accepted by [`RuleSet`](super::RuleSet) for
    /// lookback rules directly followed by a consuming rule on the same
    /// forward pattern.
    pub fn consuming(mut self, count: usize) -> Self {
        self.consume = Some(count);
        self
    }

    /// Source of the forward pattern, as written in the rule table.
    pub fn pattern(&self) -> &str {
        &self.pattern.source
    }

    /// Source of the backward pattern, if this is a lookback rule.
    pub fn lookback_pattern(&self) -> Option<&str> {
        self.lookback.as_ref().map(|p| p.source.as_str())
    }

    pub fn consume_count(&self) -> Option<usize> {
        self.consume
    }

    pub fn is_lookback(&self) -> bool {
        self.lookback.is_some()
    }

    pub fn is_zero_width(&self) -> bool {
        self.consume == Some(0)
    }

    /// Whether the forward pattern accepts the empty string.
    pub fn matches_empty(&self) -> bool {
        self.pattern.regex.is_match("")
    }

    pub fn emit(&self, so_far: &str) -> String {
        self.emit.apply(so_far)
    }

    /// Check eligibility at the boundary between `consumed` and `remaining`.
    ///
    /// Returns the length of the forward match in characters, or `None` if
    /// the rule does not apply here. Has no side effects.
    pub fn match_len(&self, consumed: &str, remaining: &str) -> Option<usize> {
        let found = self.pattern.regex.find(remaining)?;
        if let Some(lookback) = &self.lookback {
            if !lookback.regex.is_match(consumed) {
                return None;
            }
        }
        Some(remaining[..found.end()].chars().count())
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Rule(")?;
        if let Some(lookback) = &self.lookback {
            write!(f, "{:?}, ", lookback.source)?;
        }
        write!(f, "{:?}, ", self.pattern.source)?;
        match &self.emit {
            Emit::Append(text) => write!(f, "{text:?}")?,
            Emit::Transform(_) => f.write_str("<transform>")?,
        }
        if let Some(count) = self.consume {
            write!(f, ", {count}")?;
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_pattern_is_anchored_at_cursor() {
        let rule = Rule::new("t", "t").unwrap();
        assert_eq!(rule.match_len("", "tea"), Some(1));
        assert_eq!(rule.match_len("", "ate"), None);
    }

    #[test]
    fn match_length_counts_characters_not_bytes() {
        let rule = Rule::new("ā", "aː").unwrap();
        assert_eq!(rule.match_len("", "āb"), Some(1));
    }

    #[test]
    fn lookback_matches_suffix_of_consumed_input() {
        let rule = Rule::lookback("[aeiou]", "s[aeiou]", "z").unwrap().consuming(1);
        assert_eq!(rule.match_len("ro", "sa"), Some(2));
        assert_eq!(rule.match_len("rosa", "se"), Some(2));
        assert_eq!(rule.match_len("ar", "sa"), None);
        assert_eq!(rule.match_len("", "sa"), None);
    }

    #[test]
    fn caret_in_lookback_means_word_initial() {
        let rule = Rule::lookback("^", "r", "rː").unwrap();
        assert_eq!(rule.match_len("", "roma"), Some(1));
        assert_eq!(rule.match_len("ca", "ro"), None);
    }

    #[test]
    fn dollar_in_forward_pattern_means_word_final() {
        let rule = Rule::new("m$", "").unwrap();
        assert_eq!(rule.match_len("rosa", "m"), Some(1));
        assert_eq!(rule.match_len("ru", "ma"), None);
    }

    #[test]
    fn detects_patterns_matching_empty_string() {
        assert!(Rule::new("b*", "β").unwrap().matches_empty());
        assert!(Rule::new("m?", "").unwrap().matches_empty());
        assert!(!Rule::new("m", "m").unwrap().matches_empty());
        assert!(!Rule::new(r"\b", "").unwrap().matches_empty());
    }

    #[test]
    fn append_and_transform_emit() {
        let append = Rule::new("a", "a").unwrap();
        assert_eq!(append.emit("k"), "ka");

        let transform = Rule::transform("h", |so_far: &str| format!("{so_far}ʰ")).unwrap();
        assert_eq!(transform.emit("p"), "pʰ");

        let rewrite = Rule::transform("x", |_: &str| "reset".to_string()).unwrap();
        assert_eq!(rewrite.emit("anything"), "reset");
    }

    #[test]
    fn invalid_pattern_reports_source() {
        let err = Rule::new("[unclosed", "x").unwrap_err();
        match err {
            TranscribeError::Pattern { pattern, .. } => assert_eq!(pattern, "[unclosed"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn display_mirrors_table_syntax() {
        let rule = Rule::lookback("^", "r", "rː").unwrap().consuming(1);
        assert_eq!(rule.to_string(), r#"Rule("^", "r", "rː", 1)"#);

        let rule = Rule::transform("m$", |s: &str| s.to_string()).unwrap();
        assert_eq!(rule.to_string(), r#"Rule("m$", <transform>)"#);
    }
}
