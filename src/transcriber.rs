use std::collections::BTreeSet;

use crate::engine::{
    split_text_parts, Rewrite, RuleSet, TextPart, TranscribeError, TranscribeParams, Unmatched,
};
use crate::languages::Language;
use crate::{CompletionStatus, Transcriber, Variant};

/// A transcriber driven entirely by rule tables, one per variant.
///
/// Each variant runs its own table over the input with fresh state; nothing
/// is shared between variants except the read-only input.
///
/// # Examples
///
/// ```
/// use ipa_transcribe::engine::{Rule, RuleSet};
/// use ipa_transcribe::languages::Language;
/// use ipa_transcribe::RuleBasedTranscriber;
///
/// let rules = RuleSet::new(vec![Rule::new("c", "k")?, Rule::new("s", "s̠")?])?;
/// let transcriber = RuleBasedTranscriber::new(Language::Latin, "classical", rules);
/// assert_eq!(transcriber.transcribe_text("Casa")?, "kas̠a");
/// # Ok::<(), ipa_transcribe::TranscribeError>(())
/// ```
#[derive(Debug, Clone)]
pub struct RuleBasedTranscriber {
    language: Language,
    status: CompletionStatus,
    variants: Vec<(String, RuleSet)>,
    params: TranscribeParams,
}

impl RuleBasedTranscriber {
    /// Create a transcriber with its primary variant.
    pub fn new(language: Language, label: impl Into<String>, rules: RuleSet) -> Self {
        Self {
            language,
            status: CompletionStatus::InProgress,
            variants: vec![(label.into(), rules)],
            params: TranscribeParams::default(),
        }
    }

    /// Add another variant. Adding an existing label replaces its table.
    pub fn with_variant(mut self, label: impl Into<String>, rules: RuleSet) -> Self {
        let label = label.into();
        match self.variants.iter_mut().find(|(l, _)| *l == label) {
            Some(entry) => entry.1 = rules,
            None => self.variants.push((label, rules)),
        }
        self
    }

    pub fn with_params(mut self, params: TranscribeParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_status(mut self, status: CompletionStatus) -> Self {
        self.status = status;
        self
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn params(&self) -> &TranscribeParams {
        &self.params
    }

    /// Transcribe with the primary variant only.
    pub fn transcribe_text(&self, native_text: &str) -> Result<String, TranscribeError> {
        let (_, rules) = &self.variants[0];
        Ok(self.rewrite_text(rules, native_text)?.output)
    }

    /// Transcribe with the variant labelled `label`.
    pub fn transcribe_variant(
        &self,
        label: &str,
        native_text: &str,
    ) -> Result<String, TranscribeError> {
        Ok(self.transcribe_report(label, native_text)?.output)
    }

    /// Transcribe with the variant labelled `label`, keeping the characters
    /// the fallback policy had to handle.
    ///
    /// Unmatched positions are character offsets into `native_text`. They are
    /// only recorded under [`Fallback::Report`](crate::engine::Fallback::Report)
    /// and [`Fallback::Skip`](crate::engine::Fallback::Skip).
    pub fn transcribe_report(
        &self,
        label: &str,
        native_text: &str,
    ) -> Result<Rewrite, TranscribeError> {
        let (_, rules) = self
            .variants
            .iter()
            .find(|(l, _)| l == label)
            .ok_or_else(|| TranscribeError::VariantNotFound(label.to_string()))?;
        self.rewrite_text(rules, native_text)
    }

    fn rewrite_text(&self, rules: &RuleSet, text: &str) -> Result<Rewrite, TranscribeError> {
        if !self.params.per_word {
            return rules.rewrite(text, &self.params);
        }

        let mut result = Rewrite {
            output: String::with_capacity(text.len()),
            unmatched: Vec::new(),
        };
        let mut offset = 0;
        for part in split_text_parts(text) {
            match part {
                TextPart::Word(word) => {
                    let rewrite = rules.rewrite(word, &self.params)?;
                    result.output.push_str(&rewrite.output);
                    result.unmatched.extend(rewrite.unmatched.into_iter().map(|u| Unmatched {
                        position: offset + u.position,
                        ..u
                    }));
                    offset += word.chars().count();
                }
                TextPart::Separator(separator) => {
                    result.output.push_str(separator);
                    offset += separator.chars().count();
                }
            }
        }
        Ok(result)
    }
}

impl Transcriber for RuleBasedTranscriber {
    fn transcribe(&self, native_text: &str) -> Result<BTreeSet<Variant>, TranscribeError> {
        let mut variants = BTreeSet::new();
        for (label, rules) in &self.variants {
            let rewrite = self.rewrite_text(rules, native_text)?;
            variants.insert(Variant::new(label.as_str(), rewrite.output));
        }
        Ok(variants)
    }

    fn variant_labels(&self) -> Vec<&str> {
        self.variants.iter().map(|(label, _)| label.as_str()).collect()
    }

    fn completion_status(&self) -> CompletionStatus {
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Fallback, Rule};

    fn british_american() -> RuleBasedTranscriber {
        let british = RuleSet::new(vec![
            Rule::new("a", "ɑː").unwrap(),
            Rule::new("r$", "").unwrap(),
            Rule::new("r", "ɹ").unwrap(),
        ])
        .unwrap();
        let american = RuleSet::new(vec![
            Rule::new("a", "æ").unwrap(),
            Rule::new("r", "ɹ").unwrap(),
        ])
        .unwrap();
        RuleBasedTranscriber::new(Language::English, "british", british)
            .with_variant("american", american)
    }

    #[test]
    fn produces_one_string_per_variant() {
        let result = british_american().transcribe("car").unwrap();
        let expected: BTreeSet<Variant> = [Variant::new("british", "cɑː"), Variant::new("american", "cæɹ")]
            .into_iter()
            .collect();
        assert_eq!(result, expected);
    }

    #[test]
    fn variant_lookup_by_label() {
        let t = british_american();
        assert_eq!(t.variant_labels(), vec!["british", "american"]);
        assert_eq!(t.transcribe_text("far").unwrap(), "fɑː");
        assert_eq!(t.transcribe_variant("american", "far").unwrap(), "fæɹ");
        assert!(matches!(
            t.transcribe_variant("scottish", "far"),
            Err(TranscribeError::VariantNotFound(label)) if label == "scottish"
        ));
    }

    #[test]
    fn replacing_a_variant_keeps_one_entry() {
        let replacement = RuleSet::new(vec![Rule::new("a", "a").unwrap()]).unwrap();
        let t = british_american().with_variant("american", replacement);
        assert_eq!(t.variant_labels().len(), 2);
        assert_eq!(t.transcribe_variant("american", "car").unwrap(), "car");
    }

    #[test]
    fn each_word_gets_fresh_state() {
        // "r$" only fires at the end of a word, so per-word splitting matters.
        let t = british_american();
        assert_eq!(t.transcribe_text("car park").unwrap(), "cɑː pɑːɹk");

        let whole = t.clone().with_params(TranscribeParams {
            per_word: false,
            ..Default::default()
        });
        assert_eq!(whole.transcribe_text("car park").unwrap(), "cɑːɹ pɑːɹk");
    }

    #[test]
    fn separators_are_copied_verbatim() {
        let t = british_american();
        assert_eq!(t.transcribe_text("  car,\tbar!").unwrap(), "  cɑː,\tbɑː!");
    }

    #[test]
    fn skip_fallback_applies_per_word() {
        let t = british_american().with_params(TranscribeParams {
            fallback: Fallback::Skip,
            ..Default::default()
        });
        assert_eq!(t.transcribe_text("car bar").unwrap(), "ɑː ɑː");
    }

    #[test]
    fn report_keeps_unmatched_with_text_offsets() {
        let t = british_american().with_params(TranscribeParams {
            fallback: Fallback::Report,
            ..Default::default()
        });
        let report = t.transcribe_report("british", "car, xa").unwrap();
        assert_eq!(report.output, "cɑː, xɑː");
        assert_eq!(
            report.unmatched,
            vec![
                Unmatched { character: 'c', position: 0 },
                Unmatched { character: 'x', position: 5 },
            ]
        );
        // The plain entry points still return just the text.
        assert_eq!(t.transcribe_variant("british", "car, xa").unwrap(), report.output);
    }

    #[test]
    fn report_offsets_when_not_splitting_words() {
        let t = british_american().with_params(TranscribeParams {
            fallback: Fallback::Skip,
            per_word: false,
            ..Default::default()
        });
        let report = t.transcribe_report("american", "a q").unwrap();
        assert_eq!(report.output, "æ");
        let positions: Vec<usize> = report.unmatched.iter().map(|u| u.position).collect();
        assert_eq!(positions, vec![1, 2]);
    }

    #[test]
    fn report_for_unknown_variant_fails() {
        assert!(matches!(
            british_american().transcribe_report("scottish", "car"),
            Err(TranscribeError::VariantNotFound(_))
        ));
    }

    #[test]
    fn concurrent_transcription_shares_tables() {
        let t = std::sync::Arc::new(british_american());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let t = std::sync::Arc::clone(&t);
                std::thread::spawn(move || t.transcribe_text("star").unwrap())
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), "stɑː");
        }
    }
}
