use super::error::TranscribeError;
use super::rule::Rule;

/// An ordered, validated, immutable table of rules.
///
/// Order is priority: at every position the first eligible rule wins, so
/// digraphs must come before single letters and geminates before singles.
/// Tables are composed once, before any transcription, and never mutated
/// afterwards; a `RuleSet` can be shared across threads freely.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Validate and freeze a table.
    ///
    /// Rejects tables that could stall the rewriter: a rule with an explicit
    /// consume count of zero must be a lookback rule, and must be directly
    /// followed by a plain (non-lookback) rule on the same forward pattern
    /// that does consume. A rule without an explicit count must not match
    /// the empty string.
    pub fn new(rules: Vec<Rule>) -> Result<Self, TranscribeError> {
        for (index, rule) in rules.iter().enumerate() {
            if rule.is_zero_width() {
                if !rule.is_lookback() {
                    return Err(TranscribeError::ZeroConsumption {
                        index,
                        pattern: rule.pattern().to_string(),
                    });
                }
                let paired = rules
                    .get(index + 1)
                    .is_some_and(|next| {
                        next.pattern() == rule.pattern()
                            && !next.is_zero_width()
                            && !next.is_lookback()
                    });
                if !paired {
                    return Err(TranscribeError::UnpairedZeroWidth {
                        index,
                        pattern: rule.pattern().to_string(),
                    });
                }
            }

            if rule.consume_count().is_none() && rule.matches_empty() {
                return Err(TranscribeError::EmptyMatch {
                    index,
                    pattern: rule.pattern().to_string(),
                });
            }

            if rule.is_lookback() && rule.consume_count().is_some() {
                log::debug!("Rule #{index} {rule} looks back with an explicit consume count");
            }
        }

        log::debug!("Built rule set with {} rules", rules.len());
        Ok(Self { rules })
    }

    /// Build a table from language overrides followed by a shared base table.
    ///
    /// Base rules whose forward pattern appears in `shadowed` are dropped;
    /// the rest keep their relative order behind the overrides.
    pub fn compose(
        overrides: Vec<Rule>,
        base: impl IntoIterator<Item = Rule>,
        shadowed: &[&str],
    ) -> Result<Self, TranscribeError> {
        let mut rules = overrides;
        rules.extend(
            base.into_iter()
                .filter(|rule| !shadowed.contains(&rule.pattern())),
        );
        Self::new(rules)
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Take the rules back out, e.g. to compose a derived table.
    pub fn into_rules(self) -> Vec<Rule> {
        self.rules
    }
}
