use serde::{Deserialize, Serialize};

use super::error::TranscribeError;
use super::params::{Fallback, TranscribeParams};
use super::rule_set::RuleSet;

/// A character no rule matched, recorded by the reporting fallback policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unmatched {
    pub character: char,
    /// Character offset within the rewritten input. The transcriber turns
    /// per-word offsets into offsets within the whole text.
    pub position: usize,
}

/// The result of rewriting one word.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rewrite {
    pub output: String,
    pub unmatched: Vec<Unmatched>,
}

/// Cursor state for one word: the prefix already read, the suffix still to
/// read, and the output accumulated so far.
struct TranscriptionState<'a> {
    input: &'a str,
    /// Byte offset of the boundary between consumed and remaining input.
    cursor: usize,
    /// Characters consumed so far.
    position: usize,
    output: String,
}

impl<'a> TranscriptionState<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            cursor: 0,
            position: 0,
            output: String::new(),
        }
    }

    fn consumed(&self) -> &'a str {
        let input = self.input;
        &input[..self.cursor]
    }

    fn remaining(&self) -> &'a str {
        let input = self.input;
        &input[self.cursor..]
    }

    fn is_exhausted(&self) -> bool {
        self.cursor == self.input.len()
    }

    /// Move `count` characters from the remaining input to the consumed input.
    /// Returns false, without moving, if fewer than `count` remain.
    fn advance(&mut self, count: usize) -> bool {
        let remaining = self.remaining();
        let bytes = match remaining.char_indices().nth(count) {
            Some((offset, _)) => offset,
            None if remaining.chars().count() == count => remaining.len(),
            None => return false,
        };
        self.cursor += bytes;
        self.position += count;
        true
    }
}

impl RuleSet {
    /// Rewrite one word with this table.
    ///
    /// At each position the rules are scanned in order and the first eligible
    /// one is applied; the scan restarts from the first rule at the new
    /// position. A zero-width lookback rule rewrites the output and lets the
    /// scan carry on with the next rule at the same position. When nothing
    /// matches, the fallback policy advances one character.
    pub fn rewrite(
        &self,
        word: &str,
        params: &TranscribeParams,
    ) -> Result<Rewrite, TranscribeError> {
        let normalized;
        let word = if params.lowercase {
            normalized = word.to_lowercase();
            normalized.as_str()
        } else {
            word
        };

        let mut state = TranscriptionState::new(word);
        let mut unmatched = Vec::new();

        while !state.is_exhausted() {
            if !self.apply_first_match(&mut state)? {
                apply_fallback(&mut state, params.fallback, &mut unmatched);
            }
        }

        Ok(Rewrite {
            output: state.output,
            unmatched,
        })
    }

    /// Returns whether a consuming rule fired.
    fn apply_first_match(&self, state: &mut TranscriptionState<'_>) -> Result<bool, TranscribeError> {
        for (index, rule) in self.rules().iter().enumerate() {
            let Some(match_len) = rule.match_len(state.consumed(), state.remaining()) else {
                continue;
            };

            state.output = rule.emit(&state.output);

            if rule.is_zero_width() {
                continue;
            }

            let count = rule.consume_count().unwrap_or(match_len);
            if count == 0 {
                return Err(TranscribeError::EmptyMatch {
                    index,
                    pattern: rule.pattern().to_string(),
                });
            }
            if count != match_len {
                log::trace!("Rule #{index} {rule} matched {match_len} characters, consuming {count}");
            }
            if !state.advance(count) {
                return Err(TranscribeError::OverConsumption {
                    index,
                    pattern: rule.pattern().to_string(),
                    requested: count,
                    available: state.remaining().chars().count(),
                });
            }
            return Ok(true);
        }
        Ok(false)
    }
}

fn apply_fallback(
    state: &mut TranscriptionState<'_>,
    fallback: Fallback,
    unmatched: &mut Vec<Unmatched>,
) {
    let Some(character) = state.remaining().chars().next() else {
        return;
    };
    let position = state.position;

    match fallback {
        Fallback::PassThrough => state.output.push(character),
        Fallback::Report => {
            log::warn!("No rule for {character:?} at position {position}; copying it through");
            unmatched.push(Unmatched { character, position });
            state.output.push(character);
        }
        Fallback::Skip => {
            log::warn!("No rule for {character:?} at position {position}; skipping it");
            unmatched.push(Unmatched { character, position });
        }
    }
    state.advance(1);
}
