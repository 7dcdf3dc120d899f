//! Language-agnostic rule-based rewriting engine.
//!
//! A [`Rule`] pairs a regex over native text with the IPA it produces. A
//! [`RuleSet`] is an ordered, validated table of rules, and
//! [`RuleSet::rewrite`] consumes a word left to right, applying the first
//! eligible rule at each position and falling back to the configured
//! [`Fallback`] policy when nothing matches.
//!
//! # Example
//!
//! ```
//! use ipa_transcribe::engine::{Rule, RuleSet, TranscribeParams};
//!
//! let rules = RuleSet::new(vec![
//!     Rule::lookback("^", "r", "rː")?,
//!     Rule::new("tt", "tː")?,
//!     Rule::new("r", "ɾ")?,
//!     Rule::new("c", "k")?,
//! ])?;
//!
//! let rewrite = rules.rewrite("Roma", &TranscribeParams::default())?;
//! assert_eq!(rewrite.output, "rːoma");
//! # Ok::<(), ipa_transcribe::TranscribeError>(())
//! ```

pub mod error;
pub mod params;
pub mod rewriter;
pub mod rule;
pub mod rule_set;
pub mod text;

pub use error::TranscribeError;
pub use params::{Fallback, TranscribeParams, TranscribeParamsBuilder};
pub use rewriter::{Rewrite, Unmatched};
pub use rule::{Emit, Rule};
pub use rule_set::RuleSet;
pub use text::{split_text_parts, TextPart};
