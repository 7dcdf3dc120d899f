//! Pronunciation rules shared by every language written in a given script.
//!
//! Languages splice their own rules in front of these and drop the ones they
//! override entirely; see [`RuleSet::compose`](crate::engine::RuleSet::compose).

use crate::engine::{Rule, TranscribeError};
use crate::ipa::PulmonicConsonant::*;

/// Generic letter-to-IPA mapping for the Latin script.
pub fn latin_base_rules() -> Result<Vec<Rule>, TranscribeError> {
    Ok(vec![
        Rule::new("a", "a")?,
        Rule::new("b", VoicedBilabialPlosive.symbol())?,
        Rule::new("d", VoicedAlveolarPlosive.symbol())?,
        Rule::new("e", "e")?,
        Rule::new("f", VoicelessLabiodentalFricative.symbol())?,
        Rule::new("g", VoicedVelarPlosive.symbol())?,
        Rule::new("h", VoicelessGlottalFricative.symbol())?,
        Rule::new("i", "i")?,
        Rule::new("k", VoicelessVelarPlosive.symbol())?,
        Rule::new("l", VoicedAlveolarLateralApproximant.symbol())?,
        Rule::new("m", VoicedBilabialNasal.symbol())?,
        Rule::new("n", VoicedAlveolarNasal.symbol())?,
        Rule::new("o", "o")?,
        Rule::new("p", VoicelessBilabialPlosive.symbol())?,
        Rule::new("s", VoicelessAlveolarFricative.symbol())?,
        Rule::new("t", VoicelessAlveolarPlosive.symbol())?,
        Rule::new("u", "u")?,
        Rule::new("v", VoicedLabiodentalFricative.symbol())?,
        Rule::new("w", "w")?,
        Rule::new("y", VoicedPalatalApproximant.symbol())?,
        Rule::new("z", VoicedAlveolarFricative.symbol())?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{RuleSet, TranscribeParams};

    #[test]
    fn base_rules_map_single_letters() {
        let rules = RuleSet::new(latin_base_rules().unwrap()).unwrap();
        let out = rules.rewrite("gymnast", &TranscribeParams::default()).unwrap();
        assert_eq!(out.output, "ɡjmnast");
    }

    #[test]
    fn letters_without_a_base_rule_pass_through() {
        let rules = RuleSet::new(latin_base_rules().unwrap()).unwrap();
        let out = rules.rewrite("cqrx", &TranscribeParams::default()).unwrap();
        assert_eq!(out.output, "cqrx");
    }
}
