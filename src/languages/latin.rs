//! Latin, in two prestige pronunciations.
//!
//! - `classical`: the reconstructed pronunciation of the late Republic. Long
//!   vowels are written with macrons, `v`/`u` and `j`/`i` keep the
//!   consonant/vowel distinction, and the Greek digraphs ch, ph and th before
//!   a vowel are read as educated aspirates.
//! - `ecclesiastical`: the Italianate church pronunciation, with palatalised
//!   c and g before front vowels, voiced intervocalic s and silent h.

use crate::engine::{Fallback, Rule, RuleSet, TranscribeError, TranscribeParams};
use crate::ipa::diacritic::{is_combining, LONG, NASALIZED, NON_SYLLABIC};
use crate::languages::base::latin_base_rules;
use crate::languages::Language;
use crate::{CompletionStatus, RuleBasedTranscriber};

pub const CLASSICAL: &str = "classical";
pub const ECCLESIASTICAL: &str = "ecclesiastical";

const VOWELS: &str = "[aeiouyāēīōūȳ]";
/// Front vowels and the digraphs that were once front vowels.
const FRONT: &str = "(?:[eiyēīȳ]|ae|oe)";

/// Latin transcriber producing both pronunciations, classical first.
pub fn transcriber() -> Result<RuleBasedTranscriber, TranscribeError> {
    let params = TranscribeParams {
        fallback: Fallback::Report,
        ..Default::default()
    };
    Ok(
        RuleBasedTranscriber::new(Language::Latin, CLASSICAL, classical_rules()?)
            .with_variant(ECCLESIASTICAL, ecclesiastical_rules()?)
            .with_params(params)
            .with_status(CompletionStatus::InProgress),
    )
}

/// Word-final vowel + m: the m is dropped and the vowel before it comes out
/// nasalised and long.
///
/// After a diphthong the tilde goes on the syllabic nucleus, and no length
/// mark is added. The tilde is a combining U+0303, never a precomposed letter.
fn nasalize_final_vowel(so_far: &str) -> String {
    let stem = so_far.strip_suffix(LONG).unwrap_or(so_far);
    let last = stem
        .char_indices()
        .rev()
        .find(|&(_, c)| !is_combining(c))
        .map_or(0, |(index, _)| index);
    let (head, glide) = stem.split_at(last);
    if !head.is_empty() && glide.contains(NON_SYLLABIC) {
        format!("{head}{NASALIZED}{glide}")
    } else {
        format!("{stem}{NASALIZED}{LONG}")
    }
}

pub fn classical_rules() -> Result<RuleSet, TranscribeError> {
    let overrides = vec![
        // word-initial r is trilled like rr
        Rule::lookback("^", "r", "rː")?,
        // Greek loans
        Rule::new(&format!("ch{VOWELS}"), "kʰ")?.consuming(2),
        Rule::new(&format!("ph{VOWELS}"), "pʰ")?.consuming(2),
        Rule::new(&format!("th{VOWELS}"), "tʰ")?.consuming(2),
        Rule::new("rh", "r")?,
        Rule::new("z", "z̠ː")?,
        // labiovelars
        Rule::new("qu", "kʷ")?,
        Rule::lookback("n", &format!("gu{VOWELS}"), "ɡʷ")?.consuming(2),
        // geminates
        Rule::new("rr", "rː")?,
        Rule::new("ll", "lː")?,
        Rule::new("cc", "kː")?,
        Rule::new("mm", "mː")?,
        Rule::new("nn", "nː")?,
        Rule::new("bb", "bː")?,
        Rule::new("dd", "dː")?,
        Rule::new("gg", "ɡː")?,
        Rule::new("tt", "tː")?,
        Rule::new("ff", "fː")?,
        Rule::new("pp", "pː")?,
        Rule::new("ss", "s̠ː")?,
        Rule::new("gn", "ŋn")?,
        // b devoices before voiceless s and t
        Rule::new("b[st]", "p")?.consuming(1),
        // consonantal i: word-initial before a vowel, doubled between vowels
        Rule::lookback("^", &format!("i{VOWELS}"), "j")?.consuming(1),
        Rule::lookback(VOWELS, &format!("i{VOWELS}"), "jj")?.consuming(1),
        Rule::lookback_transform(VOWELS, "m$", nasalize_final_vowel)?,
        Rule::new("x", "ks̠")?,
        // s is always retracted
        Rule::new("s", "s̠")?,
        Rule::new("r", "ɾ")?,
        Rule::new("c", "k")?,
        Rule::new("k", "k")?,
        Rule::new("j", "j")?,
        Rule::new("v", "w")?,
        // diphthongs
        Rule::new("ae", "ae̝̯")?,
        Rule::new("au", "au̯")?,
        Rule::new("oe", "o̝e̝̯")?,
        // short vowels
        Rule::new("e", "e̝")?,
        Rule::new("o", "o̝")?,
        Rule::new("y", "y")?,
        // long vowels
        Rule::new("ā", "aː")?,
        Rule::new("ē", "e̝ː")?,
        Rule::new("ī", "iː")?,
        Rule::new("ō", "o̝ː")?,
        Rule::new("ū", "uː")?,
        Rule::new("ȳ", "yː")?,
    ];

    RuleSet::compose(overrides, latin_base_rules()?, &["k", "v", "w", "y"])
}

pub fn ecclesiastical_rules() -> Result<RuleSet, TranscribeError> {
    let overrides = vec![
        Rule::new("ch", "k")?,
        Rule::new("ph", "f")?,
        Rule::new("th", "t")?,
        Rule::new("rh", "r")?,
        // palatalisation before front vowels
        Rule::new(&format!("xc{FRONT}"), "kʃ")?.consuming(2),
        Rule::new(&format!("sc{FRONT}"), "ʃ")?.consuming(2),
        Rule::new(&format!("cc{FRONT}"), "ttʃ")?.consuming(2),
        Rule::new(&format!("c{FRONT}"), "tʃ")?.consuming(1),
        Rule::new(&format!("gg{FRONT}"), "ddʒ")?.consuming(2),
        Rule::new(&format!("g{FRONT}"), "dʒ")?.consuming(1),
        Rule::new("gn", "ɲɲ")?,
        Rule::new("qu", "kw")?,
        Rule::lookback("n", &format!("gu{VOWELS}"), "ɡw")?.consuming(2),
        // ti before a vowel, unless after s, t or x
        Rule::lookback("[^stx]", &format!("ti{VOWELS}"), "ts")?.consuming(1),
        // intervocalic h is read as k (mihi, nihil), otherwise silent
        Rule::lookback(VOWELS, &format!("h{VOWELS}"), "k")?.consuming(1),
        Rule::new("h", "")?,
        // intervocalic s is voiced
        Rule::lookback(VOWELS, &format!("s{VOWELS}"), "z")?.consuming(1),
        // geminates
        Rule::new("cc", "kː")?,
        Rule::new("gg", "ɡː")?,
        Rule::new("ll", "lː")?,
        Rule::new("mm", "mː")?,
        Rule::new("nn", "nː")?,
        Rule::new("rr", "rː")?,
        Rule::new("ss", "sː")?,
        Rule::new("tt", "tː")?,
        Rule::new("pp", "pː")?,
        Rule::new("ff", "fː")?,
        Rule::new("bb", "bː")?,
        Rule::new("dd", "dː")?,
        Rule::new("x", "ks")?,
        Rule::new("z", "dz")?,
        Rule::new("c", "k")?,
        Rule::new("j", "j")?,
        Rule::new("r", "r")?,
        // diphthongs
        Rule::new("ae", "e")?,
        Rule::new("oe", "e")?,
        Rule::new("au", "au̯")?,
        // vowel length is not distinguished
        Rule::new("[āă]", "a")?,
        Rule::new("[ēĕ]", "e")?,
        Rule::new("[īĭy]", "i")?,
        Rule::new("[ōŏ]", "o")?,
        Rule::new("[ūŭ]", "u")?,
        Rule::new("ȳ", "i")?,
    ];

    RuleSet::compose(overrides, latin_base_rules()?, &["y"])
}
