//! IPA pulmonic consonant catalog.
//!
//! Only place/manner combinations written with a single base symbol are
//! listed. Others (e.g. a voiceless bilabial nasal) are spelled with one of
//! these plus a diacritic from [`diacritic`].

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Manner {
    Plosive,
    Nasal,
    Fricative,
    Approximant,
    TapOrFlap,
    Trill,
    LateralFricative,
    LateralApproximant,
    LateralTapOrFlap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Place {
    // labial
    Bilabial,
    Labiodental,
    // coronal
    Dental,
    Alveolar,
    PostAlveolar,
    Retroflex,
    // dorsal
    Palatal,
    Velar,
    Uvular,
    // laryngeal
    PharyngealEpiglottal,
    Glottal,
}

/// Combining and modifier marks used by the rule tables.
pub mod diacritic {
    /// Length mark, `ː`.
    pub const LONG: char = '\u{02D0}';
    /// Combining tilde (nasalisation).
    pub const NASALIZED: char = '\u{0303}';
    /// Combining minus sign below (retracted).
    pub const RETRACTED: char = '\u{0320}';
    /// Combining up tack below (raised).
    pub const RAISED: char = '\u{031D}';
    /// Combining inverted breve below (non-syllabic).
    pub const NON_SYLLABIC: char = '\u{032F}';
    /// Modifier small h (aspirated).
    pub const ASPIRATED: char = '\u{02B0}';
    /// Modifier small w (labialised).
    pub const LABIALIZED: char = '\u{02B7}';

    /// Whether `c` is a combining diacritic that attaches to the symbol
    /// before it.
    pub fn is_combining(c: char) -> bool {
        ('\u{0300}'..='\u{036F}').contains(&c)
    }
}

macro_rules! pulmonic_consonants {
    ($($name:ident => ($symbol:literal, $place:ident, $manner:ident, $voiced:literal)),+ $(,)?) => {
        /// A pulmonic consonant with its own IPA symbol.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum PulmonicConsonant {
            $($name),+
        }

        impl PulmonicConsonant {
            pub const ALL: &'static [PulmonicConsonant] = &[$(PulmonicConsonant::$name),+];

            pub fn symbol(self) -> &'static str {
                match self {
                    $(PulmonicConsonant::$name => $symbol),+
                }
            }

            pub fn place(self) -> Place {
                match self {
                    $(PulmonicConsonant::$name => Place::$place),+
                }
            }

            pub fn manner(self) -> Manner {
                match self {
                    $(PulmonicConsonant::$name => Manner::$manner),+
                }
            }

            pub fn is_voiced(self) -> bool {
                match self {
                    $(PulmonicConsonant::$name => $voiced),+
                }
            }
        }
    };
}

pulmonic_consonants! {
    VoicelessBilabialPlosive => ("p", Bilabial, Plosive, false),
    VoicedBilabialPlosive => ("b", Bilabial, Plosive, true),
    VoicedBilabialNasal => ("m", Bilabial, Nasal, true),
    VoicelessBilabialFricative => ("ɸ", Bilabial, Fricative, false),
    VoicedBilabialFricative => ("β", Bilabial, Fricative, true),
    VoicedBilabialTrill => ("ʙ", Bilabial, Trill, true),

    VoicedLabiodentalNasal => ("ɱ", Labiodental, Nasal, true),
    VoicelessLabiodentalFricative => ("f", Labiodental, Fricative, false),
    VoicedLabiodentalFricative => ("v", Labiodental, Fricative, true),
    VoicedLabiodentalApproximant => ("ʋ", Labiodental, Approximant, true),
    VoicedLabiodentalFlap => ("ⱱ", Labiodental, TapOrFlap, true),

    VoicelessDentalFricative => ("θ", Dental, Fricative, false),
    VoicedDentalFricative => ("ð", Dental, Fricative, true),

    VoicelessAlveolarPlosive => ("t", Alveolar, Plosive, false),
    VoicedAlveolarPlosive => ("d", Alveolar, Plosive, true),
    VoicedAlveolarNasal => ("n", Alveolar, Nasal, true),
    VoicelessAlveolarFricative => ("s", Alveolar, Fricative, false),
    VoicedAlveolarFricative => ("z", Alveolar, Fricative, true),
    VoicedAlveolarApproximant => ("ɹ", Alveolar, Approximant, true),
    VoicedAlveolarTap => ("ɾ", Alveolar, TapOrFlap, true),
    VoicedAlveolarTrill => ("r", Alveolar, Trill, true),
    VoicelessAlveolarLateralFricative => ("ɬ", Alveolar, LateralFricative, false),
    VoicedAlveolarLateralFricative => ("ɮ", Alveolar, LateralFricative, true),
    VoicedAlveolarLateralApproximant => ("l", Alveolar, LateralApproximant, true),
    VoicedAlveolarLateralFlap => ("ɺ", Alveolar, LateralTapOrFlap, true),

    VoicelessPostAlveolarFricative => ("ʃ", PostAlveolar, Fricative, false),
    VoicedPostAlveolarFricative => ("ʒ", PostAlveolar, Fricative, true),

    VoicelessRetroflexPlosive => ("ʈ", Retroflex, Plosive, false),
    VoicedRetroflexPlosive => ("ɖ", Retroflex, Plosive, true),
    VoicedRetroflexNasal => ("ɳ", Retroflex, Nasal, true),
    VoicelessRetroflexFricative => ("ʂ", Retroflex, Fricative, false),
    VoicedRetroflexFricative => ("ʐ", Retroflex, Fricative, true),
    VoicedRetroflexApproximant => ("ɻ", Retroflex, Approximant, true),
    VoicedRetroflexFlap => ("ɽ", Retroflex, TapOrFlap, true),
    VoicedRetroflexLateralApproximant => ("ɭ", Retroflex, LateralApproximant, true),

    VoicelessPalatalPlosive => ("c", Palatal, Plosive, false),
    VoicedPalatalPlosive => ("ɟ", Palatal, Plosive, true),
    VoicedPalatalNasal => ("ɲ", Palatal, Nasal, true),
    VoicelessPalatalFricative => ("ç", Palatal, Fricative, false),
    VoicedPalatalFricative => ("ʝ", Palatal, Fricative, true),
    VoicedPalatalApproximant => ("j", Palatal, Approximant, true),
    VoicedPalatalLateralApproximant => ("ʎ", Palatal, LateralApproximant, true),

    VoicelessVelarPlosive => ("k", Velar, Plosive, false),
    VoicedVelarPlosive => ("ɡ", Velar, Plosive, true),
    VoicedVelarNasal => ("ŋ", Velar, Nasal, true),
    VoicelessVelarFricative => ("x", Velar, Fricative, false),
    VoicedVelarFricative => ("ɣ", Velar, Fricative, true),
    VoicedVelarApproximant => ("ɰ", Velar, Approximant, true),
    VoicedVelarLateralApproximant => ("ʟ", Velar, LateralApproximant, true),

    VoicelessUvularPlosive => ("q", Uvular, Plosive, false),
    VoicedUvularPlosive => ("ɢ", Uvular, Plosive, true),
    VoicedUvularNasal => ("ɴ", Uvular, Nasal, true),
    VoicelessUvularFricative => ("χ", Uvular, Fricative, false),
    VoicedUvularFricative => ("ʁ", Uvular, Fricative, true),
    VoicedUvularTrill => ("ʀ", Uvular, Trill, true),

    VoicelessEpiglottalPlosive => ("ʡ", PharyngealEpiglottal, Plosive, false),
    VoicelessPharyngealFricative => ("ħ", PharyngealEpiglottal, Fricative, false),
    VoicedPharyngealFricative => ("ʕ", PharyngealEpiglottal, Fricative, true),
    VoicelessEpiglottalTrill => ("ʜ", PharyngealEpiglottal, Trill, false),
    VoicedEpiglottalTrill => ("ʢ", PharyngealEpiglottal, Trill, true),

    VoicelessGlottalPlosive => ("ʔ", Glottal, Plosive, false),
    VoicelessGlottalFricative => ("h", Glottal, Fricative, false),
    VoicedGlottalFricative => ("ɦ", Glottal, Fricative, true),
}

impl PulmonicConsonant {
    /// Look up a consonant by its IPA symbol.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.symbol() == symbol)
    }

    /// The consonant with the same place and manner and opposite voicing,
    /// if the chart has one.
    pub fn voicing_counterpart(self) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| {
            c.place() == self.place() && c.manner() == self.manner() && c.is_voiced() != self.is_voiced()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combining_marks_are_recognised() {
        assert!(diacritic::is_combining(diacritic::NASALIZED));
        assert!(diacritic::is_combining(diacritic::NON_SYLLABIC));
        assert!(!diacritic::is_combining(diacritic::LONG));
        assert!(!diacritic::is_combining(diacritic::ASPIRATED));
        assert!(!diacritic::is_combining('a'));
    }
    use std::collections::HashSet;

    #[test]
    fn symbols_are_unique() {
        let symbols: HashSet<&str> = PulmonicConsonant::ALL.iter().map(|c| c.symbol()).collect();
        assert_eq!(symbols.len(), PulmonicConsonant::ALL.len());
    }

    #[test]
    fn lookup_by_symbol() {
        let g = PulmonicConsonant::from_symbol("ɡ").unwrap();
        assert_eq!(g, PulmonicConsonant::VoicedVelarPlosive);
        assert_eq!(g.place(), Place::Velar);
        assert_eq!(g.manner(), Manner::Plosive);
        assert!(g.is_voiced());

        // ASCII g is not the IPA symbol.
        assert_eq!(PulmonicConsonant::from_symbol("g"), None);
    }

    #[test]
    fn voicing_counterparts() {
        assert_eq!(
            PulmonicConsonant::VoicelessBilabialPlosive.voicing_counterpart(),
            Some(PulmonicConsonant::VoicedBilabialPlosive)
        );
        assert_eq!(
            PulmonicConsonant::VoicedVelarNasal.voicing_counterpart(),
            None
        );
    }

    #[test]
    fn serializes_as_variant_name() {
        let json = serde_json::to_string(&PulmonicConsonant::VoicedAlveolarTrill).unwrap();
        assert_eq!(json, "\"VoicedAlveolarTrill\"");
        let place = serde_json::to_string(&Place::PostAlveolar).unwrap();
        assert_eq!(place, "\"post_alveolar\"");
    }
}
