/// A piece of input text: either a word to rewrite or a separator to copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextPart<'a> {
    Word(&'a str),
    Separator(&'a str),
}

/// Split text into alternating words and separators, keeping every byte.
///
/// Whitespace and boundary punctuation separate words; everything else,
/// including digits and symbols no rule knows about, stays inside the word
/// and is left to the fallback policy.
pub fn split_text_parts(text: &str) -> Vec<TextPart<'_>> {
    let mut parts = Vec::new();
    let mut start = 0usize;
    let mut in_word = false;

    for (idx, ch) in text.char_indices() {
        let is_word_char = !is_separator(ch);
        if idx > start && is_word_char != in_word {
            parts.push(make_part(&text[start..idx], in_word));
            start = idx;
        }
        in_word = is_word_char;
    }

    if start < text.len() {
        parts.push(make_part(&text[start..], in_word));
    }
    parts
}

fn make_part(slice: &str, is_word: bool) -> TextPart<'_> {
    if is_word {
        TextPart::Word(slice)
    } else {
        TextPart::Separator(slice)
    }
}

fn is_separator(ch: char) -> bool {
    ch.is_whitespace()
        || matches!(
            ch,
            '.' | '!'
                | '?'
                | ','
                | ';'
                | ':'
                | '-'
                | '—'
                | '…'
                | '"'
                | '('
                | ')'
                | '['
                | ']'
                | '\u{201c}'
                | '\u{201d}'
                | '\u{00ab}'
                | '\u{00bb}'
        )
}

#[cfg(test)]
mod tests {
    use super::{split_text_parts, TextPart};

    #[test]
    fn splits_words_and_separators() {
        let parts = split_text_parts("Gallia est, omnis!");
        assert_eq!(
            parts,
            vec![
                TextPart::Word("Gallia"),
                TextPart::Separator(" "),
                TextPart::Word("est"),
                TextPart::Separator(", "),
                TextPart::Word("omnis"),
                TextPart::Separator("!"),
            ]
        );
    }

    #[test]
    fn keeps_leading_and_repeated_whitespace_verbatim() {
        let parts = split_text_parts("  ave\n\tvale ");
        let rebuilt: String = parts
            .iter()
            .map(|part| match part {
                TextPart::Word(s) | TextPart::Separator(s) => *s,
            })
            .collect();
        assert_eq!(rebuilt, "  ave\n\tvale ");
        assert_eq!(parts.first(), Some(&TextPart::Separator("  ")));
    }

    #[test]
    fn hyphen_ends_a_word() {
        let parts = split_text_parts("-um");
        assert_eq!(parts, vec![TextPart::Separator("-"), TextPart::Word("um")]);
    }

    #[test]
    fn digits_and_unknown_symbols_stay_in_words() {
        let parts = split_text_parts("mmxx4 a&b");
        assert_eq!(
            parts,
            vec![
                TextPart::Word("mmxx4"),
                TextPart::Separator(" "),
                TextPart::Word("a&b"),
            ]
        );
    }

    #[test]
    fn empty_text_has_no_parts() {
        assert!(split_text_parts("").is_empty());
    }
}
