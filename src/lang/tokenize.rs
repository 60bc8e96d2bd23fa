//! Splitting titles into words and the separators between them.

/// A word of a title together with its immediate surroundings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WordToken<'a> {
    /// The word itself. Never empty.
    pub text: &'a str,
    /// Everything between the previous word (or the start of the title) and
    /// this word. Empty for a word that opens the title.
    pub leading_separator: &'a str,
    /// The character directly after the word, if the title continues.
    pub trailing_char: Option<char>,
}

/// Whether `c` can be part of a word.
///
/// Apostrophes, graves and acute accents count as letters so that
/// contractions like `don't` or `d'Artagnan` stay in one piece. The wide
/// range starting at `À` covers accented Latin letters, other scripts and
/// the typographic quotes.
pub fn is_word_char(c: char) -> bool {
    matches!(c, '\'' | '`' | '´' | '\u{C0}' ..= '\u{FEFC}') || c.is_ascii_alphanumeric()
}

/// Split `input` into words.
///
/// Concatenating the `leading_separator` and `text` of every token followed
/// by [`trailing_separator`] yields `input` again.
pub fn tokenize(input: &str) -> Vec<WordToken<'_>> {
    let mut tokens = vec![];
    let mut separator_start = 0;
    let mut word_start = None;

    for (i, c) in input.char_indices() {
        match (is_word_char(c), word_start) {
            (true, None) => word_start = Some(i),
            (false, Some(start)) => {
                tokens.push(WordToken {
                    text: &input[start .. i],
                    leading_separator: &input[separator_start .. start],
                    trailing_char: Some(c),
                });
                word_start = None;
                separator_start = i;
            }
            _ => {}
        }
    }

    if let Some(start) = word_start {
        tokens.push(WordToken {
            text: &input[start ..],
            leading_separator: &input[separator_start .. start],
            trailing_char: None,
        });
    }

    tokens
}

/// The part of `input` after its last word. This is all of `input` if it
/// contains no word at all.
pub fn trailing_separator(input: &str) -> &str {
    let end = input
        .char_indices()
        .rev()
        .find(|&(_, c)| is_word_char(c))
        .map_or(0, |(i, c)| i + c.len_utf8());

    &input[end ..]
}
