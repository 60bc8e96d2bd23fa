//! The custom word pass that runs over a fully corrected title.

use regex::{Regex, RegexBuilder};

use crate::config::{CustomLittleScope, RuleConfig, WordList};

/// A user word with its compiled case-insensitive pattern.
#[derive(Clone, Debug)]
struct CustomWord {
    pattern: Regex,
    spelling: String,
}

/// Precompiled custom force and little words.
#[derive(Clone, Debug)]
pub(super) struct CustomWords {
    force: Vec<CustomWord>,
    little: Vec<CustomWord>,
    scope: CustomLittleScope,
}

impl CustomWords {
    pub fn new(config: &RuleConfig) -> Self {
        Self {
            force: compile(&config.custom_force_words),
            little: compile(&config.custom_little_words),
            scope: config.custom_little_scope,
        }
    }

    /// Re-case the custom words in `title`. Force words go first, then little
    /// words, so a word on both lists ends up as spelled in the little list.
    pub fn apply(&self, title: &str) -> String {
        let mut res = title.to_string();

        for word in &self.force {
            res = replace_whole_words(&res, word, false);
        }

        let interior = self.scope == CustomLittleScope::Interior;
        for word in &self.little {
            res = replace_whole_words(&res, word, interior);
        }

        res
    }
}

fn compile(words: &WordList) -> Vec<CustomWord> {
    words
        .iter()
        .filter_map(|word| {
            match RegexBuilder::new(&regex::escape(word)).case_insensitive(true).build() {
                Ok(pattern) => Some(CustomWord { pattern, spelling: word.to_string() }),
                Err(err) => {
                    tracing::warn!(word, %err, "skipping custom word");
                    None
                }
            }
        })
        .collect()
}

/// Same notion of a word character as `\w` in a Unicode regex.
fn is_regex_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Replace every whole-word occurrence of `word` in `text` by its spelling.
///
/// With `interior`, an occurrence must additionally be preceded and followed
/// by something, so the first and last word of the title are never touched.
fn replace_whole_words(text: &str, word: &CustomWord, interior: bool) -> String {
    let mut res = String::with_capacity(text.len());
    let mut last = 0;

    for m in word.pattern.find_iter(text) {
        let before = text[.. m.start()].chars().next_back();
        let after = text[m.end() ..].chars().next();

        let whole = !before.map_or(false, is_regex_word_char)
            && !after.map_or(false, is_regex_word_char);
        let placed = !interior || (before.is_some() && after.is_some());

        if whole && placed {
            res.push_str(&text[last .. m.start()]);
            res.push_str(&word.spelling);
            last = m.end();
        }
    }

    res.push_str(&text[last ..]);
    res
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(force: &str, little: &str, scope: CustomLittleScope) -> CustomWords {
        CustomWords::new(&RuleConfig {
            custom_force_words: WordList::parse(force),
            custom_little_words: WordList::parse(little),
            custom_little_scope: scope,
            ..RuleConfig::empty()
        })
    }

    #[test]
    fn force_words_whole_word_only() {
        let custom = words("iPod", "", CustomLittleScope::Interior);
        assert_eq!(custom.apply("IPOD Ipods My Ipod"), "iPod Ipods My iPod");
        assert_eq!(custom.apply("Ipod_x Ipod-x"), "Ipod_x iPod-x");
    }

    #[test]
    fn force_words_with_punctuation() {
        let custom = words("AC/DC, Dr.", "", CustomLittleScope::Interior);
        assert_eq!(custom.apply("Ac/Dc Live With Dr. No"), "AC/DC Live With Dr. No");
        assert_eq!(custom.apply("Drx"), "Drx");
    }

    #[test]
    fn little_words_interior() {
        let custom = words("", "von|feat", CustomLittleScope::Interior);
        assert_eq!(custom.apply("Von Trapp Meets Von Braun"), "Von Trapp Meets von Braun");
        assert_eq!(custom.apply("Song Feat. Someone"), "Song feat. Someone");
        assert_eq!(custom.apply("Something Feat"), "Something Feat");
    }

    #[test]
    fn little_words_anywhere() {
        let custom = words("", "von", CustomLittleScope::Anywhere);
        assert_eq!(custom.apply("Von Trapp Meets Von"), "von Trapp Meets von");
    }

    #[test]
    fn little_words_win_over_force_words() {
        let custom = words("VON", "von", CustomLittleScope::Interior);
        assert_eq!(custom.apply("Meet Von Braun"), "Meet von Braun");
        assert_eq!(custom.apply("Von Braun"), "VON Braun");
    }

    #[test]
    fn empty_lists_leave_title_alone() {
        let custom = words("", "", CustomLittleScope::Anywhere);
        assert_eq!(custom.apply("Anything Goes"), "Anything Goes");
    }
}
