//! Title case correction.
//!
//! A title is split into words, every word is cased on its own by
//! [`classify`], and the pieces are put back together. Custom user words are
//! applied to the reassembled title afterwards, see [`TitleCorrector`].

use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::Regex;

use crate::config::RuleConfig;

mod custom;
pub(crate) mod en;
mod tokenize;

use custom::CustomWords;
pub use en::{
    DEFAULT_CUSTOM_FORCE_WORDS, DEFAULT_CUSTOM_LITTLE_WORDS, FORCE_CAP_WORDS, LITTLE_WORDS,
};
pub use tokenize::{is_word_char, tokenize, trailing_separator, WordToken};

lazy_static! {
    // Vowels including Y and the accented letters up to `ə`.
    static ref VOWEL: Regex = Regex::new(r"(?i)[AEIOUY\x{C0}-\x{259}]").unwrap();
    static ref ROMAN_NUMERAL: Regex =
        Regex::new(r"(?i)^M*(CM|CD|D?C{0,3})(XC|XL|L?X{0,3})(IX|IV|V?I{0,3})$").unwrap();
    // Ordinals and decades: `1st`, `40th`, `1950s`, `1960's`.
    static ref CARDINAL: Regex =
        Regex::new(r"(?i)^[0-9]*(1st|2nd|3rd|[0-9]th|[0-9]['`]?s)$").unwrap();
    static ref MC_PREFIX: Regex = Regex::new(r"(?i)^(O['`]|MC)").unwrap();
    static ref FOREIGN_PREFIX: Regex = Regex::new(r"(?i)^([dl]|dell)['`]").unwrap();
    // Separators after which a little word stays lower case.
    static ref PLAIN_SEPARATOR: Regex = Regex::new(r"^[\s,&]+$").unwrap();
}

/// Valid roman numerals that are far more likely to be words.
const ROMAN_EXCEPTIONS: &[&str] = &["MIX", "MI", "DI"];

/// How a single word is cased.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CasingDecision {
    /// Replace the word with this exact text.
    Forced {
        /// The replacement, spelled as stored in the configuration.
        text: String,
        /// The replacement includes the character after the word, which has
        /// to be dropped from the following separator.
        consumes_next: bool,
    },
    /// `CCR`, `XIV`, `J.`
    AllCaps,
    /// `Title`, also `'Til` for words opening with an apostrophe.
    CapitalizeFirst,
    /// `of`, `the`
    Lowercase,
}

impl CasingDecision {
    /// Whether the decision swallows the character after the word.
    pub fn consumes_next(&self) -> bool {
        matches!(self, Self::Forced { consumes_next: true, .. })
    }

    /// Case `word` according to this decision.
    ///
    /// Unless the word was forced, `Mc` and `O'` names get their third letter
    /// raised and foreign prefixes like `d'` are fixed up afterwards.
    pub fn apply(&self, word: &str) -> String {
        let cased = match self {
            Self::Forced { text, .. } => return text.clone(),
            Self::AllCaps => word.to_uppercase(),
            Self::CapitalizeFirst => capitalize_first(word),
            Self::Lowercase => word.to_lowercase(),
        };

        let cased = if MC_PREFIX.is_match(&cased) && cased.chars().count() > 2 {
            uppercase_nth(&cased, 2)
        } else {
            cased
        };

        fix_foreign_prefix(cased)
    }
}

/// Decide how to case `word`.
///
/// `leading_separator` is the text between the previous word and this one,
/// empty for the first word. `next_char` is the character right after the
/// word, `None` for the last word. `word` must not be empty.
pub fn classify(
    word: &str,
    leading_separator: &str,
    next_char: Option<char>,
    config: &RuleConfig,
) -> CasingDecision {
    debug_assert!(!word.is_empty(), "cannot classify an empty word");
    let upcased = word.to_uppercase();

    if config.use_force_caps {
        if let Some((text, consumes_next)) =
            config.force_cap_words.find(&upcased, next_char)
        {
            return CasingDecision::Forced { text: text.to_string(), consumes_next };
        }
    }

    let little =
        config.use_little_words && config.little_words.find(&upcased, next_char).is_some();
    let foreign = FOREIGN_PREFIX.is_match(word);

    if word.chars().count() == 1 && next_char == Some('.') {
        // An initial.
        CasingDecision::AllCaps
    } else if !VOWEL.is_match(word) && !CARDINAL.is_match(word) && !little {
        CasingDecision::AllCaps
    } else if ROMAN_NUMERAL.is_match(word) && !ROMAN_EXCEPTIONS.contains(&upcased.as_str())
    {
        CasingDecision::AllCaps
    } else if leading_separator.is_empty() || (next_char.is_none() && !foreign) {
        CasingDecision::CapitalizeFirst
    } else if !PLAIN_SEPARATOR.is_match(leading_separator)
        || matches!(next_char, Some(')' | '}' | ']'))
    {
        CasingDecision::CapitalizeFirst
    } else if !little && !foreign {
        CasingDecision::CapitalizeFirst
    } else {
        CasingDecision::Lowercase
    }
}

/// Corrects the casing of titles.
///
/// Construction compiles the patterns for the custom word lists, so reuse a
/// corrector for many titles.
#[derive(Clone, Debug)]
pub struct TitleCorrector {
    config: RuleConfig,
    custom: CustomWords,
}

impl Default for TitleCorrector {
    fn default() -> Self {
        Self::new(RuleConfig::default())
    }
}

impl TitleCorrector {
    /// Create a corrector for the given rules.
    pub fn new(config: RuleConfig) -> Self {
        let custom = CustomWords::new(&config);
        Self { config, custom }
    }

    /// The rules this corrector applies.
    pub fn config(&self) -> &RuleConfig {
        &self.config
    }

    /// Put `title` into title case.
    pub fn apply(&self, title: &str) -> String {
        let title = if self.config.fix_quotes {
            normalize_quotes(title)
        } else {
            Cow::Borrowed(title)
        };

        let mut res = String::with_capacity(title.len());
        let mut skip_next = false;

        for token in tokenize(&title) {
            push_separator(&mut res, token.leading_separator, skip_next);

            let decision = classify(
                token.text,
                token.leading_separator,
                token.trailing_char,
                &self.config,
            );
            tracing::trace!(word = token.text, ?decision, "classified word");

            skip_next = decision.consumes_next();
            res.push_str(&decision.apply(token.text));
        }

        push_separator(&mut res, trailing_separator(&title), skip_next);
        self.custom.apply(&res)
    }
}

/// Put `title` into title case with the rules of `config`.
///
/// This compiles the custom word patterns on every call. Use a
/// [`TitleCorrector`] to correct many titles with the same rules.
pub fn correct(title: &str, config: &RuleConfig) -> String {
    TitleCorrector::new(config.clone()).apply(title)
}

/// Replace typographic double and single quotes with `"` and `'`.
pub fn normalize_quotes(title: &str) -> Cow<'_, str> {
    fn replacement(c: char) -> Option<char> {
        match c {
            '“' | '”' | '«' | '»' | '„' => Some('"'),
            '‘' | '’' | '‚' | '‹' | '›' | '`' => Some('\''),
            _ => None,
        }
    }

    if !title.chars().any(|c| replacement(c).is_some()) {
        return Cow::Borrowed(title);
    }

    Cow::Owned(title.chars().map(|c| replacement(c).unwrap_or(c)).collect())
}

fn push_separator(res: &mut String, separator: &str, skip_first: bool) {
    let mut chars = separator.chars();
    if skip_first {
        chars.next();
    }
    res.push_str(chars.as_str());
}

/// Upper-case the first letter and lower-case the rest. A leading apostrophe
/// or opening quote is skipped over.
fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    let mut res = String::with_capacity(word.len());

    match chars.next() {
        Some(first @ ('\'' | '“')) if !chars.as_str().is_empty() => {
            res.push(first);
            res.extend(chars.next().into_iter().flat_map(char::to_uppercase));
        }
        Some(first) => res.extend(first.to_uppercase()),
        None => return res,
    }

    res.push_str(&chars.as_str().to_lowercase());
    res
}

fn uppercase_nth(word: &str, n: usize) -> String {
    word.chars()
        .enumerate()
        .flat_map(|(i, c)| {
            let upper = (i == n).then(|| c.to_uppercase());
            let same = (i != n).then_some(c);
            upper.into_iter().flatten().chain(same)
        })
        .collect()
}

/// `D'artagnan` becomes `d'Artagnan`.
fn fix_foreign_prefix(word: String) -> String {
    let Some(end) = FOREIGN_PREFIX.find(&word).map(|m| m.end()) else {
        return word;
    };

    let (prefix, rest) = word.split_at(end);
    let mut chars = rest.chars();
    match chars.next() {
        Some(first) => {
            let mut res = prefix.to_lowercase();
            res.extend(first.to_uppercase());
            res.push_str(chars.as_str());
            res
        }
        None => prefix.to_lowercase(),
    }
}
