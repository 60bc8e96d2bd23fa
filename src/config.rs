//! Rule configuration and the preferences file it is stored in.

use std::fmt;
use std::fs;
use std::io::ErrorKind as IoErrorKind;
use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, PreferencesError};
use crate::lang::en;

lazy_static! {
    // A comma, semicolon or pipe, optionally followed by one space.
    static ref LIST_SEPARATOR: Regex = Regex::new(r"[,;|]\s?").unwrap();
}

/// Rewrite the separators of a user-typed word list to pipes.
///
/// ```
/// # use tagcase::config::normalize_word_list;
/// assert_eq!(normalize_word_list("Mr, Mrs;OK"), "Mr|Mrs|OK");
/// ```
pub fn normalize_word_list(list: &str) -> String {
    LIST_SEPARATOR.replace_all(list, "|").into_owned()
}

/// An ordered list of words with case-insensitive lookup.
///
/// The stored spelling of each entry is kept verbatim. Empty entries are
/// dropped on construction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
    keys: Vec<String>,
}

impl WordList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a list separated by pipes, commas or semicolons.
    pub fn parse(list: &str) -> Self {
        normalize_word_list(list).split('|').collect()
    }

    /// Append a word. Blank words are ignored.
    pub fn push(&mut self, word: impl Into<String>) {
        let word = word.into();
        let word = word.trim();
        if word.is_empty() {
            return;
        }

        self.keys.push(word.to_uppercase());
        self.words.push(word.to_string());
    }

    /// The words in their stored spelling.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Iterate over the words in their stored spelling.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the list has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Find the first entry matching an upper-cased word.
    ///
    /// An entry also matches if it equals the word followed by `next_char`;
    /// this lets entries like `w/` or `St.` carry their punctuation. The
    /// returned flag tells whether `next_char` was part of the match.
    pub fn find(&self, upcased: &str, next_char: Option<char>) -> Option<(&str, bool)> {
        self.keys.iter().zip(&self.words).find_map(|(key, word)| {
            if key == upcased {
                return Some((word.as_str(), false));
            }

            let c = next_char?;
            let extended = key.strip_prefix(upcased)?;
            let mut rest = extended.chars();
            (rest.next() == Some(c) && rest.next().is_none()).then(|| (word.as_str(), true))
        })
    }

    /// Join the words with pipes, the format the preferences store.
    pub fn to_pipe_string(&self) -> String {
        self.words.join("|")
    }
}

impl<S: Into<String>> FromIterator<S> for WordList {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut list = Self::new();
        for word in iter {
            list.push(word);
        }
        list
    }
}

impl<S: Into<String>> Extend<S> for WordList {
    fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
        for word in iter {
            self.push(word);
        }
    }
}

impl fmt::Display for WordList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.words.join(", "))
    }
}

impl Serialize for WordList {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.words.len() == 1 {
            self.words[0].serialize(serializer)
        } else {
            self.words.serialize(serializer)
        }
    }
}

impl<'de> Deserialize<'de> for WordList {
    /// Accepts a single separated string (`"Mr, Mrs|OK"`) or a list whose
    /// items may themselves be separated strings.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct WordListVisitor;

        impl<'de> Visitor<'de> for WordListVisitor {
            type Value = WordList;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a separated string or a list of words")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(WordList::parse(v))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(WordList::new())
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut list = WordList::new();
                while let Some(item) = seq.next_element::<String>()? {
                    list.extend(WordList::parse(&item).words);
                }
                Ok(list)
            }
        }

        deserializer.deserialize_any(WordListVisitor)
    }
}

/// Where the custom little words may be lowered by the post-pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CustomLittleScope {
    /// Only between two other pieces of the title, never at its very start or
    /// end.
    #[default]
    Interior,
    /// Every whole-word occurrence, including the first and last word.
    Anywhere,
}

/// Everything the title case rules can be tuned with.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RuleConfig {
    /// Keep the words of [`little_words`](Self::little_words) lower case.
    pub use_little_words: bool,
    /// Replace words of [`force_cap_words`](Self::force_cap_words) with their
    /// stored spelling.
    pub use_force_caps: bool,
    /// Replace typographic quotes with their ASCII counterparts.
    pub fix_quotes: bool,
    /// Function words kept lower case inside a title.
    pub little_words: WordList,
    /// Words with a fixed spelling.
    pub force_cap_words: WordList,
    /// User words re-cased wherever they appear as a whole word.
    pub custom_force_words: WordList,
    /// User words lowered wherever they appear as a whole word.
    pub custom_little_words: WordList,
    /// Where custom little words may be lowered.
    pub custom_little_scope: CustomLittleScope,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            use_little_words: true,
            use_force_caps: true,
            fix_quotes: true,
            little_words: en::LITTLE_WORDS.iter().copied().collect(),
            force_cap_words: en::FORCE_CAP_WORDS.iter().copied().collect(),
            custom_force_words: en::DEFAULT_CUSTOM_FORCE_WORDS.iter().copied().collect(),
            custom_little_words: en::DEFAULT_CUSTOM_LITTLE_WORDS
                .iter()
                .copied()
                .collect(),
            custom_little_scope: CustomLittleScope::default(),
        }
    }
}

impl RuleConfig {
    /// Construct a configuration with the built-in word lists and all rules
    /// enabled.
    pub fn new() -> Self {
        Default::default()
    }

    /// Construct a configuration with all rules enabled but no word lists.
    pub fn empty() -> Self {
        Self {
            little_words: WordList::new(),
            force_cap_words: WordList::new(),
            custom_force_words: WordList::new(),
            custom_little_words: WordList::new(),
            ..Self::default()
        }
    }
}

/// Parse a configuration from YAML. Missing keys take their default.
pub fn from_yaml_str(yaml: &str) -> Result<RuleConfig, serde_yaml::Error> {
    serde_yaml::from_str(yaml)
}

/// Serialize a configuration to YAML.
pub fn to_yaml_str(config: &RuleConfig) -> Result<String, serde_yaml::Error> {
    serde_yaml::to_string(config)
}

/// Read a preferences file.
pub fn load(path: &Path) -> Result<RuleConfig, Error> {
    let yaml = fs::read_to_string(path).map_err(|e| {
        if e.kind() == IoErrorKind::NotFound {
            PreferencesError::NotFound(path.to_path_buf())
        } else if let Some(os) = e.raw_os_error() {
            PreferencesError::ReadErrorWithCode(path.to_path_buf(), os)
        } else {
            PreferencesError::ReadError(path.to_path_buf())
        }
    })?;

    let config = from_yaml_str(&yaml)?;
    tracing::debug!(
        path = %path.display(),
        little_words = config.little_words.len(),
        force_cap_words = config.force_cap_words.len(),
        custom_force_words = config.custom_force_words.len(),
        custom_little_words = config.custom_little_words.len(),
        "loaded preferences"
    );

    Ok(config)
}

/// Write a preferences file, replacing any previous one.
pub fn save(config: &RuleConfig, path: &Path) -> Result<(), Error> {
    let yaml = to_yaml_str(config)?;
    fs::write(path, yaml).map_err(|_| PreferencesError::WriteError(path.to_path_buf()))?;
    tracing::debug!(path = %path.display(), "saved preferences");
    Ok(())
}
