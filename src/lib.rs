/*!
Tagcase corrects the casing of titles, artists and album names in a media
library and normalizes the zero padding of track, disc, episode and season
numbers.

The crate can be used both through a CLI and an API.

# Title case

Words are cased one by one with a set of rules that look at the word itself
and at what surrounds it:

- Words on a forced-case list are replaced verbatim (`ELO`, `Mr`, `w/`).
- Initials (`J.`), words without vowels (`CCR`) and roman numerals (`XIV`)
  are upper-cased. Ordinals and decades (`40th`, `1960's`) are not.
- The first and last word, words after punctuation and words before a
  closing bracket are capitalized.
- Little words like `of` or `the` stay lower case everywhere else.
- `Mc` and `O'` names and foreign prefixes like `d'` get their inner letter
  capitalized.

```rust
use tagcase::{correct, RuleConfig};

let config = RuleConfig::default();
assert_eq!(correct("mchenry's diner", &config), "McHenry's Diner");
assert_eq!(correct("the iii movement", &config), "The III Movement");
```

Building a [`TitleCorrector`] compiles the patterns for the user's custom
word lists once. Reuse it when correcting many titles:

```rust
use tagcase::{RuleConfig, TitleCorrector, WordList};

let config = RuleConfig {
    custom_force_words: WordList::parse("iPod, eBay"),
    ..RuleConfig::default()
};

let corrector = TitleCorrector::new(config);
assert_eq!(corrector.apply("songs for my ipod"), "Songs for My iPod");
```

# Configuration

[`RuleConfig`] implements `serde`'s traits and can be read from YAML with
[`config::from_yaml_str`] or [`config::load`]. Word lists can be written
either as YAML lists or as a single string separated by commas, semicolons
or pipes.

# Zero padding

The [`zero`] module strips (`007` → `7`) or adds (`7` → `007`) leading
zeros, either to a fixed width or to the width of the longest value of a
batch.
*/

#![warn(missing_docs)]

#[macro_use]
mod macros;

pub mod config;
mod error;
pub mod lang;
pub mod zero;

pub use config::{CustomLittleScope, RuleConfig, WordList};
pub use error::{Error, PreferencesError};
pub use lang::{classify, correct, tokenize, CasingDecision, TitleCorrector, WordToken};
