mod common;

use common::{default_corrector, DEFAULT_CASES};
use tagcase::lang::trailing_separator;
use tagcase::{correct, tokenize, RuleConfig, TitleCorrector, WordList};

#[test]
fn default_rules() {
    let corrector = default_corrector();
    for (raw, expected) in DEFAULT_CASES {
        assert_eq!(&corrector.apply(raw), expected, "correcting {raw:?}");
    }
}

#[test]
fn corrected_titles_are_stable() {
    let corrector = default_corrector();
    for (_, expected) in DEFAULT_CASES {
        assert_eq!(&corrector.apply(expected), expected);
    }
}

#[test]
fn correct_matches_corrector() {
    let config = RuleConfig::default();
    let corrector = TitleCorrector::new(config.clone());
    for (raw, _) in DEFAULT_CASES {
        assert_eq!(correct(raw, &config), corrector.apply(raw));
    }
}

#[test]
fn forced_word_keeps_its_spelling() {
    let config = RuleConfig {
        force_cap_words: WordList::parse("w/"),
        ..RuleConfig::default()
    };
    assert_eq!(correct("w/ friends", &config), "w/ Friends");
    assert_eq!(correct("W/ FRIENDS", &config), "w/ Friends");
}

#[test]
fn initials_are_upper_case() {
    let config = RuleConfig {
        custom_little_words: WordList::new(),
        ..RuleConfig::default()
    };

    for c in ('a' ..= 'z').chain(['é', 'ø']) {
        let title = format!("x {c}. smith");
        let expected = format!("X {}. Smith", c.to_uppercase());
        assert_eq!(correct(&title, &config), expected);
    }
}

#[test]
fn tokens_reassemble_to_input() {
    for (raw, _) in DEFAULT_CASES {
        let mut res: String = tokenize(raw)
            .iter()
            .map(|t| format!("{}{}", t.leading_separator, t.text))
            .collect();
        res.push_str(trailing_separator(raw));
        assert_eq!(&res, raw);
    }
}

#[test]
fn degenerate_titles() {
    let corrector = default_corrector();
    assert_eq!(corrector.apply(""), "");
    assert_eq!(corrector.apply(" - "), " - ");
    assert_eq!(corrector.apply("!!!"), "!!!");
}

#[test]
fn all_rules_off() {
    let config = RuleConfig {
        use_little_words: false,
        use_force_caps: false,
        fix_quotes: false,
        custom_force_words: WordList::new(),
        custom_little_words: WordList::new(),
        ..RuleConfig::default()
    };

    assert_eq!(correct("the best of elo", &config), "The Best Of Elo");
    assert_eq!(correct("ccr", &config), "CCR");
}

#[test]
fn custom_words() {
    let config = RuleConfig {
        custom_force_words: WordList::parse("iPod; eBay"),
        custom_little_words: WordList::parse("von"),
        ..RuleConfig::default()
    };

    assert_eq!(correct("selling my ipod on ebay", &config), "Selling My iPod On eBay");
    assert_eq!(correct("ludwig von beethoven", &config), "Ludwig von Beethoven");
    assert_eq!(correct("von trapp", &config), "Von Trapp");
}
