use tagcase::config::{load, save};
use tagcase::{correct, CustomLittleScope, Error, PreferencesError, RuleConfig, WordList};

#[test]
fn save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.yaml");

    let mut config = RuleConfig::default();
    config.fix_quotes = false;
    config.custom_force_words = WordList::parse("iPod, eBay");
    config.custom_little_scope = CustomLittleScope::Anywhere;

    save(&config, &path).unwrap();
    assert_eq!(load(&path).unwrap(), config);
}

#[test]
fn load_hand_written_preferences() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.yaml");
    std::fs::write(
        &path,
        "use-little-words: false\ncustom-force-words: \"Mr|Mrs|OK, iPod\"\n",
    )
    .unwrap();

    let config = load(&path).unwrap();
    assert!(!config.use_little_words);
    assert_eq!(config.custom_force_words.words(), ["Mr", "Mrs", "OK", "iPod"]);
    assert_eq!(correct("the ipod of mr smith", &config), "The iPod Of Mr Smith");
}

#[test]
fn missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.yaml");

    match load(&path) {
        Err(Error::PreferencesError(PreferencesError::NotFound(p))) => assert_eq!(p, path),
        other => panic!("expected a missing file error, got {other:?}"),
    }
}

#[test]
fn malformed_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.yaml");
    std::fs::write(&path, "fix-quotes: [not, a, bool]\n").unwrap();

    assert!(matches!(load(&path), Err(Error::InvalidYaml(_))));
}
