//! Built-in English word lists.

/// Function words that stay lower case inside a title.
///
/// Entries may end in punctuation (`w/`), in which case they match a word
/// together with the character that follows it.
pub const LITTLE_WORDS: &[&str] = &[
    "a", "an", "and", "at", "de", "del", "di", "du", "e", "el", "en", "et", "for",
    "from", "la", "le", "in", "n", "'n", "n'", "'n'", "o'", "'o'", "of", "or", "por",
    "the", "to", "un", "une", "und", "with", "vs", "ft", "feat", "aka", "vol", "w/",
    "y",
];

/// Words whose casing is fixed no matter where they appear.
///
/// Lookup is case-insensitive and the first entry that matches wins, so
/// `AC` shadows `AC/` unless the former is removed.
pub const FORCE_CAP_WORDS: &[&str] = &[
    "AC", "EBN", "OZN", "MCs", "MC's", "DJs", "DJ's", "JBs", "JB's", "10cc", "Mr",
    "Mrs", "Dr", "Jr", "Sr", "Pt", "St.", "St", "ABC", "ABCs", "AC/", "ASCII",
    "ASCIII", "ATV", "BTO", "ELO", "ELP", "EMI", "EP", "DuShon", "FYC", "INXS",
    "MacArthur", "OMC", "OMD", "OMPS", "PSI", "PTA", "REM", "REO", "Sgt", "UB40",
    "UK", "USA", "USMC", "UTFO", "T's", "OK", "USSR",
];

/// User words re-cased by the post-pass when no preferences are stored.
pub const DEFAULT_CUSTOM_FORCE_WORDS: &[&str] = &["Mr", "Mrs", "OK"];

/// User little words lowered by the post-pass when no preferences are stored.
pub const DEFAULT_CUSTOM_LITTLE_WORDS: &[&str] = &["a", "an", "feat"];
