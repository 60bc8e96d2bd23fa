//! Zero padding of ordinal tag values like track, disc, episode and season
//! numbers.

use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Strip all leading zeros. A value consisting only of zeros becomes empty.
pub fn de_zero(value: &str) -> &str {
    value.trim_start_matches('0')
}

/// Left-pad `value` with zeros to `width` characters after stripping its
/// existing zeros. Empty values stay empty.
pub fn custom_zero(value: &str, width: usize) -> String {
    if value.is_empty() {
        return String::new();
    }

    pad(de_zero(value), width)
}

/// The width of the longest numeric value, 0 if no value is numeric.
pub fn max_digits<S: AsRef<str>>(values: &[S]) -> usize {
    values
        .iter()
        .map(as_str)
        .filter(|v| is_numeric(v))
        .map(|v| v.chars().count())
        .max()
        .unwrap_or(0)
}

/// Pad every numeric value to the width of the longest one.
pub fn re_zero<S: AsRef<str>>(values: &[S]) -> Vec<String> {
    let width = max_digits(values);
    values
        .iter()
        .map(as_str)
        .map(|v| if is_numeric(v) { pad(v, width) } else { v.to_string() })
        .collect()
}

fn as_str<S: AsRef<str>>(value: &S) -> &str {
    value.as_ref()
}

fn is_numeric(value: &str) -> bool {
    let value = value.trim();
    !value.is_empty() && value.parse::<f64>().map_or(false, f64::is_finite)
}

fn pad(value: &str, width: usize) -> String {
    format!("{value:0>width$}")
}

/// A zero padding operation over a batch of values.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ZeroMode {
    /// Strip leading zeros.
    DeZero,
    /// Pad to the longest numeric value of the batch.
    ReZero,
    /// Pad to a fixed width.
    Custom(usize),
}

impl ZeroMode {
    /// Apply the operation to `values`, returning the new values.
    pub fn apply<S: AsRef<str>>(self, values: &[S]) -> Vec<String> {
        match self {
            Self::DeZero => values.iter().map(|v| de_zero(as_str(v)).to_string()).collect(),
            Self::ReZero => re_zero(values),
            Self::Custom(width) => {
                values.iter().map(|v| custom_zero(as_str(v), width)).collect()
            }
        }
    }

    /// Like [`apply`](Self::apply), but only report the values that changed,
    /// together with their index.
    pub fn changes<S: AsRef<str>>(self, values: &[S]) -> Vec<(usize, String)> {
        self.apply(values)
            .into_iter()
            .zip(values)
            .enumerate()
            .filter(|(_, (new, old))| new.as_str() != as_str(*old))
            .map(|(i, (new, _))| (i, new))
            .collect()
    }
}

impl fmt::Display for ZeroMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DeZero => f.write_str("de-zero"),
            Self::ReZero => f.write_str("re-zero"),
            Self::Custom(width) => write!(f, "zero-{width}"),
        }
    }
}

impl FromStr for ZeroMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_ref() {
            "de-zero" | "dezero" => Ok(Self::DeZero),
            "re-zero" | "rezero" => Ok(Self::ReZero),
            other => {
                let width = other.strip_prefix("zero-").unwrap_or(other);
                width
                    .parse()
                    .map(Self::Custom)
                    .map_err(|_| Error::InvalidWidth(s.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_zeros() {
        assert_eq!(de_zero("007"), "7");
        assert_eq!(de_zero("10"), "10");
        assert_eq!(de_zero("000"), "");
        assert_eq!(de_zero("A01"), "A01");
    }

    #[test]
    fn pad_to_width() {
        assert_eq!(custom_zero("7", 3), "007");
        assert_eq!(custom_zero("0012", 2), "12");
        assert_eq!(custom_zero("1234", 2), "1234");
        assert_eq!(custom_zero("", 3), "");
    }

    #[test]
    fn pad_to_longest() {
        assert_eq!(re_zero(&["1", "10", "3"]), ["01", "10", "03"]);
        assert_eq!(re_zero(&["1", "100", ""]), ["001", "100", ""]);
        assert_eq!(max_digits(&["A1", "2"]), 1);
        assert_eq!(re_zero(&["A1", "2"]), ["A1", "2"]);
        assert_eq!(re_zero(&["B", "side"]), ["B", "side"]);
    }

    #[test]
    fn only_changes_are_reported() {
        let values = ["01", "2", "10"];
        assert_eq!(ZeroMode::DeZero.changes(&values), [(0, "1".to_string())]);
        assert_eq!(ZeroMode::ReZero.changes(&values), [(1, "02".to_string())]);
        assert_eq!(
            ZeroMode::Custom(3).changes(&values),
            [(0, "001".to_string()), (1, "002".to_string()), (2, "010".to_string())]
        );
    }

    #[test]
    fn parse_mode() {
        assert_eq!("De-Zero".parse::<ZeroMode>().unwrap(), ZeroMode::DeZero);
        assert_eq!("rezero".parse::<ZeroMode>().unwrap(), ZeroMode::ReZero);
        assert_eq!("zero-3".parse::<ZeroMode>().unwrap(), ZeroMode::Custom(3));
        assert_eq!("4".parse::<ZeroMode>().unwrap(), ZeroMode::Custom(4));
        assert!(matches!("wide".parse::<ZeroMode>(), Err(Error::InvalidWidth(_))));
        assert_eq!(ZeroMode::Custom(2).to_string(), "zero-2");
    }
}
