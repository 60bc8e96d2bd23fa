use std::path::PathBuf;

/// The main error that is handled in the `main()` function.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Preferences error.
    #[error("Preferences error: {0}")]
    PreferencesError(#[from] PreferencesError),
    /// Invalid YAML in the preferences file.
    #[error("Invalid format: expected YAML\nCaused by:\n\t{0}")]
    InvalidYaml(#[from] serde_yaml::Error),
    /// A padding width that is not a number.
    #[error("Invalid width {0:?}: expected a non-negative number")]
    InvalidWidth(String),
    /// Other error.
    #[error("{0}")]
    OtherError(String),
}

/// The error when reading or writing the preferences file.
#[derive(thiserror::Error, Debug)]
pub enum PreferencesError {
    /// Preferences file not found.
    #[error("Preferences file {0:?} not found.")]
    NotFound(PathBuf),
    /// Error while reading the preferences file (with OS error code).
    #[error("Error while reading the preferences file {0:?}: {1}")]
    ReadErrorWithCode(PathBuf, i32),
    /// Error while reading the preferences file.
    #[error("Error while reading the preferences file {0:?}.")]
    ReadError(PathBuf),
    /// Error while writing the preferences file.
    #[error("Error while writing the preferences file {0:?}.")]
    WriteError(PathBuf),
}

impl From<&str> for Error {
    fn from(value: &str) -> Self {
        Self::OtherError(value.into())
    }
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Self::OtherError(value)
    }
}
