use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be parsed, or a setting (from the file or an
    /// environment variable) did not fit its type.
    #[error(
        "Failed to load settings from {} and {prefix}__* variables: {source}",
        .path.display(),
        prefix = crate::ENV_PREFIX
    )]
    LoadError {
        path: PathBuf,
        #[source]
        source: config::ConfigError,
    },

    /// A setting loaded fine but holds a value the application cannot use.
    #[error("Invalid setting: {0}")]
    ValidationError(String),
}
