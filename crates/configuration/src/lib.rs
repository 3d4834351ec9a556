use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use error::ConfigError;
pub use settings::{Config, Logging};

/// File read when no `--config` path is given.
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// Prefix of environment variables that override file settings,
/// e.g. `HOUSE_INSIGHTS__GROWTH__RANGE=all`.
pub const ENV_PREFIX: &str = "HOUSE_INSIGHTS";

/// Loads the application configuration from `path`, layered under environment overrides.
///
/// A missing file is not an error: every setting has a default.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let load_error = |source| ConfigError::LoadError {
        path: path.to_path_buf(),
        source,
    };
    let builder = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .map_err(load_error)?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>().map_err(load_error)?;
    config.validate()?;

    tracing::debug!(path = %path.display(), ?config, "configuration loaded");
    Ok(config)
}
