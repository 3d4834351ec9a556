use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};
use tracing_subscriber::{EnvFilter, Registry};

/// Level in effect until the configuration file has been read.
pub const BOOTSTRAP_LEVEL: &str = "info";

/// Handle on the installed log filter.
///
/// The subscriber goes up before the configuration is loaded so that loading
/// is itself logged; the configured level is applied afterwards.
pub struct LogLevel {
    handle: reload::Handle<EnvFilter, Registry>,
    from_env: bool,
}

/// Installs the global stderr subscriber.
///
/// `RUST_LOG` decides the filter when set; otherwise [`BOOTSTRAP_LEVEL`] holds
/// until [`LogLevel::apply`].
pub fn init() -> anyhow::Result<LogLevel> {
    let from_env = std::env::var_os(EnvFilter::DEFAULT_ENV).is_some();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(BOOTSTRAP_LEVEL));
    let (filter, handle) = reload::Layer::new(filter);

    // Logs go to stderr so JSON output stays clean.
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init()?;

    Ok(LogLevel { handle, from_env })
}

impl LogLevel {
    /// Switches to the configured `level`. A filter taken from `RUST_LOG` is kept.
    pub fn apply(&self, level: &str) -> Result<(), reload::Error> {
        if self.from_env {
            return Ok(());
        }
        self.handle.reload(EnvFilter::new(level))
    }

    /// The most verbose level the current filter lets through.
    pub fn current(&self) -> Option<LevelFilter> {
        self.handle.with_current(|f| f.max_level_hint()).ok().flatten()
    }
}
