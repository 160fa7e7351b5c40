//! Log sink setup with an explicit lifetime.
//!
//! The host calls [`init`] once at startup and keeps the returned
//! [`LogGuard`] alive for as long as it wants logs written. Dropping the
//! guard writes a final line, flushes the file and uninstalls the subscriber.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::sync::Arc;

use tracing::subscriber::DefaultGuard;

use crate::config::settings::LoggingConfig;
use crate::error::{CoreError, CoreResult};

/// Keeps the log subscriber installed while alive.
#[must_use = "logging stops when the guard is dropped"]
pub struct LogGuard {
    inner: Option<(DefaultGuard, Arc<File>)>,
}

impl LogGuard {
    /// A guard that logs nothing.
    pub fn disabled() -> Self {
        Self { inner: None }
    }

    /// Returns `true` if a log file is being written.
    pub fn is_active(&self) -> bool {
        self.inner.is_some()
    }
}

impl std::fmt::Debug for LogGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogGuard")
            .field("active", &self.is_active())
            .finish()
    }
}

impl Drop for LogGuard {
    fn drop(&mut self) {
        if let Some((_, file)) = &self.inner {
            tracing::info!("logger finalizing");
            let _ = (&**file).flush();
        }
    }
}

/// Opens the configured log file and installs a `fmt` subscriber writing to it.
///
/// The subscriber is the default for the calling thread until the guard is
/// dropped. With logging disabled, returns an inert guard without touching
/// the filesystem.
///
/// # Errors
///
/// [`CoreError::Logging`] if the level is not a valid `tracing` level or the
/// file cannot be opened for appending.
pub fn init(config: &LoggingConfig) -> CoreResult<LogGuard> {
    if !config.enabled {
        return Ok(LogGuard::disabled());
    }

    let level: tracing::Level = config
        .level
        .parse()
        .map_err(|_| CoreError::Logging(format!("unknown log level: {}", config.level)))?;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.file)
        .map_err(|e| CoreError::Logging(format!("{}: {e}", config.file.display())))?;
    let file = Arc::new(file);

    let subscriber = tracing_subscriber::fmt()
        .with_writer(Arc::clone(&file))
        .with_max_level(level)
        .with_ansi(false)
        .finish();
    let default = tracing::subscriber::set_default(subscriber);

    tracing::info!("logger initialized, log file: {}", config.file.display());
    Ok(LogGuard {
        inner: Some((default, file)),
    })
}
