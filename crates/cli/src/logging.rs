//! Logging setup for the tagsort binary

use std::fs::OpenOptions;
use std::path::Path;

use tagsort_core::config::constants;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Create log file with proper options
pub fn create_log_file(path: &Path) -> std::io::Result<std::fs::File> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
}

/// Install the console layer and, when requested, a debug file layer.
///
/// Console output goes to stderr; stdout is reserved for command results.
pub fn init(log_file: Option<&Path>) -> std::io::Result<()> {
    let file_layer = match log_file {
        Some(path) => Some(
            fmt::layer()
                .with_writer(create_log_file(path)?)
                .with_ansi(false)
                .with_target(false)
                .with_thread_ids(false)
                .with_level(true)
                .with_filter(EnvFilter::new(constants::FILE_LOG_FILTER)),
        ),
        None => None,
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_level(true)
                .with_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new(constants::DEFAULT_LOG_FILTER)),
                ),
        )
        .with(file_layer)
        .init();

    Ok(())
}
