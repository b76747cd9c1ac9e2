//! Constants for tagsort

/// Console log filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Filter for the optional log file layer
pub const FILE_LOG_FILTER: &str = "debug";

/// Source argument that means standard input
pub const STDIN_SOURCE: &str = "-";

/// Display name for standard input in logs and errors
pub const STDIN_NAME: &str = "<stdin>";
