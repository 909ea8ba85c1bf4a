//! Tracing and logging (shared setup).

/// Initialize process-wide logging using the format named by
/// `STOCKKEEP_LOG_FORMAT` (`text` by default).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(tracing::LogFormat::from_env());
}

/// Tracing configuration (filters, output format).
pub mod tracing;

pub use tracing::LogFormat;
