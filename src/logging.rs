//! File-backed diagnostics for the palette.
//!
//! The terminal is in raw mode while the palette runs, so log output cannot go
//! to stderr without corrupting the display. Records are appended to a plain
//! text file under the platform data directory instead; `RUST_LOG` overrides
//! the default filter.

use std::fs::{self, OpenOptions};
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

use crate::app_dirs;

const DEFAULT_LOG_FILTER: &str = "shoplight=info";
const LOG_FILE_NAME: &str = "shoplight.log";

/// Install the global tracing subscriber writing to the application log file.
///
/// Calling this more than once is harmless; later installations are ignored so
/// tests can initialize logging independently.
pub fn init() -> Result<()> {
	let log_dir = app_dirs::get_data_dir()?.join("logs");
	fs::create_dir_all(&log_dir)
		.with_context(|| format!("failed to create log directory: {}", log_dir.display()))?;

	let log_path = log_dir.join(LOG_FILE_NAME);
	let file = OpenOptions::new()
		.create(true)
		.append(true)
		.open(&log_path)
		.with_context(|| format!("failed to open log file: {}", log_path.display()))?;

	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

	let _ = tracing_subscriber::registry()
		.with(
			tracing_subscriber::fmt::layer()
				.with_writer(Arc::new(file))
				.with_ansi(false)
				.with_filter(filter),
		)
		.try_init();

	Ok(())
}
