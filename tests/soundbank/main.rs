//! End-to-end SoundBank tests for `wwise-rs`
//!
//! Banks are written to the temp directory, opened through the public API,
//! edited and saved again, the way the demo utility drives the library.

mod bank;
mod workflow;

use std::path::PathBuf;

/// Temp file path unique to this test process
pub(crate) fn temp_path(name: &str) -> PathBuf {
	std::env::temp_dir().join(format!("wwise_rs_it_{}_{}", std::process::id(), name))
}
