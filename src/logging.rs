//! Logger setup.
//!
//! Records go to `tui-logger`'s in-memory buffer so they never write over the
//! alternate screen; the browser shows them in its log console.

use std::str::FromStr;

use anyhow::{Context, Result};
use log::LevelFilter;

/// Install the logger at `level`. Call once, before the terminal UI starts.
pub fn initialize(level: LevelFilter) -> Result<()> {
	tui_logger::init_logger(level).context("failed to install the logger")?;
	tui_logger::set_default_level(level);
	log::debug!("logging at {level}");
	Ok(())
}

/// Parse a level name such as `info` or `off`, ignoring case.
pub fn parse_level(value: &str) -> Option<LevelFilter> {
	LevelFilter::from_str(value.trim()).ok()
}
