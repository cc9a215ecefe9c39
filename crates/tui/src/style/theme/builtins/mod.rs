mod loader;

use std::sync::OnceLock;

use anyhow::{Result, anyhow};
use include_dir::{Dir, include_dir};
use loader::load_builtin_themes;

use super::types::{Theme, ThemeDescriptor};

const BUILTIN_THEME_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/style/theme/builtins/themes");

/// The theme flagged as default in the bundled set.
pub fn default_theme() -> Result<Theme> {
	let themes = all()?;
	themes
		.iter()
		.find(|descriptor| descriptor.is_default)
		.or_else(|| themes.first())
		.map(|descriptor| descriptor.theme)
		.ok_or_else(|| anyhow!("no built-in themes are available"))
}

pub(super) fn all() -> Result<&'static [ThemeDescriptor]> {
	static BUILTINS: OnceLock<Result<Vec<ThemeDescriptor>, String>> = OnceLock::new();
	BUILTINS
		.get_or_init(|| load_builtin_themes(&BUILTIN_THEME_DIR).map_err(|err| format!("{err:#}")))
		.as_deref()
		.map_err(|err| anyhow!("failed to load built-in themes: {err}"))
}
