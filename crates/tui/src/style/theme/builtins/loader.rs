use std::borrow::Cow;

use anyhow::{Context, Result, bail};
use include_dir::{Dir, File};
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

use crate::style::theme::types::{Theme, ThemeDescriptor};

#[derive(Debug, Deserialize)]
struct ThemeConfig {
	name: String,
	#[serde(default)]
	aliases: Vec<String>,
	#[serde(default)]
	default: bool,
	styles: ThemeStylesConfig,
}

impl ThemeConfig {
	fn into_descriptor(self, context: &str) -> Result<ThemeDescriptor> {
		let theme = self.styles.into_theme(&format!("{context}.styles"))?;
		let aliases = self
			.aliases
			.into_iter()
			.map(|alias| alias.trim().to_string())
			.filter(|alias| !alias.is_empty())
			.collect();

		Ok(ThemeDescriptor {
			name: self.name.trim().to_string(),
			aliases,
			theme,
			is_default: self.default,
		})
	}
}

#[derive(Debug, Deserialize)]
struct ThemeStylesConfig {
	header: StyleConfig,
	row_highlight: StyleConfig,
	prompt: StyleConfig,
	empty: StyleConfig,
	highlight: StyleConfig,
	marker: StyleConfig,
	marker_selected: StyleConfig,
}

impl ThemeStylesConfig {
	fn into_theme(self, context: &str) -> Result<Theme> {
		let style = |config: &StyleConfig, key: &str| config.to_style(&format!("{context}.{key}"));
		Ok(Theme {
			header: style(&self.header, "header")?,
			row_highlight: style(&self.row_highlight, "row_highlight")?,
			prompt: style(&self.prompt, "prompt")?,
			empty: style(&self.empty, "empty")?,
			highlight: style(&self.highlight, "highlight")?,
			marker: style(&self.marker, "marker")?,
			marker_selected: style(&self.marker_selected, "marker_selected")?,
		})
	}
}

#[derive(Debug, Deserialize)]
struct StyleConfig {
	#[serde(default)]
	fg: Option<String>,
	#[serde(default)]
	bg: Option<String>,
	#[serde(default)]
	modifiers: Vec<String>,
}

impl StyleConfig {
	fn to_style(&self, context: &str) -> Result<Style> {
		let mut style = Style::new();

		if let Some(fg) = &self.fg {
			let color = parse_color(fg)
				.with_context(|| format!("{context}: invalid foreground colour `{fg}`"))?;
			style = style.fg(color);
		}

		if let Some(bg) = &self.bg {
			let color = parse_color(bg)
				.with_context(|| format!("{context}: invalid background colour `{bg}`"))?;
			style = style.bg(color);
		}

		for modifier in &self.modifiers {
			let modifier_value = parse_modifier(modifier)
				.with_context(|| format!("{context}: invalid modifier `{modifier}`"))?;
			style = style.add_modifier(modifier_value);
		}

		Ok(style)
	}
}

/// Parse every `.toml` document in `dir`, in path order.
pub(super) fn load_builtin_themes(dir: &Dir) -> Result<Vec<ThemeDescriptor>> {
	let mut files: Vec<_> = dir
		.files()
		.filter(|file| file.path().extension().is_some_and(|ext| ext == "toml"))
		.collect();
	files.sort_by(|a, b| a.path().cmp(b.path()));

	let mut descriptors: Vec<ThemeDescriptor> = Vec::with_capacity(files.len());
	for file in files {
		let descriptor = parse_theme_document(file)?;
		if descriptor.is_default
			&& let Some(existing) = descriptors.iter().find(|existing| existing.is_default)
		{
			bail!(
				"multiple built-in themes are marked as default (`{}` and `{}`)",
				existing.name,
				descriptor.name
			);
		}
		descriptors.push(descriptor);
	}

	if descriptors.is_empty() {
		bail!("no built-in theme definitions were found");
	}

	Ok(descriptors)
}

fn parse_theme_document(file: &File) -> Result<ThemeDescriptor> {
	let path = file.path();
	let contents = file
		.contents_utf8()
		.with_context(|| format!("{path:?} is not valid UTF-8"))?;

	let config: ThemeConfig = toml::from_str(contents)
		.with_context(|| format!("failed to parse built-in theme definition in {path:?}"))?;

	config.into_descriptor(&format!("{path:?}"))
}

fn parse_color(input: &str) -> Result<Color> {
	let value = input.trim();

	if let Some(hex) = value.strip_prefix('#') {
		return parse_hex_colour(hex);
	}

	if let Some(body) = value.strip_prefix("rgb(").and_then(|s| s.strip_suffix(')')) {
		return parse_rgb_triplet(body);
	}

	if let Some(body) = value
		.strip_prefix("ansi(")
		.and_then(|s| s.strip_suffix(')'))
	{
		let index: u8 = body
			.trim()
			.parse()
			.with_context(|| format!("invalid ANSI colour index `{body}`"))?;
		return Ok(Color::Indexed(index));
	}

	if let Ok(index) = value.parse::<u8>() {
		return Ok(Color::Indexed(index));
	}

	match normalise_key(value).as_ref() {
		"reset" | "none" | "default" => Ok(Color::Reset),
		"black" => Ok(Color::Black),
		"red" => Ok(Color::Red),
		"green" => Ok(Color::Green),
		"yellow" => Ok(Color::Yellow),
		"blue" => Ok(Color::Blue),
		"magenta" => Ok(Color::Magenta),
		"cyan" => Ok(Color::Cyan),
		"gray" | "grey" => Ok(Color::Gray),
		"dark_gray" | "dark_grey" => Ok(Color::DarkGray),
		"light_red" => Ok(Color::LightRed),
		"light_green" => Ok(Color::LightGreen),
		"light_yellow" => Ok(Color::LightYellow),
		"light_blue" => Ok(Color::LightBlue),
		"light_magenta" => Ok(Color::LightMagenta),
		"light_cyan" => Ok(Color::LightCyan),
		"white" => Ok(Color::White),
		other => bail!("unknown colour `{other}`"),
	}
}

fn parse_hex_colour(hex: &str) -> Result<Color> {
	let expanded = match hex.len() {
		3 => {
			let mut expanded = String::with_capacity(6);
			for ch in hex.chars() {
				expanded.push(ch);
				expanded.push(ch);
			}
			Cow::Owned(expanded)
		}
		6 => Cow::Borrowed(hex),
		_ => bail!("hex colours must be 3 or 6 characters long"),
	};

	let r = u8::from_str_radix(&expanded[0..2], 16)
		.with_context(|| format!("invalid red component `{hex}`"))?;
	let g = u8::from_str_radix(&expanded[2..4], 16)
		.with_context(|| format!("invalid green component `{hex}`"))?;
	let b = u8::from_str_radix(&expanded[4..6], 16)
		.with_context(|| format!("invalid blue component `{hex}`"))?;

	Ok(Color::Rgb(r, g, b))
}

fn parse_rgb_triplet(body: &str) -> Result<Color> {
	let components = body.split(',').map(|part| part.trim()).collect::<Vec<_>>();

	if components.len() != 3 {
		bail!(
			"expected three components for rgb() colour, found {}",
			components.len()
		);
	}

	let r = parse_rgb_component(components[0], 'r')?;
	let g = parse_rgb_component(components[1], 'g')?;
	let b = parse_rgb_component(components[2], 'b')?;

	Ok(Color::Rgb(r, g, b))
}

fn parse_rgb_component(value: &str, component: char) -> Result<u8> {
	value.parse::<u8>().with_context(|| {
		format!("invalid {component}-component `{value}` in rgb() colour value")
	})
}

fn parse_modifier(input: &str) -> Result<Modifier> {
	match normalise_key(input).as_ref() {
		"bold" => Ok(Modifier::BOLD),
		"dim" => Ok(Modifier::DIM),
		"italic" => Ok(Modifier::ITALIC),
		"underline" | "underlined" => Ok(Modifier::UNDERLINED),
		"slow_blink" | "slowblink" => Ok(Modifier::SLOW_BLINK),
		"rapid_blink" | "rapidblink" | "fast_blink" => Ok(Modifier::RAPID_BLINK),
		"reversed" | "reverse" | "invert" | "inverted" => Ok(Modifier::REVERSED),
		"hidden" => Ok(Modifier::HIDDEN),
		"crossed_out" | "crossedout" | "strikethrough" => Ok(Modifier::CROSSED_OUT),
		other => bail!("unknown modifier `{other}`"),
	}
}

fn normalise_key(value: &str) -> String {
	value
		.trim()
		.to_ascii_lowercase()
		.chars()
		.map(|ch| match ch {
			'-' | ' ' => '_',
			other => other,
		})
		.collect()
}
