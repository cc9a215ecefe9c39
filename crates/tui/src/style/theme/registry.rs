use anyhow::Result;

use super::builtins;
use super::types::{Theme, ThemeDescriptor};

/// Look a theme up by name or alias.
pub fn by_name(name: &str) -> Result<Option<Theme>> {
	Ok(builtins::all()?
		.iter()
		.find(|descriptor| descriptor.matches(name))
		.map(|descriptor| descriptor.theme))
}

/// Names of every bundled theme, sorted.
pub fn names() -> Result<Vec<String>> {
	let mut names: Vec<String> = builtins::all()?
		.iter()
		.map(|descriptor| descriptor.name.clone())
		.collect();
	names.sort();
	Ok(names)
}

/// Every bundled theme with its metadata.
pub fn descriptors() -> Result<Vec<ThemeDescriptor>> {
	Ok(builtins::all()?.to_vec())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn lookup_is_case_insensitive_and_honours_aliases() {
		let slate = by_name("slate").unwrap().expect("slate theme");
		assert_eq!(by_name("  SLATE ").unwrap(), Some(slate));
		assert_eq!(by_name("default").unwrap(), Some(slate));
		assert_eq!(by_name("no-such-theme").unwrap(), None);
	}

	#[test]
	fn names_are_sorted_and_unique() {
		let names = names().unwrap();
		let mut sorted = names.clone();
		sorted.sort();
		sorted.dedup();
		assert_eq!(names, sorted);
		assert!(names.iter().any(|name| name == "paper"));
	}

	#[test]
	fn aliases_do_not_collide() {
		let descriptors = descriptors().unwrap();
		let mut seen = Vec::new();
		for descriptor in &descriptors {
			for name in std::iter::once(&descriptor.name).chain(&descriptor.aliases) {
				let key = name.to_ascii_lowercase();
				assert!(!seen.contains(&key), "duplicate theme name `{name}`");
				seen.push(key);
			}
		}
	}
}
