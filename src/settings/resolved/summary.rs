use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	for line in summary_lines(config) {
		println!("{line}");
	}
}

fn summary_lines(config: &ResolvedConfig) -> Vec<String> {
	let mut lines = vec![
		"Effective configuration:".to_string(),
		format!("  API base URL: {}", config.base_url),
		format!("  Request timeout: {}s", config.timeout.as_secs()),
		format!("  Sort order: {}", config.sort.label()),
		format!("  Start view: {}", config.start_view),
		format!(
			"  UI theme: {}",
			config
				.theme
				.as_deref()
				.unwrap_or("(use the library default)")
		),
		format!("  Title: {}", config.ui.title),
		format!("  Log level: {}", config.log_level),
	];
	if let Some(keyword) = &config.initial_keyword {
		lines.push(format!("  Initial keyword: {keyword}"));
	}
	lines
}

#[cfg(test)]
mod tests {
	use std::time::Duration;

	use geojob::{SortBy, UiLabels, View};
	use log::LevelFilter;

	use super::*;

	#[test]
	fn summary_lists_effective_values() {
		let config = ResolvedConfig {
			base_url: "http://localhost:8080".into(),
			timeout: Duration::from_secs(3),
			initial_keyword: Some("rust".into()),
			sort: SortBy::Salary,
			start_view: View::Map,
			theme: None,
			ui: UiLabels::default(),
			log_level: LevelFilter::Debug,
		};

		let lines = summary_lines(&config);
		assert!(lines.contains(&"  API base URL: http://localhost:8080".to_string()));
		assert!(lines.contains(&"  Request timeout: 3s".to_string()));
		assert!(lines.contains(&"  Start view: map".to_string()));
		assert!(lines.contains(&"  UI theme: (use the library default)".to_string()));
		assert!(lines.contains(&"  Log level: DEBUG".to_string()));
		assert_eq!(lines.last().map(String::as_str), Some("  Initial keyword: rust"));

		print_summary(&config);
	}
}
