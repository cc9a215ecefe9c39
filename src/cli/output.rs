use anyhow::Result;
use geojob::BrowseOutcome;
use serde_json::json;

/// Print a plain-text representation of the browsing outcome.
pub(crate) fn print_plain(outcome: &BrowseOutcome) {
	if !outcome.accepted {
		println!(
			"Browsing cancelled (keyword: '{}')",
			outcome.keyword.as_deref().unwrap_or_default()
		);
		return;
	}

	match outcome.apply_link() {
		Some(url) => println!("{url}"),
		None => println!("No selection"),
	}
}

/// Format the browsing outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &BrowseOutcome) -> Result<String> {
	let job = match &outcome.job {
		Some(job) => json!({
			"id": job.id,
			"title": job.title,
			"company": job.company,
			"location": job.location,
			"jobType": job.job_type,
			"salary": job.salary,
			"applyUrl": job.apply_link(),
		}),
		None => serde_json::Value::Null,
	};

	let payload = json!({
		"accepted": outcome.accepted,
		"keyword": outcome.keyword,
		"job": job,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the browsing outcome.
pub(crate) fn print_json(outcome: &BrowseOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}
