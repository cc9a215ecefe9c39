use std::collections::{HashMap, HashSet};

/// Which request produced a job list. Within one selection generation a later
/// source always carries at least the selections of an earlier one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum JobsSource {
	All,
	Search,
	Filter,
	Sort,
}

/// Independent stream of responses. Only the newest request per channel counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchChannel {
	Jobs(JobsSource),
	Locations,
	JobTypes,
	Salaries,
	Coordinates,
}

/// Identity of an issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
	pub id: u64,
	pub channel: FetchChannel,
	pub generation: u64,
}

/// Decides which responses may still be applied.
///
/// A response is current when it answers the latest request on its channel.
/// Job lists must also belong to the current selection generation and must not
/// rank below a job list already applied in that generation.
#[derive(Debug, Default)]
pub struct Sequencer {
	next_id: u64,
	generation: u64,
	latest: HashMap<FetchChannel, u64>,
	pending: HashSet<u64>,
	applied_jobs: Option<(u64, JobsSource)>,
}

impl Sequencer {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Start a new selection generation. Job lists issued earlier become stale.
	pub fn begin_generation(&mut self) -> u64 {
		self.generation += 1;
		self.generation
	}

	pub fn issue(&mut self, channel: FetchChannel) -> Ticket {
		self.next_id += 1;
		let id = self.next_id;
		self.latest.insert(channel, id);
		self.pending.insert(id);
		Ticket {
			id,
			channel,
			generation: self.generation,
		}
	}

	/// Record that `ticket` completed and report whether a successful response
	/// for it may still be applied. Nothing else changes, so a failed request
	/// never blocks the lists that follow it.
	pub fn complete(&mut self, ticket: &Ticket) -> bool {
		self.pending.remove(&ticket.id);
		if self.latest.get(&ticket.channel) != Some(&ticket.id) {
			return false;
		}
		let FetchChannel::Jobs(source) = ticket.channel else {
			return true;
		};
		if ticket.generation != self.generation {
			return false;
		}
		!matches!(
			self.applied_jobs,
			Some((generation, applied)) if generation == ticket.generation && applied > source
		)
	}

	/// Note that the job list answering `ticket` is now on screen.
	pub fn mark_applied(&mut self, ticket: &Ticket) {
		if let FetchChannel::Jobs(source) = ticket.channel {
			self.applied_jobs = Some((ticket.generation, source));
		}
	}

	/// Whether any issued request has not completed yet.
	#[must_use]
	pub fn is_busy(&self) -> bool {
		!self.pending.is_empty()
	}

	#[must_use]
	pub fn pending(&self) -> usize {
		self.pending.len()
	}
}
