use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use geojob_api::{JobsApi, JobsRequest};

use super::worker::{self, FetchResult, WorkerCommand};
use super::{FetchChannel, Sequencer, Ticket};

/// UI-side handle on the fetch worker.
pub(crate) struct FetchRuntime {
	tx: Sender<WorkerCommand>,
	rx: Receiver<FetchResult>,
	sequencer: Sequencer,
}

impl FetchRuntime {
	pub(crate) fn new(api: Arc<dyn JobsApi>) -> Self {
		let (tx, rx) = worker::spawn(api);
		Self {
			tx,
			rx,
			sequencer: Sequencer::new(),
		}
	}

	pub(crate) fn begin_generation(&mut self) -> u64 {
		self.sequencer.begin_generation()
	}

	/// Queue `request` on `channel`. Returns `None` if the worker is gone.
	pub(crate) fn issue(&mut self, channel: FetchChannel, request: JobsRequest) -> Option<Ticket> {
		let ticket = self.sequencer.issue(channel);
		log::debug!(
			"fetch #{} {} {:?}",
			ticket.id,
			request.endpoint().path(),
			request.query_pairs()
		);
		match self.tx.send(WorkerCommand::Fetch { ticket, request }) {
			Ok(()) => Some(ticket),
			Err(_) => {
				self.sequencer.complete(&ticket);
				log::error!("fetch worker is not running; request dropped");
				None
			}
		}
	}

	pub(crate) fn try_recv(&self) -> Result<FetchResult, TryRecvError> {
		self.rx.try_recv()
	}

	/// Mark `ticket` completed. Returns whether its response is still current.
	pub(crate) fn complete(&mut self, ticket: &Ticket) -> bool {
		self.sequencer.complete(ticket)
	}

	/// Record that the job list answering `ticket` was applied.
	pub(crate) fn mark_applied(&mut self, ticket: &Ticket) {
		self.sequencer.mark_applied(ticket);
	}

	pub(crate) fn is_busy(&self) -> bool {
		self.sequencer.is_busy()
	}

	pub(crate) fn pending(&self) -> usize {
		self.sequencer.pending()
	}

	pub(crate) fn shutdown(&self) {
		let _ = self.tx.send(WorkerCommand::Shutdown);
	}
}
