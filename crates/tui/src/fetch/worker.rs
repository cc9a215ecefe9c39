use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use geojob_api::{ApiError, JobsApi, JobsRequest, JobsResponse};

use super::Ticket;

pub(crate) enum WorkerCommand {
	Fetch { ticket: Ticket, request: JobsRequest },
	Shutdown,
}

/// Outcome of one request, tagged with the ticket it was issued under.
pub(crate) struct FetchResult {
	pub ticket: Ticket,
	pub request: JobsRequest,
	pub outcome: Result<JobsResponse, ApiError>,
}

/// Spawn the dispatcher thread. Each request runs on its own short-lived
/// thread so responses arrive in completion order.
pub(crate) fn spawn(api: Arc<dyn JobsApi>) -> (Sender<WorkerCommand>, Receiver<FetchResult>) {
	let (command_tx, command_rx) = mpsc::channel::<WorkerCommand>();
	let (result_tx, result_rx) = mpsc::channel();

	thread::spawn(move || {
		while let Ok(command) = command_rx.recv() {
			let (ticket, request) = match command {
				WorkerCommand::Fetch { ticket, request } => (ticket, request),
				WorkerCommand::Shutdown => break,
			};
			let api = Arc::clone(&api);
			let result_tx = result_tx.clone();
			thread::spawn(move || {
				let outcome = api.fetch(&request);
				let _ = result_tx.send(FetchResult {
					ticket,
					request,
					outcome,
				});
			});
		}
	});

	(command_tx, result_rx)
}
