use std::sync::mpsc::TryRecvError;

use geojob_api::JobsResponse;

use super::App;
use crate::fetch::{FetchChannel, FetchResult};

impl<'a> App<'a> {
	/// Drain finished requests and apply the responses that are still current.
	/// Returns `true` if any state changed.
	pub(crate) fn pump_fetch_results(&mut self) -> bool {
		let mut changed = false;
		loop {
			match self.fetch.try_recv() {
				Ok(result) => changed |= self.handle_fetch_result(result),
				Err(TryRecvError::Empty) => break,
				Err(TryRecvError::Disconnected) => {
					log::error!("fetch worker disconnected");
					break;
				}
			}
		}
		changed
	}

	fn handle_fetch_result(&mut self, result: FetchResult) -> bool {
		let FetchResult {
			ticket,
			request,
			outcome,
		} = result;
		if !self.fetch.complete(&ticket) {
			log::debug!(
				"dropping stale response #{} from {}",
				ticket.id,
				request.endpoint().path()
			);
			return false;
		}

		let response = match outcome {
			Ok(response) => response,
			Err(err) => {
				log::error!("request to {} failed: {err}", request.endpoint().path());
				return false;
			}
		};

		match (ticket.channel, response) {
			(FetchChannel::Jobs(source), JobsResponse::Jobs(jobs)) => {
				self.fetch.mark_applied(&ticket);
				self.board.replace(jobs, source);
				if let Some(source) = self.board.source {
					log::debug!("showing {} jobs from {source:?}", self.board.len());
				}
				self.details.reset();
			}
			(FetchChannel::Locations, JobsResponse::Locations(locations)) => {
				self.facets.locations = locations;
				self.rebuild_picker();
			}
			(FetchChannel::JobTypes, JobsResponse::JobTypes(job_types)) => {
				self.facets.job_types = job_types;
				self.rebuild_picker();
			}
			(FetchChannel::Salaries, JobsResponse::Salaries(salaries)) => {
				self.facets.salaries = salaries;
				self.rebuild_picker();
			}
			(FetchChannel::Coordinates, JobsResponse::Coordinates(coords)) => {
				self.map.replace(coords);
			}
			(channel, response) => {
				log::error!(
					"unexpected {} item response on {channel:?}",
					response.len()
				);
				return false;
			}
		}
		true
	}

	fn rebuild_picker(&mut self) {
		if let Some(picker) = self.picker.as_mut() {
			picker.rebuild(&self.facets, &self.selection, self.sort);
		}
	}
}
