//! Background fetching of job data.
//!
//! Requests run off the UI thread; every response comes back tagged with the
//! [`Ticket`] it was issued under so the [`Sequencer`] can drop anything stale.

mod runtime;
mod sequencer;
mod worker;

pub(crate) use runtime::FetchRuntime;
pub use sequencer::{FetchChannel, JobsSource, Sequencer, Ticket};
pub(crate) use worker::FetchResult;
