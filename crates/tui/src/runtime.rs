//! Application runtime and event loop.

use std::collections::VecDeque;
use std::io::stdout;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::Duration;

use anyhow::{Result, anyhow};
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{
	self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind,
};
use ratatui::crossterm::execute;

use crate::app::{App, BrowseOutcome};

impl<'a> App<'a> {
	/// Issue the initial requests and pump the terminal event loop until the
	/// user exits.
	pub fn run(&mut self) -> Result<BrowseOutcome> {
		let (guard, mut terminal) = TerminalGuard::enter()?;

		self.start();

		let (event_tx, event_rx) = mpsc::channel();
		let input = InputPump::spawn(poll_terminal, event_tx);

		let result = self.event_loop(&mut terminal, &event_rx);

		let stopped = input.stop();
		drop(guard);
		stopped?;
		result
	}

	fn event_loop(
		&mut self,
		terminal: &mut DefaultTerminal,
		event_rx: &mpsc::Receiver<Event>,
	) -> Result<BrowseOutcome> {
		let mut pending_events = VecDeque::new();

		loop {
			loop {
				match event_rx.try_recv() {
					Ok(event) => pending_events.push_back(event),
					Err(mpsc::TryRecvError::Empty) => break,
					Err(mpsc::TryRecvError::Disconnected) => {
						return Err(anyhow!("input event channel disconnected"));
					}
				}
			}

			while let Some(event) = pending_events.pop_front() {
				let outcome = match event {
					Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key)?,
					Event::Mouse(mouse) => self.handle_mouse(mouse),
					_ => None,
				};
				if let Some(outcome) = outcome {
					return Ok(outcome);
				}
			}

			self.pump_fetch_results();
			tui_logger::move_events();
			self.throbber_state.calc_next();

			terminal.draw(|frame| self.draw(frame))?;

			thread::sleep(Duration::from_millis(16));
		}
	}
}

/// Raw mode, alternate screen and mouse capture for the lifetime of the
/// guard. Dropping it restores the terminal, including on early errors.
struct TerminalGuard {
	mouse_captured: bool,
}

impl TerminalGuard {
	fn enter() -> Result<(Self, DefaultTerminal)> {
		let mut terminal = ratatui::init();
		let mut guard = Self {
			mouse_captured: false,
		};
		terminal.clear()?;
		execute!(stdout(), EnableMouseCapture)?;
		guard.mouse_captured = true;
		Ok((guard, terminal))
	}
}

impl Drop for TerminalGuard {
	fn drop(&mut self) {
		if self.mouse_captured
			&& let Err(err) = execute!(stdout(), DisableMouseCapture)
		{
			log::warn!("failed to disable mouse capture: {err}");
		}
		ratatui::restore();
	}
}

fn poll_terminal() -> Result<Option<Event>> {
	if event::poll(Duration::from_millis(50))? {
		Ok(Some(event::read()?))
	} else {
		Ok(None)
	}
}

/// Background thread forwarding input events until stopped.
struct InputPump {
	running: Arc<AtomicBool>,
	handle: thread::JoinHandle<Result<()>>,
}

impl InputPump {
	fn spawn<F>(mut next_event: F, events: mpsc::Sender<Event>) -> Self
	where
		F: FnMut() -> Result<Option<Event>> + Send + 'static,
	{
		let running = Arc::new(AtomicBool::new(true));
		let flag = Arc::clone(&running);
		let handle = thread::spawn(move || -> Result<()> {
			while flag.load(Ordering::Relaxed) {
				if let Some(event) = next_event()?
					&& events.send(event).is_err()
				{
					break;
				}
			}
			Ok(())
		});
		Self { running, handle }
	}

	/// Signal the thread and wait for it. Returns the error it stopped on.
	fn stop(self) -> Result<()> {
		self.running.store(false, Ordering::Relaxed);
		match self.handle.join() {
			Ok(result) => result,
			Err(err) => std::panic::resume_unwind(err),
		}
	}
}
