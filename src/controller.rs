//! Fleet supervisor.
//!
//! A [`Controller`] owns a set of switches keyed by name. Starting it spawns
//! one session task per switch plus one supervisor task that runs the
//! user-supplied switch program: the program is started at every channel-up
//! and cancelled at channel-down, so it always sees a freshly arbitrated
//! stream. One failing switch never takes the others down.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use futures::future;
use log::{error, info};
use tokio::task::JoinHandle;

use crate::error::{Error, Result};
use crate::event::{EventStream, SwitchEvent};
use crate::switch::Switch;

/// The future type a switch program returns.
pub type ProgramFuture = Pin<Box<dyn Future<Output = Result<()>> + Send>>;

/// A switch program: invoked with the switch handle and a fresh event
/// subscription on every channel-up; cancelled on channel-down.
pub type SwitchProgram =
	Arc<dyn Fn(Switch, EventStream) -> ProgramFuture + Send + Sync>;

/// Wrap an async closure as a [`SwitchProgram`].
pub fn switch_program<F, Fut>(f: F) -> SwitchProgram
where
	F: Fn(Switch, EventStream) -> Fut + Send + Sync + 'static,
	Fut: Future<Output = Result<()>> + Send + 'static,
{
	Arc::new(move |switch, events| Box::pin(f(switch, events)))
}

/// An ordered collection of switches, not yet running.
#[derive(Default)]
pub struct Controller {
	switches: Vec<Switch>,
}

impl Controller {
	pub fn new(switches: impl IntoIterator<Item = Switch>) -> Result<Controller> {
		let mut controller = Controller::default();
		for switch in switches {
			controller.add(switch)?;
		}
		Ok(controller)
	}

	/// Add a switch. Names are the fleet key and must be unique.
	pub fn add(&mut self, switch: Switch) -> Result<()> {
		if self.get(switch.name()).is_some() {
			return Err(Error::InvalidValue(format!(
				"duplicate switch name {:?}",
				switch.name()
			)));
		}
		self.switches.push(switch);
		Ok(())
	}

	pub fn get(&self, name: &str) -> Option<&Switch> {
		self.switches.iter().find(|sw| sw.name() == name)
	}

	pub fn switches(&self) -> impl Iterator<Item = &Switch> {
		self.switches.iter()
	}

	pub fn len(&self) -> usize {
		self.switches.len()
	}

	pub fn is_empty(&self) -> bool {
		self.switches.is_empty()
	}

	/// Spawn every session and its supervisor. The returned handle is the
	/// only way to stop the fleet.
	pub fn start(self, program: SwitchProgram) -> ControllerHandle {
		let mut session_tasks = Vec::with_capacity(self.switches.len());
		let mut supervisor_tasks = Vec::with_capacity(self.switches.len());
		for switch in &self.switches {
			let session = switch.clone();
			session_tasks.push(tokio::spawn(async move {
				if let Err(err) = session.run().await {
					if !err.is_cancelled() {
						// fatal sessions end here; the rest of the fleet
						// keeps running
						error!("{}: session failed: {}", session.name(), err);
					}
				}
			}));
			let supervised = switch.clone();
			let program = program.clone();
			supervisor_tasks.push(tokio::spawn(async move {
				supervise(supervised, program).await;
			}));
		}
		info!("controller started with {} switch(es)", self.switches.len());
		ControllerHandle {
			switches: self.switches,
			session_tasks,
			supervisor_tasks,
		}
	}
}

/// Run the switch program once per channel-up.
async fn supervise(switch: Switch, program: SwitchProgram) {
	let mut events = switch.subscribe();
	let mut current: Option<JoinHandle<()>> = None;
	while let Some(event) = events.recv().await {
		match event {
			SwitchEvent::ChannelUp { .. } => {
				if let Some(task) = current.take() {
					task.abort();
				}
				let name = switch.name().to_string();
				let fut = program(switch.clone(), switch.subscribe());
				current = Some(tokio::spawn(async move {
					match fut.await {
						Ok(()) => {}
						Err(err) if err.is_cancelled() => {}
						Err(err) => {
							// report and carry on; the program restarts at
							// the next channel-up
							error!("{}: switch program failed: {}", name, err);
						}
					}
				}));
			}
			SwitchEvent::ChannelDown => {
				if let Some(task) = current.take() {
					task.abort();
				}
			}
			_ => {}
		}
	}
	if let Some(task) = current.take() {
		task.abort();
	}
}

/// A running fleet.
pub struct ControllerHandle {
	switches: Vec<Switch>,
	session_tasks: Vec<JoinHandle<()>>,
	supervisor_tasks: Vec<JoinHandle<()>>,
}

impl ControllerHandle {
	pub fn get(&self, name: &str) -> Option<&Switch> {
		self.switches.iter().find(|sw| sw.name() == name)
	}

	pub fn switches(&self) -> impl Iterator<Item = &Switch> {
		self.switches.iter()
	}

	/// Signal every session to close, cancel the programs, and wait for
	/// termination. Sessions still running at the deadline are aborted and
	/// the call reports DeadlineExceeded.
	pub async fn stop(self, deadline: Duration) -> Result<()> {
		for switch in &self.switches {
			switch.shutdown();
		}
		let done =
			tokio::time::timeout(deadline, future::join_all(self.session_tasks))
				.await;
		for task in &self.supervisor_tasks {
			task.abort();
		}
		match done {
			Ok(_) => {
				info!("controller stopped");
				Ok(())
			}
			Err(_) => {
				error!("controller stop exceeded its deadline");
				Err(Error::DeadlineExceeded)
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::switch::{SwitchOptions, SwitchState};

	fn unreachable_switch(name: &str) -> Switch {
		Switch::new(name, SwitchOptions {
			// nothing listens here; sessions cycle through backoff
			address: "127.0.0.1:1".to_string(),
			..Default::default()
		})
	}

	#[test]
	fn duplicate_names_are_rejected() {
		let mut controller =
			Controller::new([unreachable_switch("sw1")]).unwrap();
		let err = controller.add(unreachable_switch("sw1")).unwrap_err();
		assert!(matches!(err, Error::InvalidValue(_)));
	}

	#[tokio::test(flavor = "multi_thread")]
	async fn graceful_shutdown_closes_every_session() {
		let _ = env_logger::builder().is_test(true).try_init();
		let controller = Controller::new([
			unreachable_switch("stop1"),
			unreachable_switch("stop2"),
			unreachable_switch("stop3"),
		])
		.unwrap();
		let program = switch_program(|_switch, _events| async { Ok(()) });
		let handle = controller.start(program);
		tokio::time::sleep(Duration::from_millis(200)).await;

		let switches: Vec<Switch> =
			handle.switches().cloned().collect();
		handle.stop(Duration::from_secs(5)).await.unwrap();
		for switch in switches {
			assert_eq!(switch.state(), SwitchState::Closed);
		}
	}
}
