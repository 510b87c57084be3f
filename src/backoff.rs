//! Reconnect backoff schedule.

use std::time::Duration;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Exponential backoff parameters. The delay before attempt n is drawn
/// uniformly from [0, min(cap, base * factor^n)] when jitter is enabled
/// (full jitter), or is the envelope itself when disabled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackoffPolicy {
	pub base: Duration,
	pub factor: f64,
	pub cap: Duration,
	pub jitter: bool,
}

impl Default for BackoffPolicy {
	fn default() -> Self {
		BackoffPolicy {
			base: Duration::from_secs(1),
			factor: 2.0,
			cap: Duration::from_secs(30),
			jitter: true,
		}
	}
}

/// Backoff state for one connection. Reset on every successful attempt.
#[derive(Debug)]
pub struct Backoff {
	policy: BackoffPolicy,
	attempt: u32,
}

impl Backoff {
	pub fn new(policy: BackoffPolicy) -> Backoff {
		Backoff { policy, attempt: 0 }
	}

	/// The ceiling for the next delay, without jitter.
	pub fn envelope(&self) -> Duration {
		let exp = self.policy.factor.powi(self.attempt as i32);
		let raw = self.policy.base.as_secs_f64() * exp;
		Duration::from_secs_f64(raw.min(self.policy.cap.as_secs_f64()))
	}

	/// Draw the next delay and advance the schedule.
	pub fn next_delay(&mut self) -> Duration {
		let envelope = self.envelope();
		if self.attempt < u32::MAX {
			self.attempt += 1;
		}
		if !self.policy.jitter {
			return envelope;
		}
		let max = envelope.as_secs_f64();
		if max <= 0.0 {
			return Duration::ZERO;
		}
		Duration::from_secs_f64(rand::thread_rng().gen_range(0.0..=max))
	}

	/// Forget accumulated failures after a successful connection.
	pub fn reset(&mut self) {
		self.attempt = 0;
	}

	pub fn attempt(&self) -> u32 {
		self.attempt
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn envelope_doubles_until_cap() {
		let mut backoff = Backoff::new(BackoffPolicy {
			jitter: false,
			..Default::default()
		});
		assert_eq!(backoff.next_delay(), Duration::from_secs(1));
		assert_eq!(backoff.next_delay(), Duration::from_secs(2));
		assert_eq!(backoff.next_delay(), Duration::from_secs(4));
		assert_eq!(backoff.next_delay(), Duration::from_secs(8));
		assert_eq!(backoff.next_delay(), Duration::from_secs(16));
		assert_eq!(backoff.next_delay(), Duration::from_secs(30));
		assert_eq!(backoff.next_delay(), Duration::from_secs(30));
	}

	#[test]
	fn reset_restarts_schedule() {
		let mut backoff = Backoff::new(BackoffPolicy {
			jitter: false,
			..Default::default()
		});
		backoff.next_delay();
		backoff.next_delay();
		backoff.reset();
		assert_eq!(backoff.next_delay(), Duration::from_secs(1));
	}

	#[test]
	fn jitter_stays_inside_envelope() {
		if std::env::var_os("FINSY_TEST_NO_BENCHMARK").is_some() {
			return;
		}
		let mut backoff = Backoff::new(BackoffPolicy::default());
		// first attempt draws from [0, 1] s (full jitter)
		for _ in 0..200 {
			let delay = backoff.next_delay();
			assert!(delay <= backoff.envelope());
			backoff.reset();
			assert!(delay <= Duration::from_secs(1));
		}
	}
}
