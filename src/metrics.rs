//! Lightweight per-switch counters.
//!
//! These are plain atomics rather than an exporter dependency; callers that
//! run a metrics pipeline can poll [`SwitchMetrics::snapshot`] and feed the
//! numbers wherever they like.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use once_cell::sync::Lazy;

/// Counters kept by one switch session.
#[derive(Debug, Default)]
pub struct SwitchMetrics {
	/// Successful stream establishments (arbitration completed).
	pub connects: AtomicU64,
	/// Reconnect attempts scheduled after a break.
	pub reconnects: AtomicU64,
	/// Stream messages received, of any kind.
	pub stream_messages: AtomicU64,
	/// Write batches accepted by the target.
	pub writes: AtomicU64,
	/// Read RPCs issued.
	pub reads: AtomicU64,
	/// Packet-in messages delivered to subscribers.
	pub packet_ins: AtomicU64,
	/// Digest lists delivered to subscribers.
	pub digests: AtomicU64,
	/// Stream messages that could not be decoded against the schema.
	pub decode_failures: AtomicU64,
	/// Times a subscriber queue crossed the high-water mark.
	pub queue_high_water: AtomicU64,
}

impl SwitchMetrics {
	pub fn incr(counter: &AtomicU64) {
		counter.fetch_add(1, Ordering::Relaxed);
	}

	pub fn snapshot(&self) -> MetricsSnapshot {
		MetricsSnapshot {
			connects: self.connects.load(Ordering::Relaxed),
			reconnects: self.reconnects.load(Ordering::Relaxed),
			stream_messages: self.stream_messages.load(Ordering::Relaxed),
			writes: self.writes.load(Ordering::Relaxed),
			reads: self.reads.load(Ordering::Relaxed),
			packet_ins: self.packet_ins.load(Ordering::Relaxed),
			digests: self.digests.load(Ordering::Relaxed),
			decode_failures: self.decode_failures.load(Ordering::Relaxed),
			queue_high_water: self.queue_high_water.load(Ordering::Relaxed),
		}
	}
}

/// Point-in-time copy of [`SwitchMetrics`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
	pub connects: u64,
	pub reconnects: u64,
	pub stream_messages: u64,
	pub writes: u64,
	pub reads: u64,
	pub packet_ins: u64,
	pub digests: u64,
	pub decode_failures: u64,
	pub queue_high_water: u64,
}

static REGISTRY: Lazy<Mutex<HashMap<String, Arc<SwitchMetrics>>>> =
	Lazy::new(|| Mutex::new(HashMap::new()));

/// The process-wide metrics handle for a switch name. Sessions register
/// themselves here so observability code can find them without holding a
/// reference to the switch.
pub fn for_switch(name: &str) -> Arc<SwitchMetrics> {
	let mut registry = REGISTRY.lock().unwrap();
	registry
		.entry(name.to_string())
		.or_insert_with(|| Arc::new(SwitchMetrics::default()))
		.clone()
}

/// Snapshot every registered switch.
pub fn snapshot_all() -> HashMap<String, MetricsSnapshot> {
	let registry = REGISTRY.lock().unwrap();
	registry
		.iter()
		.map(|(name, metrics)| (name.clone(), metrics.snapshot()))
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn registry_reuses_handles() {
		let a = for_switch("metrics-test-sw");
		let b = for_switch("metrics-test-sw");
		SwitchMetrics::incr(&a.writes);
		assert_eq!(b.snapshot().writes, 1);
	}
}
