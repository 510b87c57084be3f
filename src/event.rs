//! Per-switch event fan-out.
//!
//! Each subscriber owns an unbounded, lossless queue. A slow subscriber does
//! not block the session; its queue grows, a warning is logged once per
//! crossing of the high-water mark, and a metric is incremented.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use log::warn;
use tokio::sync::mpsc;

use crate::entity::{DigestList, IdleTimeoutNotification, PacketIn};
use crate::metrics::SwitchMetrics;

/// Queue depth at which a subscriber is reported as falling behind.
pub const QUEUE_HIGH_WATER: usize = 1024;

/// Events published by a switch session, in receive order.
#[derive(Debug, Clone)]
pub enum SwitchEvent {
	/// Stream established and arbitration completed.
	ChannelUp { is_primary: bool },
	/// Stream broken; the session is reconnecting.
	ChannelDown,
	/// An arbitration update changed our role while the channel stayed up.
	RoleChanged { is_primary: bool },
	/// A control-plane-punted packet.
	PacketIn(PacketIn),
	/// A digest list from the target.
	Digest(DigestList),
	/// Table entries idled out.
	IdleTimeout(IdleTimeoutNotification),
	/// The target reported an error for a stream message we sent. The
	/// session stays up.
	StreamError { canonical_code: i32, message: String },
}

struct Subscriber {
	tx: mpsc::UnboundedSender<SwitchEvent>,
	depth: Arc<AtomicUsize>,
	above_high_water: bool,
}

/// Publisher side, owned by the switch session.
pub(crate) struct EventHub {
	switch: String,
	subscribers: Mutex<Vec<Subscriber>>,
	metrics: Arc<SwitchMetrics>,
}

impl EventHub {
	pub(crate) fn new(switch: String, metrics: Arc<SwitchMetrics>) -> EventHub {
		EventHub {
			switch,
			subscribers: Mutex::new(Vec::new()),
			metrics,
		}
	}

	pub(crate) fn subscribe(&self) -> EventStream {
		let (tx, rx) = mpsc::unbounded_channel();
		let depth = Arc::new(AtomicUsize::new(0));
		self.subscribers.lock().unwrap().push(Subscriber {
			tx,
			depth: depth.clone(),
			above_high_water: false,
		});
		EventStream { rx, depth }
	}

	pub(crate) fn publish(&self, event: SwitchEvent) {
		let mut subscribers = self.subscribers.lock().unwrap();
		subscribers.retain_mut(|sub| {
			if sub.tx.send(event.clone()).is_err() {
				return false;
			}
			let depth = sub.depth.fetch_add(1, Ordering::Relaxed) + 1;
			if depth >= QUEUE_HIGH_WATER && !sub.above_high_water {
				sub.above_high_water = true;
				SwitchMetrics::incr(&self.metrics.queue_high_water);
				warn!(
					"{}: event subscriber has {} queued events",
					self.switch, depth
				);
			} else if depth < QUEUE_HIGH_WATER / 2 {
				sub.above_high_water = false;
			}
			true
		});
	}

	pub(crate) fn subscriber_count(&self) -> usize {
		self.subscribers.lock().unwrap().len()
	}
}

/// Consumer side of the event bus.
pub struct EventStream {
	rx: mpsc::UnboundedReceiver<SwitchEvent>,
	depth: Arc<AtomicUsize>,
}

impl EventStream {
	/// Next event, in receive order. `None` once the switch is closed and
	/// the queue is drained.
	pub async fn recv(&mut self) -> Option<SwitchEvent> {
		let event = self.rx.recv().await;
		if event.is_some() {
			self.depth.fetch_sub(1, Ordering::Relaxed);
		}
		event
	}

	/// Events currently queued.
	pub fn depth(&self) -> usize {
		self.depth.load(Ordering::Relaxed)
	}
}

impl futures::Stream for EventStream {
	type Item = SwitchEvent;

	fn poll_next(
		mut self: std::pin::Pin<&mut Self>,
		cx: &mut std::task::Context<'_>,
	) -> std::task::Poll<Option<SwitchEvent>> {
		let poll = self.rx.poll_recv(cx);
		if let std::task::Poll::Ready(Some(_)) = &poll {
			self.depth.fetch_sub(1, Ordering::Relaxed);
		}
		poll
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::metrics;

	#[tokio::test]
	async fn events_arrive_in_publish_order() {
		let hub = EventHub::new(
			"event-test".to_string(),
			metrics::for_switch("event-test"),
		);
		let mut stream = hub.subscribe();
		hub.publish(SwitchEvent::ChannelUp { is_primary: true });
		hub.publish(SwitchEvent::ChannelDown);
		assert!(matches!(
			stream.recv().await,
			Some(SwitchEvent::ChannelUp { is_primary: true })
		));
		assert!(matches!(stream.recv().await, Some(SwitchEvent::ChannelDown)));
		assert_eq!(stream.depth(), 0);
	}

	#[tokio::test]
	async fn dropped_subscribers_are_pruned() {
		let hub = EventHub::new(
			"event-test-2".to_string(),
			metrics::for_switch("event-test-2"),
		);
		let stream = hub.subscribe();
		assert_eq!(hub.subscriber_count(), 1);
		drop(stream);
		hub.publish(SwitchEvent::ChannelDown);
		assert_eq!(hub.subscriber_count(), 0);
	}

	#[tokio::test]
	async fn high_water_mark_is_counted_once_per_crossing() {
		let metrics = metrics::for_switch("event-test-3");
		let hub = EventHub::new("event-test-3".to_string(), metrics.clone());
		let mut stream = hub.subscribe();
		for _ in 0..QUEUE_HIGH_WATER + 10 {
			hub.publish(SwitchEvent::ChannelDown);
		}
		assert_eq!(metrics.snapshot().queue_high_water, 1);
		while stream.depth() > 0 {
			stream.recv().await;
		}
	}
}
