//! gNMI client: path-based Get/Set/Subscribe against the same targets the
//! P4Runtime sessions talk to.

use std::time::Duration;

use log::debug;
use tokio::sync::mpsc;
use tonic::transport::Channel;

use crate::error::{Error, Result};
use crate::gnmipath::GnmiPath;
use crate::proto::gnmi;
use crate::proto::gnmi::g_nmi_client::GNmiClient;
use crate::switch::{connect_channel, TlsOptions};

/// Subscription delivery mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GnmiSubscribeMode {
	/// One snapshot, then the target closes the subscription.
	Once,
	/// Samples on demand, via [`GnmiUpdates::poll`].
	Poll,
	/// Continuous updates until cancelled.
	Stream,
}

impl From<GnmiSubscribeMode> for gnmi::subscription_list::Mode {
	fn from(mode: GnmiSubscribeMode) -> Self {
		match mode {
			GnmiSubscribeMode::Once => gnmi::subscription_list::Mode::Once,
			GnmiSubscribeMode::Poll => gnmi::subscription_list::Mode::Poll,
			GnmiSubscribeMode::Stream => gnmi::subscription_list::Mode::Stream,
		}
	}
}

/// One subscribed path.
#[derive(Debug, Clone)]
pub struct GnmiSubscription {
	pub path: GnmiPath,
	pub mode: gnmi::SubscriptionMode,
	/// Sampling period for SAMPLE mode; zero lets the target decide.
	pub sample_interval: Duration,
}

impl From<GnmiPath> for GnmiSubscription {
	fn from(path: GnmiPath) -> Self {
		GnmiSubscription {
			path,
			mode: gnmi::SubscriptionMode::TargetDefined,
			sample_interval: Duration::ZERO,
		}
	}
}

impl GnmiSubscription {
	/// Sample the path on a fixed interval.
	pub fn sampled(path: GnmiPath, interval: Duration) -> GnmiSubscription {
		GnmiSubscription {
			path,
			mode: gnmi::SubscriptionMode::Sample,
			sample_interval: interval,
		}
	}

	/// Update only when the value changes.
	pub fn on_change(path: GnmiPath) -> GnmiSubscription {
		GnmiSubscription {
			path,
			mode: gnmi::SubscriptionMode::OnChange,
			sample_interval: Duration::ZERO,
		}
	}

	fn to_wire(&self) -> gnmi::Subscription {
		gnmi::Subscription {
			path: Some(self.path.path.clone()),
			mode: self.mode as i32,
			sample_interval: self.sample_interval.as_nanos() as u64,
			suppress_redundant: false,
			heartbeat_interval: 0,
		}
	}
}

/// A batched Set request: updates, replaces and deletes applied together.
#[derive(Debug, Clone, Default)]
pub struct GnmiSet {
	update: Vec<gnmi::Update>,
	replace: Vec<gnmi::Update>,
	delete: Vec<gnmi::Path>,
}

impl GnmiSet {
	pub fn new() -> GnmiSet {
		GnmiSet::default()
	}

	pub fn update(mut self, path: GnmiPath, value: gnmi::TypedValue) -> Self {
		self.update.push(gnmi::Update {
			path: Some(path.path),
			val: Some(value),
			duplicates: 0,
		});
		self
	}

	pub fn replace(mut self, path: GnmiPath, value: gnmi::TypedValue) -> Self {
		self.replace.push(gnmi::Update {
			path: Some(path.path),
			val: Some(value),
			duplicates: 0,
		});
		self
	}

	pub fn delete(mut self, path: GnmiPath) -> Self {
		self.delete.push(path.path);
		self
	}

	pub fn is_empty(&self) -> bool {
		self.update.is_empty() && self.replace.is_empty() && self.delete.is_empty()
	}

	fn into_request(self) -> gnmi::SetRequest {
		gnmi::SetRequest {
			prefix: None,
			delete: self.delete,
			replace: self.replace,
			update: self.update,
			extension: Vec::new(),
		}
	}
}

/// Shorthand constructors for `gnmi.TypedValue`.
pub fn typed_string(value: impl Into<String>) -> gnmi::TypedValue {
	gnmi::TypedValue {
		value: Some(gnmi::typed_value::Value::StringVal(value.into())),
	}
}

pub fn typed_uint(value: u64) -> gnmi::TypedValue {
	gnmi::TypedValue {
		value: Some(gnmi::typed_value::Value::UintVal(value)),
	}
}

pub fn typed_int(value: i64) -> gnmi::TypedValue {
	gnmi::TypedValue {
		value: Some(gnmi::typed_value::Value::IntVal(value)),
	}
}

pub fn typed_bool(value: bool) -> gnmi::TypedValue {
	gnmi::TypedValue {
		value: Some(gnmi::typed_value::Value::BoolVal(value)),
	}
}

pub fn typed_json(value: impl Into<Vec<u8>>) -> gnmi::TypedValue {
	gnmi::TypedValue {
		value: Some(gnmi::typed_value::Value::JsonVal(value.into())),
	}
}

async fn unary<T, F>(deadline: Duration, fut: F) -> Result<T>
where
	F: std::future::Future<
		Output = std::result::Result<tonic::Response<T>, tonic::Status>,
	>,
{
	match tokio::time::timeout(deadline, fut).await {
		Err(_) => Err(Error::DeadlineExceeded),
		Ok(Ok(response)) => Ok(response.into_inner()),
		Ok(Err(status)) => Err(Error::from_status(status)),
	}
}

/// Client for one gNMI target. Failures surface the gRPC status code.
pub struct GnmiClient {
	client: GNmiClient<Channel>,
	deadline: Duration,
}

impl GnmiClient {
	/// Connect to a target, `host:port` or a full URI.
	pub async fn connect(
		address: &str,
		tls: Option<&TlsOptions>,
	) -> Result<GnmiClient> {
		let deadline = Duration::from_secs(10);
		let channel = connect_channel(address, tls, deadline).await?;
		Ok(GnmiClient { client: GNmiClient::new(channel), deadline })
	}

	/// Override the per-RPC deadline; builder style.
	pub fn deadline(mut self, deadline: Duration) -> Self {
		self.deadline = deadline;
		self
	}

	pub async fn capabilities(&mut self) -> Result<gnmi::CapabilityResponse> {
		let deadline = self.deadline;
		unary(deadline, self.client.capabilities(gnmi::CapabilityRequest::default()))
			.await
	}

	/// One-shot Get over the given paths.
	pub async fn get(&mut self, paths: &[GnmiPath]) -> Result<Vec<gnmi::Notification>> {
		let request = gnmi::GetRequest {
			path: paths.iter().map(|p| p.path.clone()).collect(),
			..Default::default()
		};
		Ok(self.get_request(request).await?.notification)
	}

	/// Get with full control over the request.
	pub async fn get_request(
		&mut self,
		request: gnmi::GetRequest,
	) -> Result<gnmi::GetResponse> {
		let deadline = self.deadline;
		debug!("gNMI Get, {} path(s)", request.path.len());
		unary(deadline, self.client.get(request)).await
	}

	/// Apply a batched Set.
	pub async fn set(&mut self, set: GnmiSet) -> Result<gnmi::SetResponse> {
		let deadline = self.deadline;
		let request = set.into_request();
		debug!(
			"gNMI Set, {} update(s), {} replace(s), {} delete(s)",
			request.update.len(),
			request.replace.len(),
			request.delete.len()
		);
		unary(deadline, self.client.set(request)).await
	}

	/// Open a subscription. The returned handle is a lazy sequence of
	/// responses; dropping it cancels the RPC. Streaming subscriptions have
	/// no deadline.
	pub async fn subscribe(
		&mut self,
		mode: GnmiSubscribeMode,
		subscriptions: Vec<GnmiSubscription>,
	) -> Result<GnmiUpdates> {
		let (tx, mut rx) = mpsc::channel::<gnmi::SubscribeRequest>(16);
		let outbound = async_stream::stream! {
			while let Some(msg) = rx.recv().await {
				yield msg;
			}
		};
		let list = gnmi::SubscriptionList {
			subscription: subscriptions.iter().map(|s| s.to_wire()).collect(),
			mode: gnmi::subscription_list::Mode::from(mode) as i32,
			..Default::default()
		};
		tx.send(gnmi::SubscribeRequest {
			extension: Vec::new(),
			request: Some(gnmi::subscribe_request::Request::Subscribe(list)),
		})
		.await
		.map_err(|_| Error::Transport("subscribe stream closed".to_string()))?;
		let response = tokio::time::timeout(
			self.deadline,
			self.client.subscribe(tonic::Request::new(outbound)),
		)
		.await
		.map_err(|_| Error::DeadlineExceeded)?
		.map_err(Error::from_status)?;
		Ok(GnmiUpdates { stream: response.into_inner(), poll_tx: tx })
	}
}

/// Live subscription. Ends when the target closes it (ONCE mode) or when
/// dropped.
pub struct GnmiUpdates {
	stream: tonic::codec::Streaming<gnmi::SubscribeResponse>,
	poll_tx: mpsc::Sender<gnmi::SubscribeRequest>,
}

impl GnmiUpdates {
	/// Next response, in receive order. `None` when the subscription ends.
	pub async fn recv(&mut self) -> Result<Option<gnmi::SubscribeResponse>> {
		self.stream.message().await.map_err(Error::from_status)
	}

	/// Next update notification, skipping sync markers. `None` when the
	/// subscription ends.
	pub async fn recv_update(&mut self) -> Result<Option<gnmi::Notification>> {
		loop {
			match self.recv().await? {
				Some(response) => match response.response {
					Some(gnmi::subscribe_response::Response::Update(n)) => {
						return Ok(Some(n));
					}
					_ => continue,
				},
				None => return Ok(None),
			}
		}
	}

	/// Trigger a sample in POLL mode.
	pub async fn poll(&mut self) -> Result<()> {
		self.poll_tx
			.send(gnmi::SubscribeRequest {
				extension: Vec::new(),
				request: Some(gnmi::subscribe_request::Request::Poll(gnmi::Poll {})),
			})
			.await
			.map_err(|_| Error::Transport("subscription closed".to_string()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn set_request_batches_operations() {
		let set = GnmiSet::new()
			.update(
				GnmiPath::parse("system/config/hostname").unwrap(),
				typed_string("leaf1"),
			)
			.replace(
				GnmiPath::parse("interfaces/interface[name=eth1]/config/mtu")
					.unwrap(),
				typed_uint(9000),
			)
			.delete(GnmiPath::parse("system/config/motd-banner").unwrap());
		assert!(!set.is_empty());
		let request = set.into_request();
		assert_eq!(request.update.len(), 1);
		assert_eq!(request.replace.len(), 1);
		assert_eq!(request.delete.len(), 1);
	}

	#[test]
	fn subscription_wire_form() {
		let sub = GnmiSubscription::sampled(
			GnmiPath::parse("interfaces/interface[name=eth1]/state/counters")
				.unwrap(),
			Duration::from_secs(5),
		);
		let wire = sub.to_wire();
		assert_eq!(wire.mode, gnmi::SubscriptionMode::Sample as i32);
		assert_eq!(wire.sample_interval, 5_000_000_000);
		assert!(wire.path.is_some());
	}
}
