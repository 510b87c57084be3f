//! Per-target switch session.
//!
//! One [`Switch`] owns one gRPC channel and one StreamChannel. The session
//! task ([`Switch::run`]) drives the connection state machine:
//!
//! ```text
//!     INIT ──connect──▶ CONNECTING ──stream ok──▶ ARBITRATING ─┐
//!      ▲                    │                         │        │
//!      │                    │fail                     │arb ok  │
//!      │                    ▼                         ▼        │
//!      └──── BACKOFF ◀─── DEGRADED ◀─── UP ─────◀─────┘        │
//!                           ▲            │  stream break        │
//!                           │            └──────────────────────┘
//!      CLOSING ──drain─▶ CLOSED     (terminal)
//! ```
//!
//! Arbitration repeats from scratch on every new stream. The election id
//! used in outgoing arbitration updates never decreases.

use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::{Arc, Mutex, RwLock};
use std::time::Duration;

use log::{debug, error, info, warn};
use prost::Message;
use serde::{Deserialize, Serialize};
use tokio::sync::{mpsc, watch};
use tonic::transport::{Certificate, Channel, ClientTlsConfig, Endpoint, Identity};

use crate::backoff::{Backoff, BackoffPolicy};
use crate::entity::{
	self, DigestList, DigestListAck, Entity, IdleTimeoutNotification, PacketIn,
	PacketOut, UpdateType,
};
use crate::error::{Error, Result};
use crate::event::{EventHub, EventStream, SwitchEvent};
use crate::metrics::{self, SwitchMetrics};
use crate::pipeline::{ConfigAction, ForwardingPipeline};
use crate::proto::p4runtime;
use crate::proto::p4runtime::p4_runtime_client::P4RuntimeClient;
use crate::proto::rpc;
use crate::schema::P4Schema;

/// Session lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SwitchState {
	/// Configured, session not started.
	Init = 0,
	/// Opening the gRPC channel.
	Connecting = 1,
	/// Stream open, waiting for the arbitration response.
	Arbitrating = 2,
	/// Stream established, arbitration completed.
	Up = 3,
	/// Stream broken, reconnect pending.
	Degraded = 4,
	/// Sleeping before the next connect attempt.
	Backoff = 5,
	/// Shutdown requested, draining.
	Closing = 6,
	/// Terminal.
	Closed = 7,
}

impl SwitchState {
	fn from_u8(value: u8) -> SwitchState {
		match value {
			0 => SwitchState::Init,
			1 => SwitchState::Connecting,
			2 => SwitchState::Arbitrating,
			3 => SwitchState::Up,
			4 => SwitchState::Degraded,
			5 => SwitchState::Backoff,
			6 => SwitchState::Closing,
			_ => SwitchState::Closed,
		}
	}
}

impl std::fmt::Display for SwitchState {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		let s = match self {
			SwitchState::Init => "init",
			SwitchState::Connecting => "connecting",
			SwitchState::Arbitrating => "arbitrating",
			SwitchState::Up => "up",
			SwitchState::Degraded => "degraded",
			SwitchState::Backoff => "backoff",
			SwitchState::Closing => "closing",
			SwitchState::Closed => "closed",
		};
		write!(f, "{}", s)
	}
}

/// TLS material for one target.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TlsOptions {
	/// PEM file with the CA certificate used to verify the target.
	pub ca_cert: Option<std::path::PathBuf>,
	/// PEM file with the client certificate (mutual TLS).
	pub client_cert: Option<std::path::PathBuf>,
	/// PEM file with the client private key (mutual TLS).
	pub client_key: Option<std::path::PathBuf>,
	/// Expected server name, when it differs from the target address.
	pub domain_name: Option<String>,
}

/// Per-switch configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwitchOptions {
	/// gRPC target, `host:port` or a full `http(s)://` URI.
	pub address: String,
	pub device_id: u64,
	/// Initial election id; 0 is reserved for observers and never wins
	/// mastership.
	pub election_id: u128,
	/// Role name; empty selects the default (full pipeline access) role.
	pub role_name: String,
	/// Opaque role configuration forwarded with arbitration, when the
	/// target defines role semantics.
	#[serde(skip)]
	pub role_config: Option<::prost_types::Any>,
	/// On ALREADY_EXISTS, advance the local election id to observed + 1 for
	/// the next arbitration attempt.
	pub auto_election: bool,
	/// Acknowledge each digest list as soon as it is decoded. When false,
	/// the application acks via [`Switch::ack_digest`].
	pub auto_ack_digests: bool,
	/// Deadline applied to every unary RPC.
	pub rpc_deadline: Duration,
	pub backoff: BackoffPolicy,
	pub tls: Option<TlsOptions>,
	/// Pipeline to install via [`Switch::set_pipeline`]; also the source of
	/// the schema used to encode and decode entities.
	#[serde(skip)]
	pub pipeline: Option<ForwardingPipeline>,
}

impl Default for SwitchOptions {
	fn default() -> Self {
		SwitchOptions {
			address: "127.0.0.1:9559".to_string(),
			device_id: 1,
			election_id: 1,
			role_name: String::new(),
			role_config: None,
			auto_election: true,
			auto_ack_digests: true,
			rpc_deadline: Duration::from_secs(10),
			backoff: BackoffPolicy::default(),
			tls: None,
			pipeline: None,
		}
	}
}

pub(crate) fn election_to_wire(id: u128) -> p4runtime::Uint128 {
	p4runtime::Uint128 { high: (id >> 64) as u64, low: id as u64 }
}

pub(crate) fn election_from_wire(msg: &p4runtime::Uint128) -> u128 {
	((msg.high as u128) << 64) | msg.low as u128
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ArbitrationOutcome {
	/// status OK: this client holds mastership.
	Primary,
	/// status ALREADY_EXISTS: another client holds a higher election id.
	Backup,
	/// status NOT_FOUND: the target does not know the device id.
	DeviceUnknown,
	/// anything else: treat like a broken stream and reconnect.
	Retry,
}

fn arbitration_outcome(code: i32) -> ArbitrationOutcome {
	match rpc::Code::from_i32(code) {
		Some(rpc::Code::Ok) => ArbitrationOutcome::Primary,
		Some(rpc::Code::AlreadyExists) => ArbitrationOutcome::Backup,
		Some(rpc::Code::NotFound) => ArbitrationOutcome::DeviceUnknown,
		_ => ArbitrationOutcome::Retry,
	}
}

fn role_str(primary: bool) -> &'static str {
	if primary {
		"primary"
	} else {
		"backup"
	}
}

struct SwitchInner {
	name: String,
	options: SwitchOptions,
	state: AtomicU8,
	is_primary: AtomicBool,
	election_id: Mutex<u128>,
	last_error: Mutex<Option<String>>,
	api_version: Mutex<Option<String>>,
	client: Mutex<Option<P4RuntimeClient<Channel>>>,
	stream_tx: Mutex<Option<mpsc::Sender<p4runtime::StreamMessageRequest>>>,
	schema: RwLock<Option<Arc<P4Schema>>>,
	events: EventHub,
	metrics: Arc<SwitchMetrics>,
	/// Serializes Write RPCs so that submission order is wire order.
	write_lock: tokio::sync::Mutex<()>,
	shutdown: watch::Sender<bool>,
}

/// Handle to one switch. Cheap to clone; all clones share the session.
#[derive(Clone)]
pub struct Switch {
	inner: Arc<SwitchInner>,
}

impl std::fmt::Debug for Switch {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		f.debug_struct("Switch")
			.field("name", &self.inner.name)
			.field("address", &self.inner.options.address)
			.field("state", &self.state())
			.finish()
	}
}

impl Switch {
	pub fn new(name: impl Into<String>, options: SwitchOptions) -> Switch {
		let name = name.into();
		let metrics = metrics::for_switch(&name);
		let schema = options
			.pipeline
			.as_ref()
			.and_then(|pipeline| match pipeline.schema() {
				Ok(schema) => Some(Arc::new(schema)),
				Err(err) => {
					warn!("{}: configured pipeline is invalid: {}", name, err);
					None
				}
			});
		let (shutdown, _) = watch::channel(false);
		Switch {
			inner: Arc::new(SwitchInner {
				events: EventHub::new(name.clone(), metrics.clone()),
				name,
				election_id: Mutex::new(options.election_id),
				options,
				state: AtomicU8::new(SwitchState::Init as u8),
				is_primary: AtomicBool::new(false),
				last_error: Mutex::new(None),
				api_version: Mutex::new(None),
				client: Mutex::new(None),
				stream_tx: Mutex::new(None),
				schema: RwLock::new(schema),
				metrics,
				write_lock: tokio::sync::Mutex::new(()),
				shutdown,
			}),
		}
	}

	pub fn name(&self) -> &str {
		&self.inner.name
	}

	pub fn options(&self) -> &SwitchOptions {
		&self.inner.options
	}

	pub fn state(&self) -> SwitchState {
		SwitchState::from_u8(self.inner.state.load(Ordering::SeqCst))
	}

	/// True while this client holds mastership for its role.
	pub fn is_primary(&self) -> bool {
		self.inner.is_primary.load(Ordering::SeqCst)
	}

	/// The election id the session currently arbitrates with.
	pub fn election_id(&self) -> u128 {
		*self.inner.election_id.lock().unwrap()
	}

	pub fn last_error(&self) -> Option<String> {
		self.inner.last_error.lock().unwrap().clone()
	}

	/// P4Runtime API version reported by the target, once
	/// [`Switch::capabilities`] has been called.
	pub fn api_version(&self) -> Option<String> {
		self.inner.api_version.lock().unwrap().clone()
	}

	/// The active pipeline schema, if one is configured or installed.
	pub fn schema(&self) -> Option<Arc<P4Schema>> {
		self.inner.schema.read().unwrap().clone()
	}

	pub fn metrics(&self) -> Arc<SwitchMetrics> {
		self.inner.metrics.clone()
	}

	/// Subscribe to session events; every subscriber sees every event in
	/// receive order.
	pub fn subscribe(&self) -> EventStream {
		self.inner.events.subscribe()
	}

	/// Request shutdown. The session task drains to CLOSED; pending RPCs
	/// report Cancelled.
	pub fn shutdown(&self) {
		if self.state() == SwitchState::Init {
			self.set_state(SwitchState::Closed);
		}
		let _ = self.inner.shutdown.send(true);
	}

	fn set_state(&self, state: SwitchState) {
		let prev = self.inner.state.swap(state as u8, Ordering::SeqCst);
		if prev != state as u8 {
			debug!(
				"{}: {} -> {}",
				self.inner.name,
				SwitchState::from_u8(prev),
				state
			);
		}
	}

	fn record_error(&self, err: &Error) {
		*self.inner.last_error.lock().unwrap() = Some(err.to_string());
	}

	fn require_schema(&self) -> Result<Arc<P4Schema>> {
		self.schema().ok_or_else(|| {
			Error::SchemaUnknown(format!(
				"switch {:?} has no pipeline schema",
				self.inner.name
			))
		})
	}

	fn client(&self) -> Result<P4RuntimeClient<Channel>> {
		self.inner.client.lock().unwrap().clone().ok_or_else(|| {
			Error::Transport(format!(
				"switch {:?} is not connected",
				self.inner.name
			))
		})
	}

	/// Run the session until shutdown or a fatal arbitration failure. The
	/// stream is re-established with exponential backoff on every break;
	/// arbitration repeats from scratch each time.
	pub async fn run(&self) -> Result<()> {
		let inner = &self.inner;
		let mut shutdown = inner.shutdown.subscribe();
		let mut backoff = Backoff::new(inner.options.backoff.clone());
		info!("{}: session starting for {}", inner.name, inner.options.address);
		let result = loop {
			if *shutdown.borrow() {
				break Ok(());
			}
			let outcome = tokio::select! {
				_ = shutdown.changed() => Err(Error::Cancelled),
				outcome = self.serve_stream(&mut backoff) => outcome,
			};
			match outcome {
				Err(Error::Cancelled) => break Ok(()),
				Err(err @ Error::Fatal(_)) => {
					error!("{}: {}", inner.name, err);
					self.record_error(&err);
					break Err(err);
				}
				other => {
					if let Err(err) = &other {
						warn!("{}: {}", inner.name, err);
						self.record_error(err);
					}
					if *shutdown.borrow() {
						break Ok(());
					}
					self.set_state(SwitchState::Degraded);
					SwitchMetrics::incr(&inner.metrics.reconnects);
					let delay = backoff.next_delay();
					self.set_state(SwitchState::Backoff);
					debug!("{}: reconnecting in {:?}", inner.name, delay);
					tokio::select! {
						_ = shutdown.changed() => break Ok(()),
						_ = tokio::time::sleep(delay) => {}
					}
				}
			}
		};
		let was_up = self.state() == SwitchState::Up;
		self.set_state(SwitchState::Closing);
		*inner.client.lock().unwrap() = None;
		*inner.stream_tx.lock().unwrap() = None;
		inner.is_primary.store(false, Ordering::SeqCst);
		if was_up {
			// shutdown interrupted a live stream
			inner.events.publish(SwitchEvent::ChannelDown);
		}
		self.set_state(SwitchState::Closed);
		info!("{}: session closed", inner.name);
		result
	}

	/// One connect/arbitrate/pump cycle. Ok(()) means the stream ended and
	/// the caller should reconnect.
	async fn serve_stream(&self, backoff: &mut Backoff) -> Result<()> {
		let inner = &self.inner;
		let options = &inner.options;

		self.set_state(SwitchState::Connecting);
		let channel = connect_channel(
			&options.address,
			options.tls.as_ref(),
			options.rpc_deadline,
		)
		.await?;
		let mut client = P4RuntimeClient::new(channel);
		*inner.client.lock().unwrap() = Some(client.clone());

		// the stream carries only arbitration, packet I/O, digests and
		// notifications; unary RPCs go on separate calls
		let (tx, mut rx) = mpsc::channel::<p4runtime::StreamMessageRequest>(64);
		let outbound = async_stream::stream! {
			while let Some(msg) = rx.recv().await {
				yield msg;
			}
		};

		self.set_state(SwitchState::Arbitrating);
		let election_id = *inner.election_id.lock().unwrap();
		let arbitration = p4runtime::StreamMessageRequest {
			update: Some(p4runtime::stream_message_request::Update::Arbitration(
				p4runtime::MasterArbitrationUpdate {
					device_id: options.device_id,
					role: role_message(&options.role_name, options.role_config.clone()),
					election_id: Some(election_to_wire(election_id)),
					status: None,
				},
			)),
		};
		tx.send(arbitration).await.map_err(|_| {
			Error::Transport("stream closed before arbitration".to_string())
		})?;
		let responses = client
			.stream_channel(tonic::Request::new(outbound))
			.await
			.map_err(|status| Error::Transport(status.to_string()))?;
		let mut responses = responses.into_inner();

		// the first arbitration response decides our role
		let first = tokio::time::timeout(options.rpc_deadline, responses.message())
			.await
			.map_err(|_| {
				Error::Transport("no arbitration response before deadline".to_string())
			})?
			.map_err(|status| Error::Transport(status.to_string()))?
			.ok_or_else(|| {
				Error::Transport("stream closed during arbitration".to_string())
			})?;
		let update = match first.update {
			Some(p4runtime::stream_message_response::Update::Arbitration(u)) => u,
			_ => {
				return Err(Error::Transport(
					"expected an arbitration response first".to_string(),
				));
			}
		};
		let primary = self.apply_arbitration(&update, true)?;

		*inner.stream_tx.lock().unwrap() = Some(tx.clone());
		self.set_state(SwitchState::Up);
		backoff.reset();
		SwitchMetrics::incr(&inner.metrics.connects);
		info!(
			"{}: channel up as {} (election id {})",
			inner.name,
			role_str(primary),
			self.election_id()
		);
		inner.events.publish(SwitchEvent::ChannelUp { is_primary: primary });

		let result = self.pump_stream(&mut responses, &tx).await;

		self.set_state(SwitchState::Degraded);
		*inner.stream_tx.lock().unwrap() = None;
		inner.is_primary.store(false, Ordering::SeqCst);
		info!("{}: channel down", inner.name);
		inner.events.publish(SwitchEvent::ChannelDown);
		result
	}

	/// Deliver stream messages until the stream ends or breaks.
	async fn pump_stream(
		&self,
		responses: &mut tonic::codec::Streaming<p4runtime::StreamMessageResponse>,
		tx: &mpsc::Sender<p4runtime::StreamMessageRequest>,
	) -> Result<()> {
		loop {
			match responses.message().await {
				Ok(Some(msg)) => self.handle_stream_message(msg, tx).await?,
				Ok(None) => return Ok(()),
				Err(status) => {
					return Err(Error::Transport(status.to_string()));
				}
			}
		}
	}

	/// Apply an arbitration update: role flag first, then events. Returns
	/// whether we are primary.
	fn apply_arbitration(
		&self,
		update: &p4runtime::MasterArbitrationUpdate,
		initial: bool,
	) -> Result<bool> {
		let inner = &self.inner;
		let code = update
			.status
			.as_ref()
			.map(|s| s.code)
			.unwrap_or(rpc::Code::Ok as i32);
		let primary = match arbitration_outcome(code) {
			ArbitrationOutcome::Primary => true,
			ArbitrationOutcome::Backup => {
				if inner.options.auto_election {
					if let Some(observed) =
						update.election_id.as_ref().map(election_from_wire)
					{
						// monotone: only ever advance, and only for the
						// next arbitration attempt
						let mut ours = inner.election_id.lock().unwrap();
						if observed >= *ours {
							*ours = observed.saturating_add(1);
							debug!(
								"{}: advancing election id to {}",
								inner.name, *ours
							);
						}
					}
				}
				false
			}
			ArbitrationOutcome::DeviceUnknown => {
				return Err(Error::Fatal(format!(
					"device {} unknown to target",
					inner.options.device_id
				)));
			}
			ArbitrationOutcome::Retry => {
				return Err(Error::Transport(format!(
					"arbitration failed with code {}",
					code
				)));
			}
		};
		// the role flag must be visible before any Write issued after this
		// point observes the event
		let was_primary = inner.is_primary.swap(primary, Ordering::SeqCst);
		if !initial && was_primary != primary {
			info!("{}: role changed to {}", inner.name, role_str(primary));
			inner
				.events
				.publish(SwitchEvent::RoleChanged { is_primary: primary });
		}
		Ok(primary)
	}

	async fn handle_stream_message(
		&self,
		msg: p4runtime::StreamMessageResponse,
		tx: &mpsc::Sender<p4runtime::StreamMessageRequest>,
	) -> Result<()> {
		use p4runtime::stream_message_response::Update;
		let inner = &self.inner;
		SwitchMetrics::incr(&inner.metrics.stream_messages);
		let update = match msg.update {
			Some(update) => update,
			None => return Ok(()),
		};
		match update {
			Update::Arbitration(update) => {
				debug!(
					"{}: arbitration update ({} bytes)",
					inner.name,
					update.encoded_len()
				);
				self.apply_arbitration(&update, false)?;
			}
			Update::Packet(packet) => {
				debug!(
					"{}: packet-in ({} bytes)",
					inner.name,
					packet.encoded_len()
				);
				let event = match self.schema() {
					Some(schema) => match PacketIn::from_wire(&schema, &packet) {
						Ok(decoded) => decoded,
						Err(err) => {
							warn!("{}: bad packet-in metadata: {}", inner.name, err);
							SwitchMetrics::incr(&inner.metrics.decode_failures);
							PacketIn {
								payload: packet.payload,
								metadata: Vec::new(),
							}
						}
					},
					None => PacketIn {
						payload: packet.payload,
						metadata: Vec::new(),
					},
				};
				SwitchMetrics::incr(&inner.metrics.packet_ins);
				inner.events.publish(SwitchEvent::PacketIn(event));
			}
			Update::Digest(digest) => {
				debug!(
					"{}: digest list #{} ({} items)",
					inner.name,
					digest.list_id,
					digest.data.len()
				);
				let list = match self.schema() {
					Some(schema) => DigestList::from_wire(&schema, &digest),
					None => DigestList {
						digest: String::new(),
						digest_id: digest.digest_id,
						list_id: digest.list_id,
						timestamp: digest.timestamp,
						data: digest.data,
					},
				};
				if inner.options.auto_ack_digests {
					let ack = p4runtime::StreamMessageRequest {
						update: Some(
							p4runtime::stream_message_request::Update::DigestAck(
								list.ack().to_wire(),
							),
						),
					};
					if tx.send(ack).await.is_err() {
						warn!("{}: stream closed before digest ack", inner.name);
					}
				}
				SwitchMetrics::incr(&inner.metrics.digests);
				inner.events.publish(SwitchEvent::Digest(list));
			}
			Update::IdleTimeoutNotification(notification) => {
				match self.schema() {
					Some(schema) => {
						match IdleTimeoutNotification::from_wire(
							&schema,
							&notification,
						) {
							Ok(decoded) => {
								inner
									.events
									.publish(SwitchEvent::IdleTimeout(decoded));
							}
							Err(err) => {
								warn!(
									"{}: bad idle timeout notification: {}",
									inner.name, err
								);
								SwitchMetrics::incr(&inner.metrics.decode_failures);
							}
						}
					}
					None => {
						warn!(
							"{}: idle timeout notification without schema",
							inner.name
						);
					}
				}
			}
			Update::Error(stream_error) => {
				// target-initiated error for a message we sent; the session
				// itself stays up
				error!(
					"{}: target reported stream error {}: {}",
					inner.name, stream_error.canonical_code, stream_error.message
				);
				inner.events.publish(SwitchEvent::StreamError {
					canonical_code: stream_error.canonical_code,
					message: stream_error.message,
				});
			}
			Update::Other(_) => {
				debug!("{}: ignoring unknown stream message", inner.name);
			}
		}
		Ok(())
	}

	/// Await `fut` under the RPC deadline and the shutdown signal. The
	/// inner result carries the raw gRPC status for caller-specific mapping.
	async fn guarded<T, F>(&self, fut: F) -> Result<std::result::Result<T, tonic::Status>>
	where
		F: std::future::Future<
			Output = std::result::Result<tonic::Response<T>, tonic::Status>,
		>,
	{
		let mut shutdown = self.inner.shutdown.subscribe();
		if *shutdown.borrow() {
			return Err(Error::Cancelled);
		}
		tokio::select! {
			_ = shutdown.changed() => Err(Error::Cancelled),
			outcome = tokio::time::timeout(self.inner.options.rpc_deadline, fut) => {
				match outcome {
					Err(_) => Err(Error::DeadlineExceeded),
					Ok(Ok(response)) => Ok(Ok(response.into_inner())),
					Ok(Err(status)) => Ok(Err(status)),
				}
			}
		}
	}

	/// Submit a Write batch. Fails fast with [`Error::NotPrimary`] while
	/// this client is backup; batch failures carry the per-update error
	/// list from the target.
	pub async fn write(&self, updates: Vec<p4runtime::Update>) -> Result<()> {
		self.write_with_atomicity(
			updates,
			p4runtime::write_request::Atomicity::ContinueOnError,
		)
		.await
	}

	pub async fn write_with_atomicity(
		&self,
		updates: Vec<p4runtime::Update>,
		atomicity: p4runtime::write_request::Atomicity,
	) -> Result<()> {
		if updates.is_empty() {
			return Ok(());
		}
		let inner = &self.inner;
		// writes on one switch reach the wire in submission order
		let _ordered = inner.write_lock.lock().await;
		if !self.is_primary() {
			return Err(Error::NotPrimary);
		}
		let mut client = self.client()?;
		let request = p4runtime::WriteRequest {
			device_id: inner.options.device_id,
			role: inner.options.role_name.clone(),
			election_id: Some(election_to_wire(self.election_id())),
			updates,
			atomicity: atomicity as i32,
			..Default::default()
		};
		match self.guarded(async move { client.write(request).await }).await? {
			Ok(_) => {
				SwitchMetrics::incr(&inner.metrics.writes);
				Ok(())
			}
			Err(status) => Err(Error::from_write_status(status)),
		}
	}

	/// Insert entities, encoded against the active schema.
	pub async fn insert(
		&self,
		entities: impl IntoIterator<Item = Entity>,
	) -> Result<()> {
		self.write_entities(UpdateType::Insert, entities).await
	}

	/// Modify entities, encoded against the active schema.
	pub async fn modify(
		&self,
		entities: impl IntoIterator<Item = Entity>,
	) -> Result<()> {
		self.write_entities(UpdateType::Modify, entities).await
	}

	/// Delete entities, encoded against the active schema.
	pub async fn delete(
		&self,
		entities: impl IntoIterator<Item = Entity>,
	) -> Result<()> {
		self.write_entities(UpdateType::Delete, entities).await
	}

	async fn write_entities(
		&self,
		update_type: UpdateType,
		entities: impl IntoIterator<Item = Entity>,
	) -> Result<()> {
		let schema = self.require_schema()?;
		let entities: Vec<Entity> = entities.into_iter().collect();
		let updates = entity::encode_updates(update_type, &entities, &schema)?;
		self.write(updates).await
	}

	/// Read raw entities matching the given filters. The returned stream is
	/// lazy; dropping it cancels the RPC.
	pub async fn read_wire(
		&self,
		entities: Vec<p4runtime::Entity>,
	) -> Result<impl futures::Stream<Item = Result<p4runtime::Entity>> + Send + Unpin>
	{
		let inner = &self.inner;
		let mut client = self.client()?;
		let request = p4runtime::ReadRequest {
			device_id: inner.options.device_id,
			entities,
		};
		let streaming = match self
			.guarded(async move { client.read(request).await })
			.await?
		{
			Ok(streaming) => streaming,
			Err(status) => return Err(Error::from_status(status)),
		};
		SwitchMetrics::incr(&inner.metrics.reads);
		let stream = async_stream::try_stream! {
			let mut streaming = streaming;
			loop {
				let response = streaming
					.message()
					.await
					.map_err(Error::from_status)?;
				let response = match response {
					Some(response) => response,
					None => break,
				};
				for entity in response.entities {
					yield entity;
				}
			}
		};
		Ok(Box::pin(stream))
	}

	/// Read decoded entities matching the given filters.
	pub async fn read(
		&self,
		filters: impl IntoIterator<Item = Entity>,
	) -> Result<impl futures::Stream<Item = Result<Entity>> + Send + Unpin> {
		let schema = self.require_schema()?;
		let wire = filters
			.into_iter()
			.map(|entity| entity.to_wire(&schema))
			.collect::<Result<Vec<_>>>()?;
		let raw = self.read_wire(wire).await?;
		let stream = async_stream::try_stream! {
			let mut raw = raw;
			loop {
				let entity = futures::StreamExt::next(&mut raw).await;
				let entity = match entity {
					Some(entity) => entity?,
					None => break,
				};
				let decoded = Entity::from_wire(&schema, &entity)?;
				yield decoded;
			}
		};
		Ok(Box::pin(stream))
	}

	/// Install the configured pipeline with the given mode. Committing
	/// replaces the active schema; all previously cached schema-derived
	/// state becomes invalid.
	pub async fn set_pipeline(&self, action: ConfigAction) -> Result<()> {
		let pipeline = self.inner.options.pipeline.clone().ok_or_else(|| {
			Error::InvalidValue(format!(
				"switch {:?} has no pipeline configured",
				self.inner.name
			))
		})?;
		self.install_pipeline(&pipeline, action).await
	}

	/// Install an explicit pipeline with the given mode.
	pub async fn install_pipeline(
		&self,
		pipeline: &ForwardingPipeline,
		action: ConfigAction,
	) -> Result<()> {
		let inner = &self.inner;
		if !self.is_primary() {
			return Err(Error::NotPrimary);
		}
		// reject malformed P4Info before going to the target
		let schema = pipeline.schema()?;
		let mut client = self.client()?;
		let request = p4runtime::SetForwardingPipelineConfigRequest {
			device_id: inner.options.device_id,
			role: inner.options.role_name.clone(),
			election_id: Some(election_to_wire(self.election_id())),
			action: p4runtime::set_forwarding_pipeline_config_request::Action::from(
				action,
			) as i32,
			config: match action {
				ConfigAction::Commit => None,
				_ => Some(pipeline.to_wire()),
			},
			..Default::default()
		};
		match self
			.guarded(async move {
				client.set_forwarding_pipeline_config(request).await
			})
			.await?
		{
			Ok(_) => {
				if matches!(
					action,
					ConfigAction::VerifyAndCommit | ConfigAction::Commit
				) {
					*inner.schema.write().unwrap() = Some(Arc::new(schema));
					info!(
						"{}: pipeline committed (cookie {:?})",
						inner.name, pipeline.cookie
					);
				}
				Ok(())
			}
			Err(status) => Err(Error::from_status(status)),
		}
	}

	/// Fetch the pipeline currently installed on the target.
	pub async fn get_pipeline(
		&self,
		response_type: p4runtime::get_forwarding_pipeline_config_request::ResponseType,
	) -> Result<ForwardingPipeline> {
		let inner = &self.inner;
		let mut client = self.client()?;
		let request = p4runtime::GetForwardingPipelineConfigRequest {
			device_id: inner.options.device_id,
			response_type: response_type as i32,
		};
		match self
			.guarded(async move {
				client.get_forwarding_pipeline_config(request).await
			})
			.await?
		{
			Ok(response) => Ok(ForwardingPipeline::from_wire(
				&response.config.unwrap_or_default(),
			)),
			Err(status) => Err(Error::from_status(status)),
		}
	}

	/// Query the target's P4Runtime API version.
	pub async fn capabilities(&self) -> Result<String> {
		let mut client = self.client()?;
		match self
			.guarded(async move {
				client.capabilities(p4runtime::CapabilitiesRequest {}).await
			})
			.await?
		{
			Ok(response) => {
				let version = response.p4runtime_api_version;
				*self.inner.api_version.lock().unwrap() = Some(version.clone());
				Ok(version)
			}
			Err(status) => Err(Error::from_status(status)),
		}
	}

	/// Inject a packet through the session stream.
	pub async fn send_packet(&self, packet: PacketOut) -> Result<()> {
		let schema = self.require_schema()?;
		let msg = p4runtime::StreamMessageRequest {
			update: Some(p4runtime::stream_message_request::Update::Packet(
				packet.to_wire(&schema)?,
			)),
		};
		self.send_stream_message(msg).await
	}

	/// Acknowledge a digest list explicitly (when auto-ack is off).
	pub async fn ack_digest(&self, ack: DigestListAck) -> Result<()> {
		let msg = p4runtime::StreamMessageRequest {
			update: Some(p4runtime::stream_message_request::Update::DigestAck(
				ack.to_wire(),
			)),
		};
		self.send_stream_message(msg).await
	}

	async fn send_stream_message(
		&self,
		msg: p4runtime::StreamMessageRequest,
	) -> Result<()> {
		let tx = self
			.inner
			.stream_tx
			.lock()
			.unwrap()
			.clone()
			.ok_or_else(|| {
				Error::Transport("stream not established".to_string())
			})?;
		tx.send(msg)
			.await
			.map_err(|_| Error::Transport("stream closed".to_string()))
	}
}

fn role_message(
	role_name: &str,
	config: Option<::prost_types::Any>,
) -> Option<p4runtime::Role> {
	if role_name.is_empty() && config.is_none() {
		return None;
	}
	let mut role = p4runtime::Role::default();
	role.name = role_name.to_string();
	role.config = config;
	Some(role)
}

/// Build and connect a gRPC channel, shared with the gNMI client.
pub(crate) async fn connect_channel(
	address: &str,
	tls: Option<&TlsOptions>,
	connect_timeout: Duration,
) -> Result<Channel> {
	let uri = if address.contains("://") {
		address.to_string()
	} else if tls.is_some() {
		format!("https://{}", address)
	} else {
		format!("http://{}", address)
	};
	let mut endpoint = Endpoint::from_shared(uri)
		.map_err(|err| Error::InvalidValue(format!("bad target address: {}", err)))?
		.connect_timeout(connect_timeout)
		.tcp_nodelay(true);
	if let Some(tls) = tls {
		let mut config = ClientTlsConfig::new();
		if let Some(path) = &tls.ca_cert {
			let pem = std::fs::read(path).map_err(|err| {
				Error::InvalidValue(format!(
					"could not read CA cert {:?}: {}",
					path, err
				))
			})?;
			config = config.ca_certificate(Certificate::from_pem(pem));
		}
		if let (Some(cert), Some(key)) = (&tls.client_cert, &tls.client_key) {
			let cert = std::fs::read(cert).map_err(|err| {
				Error::InvalidValue(format!("could not read client cert: {}", err))
			})?;
			let key = std::fs::read(key).map_err(|err| {
				Error::InvalidValue(format!("could not read client key: {}", err))
			})?;
			config = config.identity(Identity::from_pem(cert, key));
		}
		if let Some(domain) = &tls.domain_name {
			config = config.domain_name(domain.clone());
		}
		endpoint = endpoint.tls_config(config).map_err(|err| {
			Error::InvalidValue(format!("bad TLS config: {}", err))
		})?;
	}
	endpoint
		.connect()
		.await
		.map_err(|err| Error::Transport(err.to_string()))
}

#[cfg(test)]
mod tests {
	use super::*;

	fn arbitration(code: rpc::Code, election_id: u128) -> p4runtime::MasterArbitrationUpdate {
		p4runtime::MasterArbitrationUpdate {
			device_id: 1,
			role: None,
			election_id: Some(election_to_wire(election_id)),
			status: Some(rpc::Status {
				code: code as i32,
				message: String::new(),
				details: Vec::new(),
			}),
		}
	}

	#[test]
	fn election_id_wire_roundtrip() {
		for id in [0u128, 1, u64::MAX as u128, (7u128 << 64) | 5, u128::MAX] {
			assert_eq!(election_from_wire(&election_to_wire(id)), id);
		}
		let wire = election_to_wire((7u128 << 64) | 5);
		assert_eq!(wire.high, 7);
		assert_eq!(wire.low, 5);
	}

	#[test]
	fn arbitration_outcomes() {
		assert_eq!(
			arbitration_outcome(rpc::Code::Ok as i32),
			ArbitrationOutcome::Primary
		);
		assert_eq!(
			arbitration_outcome(rpc::Code::AlreadyExists as i32),
			ArbitrationOutcome::Backup
		);
		assert_eq!(
			arbitration_outcome(rpc::Code::NotFound as i32),
			ArbitrationOutcome::DeviceUnknown
		);
		assert_eq!(
			arbitration_outcome(rpc::Code::Internal as i32),
			ArbitrationOutcome::Retry
		);
	}

	#[tokio::test]
	async fn mastership_loss_flips_role_before_event() {
		let switch = Switch::new("arb-test", SwitchOptions {
			election_id: 10,
			auto_election: false,
			..Default::default()
		});
		let mut events = switch.subscribe();
		assert!(switch
			.apply_arbitration(&arbitration(rpc::Code::Ok, 10), true)
			.unwrap());
		assert!(switch.is_primary());

		// another controller took over with election id 12
		assert!(!switch
			.apply_arbitration(&arbitration(rpc::Code::AlreadyExists, 12), false)
			.unwrap());
		// the flag flipped before the event was published
		assert!(!switch.is_primary());
		assert!(matches!(
			events.recv().await,
			Some(SwitchEvent::RoleChanged { is_primary: false })
		));
		// without auto_election our id is unchanged
		assert_eq!(switch.election_id(), 10);
	}

	#[tokio::test]
	async fn backup_advances_election_id_when_opted_in() {
		let switch = Switch::new("arb-test-2", SwitchOptions {
			election_id: 5,
			auto_election: true,
			..Default::default()
		});
		assert!(!switch
			.apply_arbitration(&arbitration(rpc::Code::AlreadyExists, 7), true)
			.unwrap());
		assert_eq!(switch.election_id(), 8);
		// never decreases
		assert!(!switch
			.apply_arbitration(&arbitration(rpc::Code::AlreadyExists, 3), false)
			.unwrap());
		assert_eq!(switch.election_id(), 8);
	}

	#[tokio::test]
	async fn unknown_device_is_fatal() {
		let switch = Switch::new("arb-test-3", SwitchOptions::default());
		let err = switch
			.apply_arbitration(&arbitration(rpc::Code::NotFound, 1), true)
			.unwrap_err();
		assert!(matches!(err, Error::Fatal(_)));
	}

	#[tokio::test]
	async fn write_fails_fast_as_backup() {
		let switch = Switch::new("write-test", SwitchOptions::default());
		let update = p4runtime::Update::default();
		let err = switch.write(vec![update]).await.unwrap_err();
		assert!(matches!(err, Error::NotPrimary));
	}

	#[tokio::test]
	async fn shutdown_before_start_closes() {
		let switch = Switch::new("shutdown-test", SwitchOptions::default());
		assert_eq!(switch.state(), SwitchState::Init);
		switch.shutdown();
		assert_eq!(switch.state(), SwitchState::Closed);
	}
}
