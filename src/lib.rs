//! finsy — a client-side control-plane library for P4Runtime and gNMI.
//!
//! A controller process opens a long-lived bidirectional stream to each
//! programmable switch, wins or loses mastership through election-based
//! arbitration, installs a forwarding-pipeline config, and then programs
//! tables, counters, meters, groups and digests while exchanging packets
//! over the stream. An auxiliary gNMI client reads and streams telemetry
//! from the same targets.
//!
//! The building blocks, bottom up:
//!
//! - [`values`]: canonical byte encoding for integers, MACs and IPs
//! - [`schema`]: name/id lookups derived from the pipeline's P4Info
//! - [`entity`]: typed table entries and friends with `to_wire`/`from_wire`
//! - [`switch`]: the per-target session state machine
//! - [`controller`]: fleet lifecycle and per-switch programs
//! - [`gnmi`] / [`gnmipath`]: the gNMI client and its path grammar
//!
//! ```no_run
//! use finsy::entity::{MatchValue, TableAction, TableEntry};
//! use finsy::{Controller, Switch, SwitchOptions};
//!
//! #[tokio::main]
//! async fn main() -> finsy::Result<()> {
//!     let options = SwitchOptions {
//!         address: "10.0.0.5:9559".to_string(),
//!         ..Default::default()
//!     };
//!     let controller = Controller::new([Switch::new("leaf1", options)])?;
//!     let program = finsy::controller::switch_program(|sw, _events| async move {
//!         sw.insert([TableEntry::new("ipv4_lpm")
//!             .match_field("dstAddr", MatchValue::lpm(0x0a00_0000u32, 24))
//!             .action(TableAction::new("ipv4_forward").param("port", 1u32))
//!             .into()])
//!         .await
//!     });
//!     let handle = controller.start(program);
//!     // ... run until told otherwise ...
//!     handle.stop(std::time::Duration::from_secs(10)).await
//! }
//! ```

pub mod backoff;
pub mod controller;
pub mod entity;
pub mod error;
pub mod event;
pub mod gnmi;
pub mod gnmipath;
pub mod metrics;
pub mod pipeline;
pub mod proto;
pub mod schema;
pub mod switch;
pub mod values;

pub use backoff::BackoffPolicy;
pub use controller::{switch_program, Controller, ControllerHandle, SwitchProgram};
pub use entity::{Entity, MatchValue, TableAction, TableEntry, UpdateType};
pub use error::{Error, P4UpdateError, Result};
pub use event::{EventStream, SwitchEvent};
pub use gnmi::{GnmiClient, GnmiSet, GnmiSubscribeMode, GnmiSubscription};
pub use gnmipath::GnmiPath;
pub use pipeline::{ConfigAction, ForwardingPipeline};
pub use schema::{P4Ref, P4Schema};
pub use switch::{Switch, SwitchOptions, SwitchState, TlsOptions};
