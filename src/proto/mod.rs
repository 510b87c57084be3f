//! Protobuf and gRPC bindings for the P4Runtime and gNMI services.
//!
//! These modules are pregenerated prost/tonic output, checked in so that
//! building the crate does not require a protoc toolchain. They carry the
//! messages and fields this library consumes; prost skips unknown fields on
//! decode, so targets speaking newer revisions of the protocols interoperate.
//!
//! Sources:
//! - `p4/v1/p4runtime.proto`, `p4/v1/p4data.proto` (p4.org, v1.3)
//! - `p4/config/v1/p4info.proto`, `p4/config/v1/p4types.proto`
//! - `gnmi/gnmi.proto`, `gnmi_ext/gnmi_ext.proto` (openconfig, v0.8)
//! - `google/rpc/status.proto`, `google/rpc/code.proto`

/// Package `gnmi`.
pub mod gnmi;
/// Package `gnmi_ext`.
pub mod gnmi_ext;
/// Package `p4.config.v1`.
pub mod p4info;
/// Package `p4.v1`.
pub mod p4runtime;
/// Package `google.rpc`.
pub mod rpc;
