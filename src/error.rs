//! Error taxonomy for the library.

use prost::Message;

use crate::proto::p4runtime;
use crate::proto::rpc;

/// A single failed update inside a Write batch, as reported by the target in
/// the `grpc-status-details-bin` trailer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct P4UpdateError {
	/// Index of the update in the submitted batch.
	pub index: usize,
	/// gRPC canonical code for this update.
	pub canonical_code: i32,
	/// Target-specific error space, if any.
	pub space: String,
	/// Target-specific numeric code.
	pub code: i32,
	/// Human readable message from the target.
	pub message: String,
}

impl P4UpdateError {
	/// Name of the canonical code ("PERMISSION_DENIED", ...).
	pub fn code_name(&self) -> &'static str {
		match rpc::Code::from_i32(self.canonical_code) {
			Some(code) => code.as_str_name(),
			None => "UNKNOWN",
		}
	}
}

impl std::fmt::Display for P4UpdateError {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "update #{}: {}", self.index, self.code_name())?;
		if !self.message.is_empty() {
			write!(f, " ({})", self.message)?;
		}
		if !self.space.is_empty() {
			write!(f, " [{}:{}]", self.space, self.code)?;
		}
		Ok(())
	}
}

/// Errors produced by this library.
///
/// Codec and schema errors are synchronous and never retried. `Transport` is
/// internal to the session (it drives reconnection) but is also what a caller
/// sees when an RPC is attempted while the channel is down. `Fatal` means the
/// session has reached its terminal state.
#[derive(Debug)]
pub enum Error {
	/// A value does not fit in the declared bitwidth.
	ValueOverflow { value: u128, bitwidth: u32 },
	/// An LPM prefix or ternary mask is inconsistent with its value.
	InvalidMask(String),
	/// A range match with low > high.
	InvalidRange { low: u128, high: u128 },
	/// A value that could not be parsed (MAC/IP text form, entry text).
	InvalidValue(String),
	/// A name or id that does not resolve against the pipeline schema, or
	/// resolves ambiguously.
	SchemaUnknown(String),
	/// The pipeline schema itself is malformed (duplicate ids, dangling
	/// cross-references, bad bitwidth), or a target-returned entry violates
	/// it (e.g. a wildcard field present on the wire).
	SchemaInvalid(String),
	/// A Write was attempted while this client is not the primary.
	NotPrimary,
	/// The target rejected a Write batch; one entry per failed update.
	P4Runtime {
		code: i32,
		message: String,
		updates: Vec<P4UpdateError>,
	},
	/// An RPC failed with a gRPC status (also used for gNMI failures).
	Rpc { code: tonic::Code, message: String },
	/// The stream or channel broke; the session will reconnect.
	Transport(String),
	/// A unary RPC exceeded its deadline.
	DeadlineExceeded,
	/// The operation was cancelled by shutdown or by the caller.
	Cancelled,
	/// Unrecoverable session failure (e.g. the target does not know the
	/// configured device id).
	Fatal(String),
}

impl Error {
	/// Classify a gRPC status from a unary RPC.
	pub(crate) fn from_status(status: tonic::Status) -> Error {
		match status.code() {
			tonic::Code::DeadlineExceeded => Error::DeadlineExceeded,
			tonic::Code::Cancelled => Error::Cancelled,
			tonic::Code::Unavailable => {
				Error::Transport(status.message().to_string())
			}
			code => Error::Rpc {
				code,
				message: status.message().to_string(),
			},
		}
	}

	/// Decode the per-update error list of a failed Write. Falls back to a
	/// plain `Rpc` error when the status carries no P4 error details.
	pub(crate) fn from_write_status(status: tonic::Status) -> Error {
		match status.code() {
			tonic::Code::DeadlineExceeded => return Error::DeadlineExceeded,
			tonic::Code::Cancelled => return Error::Cancelled,
			tonic::Code::Unavailable => {
				return Error::Transport(status.message().to_string());
			}
			_ => {}
		}
		let details = status.details();
		if details.is_empty() {
			return Error::from_status(status);
		}
		let decoded = match rpc::Status::decode(details) {
			Ok(decoded) => decoded,
			Err(_) => return Error::from_status(status),
		};
		let mut updates = Vec::new();
		for (index, any) in decoded.details.iter().enumerate() {
			if !any.type_url.ends_with("p4.v1.Error") {
				continue;
			}
			let err = match p4runtime::Error::decode(any.value.as_slice()) {
				Ok(err) => err,
				Err(_) => continue,
			};
			// An OK entry marks an update that succeeded; only failures
			// are surfaced.
			if err.canonical_code == rpc::Code::Ok as i32 {
				continue;
			}
			updates.push(P4UpdateError {
				index,
				canonical_code: err.canonical_code,
				space: err.space,
				code: err.code,
				message: err.message,
			});
		}
		Error::P4Runtime {
			code: decoded.code,
			message: decoded.message,
			updates,
		}
	}

	/// True for errors that indicate cancellation rather than failure.
	pub fn is_cancelled(&self) -> bool {
		matches!(self, Error::Cancelled)
	}
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Error::ValueOverflow { value, bitwidth } => {
				write!(f, "value {} does not fit in {} bits", value, bitwidth)
			}
			Error::InvalidMask(msg) => write!(f, "invalid mask: {}", msg),
			Error::InvalidRange { low, high } => {
				write!(f, "invalid range: low {} > high {}", low, high)
			}
			Error::InvalidValue(msg) => write!(f, "invalid value: {}", msg),
			Error::SchemaUnknown(msg) => write!(f, "unknown in schema: {}", msg),
			Error::SchemaInvalid(msg) => write!(f, "invalid schema: {}", msg),
			Error::NotPrimary => write!(f, "client is not primary"),
			Error::P4Runtime { code, message, updates } => {
				write!(f, "write rejected (code {})", code)?;
				if !message.is_empty() {
					write!(f, ": {}", message)?;
				}
				for update in updates {
					write!(f, "; {}", update)?;
				}
				Ok(())
			}
			Error::Rpc { code, message } => {
				write!(f, "rpc failed: {:?}", code)?;
				if !message.is_empty() {
					write!(f, ": {}", message)?;
				}
				Ok(())
			}
			Error::Transport(msg) => write!(f, "transport broken: {}", msg),
			Error::DeadlineExceeded => write!(f, "deadline exceeded"),
			Error::Cancelled => write!(f, "cancelled"),
			Error::Fatal(msg) => write!(f, "fatal: {}", msg),
		}
	}
}

impl std::error::Error for Error {}

/// Library result type.
pub type Result<T> = std::result::Result<T, Error>;
