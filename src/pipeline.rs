//! Forwarding-pipeline configuration snapshot.

use std::path::Path;

use prost::Message;

use crate::error::{Error, Result};
use crate::proto::p4info;
use crate::proto::p4runtime;
use crate::schema::P4Schema;

/// How a pipeline is installed on the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigAction {
	/// Check that the target can realize the config; no state change.
	Verify,
	/// Verify and persist the config for a later [`ConfigAction::Commit`].
	VerifyAndSave,
	/// Verify, save and atomically replace the running config.
	VerifyAndCommit,
	/// Realize the last saved, not yet committed, config.
	Commit,
}

impl From<ConfigAction> for p4runtime::set_forwarding_pipeline_config_request::Action {
	fn from(action: ConfigAction) -> Self {
		use p4runtime::set_forwarding_pipeline_config_request::Action;
		match action {
			ConfigAction::Verify => Action::Verify,
			ConfigAction::VerifyAndSave => Action::VerifyAndSave,
			ConfigAction::VerifyAndCommit => Action::VerifyAndCommit,
			ConfigAction::Commit => Action::Commit,
		}
	}
}

/// Immutable snapshot of a compiled pipeline: the P4Info schema source, the
/// target-specific binary config, and an optional cookie identifying the
/// combination.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ForwardingPipeline {
	pub p4info: p4info::P4Info,
	pub device_config: Vec<u8>,
	pub cookie: Option<u64>,
}

impl ForwardingPipeline {
	pub fn new(p4info: p4info::P4Info, device_config: Vec<u8>) -> ForwardingPipeline {
		ForwardingPipeline { p4info, device_config, cookie: None }
	}

	/// Set the config cookie; builder style.
	pub fn cookie(mut self, cookie: u64) -> Self {
		self.cookie = Some(cookie);
		self
	}

	/// Load a pipeline from a binary-encoded P4Info file and a device config
	/// blob, as produced by p4c.
	pub fn from_files(
		p4info_path: impl AsRef<Path>,
		device_config_path: impl AsRef<Path>,
	) -> Result<ForwardingPipeline> {
		let p4info_path = p4info_path.as_ref();
		let raw = std::fs::read(p4info_path).map_err(|err| {
			Error::InvalidValue(format!(
				"could not read P4Info {:?}: {}",
				p4info_path, err
			))
		})?;
		let p4info = p4info::P4Info::decode(raw.as_slice()).map_err(|err| {
			Error::InvalidValue(format!(
				"could not decode P4Info {:?}: {}",
				p4info_path, err
			))
		})?;
		let device_config_path = device_config_path.as_ref();
		let device_config = std::fs::read(device_config_path).map_err(|err| {
			Error::InvalidValue(format!(
				"could not read device config {:?}: {}",
				device_config_path, err
			))
		})?;
		Ok(ForwardingPipeline::new(p4info, device_config))
	}

	/// Build the validated schema for this pipeline.
	pub fn schema(&self) -> Result<P4Schema> {
		P4Schema::new(&self.p4info)
	}

	pub fn to_wire(&self) -> p4runtime::ForwardingPipelineConfig {
		p4runtime::ForwardingPipelineConfig {
			p4info: Some(self.p4info.clone()),
			p4_device_config: self.device_config.clone(),
			cookie: self.cookie.map(|cookie| {
				p4runtime::forwarding_pipeline_config::Cookie { cookie }
			}),
		}
	}

	pub fn from_wire(msg: &p4runtime::ForwardingPipelineConfig) -> ForwardingPipeline {
		ForwardingPipeline {
			p4info: msg.p4info.clone().unwrap_or_default(),
			device_config: msg.p4_device_config.clone(),
			cookie: msg.cookie.as_ref().map(|c| c.cookie),
		}
	}
}
