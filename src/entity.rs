//! Typed, schema-aware entity model.
//!
//! Each entity keeps names and integers; `to_wire` resolves them against a
//! [`P4Schema`] into canonical protobuf form, and `from_wire` is the inverse.
//! Wildcard match fields (zero ternary mask, zero LPM prefix, full range,
//! absent optional) are omitted on encode; their presence in a target-returned
//! entry is rejected as a schema violation.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::proto::p4runtime;
use crate::schema::{P4Action, P4MatchType, P4Schema, P4Table};
use crate::values;

/// The three Write operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateType {
	Insert,
	Modify,
	Delete,
}

impl From<UpdateType> for p4runtime::update::Type {
	fn from(ty: UpdateType) -> Self {
		match ty {
			UpdateType::Insert => p4runtime::update::Type::Insert,
			UpdateType::Modify => p4runtime::update::Type::Modify,
			UpdateType::Delete => p4runtime::update::Type::Delete,
		}
	}
}

/// One match field value. Wildcards are expressed by leaving the field out
/// of the [`TableMatch`] altogether; a zero ternary mask, zero LPM prefix or
/// full range given here also collapses to the wildcard and is omitted from
/// the wire entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchValue {
	Exact(u128),
	Lpm { value: u128, prefix_len: u32 },
	Ternary { value: u128, mask: u128 },
	Range { low: u128, high: u128 },
	Optional(u128),
}

impl MatchValue {
	pub fn exact(value: impl Into<u128>) -> MatchValue {
		MatchValue::Exact(value.into())
	}

	pub fn lpm(value: impl Into<u128>, prefix_len: u32) -> MatchValue {
		MatchValue::Lpm { value: value.into(), prefix_len }
	}

	pub fn ternary(value: impl Into<u128>, mask: impl Into<u128>) -> MatchValue {
		MatchValue::Ternary { value: value.into(), mask: mask.into() }
	}

	pub fn range(low: impl Into<u128>, high: impl Into<u128>) -> MatchValue {
		MatchValue::Range { low: low.into(), high: high.into() }
	}

	pub fn optional(value: impl Into<u128>) -> MatchValue {
		MatchValue::Optional(value.into())
	}
}

/// The match key of a table entry: field name to value. Fields not listed
/// are wildcards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableMatch {
	fields: Vec<(String, MatchValue)>,
}

impl TableMatch {
	pub fn new() -> TableMatch {
		TableMatch::default()
	}

	/// Add one field; builder style.
	pub fn field(mut self, name: impl Into<String>, value: MatchValue) -> Self {
		self.fields.push((name.into(), value));
		self
	}

	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}

	pub fn get(&self, name: &str) -> Option<&MatchValue> {
		self.fields.iter().find(|(n, _)| n == name).map(|(_, v)| v)
	}

	pub fn iter(&self) -> impl Iterator<Item = &(String, MatchValue)> {
		self.fields.iter()
	}

	/// Serialize against the table's match key, in schema field order.
	pub fn encode(&self, table: &P4Table) -> Result<Vec<p4runtime::FieldMatch>> {
		for (name, _) in &self.fields {
			table.match_field(name)?;
		}
		let mut out = Vec::new();
		for field in &table.match_fields {
			let value = match self.get(&field.name) {
				Some(value) => *value,
				None => continue,
			};
			if let Some(fmt) = encode_field(field.match_type, value, field)? {
				out.push(p4runtime::FieldMatch {
					field_id: field.id,
					field_match_type: Some(fmt),
				});
			}
		}
		Ok(out)
	}

	/// Decode a wire match list. Wildcard fields on the wire are a schema
	/// violation.
	pub fn decode(
		msgs: &[p4runtime::FieldMatch],
		table: &P4Table,
	) -> Result<TableMatch> {
		use p4runtime::field_match::FieldMatchType;
		let mut fields = Vec::with_capacity(msgs.len());
		for fm in msgs {
			let field = table
				.match_fields
				.iter()
				.find(|f| f.id == fm.field_id)
				.ok_or_else(|| {
					Error::SchemaUnknown(format!(
						"table {:?} has no match field #{}",
						table.alias, fm.field_id
					))
				})?;
			let bw = field.bitwidth;
			let value = match (&fm.field_match_type, field.match_type) {
				(Some(FieldMatchType::Exact(m)), P4MatchType::Exact) => {
					MatchValue::Exact(values::decode_uint(&m.value, bw)?)
				}
				(Some(FieldMatchType::Lpm(m)), P4MatchType::Lpm) => {
					if m.prefix_len == 0 {
						return Err(wire_wildcard(&field.name));
					}
					MatchValue::Lpm {
						value: values::decode_uint(&m.value, bw)?,
						prefix_len: m.prefix_len as u32,
					}
				}
				(Some(FieldMatchType::Ternary(m)), P4MatchType::Ternary) => {
					let mask = values::decode_uint(&m.mask, bw)?;
					if mask == 0 {
						return Err(wire_wildcard(&field.name));
					}
					MatchValue::Ternary {
						value: values::decode_uint(&m.value, bw)?,
						mask,
					}
				}
				(Some(FieldMatchType::Range(m)), P4MatchType::Range) => {
					let low = values::decode_uint(&m.low, bw)?;
					let high = values::decode_uint(&m.high, bw)?;
					if low == 0 && high == values::all_ones(bw) {
						return Err(wire_wildcard(&field.name));
					}
					MatchValue::Range { low, high }
				}
				(Some(FieldMatchType::Optional(m)), P4MatchType::Optional) => {
					MatchValue::Optional(values::decode_uint(&m.value, bw)?)
				}
				_ => {
					return Err(Error::SchemaInvalid(format!(
						"field {:?}: wire match kind does not agree with schema",
						field.name
					)));
				}
			};
			fields.push((field.name.clone(), value));
		}
		Ok(TableMatch { fields })
	}
}

fn wire_wildcard(field: &str) -> Error {
	Error::SchemaInvalid(format!(
		"field {:?}: wildcard must be omitted from the wire entry",
		field
	))
}

fn encode_field(
	match_type: P4MatchType,
	value: MatchValue,
	field: &crate::schema::P4MatchField,
) -> Result<Option<p4runtime::field_match::FieldMatchType>> {
	use p4runtime::field_match;
	use p4runtime::field_match::FieldMatchType;
	let bw = field.bitwidth;
	let mismatch = || {
		Error::InvalidValue(format!(
			"field {:?} is {:?}-match",
			field.name, match_type
		))
	};
	match match_type {
		P4MatchType::Exact => {
			let v = match value {
				MatchValue::Exact(v) => v,
				_ => return Err(mismatch()),
			};
			Ok(Some(FieldMatchType::Exact(field_match::Exact {
				value: values::encode_uint(v, bw)?,
			})))
		}
		P4MatchType::Lpm => {
			// a scalar value means a host route: full-prefix exact
			let (v, plen) = match value {
				MatchValue::Lpm { value, prefix_len } => (value, prefix_len),
				MatchValue::Exact(v) => (v, bw),
				_ => return Err(mismatch()),
			};
			Ok(values::encode_lpm(v, plen, bw)?.map(|(value, prefix_len)| {
				FieldMatchType::Lpm(field_match::Lpm { value, prefix_len })
			}))
		}
		P4MatchType::Ternary => {
			let (v, mask) = match value {
				MatchValue::Ternary { value, mask } => (value, mask),
				MatchValue::Exact(v) => (v, values::all_ones(bw)),
				_ => return Err(mismatch()),
			};
			Ok(values::encode_ternary(v, mask, bw)?.map(|(value, mask)| {
				FieldMatchType::Ternary(field_match::Ternary { value, mask })
			}))
		}
		P4MatchType::Range => {
			let (low, high) = match value {
				MatchValue::Range { low, high } => (low, high),
				MatchValue::Exact(v) => (v, v),
				_ => return Err(mismatch()),
			};
			Ok(values::encode_range(low, high, bw)?.map(|(low, high)| {
				FieldMatchType::Range(field_match::Range { low, high })
			}))
		}
		P4MatchType::Optional => {
			let v = match value {
				MatchValue::Optional(v) | MatchValue::Exact(v) => v,
				_ => return Err(mismatch()),
			};
			Ok(Some(FieldMatchType::Optional(field_match::Optional {
				value: values::encode_uint(v, bw)?,
			})))
		}
	}
}

/// A direct action invocation: action name plus named parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableAction {
	pub name: String,
	pub params: Vec<(String, u128)>,
}

impl TableAction {
	pub fn new(name: impl Into<String>) -> TableAction {
		TableAction { name: name.into(), params: Vec::new() }
	}

	/// Add one parameter; builder style.
	pub fn param(mut self, name: impl Into<String>, value: impl Into<u128>) -> Self {
		self.params.push((name.into(), value.into()));
		self
	}

	fn encode_with(
		&self,
		spec: &P4Action,
		table: Option<(&P4Table, bool)>,
	) -> Result<p4runtime::Action> {
		if let Some((table, default_entry)) = table {
			let ar = table
				.action_refs
				.iter()
				.find(|ar| ar.id == spec.id)
				.ok_or_else(|| {
					Error::SchemaUnknown(format!(
						"action {:?} not allowed in table {:?}",
						spec.alias, table.alias
					))
				})?;
			if default_entry && !ar.may_be_default {
				return Err(Error::InvalidValue(format!(
					"action {:?} may not be the default action of {:?}",
					spec.alias, table.alias
				)));
			}
			if !default_entry && !ar.may_be_entry {
				return Err(Error::InvalidValue(format!(
					"action {:?} is default-only in table {:?}",
					spec.alias, table.alias
				)));
			}
		}
		for (name, _) in &self.params {
			spec.param(name)?;
		}
		let mut params = Vec::with_capacity(spec.params.len());
		let mut missing = Vec::new();
		for p in &spec.params {
			match self.params.iter().find(|(name, _)| name == &p.name) {
				Some((_, value)) => params.push(p4runtime::action::Param {
					param_id: p.id,
					value: values::encode_uint(*value, p.bitwidth)?,
				}),
				None => missing.push(p.name.clone()),
			}
		}
		if !missing.is_empty() {
			return Err(Error::InvalidValue(format!(
				"action {:?}: missing parameters {:?}",
				spec.alias, missing
			)));
		}
		Ok(p4runtime::Action { action_id: spec.id, params })
	}

	/// Serialize against the schema, optionally checking that the action is
	/// allowed in the given table.
	pub fn encode(
		&self,
		schema: &P4Schema,
		table: Option<(&P4Table, bool)>,
	) -> Result<p4runtime::Action> {
		let spec = schema.action(self.name.as_str())?;
		self.encode_with(spec, table)
	}

	pub fn decode(schema: &P4Schema, msg: &p4runtime::Action) -> Result<TableAction> {
		let spec = schema.action(msg.action_id)?;
		let mut params = Vec::with_capacity(msg.params.len());
		for p in &msg.params {
			let param = spec
				.params
				.iter()
				.find(|sp| sp.id == p.param_id)
				.ok_or_else(|| {
					Error::SchemaUnknown(format!(
						"action {:?} has no parameter #{}",
						spec.alias, p.param_id
					))
				})?;
			params.push((
				param.name.clone(),
				values::decode_uint(&p.value, param.bitwidth)?,
			));
		}
		Ok(TableAction { name: spec.alias.clone(), params })
	}
}

/// A reference into an action profile instead of a direct action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndirectAction {
	/// A previously installed action-profile member.
	Member(u32),
	/// A previously installed action-profile group.
	Group(u32),
	/// A one-shot weighted action set.
	ActionSet(Vec<(i32, TableAction)>),
}

/// The action slot of a table entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryAction {
	Direct(TableAction),
	Indirect(IndirectAction),
}

impl From<TableAction> for EntryAction {
	fn from(action: TableAction) -> Self {
		EntryAction::Direct(action)
	}
}

impl From<IndirectAction> for EntryAction {
	fn from(action: IndirectAction) -> Self {
		EntryAction::Indirect(action)
	}
}

impl EntryAction {
	fn encode(
		&self,
		schema: &P4Schema,
		table: &P4Table,
		default_entry: bool,
	) -> Result<p4runtime::TableAction> {
		use p4runtime::table_action::Type;
		let ty = match self {
			EntryAction::Direct(action) => {
				Type::Action(action.encode(schema, Some((table, default_entry)))?)
			}
			EntryAction::Indirect(IndirectAction::Member(id)) => {
				Type::ActionProfileMemberId(*id)
			}
			EntryAction::Indirect(IndirectAction::Group(id)) => {
				Type::ActionProfileGroupId(*id)
			}
			EntryAction::Indirect(IndirectAction::ActionSet(actions)) => {
				Type::ActionProfileActionSet(p4runtime::ActionProfileActionSet {
					action_profile_actions: actions
						.iter()
						.map(|(weight, action)| {
							Ok(p4runtime::ActionProfileAction {
								action: Some(
									action.encode(schema, Some((table, false)))?,
								),
								weight: *weight,
								watch_kind: None,
							})
						})
						.collect::<Result<Vec<_>>>()?,
				})
			}
		};
		Ok(p4runtime::TableAction { r#type: Some(ty) })
	}

	fn decode(
		schema: &P4Schema,
		msg: &p4runtime::TableAction,
	) -> Result<EntryAction> {
		use p4runtime::table_action::Type;
		match msg.r#type.as_ref().ok_or_else(|| {
			Error::SchemaInvalid("missing table action type".to_string())
		})? {
			Type::Action(a) => {
				Ok(EntryAction::Direct(TableAction::decode(schema, a)?))
			}
			Type::ActionProfileMemberId(id) => {
				Ok(EntryAction::Indirect(IndirectAction::Member(*id)))
			}
			Type::ActionProfileGroupId(id) => {
				Ok(EntryAction::Indirect(IndirectAction::Group(*id)))
			}
			Type::ActionProfileActionSet(set) => {
				let actions = set
					.action_profile_actions
					.iter()
					.map(|apa| {
						let action = apa.action.as_ref().ok_or_else(|| {
							Error::SchemaInvalid(
								"action set entry without action".to_string(),
							)
						})?;
						Ok((apa.weight, TableAction::decode(schema, action)?))
					})
					.collect::<Result<Vec<_>>>()?;
				Ok(EntryAction::Indirect(IndirectAction::ActionSet(actions)))
			}
		}
	}
}

/// Counter readings for one entry or cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CounterData {
	pub byte_count: i64,
	pub packet_count: i64,
}

impl CounterData {
	fn to_wire(self) -> p4runtime::CounterData {
		p4runtime::CounterData {
			byte_count: self.byte_count,
			packet_count: self.packet_count,
		}
	}

	fn from_wire(msg: &p4runtime::CounterData) -> CounterData {
		CounterData {
			byte_count: msg.byte_count,
			packet_count: msg.packet_count,
		}
	}
}

/// Two-rate three-color meter configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MeterConfig {
	pub cir: i64,
	pub cburst: i64,
	pub pir: i64,
	pub pburst: i64,
}

impl MeterConfig {
	fn to_wire(self) -> p4runtime::MeterConfig {
		p4runtime::MeterConfig {
			cir: self.cir,
			cburst: self.cburst,
			pir: self.pir,
			pburst: self.pburst,
		}
	}

	fn from_wire(msg: &p4runtime::MeterConfig) -> MeterConfig {
		MeterConfig {
			cir: msg.cir,
			cburst: msg.cburst,
			pir: msg.pir,
			pburst: msg.pburst,
		}
	}
}

/// Per-color counters of a metered entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MeterCounterData {
	pub green: CounterData,
	pub yellow: CounterData,
	pub red: CounterData,
}

impl MeterCounterData {
	fn to_wire(self) -> p4runtime::MeterCounterData {
		p4runtime::MeterCounterData {
			green: Some(self.green.to_wire()),
			yellow: Some(self.yellow.to_wire()),
			red: Some(self.red.to_wire()),
		}
	}

	fn from_wire(msg: &p4runtime::MeterCounterData) -> MeterCounterData {
		MeterCounterData {
			green: msg.green.as_ref().map(CounterData::from_wire).unwrap_or_default(),
			yellow: msg.yellow.as_ref().map(CounterData::from_wire).unwrap_or_default(),
			red: msg.red.as_ref().map(CounterData::from_wire).unwrap_or_default(),
		}
	}
}

/// One table entry. An empty entry (no table name) reads every table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableEntry {
	/// Table name or alias; empty matches all tables on Read.
	pub table: String,
	pub matches: TableMatch,
	pub action: Option<EntryAction>,
	pub priority: i32,
	pub is_default_action: bool,
	pub idle_timeout_ns: i64,
	pub time_since_last_hit_ns: Option<i64>,
	pub metadata: Vec<u8>,
	pub counter_data: Option<CounterData>,
	pub meter_config: Option<MeterConfig>,
	pub meter_counter_data: Option<MeterCounterData>,
}

impl TableEntry {
	pub fn new(table: impl Into<String>) -> TableEntry {
		TableEntry { table: table.into(), ..Default::default() }
	}

	/// Add one match field; builder style.
	pub fn match_field(
		mut self,
		name: impl Into<String>,
		value: MatchValue,
	) -> Self {
		self.matches = self.matches.field(name, value);
		self
	}

	/// Set the entry's action; builder style.
	pub fn action(mut self, action: impl Into<EntryAction>) -> Self {
		self.action = Some(action.into());
		self
	}

	/// Set the entry's priority; builder style.
	pub fn priority(mut self, priority: i32) -> Self {
		self.priority = priority;
		self
	}

	/// Mark this entry as the table's default action; builder style.
	pub fn default_action(mut self) -> Self {
		self.is_default_action = true;
		self
	}

	pub fn to_wire(&self, schema: &P4Schema) -> Result<p4runtime::TableEntry> {
		let mut entry = p4runtime::TableEntry::default();
		if self.table.is_empty() {
			if !self.matches.is_empty() || self.action.is_some() {
				return Err(Error::SchemaUnknown(
					"table entry with match or action needs a table name"
						.to_string(),
				));
			}
			return Ok(entry);
		}
		let table = schema.table(self.table.as_str())?;
		entry.table_id = table.id;
		entry.r#match = self.matches.encode(table)?;
		if let Some(action) = &self.action {
			entry.action =
				Some(action.encode(schema, table, self.is_default_action)?);
		}
		if self.priority != 0 && !table.needs_priority() {
			return Err(Error::InvalidValue(format!(
				"table {:?} has no ternary/range/optional field; priority must be 0",
				table.alias
			)));
		}
		entry.priority = self.priority;
		entry.is_default_action = self.is_default_action;
		entry.idle_timeout_ns = self.idle_timeout_ns;
		entry.time_since_last_hit = self
			.time_since_last_hit_ns
			.map(|elapsed_ns| p4runtime::table_entry::IdleTimeout { elapsed_ns });
		entry.metadata = self.metadata.clone();
		entry.counter_data = self.counter_data.map(CounterData::to_wire);
		entry.meter_config = self.meter_config.map(MeterConfig::to_wire);
		entry.meter_counter_data =
			self.meter_counter_data.map(MeterCounterData::to_wire);
		Ok(entry)
	}

	pub fn from_wire(
		schema: &P4Schema,
		msg: &p4runtime::TableEntry,
	) -> Result<TableEntry> {
		if msg.table_id == 0 {
			return Ok(TableEntry::default());
		}
		let table = schema.table(msg.table_id)?;
		Ok(TableEntry {
			table: table.alias.clone(),
			matches: TableMatch::decode(&msg.r#match, table)?,
			action: msg
				.action
				.as_ref()
				.map(|a| EntryAction::decode(schema, a))
				.transpose()?,
			priority: msg.priority,
			is_default_action: msg.is_default_action,
			idle_timeout_ns: msg.idle_timeout_ns,
			time_since_last_hit_ns: msg
				.time_since_last_hit
				.as_ref()
				.map(|t| t.elapsed_ns),
			metadata: msg.metadata.clone(),
			counter_data: msg.counter_data.as_ref().map(CounterData::from_wire),
			meter_config: msg.meter_config.as_ref().map(MeterConfig::from_wire),
			meter_counter_data: msg
				.meter_counter_data
				.as_ref()
				.map(MeterCounterData::from_wire),
		})
	}
}

/// An installed action-profile member.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActionProfileMember {
	/// Action profile name or alias; empty matches all profiles on Read.
	pub action_profile: String,
	pub member_id: u32,
	pub action: Option<TableAction>,
}

impl ActionProfileMember {
	pub fn to_wire(&self, schema: &P4Schema) -> Result<p4runtime::ActionProfileMember> {
		let mut msg = p4runtime::ActionProfileMember {
			member_id: self.member_id,
			..Default::default()
		};
		if !self.action_profile.is_empty() {
			msg.action_profile_id =
				schema.action_profile(self.action_profile.as_str())?.id;
		}
		if let Some(action) = &self.action {
			msg.action = Some(action.encode(schema, None)?);
		}
		Ok(msg)
	}

	pub fn from_wire(
		schema: &P4Schema,
		msg: &p4runtime::ActionProfileMember,
	) -> Result<ActionProfileMember> {
		let action_profile = match msg.action_profile_id {
			0 => String::new(),
			id => schema.action_profile(id)?.alias.clone(),
		};
		Ok(ActionProfileMember {
			action_profile,
			member_id: msg.member_id,
			action: msg
				.action
				.as_ref()
				.map(|a| TableAction::decode(schema, a))
				.transpose()?,
		})
	}
}

/// One weighted member reference inside an action-profile group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupMember {
	pub member_id: u32,
	pub weight: i32,
	/// SDN port whose liveness gates this member, canonically encoded.
	pub watch_port: Option<u128>,
}

impl GroupMember {
	pub fn new(member_id: u32, weight: i32) -> GroupMember {
		GroupMember { member_id, weight, watch_port: None }
	}
}

/// An installed action-profile group.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActionProfileGroup {
	/// Action profile name or alias; empty matches all profiles on Read.
	pub action_profile: String,
	pub group_id: u32,
	pub max_size: i32,
	pub members: Vec<GroupMember>,
}

impl ActionProfileGroup {
	pub fn to_wire(&self, schema: &P4Schema) -> Result<p4runtime::ActionProfileGroup> {
		let mut msg = p4runtime::ActionProfileGroup {
			group_id: self.group_id,
			max_size: self.max_size,
			..Default::default()
		};
		if !self.action_profile.is_empty() {
			msg.action_profile_id =
				schema.action_profile(self.action_profile.as_str())?.id;
		}
		for member in &self.members {
			let watch_kind = match member.watch_port {
				Some(port) => {
					Some(p4runtime::action_profile_group::member::WatchKind::WatchPort(
						values::encode_uint(port, values::MAX_BITWIDTH)?,
					))
				}
				None => None,
			};
			msg.members.push(p4runtime::action_profile_group::Member {
				member_id: member.member_id,
				weight: member.weight,
				watch_kind,
			});
		}
		Ok(msg)
	}

	pub fn from_wire(
		schema: &P4Schema,
		msg: &p4runtime::ActionProfileGroup,
	) -> Result<ActionProfileGroup> {
		let action_profile = match msg.action_profile_id {
			0 => String::new(),
			id => schema.action_profile(id)?.alias.clone(),
		};
		let members = msg
			.members
			.iter()
			.map(|m| {
				use p4runtime::action_profile_group::member::WatchKind;
				let watch_port = match &m.watch_kind {
					Some(WatchKind::WatchPort(bytes)) => {
						Some(values::decode_uint(bytes, values::MAX_BITWIDTH)?)
					}
					_ => None,
				};
				Ok(GroupMember {
					member_id: m.member_id,
					weight: m.weight,
					watch_port,
				})
			})
			.collect::<Result<Vec<_>>>()?;
		Ok(ActionProfileGroup {
			action_profile,
			group_id: msg.group_id,
			max_size: msg.max_size,
			members,
		})
	}
}

/// An indexed counter cell, or a whole-array read when `index` is absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CounterEntry {
	pub counter: String,
	pub index: Option<i64>,
	pub data: Option<CounterData>,
}

impl CounterEntry {
	pub fn to_wire(&self, schema: &P4Schema) -> Result<p4runtime::CounterEntry> {
		let mut msg = p4runtime::CounterEntry::default();
		if !self.counter.is_empty() {
			msg.counter_id = schema.counter(self.counter.as_str())?.id;
		}
		msg.index = self.index.map(|index| p4runtime::Index { index });
		msg.data = self.data.map(CounterData::to_wire);
		Ok(msg)
	}

	pub fn from_wire(
		schema: &P4Schema,
		msg: &p4runtime::CounterEntry,
	) -> Result<CounterEntry> {
		let counter = match msg.counter_id {
			0 => String::new(),
			id => schema.counter(id)?.alias.clone(),
		};
		Ok(CounterEntry {
			counter,
			index: msg.index.as_ref().map(|i| i.index),
			data: msg.data.as_ref().map(CounterData::from_wire),
		})
	}
}

/// The counter attached to a table entry. With only the counter name set,
/// the encoded entry addresses the counter's whole table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DirectCounterEntry {
	/// Filled in on decode even when the user left it empty.
	pub counter: String,
	pub table_entry: Option<TableEntry>,
	pub data: Option<CounterData>,
}

impl DirectCounterEntry {
	pub fn to_wire(&self, schema: &P4Schema) -> Result<p4runtime::DirectCounterEntry> {
		let table_entry = match &self.table_entry {
			Some(entry) => entry.clone(),
			None if !self.counter.is_empty() => {
				// address every entry of the counter's table
				let counter = schema.direct_counter(self.counter.as_str())?;
				let table = schema.table(counter.direct_table_id)?;
				TableEntry::new(table.alias.clone())
			}
			None => TableEntry::default(),
		};
		Ok(p4runtime::DirectCounterEntry {
			table_entry: Some(table_entry.to_wire(schema)?),
			data: self.data.map(CounterData::to_wire),
		})
	}

	pub fn from_wire(
		schema: &P4Schema,
		msg: &p4runtime::DirectCounterEntry,
	) -> Result<DirectCounterEntry> {
		let table_entry = msg
			.table_entry
			.as_ref()
			.map(|te| TableEntry::from_wire(schema, te))
			.transpose()?;
		let counter = match &table_entry {
			Some(entry) if !entry.table.is_empty() => {
				let table = schema.table(entry.table.as_str())?;
				match table.direct_counter_id {
					Some(id) => schema.direct_counter(id)?.alias.clone(),
					None => String::new(),
				}
			}
			_ => String::new(),
		};
		Ok(DirectCounterEntry {
			counter,
			table_entry,
			data: msg.data.as_ref().map(CounterData::from_wire),
		})
	}
}

/// An indexed meter cell.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeterEntry {
	pub meter: String,
	pub index: Option<i64>,
	pub config: Option<MeterConfig>,
	pub counter_data: Option<MeterCounterData>,
}

impl MeterEntry {
	pub fn to_wire(&self, schema: &P4Schema) -> Result<p4runtime::MeterEntry> {
		let mut msg = p4runtime::MeterEntry::default();
		if !self.meter.is_empty() {
			msg.meter_id = schema.meter(self.meter.as_str())?.id;
		}
		msg.index = self.index.map(|index| p4runtime::Index { index });
		msg.config = self.config.map(MeterConfig::to_wire);
		msg.counter_data = self.counter_data.map(MeterCounterData::to_wire);
		Ok(msg)
	}

	pub fn from_wire(
		schema: &P4Schema,
		msg: &p4runtime::MeterEntry,
	) -> Result<MeterEntry> {
		let meter = match msg.meter_id {
			0 => String::new(),
			id => schema.meter(id)?.alias.clone(),
		};
		Ok(MeterEntry {
			meter,
			index: msg.index.as_ref().map(|i| i.index),
			config: msg.config.as_ref().map(MeterConfig::from_wire),
			counter_data: msg
				.counter_data
				.as_ref()
				.map(MeterCounterData::from_wire),
		})
	}
}

/// The meter attached to a table entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DirectMeterEntry {
	pub table_entry: Option<TableEntry>,
	pub config: Option<MeterConfig>,
	pub counter_data: Option<MeterCounterData>,
}

impl DirectMeterEntry {
	pub fn to_wire(&self, schema: &P4Schema) -> Result<p4runtime::DirectMeterEntry> {
		let table_entry = self.table_entry.clone().unwrap_or_default();
		Ok(p4runtime::DirectMeterEntry {
			table_entry: Some(table_entry.to_wire(schema)?),
			config: self.config.map(MeterConfig::to_wire),
			counter_data: self.counter_data.map(MeterCounterData::to_wire),
		})
	}

	pub fn from_wire(
		schema: &P4Schema,
		msg: &p4runtime::DirectMeterEntry,
	) -> Result<DirectMeterEntry> {
		Ok(DirectMeterEntry {
			table_entry: msg
				.table_entry
				.as_ref()
				.map(|te| TableEntry::from_wire(schema, te))
				.transpose()?,
			config: msg.config.as_ref().map(MeterConfig::from_wire),
			counter_data: msg
				.counter_data
				.as_ref()
				.map(MeterCounterData::from_wire),
		})
	}
}

/// A register cell, or the whole array when `index` is absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterEntry {
	pub register: String,
	pub index: Option<i64>,
	pub data: Option<u128>,
}

impl RegisterEntry {
	pub fn to_wire(&self, schema: &P4Schema) -> Result<p4runtime::RegisterEntry> {
		let mut msg = p4runtime::RegisterEntry::default();
		let mut bitwidth = values::MAX_BITWIDTH;
		if !self.register.is_empty() {
			let register = schema.register(self.register.as_str())?;
			msg.register_id = register.id;
			if let Some(bw) = register.bitwidth {
				bitwidth = bw;
			}
		}
		msg.index = self.index.map(|index| p4runtime::Index { index });
		if let Some(data) = self.data {
			msg.data = Some(p4runtime::P4Data {
				data: Some(p4runtime::p4_data::Data::Bitstring(
					values::encode_uint(data, bitwidth)?,
				)),
			});
		}
		Ok(msg)
	}

	pub fn from_wire(
		schema: &P4Schema,
		msg: &p4runtime::RegisterEntry,
	) -> Result<RegisterEntry> {
		let mut bitwidth = values::MAX_BITWIDTH;
		let register = match msg.register_id {
			0 => String::new(),
			id => {
				let register = schema.register(id)?;
				if let Some(bw) = register.bitwidth {
					bitwidth = bw;
				}
				register.alias.clone()
			}
		};
		let data = match &msg.data {
			Some(p4runtime::P4Data {
				data: Some(p4runtime::p4_data::Data::Bitstring(bytes)),
			}) => Some(values::decode_uint(bytes, bitwidth)?),
			_ => None,
		};
		Ok(RegisterEntry {
			register,
			index: msg.index.as_ref().map(|i| i.index),
			data,
		})
	}
}

/// Digest stream configuration for one digest type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DigestEntry {
	pub digest: String,
	pub max_list_size: i32,
	pub max_timeout_ns: i64,
	pub ack_timeout_ns: i64,
}

impl DigestEntry {
	pub fn new(digest: impl Into<String>) -> DigestEntry {
		DigestEntry { digest: digest.into(), ..Default::default() }
	}

	pub fn to_wire(&self, schema: &P4Schema) -> Result<p4runtime::DigestEntry> {
		let mut msg = p4runtime::DigestEntry::default();
		if !self.digest.is_empty() {
			msg.digest_id = schema.digest(self.digest.as_str())?.id;
		}
		if self.max_list_size != 0
			|| self.max_timeout_ns != 0
			|| self.ack_timeout_ns != 0
		{
			msg.config = Some(p4runtime::digest_entry::Config {
				max_timeout_ns: self.max_timeout_ns,
				max_list_size: self.max_list_size,
				ack_timeout_ns: self.ack_timeout_ns,
			});
		}
		Ok(msg)
	}

	pub fn from_wire(
		schema: &P4Schema,
		msg: &p4runtime::DigestEntry,
	) -> Result<DigestEntry> {
		let digest = match msg.digest_id {
			0 => String::new(),
			id => schema.digest(id)?.alias.clone(),
		};
		let config = msg.config.clone().unwrap_or_default();
		Ok(DigestEntry {
			digest,
			max_list_size: config.max_list_size,
			max_timeout_ns: config.max_timeout_ns,
			ack_timeout_ns: config.ack_timeout_ns,
		})
	}
}

/// A batch of digest notifications pushed by the target.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DigestList {
	/// Digest name; empty if the id is not in the schema.
	pub digest: String,
	pub digest_id: u32,
	pub list_id: u64,
	pub timestamp: i64,
	/// Raw digest payloads as sent by the target.
	pub data: Vec<p4runtime::P4Data>,
}

impl DigestList {
	pub fn from_wire(schema: &P4Schema, msg: &p4runtime::DigestList) -> DigestList {
		let digest = schema
			.digest(msg.digest_id)
			.map(|d| d.alias.clone())
			.unwrap_or_default();
		DigestList {
			digest,
			digest_id: msg.digest_id,
			list_id: msg.list_id,
			timestamp: msg.timestamp,
			data: msg.data.clone(),
		}
	}

	/// The acknowledgement releasing the target to send more lists.
	pub fn ack(&self) -> DigestListAck {
		DigestListAck { digest_id: self.digest_id, list_id: self.list_id }
	}
}

/// Acknowledges one digest list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DigestListAck {
	pub digest_id: u32,
	pub list_id: u64,
}

impl DigestListAck {
	pub fn to_wire(self) -> p4runtime::DigestListAck {
		p4runtime::DigestListAck {
			digest_id: self.digest_id,
			list_id: self.list_id,
		}
	}
}

/// A multicast group of the packet replication engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MulticastGroupEntry {
	pub group_id: u32,
	pub replicas: Vec<Replica>,
}

/// One replication target: egress port plus instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Replica {
	pub egress_port: u32,
	pub instance: u32,
}

impl Replica {
	pub fn new(egress_port: u32) -> Replica {
		Replica { egress_port, instance: 0 }
	}

	fn to_wire(self) -> p4runtime::Replica {
		p4runtime::Replica {
			egress_port: self.egress_port,
			instance: self.instance,
		}
	}

	fn from_wire(msg: &p4runtime::Replica) -> Replica {
		Replica { egress_port: msg.egress_port, instance: msg.instance }
	}
}

impl MulticastGroupEntry {
	pub fn to_wire(&self) -> p4runtime::PacketReplicationEngineEntry {
		p4runtime::PacketReplicationEngineEntry {
			r#type: Some(
				p4runtime::packet_replication_engine_entry::Type::MulticastGroupEntry(
					p4runtime::MulticastGroupEntry {
						multicast_group_id: self.group_id,
						replicas: self
							.replicas
							.iter()
							.map(|r| r.to_wire())
							.collect(),
					},
				),
			),
		}
	}

	pub fn from_wire(msg: &p4runtime::MulticastGroupEntry) -> MulticastGroupEntry {
		MulticastGroupEntry {
			group_id: msg.multicast_group_id,
			replicas: msg.replicas.iter().map(Replica::from_wire).collect(),
		}
	}
}

/// A clone (mirror) session of the packet replication engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CloneSessionEntry {
	pub session_id: u32,
	pub class_of_service: u32,
	pub packet_length_bytes: i32,
	pub replicas: Vec<Replica>,
}

impl CloneSessionEntry {
	pub fn to_wire(&self) -> p4runtime::PacketReplicationEngineEntry {
		p4runtime::PacketReplicationEngineEntry {
			r#type: Some(
				p4runtime::packet_replication_engine_entry::Type::CloneSessionEntry(
					p4runtime::CloneSessionEntry {
						session_id: self.session_id,
						replicas: self
							.replicas
							.iter()
							.map(|r| r.to_wire())
							.collect(),
						class_of_service: self.class_of_service,
						packet_length_bytes: self.packet_length_bytes,
					},
				),
			),
		}
	}

	pub fn from_wire(msg: &p4runtime::CloneSessionEntry) -> CloneSessionEntry {
		CloneSessionEntry {
			session_id: msg.session_id,
			class_of_service: msg.class_of_service,
			packet_length_bytes: msg.packet_length_bytes,
			replicas: msg.replicas.iter().map(Replica::from_wire).collect(),
		}
	}
}

/// A parser value set and its members.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueSetEntry {
	pub value_set: String,
	pub members: Vec<u128>,
}

impl ValueSetEntry {
	pub fn to_wire(&self, schema: &P4Schema) -> Result<p4runtime::ValueSetEntry> {
		let mut msg = p4runtime::ValueSetEntry::default();
		let mut bitwidth = values::MAX_BITWIDTH;
		if !self.value_set.is_empty() {
			let spec = schema.value_set(self.value_set.as_str())?;
			msg.value_set_id = spec.id;
			bitwidth = spec.bitwidth;
		}
		for member in &self.members {
			msg.members.push(p4runtime::ValueSetMember {
				r#match: vec![p4runtime::FieldMatch {
					field_id: 1,
					field_match_type: Some(
						p4runtime::field_match::FieldMatchType::Exact(
							p4runtime::field_match::Exact {
								value: values::encode_uint(*member, bitwidth)?,
							},
						),
					),
				}],
			});
		}
		Ok(msg)
	}

	pub fn from_wire(
		schema: &P4Schema,
		msg: &p4runtime::ValueSetEntry,
	) -> Result<ValueSetEntry> {
		let mut bitwidth = values::MAX_BITWIDTH;
		let value_set = match msg.value_set_id {
			0 => String::new(),
			id => {
				let spec = schema.value_set(id)?;
				bitwidth = spec.bitwidth;
				spec.alias.clone()
			}
		};
		let mut members = Vec::with_capacity(msg.members.len());
		for member in &msg.members {
			for fm in &member.r#match {
				match &fm.field_match_type {
					Some(p4runtime::field_match::FieldMatchType::Exact(m)) => {
						members.push(values::decode_uint(&m.value, bitwidth)?);
					}
					_ => {
						return Err(Error::SchemaInvalid(
							"value set member is not an exact match".to_string(),
						));
					}
				}
			}
		}
		Ok(ValueSetEntry { value_set, members })
	}
}

fn encode_packet_metadata(
	header: Option<&crate::schema::P4ControllerMetadata>,
	metadata: &[(String, u128)],
	direction: &str,
) -> Result<Vec<p4runtime::PacketMetadata>> {
	let header = match header {
		Some(header) => header,
		None if metadata.is_empty() => return Ok(Vec::new()),
		None => {
			return Err(Error::SchemaUnknown(format!(
				"pipeline declares no {} header",
				direction
			)));
		}
	};
	for (name, _) in metadata {
		if !header.fields.iter().any(|f| &f.name == name) {
			return Err(Error::SchemaUnknown(format!(
				"{} has no metadata field named {:?}",
				direction, name
			)));
		}
	}
	let mut out = Vec::with_capacity(header.fields.len());
	for field in &header.fields {
		let value = metadata
			.iter()
			.find(|(name, _)| name == &field.name)
			.map(|(_, v)| *v)
			.ok_or_else(|| {
				Error::InvalidValue(format!(
					"{}: missing parameter {:?}",
					direction, field.name
				))
			})?;
		out.push(p4runtime::PacketMetadata {
			metadata_id: field.id,
			value: values::encode_uint(value, field.bitwidth)?,
		});
	}
	Ok(out)
}

fn decode_packet_metadata(
	header: Option<&crate::schema::P4ControllerMetadata>,
	metadata: &[p4runtime::PacketMetadata],
	direction: &str,
) -> Result<Vec<(String, u128)>> {
	let header = match header {
		Some(header) => header,
		None if metadata.is_empty() => return Ok(Vec::new()),
		None => {
			return Err(Error::SchemaUnknown(format!(
				"pipeline declares no {} header",
				direction
			)));
		}
	};
	metadata
		.iter()
		.map(|md| {
			let field = header
				.fields
				.iter()
				.find(|f| f.id == md.metadata_id)
				.ok_or_else(|| {
					Error::SchemaUnknown(format!(
						"{} has no metadata field #{}",
						direction, md.metadata_id
					))
				})?;
			Ok((field.name.clone(), values::decode_uint(&md.value, field.bitwidth)?))
		})
		.collect()
}

/// A control-plane-punted packet received on the session stream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PacketIn {
	pub payload: Vec<u8>,
	/// Named fields of the packet-in header.
	pub metadata: Vec<(String, u128)>,
}

impl PacketIn {
	pub fn metadata_value(&self, name: &str) -> Option<u128> {
		self.metadata.iter().find(|(n, _)| n == name).map(|(_, v)| *v)
	}

	pub fn from_wire(schema: &P4Schema, msg: &p4runtime::PacketIn) -> Result<PacketIn> {
		Ok(PacketIn {
			payload: msg.payload.clone(),
			metadata: decode_packet_metadata(
				schema.packet_in_metadata(),
				&msg.metadata,
				"packet_in",
			)?,
		})
	}
}

/// A controller-injected packet sent on the session stream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PacketOut {
	pub payload: Vec<u8>,
	/// Named fields of the packet-out header. Every field the pipeline
	/// declares must be present.
	pub metadata: Vec<(String, u128)>,
}

impl PacketOut {
	pub fn new(payload: impl Into<Vec<u8>>) -> PacketOut {
		PacketOut { payload: payload.into(), metadata: Vec::new() }
	}

	/// Add one metadata field; builder style.
	pub fn metadata_field(
		mut self,
		name: impl Into<String>,
		value: impl Into<u128>,
	) -> Self {
		self.metadata.push((name.into(), value.into()));
		self
	}

	pub fn to_wire(&self, schema: &P4Schema) -> Result<p4runtime::PacketOut> {
		Ok(p4runtime::PacketOut {
			payload: self.payload.clone(),
			metadata: encode_packet_metadata(
				schema.packet_out_metadata(),
				&self.metadata,
				"packet_out",
			)?,
		})
	}
}

/// Notification that table entries idled out.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IdleTimeoutNotification {
	pub timestamp: i64,
	pub table_entries: Vec<TableEntry>,
}

impl IdleTimeoutNotification {
	pub fn from_wire(
		schema: &P4Schema,
		msg: &p4runtime::IdleTimeoutNotification,
	) -> Result<IdleTimeoutNotification> {
		Ok(IdleTimeoutNotification {
			timestamp: msg.timestamp,
			table_entries: msg
				.table_entry
				.iter()
				.map(|te| TableEntry::from_wire(schema, te))
				.collect::<Result<Vec<_>>>()?,
		})
	}
}

/// Tagged union over every entity kind carried by Write/Read.
#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
	TableEntry(TableEntry),
	ActionProfileMember(ActionProfileMember),
	ActionProfileGroup(ActionProfileGroup),
	CounterEntry(CounterEntry),
	DirectCounterEntry(DirectCounterEntry),
	MeterEntry(MeterEntry),
	DirectMeterEntry(DirectMeterEntry),
	RegisterEntry(RegisterEntry),
	DigestEntry(DigestEntry),
	MulticastGroupEntry(MulticastGroupEntry),
	CloneSessionEntry(CloneSessionEntry),
	ValueSetEntry(ValueSetEntry),
}

macro_rules! entity_from {
	($($kind:ident),+) => {
		$(impl From<$kind> for Entity {
			fn from(entry: $kind) -> Entity {
				Entity::$kind(entry)
			}
		})+
	};
}

entity_from!(
	TableEntry,
	ActionProfileMember,
	ActionProfileGroup,
	CounterEntry,
	DirectCounterEntry,
	MeterEntry,
	DirectMeterEntry,
	RegisterEntry,
	DigestEntry,
	MulticastGroupEntry,
	CloneSessionEntry,
	ValueSetEntry
);

impl Entity {
	pub fn to_wire(&self, schema: &P4Schema) -> Result<p4runtime::Entity> {
		use p4runtime::entity::Entity as Wire;
		let entity = match self {
			Entity::TableEntry(e) => Wire::TableEntry(e.to_wire(schema)?),
			Entity::ActionProfileMember(e) => {
				Wire::ActionProfileMember(e.to_wire(schema)?)
			}
			Entity::ActionProfileGroup(e) => {
				Wire::ActionProfileGroup(e.to_wire(schema)?)
			}
			Entity::CounterEntry(e) => Wire::CounterEntry(e.to_wire(schema)?),
			Entity::DirectCounterEntry(e) => {
				Wire::DirectCounterEntry(e.to_wire(schema)?)
			}
			Entity::MeterEntry(e) => Wire::MeterEntry(e.to_wire(schema)?),
			Entity::DirectMeterEntry(e) => {
				Wire::DirectMeterEntry(e.to_wire(schema)?)
			}
			Entity::RegisterEntry(e) => Wire::RegisterEntry(e.to_wire(schema)?),
			Entity::DigestEntry(e) => Wire::DigestEntry(e.to_wire(schema)?),
			Entity::MulticastGroupEntry(e) => {
				Wire::PacketReplicationEngineEntry(e.to_wire())
			}
			Entity::CloneSessionEntry(e) => {
				Wire::PacketReplicationEngineEntry(e.to_wire())
			}
			Entity::ValueSetEntry(e) => Wire::ValueSetEntry(e.to_wire(schema)?),
		};
		Ok(p4runtime::Entity { entity: Some(entity) })
	}

	pub fn from_wire(schema: &P4Schema, msg: &p4runtime::Entity) -> Result<Entity> {
		use p4runtime::entity::Entity as Wire;
		match msg.entity.as_ref().ok_or_else(|| {
			Error::SchemaInvalid("missing entity".to_string())
		})? {
			Wire::TableEntry(e) => {
				Ok(Entity::TableEntry(TableEntry::from_wire(schema, e)?))
			}
			Wire::ActionProfileMember(e) => Ok(Entity::ActionProfileMember(
				ActionProfileMember::from_wire(schema, e)?,
			)),
			Wire::ActionProfileGroup(e) => Ok(Entity::ActionProfileGroup(
				ActionProfileGroup::from_wire(schema, e)?,
			)),
			Wire::CounterEntry(e) => {
				Ok(Entity::CounterEntry(CounterEntry::from_wire(schema, e)?))
			}
			Wire::DirectCounterEntry(e) => Ok(Entity::DirectCounterEntry(
				DirectCounterEntry::from_wire(schema, e)?,
			)),
			Wire::MeterEntry(e) => {
				Ok(Entity::MeterEntry(MeterEntry::from_wire(schema, e)?))
			}
			Wire::DirectMeterEntry(e) => Ok(Entity::DirectMeterEntry(
				DirectMeterEntry::from_wire(schema, e)?,
			)),
			Wire::RegisterEntry(e) => {
				Ok(Entity::RegisterEntry(RegisterEntry::from_wire(schema, e)?))
			}
			Wire::DigestEntry(e) => {
				Ok(Entity::DigestEntry(DigestEntry::from_wire(schema, e)?))
			}
			Wire::PacketReplicationEngineEntry(e) => {
				use p4runtime::packet_replication_engine_entry::Type;
				match e.r#type.as_ref().ok_or_else(|| {
					Error::SchemaInvalid(
						"missing packet_replication_engine type".to_string(),
					)
				})? {
					Type::MulticastGroupEntry(m) => Ok(
						Entity::MulticastGroupEntry(MulticastGroupEntry::from_wire(m)),
					),
					Type::CloneSessionEntry(c) => Ok(Entity::CloneSessionEntry(
						CloneSessionEntry::from_wire(c),
					)),
				}
			}
			Wire::ValueSetEntry(e) => {
				Ok(Entity::ValueSetEntry(ValueSetEntry::from_wire(schema, e)?))
			}
			Wire::ExternEntry(_) => Err(Error::SchemaInvalid(
				"extern entries are not supported".to_string(),
			)),
		}
	}
}

/// Build a Write batch from entities, all with the same update type.
pub fn encode_updates(
	update_type: UpdateType,
	entities: &[Entity],
	schema: &P4Schema,
) -> Result<Vec<p4runtime::Update>> {
	entities
		.iter()
		.map(|entity| {
			Ok(p4runtime::Update {
				r#type: p4runtime::update::Type::from(update_type) as i32,
				entity: Some(entity.to_wire(schema)?),
			})
		})
		.collect()
}

/// Metadata lookup helper shared by PacketIn tests and user code.
pub fn metadata_map(metadata: &[(String, u128)]) -> HashMap<&str, u128> {
	metadata.iter().map(|(name, value)| (name.as_str(), *value)).collect()
}
