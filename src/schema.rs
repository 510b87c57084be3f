//! Pipeline schema derived from P4Info.
//!
//! A [`P4Schema`] is built once from the pipeline's self-description and is
//! immutable afterwards, so it can be shared freely between tasks. It maps
//! ids to names and back for every object kind, keeps the ordered match-key
//! list per table, and validates cross-references at load time.

use std::collections::HashMap;
use std::fmt::Write as _;

use itertools::Itertools;

use crate::error::{Error, Result};
use crate::proto::p4info;
use crate::proto::p4runtime;
use crate::values;

/// A table/action/etc reference: either a numeric id or a name/alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum P4Ref<'a> {
	Id(u32),
	Name(&'a str),
}

impl From<u32> for P4Ref<'_> {
	fn from(id: u32) -> Self {
		P4Ref::Id(id)
	}
}

impl<'a> From<&'a str> for P4Ref<'a> {
	fn from(name: &'a str) -> Self {
		P4Ref::Name(name)
	}
}

impl std::fmt::Display for P4Ref<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			P4Ref::Id(id) => write!(f, "#{}", id),
			P4Ref::Name(name) => write!(f, "{:?}", name),
		}
	}
}

/// Match behavior of a table key field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum P4MatchType {
	Exact,
	Lpm,
	Ternary,
	Range,
	Optional,
}

impl P4MatchType {
	/// True if entries of a table containing this field require a priority.
	pub fn needs_priority(self) -> bool {
		matches!(
			self,
			P4MatchType::Ternary | P4MatchType::Range | P4MatchType::Optional
		)
	}
}

/// One match key field of a table.
#[derive(Debug, Clone)]
pub struct P4MatchField {
	pub id: u32,
	pub name: String,
	pub bitwidth: u32,
	pub match_type: P4MatchType,
}

/// Reference from a table to one of its allowed actions.
#[derive(Debug, Clone)]
pub struct P4ActionRef {
	pub id: u32,
	/// The action may be used as the table's default action.
	pub may_be_default: bool,
	/// The action may be used in regular table entries.
	pub may_be_entry: bool,
}

/// A match-action table.
#[derive(Debug, Clone)]
pub struct P4Table {
	pub id: u32,
	pub name: String,
	pub alias: String,
	/// Match key, ordered by field id.
	pub match_fields: Vec<P4MatchField>,
	pub action_refs: Vec<P4ActionRef>,
	pub const_default_action_id: Option<u32>,
	/// Action profile implementing this table, if it is indirect.
	pub action_profile_id: Option<u32>,
	pub direct_counter_id: Option<u32>,
	pub direct_meter_id: Option<u32>,
	pub size: i64,
	/// Table notifies the controller on entry idle timeout.
	pub idle_notify: bool,
	pub is_const: bool,
}

impl P4Table {
	/// True if entries of this table carry a priority.
	pub fn needs_priority(&self) -> bool {
		self.match_fields.iter().any(|mf| mf.match_type.needs_priority())
	}

	/// Look up a match field by name.
	pub fn match_field(&self, name: &str) -> Result<&P4MatchField> {
		self.match_fields
			.iter()
			.find(|mf| mf.name == name)
			.ok_or_else(|| {
				Error::SchemaUnknown(format!(
					"table {:?} has no match field named {:?}",
					self.alias, name
				))
			})
	}

	fn match_field_by_id(&self, id: u32) -> Result<&P4MatchField> {
		self.match_fields.iter().find(|mf| mf.id == id).ok_or_else(|| {
			Error::SchemaUnknown(format!(
				"table {:?} has no match field #{}",
				self.alias, id
			))
		})
	}
}

/// One runtime parameter of an action.
#[derive(Debug, Clone)]
pub struct P4ActionParam {
	pub id: u32,
	pub name: String,
	pub bitwidth: u32,
}

/// An action, with its ordered parameter list.
#[derive(Debug, Clone)]
pub struct P4Action {
	pub id: u32,
	pub name: String,
	pub alias: String,
	pub params: Vec<P4ActionParam>,
}

impl P4Action {
	/// Look up an action parameter by name.
	pub fn param(&self, name: &str) -> Result<&P4ActionParam> {
		self.params.iter().find(|p| p.name == name).ok_or_else(|| {
			Error::SchemaUnknown(format!(
				"action {:?} has no parameter named {:?}",
				self.alias, name
			))
		})
	}

	fn param_by_id(&self, id: u32) -> Result<&P4ActionParam> {
		self.params.iter().find(|p| p.id == id).ok_or_else(|| {
			Error::SchemaUnknown(format!(
				"action {:?} has no parameter #{}",
				self.alias, id
			))
		})
	}
}

/// An action profile (member/group indirection for its tables).
#[derive(Debug, Clone)]
pub struct P4ActionProfile {
	pub id: u32,
	pub name: String,
	pub alias: String,
	pub table_ids: Vec<u32>,
	pub with_selector: bool,
	pub size: i64,
	pub max_group_size: i32,
}

/// An indexed counter array.
#[derive(Debug, Clone)]
pub struct P4Counter {
	pub id: u32,
	pub name: String,
	pub alias: String,
	pub size: i64,
}

/// A counter attached directly to a table.
#[derive(Debug, Clone)]
pub struct P4DirectCounter {
	pub id: u32,
	pub name: String,
	pub alias: String,
	pub direct_table_id: u32,
}

/// An indexed meter array.
#[derive(Debug, Clone)]
pub struct P4Meter {
	pub id: u32,
	pub name: String,
	pub alias: String,
	pub size: i64,
}

/// A meter attached directly to a table.
#[derive(Debug, Clone)]
pub struct P4DirectMeter {
	pub id: u32,
	pub name: String,
	pub alias: String,
	pub direct_table_id: u32,
}

/// A register array.
#[derive(Debug, Clone)]
pub struct P4Register {
	pub id: u32,
	pub name: String,
	pub alias: String,
	/// Bitwidth of each element, when the register holds plain bitstrings.
	pub bitwidth: Option<u32>,
	pub size: i64,
}

/// A digest declaration.
#[derive(Debug, Clone)]
pub struct P4Digest {
	pub id: u32,
	pub name: String,
	pub alias: String,
}

/// A parser value set.
#[derive(Debug, Clone)]
pub struct P4ValueSet {
	pub id: u32,
	pub name: String,
	pub alias: String,
	pub bitwidth: u32,
	pub size: i64,
}

/// One field of a controller packet-in/out header.
#[derive(Debug, Clone)]
pub struct P4MetadataField {
	pub id: u32,
	pub name: String,
	pub bitwidth: u32,
}

/// The @controller_header("packet_in"/"packet_out") declaration.
#[derive(Debug, Clone)]
pub struct P4ControllerMetadata {
	pub id: u32,
	pub name: String,
	/// Fields in header declaration order.
	pub fields: Vec<P4MetadataField>,
}

/// Per-kind id/name index. Aliases resolve like names; a name shared by two
/// objects of the same kind resolves to neither (ambiguous).
#[derive(Debug)]
struct ObjectIndex<T> {
	items: Vec<T>,
	by_id: HashMap<u32, usize>,
	by_name: HashMap<String, Option<usize>>,
}

impl<T> Default for ObjectIndex<T> {
	fn default() -> Self {
		ObjectIndex {
			items: Vec::new(),
			by_id: HashMap::new(),
			by_name: HashMap::new(),
		}
	}
}

impl<T> ObjectIndex<T> {
	fn insert(
		&mut self,
		kind: &str,
		id: u32,
		name: &str,
		alias: &str,
		item: T,
	) -> Result<()> {
		if id == 0 {
			return Err(Error::SchemaInvalid(format!(
				"{} {:?} has id 0",
				kind, name
			)));
		}
		let slot = self.items.len();
		if self.by_id.insert(id, slot).is_some() {
			return Err(Error::SchemaInvalid(format!(
				"duplicate {} id {}",
				kind, id
			)));
		}
		for key in [name, alias] {
			if key.is_empty() {
				continue;
			}
			match self.by_name.get_mut(key) {
				// same object under name == alias
				Some(Some(existing)) if *existing == slot => {}
				Some(existing) => *existing = None,
				None => {
					self.by_name.insert(key.to_string(), Some(slot));
				}
			}
		}
		self.items.push(item);
		Ok(())
	}

	fn get(&self, kind: &str, key: P4Ref<'_>) -> Result<&T> {
		match key {
			P4Ref::Id(id) => {
				self.by_id.get(&id).map(|slot| &self.items[*slot]).ok_or_else(
					|| {
						Error::SchemaUnknown(format!("no {} with id {}", kind, id))
					},
				)
			}
			P4Ref::Name(name) => match self.by_name.get(name) {
				Some(Some(slot)) => Ok(&self.items[*slot]),
				Some(None) => Err(Error::SchemaUnknown(format!(
					"{} name {:?} is ambiguous",
					kind, name
				))),
				None => Err(Error::SchemaUnknown(format!(
					"no {} named {:?}",
					kind, name
				))),
			},
		}
	}

	fn iter(&self) -> impl Iterator<Item = &T> {
		self.items.iter()
	}
}

/// Immutable schema snapshot built from a pipeline's P4Info.
#[derive(Debug, Default)]
pub struct P4Schema {
	tables: ObjectIndex<P4Table>,
	actions: ObjectIndex<P4Action>,
	action_profiles: ObjectIndex<P4ActionProfile>,
	counters: ObjectIndex<P4Counter>,
	direct_counters: ObjectIndex<P4DirectCounter>,
	meters: ObjectIndex<P4Meter>,
	direct_meters: ObjectIndex<P4DirectMeter>,
	registers: ObjectIndex<P4Register>,
	digests: ObjectIndex<P4Digest>,
	value_sets: ObjectIndex<P4ValueSet>,
	packet_in: Option<P4ControllerMetadata>,
	packet_out: Option<P4ControllerMetadata>,
	/// Name of the pipeline package, if the P4Info carries one.
	pub pkg_name: String,
	/// Target architecture declared by the P4Info ("v1model", "psa", ...).
	pub arch: String,
}

fn preamble<'a>(
	kind: &str,
	preamble: &'a Option<p4info::Preamble>,
) -> Result<&'a p4info::Preamble> {
	preamble.as_ref().ok_or_else(|| {
		Error::SchemaInvalid(format!("{} without preamble", kind))
	})
}

fn check_bitwidth(owner: &str, name: &str, bitwidth: i32) -> Result<u32> {
	if bitwidth < 1 || bitwidth as u32 > values::MAX_BITWIDTH {
		return Err(Error::SchemaInvalid(format!(
			"{} {:?}: bitwidth {} out of range",
			owner, name, bitwidth
		)));
	}
	Ok(bitwidth as u32)
}

impl P4Schema {
	/// Build and validate a schema from a P4Info message.
	pub fn new(p4info: &p4info::P4Info) -> Result<P4Schema> {
		let mut schema = P4Schema::default();
		if let Some(pkg) = &p4info.pkg_info {
			schema.pkg_name = pkg.name.clone();
			schema.arch = pkg.arch.clone();
		}

		for action in &p4info.actions {
			let pre = preamble("action", &action.preamble)?;
			let params = action
				.params
				.iter()
				.map(|p| {
					Ok(P4ActionParam {
						id: p.id,
						name: p.name.clone(),
						bitwidth: check_bitwidth("action", &p.name, p.bitwidth)?,
					})
				})
				.collect::<Result<Vec<_>>>()?;
			schema.actions.insert(
				"action",
				pre.id,
				&pre.name,
				&pre.alias,
				P4Action {
					id: pre.id,
					name: pre.name.clone(),
					alias: effective_alias(pre),
					params,
				},
			)?;
		}

		for profile in &p4info.action_profiles {
			let pre = preamble("action profile", &profile.preamble)?;
			schema.action_profiles.insert(
				"action profile",
				pre.id,
				&pre.name,
				&pre.alias,
				P4ActionProfile {
					id: pre.id,
					name: pre.name.clone(),
					alias: effective_alias(pre),
					table_ids: profile.table_ids.clone(),
					with_selector: profile.with_selector,
					size: profile.size,
					max_group_size: profile.max_group_size,
				},
			)?;
		}

		for counter in &p4info.counters {
			let pre = preamble("counter", &counter.preamble)?;
			schema.counters.insert(
				"counter",
				pre.id,
				&pre.name,
				&pre.alias,
				P4Counter {
					id: pre.id,
					name: pre.name.clone(),
					alias: effective_alias(pre),
					size: counter.size,
				},
			)?;
		}

		for counter in &p4info.direct_counters {
			let pre = preamble("direct counter", &counter.preamble)?;
			schema.direct_counters.insert(
				"direct counter",
				pre.id,
				&pre.name,
				&pre.alias,
				P4DirectCounter {
					id: pre.id,
					name: pre.name.clone(),
					alias: effective_alias(pre),
					direct_table_id: counter.direct_table_id,
				},
			)?;
		}

		for meter in &p4info.meters {
			let pre = preamble("meter", &meter.preamble)?;
			schema.meters.insert(
				"meter",
				pre.id,
				&pre.name,
				&pre.alias,
				P4Meter {
					id: pre.id,
					name: pre.name.clone(),
					alias: effective_alias(pre),
					size: meter.size,
				},
			)?;
		}

		for meter in &p4info.direct_meters {
			let pre = preamble("direct meter", &meter.preamble)?;
			schema.direct_meters.insert(
				"direct meter",
				pre.id,
				&pre.name,
				&pre.alias,
				P4DirectMeter {
					id: pre.id,
					name: pre.name.clone(),
					alias: effective_alias(pre),
					direct_table_id: meter.direct_table_id,
				},
			)?;
		}

		for register in &p4info.registers {
			let pre = preamble("register", &register.preamble)?;
			schema.registers.insert(
				"register",
				pre.id,
				&pre.name,
				&pre.alias,
				P4Register {
					id: pre.id,
					name: pre.name.clone(),
					alias: effective_alias(pre),
					bitwidth: register_bitwidth(&register.type_spec),
					size: register.size,
				},
			)?;
		}

		for digest in &p4info.digests {
			let pre = preamble("digest", &digest.preamble)?;
			schema.digests.insert(
				"digest",
				pre.id,
				&pre.name,
				&pre.alias,
				P4Digest {
					id: pre.id,
					name: pre.name.clone(),
					alias: effective_alias(pre),
				},
			)?;
		}

		for value_set in &p4info.value_sets {
			let pre = preamble("value set", &value_set.preamble)?;
			let field = value_set.r#match.as_ref().ok_or_else(|| {
				Error::SchemaInvalid(format!(
					"value set {:?} without match spec",
					pre.name
				))
			})?;
			schema.value_sets.insert(
				"value set",
				pre.id,
				&pre.name,
				&pre.alias,
				P4ValueSet {
					id: pre.id,
					name: pre.name.clone(),
					alias: effective_alias(pre),
					bitwidth: check_bitwidth(
						"value set",
						&pre.name,
						field.bitwidth,
					)?,
					size: value_set.size,
				},
			)?;
		}

		for table in &p4info.tables {
			let pre = preamble("table", &table.preamble)?;
			schema.insert_table(table, pre)?;
		}

		for cpm in &p4info.controller_packet_metadata {
			let pre = preamble("controller packet metadata", &cpm.preamble)?;
			let fields = cpm
				.metadata
				.iter()
				.map(|m| {
					Ok(P4MetadataField {
						id: m.id,
						name: m.name.clone(),
						bitwidth: check_bitwidth("metadata", &m.name, m.bitwidth)?,
					})
				})
				.collect::<Result<Vec<_>>>()?;
			let header = P4ControllerMetadata {
				id: pre.id,
				name: pre.name.clone(),
				fields,
			};
			match pre.name.as_str() {
				"packet_in" => schema.packet_in = Some(header),
				"packet_out" => schema.packet_out = Some(header),
				other => {
					return Err(Error::SchemaInvalid(format!(
						"unknown controller header {:?}",
						other
					)));
				}
			}
		}

		schema.validate_cross_references()?;
		Ok(schema)
	}

	fn insert_table(
		&mut self,
		table: &p4info::Table,
		pre: &p4info::Preamble,
	) -> Result<()> {
		let mut match_fields = Vec::with_capacity(table.match_fields.len());
		for mf in &table.match_fields {
			let match_type = match mf.r#match {
				Some(p4info::match_field::Match::MatchType(mt)) => {
					match p4info::match_field::MatchType::from_i32(mt) {
						Some(p4info::match_field::MatchType::Exact) => {
							P4MatchType::Exact
						}
						Some(p4info::match_field::MatchType::Lpm) => {
							P4MatchType::Lpm
						}
						Some(p4info::match_field::MatchType::Ternary) => {
							P4MatchType::Ternary
						}
						Some(p4info::match_field::MatchType::Range) => {
							P4MatchType::Range
						}
						Some(p4info::match_field::MatchType::Optional) => {
							P4MatchType::Optional
						}
						_ => {
							return Err(Error::SchemaInvalid(format!(
								"table {:?} field {:?}: unsupported match type",
								pre.name, mf.name
							)));
						}
					}
				}
				_ => {
					return Err(Error::SchemaInvalid(format!(
						"table {:?} field {:?}: unsupported match type",
						pre.name, mf.name
					)));
				}
			};
			match_fields.push(P4MatchField {
				id: mf.id,
				name: mf.name.clone(),
				bitwidth: check_bitwidth(&pre.name, &mf.name, mf.bitwidth)?,
				match_type,
			});
		}
		// the match key is ordered by field id
		match_fields.sort_by_key(|mf| mf.id);
		if !match_fields.iter().map(|mf| mf.id).all_unique() {
			return Err(Error::SchemaInvalid(format!(
				"table {:?} has duplicate match field ids",
				pre.name
			)));
		}

		let action_refs = table
			.action_refs
			.iter()
			.map(|ar| {
				let scope = p4info::action_ref::Scope::from_i32(ar.scope)
					.unwrap_or(p4info::action_ref::Scope::TableAndDefault);
				P4ActionRef {
					id: ar.id,
					may_be_default: scope != p4info::action_ref::Scope::TableOnly,
					may_be_entry: scope != p4info::action_ref::Scope::DefaultOnly,
				}
			})
			.collect();

		let mut direct_counter_id = None;
		let mut direct_meter_id = None;
		for res_id in &table.direct_resource_ids {
			if self.direct_counters.by_id.contains_key(res_id) {
				direct_counter_id = Some(*res_id);
			} else if self.direct_meters.by_id.contains_key(res_id) {
				direct_meter_id = Some(*res_id);
			} else {
				return Err(Error::SchemaInvalid(format!(
					"table {:?}: dangling direct resource id {}",
					pre.name, res_id
				)));
			}
		}

		self.tables.insert(
			"table",
			pre.id,
			&pre.name,
			&pre.alias,
			P4Table {
				id: pre.id,
				name: pre.name.clone(),
				alias: effective_alias(pre),
				match_fields,
				action_refs,
				const_default_action_id: match table.const_default_action_id {
					0 => None,
					id => Some(id),
				},
				action_profile_id: match table.implementation_id {
					0 => None,
					id => Some(id),
				},
				direct_counter_id,
				direct_meter_id,
				size: table.size,
				idle_notify: table.idle_timeout_behavior
					== p4info::table::IdleTimeoutBehavior::NotifyControl as i32,
				is_const: table.is_const_table,
			},
		)
	}

	fn validate_cross_references(&self) -> Result<()> {
		for table in self.tables.iter() {
			for ar in &table.action_refs {
				self.actions.get("action", P4Ref::Id(ar.id)).map_err(|_| {
					Error::SchemaInvalid(format!(
						"table {:?}: dangling action id {}",
						table.name, ar.id
					))
				})?;
			}
			if let Some(id) = table.const_default_action_id {
				self.actions.get("action", P4Ref::Id(id)).map_err(|_| {
					Error::SchemaInvalid(format!(
						"table {:?}: dangling const default action id {}",
						table.name, id
					))
				})?;
			}
			if let Some(id) = table.action_profile_id {
				self.action_profiles
					.get("action profile", P4Ref::Id(id))
					.map_err(|_| {
						Error::SchemaInvalid(format!(
							"table {:?}: dangling implementation id {}",
							table.name, id
						))
					})?;
			}
		}
		for counter in self.direct_counters.iter() {
			self.tables
				.get("table", P4Ref::Id(counter.direct_table_id))
				.map_err(|_| {
					Error::SchemaInvalid(format!(
						"direct counter {:?}: dangling table id {}",
						counter.name, counter.direct_table_id
					))
				})?;
		}
		for meter in self.direct_meters.iter() {
			self.tables
				.get("table", P4Ref::Id(meter.direct_table_id))
				.map_err(|_| {
					Error::SchemaInvalid(format!(
						"direct meter {:?}: dangling table id {}",
						meter.name, meter.direct_table_id
					))
				})?;
		}
		for profile in self.action_profiles.iter() {
			for table_id in &profile.table_ids {
				self.tables.get("table", P4Ref::Id(*table_id)).map_err(|_| {
					Error::SchemaInvalid(format!(
						"action profile {:?}: dangling table id {}",
						profile.name, table_id
					))
				})?;
			}
		}
		Ok(())
	}

	/// Look up a table by name, alias or id.
	pub fn table<'a>(&self, key: impl Into<P4Ref<'a>>) -> Result<&P4Table> {
		self.tables.get("table", key.into())
	}

	/// Look up an action by name, alias or id.
	pub fn action<'a>(&self, key: impl Into<P4Ref<'a>>) -> Result<&P4Action> {
		self.actions.get("action", key.into())
	}

	/// Look up an action profile by name, alias or id.
	pub fn action_profile<'a>(
		&self,
		key: impl Into<P4Ref<'a>>,
	) -> Result<&P4ActionProfile> {
		self.action_profiles.get("action profile", key.into())
	}

	/// Look up an indexed counter by name, alias or id.
	pub fn counter<'a>(&self, key: impl Into<P4Ref<'a>>) -> Result<&P4Counter> {
		self.counters.get("counter", key.into())
	}

	/// Look up a direct counter by name, alias or id.
	pub fn direct_counter<'a>(
		&self,
		key: impl Into<P4Ref<'a>>,
	) -> Result<&P4DirectCounter> {
		self.direct_counters.get("direct counter", key.into())
	}

	/// Look up an indexed meter by name, alias or id.
	pub fn meter<'a>(&self, key: impl Into<P4Ref<'a>>) -> Result<&P4Meter> {
		self.meters.get("meter", key.into())
	}

	/// Look up a direct meter by name, alias or id.
	pub fn direct_meter<'a>(
		&self,
		key: impl Into<P4Ref<'a>>,
	) -> Result<&P4DirectMeter> {
		self.direct_meters.get("direct meter", key.into())
	}

	/// Look up a register by name, alias or id.
	pub fn register<'a>(&self, key: impl Into<P4Ref<'a>>) -> Result<&P4Register> {
		self.registers.get("register", key.into())
	}

	/// Look up a digest by name, alias or id.
	pub fn digest<'a>(&self, key: impl Into<P4Ref<'a>>) -> Result<&P4Digest> {
		self.digests.get("digest", key.into())
	}

	/// Look up a value set by name, alias or id.
	pub fn value_set<'a>(&self, key: impl Into<P4Ref<'a>>) -> Result<&P4ValueSet> {
		self.value_sets.get("value set", key.into())
	}

	/// The packet-in controller header, if the pipeline declares one.
	pub fn packet_in_metadata(&self) -> Option<&P4ControllerMetadata> {
		self.packet_in.as_ref()
	}

	/// The packet-out controller header, if the pipeline declares one.
	pub fn packet_out_metadata(&self) -> Option<&P4ControllerMetadata> {
		self.packet_out.as_ref()
	}

	/// All tables, in declaration order.
	pub fn tables(&self) -> impl Iterator<Item = &P4Table> {
		self.tables.iter()
	}

	/// All digests, in declaration order.
	pub fn digests(&self) -> impl Iterator<Item = &P4Digest> {
		self.digests.iter()
	}

	/// Render a wire table entry as a single human-readable line:
	///
	/// ```text
	/// ipv4_lpm dstAddr=0xa000000/24 priority=10 ipv4_forward(dstAddr=0xa000001, port=1)
	/// ```
	///
	/// Wildcarded fields are omitted, like on the wire. The output parses
	/// back with [`P4Schema::parse_entry`].
	pub fn format_entry(&self, entry: &p4runtime::TableEntry) -> Result<String> {
		let table = self.table(entry.table_id)?;
		let mut out = table.alias.clone();
		for fm in &entry.r#match {
			let field = table.match_field_by_id(fm.field_id)?;
			write!(out, " {}=", field.name).unwrap();
			match &fm.field_match_type {
				Some(p4runtime::field_match::FieldMatchType::Exact(m)) => {
					let v = values::decode_uint(&m.value, field.bitwidth)?;
					write!(out, "{:#x}", v).unwrap();
				}
				Some(p4runtime::field_match::FieldMatchType::Lpm(m)) => {
					let v = values::decode_uint(&m.value, field.bitwidth)?;
					write!(out, "{:#x}/{}", v, m.prefix_len).unwrap();
				}
				Some(p4runtime::field_match::FieldMatchType::Ternary(m)) => {
					let v = values::decode_uint(&m.value, field.bitwidth)?;
					let mask = values::decode_uint(&m.mask, field.bitwidth)?;
					write!(out, "{:#x}&&&{:#x}", v, mask).unwrap();
				}
				Some(p4runtime::field_match::FieldMatchType::Range(m)) => {
					let low = values::decode_uint(&m.low, field.bitwidth)?;
					let high = values::decode_uint(&m.high, field.bitwidth)?;
					write!(out, "{:#x}..{:#x}", low, high).unwrap();
				}
				Some(p4runtime::field_match::FieldMatchType::Optional(m)) => {
					let v = values::decode_uint(&m.value, field.bitwidth)?;
					write!(out, "{:#x}", v).unwrap();
				}
				_ => {
					return Err(Error::SchemaInvalid(format!(
						"field {:?}: unsupported match kind on the wire",
						field.name
					)));
				}
			}
		}
		if entry.priority != 0 {
			write!(out, " priority={}", entry.priority).unwrap();
		}
		if let Some(action) = &entry.action {
			if let Some(p4runtime::table_action::Type::Action(a)) = &action.r#type
			{
				let spec = self.action(a.action_id)?;
				write!(out, " {}(", spec.alias).unwrap();
				for (i, param) in a.params.iter().enumerate() {
					let p = spec.param_by_id(param.param_id)?;
					let v = values::decode_uint(&param.value, p.bitwidth)?;
					if i > 0 {
						out.push_str(", ");
					}
					write!(out, "{}={:#x}", p.name, v).unwrap();
				}
				out.push(')');
			}
		}
		Ok(out)
	}

	/// Parse the single-line entry format produced by
	/// [`P4Schema::format_entry`] back into a wire table entry.
	pub fn parse_entry(&self, text: &str) -> Result<p4runtime::TableEntry> {
		let text = text.trim();
		let (head, action_text) = match text.find('(') {
			Some(open) => {
				let close = text.rfind(')').ok_or_else(|| {
					Error::InvalidValue(format!("unbalanced parens in {:?}", text))
				})?;
				let action_start =
					text[..open].rfind(' ').ok_or_else(|| {
						Error::InvalidValue(format!(
							"missing table name in {:?}",
							text
						))
					})?;
				(
					&text[..action_start],
					Some((&text[action_start + 1..open], &text[open + 1..close])),
				)
			}
			None => (text, None),
		};

		let mut words = head.split_whitespace();
		let table_name = words.next().ok_or_else(|| {
			Error::InvalidValue("empty entry text".to_string())
		})?;
		let table = self.table(table_name)?;

		let mut entry = p4runtime::TableEntry {
			table_id: table.id,
			..Default::default()
		};
		for word in words {
			let (name, value) = word.split_once('=').ok_or_else(|| {
				Error::InvalidValue(format!("expected name=value, got {:?}", word))
			})?;
			if name == "priority" {
				entry.priority = value.parse().map_err(|_| {
					Error::InvalidValue(format!("bad priority {:?}", value))
				})?;
				continue;
			}
			let field = table.match_field(name)?;
			let fm = parse_field_match(field, value)?;
			if let Some(fm) = fm {
				entry.r#match.push(fm);
			}
		}

		if let Some((action_name, params_text)) = action_text {
			let spec = self.action(action_name)?;
			let mut action = p4runtime::Action {
				action_id: spec.id,
				..Default::default()
			};
			for part in params_text.split(',') {
				let part = part.trim();
				if part.is_empty() {
					continue;
				}
				let (name, value) = part.split_once('=').ok_or_else(|| {
					Error::InvalidValue(format!(
						"expected param=value, got {:?}",
						part
					))
				})?;
				let param = spec.param(name.trim())?;
				let value = parse_int(value)?;
				action.params.push(p4runtime::action::Param {
					param_id: param.id,
					value: values::encode_uint(value, param.bitwidth)?,
				});
			}
			entry.action = Some(p4runtime::TableAction {
				r#type: Some(p4runtime::table_action::Type::Action(action)),
			});
		}
		Ok(entry)
	}
}

fn effective_alias(pre: &p4info::Preamble) -> String {
	if pre.alias.is_empty() {
		pre.name.clone()
	} else {
		pre.alias.clone()
	}
}

fn register_bitwidth(spec: &Option<p4info::P4DataTypeSpec>) -> Option<u32> {
	use p4info::p4_bitstring_like_type_spec::TypeSpec as Bits;
	use p4info::p4_data_type_spec::TypeSpec;
	match spec.as_ref()?.type_spec.as_ref()? {
		TypeSpec::Bitstring(bits) => match bits.type_spec.as_ref()? {
			Bits::Bit(b) => Some(b.bitwidth as u32),
			Bits::Int(i) => Some(i.bitwidth as u32),
			Bits::Varbit(v) => Some(v.max_bitwidth as u32),
		},
	}
}

fn parse_int(text: &str) -> Result<u128> {
	let text = text.trim();
	let parsed = if let Some(hex) = text.strip_prefix("0x") {
		u128::from_str_radix(hex, 16)
	} else {
		text.parse()
	};
	parsed.map_err(|_| Error::InvalidValue(format!("bad integer {:?}", text)))
}

fn parse_field_match(
	field: &P4MatchField,
	value: &str,
) -> Result<Option<p4runtime::FieldMatch>> {
	let field_match_type = match field.match_type {
		P4MatchType::Exact => {
			Some(p4runtime::field_match::FieldMatchType::Exact(
				p4runtime::field_match::Exact {
					value: values::encode_uint(parse_int(value)?, field.bitwidth)?,
				},
			))
		}
		P4MatchType::Optional => {
			Some(p4runtime::field_match::FieldMatchType::Optional(
				p4runtime::field_match::Optional {
					value: values::encode_uint(parse_int(value)?, field.bitwidth)?,
				},
			))
		}
		P4MatchType::Lpm => {
			let (v, plen) = match value.split_once('/') {
				Some((v, plen)) => (
					parse_int(v)?,
					plen.parse::<u32>().map_err(|_| {
						Error::InvalidValue(format!("bad prefix {:?}", plen))
					})?,
				),
				None => (parse_int(value)?, field.bitwidth),
			};
			values::encode_lpm(v, plen, field.bitwidth)?.map(|(value, plen)| {
				p4runtime::field_match::FieldMatchType::Lpm(
					p4runtime::field_match::Lpm { value, prefix_len: plen },
				)
			})
		}
		P4MatchType::Ternary => {
			let (v, mask) = match value.split_once("&&&") {
				Some((v, mask)) => (parse_int(v)?, parse_int(mask)?),
				None => (parse_int(value)?, values::all_ones(field.bitwidth)),
			};
			values::encode_ternary(v, mask, field.bitwidth)?.map(
				|(value, mask)| {
					p4runtime::field_match::FieldMatchType::Ternary(
						p4runtime::field_match::Ternary { value, mask },
					)
				},
			)
		}
		P4MatchType::Range => {
			let (low, high) = match value.split_once("..") {
				Some((low, high)) => (parse_int(low)?, parse_int(high)?),
				None => {
					let v = parse_int(value)?;
					(v, v)
				}
			};
			values::encode_range(low, high, field.bitwidth)?.map(
				|(low, high)| {
					p4runtime::field_match::FieldMatchType::Range(
						p4runtime::field_match::Range { low, high },
					)
				},
			)
		}
	};
	Ok(field_match_type.map(|fmt| p4runtime::FieldMatch {
		field_id: field.id,
		field_match_type: Some(fmt),
	}))
}
