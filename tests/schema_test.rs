//! Schema construction, validation and lookup behavior.

mod common;

use finsy::proto::p4info;
use finsy::schema::P4MatchType;
use finsy::{Error, P4Schema};

use common::basic_p4info;

#[test]
fn lookups_by_name_alias_and_id() {
	let schema = common::basic_schema();
	let by_alias = schema.table("ipv4_lpm").unwrap();
	let by_name = schema.table("MyIngress.ipv4_lpm").unwrap();
	let by_id = schema.table(common::IPV4_LPM).unwrap();
	assert_eq!(by_alias.id, by_name.id);
	assert_eq!(by_alias.id, by_id.id);

	assert!(matches!(
		schema.table("nope"),
		Err(Error::SchemaUnknown(_))
	));
	assert!(matches!(schema.table(99u32), Err(Error::SchemaUnknown(_))));

	let action = schema.action("ipv4_forward").unwrap();
	assert_eq!(action.params.len(), 2);
	assert_eq!(action.param("port").unwrap().bitwidth, 9);

	assert_eq!(
		schema.action_profile("hashed_selector").unwrap().max_group_size,
		16
	);
	assert_eq!(schema.counter("other_counter").unwrap().size, 128);
	assert_eq!(
		schema.direct_counter("ipv4_counter").unwrap().direct_table_id,
		common::IPV4_LPM
	);
	assert_eq!(schema.register("counter_bloom_filter").unwrap().bitwidth, Some(32));
	assert_eq!(schema.digest("Digest_t").unwrap().id, common::DIGEST_T);
	assert_eq!(schema.value_set("pvs").unwrap().bitwidth, 8);
}

#[test]
fn table_shape_is_derived_from_p4info() {
	let schema = common::basic_schema();
	let lpm = schema.table("ipv4_lpm").unwrap();
	assert!(!lpm.needs_priority());
	assert!(lpm.idle_notify);
	assert_eq!(lpm.const_default_action_id, Some(common::NO_ACTION));
	assert_eq!(lpm.direct_counter_id, Some(common::IPV4_COUNTER));
	assert_eq!(lpm.direct_meter_id, Some(common::IPV4_METER));
	assert_eq!(lpm.size, 1024);

	let acl = schema.table("acl").unwrap();
	assert!(acl.needs_priority());
	assert_eq!(acl.match_fields.len(), 3);
	assert_eq!(acl.match_fields[0].match_type, P4MatchType::Ternary);

	let indirect = schema.table("indirect").unwrap();
	assert_eq!(indirect.action_profile_id, Some(common::HASHED_SELECTOR));
}

#[test]
fn match_key_is_ordered_by_field_id() {
	let mut p4info = basic_p4info();
	// declaration order scrambled; the schema must sort by id
	p4info.tables[1].match_fields.reverse();
	let schema = P4Schema::new(&p4info).unwrap();
	let acl = schema.table("acl").unwrap();
	let ids: Vec<u32> = acl.match_fields.iter().map(|mf| mf.id).collect();
	assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn duplicate_ids_are_invalid() {
	let mut p4info = basic_p4info();
	let dup = p4info.tables[0].clone();
	p4info.tables.push(dup);
	assert!(matches!(
		P4Schema::new(&p4info),
		Err(Error::SchemaInvalid(_))
	));
}

#[test]
fn dangling_action_ref_is_invalid() {
	let mut p4info = basic_p4info();
	p4info.tables[0]
		.action_refs
		.push(p4info::ActionRef {
			id: 0xdead,
			annotations: Vec::new(),
			scope: 0,
		});
	assert!(matches!(
		P4Schema::new(&p4info),
		Err(Error::SchemaInvalid(_))
	));
}

#[test]
fn dangling_direct_resource_is_invalid() {
	let mut p4info = basic_p4info();
	p4info.tables[0].direct_resource_ids.push(0xdead);
	assert!(matches!(
		P4Schema::new(&p4info),
		Err(Error::SchemaInvalid(_))
	));
}

#[test]
fn zero_bitwidth_is_invalid() {
	let mut p4info = basic_p4info();
	p4info.tables[0].match_fields[0].bitwidth = 0;
	assert!(matches!(
		P4Schema::new(&p4info),
		Err(Error::SchemaInvalid(_))
	));
}

#[test]
fn ambiguous_names_fail_lookup() {
	let mut p4info = basic_p4info();
	// two different actions sharing one alias
	p4info.actions[1].preamble.as_mut().unwrap().alias = "drop".to_string();
	let schema = P4Schema::new(&p4info).unwrap();
	assert!(matches!(
		schema.action("drop"),
		Err(Error::SchemaUnknown(_))
	));
	// full names still resolve
	assert!(schema.action("MyIngress.drop").is_ok());
	assert!(schema.action("MyIngress.ipv4_forward").is_ok());
}

#[test]
fn format_and_parse_entry_roundtrip() {
	let schema = common::basic_schema();
	let text = "ipv4_lpm dstAddr=0xa000000/24 ipv4_forward(dstAddr=0xa000001, port=0x1)";
	let entry = schema.parse_entry(text).unwrap();
	assert_eq!(entry.table_id, common::IPV4_LPM);
	assert_eq!(entry.r#match.len(), 1);
	assert_eq!(schema.format_entry(&entry).unwrap(), text);
}

#[test]
fn format_entry_with_priority_and_masks() {
	let schema = common::basic_schema();
	let text = "acl proto=0x6&&&0xff dstPort=0x50..0x1bb priority=7 drop()";
	let entry = schema.parse_entry(text).unwrap();
	assert_eq!(entry.priority, 7);
	assert_eq!(schema.format_entry(&entry).unwrap(), text);
}

#[test]
fn parse_entry_rejects_unknown_names() {
	let schema = common::basic_schema();
	assert!(matches!(
		schema.parse_entry("nope dstAddr=1"),
		Err(Error::SchemaUnknown(_))
	));
	assert!(matches!(
		schema.parse_entry("ipv4_lpm bogus=1"),
		Err(Error::SchemaUnknown(_))
	));
	assert!(matches!(
		schema.parse_entry("ipv4_lpm dstAddr=1 bogus(x=1)"),
		Err(Error::SchemaUnknown(_))
	));
	assert!(matches!(
		schema.parse_entry("ipv4_lpm dstAddr=zzz"),
		Err(Error::InvalidValue(_))
	));
}

#[test]
fn parse_entry_omits_wildcards() {
	let schema = common::basic_schema();
	// a zero-prefix LPM is a wildcard and is left off the wire entry
	let entry = schema.parse_entry("ipv4_lpm dstAddr=0/0").unwrap();
	assert!(entry.r#match.is_empty());
}
