//! Shared test pipeline: a small v1model-style P4Info with one LPM table,
//! one TCAM-style table, an indirect table behind an action selector, the
//! usual direct/indexed counters and meters, a register, a digest, a value
//! set, and controller packet headers.
#![allow(dead_code)]

use finsy::proto::p4info;

pub const IPV4_LPM: u32 = 0x0200_0001;
pub const ACL: u32 = 0x0200_0002;
pub const INDIRECT: u32 = 0x0200_0003;
pub const NO_ACTION: u32 = 0x0100_0001;
pub const IPV4_FORWARD: u32 = 0x0100_0002;
pub const DROP: u32 = 0x0100_0003;
pub const HASHED_SELECTOR: u32 = 0x1100_0001;
pub const OTHER_COUNTER: u32 = 0x1200_0001;
pub const IPV4_COUNTER: u32 = 0x1300_0001;
pub const OTHER_METER: u32 = 0x1400_0001;
pub const IPV4_METER: u32 = 0x1500_0001;
pub const BLOOM_FILTER: u32 = 0x1600_0001;
pub const DIGEST_T: u32 = 0x1700_0001;
pub const PVS: u32 = 0x1800_0001;

fn preamble(id: u32, name: &str, alias: &str) -> Option<p4info::Preamble> {
	Some(p4info::Preamble {
		id,
		name: name.to_string(),
		alias: alias.to_string(),
		annotations: Vec::new(),
		doc: None,
	})
}

fn match_field(
	id: u32,
	name: &str,
	bitwidth: i32,
	match_type: p4info::match_field::MatchType,
) -> p4info::MatchField {
	p4info::MatchField {
		id,
		name: name.to_string(),
		annotations: Vec::new(),
		bitwidth,
		doc: None,
		r#match: Some(p4info::match_field::Match::MatchType(match_type as i32)),
	}
}

fn action_ref(id: u32) -> p4info::ActionRef {
	p4info::ActionRef {
		id,
		annotations: Vec::new(),
		scope: p4info::action_ref::Scope::TableAndDefault as i32,
	}
}

fn param(id: u32, name: &str, bitwidth: i32) -> p4info::action::Param {
	p4info::action::Param {
		id,
		name: name.to_string(),
		annotations: Vec::new(),
		bitwidth,
		doc: None,
	}
}

fn bit_type_spec(bitwidth: i32) -> Option<p4info::P4DataTypeSpec> {
	Some(p4info::P4DataTypeSpec {
		type_spec: Some(p4info::p4_data_type_spec::TypeSpec::Bitstring(
			p4info::P4BitstringLikeTypeSpec {
				type_spec: Some(p4info::p4_bitstring_like_type_spec::TypeSpec::Bit(
					p4info::P4BitTypeSpec { bitwidth },
				)),
			},
		)),
	})
}

pub fn basic_p4info() -> p4info::P4Info {
	p4info::P4Info {
		pkg_info: Some(p4info::PkgInfo {
			name: "basic".to_string(),
			arch: "v1model".to_string(),
			..Default::default()
		}),
		tables: vec![
			p4info::Table {
				preamble: preamble(IPV4_LPM, "MyIngress.ipv4_lpm", "ipv4_lpm"),
				match_fields: vec![match_field(
					1,
					"dstAddr",
					32,
					p4info::match_field::MatchType::Lpm,
				)],
				action_refs: vec![
					action_ref(IPV4_FORWARD),
					action_ref(DROP),
					action_ref(NO_ACTION),
				],
				const_default_action_id: NO_ACTION,
				implementation_id: 0,
				direct_resource_ids: vec![IPV4_COUNTER, IPV4_METER],
				size: 1024,
				idle_timeout_behavior:
					p4info::table::IdleTimeoutBehavior::NotifyControl as i32,
				is_const_table: false,
			},
			p4info::Table {
				preamble: preamble(ACL, "MyIngress.acl", "acl"),
				match_fields: vec![
					match_field(
						1,
						"proto",
						8,
						p4info::match_field::MatchType::Ternary,
					),
					match_field(
						2,
						"dstPort",
						16,
						p4info::match_field::MatchType::Range,
					),
					match_field(
						3,
						"flag",
						1,
						p4info::match_field::MatchType::Optional,
					),
				],
				action_refs: vec![action_ref(DROP), action_ref(NO_ACTION)],
				const_default_action_id: 0,
				implementation_id: 0,
				direct_resource_ids: Vec::new(),
				size: 256,
				idle_timeout_behavior:
					p4info::table::IdleTimeoutBehavior::NoTimeout as i32,
				is_const_table: false,
			},
			p4info::Table {
				preamble: preamble(INDIRECT, "MyIngress.indirect", "indirect"),
				match_fields: vec![match_field(
					1,
					"port",
					9,
					p4info::match_field::MatchType::Exact,
				)],
				action_refs: vec![action_ref(IPV4_FORWARD), action_ref(NO_ACTION)],
				const_default_action_id: 0,
				implementation_id: HASHED_SELECTOR,
				direct_resource_ids: Vec::new(),
				size: 512,
				idle_timeout_behavior:
					p4info::table::IdleTimeoutBehavior::NoTimeout as i32,
				is_const_table: false,
			},
		],
		actions: vec![
			p4info::Action {
				preamble: preamble(NO_ACTION, "NoAction", "NoAction"),
				params: Vec::new(),
			},
			p4info::Action {
				preamble: preamble(
					IPV4_FORWARD,
					"MyIngress.ipv4_forward",
					"ipv4_forward",
				),
				params: vec![param(1, "dstAddr", 48), param(2, "port", 9)],
			},
			p4info::Action {
				preamble: preamble(DROP, "MyIngress.drop", "drop"),
				params: Vec::new(),
			},
		],
		action_profiles: vec![p4info::ActionProfile {
			preamble: preamble(
				HASHED_SELECTOR,
				"MyIngress.hashed_selector",
				"hashed_selector",
			),
			table_ids: vec![INDIRECT],
			with_selector: true,
			size: 1024,
			max_group_size: 16,
		}],
		counters: vec![p4info::Counter {
			preamble: preamble(
				OTHER_COUNTER,
				"MyIngress.other_counter",
				"other_counter",
			),
			spec: Some(p4info::CounterSpec {
				unit: p4info::counter_spec::Unit::Both as i32,
			}),
			size: 128,
		}],
		direct_counters: vec![p4info::DirectCounter {
			preamble: preamble(
				IPV4_COUNTER,
				"MyIngress.ipv4_counter",
				"ipv4_counter",
			),
			spec: Some(p4info::CounterSpec {
				unit: p4info::counter_spec::Unit::Both as i32,
			}),
			direct_table_id: IPV4_LPM,
		}],
		meters: vec![p4info::Meter {
			preamble: preamble(OTHER_METER, "MyIngress.other_meter", "other_meter"),
			spec: Some(p4info::MeterSpec {
				unit: p4info::meter_spec::Unit::Bytes as i32,
			}),
			size: 64,
		}],
		direct_meters: vec![p4info::DirectMeter {
			preamble: preamble(IPV4_METER, "MyIngress.ipv4_meter", "ipv4_meter"),
			spec: Some(p4info::MeterSpec {
				unit: p4info::meter_spec::Unit::Bytes as i32,
			}),
			direct_table_id: IPV4_LPM,
		}],
		controller_packet_metadata: vec![
			p4info::ControllerPacketMetadata {
				preamble: preamble(0x1900_0001, "packet_in", "packet_in"),
				metadata: vec![
					p4info::controller_packet_metadata::Metadata {
						id: 1,
						name: "ingress_port".to_string(),
						annotations: Vec::new(),
						bitwidth: 9,
					},
					p4info::controller_packet_metadata::Metadata {
						id: 2,
						name: "_pad".to_string(),
						annotations: Vec::new(),
						bitwidth: 7,
					},
				],
			},
			p4info::ControllerPacketMetadata {
				preamble: preamble(0x1900_0002, "packet_out", "packet_out"),
				metadata: vec![
					p4info::controller_packet_metadata::Metadata {
						id: 1,
						name: "egress_port".to_string(),
						annotations: Vec::new(),
						bitwidth: 9,
					},
					p4info::controller_packet_metadata::Metadata {
						id: 2,
						name: "_pad".to_string(),
						annotations: Vec::new(),
						bitwidth: 7,
					},
				],
			},
		],
		value_sets: vec![p4info::ValueSet {
			preamble: preamble(PVS, "MyParser.pvs", "pvs"),
			r#match: Some(match_field(
				1,
				"value",
				8,
				p4info::match_field::MatchType::Exact,
			)),
			size: 4,
		}],
		registers: vec![p4info::Register {
			preamble: preamble(
				BLOOM_FILTER,
				"MyIngress.counter_bloom_filter",
				"counter_bloom_filter",
			),
			type_spec: bit_type_spec(32),
			size: 4096,
		}],
		digests: vec![p4info::Digest {
			preamble: preamble(DIGEST_T, "Digest_t", "Digest_t"),
			type_spec: bit_type_spec(48),
		}],
		externs: Vec::new(),
	}
}

pub fn basic_schema() -> finsy::P4Schema {
	finsy::P4Schema::new(&basic_p4info()).expect("test p4info is valid")
}
