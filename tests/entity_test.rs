//! Entity model wire conversions against the shared test pipeline.

mod common;

use finsy::entity::{
	encode_updates, ActionProfileGroup, ActionProfileMember, CloneSessionEntry,
	CounterData, CounterEntry, DigestEntry, DigestListAck, DirectCounterEntry,
	DirectMeterEntry, Entity, EntryAction, GroupMember, IdleTimeoutNotification,
	IndirectAction, MatchValue, MeterConfig, MeterCounterData, MeterEntry,
	MulticastGroupEntry, PacketIn, PacketOut, RegisterEntry, Replica, TableAction,
	TableEntry, TableMatch, UpdateType, ValueSetEntry,
};
use finsy::proto::p4runtime;
use finsy::Error;

use common::basic_schema;

fn roundtrip(entity: Entity) {
	let schema = basic_schema();
	let wire = entity.to_wire(&schema).unwrap();
	assert_eq!(Entity::from_wire(&schema, &wire).unwrap(), entity);
}

#[test]
fn table_match_lpm() {
	let schema = basic_schema();
	let table = schema.table("ipv4_lpm").unwrap();
	let matches =
		TableMatch::new().field("dstAddr", MatchValue::lpm(0x0a00_0000u32, 24));
	let msgs = matches.encode(table).unwrap();
	assert_eq!(msgs.len(), 1);
	assert_eq!(msgs[0].field_id, 1);
	match &msgs[0].field_match_type {
		Some(p4runtime::field_match::FieldMatchType::Lpm(lpm)) => {
			assert_eq!(lpm.value, vec![0x0a, 0, 0, 0]);
			assert_eq!(lpm.prefix_len, 24);
		}
		other => panic!("unexpected match: {:?}", other),
	}
	assert_eq!(TableMatch::decode(&msgs, table).unwrap(), matches);
}

#[test]
fn table_match_scalar_means_host_route() {
	let schema = basic_schema();
	let table = schema.table("ipv4_lpm").unwrap();
	let matches = TableMatch::new().field("dstAddr", MatchValue::exact(1u32));
	let msgs = matches.encode(table).unwrap();
	match &msgs[0].field_match_type {
		Some(p4runtime::field_match::FieldMatchType::Lpm(lpm)) => {
			assert_eq!(lpm.value, vec![1]);
			assert_eq!(lpm.prefix_len, 32);
		}
		other => panic!("unexpected match: {:?}", other),
	}
	// decodes as the explicit full-prefix form
	let decoded = TableMatch::decode(&msgs, table).unwrap();
	assert_eq!(decoded.get("dstAddr"), Some(&MatchValue::lpm(1u32, 32)));
}

#[test]
fn table_match_unknown_field() {
	let schema = basic_schema();
	let table = schema.table("ipv4_lpm").unwrap();
	let matches = TableMatch::new().field("x", MatchValue::exact(1u32));
	assert!(matches!(
		matches.encode(table),
		Err(Error::SchemaUnknown(_))
	));
}

#[test]
fn table_match_empty_is_wildcard() {
	let schema = basic_schema();
	let table = schema.table("ipv4_lpm").unwrap();
	let matches = TableMatch::new();
	assert!(matches.encode(table).unwrap().is_empty());
}

#[test]
fn wildcards_are_omitted_from_the_wire() {
	let schema = basic_schema();
	// zero LPM prefix, zero ternary mask, full range, all collapse away
	let lpm = TableEntry::new("ipv4_lpm")
		.match_field("dstAddr", MatchValue::lpm(0u32, 0));
	assert!(lpm.to_wire(&schema).unwrap().r#match.is_empty());

	let acl = TableEntry::new("acl")
		.match_field("proto", MatchValue::ternary(0u32, 0u32))
		.match_field("dstPort", MatchValue::range(0u32, 0xffffu32))
		.priority(1);
	assert!(acl.to_wire(&schema).unwrap().r#match.is_empty());
}

#[test]
fn wire_wildcards_are_schema_violations() {
	let schema = basic_schema();
	let table = schema.table("ipv4_lpm").unwrap();
	let msgs = vec![p4runtime::FieldMatch {
		field_id: 1,
		field_match_type: Some(p4runtime::field_match::FieldMatchType::Lpm(
			p4runtime::field_match::Lpm { value: Vec::new(), prefix_len: 0 },
		)),
	}];
	assert!(matches!(
		TableMatch::decode(&msgs, table),
		Err(Error::SchemaInvalid(_))
	));

	let acl = schema.table("acl").unwrap();
	let msgs = vec![p4runtime::FieldMatch {
		field_id: 1,
		field_match_type: Some(p4runtime::field_match::FieldMatchType::Ternary(
			p4runtime::field_match::Ternary {
				value: Vec::new(),
				mask: Vec::new(),
			},
		)),
	}];
	assert!(matches!(
		TableMatch::decode(&msgs, acl),
		Err(Error::SchemaInvalid(_))
	));
}

#[test]
fn table_action_params() {
	let schema = basic_schema();
	let table = schema.table("ipv4_lpm").unwrap();
	let action = TableAction::new("ipv4_forward")
		.param("dstAddr", 0x0102_0304_0506u64)
		.param("port", 1u32);
	let msg = action.encode(&schema, Some((table, false))).unwrap();
	assert_eq!(msg.action_id, common::IPV4_FORWARD);
	assert_eq!(msg.params.len(), 2);
	assert_eq!(msg.params[0].param_id, 1);
	assert_eq!(msg.params[0].value, vec![1, 2, 3, 4, 5, 6]);
	assert_eq!(msg.params[1].param_id, 2);
	assert_eq!(msg.params[1].value, vec![1]);
	assert_eq!(TableAction::decode(&schema, &msg).unwrap(), action);
}

#[test]
fn table_action_missing_param() {
	let schema = basic_schema();
	let action = TableAction::new("ipv4_forward").param("port", 1u32);
	let err = action.encode(&schema, None).unwrap_err();
	match err {
		Error::InvalidValue(msg) => assert!(msg.contains("dstAddr")),
		other => panic!("unexpected error: {:?}", other),
	}
}

#[test]
fn table_action_unknown_param() {
	let schema = basic_schema();
	let action = TableAction::new("ipv4_forward")
		.param("dstAddr", 1u32)
		.param("prt", 1u32);
	assert!(matches!(
		action.encode(&schema, None),
		Err(Error::SchemaUnknown(_))
	));
}

#[test]
fn table_action_not_allowed_in_table() {
	let schema = basic_schema();
	let acl = schema.table("acl").unwrap();
	let action = TableAction::new("ipv4_forward")
		.param("dstAddr", 1u32)
		.param("port", 1u32);
	assert!(matches!(
		action.encode(&schema, Some((acl, false))),
		Err(Error::SchemaUnknown(_))
	));
}

#[test]
fn empty_table_entry_reads_everything() {
	let schema = basic_schema();
	let entry = TableEntry::default();
	let wire = entry.to_wire(&schema).unwrap();
	assert_eq!(wire, p4runtime::TableEntry::default());
	assert_eq!(TableEntry::from_wire(&schema, &wire).unwrap(), entry);
}

#[test]
fn table_entry_roundtrip() {
	roundtrip(Entity::TableEntry(
		TableEntry::new("ipv4_lpm")
			.match_field("dstAddr", MatchValue::lpm(0x0a00_0000u32, 24))
			.action(
				TableAction::new("ipv4_forward")
					.param("dstAddr", 0x0102_0304_0506u64)
					.param("port", 1u32),
			),
	));
}

#[test]
fn table_entry_roundtrip_with_direct_resources() {
	let entry = TableEntry {
		table: "ipv4_lpm".to_string(),
		matches: TableMatch::new()
			.field("dstAddr", MatchValue::lpm(0x0a00_0000u32, 24)),
		action: None,
		priority: 0,
		is_default_action: false,
		idle_timeout_ns: 10_000_000_000,
		time_since_last_hit_ns: Some(20_000_000_000),
		metadata: b"abc".to_vec(),
		counter_data: Some(CounterData { byte_count: 5, packet_count: 6 }),
		meter_config: Some(MeterConfig { cir: 1, cburst: 2, pir: 3, pburst: 4 }),
		meter_counter_data: Some(MeterCounterData {
			green: CounterData { byte_count: 5, packet_count: 6 },
			yellow: CounterData { byte_count: 5, packet_count: 6 },
			red: CounterData { byte_count: 5, packet_count: 6 },
		}),
	};
	roundtrip(Entity::TableEntry(entry));
}

#[test]
fn priority_needs_a_tcam_table() {
	let schema = basic_schema();
	let entry = TableEntry::new("ipv4_lpm")
		.match_field("dstAddr", MatchValue::lpm(1u32, 32))
		.priority(10);
	assert!(matches!(
		entry.to_wire(&schema),
		Err(Error::InvalidValue(_))
	));

	let entry = TableEntry::new("acl")
		.match_field("proto", MatchValue::ternary(6u32, 0xffu32))
		.priority(10);
	let wire = entry.to_wire(&schema).unwrap();
	assert_eq!(wire.priority, 10);
}

#[test]
fn acl_entry_roundtrip() {
	roundtrip(Entity::TableEntry(
		TableEntry::new("acl")
			.match_field("proto", MatchValue::ternary(6u32, 0xffu32))
			.match_field("dstPort", MatchValue::range(80u32, 443u32))
			.match_field("flag", MatchValue::optional(1u32))
			.action(TableAction::new("drop"))
			.priority(7),
	));
}

#[test]
fn default_action_entry() {
	let schema = basic_schema();
	let entry = TableEntry::new("ipv4_lpm")
		.action(TableAction::new("drop"))
		.default_action();
	let wire = entry.to_wire(&schema).unwrap();
	assert!(wire.is_default_action);
	assert_eq!(TableEntry::from_wire(&schema, &wire).unwrap(), entry);
}

#[test]
fn indirect_actions() {
	roundtrip(Entity::TableEntry(
		TableEntry::new("indirect")
			.match_field("port", MatchValue::exact(5u32))
			.action(IndirectAction::Member(345)),
	));
	roundtrip(Entity::TableEntry(
		TableEntry::new("indirect")
			.match_field("port", MatchValue::exact(5u32))
			.action(IndirectAction::Group(123)),
	));
	roundtrip(Entity::TableEntry(
		TableEntry::new("indirect")
			.match_field("port", MatchValue::exact(5u32))
			.action(IndirectAction::ActionSet(vec![
				(
					1,
					TableAction::new("ipv4_forward")
						.param("dstAddr", 0x0a00_0001u32)
						.param("port", 1u32),
				),
				(
					2,
					TableAction::new("ipv4_forward")
						.param("dstAddr", 0x0a00_0001u32)
						.param("port", 2u32),
				),
			])),
	));
}

#[test]
fn action_profile_member_roundtrip() {
	roundtrip(Entity::ActionProfileMember(ActionProfileMember {
		action_profile: "hashed_selector".to_string(),
		member_id: 2,
		action: Some(
			TableAction::new("ipv4_forward")
				.param("dstAddr", 0x0a00_0001u32)
				.param("port", 3u32),
		),
	}));
	roundtrip(Entity::ActionProfileMember(ActionProfileMember::default()));
}

#[test]
fn action_profile_group_roundtrip() {
	let schema = basic_schema();
	let group = ActionProfileGroup {
		action_profile: "hashed_selector".to_string(),
		group_id: 2,
		max_size: 3,
		members: vec![
			GroupMember { member_id: 1, weight: 3, watch_port: Some(0xabc) },
			GroupMember { member_id: 2, weight: 4, watch_port: Some(9) },
			GroupMember::new(3, 1),
		],
	};
	let wire = group.to_wire(&schema).unwrap();
	assert_eq!(wire.action_profile_id, common::HASHED_SELECTOR);
	match &wire.members[0].watch_kind {
		Some(p4runtime::action_profile_group::member::WatchKind::WatchPort(
			bytes,
		)) => assert_eq!(bytes, &vec![0x0a, 0xbc]),
		other => panic!("unexpected watch kind: {:?}", other),
	}
	roundtrip(Entity::ActionProfileGroup(group));
}

#[test]
fn counter_entry_roundtrip() {
	roundtrip(Entity::CounterEntry(CounterEntry {
		counter: "other_counter".to_string(),
		index: Some(2),
		data: Some(CounterData { byte_count: 1, packet_count: 2 }),
	}));
	roundtrip(Entity::CounterEntry(CounterEntry::default()));
}

#[test]
fn direct_counter_entry_fills_in_its_table() {
	let schema = basic_schema();
	// a bare counter name addresses every entry of its table
	let entry = DirectCounterEntry {
		counter: "ipv4_counter".to_string(),
		table_entry: None,
		data: None,
	};
	let wire = entry.to_wire(&schema).unwrap();
	let table_entry = wire.table_entry.as_ref().unwrap();
	assert_eq!(table_entry.table_id, common::IPV4_LPM);

	// decode recovers both the counter name and the table entry
	let decoded = DirectCounterEntry::from_wire(&schema, &wire).unwrap();
	assert_eq!(decoded.counter, "ipv4_counter");
	assert_eq!(
		decoded.table_entry,
		Some(TableEntry::new("ipv4_lpm"))
	);
}

#[test]
fn direct_counter_entry_roundtrip() {
	roundtrip(Entity::DirectCounterEntry(DirectCounterEntry {
		counter: "ipv4_counter".to_string(),
		table_entry: Some(
			TableEntry::new("ipv4_lpm")
				.match_field("dstAddr", MatchValue::lpm(0x0a00_0000u32, 24)),
		),
		data: Some(CounterData { byte_count: 1, packet_count: 2 }),
	}));
}

#[test]
fn meter_entries_roundtrip() {
	roundtrip(Entity::MeterEntry(MeterEntry {
		meter: "other_meter".to_string(),
		index: Some(2),
		config: Some(MeterConfig { cir: 1, cburst: 2, pir: 3, pburst: 4 }),
		counter_data: None,
	}));
	roundtrip(Entity::DirectMeterEntry(DirectMeterEntry {
		table_entry: Some(
			TableEntry::new("ipv4_lpm")
				.match_field("dstAddr", MatchValue::lpm(0x0a00_0000u32, 24)),
		),
		config: Some(MeterConfig { cir: 1, cburst: 2, pir: 3, pburst: 4 }),
		counter_data: Some(MeterCounterData::default()),
	}));
}

#[test]
fn register_entry_roundtrip() {
	let schema = basic_schema();
	let entry = RegisterEntry {
		register: "counter_bloom_filter".to_string(),
		index: Some(1),
		data: Some(1),
	};
	let wire = entry.to_wire(&schema).unwrap();
	match &wire.data {
		Some(p4runtime::P4Data {
			data: Some(p4runtime::p4_data::Data::Bitstring(bytes)),
		}) => assert_eq!(bytes, &vec![1]),
		other => panic!("unexpected register data: {:?}", other),
	}
	roundtrip(Entity::RegisterEntry(entry));
	// index-less form addresses the whole array
	roundtrip(Entity::RegisterEntry(RegisterEntry {
		register: "counter_bloom_filter".to_string(),
		index: None,
		data: Some(7),
	}));
}

#[test]
fn digest_entry_config_is_omitted_when_zero() {
	let schema = basic_schema();
	let entry = DigestEntry::new("Digest_t");
	let wire = entry.to_wire(&schema).unwrap();
	assert_eq!(wire.digest_id, common::DIGEST_T);
	assert!(wire.config.is_none());

	let entry = DigestEntry {
		digest: "Digest_t".to_string(),
		max_list_size: 1,
		max_timeout_ns: 2,
		ack_timeout_ns: 3,
	};
	let wire = entry.to_wire(&schema).unwrap();
	let config = wire.config.as_ref().unwrap();
	assert_eq!(config.max_list_size, 1);
	assert_eq!(config.max_timeout_ns, 2);
	assert_eq!(config.ack_timeout_ns, 3);
	roundtrip(Entity::DigestEntry(entry));
}

#[test]
fn digest_list_ack() {
	let ack = DigestListAck { digest_id: common::DIGEST_T, list_id: 1 };
	let wire = ack.to_wire();
	assert_eq!(wire.digest_id, common::DIGEST_T);
	assert_eq!(wire.list_id, 1);
}

#[test]
fn replication_entries_roundtrip() {
	roundtrip(Entity::MulticastGroupEntry(MulticastGroupEntry {
		group_id: 7,
		replicas: vec![
			Replica::new(1),
			Replica { egress_port: 2, instance: 1 },
		],
	}));
	roundtrip(Entity::CloneSessionEntry(CloneSessionEntry {
		session_id: 9,
		class_of_service: 2,
		packet_length_bytes: 128,
		replicas: vec![Replica::new(255)],
	}));
}

#[test]
fn value_set_entry_roundtrip() {
	let schema = basic_schema();
	let entry = ValueSetEntry {
		value_set: "pvs".to_string(),
		members: vec![1, 2],
	};
	let wire = entry.to_wire(&schema).unwrap();
	assert_eq!(wire.value_set_id, common::PVS);
	assert_eq!(wire.members.len(), 2);
	roundtrip(Entity::ValueSetEntry(entry));
}

#[test]
fn packet_out_encodes_declared_metadata() {
	let schema = basic_schema();
	let packet = PacketOut::new(b"abc".to_vec())
		.metadata_field("egress_port", 1u32)
		.metadata_field("_pad", 0u32);
	let wire = packet.to_wire(&schema).unwrap();
	assert_eq!(wire.payload, b"abc".to_vec());
	assert_eq!(wire.metadata.len(), 2);
	assert_eq!(wire.metadata[0].metadata_id, 1);
	assert_eq!(wire.metadata[0].value, vec![1]);
	assert_eq!(wire.metadata[1].metadata_id, 2);
	assert_eq!(wire.metadata[1].value, Vec::<u8>::new());
}

#[test]
fn packet_out_rejects_missing_and_unknown_metadata() {
	let schema = basic_schema();
	let missing = PacketOut::new(b"abc".to_vec()).metadata_field("egress_port", 1u32);
	match missing.to_wire(&schema).unwrap_err() {
		Error::InvalidValue(msg) => assert!(msg.contains("_pad")),
		other => panic!("unexpected error: {:?}", other),
	}

	let wrong = PacketOut::new(b"abc".to_vec())
		.metadata_field("ingress_port", 1u32)
		.metadata_field("_pad", 0u32);
	assert!(matches!(wrong.to_wire(&schema), Err(Error::SchemaUnknown(_))));

	let extra = PacketOut::new(b"abc".to_vec())
		.metadata_field("egress_port", 1u32)
		.metadata_field("_pad", 0u32)
		.metadata_field("extra", 1u32);
	assert!(matches!(extra.to_wire(&schema), Err(Error::SchemaUnknown(_))));
}

#[test]
fn packet_in_decodes_named_metadata() {
	let schema = basic_schema();
	let wire = p4runtime::PacketIn {
		payload: b"abc".to_vec(),
		metadata: vec![
			p4runtime::PacketMetadata { metadata_id: 1, value: vec![97] },
			p4runtime::PacketMetadata { metadata_id: 2, value: vec![98] },
		],
	};
	let packet = PacketIn::from_wire(&schema, &wire).unwrap();
	assert_eq!(packet.payload, b"abc".to_vec());
	assert_eq!(packet.metadata_value("ingress_port"), Some(97));
	assert_eq!(packet.metadata_value("_pad"), Some(98));

	let bare = p4runtime::PacketIn {
		payload: b"abc".to_vec(),
		metadata: Vec::new(),
	};
	let packet = PacketIn::from_wire(&schema, &bare).unwrap();
	assert!(packet.metadata.is_empty());
}

#[test]
fn idle_timeout_notification_decodes_entries() {
	let schema = basic_schema();
	let entry = TableEntry::new("ipv4_lpm")
		.match_field("dstAddr", MatchValue::lpm(0x0a00_0000u32, 24));
	let wire = p4runtime::IdleTimeoutNotification {
		table_entry: vec![entry.to_wire(&schema).unwrap()],
		timestamp: 1000,
	};
	let notification = IdleTimeoutNotification::from_wire(&schema, &wire).unwrap();
	assert_eq!(notification.timestamp, 1000);
	assert_eq!(notification.table_entries, vec![entry]);
}

#[test]
fn encode_updates_sets_the_update_type() {
	let schema = basic_schema();
	let entity: Entity = TableEntry::new("ipv4_lpm").into();
	for (update_type, wire_type) in [
		(UpdateType::Insert, p4runtime::update::Type::Insert),
		(UpdateType::Modify, p4runtime::update::Type::Modify),
		(UpdateType::Delete, p4runtime::update::Type::Delete),
	] {
		let updates =
			encode_updates(update_type, &[entity.clone()], &schema).unwrap();
		assert_eq!(updates.len(), 1);
		assert_eq!(updates[0].r#type, wire_type as i32);
		assert!(updates[0].entity.is_some());
	}
}

#[test]
fn missing_entity_oneofs_are_rejected() {
	let schema = basic_schema();
	assert!(matches!(
		Entity::from_wire(&schema, &p4runtime::Entity::default()),
		Err(Error::SchemaInvalid(_))
	));
	let pre = p4runtime::Entity {
		entity: Some(
			p4runtime::entity::Entity::PacketReplicationEngineEntry(
				p4runtime::PacketReplicationEngineEntry::default(),
			),
		),
	};
	assert!(matches!(
		Entity::from_wire(&schema, &pre),
		Err(Error::SchemaInvalid(_))
	));
}

#[test]
fn entry_action_conversions() {
	let direct: EntryAction = TableAction::new("drop").into();
	assert!(matches!(direct, EntryAction::Direct(_)));
	let indirect: EntryAction = IndirectAction::Member(1).into();
	assert!(matches!(
		indirect,
		EntryAction::Indirect(IndirectAction::Member(1))
	));
}
