// Pregenerated from p4/v1/p4runtime.proto and p4/v1/p4data.proto
// (package p4.v1).
// @generated

#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WriteRequest {
    #[prost(uint64, tag = "1")]
    pub device_id: u64,
    #[deprecated]
    #[prost(uint64, tag = "2")]
    pub role_id: u64,
    #[prost(string, tag = "6")]
    pub role: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "3")]
    pub election_id: ::core::option::Option<Uint128>,
    /// The write batch, comprising a list of Update operations.
    #[prost(message, repeated, tag = "4")]
    pub updates: ::prost::alloc::vec::Vec<Update>,
    #[prost(enumeration = "write_request::Atomicity", tag = "5")]
    pub atomicity: i32,
}
/// Nested message and enum types in `WriteRequest`.
pub mod write_request {
    #[derive(
        Clone,
        Copy,
        Debug,
        PartialEq,
        Eq,
        Hash,
        PartialOrd,
        Ord,
        ::prost::Enumeration
    )]
    #[repr(i32)]
    pub enum Atomicity {
        /// Required. This is the default behavior. The batch is processed in a
        /// non-atomic manner from a data plane point of view. Each operation
        /// within the batch must be attempted even if one or more encounter
        /// errors.
        ContinueOnError = 0,
        /// Optional. Operations within the batch are committed to data plane
        /// until an error is encountered. At this point, the operations must
        /// be rolled back such that both software and data plane state is
        /// consistent with the state before the batch was attempted.
        RollbackOnError = 1,
        /// Optional. Every operation within the batch must take effect in the
        /// data plane atomically.
        DataplaneAtomic = 2,
    }
    impl Atomicity {
        /// String value of the enum field names used in the ProtoBuf definition.
        ///
        /// The values are not transformed in any way and thus are considered stable
        /// (if the ProtoBuf definition does not change) and safe for programmatic use.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                Atomicity::ContinueOnError => "CONTINUE_ON_ERROR",
                Atomicity::RollbackOnError => "ROLLBACK_ON_ERROR",
                Atomicity::DataplaneAtomic => "DATAPLANE_ATOMIC",
            }
        }
        /// Creates an enum from field names used in the ProtoBuf definition.
        pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
            match value {
                "CONTINUE_ON_ERROR" => Some(Self::ContinueOnError),
                "ROLLBACK_ON_ERROR" => Some(Self::RollbackOnError),
                "DATAPLANE_ATOMIC" => Some(Self::DataplaneAtomic),
                _ => None,
            }
        }
    }
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WriteResponse {}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ReadRequest {
    #[prost(uint64, tag = "1")]
    pub device_id: u64,
    #[prost(message, repeated, tag = "2")]
    pub entities: ::prost::alloc::vec::Vec<Entity>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ReadResponse {
    #[prost(message, repeated, tag = "1")]
    pub entities: ::prost::alloc::vec::Vec<Entity>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Update {
    #[prost(enumeration = "update::Type", tag = "1")]
    pub r#type: i32,
    #[prost(message, optional, tag = "2")]
    pub entity: ::core::option::Option<Entity>,
}
/// Nested message and enum types in `Update`.
pub mod update {
    #[derive(
        Clone,
        Copy,
        Debug,
        PartialEq,
        Eq,
        Hash,
        PartialOrd,
        Ord,
        ::prost::Enumeration
    )]
    #[repr(i32)]
    pub enum Type {
        Unspecified = 0,
        Insert = 1,
        Modify = 2,
        Delete = 3,
    }
    impl Type {
        /// String value of the enum field names used in the ProtoBuf definition.
        ///
        /// The values are not transformed in any way and thus are considered stable
        /// (if the ProtoBuf definition does not change) and safe for programmatic use.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                Type::Unspecified => "UNSPECIFIED",
                Type::Insert => "INSERT",
                Type::Modify => "MODIFY",
                Type::Delete => "DELETE",
            }
        }
        /// Creates an enum from field names used in the ProtoBuf definition.
        pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
            match value {
                "UNSPECIFIED" => Some(Self::Unspecified),
                "INSERT" => Some(Self::Insert),
                "MODIFY" => Some(Self::Modify),
                "DELETE" => Some(Self::Delete),
                _ => None,
            }
        }
    }
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Entity {
    #[prost(oneof = "entity::Entity", tags = "1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12")]
    pub entity: ::core::option::Option<entity::Entity>,
}
/// Nested message and enum types in `Entity`.
pub mod entity {
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Entity {
        #[prost(message, tag = "1")]
        ExternEntry(super::ExternEntry),
        #[prost(message, tag = "2")]
        TableEntry(super::TableEntry),
        #[prost(message, tag = "3")]
        ActionProfileMember(super::ActionProfileMember),
        #[prost(message, tag = "4")]
        ActionProfileGroup(super::ActionProfileGroup),
        #[prost(message, tag = "5")]
        MeterEntry(super::MeterEntry),
        #[prost(message, tag = "6")]
        DirectMeterEntry(super::DirectMeterEntry),
        #[prost(message, tag = "7")]
        CounterEntry(super::CounterEntry),
        #[prost(message, tag = "8")]
        DirectCounterEntry(super::DirectCounterEntry),
        #[prost(message, tag = "9")]
        PacketReplicationEngineEntry(super::PacketReplicationEngineEntry),
        #[prost(message, tag = "10")]
        ValueSetEntry(super::ValueSetEntry),
        #[prost(message, tag = "11")]
        RegisterEntry(super::RegisterEntry),
        #[prost(message, tag = "12")]
        DigestEntry(super::DigestEntry),
    }
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ExternEntry {
    #[prost(uint32, tag = "1")]
    pub extern_type_id: u32,
    #[prost(uint32, tag = "2")]
    pub extern_id: u32,
    #[prost(message, optional, tag = "3")]
    pub entry: ::core::option::Option<::prost_types::Any>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TableEntry {
    #[prost(uint32, tag = "1")]
    pub table_id: u32,
    #[prost(message, repeated, tag = "2")]
    pub r#match: ::prost::alloc::vec::Vec<FieldMatch>,
    #[prost(message, optional, tag = "3")]
    pub action: ::core::option::Option<TableAction>,
    /// Should only be set if the match implies a TCAM lookup, i.e. at least
    /// one of the match fields is Optional, Ternary or Range. A higher
    /// number indicates higher priority.
    #[prost(int32, tag = "4")]
    pub priority: i32,
    /// Metadata (cookie) opaque to the target. There is no requirement of
    /// where this is stored, as long as it is returned with the rest of the
    /// entry in a Read RPC. This is deprecated in favor of the more generic
    /// metadata field.
    #[deprecated]
    #[prost(uint64, tag = "5")]
    pub controller_metadata: u64,
    /// Only valid for tables that implement a direct meter.
    #[prost(message, optional, tag = "6")]
    pub meter_config: ::core::option::Option<MeterConfig>,
    /// Only valid for tables that implement a direct counter.
    #[prost(message, optional, tag = "7")]
    pub counter_data: ::core::option::Option<CounterData>,
    /// Set to true if the table entry is being used to update the non-const
    /// default action of the table.
    #[prost(bool, tag = "8")]
    pub is_default_action: bool,
    /// Only valid for tables that support idle timeout.
    #[prost(int64, tag = "9")]
    pub idle_timeout_ns: i64,
    /// Only valid for tables that support idle timeout.
    #[prost(message, optional, tag = "10")]
    pub time_since_last_hit: ::core::option::Option<table_entry::IdleTimeout>,
    /// Arbitrary metadata from the controller that is opaque to the target.
    #[prost(bytes = "vec", tag = "11")]
    pub metadata: ::prost::alloc::vec::Vec<u8>,
    /// Only valid for tables that implement a direct meter.
    #[prost(message, optional, tag = "12")]
    pub meter_counter_data: ::core::option::Option<MeterCounterData>,
}
/// Nested message and enum types in `TableEntry`.
pub mod table_entry {
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct IdleTimeout {
        /// Time elapsed - in nanoseconds - since the table entry was last
        /// "hit" as part of a data plane table lookup.
        #[prost(int64, tag = "1")]
        pub elapsed_ns: i64,
    }
}
/// field_match_type ::= exact | ternary | lpm | range | optional
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FieldMatch {
    #[prost(uint32, tag = "1")]
    pub field_id: u32,
    #[prost(oneof = "field_match::FieldMatchType", tags = "2, 3, 4, 5, 7, 100")]
    pub field_match_type: ::core::option::Option<field_match::FieldMatchType>,
}
/// Nested message and enum types in `FieldMatch`.
pub mod field_match {
    /// Matches can be performed on arbitrarily-large inputs; the protobuf
    /// type 'bytes' is used to model arbitrarily-large values.
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Exact {
        #[prost(bytes = "vec", tag = "1")]
        pub value: ::prost::alloc::vec::Vec<u8>,
    }
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Ternary {
        #[prost(bytes = "vec", tag = "1")]
        pub value: ::prost::alloc::vec::Vec<u8>,
        #[prost(bytes = "vec", tag = "2")]
        pub mask: ::prost::alloc::vec::Vec<u8>,
    }
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Lpm {
        #[prost(bytes = "vec", tag = "1")]
        pub value: ::prost::alloc::vec::Vec<u8>,
        /// in bits
        #[prost(int32, tag = "2")]
        pub prefix_len: i32,
    }
    /// A Range is logically a set that contains all values numerically
    /// between 'low' and 'high' inclusively.
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Range {
        #[prost(bytes = "vec", tag = "1")]
        pub low: ::prost::alloc::vec::Vec<u8>,
        #[prost(bytes = "vec", tag = "2")]
        pub high: ::prost::alloc::vec::Vec<u8>,
    }
    /// If the Optional match should be a wildcard, the FieldMatch must be
    /// omitted. Otherwise, this behaves like an exact match.
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Optional {
        #[prost(bytes = "vec", tag = "1")]
        pub value: ::prost::alloc::vec::Vec<u8>,
    }
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum FieldMatchType {
        #[prost(message, tag = "2")]
        Exact(Exact),
        #[prost(message, tag = "3")]
        Ternary(Ternary),
        #[prost(message, tag = "4")]
        Lpm(Lpm),
        #[prost(message, tag = "5")]
        Range(Range),
        #[prost(message, tag = "7")]
        Optional(Optional),
        /// Architecture-specific match value; it corresponds to the other_match_type
        /// in the P4Info MatchField message.
        #[prost(message, tag = "100")]
        Other(::prost_types::Any),
    }
}
/// table_actions ::= action_specification | action_profile_specification
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TableAction {
    #[prost(oneof = "table_action::Type", tags = "1, 2, 3, 4")]
    pub r#type: ::core::option::Option<table_action::Type>,
}
/// Nested message and enum types in `TableAction`.
pub mod table_action {
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Type {
        #[prost(message, tag = "1")]
        Action(super::Action),
        #[prost(uint32, tag = "2")]
        ActionProfileMemberId(u32),
        #[prost(uint32, tag = "3")]
        ActionProfileGroupId(u32),
        #[prost(message, tag = "4")]
        ActionProfileActionSet(super::ActionProfileActionSet),
    }
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Action {
    #[prost(uint32, tag = "1")]
    pub action_id: u32,
    #[prost(message, repeated, tag = "4")]
    pub params: ::prost::alloc::vec::Vec<action::Param>,
}
/// Nested message and enum types in `Action`.
pub mod action {
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Param {
        #[prost(uint32, tag = "2")]
        pub param_id: u32,
        #[prost(bytes = "vec", tag = "3")]
        pub value: ::prost::alloc::vec::Vec<u8>,
    }
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ActionProfileActionSet {
    #[prost(message, repeated, tag = "1")]
    pub action_profile_actions: ::prost::alloc::vec::Vec<ActionProfileAction>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ActionProfileAction {
    #[prost(message, optional, tag = "1")]
    pub action: ::core::option::Option<Action>,
    #[prost(int32, tag = "2")]
    pub weight: i32,
    #[prost(oneof = "action_profile_action::WatchKind", tags = "3, 4")]
    pub watch_kind: ::core::option::Option<action_profile_action::WatchKind>,
}
/// Nested message and enum types in `ActionProfileAction`.
pub mod action_profile_action {
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum WatchKind {
        /// Using int32 as ports is deprecated, use watch_port instead.
        #[prost(int32, tag = "3")]
        Watch(i32),
        #[prost(bytes, tag = "4")]
        WatchPort(::prost::alloc::vec::Vec<u8>),
    }
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ActionProfileMember {
    #[prost(uint32, tag = "1")]
    pub action_profile_id: u32,
    #[prost(uint32, tag = "2")]
    pub member_id: u32,
    #[prost(message, optional, tag = "3")]
    pub action: ::core::option::Option<Action>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ActionProfileGroup {
    #[prost(uint32, tag = "1")]
    pub action_profile_id: u32,
    #[prost(uint32, tag = "2")]
    pub group_id: u32,
    #[prost(message, repeated, tag = "3")]
    pub members: ::prost::alloc::vec::Vec<action_profile_group::Member>,
    #[prost(int32, tag = "4")]
    pub max_size: i32,
}
/// Nested message and enum types in `ActionProfileGroup`.
pub mod action_profile_group {
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Member {
        #[prost(uint32, tag = "1")]
        pub member_id: u32,
        #[prost(int32, tag = "2")]
        pub weight: i32,
        #[prost(oneof = "member::WatchKind", tags = "3, 4")]
        pub watch_kind: ::core::option::Option<member::WatchKind>,
    }
    /// Nested message and enum types in `Member`.
    pub mod member {
        #[allow(clippy::derive_partial_eq_without_eq)]
        #[derive(Clone, PartialEq, ::prost::Oneof)]
        pub enum WatchKind {
            /// Using int32 as ports is deprecated, use watch_port instead.
            #[prost(int32, tag = "3")]
            Watch(i32),
            #[prost(bytes, tag = "4")]
            WatchPort(::prost::alloc::vec::Vec<u8>),
        }
    }
}
/// For WriteRequest, Index is only valid if it is a leaf field of Index.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Index {
    #[prost(int64, tag = "1")]
    pub index: i64,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MeterEntry {
    #[prost(uint32, tag = "1")]
    pub meter_id: u32,
    #[prost(message, optional, tag = "2")]
    pub index: ::core::option::Option<Index>,
    #[prost(message, optional, tag = "3")]
    pub config: ::core::option::Option<MeterConfig>,
    #[prost(message, optional, tag = "4")]
    pub counter_data: ::core::option::Option<MeterCounterData>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DirectMeterEntry {
    /// The associated table entry. This field is required.
    /// table_entry.action is ignored. Other fields specify the match.
    #[prost(message, optional, tag = "1")]
    pub table_entry: ::core::option::Option<TableEntry>,
    #[prost(message, optional, tag = "2")]
    pub config: ::core::option::Option<MeterConfig>,
    #[prost(message, optional, tag = "3")]
    pub counter_data: ::core::option::Option<MeterCounterData>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MeterConfig {
    /// Committed information rate (units per sec)
    #[prost(int64, tag = "1")]
    pub cir: i64,
    /// Committed burst size
    #[prost(int64, tag = "2")]
    pub cburst: i64,
    /// Peak information rate (units per sec)
    #[prost(int64, tag = "3")]
    pub pir: i64,
    /// Peak burst size
    #[prost(int64, tag = "4")]
    pub pburst: i64,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CounterEntry {
    #[prost(uint32, tag = "1")]
    pub counter_id: u32,
    #[prost(message, optional, tag = "2")]
    pub index: ::core::option::Option<Index>,
    #[prost(message, optional, tag = "3")]
    pub data: ::core::option::Option<CounterData>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DirectCounterEntry {
    /// The associated table entry. This field is required.
    /// table_entry.action is ignored. Other fields specify the match.
    #[prost(message, optional, tag = "1")]
    pub table_entry: ::core::option::Option<TableEntry>,
    #[prost(message, optional, tag = "2")]
    pub data: ::core::option::Option<CounterData>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CounterData {
    #[prost(int64, tag = "1")]
    pub byte_count: i64,
    #[prost(int64, tag = "2")]
    pub packet_count: i64,
}
/// Per-color counters for assigned colors in a MeterEntry.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MeterCounterData {
    #[prost(message, optional, tag = "1")]
    pub green: ::core::option::Option<CounterData>,
    #[prost(message, optional, tag = "2")]
    pub yellow: ::core::option::Option<CounterData>,
    #[prost(message, optional, tag = "3")]
    pub red: ::core::option::Option<CounterData>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RegisterEntry {
    #[prost(uint32, tag = "1")]
    pub register_id: u32,
    #[prost(message, optional, tag = "2")]
    pub index: ::core::option::Option<Index>,
    #[prost(message, optional, tag = "3")]
    pub data: ::core::option::Option<P4Data>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ValueSetMember {
    #[prost(message, repeated, tag = "1")]
    pub r#match: ::prost::alloc::vec::Vec<FieldMatch>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ValueSetEntry {
    #[prost(uint32, tag = "1")]
    pub value_set_id: u32,
    #[prost(message, repeated, tag = "2")]
    pub members: ::prost::alloc::vec::Vec<ValueSetMember>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DigestEntry {
    #[prost(uint32, tag = "1")]
    pub digest_id: u32,
    #[prost(message, optional, tag = "2")]
    pub config: ::core::option::Option<digest_entry::Config>,
}
/// Nested message and enum types in `DigestEntry`.
pub mod digest_entry {
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Config {
        /// Maximum server buffering delay in nanoseconds for an outstanding
        /// digest message.
        #[prost(int64, tag = "1")]
        pub max_timeout_ns: i64,
        /// Maximum number of digest entries in a single DigestList message.
        #[prost(int32, tag = "2")]
        pub max_list_size: i32,
        /// Time in nanoseconds that a digest list is kept on the server
        /// waiting for the ack from the client.
        #[prost(int64, tag = "3")]
        pub ack_timeout_ns: i64,
    }
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DigestList {
    #[prost(uint32, tag = "1")]
    pub digest_id: u32,
    #[prost(uint64, tag = "2")]
    pub list_id: u64,
    /// P4 data pushed from the data plane to the service.
    #[prost(message, repeated, tag = "3")]
    pub data: ::prost::alloc::vec::Vec<P4Data>,
    /// Timestamp at which the server generated the message (in nanoseconds
    /// since Epoch)
    #[prost(int64, tag = "4")]
    pub timestamp: i64,
}
/// Message used by the client to ack a DigestList message from the server.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DigestListAck {
    #[prost(uint32, tag = "1")]
    pub digest_id: u32,
    #[prost(uint64, tag = "2")]
    pub list_id: u64,
}
/// Packet sent from the controller to the switch.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PacketOut {
    #[prost(bytes = "vec", tag = "1")]
    pub payload: ::prost::alloc::vec::Vec<u8>,
    /// This will be based on P4 header annotated as
    /// @controller_header("packet_out").
    #[prost(message, repeated, tag = "2")]
    pub metadata: ::prost::alloc::vec::Vec<PacketMetadata>,
}
/// Packet sent from the switch to the controller.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PacketIn {
    #[prost(bytes = "vec", tag = "1")]
    pub payload: ::prost::alloc::vec::Vec<u8>,
    /// This will be based on P4 header annotated as
    /// @controller_header("packet_in").
    #[prost(message, repeated, tag = "2")]
    pub metadata: ::prost::alloc::vec::Vec<PacketMetadata>,
}
/// Any metadata associated with the packet.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PacketMetadata {
    /// This refers to Metadata.id coming from P4Info ControllerPacketMetadata.
    #[prost(uint32, tag = "1")]
    pub metadata_id: u32,
    #[prost(bytes = "vec", tag = "2")]
    pub value: ::prost::alloc::vec::Vec<u8>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MulticastGroupEntry {
    #[prost(uint32, tag = "1")]
    pub multicast_group_id: u32,
    #[prost(message, repeated, tag = "2")]
    pub replicas: ::prost::alloc::vec::Vec<Replica>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CloneSessionEntry {
    #[prost(uint32, tag = "1")]
    pub session_id: u32,
    #[prost(message, repeated, tag = "2")]
    pub replicas: ::prost::alloc::vec::Vec<Replica>,
    #[prost(uint32, tag = "3")]
    pub class_of_service: u32,
    #[prost(int32, tag = "4")]
    pub packet_length_bytes: i32,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Replica {
    #[prost(uint32, tag = "1")]
    pub egress_port: u32,
    #[prost(uint32, tag = "2")]
    pub instance: u32,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PacketReplicationEngineEntry {
    #[prost(oneof = "packet_replication_engine_entry::Type", tags = "1, 2")]
    pub r#type: ::core::option::Option<packet_replication_engine_entry::Type>,
}
/// Nested message and enum types in `PacketReplicationEngineEntry`.
pub mod packet_replication_engine_entry {
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Type {
        #[prost(message, tag = "1")]
        MulticastGroupEntry(super::MulticastGroupEntry),
        #[prost(message, tag = "2")]
        CloneSessionEntry(super::CloneSessionEntry),
    }
}
/// From p4/v1/p4data.proto. Only the variants this library consumes are
/// carried here.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct P4Data {
    #[prost(oneof = "p4_data::Data", tags = "1, 11, 12")]
    pub data: ::core::option::Option<p4_data::Data>,
}
/// Nested message and enum types in `P4Data`.
pub mod p4_data {
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Data {
        #[prost(bytes, tag = "1")]
        Bitstring(::prost::alloc::vec::Vec<u8>),
        #[prost(bytes, tag = "11")]
        EnumValue(::prost::alloc::vec::Vec<u8>),
        #[prost(bool, tag = "12")]
        Bool(bool),
    }
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StreamMessageRequest {
    #[prost(oneof = "stream_message_request::Update", tags = "1, 2, 3, 4")]
    pub update: ::core::option::Option<stream_message_request::Update>,
}
/// Nested message and enum types in `StreamMessageRequest`.
pub mod stream_message_request {
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Update {
        #[prost(message, tag = "1")]
        Arbitration(super::MasterArbitrationUpdate),
        #[prost(message, tag = "2")]
        Packet(super::PacketOut),
        #[prost(message, tag = "3")]
        DigestAck(super::DigestListAck),
        #[prost(message, tag = "4")]
        Other(::prost_types::Any),
    }
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StreamMessageResponse {
    #[prost(oneof = "stream_message_response::Update", tags = "1, 2, 3, 4, 5, 6")]
    pub update: ::core::option::Option<stream_message_response::Update>,
}
/// Nested message and enum types in `StreamMessageResponse`.
pub mod stream_message_response {
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Update {
        #[prost(message, tag = "1")]
        Arbitration(super::MasterArbitrationUpdate),
        #[prost(message, tag = "2")]
        Packet(super::PacketIn),
        #[prost(message, tag = "3")]
        Digest(super::DigestList),
        #[prost(message, tag = "4")]
        IdleTimeoutNotification(super::IdleTimeoutNotification),
        #[prost(message, tag = "5")]
        Other(::prost_types::Any),
        /// Used by the server to asynchronously report errors which occur
        /// when processing StreamMessageRequest messages.
        #[prost(message, tag = "6")]
        Error(super::StreamError),
    }
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MasterArbitrationUpdate {
    #[prost(uint64, tag = "1")]
    pub device_id: u64,
    /// The role for which the primary client is being arbitrated. For use
    /// cases where multiple roles are not needed, the role can be left unset.
    #[prost(message, optional, tag = "2")]
    pub role: ::core::option::Option<Role>,
    /// The stream RPC with the highest election_id is the primary. The
    /// 'primary' controller instance populates this with its latest
    /// election_id. Backup controller instances populate this with their
    /// latest election_id.
    #[prost(message, optional, tag = "3")]
    pub election_id: ::core::option::Option<Uint128>,
    /// Populated by the server and ignored by the client on arbitration
    /// request. Possible values:
    /// - OK (leader) or ALREADY_EXISTS (follower) in arbitration responses
    /// - NOT_FOUND if the device does not know the specified device_id
    #[prost(message, optional, tag = "4")]
    pub status: ::core::option::Option<super::rpc::Status>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Role {
    /// Uniquely identifies this role. Deprecated in favor of name.
    #[deprecated]
    #[prost(uint64, tag = "1")]
    pub id: u64,
    /// Describes the role configuration, i.e. what operations, P4 entities,
    /// behaviors, etc. are in the scope of a given role. If config is not
    /// set (default case), it implies all P4 objects and control behaviors
    /// are in scope.
    #[prost(message, optional, tag = "2")]
    pub config: ::core::option::Option<::prost_types::Any>,
    /// Uniquely identifies this role.
    #[prost(string, tag = "3")]
    pub name: ::prost::alloc::string::String,
}
/// Used by the server to asynchronously report errors which occur when
/// processing StreamMessageRequest messages.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StreamError {
    /// gRPC canonical error code (see
    /// <https://developers.google.com/maps-booking/reference/grpc-api/status_codes>)
    #[prost(int32, tag = "1")]
    pub canonical_code: i32,
    /// Optional. An explanation of the error.
    #[prost(string, tag = "2")]
    pub message: ::prost::alloc::string::String,
    /// Optional. Target and architecture specific space to which this error
    /// belongs.
    #[prost(string, tag = "3")]
    pub space: ::prost::alloc::string::String,
    /// Optional. Numeric code drawn from target-specific error space above.
    #[prost(int32, tag = "4")]
    pub code: i32,
    #[prost(oneof = "stream_error::Details", tags = "7, 8, 9")]
    pub details: ::core::option::Option<stream_error::Details>,
}
/// Nested message and enum types in `StreamError`.
pub mod stream_error {
    /// Used by the server to convey additional information about the error.
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Details {
        #[prost(message, tag = "7")]
        PacketOut(super::PacketOutError),
        #[prost(message, tag = "8")]
        DigestListAck(super::DigestListAckError),
        #[prost(message, tag = "9")]
        Other(super::StreamOtherError),
    }
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PacketOutError {
    /// Optional. The packet out message that is in error.
    #[prost(message, optional, tag = "1")]
    pub packet_out: ::core::option::Option<PacketOut>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DigestListAckError {
    /// Optional. The digest list acknowledgement message in error.
    #[prost(message, optional, tag = "1")]
    pub digest_list_ack: ::core::option::Option<DigestListAck>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StreamOtherError {
    /// Optional. The stream message that is in error.
    #[prost(message, optional, tag = "1")]
    pub other: ::core::option::Option<::prost_types::Any>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Uint128 {
    /// Highest 64 bits of a 128 bit number.
    #[prost(uint64, tag = "1")]
    pub high: u64,
    /// Lowest 64 bits of a 128 bit number.
    #[prost(uint64, tag = "2")]
    pub low: u64,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SetForwardingPipelineConfigRequest {
    #[prost(uint64, tag = "1")]
    pub device_id: u64,
    #[deprecated]
    #[prost(uint64, tag = "2")]
    pub role_id: u64,
    #[prost(string, tag = "6")]
    pub role: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "3")]
    pub election_id: ::core::option::Option<Uint128>,
    #[prost(
        enumeration = "set_forwarding_pipeline_config_request::Action",
        tag = "4"
    )]
    pub action: i32,
    #[prost(message, optional, tag = "5")]
    pub config: ::core::option::Option<ForwardingPipelineConfig>,
}
/// Nested message and enum types in `SetForwardingPipelineConfigRequest`.
pub mod set_forwarding_pipeline_config_request {
    #[derive(
        Clone,
        Copy,
        Debug,
        PartialEq,
        Eq,
        Hash,
        PartialOrd,
        Ord,
        ::prost::Enumeration
    )]
    #[repr(i32)]
    pub enum Action {
        Unspecified = 0,
        /// Verify that the target can realize the given config. The forwarding
        /// state in the target is not modified.
        Verify = 1,
        /// Save the config if the target can realize it. The forwarding state
        /// in the target is not modified.
        VerifyAndSave = 2,
        /// Verify, save and realize the given config. Clear the forwarding
        /// state in the target.
        VerifyAndCommit = 3,
        /// Realize the last saved, but not yet committed, config.
        Commit = 4,
        /// Verify, save and realize the given config, while preserving the
        /// forwarding state in the target.
        ReconcileAndCommit = 5,
    }
    impl Action {
        /// String value of the enum field names used in the ProtoBuf definition.
        ///
        /// The values are not transformed in any way and thus are considered stable
        /// (if the ProtoBuf definition does not change) and safe for programmatic use.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                Action::Unspecified => "UNSPECIFIED",
                Action::Verify => "VERIFY",
                Action::VerifyAndSave => "VERIFY_AND_SAVE",
                Action::VerifyAndCommit => "VERIFY_AND_COMMIT",
                Action::Commit => "COMMIT",
                Action::ReconcileAndCommit => "RECONCILE_AND_COMMIT",
            }
        }
        /// Creates an enum from field names used in the ProtoBuf definition.
        pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
            match value {
                "UNSPECIFIED" => Some(Self::Unspecified),
                "VERIFY" => Some(Self::Verify),
                "VERIFY_AND_SAVE" => Some(Self::VerifyAndSave),
                "VERIFY_AND_COMMIT" => Some(Self::VerifyAndCommit),
                "COMMIT" => Some(Self::Commit),
                "RECONCILE_AND_COMMIT" => Some(Self::ReconcileAndCommit),
                _ => None,
            }
        }
    }
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SetForwardingPipelineConfigResponse {}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ForwardingPipelineConfig {
    #[prost(message, optional, tag = "1")]
    pub p4info: ::core::option::Option<super::p4info::P4Info>,
    /// Target-specific configuration.
    #[prost(bytes = "vec", tag = "2")]
    pub p4_device_config: ::prost::alloc::vec::Vec<u8>,
    #[prost(message, optional, tag = "3")]
    pub cookie: ::core::option::Option<forwarding_pipeline_config::Cookie>,
}
/// Nested message and enum types in `ForwardingPipelineConfig`.
pub mod forwarding_pipeline_config {
    /// Metadata (cookie) opaque to the target. A control plane can use this
    /// field to uniquely identify this config.
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Cookie {
        #[prost(uint64, tag = "1")]
        pub cookie: u64,
    }
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetForwardingPipelineConfigRequest {
    #[prost(uint64, tag = "1")]
    pub device_id: u64,
    #[prost(
        enumeration = "get_forwarding_pipeline_config_request::ResponseType",
        tag = "2"
    )]
    pub response_type: i32,
}
/// Nested message and enum types in `GetForwardingPipelineConfigRequest`.
pub mod get_forwarding_pipeline_config_request {
    /// Specifies the fields to populate in the response.
    #[derive(
        Clone,
        Copy,
        Debug,
        PartialEq,
        Eq,
        Hash,
        PartialOrd,
        Ord,
        ::prost::Enumeration
    )]
    #[repr(i32)]
    pub enum ResponseType {
        /// Default behaviour. Returns a ForwardingPipelineConfig with all
        /// fields set as stored by the target.
        All = 0,
        /// Reply by setting only the cookie field.
        CookieOnly = 1,
        /// Reply by setting the p4info and cookie fields.
        P4infoAndCookie = 2,
        /// Reply by setting the p4_device_config and cookie fields.
        DeviceConfigAndCookie = 3,
    }
    impl ResponseType {
        /// String value of the enum field names used in the ProtoBuf definition.
        ///
        /// The values are not transformed in any way and thus are considered stable
        /// (if the ProtoBuf definition does not change) and safe for programmatic use.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                ResponseType::All => "ALL",
                ResponseType::CookieOnly => "COOKIE_ONLY",
                ResponseType::P4infoAndCookie => "P4INFO_AND_COOKIE",
                ResponseType::DeviceConfigAndCookie => "DEVICE_CONFIG_AND_COOKIE",
            }
        }
        /// Creates an enum from field names used in the ProtoBuf definition.
        pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
            match value {
                "ALL" => Some(Self::All),
                "COOKIE_ONLY" => Some(Self::CookieOnly),
                "P4INFO_AND_COOKIE" => Some(Self::P4infoAndCookie),
                "DEVICE_CONFIG_AND_COOKIE" => Some(Self::DeviceConfigAndCookie),
                _ => None,
            }
        }
    }
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetForwardingPipelineConfigResponse {
    #[prost(message, optional, tag = "1")]
    pub config: ::core::option::Option<ForwardingPipelineConfig>,
}
/// Error message used to report a single P4-entity error for a Write RPC.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Error {
    /// gRPC canonical error code (see
    /// github.com/grpc/grpc-go/blob/master/codes/codes.go)
    #[prost(int32, tag = "1")]
    pub canonical_code: i32,
    /// Detailed error message.
    #[prost(string, tag = "2")]
    pub message: ::prost::alloc::string::String,
    /// Target and architecture specific space to which this error belongs.
    /// We encourage using triplet: <target>-<arch>-<vendor>,
    /// e.g."targetX-psa-vendor1" or "targetY-psa-vendor2".
    #[prost(string, tag = "3")]
    pub space: ::prost::alloc::string::String,
    /// Numeric code drawn from target-specific error space above.
    #[prost(int32, tag = "4")]
    pub code: i32,
    /// Optional: space to extend the error message with details.
    #[prost(message, optional, tag = "5")]
    pub details: ::core::option::Option<::prost_types::Any>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CapabilitiesRequest {}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CapabilitiesResponse {
    /// The full semantic version string (e.g. "1.1.0-rc.1") corresponding to
    /// the version of the P4Runtime API currently implemented by the server.
    #[prost(string, tag = "1")]
    pub p4runtime_api_version: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct IdleTimeoutNotification {
    /// The only fields that are expected to be set are the key fields
    /// (table_id, match and priority) along with the controller_metadata,
    /// metadata and time_since_last_hit fields.
    #[prost(message, repeated, tag = "1")]
    pub table_entry: ::prost::alloc::vec::Vec<TableEntry>,
    /// Timestamp at which the server generated the message (in nanoseconds
    /// since Epoch)
    #[prost(int64, tag = "2")]
    pub timestamp: i64,
}
/// Generated client implementations.
pub mod p4_runtime_client {
    #![allow(unused_variables, dead_code, missing_docs, clippy::let_unit_value)]
    use tonic::codegen::*;
    use tonic::codegen::http::Uri;
    #[derive(Debug, Clone)]
    pub struct P4RuntimeClient<T> {
        inner: tonic::client::Grpc<T>,
    }
    impl P4RuntimeClient<tonic::transport::Channel> {
        /// Attempt to create a new client by connecting to a given endpoint.
        pub async fn connect<D>(dst: D) -> Result<Self, tonic::transport::Error>
        where
            D: TryInto<tonic::transport::Endpoint>,
            D::Error: Into<StdError>,
        {
            let conn = tonic::transport::Endpoint::new(dst)?.connect().await?;
            Ok(Self::new(conn))
        }
    }
    impl<T> P4RuntimeClient<T>
    where
        T: tonic::client::GrpcService<tonic::body::BoxBody>,
        T::Error: Into<StdError>,
        T::ResponseBody: Body<Data = Bytes> + Send + 'static,
        <T::ResponseBody as Body>::Error: Into<StdError> + Send,
    {
        pub fn new(inner: T) -> Self {
            let inner = tonic::client::Grpc::new(inner);
            Self { inner }
        }
        pub fn with_origin(inner: T, origin: Uri) -> Self {
            let inner = tonic::client::Grpc::with_origin(inner, origin);
            Self { inner }
        }
        pub fn with_interceptor<F>(
            inner: T,
            interceptor: F,
        ) -> P4RuntimeClient<InterceptedService<T, F>>
        where
            F: tonic::service::Interceptor,
            T::ResponseBody: Default,
            T: tonic::codegen::Service<
                http::Request<tonic::body::BoxBody>,
                Response = http::Response<
                    <T as tonic::client::GrpcService<tonic::body::BoxBody>>::ResponseBody,
                >,
            >,
            <T as tonic::codegen::Service<
                http::Request<tonic::body::BoxBody>,
            >>::Error: Into<StdError> + Send + Sync,
        {
            P4RuntimeClient::new(InterceptedService::new(inner, interceptor))
        }
        /// Compress requests with the given encoding.
        ///
        /// This requires the server to support it otherwise it might respond with an
        /// error.
        #[must_use]
        pub fn send_compressed(mut self, encoding: CompressionEncoding) -> Self {
            self.inner = self.inner.send_compressed(encoding);
            self
        }
        /// Enable decompressing responses.
        #[must_use]
        pub fn accept_compressed(mut self, encoding: CompressionEncoding) -> Self {
            self.inner = self.inner.accept_compressed(encoding);
            self
        }
        /// Update one or more P4 entities on the target.
        pub async fn write(
            &mut self,
            request: impl tonic::IntoRequest<super::WriteRequest>,
        ) -> Result<tonic::Response<super::WriteResponse>, tonic::Status> {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::new(
                        tonic::Code::Unknown,
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/p4.v1.P4Runtime/Write");
            self.inner.unary(request.into_request(), path, codec).await
        }
        /// Read one or more P4 entities from the target.
        pub async fn read(
            &mut self,
            request: impl tonic::IntoRequest<super::ReadRequest>,
        ) -> Result<
            tonic::Response<tonic::codec::Streaming<super::ReadResponse>>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::new(
                        tonic::Code::Unknown,
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/p4.v1.P4Runtime/Read");
            self.inner.server_streaming(request.into_request(), path, codec).await
        }
        /// Sets the P4 forwarding-pipeline config.
        pub async fn set_forwarding_pipeline_config(
            &mut self,
            request: impl tonic::IntoRequest<
                super::SetForwardingPipelineConfigRequest,
            >,
        ) -> Result<
            tonic::Response<super::SetForwardingPipelineConfigResponse>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::new(
                        tonic::Code::Unknown,
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/p4.v1.P4Runtime/SetForwardingPipelineConfig",
            );
            self.inner.unary(request.into_request(), path, codec).await
        }
        /// Gets the current P4 forwarding-pipeline config.
        pub async fn get_forwarding_pipeline_config(
            &mut self,
            request: impl tonic::IntoRequest<
                super::GetForwardingPipelineConfigRequest,
            >,
        ) -> Result<
            tonic::Response<super::GetForwardingPipelineConfigResponse>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::new(
                        tonic::Code::Unknown,
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/p4.v1.P4Runtime/GetForwardingPipelineConfig",
            );
            self.inner.unary(request.into_request(), path, codec).await
        }
        /// Represents the bidirectional stream between the controller and the
        /// switch (initiated by the controller), and is managed for the
        /// following purposes:
        /// - connection initiation through client arbitration
        /// - indicating switch session liveness: the session is live when
        ///   stream messages are exchanged successfully, or idle otherwise.
        /// - the controller sending/receiving packets to/from the switch
        /// - streaming of notifications from the switch
        pub async fn stream_channel(
            &mut self,
            request: impl tonic::IntoStreamingRequest<
                Message = super::StreamMessageRequest,
            >,
        ) -> Result<
            tonic::Response<tonic::codec::Streaming<super::StreamMessageResponse>>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::new(
                        tonic::Code::Unknown,
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/p4.v1.P4Runtime/StreamChannel",
            );
            self.inner.streaming(request.into_streaming_request(), path, codec).await
        }
        pub async fn capabilities(
            &mut self,
            request: impl tonic::IntoRequest<super::CapabilitiesRequest>,
        ) -> Result<tonic::Response<super::CapabilitiesResponse>, tonic::Status> {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::new(
                        tonic::Code::Unknown,
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/p4.v1.P4Runtime/Capabilities",
            );
            self.inner.unary(request.into_request(), path, codec).await
        }
    }
}
