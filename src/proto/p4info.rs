// Pregenerated from p4/config/v1/p4info.proto and p4/config/v1/p4types.proto
// (package p4.config.v1).
// @generated

#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct P4Info {
    #[prost(message, optional, tag = "1")]
    pub pkg_info: ::core::option::Option<PkgInfo>,
    #[prost(message, repeated, tag = "2")]
    pub tables: ::prost::alloc::vec::Vec<Table>,
    #[prost(message, repeated, tag = "3")]
    pub actions: ::prost::alloc::vec::Vec<Action>,
    #[prost(message, repeated, tag = "4")]
    pub action_profiles: ::prost::alloc::vec::Vec<ActionProfile>,
    #[prost(message, repeated, tag = "5")]
    pub counters: ::prost::alloc::vec::Vec<Counter>,
    #[prost(message, repeated, tag = "6")]
    pub direct_counters: ::prost::alloc::vec::Vec<DirectCounter>,
    #[prost(message, repeated, tag = "7")]
    pub meters: ::prost::alloc::vec::Vec<Meter>,
    #[prost(message, repeated, tag = "8")]
    pub direct_meters: ::prost::alloc::vec::Vec<DirectMeter>,
    #[prost(message, repeated, tag = "9")]
    pub controller_packet_metadata: ::prost::alloc::vec::Vec<
        ControllerPacketMetadata,
    >,
    #[prost(message, repeated, tag = "10")]
    pub value_sets: ::prost::alloc::vec::Vec<ValueSet>,
    #[prost(message, repeated, tag = "11")]
    pub registers: ::prost::alloc::vec::Vec<Register>,
    #[prost(message, repeated, tag = "12")]
    pub digests: ::prost::alloc::vec::Vec<Digest>,
    #[prost(message, repeated, tag = "100")]
    pub externs: ::prost::alloc::vec::Vec<Extern>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Documentation {
    #[prost(string, tag = "1")]
    pub brief: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub description: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PkgInfo {
    /// a definitive name for the configuration, e.g. switch.p4_v1.0
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub version: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "3")]
    pub doc: ::core::option::Option<Documentation>,
    #[prost(string, repeated, tag = "4")]
    pub annotations: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    /// the target architecture, e.g. "psa"
    #[prost(string, tag = "5")]
    pub arch: ::prost::alloc::string::String,
    #[prost(string, tag = "6")]
    pub organization: ::prost::alloc::string::String,
    #[prost(string, tag = "7")]
    pub contact: ::prost::alloc::string::String,
    #[prost(string, tag = "8")]
    pub url: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Preamble {
    /// ids share the same number-space; e.g. table ids cannot overlap with
    /// counter ids
    #[prost(uint32, tag = "1")]
    pub id: u32,
    /// fully qualified name of the P4 object, e.g. c1.c2.ipv4_lpm
    #[prost(string, tag = "2")]
    pub name: ::prost::alloc::string::String,
    /// an alias for the P4 object, probably shorter than its name. The
    /// default alias (e.g. in p4c) is the shortest unique suffix of
    /// components in the name
    #[prost(string, tag = "3")]
    pub alias: ::prost::alloc::string::String,
    #[prost(string, repeated, tag = "4")]
    pub annotations: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    /// Documentation of the entity
    #[prost(message, optional, tag = "5")]
    pub doc: ::core::option::Option<Documentation>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Extern {
    /// the extern_type_id is unique for this architecture and must be in the
    /// reserved range \[0x81, 0xfe\]
    #[prost(uint32, tag = "1")]
    pub extern_type_id: u32,
    #[prost(string, tag = "2")]
    pub extern_type_name: ::prost::alloc::string::String,
    #[prost(message, repeated, tag = "3")]
    pub instances: ::prost::alloc::vec::Vec<ExternInstance>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ExternInstance {
    #[prost(message, optional, tag = "1")]
    pub preamble: ::core::option::Option<Preamble>,
    /// specific to the extern type
    #[prost(message, optional, tag = "2")]
    pub info: ::core::option::Option<::prost_types::Any>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MatchField {
    #[prost(uint32, tag = "1")]
    pub id: u32,
    #[prost(string, tag = "2")]
    pub name: ::prost::alloc::string::String,
    #[prost(string, repeated, tag = "3")]
    pub annotations: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(int32, tag = "4")]
    pub bitwidth: i32,
    #[prost(message, optional, tag = "6")]
    pub doc: ::core::option::Option<Documentation>,
    /// the semantics of the match field, either one of the pre-defined
    /// match types or an architecture-specific one
    #[prost(oneof = "match_field::Match", tags = "5, 7")]
    pub r#match: ::core::option::Option<match_field::Match>,
}
/// Nested message and enum types in `MatchField`.
pub mod match_field {
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
    pub enum MatchType {
        Unspecified = 0,
        Exact = 2,
        Lpm = 3,
        Ternary = 4,
        Range = 5,
        Optional = 6,
    }
    impl MatchType {
        /// String value of the enum field names used in the ProtoBuf definition.
        ///
        /// The values are not transformed in any way and thus are considered stable
        /// (if the ProtoBuf definition does not change) and safe for programmatic use.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                MatchType::Unspecified => "UNSPECIFIED",
                MatchType::Exact => "EXACT",
                MatchType::Lpm => "LPM",
                MatchType::Ternary => "TERNARY",
                MatchType::Range => "RANGE",
                MatchType::Optional => "OPTIONAL",
            }
        }
        /// Creates an enum from field names used in the ProtoBuf definition.
        pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
            match value {
                "UNSPECIFIED" => Some(Self::Unspecified),
                "EXACT" => Some(Self::Exact),
                "LPM" => Some(Self::Lpm),
                "TERNARY" => Some(Self::Ternary),
                "RANGE" => Some(Self::Range),
                "OPTIONAL" => Some(Self::Optional),
                _ => None,
            }
        }
    }
    /// the semantics of the match field
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Match {
        #[prost(enumeration = "MatchType", tag = "5")]
        MatchType(i32),
        /// used for architecture-specific match types
        #[prost(string, tag = "7")]
        OtherMatchType(::prost::alloc::string::String),
    }
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ActionRef {
    #[prost(uint32, tag = "1")]
    pub id: u32,
    #[prost(string, repeated, tag = "2")]
    pub annotations: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(enumeration = "action_ref::Scope", tag = "3")]
    pub scope: i32,
}
/// Nested message and enum types in `ActionRef`.
pub mod action_ref {
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
    pub enum Scope {
        TableAndDefault = 0,
        TableOnly = 1,
        DefaultOnly = 2,
    }
    impl Scope {
        /// String value of the enum field names used in the ProtoBuf definition.
        ///
        /// The values are not transformed in any way and thus are considered stable
        /// (if the ProtoBuf definition does not change) and safe for programmatic use.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                Scope::TableAndDefault => "TABLE_AND_DEFAULT",
                Scope::TableOnly => "TABLE_ONLY",
                Scope::DefaultOnly => "DEFAULT_ONLY",
            }
        }
        /// Creates an enum from field names used in the ProtoBuf definition.
        pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
            match value {
                "TABLE_AND_DEFAULT" => Some(Self::TableAndDefault),
                "TABLE_ONLY" => Some(Self::TableOnly),
                "DEFAULT_ONLY" => Some(Self::DefaultOnly),
                _ => None,
            }
        }
    }
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Table {
    #[prost(message, optional, tag = "1")]
    pub preamble: ::core::option::Option<Preamble>,
    #[prost(message, repeated, tag = "2")]
    pub match_fields: ::prost::alloc::vec::Vec<MatchField>,
    /// even when the table is indirect (see implementation_id) below, this
    /// field includes all possible actions for the table
    #[prost(message, repeated, tag = "3")]
    pub action_refs: ::prost::alloc::vec::Vec<ActionRef>,
    /// 0 (default value) means that the table does not have a const default
    /// action
    #[prost(uint32, tag = "4")]
    pub const_default_action_id: u32,
    /// P4 id of the "implementation" for this table (e.g. action profile id);
    /// 0 (default value) means that the table is a regular (direct) match
    /// table
    #[prost(uint32, tag = "6")]
    pub implementation_id: u32,
    /// ids of the direct resources (if any) attached to this table; for
    /// v1.0.x of P4Runtime, these resources are counters and meters
    #[prost(uint32, repeated, tag = "7")]
    pub direct_resource_ids: ::prost::alloc::vec::Vec<u32>,
    /// max number of entries the table supports; 0 => unknown
    #[prost(int64, tag = "8")]
    pub size: i64,
    #[prost(enumeration = "table::IdleTimeoutBehavior", tag = "9")]
    pub idle_timeout_behavior: i32,
    /// true iff the table's entries are immutable
    #[prost(bool, tag = "10")]
    pub is_const_table: bool,
}
/// Nested message and enum types in `Table`.
pub mod table {
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
    pub enum IdleTimeoutBehavior {
        NoTimeout = 0,
        NotifyControl = 1,
    }
    impl IdleTimeoutBehavior {
        /// String value of the enum field names used in the ProtoBuf definition.
        ///
        /// The values are not transformed in any way and thus are considered stable
        /// (if the ProtoBuf definition does not change) and safe for programmatic use.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                IdleTimeoutBehavior::NoTimeout => "NO_TIMEOUT",
                IdleTimeoutBehavior::NotifyControl => "NOTIFY_CONTROL",
            }
        }
        /// Creates an enum from field names used in the ProtoBuf definition.
        pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
            match value {
                "NO_TIMEOUT" => Some(Self::NoTimeout),
                "NOTIFY_CONTROL" => Some(Self::NotifyControl),
                _ => None,
            }
        }
    }
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Action {
    #[prost(message, optional, tag = "1")]
    pub preamble: ::core::option::Option<Preamble>,
    #[prost(message, repeated, tag = "2")]
    pub params: ::prost::alloc::vec::Vec<action::Param>,
}
/// Nested message and enum types in `Action`.
pub mod action {
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Param {
        #[prost(uint32, tag = "1")]
        pub id: u32,
        #[prost(string, tag = "2")]
        pub name: ::prost::alloc::string::String,
        #[prost(string, repeated, tag = "3")]
        pub annotations: ::prost::alloc::vec::Vec<
            ::prost::alloc::string::String,
        >,
        #[prost(int32, tag = "4")]
        pub bitwidth: i32,
        #[prost(message, optional, tag = "5")]
        pub doc: ::core::option::Option<super::Documentation>,
    }
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ActionProfile {
    #[prost(message, optional, tag = "1")]
    pub preamble: ::core::option::Option<Preamble>,
    /// the ids of the tables sharing this action profile
    #[prost(uint32, repeated, tag = "2")]
    pub table_ids: ::prost::alloc::vec::Vec<u32>,
    /// true iff the action profile used dynamic selection
    #[prost(bool, tag = "3")]
    pub with_selector: bool,
    /// max number of member entries across all groups if the action profile
    /// has a selector, or across all tables sharing it if it does not
    #[prost(int64, tag = "4")]
    pub size: i64,
    /// max number of weighted member entries in a single group
    #[prost(int32, tag = "5")]
    pub max_group_size: i32,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CounterSpec {
    #[prost(enumeration = "counter_spec::Unit", tag = "1")]
    pub unit: i32,
}
/// Nested message and enum types in `CounterSpec`.
pub mod counter_spec {
    /// Corresponds to 'type' attribute for counter in P4 spec.
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
    pub enum Unit {
        Unspecified = 0,
        Bytes = 1,
        Packets = 2,
        Both = 3,
    }
    impl Unit {
        /// String value of the enum field names used in the ProtoBuf definition.
        ///
        /// The values are not transformed in any way and thus are considered stable
        /// (if the ProtoBuf definition does not change) and safe for programmatic use.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                Unit::Unspecified => "UNSPECIFIED",
                Unit::Bytes => "BYTES",
                Unit::Packets => "PACKETS",
                Unit::Both => "BOTH",
            }
        }
        /// Creates an enum from field names used in the ProtoBuf definition.
        pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
            match value {
                "UNSPECIFIED" => Some(Self::Unspecified),
                "BYTES" => Some(Self::Bytes),
                "PACKETS" => Some(Self::Packets),
                "BOTH" => Some(Self::Both),
                _ => None,
            }
        }
    }
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Counter {
    #[prost(message, optional, tag = "1")]
    pub preamble: ::core::option::Option<Preamble>,
    #[prost(message, optional, tag = "2")]
    pub spec: ::core::option::Option<CounterSpec>,
    /// number of entries in the counter array
    #[prost(int64, tag = "3")]
    pub size: i64,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DirectCounter {
    #[prost(message, optional, tag = "1")]
    pub preamble: ::core::option::Option<Preamble>,
    #[prost(message, optional, tag = "2")]
    pub spec: ::core::option::Option<CounterSpec>,
    /// the id of the table to which the counter is attached
    #[prost(uint32, tag = "3")]
    pub direct_table_id: u32,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MeterSpec {
    #[prost(enumeration = "meter_spec::Unit", tag = "1")]
    pub unit: i32,
}
/// Nested message and enum types in `MeterSpec`.
pub mod meter_spec {
    /// Corresponds to 'type' attribute for meter in P4 spec.
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
    pub enum Unit {
        Unspecified = 0,
        Bytes = 1,
        Packets = 2,
    }
    impl Unit {
        /// String value of the enum field names used in the ProtoBuf definition.
        ///
        /// The values are not transformed in any way and thus are considered stable
        /// (if the ProtoBuf definition does not change) and safe for programmatic use.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                Unit::Unspecified => "UNSPECIFIED",
                Unit::Bytes => "BYTES",
                Unit::Packets => "PACKETS",
            }
        }
        /// Creates an enum from field names used in the ProtoBuf definition.
        pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
            match value {
                "UNSPECIFIED" => Some(Self::Unspecified),
                "BYTES" => Some(Self::Bytes),
                "PACKETS" => Some(Self::Packets),
                _ => None,
            }
        }
    }
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Meter {
    #[prost(message, optional, tag = "1")]
    pub preamble: ::core::option::Option<Preamble>,
    #[prost(message, optional, tag = "2")]
    pub spec: ::core::option::Option<MeterSpec>,
    /// number of entries in the meter array
    #[prost(int64, tag = "3")]
    pub size: i64,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DirectMeter {
    #[prost(message, optional, tag = "1")]
    pub preamble: ::core::option::Option<Preamble>,
    #[prost(message, optional, tag = "2")]
    pub spec: ::core::option::Option<MeterSpec>,
    /// the id of the table to which the meter is attached
    #[prost(uint32, tag = "3")]
    pub direct_table_id: u32,
}
/// Any metadata associated with controller Packet-IO (Packet-In or
/// Packet-Out) is modeled as P4 headers carrying special annotations
/// @controller_header("packet_out") and @controller_header("packet_in")
/// respectively.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ControllerPacketMetadata {
    /// preamble.name and preamble.id will specify header type ("packet_out"
    /// or "packet_in" for now)
    #[prost(message, optional, tag = "1")]
    pub preamble: ::core::option::Option<Preamble>,
    /// in header declaration order
    #[prost(message, repeated, tag = "2")]
    pub metadata: ::prost::alloc::vec::Vec<controller_packet_metadata::Metadata>,
}
/// Nested message and enum types in `ControllerPacketMetadata`.
pub mod controller_packet_metadata {
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Metadata {
        /// unique id per header type
        #[prost(uint32, tag = "1")]
        pub id: u32,
        #[prost(string, tag = "2")]
        pub name: ::prost::alloc::string::String,
        #[prost(string, repeated, tag = "3")]
        pub annotations: ::prost::alloc::vec::Vec<
            ::prost::alloc::string::String,
        >,
        #[prost(int32, tag = "4")]
        pub bitwidth: i32,
    }
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ValueSet {
    #[prost(message, optional, tag = "1")]
    pub preamble: ::core::option::Option<Preamble>,
    /// the format of the stored values
    #[prost(message, optional, tag = "2")]
    pub r#match: ::core::option::Option<MatchField>,
    /// number of entries the value set supports; 0 => unknown
    #[prost(int64, tag = "3")]
    pub size: i64,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Register {
    #[prost(message, optional, tag = "1")]
    pub preamble: ::core::option::Option<Preamble>,
    #[prost(message, optional, tag = "2")]
    pub type_spec: ::core::option::Option<P4DataTypeSpec>,
    /// number of entries in the register array
    #[prost(int64, tag = "3")]
    pub size: i64,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Digest {
    #[prost(message, optional, tag = "1")]
    pub preamble: ::core::option::Option<Preamble>,
    /// the format of the digested data
    #[prost(message, optional, tag = "2")]
    pub type_spec: ::core::option::Option<P4DataTypeSpec>,
}
/// From p4/config/v1/p4types.proto. Describes a P4 compile-time type; only
/// the bitstring-like variants are carried here.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct P4DataTypeSpec {
    #[prost(oneof = "p4_data_type_spec::TypeSpec", tags = "1")]
    pub type_spec: ::core::option::Option<p4_data_type_spec::TypeSpec>,
}
/// Nested message and enum types in `P4DataTypeSpec`.
pub mod p4_data_type_spec {
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum TypeSpec {
        #[prost(message, tag = "1")]
        Bitstring(super::P4BitstringLikeTypeSpec),
    }
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct P4BitstringLikeTypeSpec {
    #[prost(oneof = "p4_bitstring_like_type_spec::TypeSpec", tags = "1, 2, 3")]
    pub type_spec: ::core::option::Option<
        p4_bitstring_like_type_spec::TypeSpec,
    >,
}
/// Nested message and enum types in `P4BitstringLikeTypeSpec`.
pub mod p4_bitstring_like_type_spec {
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum TypeSpec {
        /// bit<W>
        #[prost(message, tag = "1")]
        Bit(super::P4BitTypeSpec),
        /// int<W>
        #[prost(message, tag = "2")]
        Int(super::P4IntTypeSpec),
        /// varbit<W>
        #[prost(message, tag = "3")]
        Varbit(super::P4VarbitTypeSpec),
    }
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct P4BitTypeSpec {
    #[prost(int32, tag = "1")]
    pub bitwidth: i32,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct P4IntTypeSpec {
    #[prost(int32, tag = "1")]
    pub bitwidth: i32,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct P4VarbitTypeSpec {
    #[prost(int32, tag = "1")]
    pub max_bitwidth: i32,
}
