// ── Sensor catalog ──
//
// The static, ordered table of every analytics sensor. One entry per
// published field; extraction functions are pure pass-throughs of
// snapshot fields. Only the headline status sensors are enabled by
// default -- the per-transport breakdowns stay opt-in.

use dnslens_core::model::{
    AnalyticsDnssec, AnalyticsEncryption, AnalyticsIpVersions, AnalyticsProtocols,
    AnalyticsStatus,
};

use crate::description::{SensorDescription, ValueFn};
use crate::entity::{EntityCategory, Icon, StateClass, StateValue, Unit};

const ICON_DNS: Icon = Icon("mdi:dns");
const ICON_IP: Icon = Icon("mdi:ip");
const ICON_LOCK: Icon = Icon("mdi:lock");
const ICON_LOCK_ALERT: Icon = Icon("mdi:lock-alert");
const ICON_LOCK_CHECK: Icon = Icon("mdi:lock-check");
const ICON_LOCK_OPEN: Icon = Icon("mdi:lock-open");

/// Every analytics sensor the platform can register, in display order.
pub const SENSORS: &[SensorDescription] = &[
    // ── Status ──────────────────────────────────────────────────────
    SensorDescription {
        key: "all_queries",
        name: "DNS queries",
        unit: Unit::Queries,
        state_class: StateClass::Measurement,
        entity_category: EntityCategory::Diagnostic,
        entity_registry_enabled_default: true,
        icon: ICON_DNS,
        value: ValueFn::Status(|data: &AnalyticsStatus| StateValue::Count(data.all_queries)),
    },
    SensorDescription {
        key: "allowed_queries",
        name: "DNS queries allowed",
        unit: Unit::Queries,
        state_class: StateClass::Measurement,
        entity_category: EntityCategory::Diagnostic,
        entity_registry_enabled_default: true,
        icon: ICON_DNS,
        value: ValueFn::Status(|data: &AnalyticsStatus| StateValue::Count(data.allowed_queries)),
    },
    SensorDescription {
        key: "blocked_queries",
        name: "DNS queries blocked",
        unit: Unit::Queries,
        state_class: StateClass::Measurement,
        entity_category: EntityCategory::Diagnostic,
        entity_registry_enabled_default: true,
        icon: ICON_DNS,
        value: ValueFn::Status(|data: &AnalyticsStatus| StateValue::Count(data.blocked_queries)),
    },
    SensorDescription {
        key: "relayed_queries",
        name: "DNS queries relayed",
        unit: Unit::Queries,
        state_class: StateClass::Measurement,
        entity_category: EntityCategory::Diagnostic,
        entity_registry_enabled_default: true,
        icon: ICON_DNS,
        value: ValueFn::Status(|data: &AnalyticsStatus| StateValue::Count(data.relayed_queries)),
    },
    SensorDescription {
        key: "blocked_queries_ratio",
        name: "DNS queries blocked ratio",
        unit: Unit::Percentage,
        state_class: StateClass::Measurement,
        entity_category: EntityCategory::Diagnostic,
        entity_registry_enabled_default: true,
        icon: ICON_DNS,
        value: ValueFn::Status(|data: &AnalyticsStatus| {
            StateValue::Ratio(data.blocked_queries_ratio)
        }),
    },
    // ── Protocols ───────────────────────────────────────────────────
    SensorDescription {
        key: "doh_queries",
        name: "DNS-over-HTTPS queries",
        unit: Unit::Queries,
        state_class: StateClass::Measurement,
        entity_category: EntityCategory::Diagnostic,
        entity_registry_enabled_default: false,
        icon: ICON_DNS,
        value: ValueFn::Protocols(|data: &AnalyticsProtocols| StateValue::Count(data.doh_queries)),
    },
    SensorDescription {
        key: "doh3_queries",
        name: "DNS-over-HTTP/3 queries",
        unit: Unit::Queries,
        state_class: StateClass::Measurement,
        entity_category: EntityCategory::Diagnostic,
        entity_registry_enabled_default: false,
        icon: ICON_DNS,
        value: ValueFn::Protocols(|data: &AnalyticsProtocols| {
            StateValue::Count(data.doh3_queries)
        }),
    },
    SensorDescription {
        key: "dot_queries",
        name: "DNS-over-TLS queries",
        unit: Unit::Queries,
        state_class: StateClass::Measurement,
        entity_category: EntityCategory::Diagnostic,
        entity_registry_enabled_default: false,
        icon: ICON_DNS,
        value: ValueFn::Protocols(|data: &AnalyticsProtocols| StateValue::Count(data.dot_queries)),
    },
    SensorDescription {
        key: "doq_queries",
        name: "DNS-over-QUIC queries",
        unit: Unit::Queries,
        state_class: StateClass::Measurement,
        entity_category: EntityCategory::Diagnostic,
        entity_registry_enabled_default: false,
        icon: ICON_DNS,
        value: ValueFn::Protocols(|data: &AnalyticsProtocols| StateValue::Count(data.doq_queries)),
    },
    SensorDescription {
        key: "tcp_queries",
        name: "TCP queries",
        unit: Unit::Queries,
        state_class: StateClass::Measurement,
        entity_category: EntityCategory::Diagnostic,
        entity_registry_enabled_default: false,
        icon: ICON_DNS,
        value: ValueFn::Protocols(|data: &AnalyticsProtocols| StateValue::Count(data.tcp_queries)),
    },
    SensorDescription {
        key: "udp_queries",
        name: "UDP queries",
        unit: Unit::Queries,
        state_class: StateClass::Measurement,
        entity_category: EntityCategory::Diagnostic,
        entity_registry_enabled_default: false,
        icon: ICON_DNS,
        value: ValueFn::Protocols(|data: &AnalyticsProtocols| StateValue::Count(data.udp_queries)),
    },
    SensorDescription {
        key: "doh_queries_ratio",
        name: "DNS-over-HTTPS queries ratio",
        unit: Unit::Percentage,
        state_class: StateClass::Measurement,
        entity_category: EntityCategory::Diagnostic,
        entity_registry_enabled_default: false,
        icon: ICON_DNS,
        value: ValueFn::Protocols(|data: &AnalyticsProtocols| {
            StateValue::Ratio(data.doh_queries_ratio)
        }),
    },
    SensorDescription {
        key: "doh3_queries_ratio",
        name: "DNS-over-HTTP/3 queries ratio",
        unit: Unit::Percentage,
        state_class: StateClass::Measurement,
        entity_category: EntityCategory::Diagnostic,
        entity_registry_enabled_default: false,
        icon: ICON_DNS,
        value: ValueFn::Protocols(|data: &AnalyticsProtocols| {
            StateValue::Ratio(data.doh3_queries_ratio)
        }),
    },
    SensorDescription {
        key: "dot_queries_ratio",
        name: "DNS-over-TLS queries ratio",
        unit: Unit::Percentage,
        state_class: StateClass::Measurement,
        entity_category: EntityCategory::Diagnostic,
        entity_registry_enabled_default: false,
        icon: ICON_DNS,
        value: ValueFn::Protocols(|data: &AnalyticsProtocols| {
            StateValue::Ratio(data.dot_queries_ratio)
        }),
    },
    SensorDescription {
        key: "doq_queries_ratio",
        name: "DNS-over-QUIC queries ratio",
        unit: Unit::Percentage,
        state_class: StateClass::Measurement,
        entity_category: EntityCategory::Diagnostic,
        entity_registry_enabled_default: false,
        icon: ICON_DNS,
        value: ValueFn::Protocols(|data: &AnalyticsProtocols| {
            StateValue::Ratio(data.doq_queries_ratio)
        }),
    },
    SensorDescription {
        key: "tcp_queries_ratio",
        name: "TCP queries ratio",
        unit: Unit::Percentage,
        state_class: StateClass::Measurement,
        entity_category: EntityCategory::Diagnostic,
        entity_registry_enabled_default: false,
        icon: ICON_DNS,
        value: ValueFn::Protocols(|data: &AnalyticsProtocols| {
            StateValue::Ratio(data.tcp_queries_ratio)
        }),
    },
    SensorDescription {
        key: "udp_queries_ratio",
        name: "UDP queries ratio",
        unit: Unit::Percentage,
        state_class: StateClass::Measurement,
        entity_category: EntityCategory::Diagnostic,
        entity_registry_enabled_default: false,
        icon: ICON_DNS,
        value: ValueFn::Protocols(|data: &AnalyticsProtocols| {
            StateValue::Ratio(data.udp_queries_ratio)
        }),
    },
    // ── Encryption ──────────────────────────────────────────────────
    SensorDescription {
        key: "encrypted_queries",
        name: "Encrypted queries",
        unit: Unit::Queries,
        state_class: StateClass::Measurement,
        entity_category: EntityCategory::Diagnostic,
        entity_registry_enabled_default: false,
        icon: ICON_LOCK,
        value: ValueFn::Encryption(|data: &AnalyticsEncryption| {
            StateValue::Count(data.encrypted_queries)
        }),
    },
    SensorDescription {
        key: "unencrypted_queries",
        name: "Unencrypted queries",
        unit: Unit::Queries,
        state_class: StateClass::Measurement,
        entity_category: EntityCategory::Diagnostic,
        entity_registry_enabled_default: false,
        icon: ICON_LOCK_OPEN,
        value: ValueFn::Encryption(|data: &AnalyticsEncryption| {
            StateValue::Count(data.unencrypted_queries)
        }),
    },
    SensorDescription {
        key: "encrypted_queries_ratio",
        name: "Encrypted queries ratio",
        unit: Unit::Percentage,
        state_class: StateClass::Measurement,
        entity_category: EntityCategory::Diagnostic,
        entity_registry_enabled_default: false,
        icon: ICON_LOCK,
        value: ValueFn::Encryption(|data: &AnalyticsEncryption| {
            StateValue::Ratio(data.encrypted_queries_ratio)
        }),
    },
    // ── IP versions ─────────────────────────────────────────────────
    SensorDescription {
        key: "ipv4_queries",
        name: "IPv4 queries",
        unit: Unit::Queries,
        state_class: StateClass::Measurement,
        entity_category: EntityCategory::Diagnostic,
        entity_registry_enabled_default: false,
        icon: ICON_IP,
        value: ValueFn::IpVersions(|data: &AnalyticsIpVersions| {
            StateValue::Count(data.ipv4_queries)
        }),
    },
    SensorDescription {
        key: "ipv6_queries",
        name: "IPv6 queries",
        unit: Unit::Queries,
        state_class: StateClass::Measurement,
        entity_category: EntityCategory::Diagnostic,
        entity_registry_enabled_default: false,
        icon: ICON_IP,
        value: ValueFn::IpVersions(|data: &AnalyticsIpVersions| {
            StateValue::Count(data.ipv6_queries)
        }),
    },
    SensorDescription {
        key: "ipv6_queries_ratio",
        name: "IPv6 queries ratio",
        unit: Unit::Percentage,
        state_class: StateClass::Measurement,
        entity_category: EntityCategory::Diagnostic,
        entity_registry_enabled_default: false,
        icon: ICON_IP,
        value: ValueFn::IpVersions(|data: &AnalyticsIpVersions| {
            StateValue::Ratio(data.ipv6_queries_ratio)
        }),
    },
    // ── DNSSEC ──────────────────────────────────────────────────────
    SensorDescription {
        key: "validated_queries",
        name: "DNSSEC validated queries",
        unit: Unit::Queries,
        state_class: StateClass::Measurement,
        entity_category: EntityCategory::Diagnostic,
        entity_registry_enabled_default: false,
        icon: ICON_LOCK_CHECK,
        value: ValueFn::Dnssec(|data: &AnalyticsDnssec| {
            StateValue::Count(data.validated_queries)
        }),
    },
    SensorDescription {
        key: "not_validated_queries",
        name: "DNSSEC not validated queries",
        unit: Unit::Queries,
        state_class: StateClass::Measurement,
        entity_category: EntityCategory::Diagnostic,
        entity_registry_enabled_default: false,
        icon: ICON_LOCK_ALERT,
        value: ValueFn::Dnssec(|data: &AnalyticsDnssec| {
            StateValue::Count(data.not_validated_queries)
        }),
    },
    SensorDescription {
        key: "validated_queries_ratio",
        name: "DNSSEC validated queries ratio",
        unit: Unit::Percentage,
        state_class: StateClass::Measurement,
        entity_category: EntityCategory::Diagnostic,
        entity_registry_enabled_default: false,
        icon: ICON_LOCK_CHECK,
        value: ValueFn::Dnssec(|data: &AnalyticsDnssec| {
            StateValue::Ratio(data.validated_queries_ratio)
        }),
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use dnslens_core::model::CoordinatorType;
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn keys_are_unique() {
        let mut seen = HashSet::new();
        for description in SENSORS {
            assert!(seen.insert(description.key), "duplicate key {}", description.key);
        }
        assert_eq!(seen.len(), 26);
    }

    #[test]
    fn every_category_is_covered_and_nothing_else() {
        let used: HashSet<CoordinatorType> =
            SENSORS.iter().map(SensorDescription::coordinator_type).collect();
        let supported: HashSet<CoordinatorType> = CoordinatorType::iter().collect();
        assert_eq!(used, supported);
    }

    #[test]
    fn category_counts_match_the_snapshot_fields() {
        let count = |ct: CoordinatorType| {
            SENSORS
                .iter()
                .filter(|d| d.coordinator_type() == ct)
                .count()
        };
        assert_eq!(count(CoordinatorType::Status), 5);
        assert_eq!(count(CoordinatorType::Protocols), 12);
        assert_eq!(count(CoordinatorType::Encryption), 3);
        assert_eq!(count(CoordinatorType::IpVersions), 3);
        assert_eq!(count(CoordinatorType::Dnssec), 3);
    }

    #[test]
    fn all_sensors_are_diagnostic_measurements() {
        for description in SENSORS {
            assert_eq!(description.entity_category, EntityCategory::Diagnostic);
            assert_eq!(description.state_class, StateClass::Measurement);
        }
    }

    #[test]
    fn only_status_sensors_are_enabled_by_default() {
        for description in SENSORS {
            let expected = description.coordinator_type() == CoordinatorType::Status;
            assert_eq!(
                description.entity_registry_enabled_default, expected,
                "default visibility of {}",
                description.key
            );
        }
    }

    #[test]
    fn ratio_keys_carry_the_percentage_unit() {
        for description in SENSORS {
            let expected = if description.key.ends_with("_ratio") {
                Unit::Percentage
            } else {
                Unit::Queries
            };
            assert_eq!(description.unit, expected, "unit of {}", description.key);
        }
    }
}
