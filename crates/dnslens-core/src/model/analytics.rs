// ── Analytics snapshot variants ──
//
// One immutable record per analytics category. Ratio fields are
// percentages in 0.0..=100.0, rounded to one decimal and precomputed
// at construction -- the sensor layer passes them through unmodified.

use serde::{Deserialize, Serialize};

/// Which analytics category a coordinator (and its snapshots) serves.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CoordinatorType {
    Status,
    Protocols,
    Encryption,
    IpVersions,
    Dnssec,
}

/// Marker trait tying a snapshot type to its analytics category.
///
/// The category tag is a compile-time constant: a coordinator for
/// `AnalyticsStatus` can only ever be asked for status snapshots, so
/// variant/category mismatches are unrepresentable at runtime.
pub trait AnalyticsVariant: Clone + Send + Sync + 'static {
    const COORDINATOR_TYPE: CoordinatorType;
}

/// Percentage share of `part` in `total`, rounded to one decimal.
///
/// Zero traffic yields `0.0`, never NaN.
fn percent(part: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (part as f64 / total as f64 * 1000.0).round() / 10.0
}

// ── Status ──────────────────────────────────────────────────────────

/// Query outcome counters for one profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsStatus {
    pub all_queries: u64,
    pub allowed_queries: u64,
    pub blocked_queries: u64,
    pub relayed_queries: u64,
    pub blocked_queries_ratio: f64,
}

impl AnalyticsStatus {
    /// Build a status record from raw outcome counters.
    pub fn from_counts(allowed_queries: u64, blocked_queries: u64, relayed_queries: u64) -> Self {
        let all_queries = allowed_queries + blocked_queries + relayed_queries;
        Self {
            all_queries,
            allowed_queries,
            blocked_queries,
            relayed_queries,
            blocked_queries_ratio: percent(blocked_queries, all_queries),
        }
    }
}

impl AnalyticsVariant for AnalyticsStatus {
    const COORDINATOR_TYPE: CoordinatorType = CoordinatorType::Status;
}

// ── Protocols ───────────────────────────────────────────────────────

/// Transport protocol mix of resolved queries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsProtocols {
    pub doh_queries: u64,
    pub doh3_queries: u64,
    pub dot_queries: u64,
    pub doq_queries: u64,
    pub tcp_queries: u64,
    pub udp_queries: u64,
    pub doh_queries_ratio: f64,
    pub doh3_queries_ratio: f64,
    pub dot_queries_ratio: f64,
    pub doq_queries_ratio: f64,
    pub tcp_queries_ratio: f64,
    pub udp_queries_ratio: f64,
}

impl AnalyticsProtocols {
    /// Build a protocol-mix record from raw per-transport counters.
    pub fn from_counts(
        doh_queries: u64,
        doh3_queries: u64,
        dot_queries: u64,
        doq_queries: u64,
        tcp_queries: u64,
        udp_queries: u64,
    ) -> Self {
        let all = doh_queries + doh3_queries + dot_queries + doq_queries + tcp_queries
            + udp_queries;
        Self {
            doh_queries,
            doh3_queries,
            dot_queries,
            doq_queries,
            tcp_queries,
            udp_queries,
            doh_queries_ratio: percent(doh_queries, all),
            doh3_queries_ratio: percent(doh3_queries, all),
            dot_queries_ratio: percent(dot_queries, all),
            doq_queries_ratio: percent(doq_queries, all),
            tcp_queries_ratio: percent(tcp_queries, all),
            udp_queries_ratio: percent(udp_queries, all),
        }
    }
}

impl AnalyticsVariant for AnalyticsProtocols {
    const COORDINATOR_TYPE: CoordinatorType = CoordinatorType::Protocols;
}

// ── Encryption ──────────────────────────────────────────────────────

/// Encrypted vs. unencrypted transport mix.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsEncryption {
    pub encrypted_queries: u64,
    pub unencrypted_queries: u64,
    pub encrypted_queries_ratio: f64,
}

impl AnalyticsEncryption {
    pub fn from_counts(encrypted_queries: u64, unencrypted_queries: u64) -> Self {
        let all = encrypted_queries + unencrypted_queries;
        Self {
            encrypted_queries,
            unencrypted_queries,
            encrypted_queries_ratio: percent(encrypted_queries, all),
        }
    }
}

impl AnalyticsVariant for AnalyticsEncryption {
    const COORDINATOR_TYPE: CoordinatorType = CoordinatorType::Encryption;
}

// ── IP versions ─────────────────────────────────────────────────────

/// IPv4 vs. IPv6 mix of client connections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsIpVersions {
    pub ipv4_queries: u64,
    pub ipv6_queries: u64,
    pub ipv6_queries_ratio: f64,
}

impl AnalyticsIpVersions {
    pub fn from_counts(ipv4_queries: u64, ipv6_queries: u64) -> Self {
        let all = ipv4_queries + ipv6_queries;
        Self {
            ipv4_queries,
            ipv6_queries,
            ipv6_queries_ratio: percent(ipv6_queries, all),
        }
    }
}

impl AnalyticsVariant for AnalyticsIpVersions {
    const COORDINATOR_TYPE: CoordinatorType = CoordinatorType::IpVersions;
}

// ── DNSSEC ──────────────────────────────────────────────────────────

/// DNSSEC validation outcome mix.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsDnssec {
    pub validated_queries: u64,
    pub not_validated_queries: u64,
    pub validated_queries_ratio: f64,
}

impl AnalyticsDnssec {
    pub fn from_counts(validated_queries: u64, not_validated_queries: u64) -> Self {
        let all = validated_queries + not_validated_queries;
        Self {
            validated_queries,
            not_validated_queries,
            validated_queries_ratio: percent(validated_queries, all),
        }
    }
}

impl AnalyticsVariant for AnalyticsDnssec {
    const COORDINATOR_TYPE: CoordinatorType = CoordinatorType::Dnssec;
}
