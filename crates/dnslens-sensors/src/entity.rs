// ── Entity vocabulary ──
//
// Presentation metadata shared by every sensor definition, plus the
// published value type. Mirrors the host platform's sensor contract:
// the platform queries these read-only, the adapter never interprets
// them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Classification of a non-primary entity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityCategory {
    /// Uncategorized entity.
    #[default]
    None,
    /// Exposes a changeable configuration parameter of a device.
    Config,
    /// Exposes a read-only diagnostic of a device. All analytics
    /// sensors fall here.
    Diagnostic,
}

/// How the platform's statistics engine should treat the value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StateClass {
    #[default]
    None,
    /// A measurement in present time (current counts and ratios), not
    /// a historical aggregation.
    Measurement,
    /// A total that can both increase and decrease.
    Total,
    /// A monotonically increasing total.
    TotalIncreasing,
}

/// Unit of measurement published alongside the value.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
pub enum Unit {
    #[serde(rename = "queries")]
    #[strum(serialize = "queries")]
    Queries,
    #[serde(rename = "%")]
    #[strum(serialize = "%")]
    Percentage,
}

/// Presentation icon, `mdi:`-style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Icon(pub &'static str);

impl Icon {
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// The value a sensor publishes: a non-negative counter or a
/// percentage ratio passed through from the snapshot unmodified.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StateValue {
    Count(u64),
    Ratio(f64),
}

impl fmt::Display for StateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(count) => write!(f, "{count}"),
            Self::Ratio(ratio) => write!(f, "{ratio:.1}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn units_render_like_the_platform_expects() {
        assert_eq!(Unit::Queries.to_string(), "queries");
        assert_eq!(Unit::Percentage.to_string(), "%");
    }

    #[test]
    fn state_values_display_counts_and_ratios_distinctly() {
        assert_eq!(StateValue::Count(1000).to_string(), "1000");
        assert_eq!(StateValue::Ratio(25.0).to_string(), "25.0");
        assert_eq!(StateValue::Ratio(33.33).to_string(), "33.3");
    }

    #[test]
    fn entity_category_serializes_snake_case() {
        let json = serde_json::to_string(&EntityCategory::Diagnostic).expect("serialize");
        assert_eq!(json, "\"diagnostic\"");
    }

    #[test]
    fn state_value_serializes_untagged() {
        let json = serde_json::to_string(&StateValue::Count(42)).expect("serialize");
        assert_eq!(json, "42");
        let json = serde_json::to_string(&StateValue::Ratio(80.0)).expect("serialize");
        assert_eq!(json, "80.0");
    }
}
