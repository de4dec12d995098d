//! Numeric coercion for year and cost cells.

use serde::{Deserialize, Serialize, Serializer};
use tracing::warn;

use crate::error::{LapidaryError, Result};
use crate::input::Cell;

/// Year of discovery as found in the source cell.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DiscoveryYear {
    /// Blank cell.
    #[default]
    Absent,
    /// A whole number, e.g. `1850`.
    Integer(i64),
    /// A fractional number.
    Decimal(f64),
    /// Text that does not parse as a number, kept verbatim (e.g. `"до 1900"`).
    RawText(String),
}

impl DiscoveryYear {
    fn from_number(n: f64) -> Option<Self> {
        if !n.is_finite() {
            return None;
        }
        if n.fract() == 0.0 && n >= i64::MIN as f64 && n < i64::MAX as f64 {
            Some(DiscoveryYear::Integer(n as i64))
        } else {
            Some(DiscoveryYear::Decimal(n))
        }
    }

}

impl Serialize for DiscoveryYear {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            DiscoveryYear::Absent => serializer.serialize_none(),
            DiscoveryYear::Integer(i) => serializer.serialize_i64(*i),
            DiscoveryYear::Decimal(f) => serializer.serialize_f64(*f),
            DiscoveryYear::RawText(s) => serializer.serialize_str(s),
        }
    }
}

/// Coerce a discovery-year cell. Never fails.
///
/// Boolean cells are kept as text (`"true"`), not read as `1`/`0`.
pub fn coerce_year(cell: Option<&Cell>) -> DiscoveryYear {
    let Some(cell) = cell else {
        return DiscoveryYear::Absent;
    };

    let parsed = match cell {
        Cell::Empty => return DiscoveryYear::Absent,
        Cell::Number(n) => DiscoveryYear::from_number(*n),
        Cell::Text(s) => s
            .trim()
            .parse::<f64>()
            .ok()
            .and_then(DiscoveryYear::from_number),
        Cell::Bool(_) => None,
    };

    parsed.unwrap_or_else(|| DiscoveryYear::RawText(cell.to_string()))
}

/// How to treat cost cells that are not numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostPolicy {
    /// Abort the run with [`LapidaryError::InvalidCost`].
    #[default]
    Strict,
    /// Log a warning and record the cost as absent.
    Lenient,
}

/// Coerce a cost cell for the record identified by `id`.
///
/// Only finite numbers are costs; `"inf"` and `"nan"` are malformed.
pub fn coerce_cost(cell: Option<&Cell>, policy: CostPolicy, id: &str) -> Result<Option<f64>> {
    let value = match cell {
        None | Some(Cell::Empty) => return Ok(None),
        Some(Cell::Number(n)) if n.is_finite() => return Ok(Some(*n)),
        Some(Cell::Text(s)) => match s.trim().parse::<f64>() {
            Ok(n) if n.is_finite() => return Ok(Some(n)),
            _ => s.clone(),
        },
        Some(other) => other.to_string(),
    };

    match policy {
        CostPolicy::Strict => Err(LapidaryError::InvalidCost {
            id: id.to_string(),
            value,
        }),
        CostPolicy::Lenient => {
            warn!(id, value = %value, "unparseable cost, recording as absent");
            Ok(None)
        }
    }
}
