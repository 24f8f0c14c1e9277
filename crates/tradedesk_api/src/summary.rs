use serde::{Deserialize, Serialize};

/// Per-symbol aggregates as served by the summary endpoint. Order of the
/// returned array is meaningful and must be preserved by consumers.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SummaryItem {
    pub symbol: String,
    pub total_volume: i64,
    #[serde(default)]
    pub total_value: f64,
    #[serde(default)]
    pub net_position: i64,
}
