use serde::{Deserialize, Serialize};
use tradedesk_shared_models::Side;

/// One row of the buy/sell trend endpoint: the summed volume traded for a
/// (symbol, date, side) triple.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TrendRow {
    pub date: String,
    pub symbol: String,
    pub side: Side,
    pub volume: i64,
}

/// One row of the per-symbol trend endpoint.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SymbolTrendRow {
    pub date: String,
    pub avg_price: f64,
    pub volume: i64,
}
