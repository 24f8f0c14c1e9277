use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct BestSymbol {
    pub symbol: String,
    pub total_value: f64,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct MostTraded {
    pub symbol: String,
    pub trades: i64,
}
