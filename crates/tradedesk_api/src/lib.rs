pub mod leaders;
pub mod summary;
pub mod trend;

use reqwest::{Client, ClientBuilder};
use serde::de::DeserializeOwned;

// Default host of the dashboard API when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

pub struct DashboardClient {
    base_url: String,
    reqwest: Client,
}

impl DashboardClient {
    pub fn new(base_url: &str) -> Self {
        let reqwest = ClientBuilder::new()
            .build()
            .expect("Failed to build reqwest client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            reqwest,
        }
    }

    // Daily buy/sell volume rows per symbol, one row per (symbol, date, side)
    pub async fn get_buy_sell_trend(&self) -> Result<Vec<trend::TrendRow>, reqwest::Error> {
        self.get("/api/buy_sell_trend").await
    }

    // Per-symbol aggregate volumes, values and net positions
    pub async fn get_summary(&self) -> Result<Vec<summary::SummaryItem>, reqwest::Error> {
        self.get("/api/summary").await
    }

    // Daily average price and volume for a single symbol
    pub async fn get_symbol_trend(
        &self,
        symbol: &str,
    ) -> Result<Vec<trend::SymbolTrendRow>, reqwest::Error> {
        self.get(&format!("/api/trend/{symbol}")).await
    }

    // All distinct symbols known to the server
    pub async fn get_symbols(&self) -> Result<Vec<String>, reqwest::Error> {
        self.get("/api/get_signs").await
    }

    // Symbol with the highest total traded value
    pub async fn get_best_symbol(&self) -> Result<leaders::BestSymbol, reqwest::Error> {
        self.get("/api/best_symbol").await
    }

    // Most frequently traded symbol
    pub async fn get_most_traded(&self) -> Result<leaders::MostTraded, reqwest::Error> {
        self.get("/api/most_used").await
    }

    // Generic GET request against the configured host
    async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, reqwest::Error> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.reqwest.get(&url).send().await?;
        let response = response.error_for_status()?;

        response.json().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_stripped_from_base_url() {
        let client = DashboardClient::new("http://localhost:8000/");
        assert_eq!(client.base_url, "http://localhost:8000");
    }

    #[test]
    fn default_base_url_is_kept_verbatim() {
        let client = DashboardClient::new(DEFAULT_BASE_URL);
        assert_eq!(client.base_url, DEFAULT_BASE_URL);
    }
}
