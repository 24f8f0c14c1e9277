use itertools::Itertools;
use std::collections::HashMap;
use tradedesk_api::trend::TrendRow;
use tradedesk_shared_models::Side;

/// Aligned BUY and SELL volume series for one symbol. Both vectors have one
/// entry per date on the shared axis.
#[derive(Debug, Clone)]
pub struct SymbolSeries {
    pub symbol: String,
    pub buys: Vec<i64>,
    pub sells: Vec<i64>,
}

/// Flat trend rows reshaped onto a shared date axis: dates sorted ascending
/// and de-duplicated, symbols in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct TrendPivot {
    pub dates: Vec<String>,
    pub series: Vec<SymbolSeries>,
}

impl TrendPivot {
    pub fn from_rows(rows: &[TrendRow]) -> Self {
        let dates: Vec<String> = rows
            .iter()
            .map(|row| row.date.clone())
            .sorted()
            .dedup()
            .collect();
        let symbols: Vec<String> = rows.iter().map(|row| row.symbol.clone()).unique().collect();

        // One hash probe per (symbol, date, side) triple instead of a scan
        // over all rows. The endpoint emits one row per triple; should a
        // duplicate ever appear, the first row wins.
        let mut volumes: HashMap<(&str, &str, Side), i64> = HashMap::new();
        for row in rows {
            volumes
                .entry((row.symbol.as_str(), row.date.as_str(), row.side))
                .or_insert(row.volume);
        }

        let series = symbols
            .into_iter()
            .map(|symbol| {
                let volume_on = |date: &String, side: Side| {
                    volumes
                        .get(&(symbol.as_str(), date.as_str(), side))
                        .copied()
                        .unwrap_or(0)
                };
                let buys = dates.iter().map(|date| volume_on(date, Side::Buy)).collect();
                let sells = dates
                    .iter()
                    .map(|date| volume_on(date, Side::Sell))
                    .collect();

                SymbolSeries {
                    symbol,
                    buys,
                    sells,
                }
            })
            .collect();

        Self { dates, series }
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Largest volume across every series, used to size the y axis.
    pub fn max_volume(&self) -> i64 {
        self.series
            .iter()
            .flat_map(|series| series.buys.iter().chain(series.sells.iter()))
            .copied()
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(date: &str, symbol: &str, side: Side, volume: i64) -> TrendRow {
        TrendRow {
            date: date.to_string(),
            symbol: symbol.to_string(),
            side,
            volume,
        }
    }

    #[test]
    fn date_axis_is_sorted_and_deduplicated() {
        let rows = vec![
            row("2024-01-03", "AAPL", Side::Buy, 3),
            row("2024-01-01", "AAPL", Side::Sell, 1),
            row("2024-01-03", "MSFT", Side::Buy, 9),
            row("2024-01-02", "AAPL", Side::Buy, 2),
        ];

        let pivot = TrendPivot::from_rows(&rows);

        assert_eq!(pivot.dates, vec!["2024-01-01", "2024-01-02", "2024-01-03"]);
    }

    #[test]
    fn symbols_keep_first_seen_order() {
        let rows = vec![
            row("2024-01-01", "TSLA", Side::Buy, 5),
            row("2024-01-01", "AAPL", Side::Buy, 7),
            row("2024-01-02", "TSLA", Side::Sell, 2),
        ];

        let pivot = TrendPivot::from_rows(&rows);

        let symbols: Vec<&str> = pivot
            .series
            .iter()
            .map(|series| series.symbol.as_str())
            .collect();
        assert_eq!(symbols, vec!["TSLA", "AAPL"]);
    }

    #[test]
    fn missing_triples_default_to_zero() {
        let rows = vec![row("2024-01-01", "ABC", Side::Buy, 10)];

        let pivot = TrendPivot::from_rows(&rows);

        assert_eq!(pivot.dates, vec!["2024-01-01"]);
        assert_eq!(pivot.series.len(), 1);
        assert_eq!(pivot.series[0].buys, vec![10]);
        assert_eq!(pivot.series[0].sells, vec![0]);
    }

    #[test]
    fn every_series_is_aligned_to_the_date_axis() {
        let rows = vec![
            row("2024-01-01", "AAPL", Side::Buy, 100),
            row("2024-01-02", "AAPL", Side::Sell, 40),
            row("2024-01-03", "MSFT", Side::Buy, 25),
        ];

        let pivot = TrendPivot::from_rows(&rows);

        for series in &pivot.series {
            assert_eq!(series.buys.len(), pivot.dates.len());
            assert_eq!(series.sells.len(), pivot.dates.len());
        }
        assert_eq!(pivot.max_volume(), 100);
    }

    #[test]
    fn empty_input_yields_empty_pivot() {
        let pivot = TrendPivot::from_rows(&[]);

        assert!(pivot.is_empty());
        assert_eq!(pivot.max_volume(), 0);
    }
}
