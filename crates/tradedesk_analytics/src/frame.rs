use polars::prelude::*;
use std::path::Path;
use thiserror::Error;
use tradedesk_shared_models::Trade;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("Symbol not found: {0}")]
    UnknownSymbol(String),
    #[error(transparent)]
    Polars(#[from] PolarsError),
}

/// Raw trades held as a LazyFrame, with the aggregations the dashboard
/// endpoints and the console report are built from.
pub struct TradeFrame {
    pub data: LazyFrame,
}

impl TradeFrame {
    pub fn new(trades: Vec<Trade>) -> Self {
        let timestamps = trades
            .iter()
            .map(|trade| trade.timestamp.format("%Y-%m-%d %H:%M:%S").to_string())
            .collect::<Vec<_>>();

        let frame = DataFrame::new(vec![
            Column::new("timestamp".into(), timestamps),
            Column::new(
                "symbol".into(),
                trades.iter().map(|trade| trade.symbol.clone()).collect::<Vec<_>>(),
            ),
            Column::new(
                "side".into(),
                trades.iter().map(|trade| trade.side.as_str()).collect::<Vec<_>>(),
            ),
            Column::new(
                "quantity".into(),
                trades.iter().map(|trade| trade.quantity).collect::<Vec<_>>(),
            ),
            Column::new(
                "price".into(),
                trades.iter().map(|trade| trade.price).collect::<Vec<_>>(),
            ),
        ])
        .expect("Failed to create DataFrame")
        .lazy();

        Self {
            data: Self::with_date(frame),
        }
    }

    /// Loads a trades CSV with the generator's header
    /// (`Timestamp,Symbol,Side,Quantity,Price`).
    pub fn from_csv(path: &Path) -> PolarsResult<Self> {
        let frame = CsvReadOptions::default()
            .with_has_header(true)
            .try_into_reader_with_file_path(Some(path.to_path_buf()))?
            .finish()?
            .lazy()
            .rename(
                ["Timestamp", "Symbol", "Side", "Quantity", "Price"],
                ["timestamp", "symbol", "side", "quantity", "price"],
                true,
            );

        Ok(Self {
            data: Self::with_date(frame),
        })
    }

    // The date column is the first ten characters of the timestamp string
    fn with_date(frame: LazyFrame) -> LazyFrame {
        frame.with_column(col("timestamp").str().slice(lit(0), lit(10)).alias("date"))
    }

    /// Total volume, total traded value and net position per symbol,
    /// sorted by symbol.
    pub fn summary(&self) -> PolarsResult<DataFrame> {
        self.data
            .clone()
            .group_by([col("symbol")])
            .agg([
                col("quantity").sum().alias("total_volume"),
                (col("quantity").cast(DataType::Float64) * col("price"))
                    .sum()
                    .alias("total_value"),
                when(col("side").eq(lit("BUY")))
                    .then(col("quantity"))
                    .otherwise(-col("quantity"))
                    .sum()
                    .alias("net_position"),
            ])
            .sort(["symbol"], Default::default())
            .collect()
    }

    /// Summed volume per (symbol, date, side) triple, the rows behind the
    /// buy/sell trend chart.
    pub fn buy_sell_trend(&self) -> PolarsResult<DataFrame> {
        self.data
            .clone()
            .group_by([col("symbol"), col("date"), col("side")])
            .agg([col("quantity").sum().alias("volume")])
            .sort(["date", "symbol", "side"], Default::default())
            .collect()
    }

    /// The single day with the highest total volume.
    pub fn busiest_day(&self) -> PolarsResult<DataFrame> {
        self.data
            .clone()
            .group_by([col("date")])
            .agg([col("quantity").sum().alias("volume")])
            .sort(
                ["volume"],
                SortMultipleOptions::default().with_order_descending(true),
            )
            .limit(1)
            .collect()
    }

    /// For every symbol, the day it traded the most volume.
    pub fn busiest_day_per_symbol(&self) -> PolarsResult<DataFrame> {
        self.data
            .clone()
            .group_by([col("symbol"), col("date")])
            .agg([col("quantity").sum().alias("volume")])
            .sort(
                ["symbol", "volume"],
                SortMultipleOptions::default().with_order_descending_multi([false, true]),
            )
            .group_by([col("symbol")])
            .agg([col("date").first(), col("volume").first()])
            .sort(["symbol"], Default::default())
            .collect()
    }

    /// Daily average price and volume for one symbol, sorted by date.
    pub fn symbol_trend(&self, symbol: &str) -> Result<DataFrame, AnalyticsError> {
        let frame = self
            .data
            .clone()
            .filter(col("symbol").eq(lit(symbol)))
            .group_by([col("date")])
            .agg([
                col("price").mean().alias("avg_price"),
                col("quantity").sum().alias("volume"),
            ])
            .sort(["date"], Default::default())
            .collect()?;

        if frame.height() == 0 {
            return Err(AnalyticsError::UnknownSymbol(symbol.to_string()));
        }

        Ok(frame)
    }

    /// The symbol with the highest total traded value.
    pub fn best_symbol(&self) -> PolarsResult<DataFrame> {
        self.data
            .clone()
            .with_column(
                (col("quantity").cast(DataType::Float64) * col("price")).alias("trade_value"),
            )
            .group_by([col("symbol")])
            .agg([col("trade_value").sum().alias("total_value")])
            .sort(
                ["total_value"],
                SortMultipleOptions::default().with_order_descending(true),
            )
            .limit(1)
            .collect()
    }

    /// The most frequently traded symbol.
    pub fn most_traded(&self) -> PolarsResult<DataFrame> {
        self.data
            .clone()
            .group_by([col("symbol")])
            .agg([len().alias("trade_count")])
            .sort(
                ["trade_count"],
                SortMultipleOptions::default().with_order_descending(true),
            )
            .limit(1)
            .collect()
    }
}
