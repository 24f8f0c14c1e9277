use plotters::prelude::*;
use tradedesk_api::trend::SymbolTrendRow;

use crate::{ChartError, ChartOptions};

/// Draws the daily average price line for one symbol. Rows are sorted by
/// date before plotting since the endpoint does not guarantee an order.
pub fn render_price_trend_chart(
    symbol: &str,
    rows: &[SymbolTrendRow],
    options: &ChartOptions,
) -> Result<(), ChartError> {
    if rows.is_empty() {
        return Ok(());
    }

    let mut rows: Vec<&SymbolTrendRow> = rows.iter().collect();
    rows.sort_by(|a, b| a.date.cmp(&b.date));

    let mut lo = f64::MAX;
    let mut hi = f64::MIN;
    for row in &rows {
        lo = lo.min(row.avg_price);
        hi = hi.max(row.avg_price);
    }
    if hi - lo < f64::EPSILON {
        lo -= 1.0;
        hi += 1.0;
    }
    let pad = (hi - lo) * 0.05;

    let root = SVGBackend::new(&options.out_path, (options.width, options.height))
        .into_drawing_area();
    root.fill(&WHITE).map_err(ChartError::draw)?;

    let x_max = rows.len() as i32 - 1;
    let mut chart = ChartBuilder::on(&root)
        .margin(12)
        .caption(format!("{symbol} daily average price"), ("sans-serif", 24))
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0..x_max.max(1), (lo - pad)..(hi + pad))
        .map_err(ChartError::draw)?;

    let dates: Vec<&str> = rows.iter().map(|row| row.date.as_str()).collect();
    chart
        .configure_mesh()
        .x_labels(dates.len().min(12))
        .x_label_formatter(&|x| {
            dates
                .get(*x as usize)
                .map(|date| date.to_string())
                .unwrap_or_default()
        })
        .y_desc("Avg price")
        .draw()
        .map_err(ChartError::draw)?;

    chart
        .draw_series(LineSeries::new(
            rows.iter()
                .enumerate()
                .map(|(i, row)| (i as i32, row.avg_price)),
            BLUE.stroke_width(2),
        ))
        .map_err(ChartError::draw)?;

    root.present().map_err(ChartError::draw)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(date: &str, avg_price: f64, volume: i64) -> SymbolTrendRow {
        SymbolTrendRow {
            date: date.to_string(),
            avg_price,
            volume,
        }
    }

    #[test]
    fn writes_an_svg_for_unordered_rows() {
        let rows = vec![
            row("2024-01-03", 270.4, 900),
            row("2024-01-01", 265.0, 1200),
            row("2024-01-02", 268.2, 700),
        ];
        let out_path = std::env::temp_dir().join("tradedesk_price_trend.svg");
        let options = ChartOptions::builder().out_path(out_path.clone()).build();

        render_price_trend_chart("AAPL", &rows, &options)
            .expect("Failed to render price trend chart");

        assert!(out_path.exists());
    }

    #[test]
    fn flat_prices_do_not_collapse_the_y_range() {
        let rows = vec![row("2024-01-01", 100.0, 10), row("2024-01-02", 100.0, 20)];
        let out_path = std::env::temp_dir().join("tradedesk_price_flat.svg");
        let options = ChartOptions::builder().out_path(out_path.clone()).build();

        render_price_trend_chart("MSFT", &rows, &options)
            .expect("Flat series must still render");

        assert!(out_path.exists());
    }
}
