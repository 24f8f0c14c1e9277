use plotters::prelude::*;

use crate::pivot::TrendPivot;
use crate::{ChartError, ChartOptions};

/// Draws the multi-line buy/sell trend chart: one solid BUY line and one
/// dashed SELL line per symbol, over the shared date axis, y starting at
/// zero. Nothing is written when the pivot is empty.
pub fn render_buy_sell_chart(pivot: &TrendPivot, options: &ChartOptions) -> Result<(), ChartError> {
    if pivot.is_empty() {
        return Ok(());
    }

    let root = SVGBackend::new(&options.out_path, (options.width, options.height))
        .into_drawing_area();
    root.fill(&WHITE).map_err(ChartError::draw)?;

    let y_max = (pivot.max_volume() as f64 * 1.05).max(1.0);
    let x_max = pivot.dates.len() as i32 - 1;

    let mut chart = ChartBuilder::on(&root)
        .margin(12)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0..x_max.max(1), 0.0..y_max)
        .map_err(ChartError::draw)?;

    chart
        .configure_mesh()
        .x_labels(pivot.dates.len().min(12))
        .x_label_formatter(&|x| {
            pivot
                .dates
                .get(*x as usize)
                .cloned()
                .unwrap_or_default()
        })
        .y_desc("Volume")
        .draw()
        .map_err(ChartError::draw)?;

    for series in &pivot.series {
        let buys = series
            .buys
            .iter()
            .enumerate()
            .map(|(i, volume)| (i as i32, *volume as f64));
        chart
            .draw_series(LineSeries::new(buys, BLUE.stroke_width(2)))
            .map_err(ChartError::draw)?
            .label(format!("{} BUY", series.symbol))
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 16, y)], BLUE.stroke_width(2)));

        let sells = series
            .sells
            .iter()
            .enumerate()
            .map(|(i, volume)| (i as i32, *volume as f64));
        chart
            .draw_series(DashedLineSeries::new(sells, 5, 5, RED.stroke_width(2)))
            .map_err(ChartError::draw)?
            .label(format!("{} SELL", series.symbol))
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 16, y)], RED.stroke_width(2)));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(ChartError::draw)?;

    root.present().map_err(ChartError::draw)
}
