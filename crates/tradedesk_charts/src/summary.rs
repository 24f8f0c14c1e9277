use plotters::coord::ranged1d::SegmentValue;
use plotters::prelude::*;
use tradedesk_api::summary::SummaryItem;

use crate::{ChartError, ChartOptions};

// The fixed bar color of the volume chart
pub const BAR_COLOR: RGBColor = RGBColor(54, 162, 235);

/// Parallel label and value arrays in endpoint order.
pub fn summary_arrays(items: &[SummaryItem]) -> (Vec<String>, Vec<i64>) {
    items
        .iter()
        .map(|item| (item.symbol.clone(), item.total_volume))
        .unzip()
}

/// Draws the single-series total-volume bar chart, bars in endpoint order,
/// y starting at zero. Nothing is written when the input is empty.
pub fn render_volume_chart(items: &[SummaryItem], options: &ChartOptions) -> Result<(), ChartError> {
    if items.is_empty() {
        return Ok(());
    }

    let (labels, volumes) = summary_arrays(items);
    let y_max = volumes.iter().copied().max().unwrap_or(0).max(1);
    let y_max = y_max + y_max / 20;

    let root = SVGBackend::new(&options.out_path, (options.width, options.height))
        .into_drawing_area();
    root.fill(&WHITE).map_err(ChartError::draw)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(12)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d((0..labels.len() as u32).into_segmented(), 0i64..y_max)
        .map_err(ChartError::draw)?;

    chart
        .configure_mesh()
        .x_labels(labels.len().min(20))
        .x_label_formatter(&|segment| match segment {
            SegmentValue::CenterOf(index) => {
                labels.get(*index as usize).cloned().unwrap_or_default()
            }
            _ => String::new(),
        })
        .y_desc("Total Volume")
        .draw()
        .map_err(ChartError::draw)?;

    chart
        .draw_series(
            Histogram::vertical(&chart)
                .style(BAR_COLOR.mix(0.6).filled())
                .margin(6)
                .data(
                    volumes
                        .iter()
                        .enumerate()
                        .map(|(index, volume)| (index as u32, *volume)),
                ),
        )
        .map_err(ChartError::draw)?
        .label("Total Volume")
        .legend(|(x, y)| {
            Rectangle::new([(x, y - 4), (x + 12, y + 4)], BAR_COLOR.mix(0.6).filled())
        });

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(ChartError::draw)?;

    root.present().map_err(ChartError::draw)
}
