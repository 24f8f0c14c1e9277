use polars::prelude::*;
use prettytable::{Cell, Row, Table};

fn cell(value: AnyValue) -> Cell {
    match value {
        AnyValue::Float64(v) => Cell::new(&format!("{v:.2}")),
        AnyValue::String(s) => Cell::new(s),
        other => Cell::new(&other.to_string()),
    }
}

/// Renders a DataFrame as a prettytable with a header row, floats formatted
/// to two decimals.
pub fn table_from_frame(frame: &DataFrame) -> PolarsResult<Table> {
    let mut table = Table::new();
    table.add_row(Row::new(
        frame
            .get_column_names()
            .iter()
            .map(|name| Cell::new(name.as_str()))
            .collect(),
    ));

    for idx in 0..frame.height() {
        let cells = frame
            .get_columns()
            .iter()
            .map(|column| column.get(idx).map(cell))
            .collect::<PolarsResult<Vec<_>>>()?;
        table.add_row(Row::new(cells));
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_header_plus_one_row_per_frame_row() {
        let frame = DataFrame::new(vec![
            Column::new("symbol".into(), vec!["AAPL", "MSFT"]),
            Column::new("total_value".into(), vec![1590.0, 100.0]),
        ])
        .expect("Failed to build test frame");

        let table = table_from_frame(&frame).expect("Failed to build table");

        assert_eq!(table.len(), frame.height() + 1);
        let rendered = table.to_string();
        assert!(rendered.contains("AAPL"));
        assert!(rendered.contains("1590.00"));
    }
}
