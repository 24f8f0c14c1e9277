pub mod pivot;
pub mod price;
pub mod summary;
pub mod trend;

use bon::Builder;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Failed to draw chart: {0}")]
    Draw(String),
    #[error("Failed to write chart file: {0}")]
    Io(#[from] std::io::Error),
}

impl ChartError {
    pub(crate) fn draw(err: impl std::fmt::Display) -> Self {
        Self::Draw(err.to_string())
    }
}

/// Output target and dimensions of a rendered chart.
#[derive(Debug, Clone, Builder)]
pub struct ChartOptions {
    #[builder(into)]
    pub out_path: PathBuf,
    #[builder(default = 1280)]
    pub width: u32,
    #[builder(default = 720)]
    pub height: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_fills_default_dimensions() {
        let options = ChartOptions::builder().out_path("chart.svg").build();

        assert_eq!(options.out_path, PathBuf::from("chart.svg"));
        assert_eq!(options.width, 1280);
        assert_eq!(options.height, 720);
    }
}
