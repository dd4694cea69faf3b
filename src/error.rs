use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid plot size: width={width}, height={height}")]
    InvalidPlotSize { width: f64, height: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
