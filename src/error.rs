use thiserror::Error;

pub type BrushResult<T> = Result<T, BrushError>;

#[derive(Debug, Error)]
pub enum BrushError {
    #[error("invalid brush geometry: x={x}, y={y}, width={width}, height={height}")]
    InvalidGeometry {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
