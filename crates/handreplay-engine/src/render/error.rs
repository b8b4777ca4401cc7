use thiserror::Error;

/// Failure creating or exporting a raster surface.
#[derive(Debug, Error)]
pub enum RasterError {
    #[error("canvas size {width}x{height} cannot back a pixmap")]
    InvalidCanvasSize { width: u32, height: u32 },

    #[error("png encoding failed: {0}")]
    Encode(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
