use handreplay_engine::GeometryError;
use thiserror::Error;

/// Errors reported by the table layer.
///
/// All are raised before anything is drawn for the failing element, so a
/// rejected card or seat leaves the rest of the scene intact.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TableError {
    #[error("invalid card code `{code}`: {reason}")]
    InvalidCardCode { code: String, reason: &'static str },

    #[error(transparent)]
    InvalidGeometry(#[from] GeometryError),

    #[error("seat count must be at least 1, got {0}")]
    InvalidSeatCount(usize),

    #[error("seat {seat} is out of range for {count} seats")]
    SeatOutOfRange { seat: usize, count: usize },

    #[error("`{field}` is out of range: {value}")]
    InvalidConfig { field: &'static str, value: f32 },
}
