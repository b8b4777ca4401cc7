//! Recorded draw streams.
//!
//! Responsibilities:
//! - capture every primitive a surface receives, in call order
//! - snapshot the style state each stroke, fill and text draw used
//! - give tests and tooling a surface that needs no pixels

mod cmd;
mod list;

pub use cmd::{ClearCmd, DrawCmd, FillCmd, StrokeCmd, TextCmd};
pub use list::DrawList;
