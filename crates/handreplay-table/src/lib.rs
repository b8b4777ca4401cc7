//! Poker table scene for the hand-replay viewer.
//!
//! Composes the engine's shapes into a table: felt ellipse, seat ticks around
//! it, and card faces placed at seats. Every entry point takes the drawing
//! surface explicitly; nothing here holds a surface between calls.

mod card;
mod error;
mod renderer;
mod seats;
mod table;

pub use card::{CardCode, Suit, SuitTone};
pub use error::TableError;
pub use renderer::{CardRenderer, CardStyle};
pub use seats::{CardOrientation, SeatLayout, SeatPlacement, TICK_SIZE};
pub use table::{Table, TableConfig};
