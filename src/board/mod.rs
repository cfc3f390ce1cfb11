//! Board representation.
//!
//! - `grid`: the `BoardState` grid, bounds and counting helpers
//! - `notation`: text form used for seeding positions and debugging

pub mod grid;
mod notation;

pub use grid::BoardState;
