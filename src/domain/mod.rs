//! This module has things for managing the grid,
//! which really means retrieving and storing temperatures by coordinate.
//! The buffer is flat and row major, the AABB translates between
//! coordinates and linear indices.

mod bc;
mod view;

pub use bc::*;
pub use view::*;
