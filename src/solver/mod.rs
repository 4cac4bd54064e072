//! Advancing the grid through time.
//!
//! Two update schemes are provided. `InPlace` sweeps the grid in row major
//! order and overwrites each interior cell as it goes, so a cell sees the
//! already updated values of the neighbors visited before it (Gauss-Seidel
//! like) and is the default.
//! `DoubleBuffered` reads every neighbor from the previous step and writes
//! into a scratch grid (Jacobi like). The two produce different numbers.

mod double_buffered;
mod in_place;
mod simulation;
mod stepper;

pub use double_buffered::*;
pub use in_place::*;
pub use simulation::*;
pub use stepper::*;

use clap::ValueEnum;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum UpdateScheme {
    #[default]
    InPlace,
    DoubleBuffered,
}

impl std::fmt::Display for UpdateScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UpdateScheme::InPlace => write!(f, "in-place"),
            UpdateScheme::DoubleBuffered => write!(f, "double-buffered"),
        }
    }
}
