use thiserror::Error;

/// Rejected simulation parameters, raised before any stepping happens.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{name} must be finite and positive, got {value}")]
    NotPositive { name: &'static str, value: f64 },

    #[error("{name} must be finite and non-negative, got {value}")]
    Negative { name: &'static str, value: f64 },

    #[error(
        "grid needs at least 2 cells per axis, \
         length / cell_size gives {n_cells}"
    )]
    TooFewCells { n_cells: usize },

    #[error(
        "{n_cells} cells per axis is too many for a {grid_dimension}D grid"
    )]
    TooManyCells { n_cells: usize, grid_dimension: u32 },

    #[error("diffusion coefficient 2 * alpha * dt / dx^2 is {coefficient}")]
    NonFiniteCoefficient { coefficient: f64 },
}

/// Failures while writing a report of the grid.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to write image: {0}")]
    Image(#[from] image::ImageError),

    #[error("failed to write vtk file: {0}")]
    Vtk(#[from] vtkio::Error),
}
