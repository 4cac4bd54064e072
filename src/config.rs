//! Simulation parameters.
//! Everything the run needs is fixed here before the first step.
use crate::error::ConfigError;

pub const BOLTZMANN: f64 = 1.380_648_52e-23;

/// g / m^3
pub const ALUMINIUM_DENSITY: f64 = 2_700_000.0;

/// J / (g K)
pub const ALUMINIUM_SPECIFIC_HEAT: f64 = 0.897;

/// Material diffusivity used when deriving the diffusion coefficient.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub enum Diffusivity {
    /// Unit diffusivity, 1.0.
    #[default]
    Unit,

    /// `k_B / (c_p * rho)` for aluminium.
    Aluminium,

    Custom(f64),
}

impl Diffusivity {
    pub fn value(&self) -> f64 {
        match self {
            Diffusivity::Unit => 1.0,
            Diffusivity::Aluminium => {
                BOLTZMANN / (ALUMINIUM_SPECIFIC_HEAT * ALUMINIUM_DENSITY)
            }
            Diffusivity::Custom(v) => *v,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    /// Domain size per axis in meters.
    pub length: f64,

    /// Spatial step in meters.
    pub cell_size: f64,

    /// Temporal step in seconds.
    pub time_step: f64,

    /// Total simulated time in seconds.
    pub simulation_time: f64,

    pub diffusivity: Diffusivity,
}

impl SimulationConfig {
    /// 1 m bar at 1 cm resolution for 2 s.
    pub fn bar() -> Self {
        SimulationConfig {
            length: 1.0,
            cell_size: 0.01,
            time_step: 0.1,
            simulation_time: 2.0,
            diffusivity: Diffusivity::Unit,
        }
    }

    /// 1 m cube at 10 cm resolution for 10 s.
    pub fn cube() -> Self {
        SimulationConfig {
            length: 1.0,
            cell_size: 0.1,
            time_step: 0.1,
            simulation_time: 10.0,
            diffusivity: Diffusivity::Unit,
        }
    }

    /// Check the parameters once, before a `grid_dimension` dimensional
    /// grid is built from them.
    pub fn validate(self, grid_dimension: u32) -> Result<Self, ConfigError> {
        for (name, value) in [
            ("length", self.length),
            ("cell_size", self.cell_size),
            ("time_step", self.time_step),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NotPositive { name, value });
            }
        }

        for (name, value) in [
            ("simulation_time", self.simulation_time),
            ("diffusivity", self.diffusivity.value()),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Negative { name, value });
            }
        }

        let coefficient = self.diffusion_coefficient();
        if !coefficient.is_finite() {
            return Err(ConfigError::NonFiniteCoefficient { coefficient });
        }

        let n_cells = self.n_cells();
        if n_cells < 2 {
            return Err(ConfigError::TooFewCells { n_cells });
        }
        if grid_cell_count(n_cells, grid_dimension).is_none() {
            return Err(ConfigError::TooManyCells {
                n_cells,
                grid_dimension,
            });
        }
        Ok(self)
    }

    /// Cells per axis.
    pub fn n_cells(&self) -> usize {
        (self.length / self.cell_size).round() as usize
    }

    /// Number of steps after the initial report.
    pub fn n_steps(&self) -> usize {
        (self.simulation_time / self.time_step).round() as usize
    }

    /// `2 * alpha * dt / dx^2`, shared by every cell and step.
    pub fn diffusion_coefficient(&self) -> f64 {
        2.0 * self.diffusivity.value() * self.time_step
            / (self.cell_size * self.cell_size)
    }

    /// Simulated time after `step` steps.
    pub fn time_at(&self, step: usize) -> f64 {
        step as f64 * self.time_step
    }
}

/// Total cells of an `n_cells^grid_dimension` grid, if its coordinates fit
/// an `i32` and its buffer fits in memory.
fn grid_cell_count(n_cells: usize, grid_dimension: u32) -> Option<usize> {
    if n_cells > i32::MAX as usize {
        return None;
    }
    let len = n_cells.checked_pow(grid_dimension)?;
    let bytes = len.checked_mul(std::mem::size_of::<f64>())?;
    (bytes <= isize::MAX as usize).then_some(len)
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn bar_preset() {
        let config = SimulationConfig::bar().validate(1).unwrap();
        assert_eq!(config.n_cells(), 100);
        assert_eq!(config.n_steps(), 20);
        assert_approx_eq!(
            f64,
            config.diffusion_coefficient(),
            2000.0,
            epsilon = 1e-9
        );
        assert_approx_eq!(f64, config.time_at(3), 0.3, ulps = 2);
    }

    #[test]
    fn cube_preset() {
        let config = SimulationConfig::cube().validate(3).unwrap();
        assert_eq!(config.n_cells(), 10);
        assert_eq!(config.n_steps(), 100);
        assert_approx_eq!(
            f64,
            config.diffusion_coefficient(),
            20.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn aluminium_is_tiny() {
        let config = SimulationConfig {
            diffusivity: Diffusivity::Aluminium,
            ..SimulationConfig::cube()
        };
        let v = config.diffusivity.value();
        assert!(v > 0.0 && v < 1e-20);
        assert!(config.validate(3).is_ok());
    }

    #[test]
    fn rejects_degenerate() {
        let zero_cell = SimulationConfig {
            cell_size: 0.0,
            ..SimulationConfig::bar()
        };
        assert_eq!(
            zero_cell.validate(1),
            Err(ConfigError::NotPositive {
                name: "cell_size",
                value: 0.0
            })
        );

        let one_cell = SimulationConfig {
            cell_size: 1.0,
            ..SimulationConfig::bar()
        };
        assert_eq!(
            one_cell.validate(1),
            Err(ConfigError::TooFewCells { n_cells: 1 })
        );

        let backwards = SimulationConfig {
            simulation_time: -1.0,
            ..SimulationConfig::bar()
        };
        assert!(matches!(
            backwards.validate(1),
            Err(ConfigError::Negative { name: "simulation_time", .. })
        ));

        let nan = SimulationConfig {
            diffusivity: Diffusivity::Custom(f64::NAN),
            ..SimulationConfig::bar()
        };
        assert!(nan.validate(1).is_err());
    }

    #[test]
    fn zero_time_means_no_steps() {
        let config = SimulationConfig {
            simulation_time: 0.0,
            ..SimulationConfig::bar()
        };
        assert_eq!(config.validate(1).unwrap().n_steps(), 0);
    }

    #[test]
    fn rejects_grids_that_do_not_fit() {
        let wide = SimulationConfig {
            length: 4_294_967_299.0,
            cell_size: 1.0,
            ..SimulationConfig::bar()
        };
        assert_eq!(
            wide.validate(1),
            Err(ConfigError::TooManyCells {
                n_cells: 4_294_967_299,
                grid_dimension: 1
            })
        );

        // fits one axis, but not a cube
        let deep = SimulationConfig {
            length: 3_000_000.0,
            cell_size: 1.0,
            ..SimulationConfig::cube()
        };
        assert!(deep.validate(1).is_ok());
        assert_eq!(
            deep.validate(3),
            Err(ConfigError::TooManyCells {
                n_cells: 3_000_000,
                grid_dimension: 3
            })
        );

        assert_eq!(grid_cell_count(10, 3), Some(1000));
        assert_eq!(grid_cell_count(i32::MAX as usize + 1, 1), None);
    }

    #[test]
    fn rejects_overflowing_coefficient() {
        let fine = SimulationConfig {
            cell_size: 1e-200,
            ..SimulationConfig::bar()
        };
        assert_eq!(
            fine.validate(1),
            Err(ConfigError::NonFiniteCoefficient {
                coefficient: f64::INFINITY
            })
        );
    }
}
