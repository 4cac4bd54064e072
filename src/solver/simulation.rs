use super::*;
use crate::config::SimulationConfig;
use crate::domain::*;
use crate::error::{ConfigError, ReportError};
use crate::initial_conditions::*;
use crate::report::Reporter;
use crate::stencil::*;

/// Owns the validated parameters of one run and drives the time loop
/// over a `GRID_DIMENSION` dimensional grid.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Simulation<const GRID_DIMENSION: usize> {
    config: SimulationConfig,
}

impl<const GRID_DIMENSION: usize> Simulation<GRID_DIMENSION> {
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        Ok(Simulation {
            config: config.validate(GRID_DIMENSION as u32)?,
        })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Initialize a grid, report it at `t = 0`, then step `n_steps` times
    /// reporting after each step. Returns the final grid.
    pub fn run<IC, R, Operation, const NEIGHBORHOOD_SIZE: usize>(
        &self,
        ic: &IC,
        stepper: &mut Stepper<Operation, GRID_DIMENSION, NEIGHBORHOOD_SIZE>,
        reporter: &mut R,
    ) -> Result<OwnedDomain<GRID_DIMENSION>, ReportError>
    where
        IC: InitialCondition<GRID_DIMENSION>,
        R: Reporter<GRID_DIMENSION>,
        Operation: StencilOperation<NEIGHBORHOOD_SIZE>,
    {
        let n_cells = self.config.n_cells();
        let n_steps = self.config.n_steps();
        debug_assert!(n_cells >= 2);
        debug_assert!(self.config.diffusion_coefficient().is_finite());
        tracing::info!(
            dimension = GRID_DIMENSION,
            n_cells,
            n_steps,
            coefficient = self.config.diffusion_coefficient(),
            scheme = %stepper.scheme(),
            "starting simulation"
        );

        let mut domain = OwnedDomain::cube(n_cells);
        initialize(&mut domain, ic);
        reporter.report(&domain, self.config.time_at(0))?;

        for step in 1..=n_steps {
            profiling::scope!("simulation::step");
            stepper.step(&mut domain);
            let time = self.config.time_at(step);
            tracing::debug!(step, time, "stepped");
            reporter.report(&domain, time)?;
            profiling::finish_frame!();
        }

        reporter.finish()?;
        tracing::info!(n_steps, "simulation finished");
        Ok(domain)
    }
}
