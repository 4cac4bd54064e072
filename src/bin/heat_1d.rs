use anyhow::Context;
use fdheat::cli::Args;
use fdheat::config::SimulationConfig;
use fdheat::initial_conditions::SplitBar;
use fdheat::report::*;
use fdheat::solver::*;
use fdheat::stencil::standard_stencils;
use std::io::BufWriter;

fn main() -> anyhow::Result<()> {
    let args = Args::cli_setup("heat_1d")?;

    #[cfg(feature = "profile-with-puffin")]
    let _profiler = fdheat::cli::start_profiler()?;

    let simulation = Simulation::<1>::new(SimulationConfig::bar())
        .context("invalid bar configuration")?;
    let config = *simulation.config();
    let mut stepper = Stepper::new(
        standard_stencils::heat_1d(config.diffusion_coefficient()),
        args.scheme,
    );

    let mut reporter: MultiReporter<1> = MultiReporter::new();
    reporter.push(TextReporter::new(BufWriter::new(std::io::stdout().lock())));
    if let Some(output_dir) = &args.output_dir {
        if args.write_csv {
            reporter.push(CsvReporter::new(output_dir));
        }
        if args.write_images {
            reporter.push(BarImageReporter::new(
                config.n_cells(),
                config.n_steps() + 1,
                TemperatureRange::default(),
                output_dir.join("heat_1d.png"),
            ));
        }
        if args.write_vtk {
            tracing::warn!("vtk output is only written for the 3D cube");
        }
    }

    simulation
        .run(&SplitBar::default(), &mut stepper, &mut reporter)
        .context("failed to report bar temperatures")?;
    Ok(())
}
