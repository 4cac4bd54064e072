use anyhow::Context;
use fdheat::cli::Args;
use fdheat::config::SimulationConfig;
use fdheat::initial_conditions::UniformShell;
use fdheat::report::*;
use fdheat::solver::*;
use fdheat::stencil::standard_stencils;
use std::io::BufWriter;

fn main() -> anyhow::Result<()> {
    let args = Args::cli_setup("heat_3d")?;

    #[cfg(feature = "profile-with-puffin")]
    let _profiler = fdheat::cli::start_profiler()?;

    let simulation = Simulation::<3>::new(SimulationConfig::cube())
        .context("invalid cube configuration")?;
    let config = *simulation.config();
    let mut stepper = Stepper::new(
        standard_stencils::heat_3d(config.diffusion_coefficient()),
        args.scheme,
    );

    let mut reporter: MultiReporter<3> = MultiReporter::new();
    reporter.push(TextReporter::new(BufWriter::new(std::io::stdout().lock())));
    if let Some(output_dir) = &args.output_dir {
        if args.write_csv {
            reporter.push(CsvReporter::new(output_dir));
        }
        if args.write_images {
            reporter.push(SliceImageReporter::new(
                output_dir,
                TemperatureRange::default(),
            ));
        }
        if args.write_vtk {
            reporter.push(VtkReporter::new(output_dir));
        }
    }

    simulation
        .run(&UniformShell::default(), &mut stepper, &mut reporter)
        .context("failed to report cube temperatures")?;
    Ok(())
}
