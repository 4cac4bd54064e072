use crate::build_info;
use crate::solver::UpdateScheme;
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// fdheat finite difference heat executable
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Directory for output files, will be created.
    /// WARNING, if this Directory
    /// already exists, current contents will be removed.
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// How interior cells are updated each step.
    #[arg(short, long, value_enum, default_value_t = UpdateScheme::InPlace)]
    pub scheme: UpdateScheme,

    /// Write PNG images of the temperatures.
    #[arg(short = 'i', long, requires("output_dir"))]
    pub write_images: bool,

    /// Write one CSV file per reported step.
    #[arg(short = 'c', long, requires("output_dir"))]
    pub write_csv: bool,

    /// Write one VTK file of the whole cube per reported step.
    #[arg(long, requires("output_dir"))]
    pub write_vtk: bool,

    /// Print build information and quit
    #[arg(long)]
    pub build_info: bool,
}

impl Args {
    pub fn cli_setup(name: &str) -> anyhow::Result<Self> {
        let args = Args::parse();

        if args.build_info {
            build_info::print_report(name);
            std::process::exit(0);
        }

        init_tracing();

        if let Some(output_dir) = &args.output_dir {
            let _ = std::fs::remove_dir_all(output_dir);
            std::fs::create_dir_all(output_dir).with_context(|| {
                format!("failed to create output directory {output_dir:?}")
            })?;
        }

        Ok(args)
    }
}

/// Logs go to stderr, stdout is reserved for the temperature report.
/// Filter with `RUST_LOG`, defaults to warnings only.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(feature = "profile-with-puffin")]
pub fn start_profiler() -> anyhow::Result<puffin_http::Server> {
    let server_addr = format!("127.0.0.1:{}", puffin_http::DEFAULT_PORT);
    tracing::info!(
        "Run this to view profiling data:  puffin_viewer {server_addr}"
    );
    let server = puffin_http::Server::new(&server_addr)?;
    profiling::puffin::set_scopes_on(true);
    Ok(server)
}
