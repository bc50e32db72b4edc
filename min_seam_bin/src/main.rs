use anyhow::{Context, Result};
use bpaf::Bpaf;
use min_seam_lib::{find_minimum_seam_with, text, BoundaryEdges, SeamOptions};
use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::PathBuf,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Find the minimum-energy vertical seam of a pixel energy grid.
#[derive(Debug, Clone, Bpaf)]
#[bpaf(options, version)]
pub struct CliOptions {
    /// Increase log verbosity, repeat for more.
    #[bpaf(short('v'), long("verbose"), req_flag(()), count)]
    verbose: usize,
    /// Path for the seam output file.
    #[bpaf(short('o'), long("output"), argument("PATH"), fallback(PathBuf::from("seam.txt")))]
    output: PathBuf,
    /// Collapse the parallel edges generated at the left and right borders.
    distinct_boundary: bool,
    /// Path for the energy grid, one row of whitespace separated integers per line.
    #[bpaf(positional("PIXELS"), fallback(PathBuf::from("pixels.txt")))]
    pixels: PathBuf,
}

fn init_logging(verbose: usize) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(opts: &CliOptions) -> Result<()> {
    let file = File::open(&opts.pixels)
        .with_context(|| format!("could not open {}", opts.pixels.display()))?;
    let grid = text::read_grid(BufReader::new(file))
        .with_context(|| format!("could not read grid from {}", opts.pixels.display()))?;
    info!(rows = grid.rows(), cols = grid.cols(), "read pixel grid");

    let options = SeamOptions {
        boundary: if opts.distinct_boundary {
            BoundaryEdges::Distinct
        } else {
            BoundaryEdges::Clamped
        },
    };
    let seam = find_minimum_seam_with(&grid, options).context("seam search failed")?;
    let line = text::format_seam(seam.columns());
    info!(cost = %seam.cost(), seam = %line, "calculated minimum seam");

    let out = File::create(&opts.output)
        .with_context(|| format!("could not create {}", opts.output.display()))?;
    text::write_seam(BufWriter::new(out), seam.columns())
        .with_context(|| format!("could not write {}", opts.output.display()))?;
    info!(path = %opts.output.display(), "seam saved");

    println!("{line}");
    Ok(())
}

fn main() -> Result<()> {
    let opts = cli_options().run();
    init_logging(opts.verbose);
    run(&opts)
}
