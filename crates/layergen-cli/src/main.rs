use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use layergen_cli::{intake, logging, run};
use layergen_graph::GeneratorParams;
use tracing::error;

#[derive(Parser, Debug)]
#[command(name = "layergen", about = "Randomized layered graph generator")]
struct Cli {
    /// Maximum depth of the grey tree.
    #[arg(long)]
    depth: Option<usize>,
    /// Child-creation attempts per vertex per layer.
    #[arg(long = "new-vertices")]
    new_vertices: Option<usize>,
    /// Number of graphs to generate.
    #[arg(long)]
    count: Option<usize>,
    /// Output directory for the generated JSON files.
    #[arg(long, default_value = "temp")]
    out: PathBuf,
    /// Master seed; omitted means a fresh random seed per invocation.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    logging::init_logging();
    if let Err(err) = try_main() {
        error!(error = %err, "run failed");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn try_main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();

    let max_depth = resolve(cli.depth, "depth", &mut input, &mut output)?;
    let new_vertices_per_step = resolve(cli.new_vertices, "new_vertices_count", &mut input, &mut output)?;
    let graphs_count = resolve(cli.count, "graphs_count", &mut input, &mut output)?;

    let options = run::RunOptions {
        params: GeneratorParams {
            max_depth,
            new_vertices_per_step,
        },
        graphs_count,
        out_dir: cli.out,
        seed: cli.seed.unwrap_or_else(rand::random),
    };
    run::run_batch(&options)
}

fn resolve(
    value: Option<usize>,
    label: &str,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<usize> {
    match value {
        Some(value) => Ok(value),
        None => intake::prompt_count(label, input, output),
    }
}
