use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use polyprism::{compute, ComputeArbitrary, ComputeRegular, Request};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "polyprism")]
#[command(about = "Polygon area, perimeter and prism volume calculator")]
struct Cmd {
    /// Log diagnostics to stderr (overridden by RUST_LOG)
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    shape: ShapeCmd,
}

#[derive(Subcommand)]
enum ShapeCmd {
    /// Regular polygon from side count and side length
    Regular {
        /// Number of sides (n ≥ 3)
        #[arg(short = 'n', long, default_value = "0", allow_hyphen_values = true)]
        sides: String,
        /// Side length (L > 0)
        #[arg(short = 'l', long, default_value = "0", allow_hyphen_values = true)]
        side_length: String,
        /// Prism height (H ≥ 0)
        #[arg(short = 'H', long, default_value = "0", allow_hyphen_values = true)]
        height: String,
    },
    /// Arbitrary polygon from its vertices in boundary order
    Arbitrary {
        /// Vertex as `x,y`; repeat once per vertex
        #[arg(short = 'v', long = "vertex", value_name = "X,Y", allow_hyphen_values = true)]
        vertices: Vec<String>,
        /// Prism height (H ≥ 0)
        #[arg(short = 'H', long, default_value = "0", allow_hyphen_values = true)]
        height: String,
    },
}

fn main() -> Result<ExitCode> {
    let cmd = Cmd::parse();
    init_logging(cmd.verbose)?;

    let text = match &cmd.shape {
        ShapeCmd::Regular {
            sides,
            side_length,
            height,
        } => render(&Request::Regular(ComputeRegular::new(
            sides,
            side_length,
            height,
        ))),
        ShapeCmd::Arbitrary { vertices, height } => {
            let cells: Vec<(&str, &str)> = vertices.iter().map(|v| split_vertex(v)).collect();
            render(&Request::Arbitrary(ComputeArbitrary::new(height, &cells)))
        }
    };

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", text.as_ref().unwrap_or_else(|e| e))?;
    Ok(if text.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Runs the request and renders either outcome as display text.
fn render(request: &Request<'_>) -> std::result::Result<String, String> {
    compute(request)
        .map(|report| report.to_string())
        .map_err(|err| err.to_string())
}

/// Splits `x,y` into its two cells. A missing comma leaves `y` empty,
/// which then fails to parse like any other bad cell.
fn split_vertex(text: &str) -> (&str, &str) {
    text.split_once(',').unwrap_or((text, ""))
}

fn init_logging(verbose: bool) -> Result<()> {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init()
        .map_err(anyhow::Error::msg)
}
