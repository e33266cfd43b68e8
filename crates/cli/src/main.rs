use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;

use seamblend_core::blurring::infrastructure::blurrer_factory::BlurBackend;
use seamblend_core::pipeline::pipeline_logger::LogPipelineLogger;
use seamblend_core::{SeamBlendConfig, SeamBlendUseCase};

/// Split an image into four quadrants, soften the seams and stitch it back.
#[derive(Parser)]
#[command(name = "seamblend")]
struct Cli {
    /// Input image file (any format the decoder understands).
    input: PathBuf,

    /// JSON config file; command-line flags override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory for 1.png..4.png and the result.
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// File name of the composited result.
    #[arg(long)]
    result_name: Option<String>,

    /// Smallest accepted width or height, in pixels.
    #[arg(long)]
    min_dimension: Option<u32>,

    /// Maximum thickness of each seam blur strip, in pixels.
    #[arg(long)]
    blur_offset: Option<u32>,

    /// Gaussian radius used inside the strips.
    #[arg(long)]
    blur_radius: Option<u32>,

    /// Worker threads for the per-quadrant stages.
    #[arg(long)]
    workers: Option<usize>,

    /// Strip blur backend: gaussian or imageops.
    #[arg(long)]
    backend: Option<BlurBackend>,

    /// Print the outcome as JSON on stdout.
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli, &mut io::stdout()) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(cli: &Cli, out: &mut impl Write) -> Result<(), Box<dyn std::error::Error>> {
    let config = build_config(cli)?;

    let input = fs::read(&cli.input)
        .map_err(|e| format!("Cannot read input {}: {e}", cli.input.display()))?;
    log::info!(
        "Processing {} ({} bytes) into {}",
        cli.input.display(),
        input.len(),
        config.output_dir.display()
    );

    let mut use_case = SeamBlendUseCase::from_config(&config, Box::new(LogPipelineLogger::new()))?;
    let outcome = use_case.execute(&input)?;

    if cli.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&outcome)?)?;
    } else {
        log::info!(
            "Output written to {} ({} seam edge(s) left unblurred)",
            outcome.output_path.display(),
            outcome.skipped_edges.len()
        );
    }
    Ok(())
}

fn build_config(cli: &Cli) -> Result<SeamBlendConfig, Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => SeamBlendConfig::load(path)?,
        None => SeamBlendConfig::default(),
    };

    if let Some(dir) = &cli.output_dir {
        config.output_dir = dir.clone();
    }
    if let Some(name) = &cli.result_name {
        config.result_filename = name.clone();
    }
    if let Some(min) = cli.min_dimension {
        config.min_dimension = min;
    }
    if let Some(offset) = cli.blur_offset {
        config.blur_offset = offset;
    }
    if let Some(radius) = cli.blur_radius {
        config.blur_radius = radius;
    }
    if let Some(workers) = cli.workers {
        config.worker_threads = workers;
    }
    if let Some(backend) = cli.backend {
        config.blur_backend = backend;
    }

    config.validate()?;
    Ok(config)
}
