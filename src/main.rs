// Entry point: run the analysis once, print the report, render the figures.

use clap::Parser;
use overmassive::analysis;
use overmassive::cli::Args;
use overmassive::config::AnalysisConfig;
use overmassive::figures;
use overmassive::report;
use std::error::Error;
use std::path::Path;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        error!("analysis aborted: {e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let config = AnalysisConfig::load_or_default(&args.config);

    // All statistics complete before any output is written: a failure here
    // leaves no partial report or figure set behind.
    let summary = analysis::run(&config)?;

    print!("{}", report::render(&summary));

    if let Some(json_path) = &args.json {
        std::fs::write(json_path, serde_json::to_string_pretty(&summary)?)?;
        println!("Wrote results to {json_path}");
    }

    if !args.no_figures {
        let out_dir = Path::new(&args.out_dir);
        figures::render_all(out_dir, &summary, &config.figures)?;
        println!("Saved figures to {}", out_dir.display());
    }

    Ok(())
}
