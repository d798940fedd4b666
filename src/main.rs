use clap::Parser;
use gpx_splitter::cli::Cli;
use gpx_splitter::pipeline;

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    let mode = cli.mode();
    let mut any_failed = false;
    for path in &cli.gpx_files {
        // Failures are per file: report and keep going with the rest.
        if let Err(error) = pipeline::process(path, mode) {
            tracing::error!("Failed to split {}: {}", path.display(), error);
            any_failed = true;
        }
    }

    if any_failed {
        std::process::exit(1);
    }
}
