use clap::Parser;
use site_digest::{Pipeline, ToolMode};

mod args;
use args::{Args, convert_mode};

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();
    let mode = convert_mode(args.mode);

    ::log::info!("Starting site digest in {:?} mode", mode);

    // Print WebDriver info message for screenshot-taking runs
    if mode == ToolMode::Text {
        println!("Note: screenshots require a WebDriver server (e.g., ChromeDriver).");
        println!(
            "Set WEBDRIVER_URL environment variable if not using the default http://localhost:4444"
        );
    }

    // Load configuration; a missing file falls back to defaults, and the
    // empty default site list is then rejected as invalid input below
    let mut pipeline = match Pipeline::new(mode).with_config_file(&args.config) {
        Ok(pipeline) => pipeline,
        Err(e) => {
            ::log::warn!(
                "Could not load config {}: {}. Using defaults.",
                args.config,
                e
            );
            Pipeline::new(mode)
        }
    };

    // Apply command-line overrides
    if let Some(output_dir) = args.output_dir {
        pipeline = pipeline.with_output_dir(output_dir);
    }
    if let Some(concurrency) = args.concurrency {
        pipeline = pipeline.with_max_concurrency(concurrency);
    }

    // Per-site failures are already in the summary; reaching Err means the
    // batch never started, which is the only non-zero exit
    match pipeline.run().await {
        Ok(summary) => summary.log(),
        Err(e) => {
            ::log::error!("Batch could not run: {}", e);
            std::process::exit(1);
        }
    }
}
