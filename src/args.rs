use clap::{Parser, ValueEnum};
use site_digest::ToolMode;

#[derive(Parser, Debug)]
#[command(name = "site-digest")]
#[command(about = "Batch pipeline that digests a list of sites into text or image artifacts")]
#[command(version)]
pub struct Args {
    /// What to produce per site (text artifact + screenshot, or a cropped thumbnail)
    #[arg(short, long, value_enum, default_value_t = ModeArg::Text)]
    pub mode: ModeArg,

    /// Path to the JSON configuration file
    #[arg(short, long, default_value = "config.json")]
    pub config: String,

    /// Override the configured output directory
    #[arg(short, long)]
    pub output_dir: Option<String>,

    /// Override the configured number of concurrent site tasks
    #[arg(long)]
    pub concurrency: Option<usize>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Text,
    Image,
}

/// Convert from CLI argument mode to internal mode
pub fn convert_mode(arg_mode: ModeArg) -> ToolMode {
    match arg_mode {
        ModeArg::Text => ToolMode::Text,
        ModeArg::Image => ToolMode::Image,
    }
}
