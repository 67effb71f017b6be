use clap::Parser;
use image_histogram::MAX_LEVELS;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub struct Cli {
    /// Base image, converted to grayscale on load
    pub image: PathBuf,

    /// Number of histogram levels [default: 256, or the configured value]
    #[arg(value_parser = clap::value_parser!(u32).range(1..=MAX_LEVELS as i64))]
    pub levels: Option<u32>,
}
