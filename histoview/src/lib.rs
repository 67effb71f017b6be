//! Grayscale histogram viewer.
//!
//! Loads a base image, derives the dark, bright, low-contrast and high-contrast
//! variants, stores them next to the base image and lets the user page through
//! every variant together with its histogram.

#[macro_use]
extern crate derivative;

pub mod cli;
mod config;
pub mod logic;

pub use cli::Cli;
pub use config::Config;

use anyhow::{Context, Result};
use image_variant::VariantGenerator;
use logic::{Navigator, TextViewer, render_frame};
use std::io;

/// Initializes the logger.
///
/// Each line carries a timestamp, the level, the source file and line.
/// `RUST_LOG` overrides the default `info` filter.
pub fn init_logger() {
    use std::io::Write;

    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .format(|buf, record| {
            let style = buf.default_level_style(record.level());
            let ts = chrono::Local::now().format("%H:%M:%S");

            writeln!(
                buf,
                "[{} {style}{}{style:#} {} {}] {}",
                ts,
                record.level(),
                record
                    .file()
                    .unwrap_or("None")
                    .split('/')
                    .next_back()
                    .unwrap_or("None"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}

/// Loads the user config, falling back to the defaults when it cannot be read.
pub fn load_config() -> Config {
    match Config::init() {
        Ok(config) => {
            if config.is_first_run {
                log::info!("wrote default config to {}", config.config_path.display());
            }
            config
        }
        Err(e) => {
            log::warn!("using default config: {e:?}");
            Config::default()
        }
    }
}

/// Generates the variants of `cli.image` and opens the viewer on stdin/stdout.
/// A base image that cannot be decoded is reported and ends the run cleanly.
pub fn run(cli: Cli, config: Config) -> Result<()> {
    let num_levels = cli
        .levels
        .map_or(config.histogram.num_levels, |levels| levels as usize);

    let set = match VariantGenerator::new().generate_from_path(&cli.image) {
        Ok(set) => set,
        Err(e) => {
            log::error!("could not load base image: {e}");
            return Ok(());
        }
    };

    for (variant, record) in set.iter() {
        match record.path() {
            Some(path) => log::info!("{variant}: {}", path.display()),
            None => log::info!("{variant}: memory only"),
        }
    }

    let viewer = TextViewer::new()
        .with_bar_width(config.viewer.bar_width)
        .with_rows(config.viewer.rows);

    viewer
        .run(
            Navigator::new(set.names()),
            |name| render_frame(&set, name, num_levels),
            io::stdin().lock(),
            io::stdout().lock(),
        )
        .with_context(|| "viewer failed")
}
