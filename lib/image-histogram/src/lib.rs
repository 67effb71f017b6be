pub mod histogram;
pub mod stats;

pub use histogram::{Histogram, compute_histogram, histogram_from_path};
pub use stats::ImageStats;

use std::path::PathBuf;

/// Bin count used when the caller does not ask for anything else.
pub const DEFAULT_LEVELS: usize = 256;

/// Largest bin count accepted, enough for 16-bit samples.
pub const MAX_LEVELS: usize = 1 << 16;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
