use crate::{Error, MAX_LEVELS, Result};
use image::GrayImage;
use std::path::Path;

/// Pixel counts per gray level.
///
/// `counts[i]` is the number of samples that fell into level `levels[i]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    counts: Vec<u64>,
    levels: Vec<u32>,
}

impl Histogram {
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    pub fn levels(&self) -> &[u32] {
        &self.levels
    }

    pub fn num_levels(&self) -> usize {
        self.counts.len()
    }

    /// Sum of all bins, equal to the pixel count of the source image.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    pub fn peak(&self) -> u64 {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}

/// Counts the samples of `image` into `num_levels` unit-wide bins spanning
/// `[0, num_levels)`.
///
/// Samples at or above `num_levels` land in the last bin, so the bin counts
/// always add up to the pixel count.
pub fn compute_histogram(image: &GrayImage, num_levels: usize) -> Result<Histogram> {
    if num_levels == 0 {
        return Err(Error::InvalidInput(
            "histogram needs at least one level".to_string(),
        ));
    }

    if num_levels > MAX_LEVELS {
        return Err(Error::InvalidInput(format!(
            "{num_levels} levels requested, at most {MAX_LEVELS} supported"
        )));
    }

    let last = num_levels - 1;
    let mut counts = vec![0u64; num_levels];

    for sample in image.as_raw() {
        let bin = (*sample as usize).min(last);
        counts[bin] += 1;
    }

    Ok(Histogram {
        counts,
        levels: (0..num_levels as u32).collect(),
    })
}

/// Decodes `path` as an 8-bit grayscale image and computes its histogram.
pub fn histogram_from_path(path: impl AsRef<Path>, num_levels: usize) -> Result<Histogram> {
    let path = path.as_ref();
    let image = image::open(path)
        .map_err(|source| Error::Decode {
            path: path.to_path_buf(),
            source,
        })?
        .into_luma8();

    log::debug!(
        "histogram of {} ({}x{}, {num_levels} levels)",
        path.display(),
        image.width(),
        image.height()
    );

    compute_histogram(&image, num_levels)
}
