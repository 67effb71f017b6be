pub mod codec;
pub mod generator;
pub mod set;
pub mod transform;
pub mod variant;

pub use codec::{Encoder, EncoderChain, PgmEncoder, PngEncoder};
pub use generator::{VariantGenerator, generate_variants, load_base};
pub use set::{VariantRecord, VariantSet};
pub use transform::{BrightnessConfig, ContrastConfig, GammaConfig, Transform};
pub use variant::Variant;

use image::GrayImage;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to encode {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Unknown variant: {0}")]
    UnknownVariant(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Converts a floating point sample back to 8 bits: round, then saturate.
#[inline]
pub(crate) fn to_sample(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

/// Copies `image` and rewrites every sample of the copy with `f`.
pub(crate) fn map_samples(image: &GrayImage, f: impl Fn(u8) -> u8) -> GrayImage {
    let mut output = image.clone();
    for pixel in output.pixels_mut() {
        pixel[0] = f(pixel[0]);
    }
    output
}
