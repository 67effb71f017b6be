use crate::{map_samples, to_sample};
use derivative::Derivative;
use derive_setters::Setters;
use image::GrayImage;

/// A pixel-wise adjustment. The input is never touched, a new image is returned.
pub trait Transform {
    fn apply(&self, image: &GrayImage) -> GrayImage;
}

/// Scales every sample: `p' = p * factor`.
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct BrightnessConfig {
    #[derivative(Default(value = "1.0"))]
    factor: f32,
}

impl BrightnessConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Transform for BrightnessConfig {
    fn apply(&self, image: &GrayImage) -> GrayImage {
        map_samples(image, |p| to_sample(p as f32 * self.factor))
    }
}

/// Power-law remap of the normalized intensity. `gamma > 1` darkens midtones.
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct GammaConfig {
    #[derivative(Default(value = "1.0"))]
    gamma: f32,
}

impl GammaConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Transform for GammaConfig {
    fn apply(&self, image: &GrayImage) -> GrayImage {
        let mut lut = [0u8; 256];
        for (p, out) in lut.iter_mut().enumerate() {
            *out = to_sample((p as f32 / 255.0).powf(self.gamma) * 255.0);
        }

        map_samples(image, |p| lut[p as usize])
    }
}

/// Linear remap around the image mean: `p' = mean + (p - mean) * factor`.
///
/// `factor < 1` pulls samples toward the mean, `factor > 1` pushes them away
/// and saturates at 0 or 255.
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct ContrastConfig {
    #[derivative(Default(value = "1.0"))]
    factor: f32,
}

impl ContrastConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Transform for ContrastConfig {
    fn apply(&self, image: &GrayImage) -> GrayImage {
        let mean = mean(image);
        map_samples(image, |p| to_sample(mean + (p as f32 - mean) * self.factor))
    }
}

fn mean(image: &GrayImage) -> f32 {
    let samples = image.as_raw();
    if samples.is_empty() {
        return 0.0;
    }

    let sum: u64 = samples.iter().map(|&p| p as u64).sum();
    (sum as f64 / samples.len() as f64) as f32
}
