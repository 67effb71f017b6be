use image::GrayImage;

/// Summary figures shown next to each histogram.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageStats {
    pub mean: f64,
    pub min: u8,
    pub max: u8,
}

impl ImageStats {
    pub fn of(image: &GrayImage) -> Self {
        let samples = image.as_raw();
        if samples.is_empty() {
            return Self {
                mean: 0.0,
                min: 0,
                max: 0,
            };
        }

        let sum: u64 = samples.iter().map(|&p| p as u64).sum();

        Self {
            mean: sum as f64 / samples.len() as f64,
            min: samples.iter().copied().min().unwrap_or(0),
            max: samples.iter().copied().max().unwrap_or(0),
        }
    }
}
