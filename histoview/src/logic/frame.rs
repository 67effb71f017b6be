use image::GrayImage;
use image_histogram::{Histogram, ImageStats, compute_histogram, histogram_from_path};
use image_variant::{Variant, VariantSet};

/// Everything the viewer shows for one variant.
#[derive(Debug, Clone)]
pub struct Frame<'a> {
    pub variant: Variant,
    pub image: &'a GrayImage,
    pub stats: ImageStats,
    pub histogram: Option<Histogram>,
}

/// Builds the frame for `name`.
///
/// The histogram is read back from the stored file when there is one and
/// computed from memory otherwise. A failed histogram leaves the frame
/// without one.
pub fn render_frame<'a>(set: &'a VariantSet, name: &str, num_levels: usize) -> Option<Frame<'a>> {
    let record = match set.get_by_name(name) {
        Ok(record) => record,
        Err(e) => {
            log::warn!("{e}");
            return None;
        }
    };

    let histogram = match record.path() {
        Some(path) => histogram_from_path(path, num_levels),
        None => compute_histogram(record.image(), num_levels),
    };

    let histogram = match histogram {
        Ok(histogram) => Some(histogram),
        Err(e) => {
            log::error!("histogram of {name} failed: {e}");
            None
        }
    };

    Some(Frame {
        variant: name.parse().ok()?,
        image: record.image(),
        stats: ImageStats::of(record.image()),
        histogram,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_variant::{VariantGenerator, generate_variants};

    fn sample_image() -> GrayImage {
        GrayImage::from_raw(2, 2, vec![0, 128, 200, 255]).unwrap()
    }

    #[test]
    fn test_in_memory_frame() {
        let set = generate_variants(&sample_image());
        let frame = render_frame(&set, "clara", 256).unwrap();

        assert_eq!(frame.variant, Variant::Bright);
        assert_eq!(frame.stats.max, 255);
        let histogram = frame.histogram.unwrap();
        assert_eq!(histogram.counts()[0], 1);
        assert_eq!(histogram.counts()[255], 3);
    }

    #[test]
    fn test_unknown_name() {
        let set = generate_variants(&sample_image());
        assert!(render_frame(&set, "sepia", 256).is_none());
    }

    #[test]
    fn test_invalid_levels_keeps_frame() {
        let set = generate_variants(&sample_image());
        let frame = render_frame(&set, "original", 0).unwrap();

        assert!(frame.histogram.is_none());
        assert_eq!(frame.image, &sample_image());
    }

    #[test]
    fn test_stored_frame_matches_memory() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let base_path = dir.path().join("sample.png");
        let base = GrayImage::from_fn(16, 16, |x, y| image::Luma([(y * 16 + x) as u8]));
        base.save(&base_path)?;

        let stored = VariantGenerator::new().generate_from_path(&base_path)?;
        let memory = generate_variants(&base);

        for name in stored.names() {
            let a = render_frame(&stored, name, 256).unwrap();
            let b = render_frame(&memory, name, 256).unwrap();
            assert_eq!(a.histogram, b.histogram, "{name}");
            assert_eq!(a.histogram.unwrap().total(), 256);
        }

        Ok(())
    }
}
