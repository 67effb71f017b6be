use crate::{EncoderChain, Error, Result, Variant, VariantRecord, VariantSet, codec::base_stem};
use derivative::Derivative;
use derive_setters::Setters;
use image::GrayImage;
use std::path::Path;

/// Decodes `path` and converts it to 8-bit grayscale.
pub fn load_base(path: impl AsRef<Path>) -> Result<GrayImage> {
    let path = path.as_ref();
    let image = image::open(path).map_err(|source| Error::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(image.into_luma8())
}

/// Renders every variant in memory, none of them stored on disk.
pub fn generate_variants(base: &GrayImage) -> VariantSet {
    let mut set = VariantSet::new();
    for variant in Variant::all() {
        set.insert(*variant, VariantRecord::new(variant.render(base), None));
    }
    set
}

#[derive(Debug, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct VariantGenerator {
    #[derivative(Default(value = "EncoderChain::default()"))]
    encoders: EncoderChain,
}

impl VariantGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders every variant of `base` and stores each derived image next to
    /// `base_path`. A variant whose save fails is still returned, without path.
    pub fn generate(&self, base: &GrayImage, base_path: &Path) -> VariantSet {
        let stem = base_stem(base_path);
        let mut set = VariantSet::new();

        for variant in Variant::all() {
            let image = variant.render(base);
            let path = match variant {
                Variant::Original => Some(base_path.to_path_buf()),
                _ => self.encoders.save(&image, &stem, *variant),
            };

            log::debug!("generated {variant} ({}x{})", image.width(), image.height());
            set.insert(*variant, VariantRecord::new(image, path));
        }

        set
    }

    pub fn generate_from_path(&self, base_path: impl AsRef<Path>) -> Result<VariantSet> {
        let base_path = base_path.as_ref();
        let base = load_base(base_path)?;
        log::info!("loaded base image {}", base_path.display());

        Ok(self.generate(&base, base_path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Encoder;

    #[derive(Debug)]
    struct ReadOnlyDisk;

    impl Encoder for ReadOnlyDisk {
        fn extension(&self) -> &'static str {
            "pgm"
        }

        fn encode(&self, _image: &GrayImage, _path: &Path) -> Result<()> {
            Err(Error::Io(std::io::Error::other("read-only file system")))
        }
    }

    fn gradient() -> GrayImage {
        GrayImage::from_fn(16, 16, |x, y| image::Luma([(y * 16 + x) as u8]))
    }

    #[test]
    fn test_generate_variants_in_memory() {
        let base = gradient();
        let set = generate_variants(&base);

        assert_eq!(
            set.names(),
            ["original", "escura", "clara", "baixo_contraste", "alto_contraste"]
        );
        assert!(set.iter().all(|(_, record)| record.path().is_none()));
        assert_eq!(set.get(Variant::Original).unwrap().image(), &base);
    }

    #[test]
    fn test_generate_saves_next_to_base() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let base_path = dir.path().join("lena.pgm");
        gradient().save(&base_path)?;

        let set = VariantGenerator::new().generate_from_path(&base_path)?;
        assert_eq!(set.len(), 5);

        let original = set.get(Variant::Original).unwrap();
        assert_eq!(original.path(), Some(base_path.as_path()));

        for variant in &Variant::all()[1..] {
            let record = set.get(*variant).unwrap();
            let expected = dir.path().join(format!("lena_{}.pgm", variant.name()));
            assert_eq!(record.path(), Some(expected.as_path()));
            assert_eq!(&image::open(&expected)?.into_luma8(), record.image());
        }

        Ok(())
    }

    #[test]
    fn test_save_failure_keeps_variant() {
        let generator = VariantGenerator::new()
            .with_encoders(EncoderChain::new(vec![Box::new(ReadOnlyDisk)]));
        let set = generator.generate(&gradient(), Path::new("lena.pgm"));

        assert_eq!(set.len(), 5);
        for variant in &Variant::all()[1..] {
            let record = set.get(*variant).unwrap();
            assert!(record.path().is_none());
            assert_eq!(record.image(), &variant.render(&gradient()));
        }
    }

    #[test]
    fn test_missing_base_is_decode_error() {
        let err = VariantGenerator::new()
            .generate_from_path("/nonexistent/lena.pgm")
            .unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
    }

    #[test]
    fn test_load_base_from_bmp() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("lena.bmp");
        let rgb = image::RgbImage::from_fn(2, 1, |x, _| image::Rgb([x as u8 * 200; 3]));
        rgb.save(&path)?;

        let base = load_base(&path)?;
        assert_eq!(base.dimensions(), (2, 1));
        assert_eq!(base.as_raw(), &[0, 200]);

        let set = VariantGenerator::new().generate_from_path(&path)?;
        assert_eq!(set.len(), 5);
        assert!(dir.path().join("lena_clara.pgm").exists());

        Ok(())
    }

    #[test]
    fn test_undecodable_base() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("lena.pgm");
        std::fs::write(&path, b"definitely not an image")?;

        assert!(matches!(load_base(&path), Err(Error::Decode { .. })));
        Ok(())
    }
}
