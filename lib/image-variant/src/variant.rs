use crate::{BrightnessConfig, ContrastConfig, Error, GammaConfig, Transform};
use image::GrayImage;
use std::{fmt, str::FromStr};

const DARK_BRIGHTNESS: f32 = 0.5;
const DARK_GAMMA: f32 = 2.0;
const BRIGHT_BRIGHTNESS: f32 = 2.0;
const LOW_CONTRAST: f32 = 0.1;
const HIGH_CONTRAST: f32 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Original,
    Dark,
    Bright,
    LowContrast,
    HighContrast,
}

impl Variant {
    /// Stable name, used as the file suffix and as the navigation key.
    pub fn name(&self) -> &'static str {
        match self {
            Variant::Original => "original",
            Variant::Dark => "escura",
            Variant::Bright => "clara",
            Variant::LowContrast => "baixo_contraste",
            Variant::HighContrast => "alto_contraste",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Variant::Original => "Original",
            Variant::Dark => "Dark",
            Variant::Bright => "Bright",
            Variant::LowContrast => "Low Contrast",
            Variant::HighContrast => "High Contrast",
        }
    }

    /// Every variant in generation order.
    pub fn all() -> &'static [Variant] {
        &[
            Variant::Original,
            Variant::Dark,
            Variant::Bright,
            Variant::LowContrast,
            Variant::HighContrast,
        ]
    }

    pub fn render(&self, base: &GrayImage) -> GrayImage {
        match self {
            Variant::Original => base.clone(),

            Variant::Dark => {
                let halved = BrightnessConfig::new()
                    .with_factor(DARK_BRIGHTNESS)
                    .apply(base);
                GammaConfig::new().with_gamma(DARK_GAMMA).apply(&halved)
            }

            Variant::Bright => BrightnessConfig::new()
                .with_factor(BRIGHT_BRIGHTNESS)
                .apply(base),

            Variant::LowContrast => ContrastConfig::new().with_factor(LOW_CONTRAST).apply(base),
            Variant::HighContrast => ContrastConfig::new().with_factor(HIGH_CONTRAST).apply(base),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variant::all()
            .iter()
            .find(|v| v.name() == s)
            .copied()
            .ok_or_else(|| Error::UnknownVariant(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_image() -> GrayImage {
        GrayImage::from_raw(2, 2, vec![0, 128, 200, 255]).unwrap()
    }

    #[test]
    fn test_names_round_trip() {
        for variant in Variant::all() {
            assert_eq!(variant.name().parse::<Variant>().unwrap(), *variant);
            assert_eq!(variant.to_string(), variant.name());
        }
    }

    #[test]
    fn test_unknown_name() {
        let err = "sepia".parse::<Variant>().unwrap_err();
        assert!(matches!(err, Error::UnknownVariant(name) if name == "sepia"));
    }

    #[test]
    fn test_generation_order() {
        let names: Vec<_> = Variant::all().iter().map(Variant::name).collect();
        assert_eq!(
            names,
            ["original", "escura", "clara", "baixo_contraste", "alto_contraste"]
        );
    }

    #[test]
    fn test_render_original_is_copy() {
        let img = sample_image();
        assert_eq!(Variant::Original.render(&img), img);
    }

    #[test]
    fn test_render_dark() {
        // halved to [0, 64, 100, 128], then squared in normalized space
        let out = Variant::Dark.render(&sample_image());
        assert_eq!(out.as_raw(), &[0, 16, 39, 64]);
    }

    #[test]
    fn test_render_bright_uses_base() {
        let out = Variant::Bright.render(&sample_image());
        assert_eq!(out.as_raw(), &[0, 255, 255, 255]);
    }

    #[test]
    fn test_render_contrast() {
        let img = sample_image();
        assert_eq!(Variant::LowContrast.render(&img).as_raw(), &[131, 144, 151, 157]);
        assert_eq!(Variant::HighContrast.render(&img).as_raw(), &[0, 93, 255, 255]);
    }

    #[test]
    fn test_all_zero_image() {
        let img = GrayImage::new(4, 4);
        assert_eq!(Variant::Bright.render(&img), img);
        assert_eq!(Variant::Dark.render(&img), img);
    }
}
