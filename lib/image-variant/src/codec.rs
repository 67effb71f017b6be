use crate::{Error, Result, Variant};
use image::{
    ExtendedColorType, GrayImage, ImageEncoder,
    codecs::{
        png::PngEncoder as PngImageEncoder,
        pnm::{PnmEncoder, PnmSubtype, SampleEncoding},
    },
};
use std::{
    fmt,
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

pub trait Encoder: fmt::Debug {
    fn extension(&self) -> &'static str;
    fn encode(&self, image: &GrayImage, path: &Path) -> Result<()>;
}

/// Binary portable graymap (P5).
#[derive(Debug, Clone, Copy, Default)]
pub struct PgmEncoder;

impl Encoder for PgmEncoder {
    fn extension(&self) -> &'static str {
        "pgm"
    }

    fn encode(&self, image: &GrayImage, path: &Path) -> Result<()> {
        write_or_discard(path, |writer| {
            PnmEncoder::new(writer)
                .with_subtype(PnmSubtype::Graymap(SampleEncoding::Binary))
                .write_image(
                    image.as_raw(),
                    image.width(),
                    image.height(),
                    ExtendedColorType::L8,
                )
        })
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PngEncoder;

impl Encoder for PngEncoder {
    fn extension(&self) -> &'static str {
        "png"
    }

    fn encode(&self, image: &GrayImage, path: &Path) -> Result<()> {
        write_or_discard(path, |writer| {
            PngImageEncoder::new(writer).write_image(
                image.as_raw(),
                image.width(),
                image.height(),
                ExtendedColorType::L8,
            )
        })
    }
}

/// Creates `path`, runs `write` on it and flushes. On any failure after the
/// file was created the partial file is removed.
fn write_or_discard<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> image::ImageResult<()>,
{
    let mut writer = BufWriter::new(File::create(path)?);

    let result = write(&mut writer)
        .map_err(|source| Error::Encode {
            path: path.to_path_buf(),
            source,
        })
        .and_then(|_| Ok(writer.flush()?));
    drop(writer);

    if result.is_err() {
        _ = fs::remove_file(path);
    }

    result
}

/// Encoders tried in rank order until one of them succeeds.
#[derive(Debug)]
pub struct EncoderChain {
    encoders: Vec<Box<dyn Encoder>>,
}

impl Default for EncoderChain {
    fn default() -> Self {
        Self::new(vec![Box::new(PgmEncoder), Box::new(PngEncoder)])
    }
}

impl EncoderChain {
    pub fn new(encoders: Vec<Box<dyn Encoder>>) -> Self {
        Self { encoders }
    }

    /// Writes `<stem>_<variant>.<ext>`, returning the path of the first
    /// encoder that succeeded.
    pub fn save(&self, image: &GrayImage, stem: &Path, variant: Variant) -> Option<PathBuf> {
        for encoder in &self.encoders {
            let path = variant_path(stem, variant, encoder.extension());

            match encoder.encode(image, &path) {
                Ok(_) => {
                    log::info!("saved {variant} as {}", path.display());
                    return Some(path);
                }
                Err(e) => log::warn!(
                    "could not save {variant} as {}: {e}",
                    encoder.extension().to_uppercase()
                ),
            }
        }

        log::warn!("failed to save {variant}, keeping it in memory only");
        None
    }
}

pub fn variant_path(stem: &Path, variant: Variant, extension: &str) -> PathBuf {
    let mut name = stem.as_os_str().to_os_string();
    name.push(format!("_{}.{extension}", variant.name()));
    PathBuf::from(name)
}

/// `photos/lena.pgm` -> `photos/lena`
pub fn base_stem(path: &Path) -> PathBuf {
    path.with_extension("")
}
