use crate::{Error, Result, Variant};
use image::GrayImage;
use indexmap::IndexMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct VariantRecord {
    image: GrayImage,
    path: Option<PathBuf>,
}

impl VariantRecord {
    pub fn new(image: GrayImage, path: Option<PathBuf>) -> Self {
        Self { image, path }
    }

    pub fn image(&self) -> &GrayImage {
        &self.image
    }

    /// Where the image was stored, `None` when it only lives in memory.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

/// Variants keyed by kind, iterated in insertion order.
#[derive(Debug, Clone, Default)]
pub struct VariantSet {
    records: IndexMap<Variant, VariantRecord>,
}

impl VariantSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserting an existing variant replaces its record in place.
    pub fn insert(&mut self, variant: Variant, record: VariantRecord) -> Option<VariantRecord> {
        self.records.insert(variant, record)
    }

    pub fn get(&self, variant: Variant) -> Option<&VariantRecord> {
        self.records.get(&variant)
    }

    pub fn get_by_name(&self, name: &str) -> Result<&VariantRecord> {
        let variant = name.parse::<Variant>()?;
        self.get(variant)
            .ok_or_else(|| Error::UnknownVariant(name.to_string()))
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.records.keys().map(Variant::name).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Variant, &VariantRecord)> {
        self.records.iter()
    }
}
