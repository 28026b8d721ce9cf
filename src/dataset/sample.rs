extern crate nalgebra as na;
extern crate image as image_rs;

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use na::Matrix4;
use image_rs::RgbImage;

use crate::calib::Calibration;
use crate::error::{DatasetError, Result};
use crate::io;
use crate::Float;

/// A resolved item value. Pose and light-pose items share the matrix variant.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemValue {
    Image(RgbImage),
    Calibration(Calibration),
    Matrix(Matrix4<Float>),
}

impl ItemValue {
    pub fn as_image(&self) -> Option<&RgbImage> {
        match self {
            ItemValue::Image(image) => Some(image),
            _ => None,
        }
    }

    pub fn as_calibration(&self) -> Option<&Calibration> {
        match self {
            ItemValue::Calibration(calibration) => Some(calibration),
            _ => None,
        }
    }

    pub fn as_matrix(&self) -> Option<&Matrix4<Float>> {
        match self {
            ItemValue::Matrix(matrix) => Some(matrix),
            _ => None,
        }
    }

    pub fn into_image(self, key: &str) -> Result<RgbImage> {
        match self {
            ItemValue::Image(image) => Ok(image),
            _ => Err(DatasetError::ItemType {
                key: key.to_string(),
                expected: "image",
            }),
        }
    }

    pub fn into_calibration(self, key: &str) -> Result<Calibration> {
        match self {
            ItemValue::Calibration(calibration) => Ok(calibration),
            _ => Err(DatasetError::ItemType {
                key: key.to_string(),
                expected: "calibration",
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Image,
    Calibration,
    Matrix,
}

impl ItemKind {
    pub fn from_extension(extension: &str) -> Option<ItemKind> {
        match extension {
            "png" | "jpg" | "jpeg" | "bmp" => Some(ItemKind::Image),
            "yml" | "yaml" => Some(ItemKind::Calibration),
            "txt" => Some(ItemKind::Matrix),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
enum ItemSource {
    File { path: PathBuf, kind: ItemKind },
    Value(ItemValue),
}

/// A lazily-resolved item. File-backed items read and decode on every
/// `invoke` call; there is no caching layer in the core contract.
#[derive(Debug, Clone)]
pub struct Item {
    source: ItemSource,
}

impl Item {
    pub fn from_file(path: PathBuf, kind: ItemKind) -> Item {
        Item {
            source: ItemSource::File { path, kind },
        }
    }

    pub fn from_value(value: ItemValue) -> Item {
        Item {
            source: ItemSource::Value(value),
        }
    }

    pub fn invoke(&self) -> Result<ItemValue> {
        match &self.source {
            ItemSource::File { path, kind } => match kind {
                ItemKind::Image => Ok(ItemValue::Image(io::load_image(path)?)),
                ItemKind::Calibration => Ok(ItemValue::Calibration(Calibration::from_path(path)?)),
                ItemKind::Matrix => Ok(ItemValue::Matrix(io::load_pose_matrix(path)?)),
            },
            ItemSource::Value(value) => Ok(value.clone()),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match &self.source {
            ItemSource::File { path, .. } => Some(path),
            ItemSource::Value(_) => None,
        }
    }
}

/// The named data items captured at one (lightset, camera) combination.
/// Constructing a sample never reads file bytes. Transforms produce new
/// samples via `set_value`; a previously returned sample is never mutated.
#[derive(Debug, Clone, Default)]
pub struct Sample {
    items: BTreeMap<String, Item>,
}

impl Sample {
    pub fn new() -> Sample {
        Sample {
            items: BTreeMap::new(),
        }
    }

    pub fn from_items(items: BTreeMap<String, Item>) -> Sample {
        Sample { items }
    }

    /// Opens one sample directory: every file with a recognized extension
    /// becomes an item keyed by its stem (`image.png` -> "image").
    pub fn from_dir(sample_dir: &Path) -> Result<Sample> {
        let mut items = BTreeMap::new();
        for entry in fs::read_dir(sample_dir)? {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            let stem = match path.file_stem().and_then(|s| s.to_str()) {
                Some(stem) => stem.to_string(),
                None => continue,
            };
            let extension = match path.extension().and_then(|e| e.to_str()) {
                Some(extension) => extension.to_ascii_lowercase(),
                None => continue,
            };
            if let Some(kind) = ItemKind::from_extension(&extension) {
                items.insert(stem, Item::from_file(path, kind));
            }
        }
        Ok(Sample { items })
    }

    /// Resolves an item, reading and decoding it from disk when file-backed.
    pub fn get(&self, key: &str) -> Result<ItemValue> {
        self.items
            .get(key)
            .ok_or_else(|| DatasetError::MissingItem(key.to_string()))?
            .invoke()
    }

    pub fn item(&self, key: &str) -> Option<&Item> {
        self.items.get(key)
    }

    /// Copy-on-transform: returns a new sample with `key` replaced by an
    /// inline value, leaving `self` untouched.
    pub fn set_value(&self, key: &str, value: ItemValue) -> Sample {
        let mut items = self.items.clone();
        items.insert(key.to_string(), Item::from_value(value));
        Sample { items }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.items.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.items.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Item)> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
