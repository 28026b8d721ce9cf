extern crate image as image_rs;

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use image_rs::{GenericImage, RgbImage};

use crate::error::{DatasetError, Result};
use crate::io::{self, scan_dirs};

pub mod colormap;
pub mod expr;

pub const EASYTEST: &str = "easytest";
pub const HARDTEST: &str = "hardtest";
pub const SPLITS: [&str; 2] = [EASYTEST, HARDTEST];

/// index -> item tag -> file path, for one split folder.
pub type SplitIndex = BTreeMap<usize, BTreeMap<String, PathBuf>>;

/// Indexes a flat split folder by parsing file names as `{index}_{tag}.{ext}`.
/// Files that do not parse are skipped; the layout is deliberately lenient.
pub fn files_index(folder: &Path) -> Result<SplitIndex> {
    let mut index = SplitIndex::new();
    for entry in fs::read_dir(folder)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let stem = match path.file_stem().and_then(|s| s.to_str()) {
            Some(stem) => stem,
            None => continue,
        };
        let (idx_part, tag) = match stem.split_once('_') {
            Some(parts) => parts,
            None => continue,
        };
        let idx = match idx_part.parse::<usize>() {
            Ok(idx) => idx,
            Err(_) => continue,
        };
        if tag.is_empty() {
            continue;
        }
        index
            .entry(idx)
            .or_insert_with(BTreeMap::new)
            .insert(tag.to_string(), path);
    }
    Ok(index)
}

struct ObjectEntry {
    name: String,
    splits: BTreeMap<String, SplitIndex>,
}

/// Browser for the flat qualitative-export layout
/// `root/{object}/{split}/{index}_{tag}.{ext}` with easytest/hardtest splits.
pub struct QualitativeDataset {
    root: PathBuf,
    objects: Vec<ObjectEntry>,
}

impl QualitativeDataset {
    pub fn new(root: &Path) -> Result<QualitativeDataset> {
        let object_dirs = scan_dirs(root)?;
        let mut objects = Vec::<ObjectEntry>::with_capacity(object_dirs.len());
        for object_dir in &object_dirs {
            let name = object_dir
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or_default()
                .to_string();
            let mut splits = BTreeMap::new();
            for &split in SPLITS.iter() {
                let split_dir = object_dir.join(split);
                if split_dir.is_dir() {
                    splits.insert(split.to_string(), files_index(&split_dir)?);
                }
            }
            objects.push(ObjectEntry { name, splits });
        }
        Ok(QualitativeDataset { root: root.to_path_buf(), objects })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn objects_names(&self) -> Vec<&str> {
        self.objects.iter().map(|object| object.name.as_str()).collect()
    }

    pub fn num_items(&self, object: &str, split: &str) -> Result<usize> {
        Ok(self.split_index(object, split)?.len())
    }

    fn split_index(&self, object: &str, split: &str) -> Result<&SplitIndex> {
        let entry = self
            .objects
            .iter()
            .find(|candidate| candidate.name == object)
            .ok_or_else(|| DatasetError::ObjectNotFound(object.to_string()))?;
        entry
            .splits
            .get(split)
            .ok_or_else(|| DatasetError::SplitNotFound(split.to_string()))
    }

    /// Loads the requested items for one index, in request order. Derived
    /// `$op|...` keys are evaluated from their operand items; a missing
    /// index or operand fails instead of being skipped.
    pub fn get(
        &self,
        object: &str,
        split: &str,
        index: usize,
        keys: &[&str],
    ) -> Result<Vec<(String, RgbImage)>> {
        let split_index = self.split_index(object, split)?;
        let entry = split_index
            .get(&index)
            .ok_or(DatasetError::IndexNotFound(index))?;

        let mut out = Vec::<(String, RgbImage)>::with_capacity(keys.len());
        for &key in keys {
            let image = match expr::is_expr(key) {
                true => {
                    let parsed = expr::parse(key)?;
                    let operands = parsed
                        .operands
                        .iter()
                        .map(|tag| load_tag(entry, index, tag))
                        .collect::<Result<Vec<RgbImage>>>()?;
                    expr::eval(&parsed, &operands)?
                }
                false => load_tag(entry, index, key)?,
            };
            out.push((key.to_string(), image));
        }
        Ok(out)
    }

    /// Loads, colormaps and horizontally concatenates the requested items
    /// into one visual strip.
    pub fn get_stack(
        &self,
        object: &str,
        split: &str,
        index: usize,
        keys: &[&str],
    ) -> Result<RgbImage> {
        let items = self.get(object, split, index, keys)?;
        let converted = items
            .iter()
            .map(|(key, image)| match colormap::mode_for_key(key) {
                Some(mode) => colormap::apply(image, mode),
                None => image.clone(),
            })
            .collect::<Vec<RgbImage>>();
        hstack(&converted)
    }
}

fn load_tag(entry: &BTreeMap<String, PathBuf>, index: usize, tag: &str) -> Result<RgbImage> {
    let path = entry.get(tag).ok_or_else(|| DatasetError::MissingTag {
        index,
        tag: tag.to_string(),
    })?;
    io::load_image(path)
}

/// Horizontal concatenation. All images must share the same height; no
/// auto-padding is performed.
pub fn hstack(images: &[RgbImage]) -> Result<RgbImage> {
    let first = images.first().ok_or(DatasetError::EmptySequence)?;
    let height = first.height();
    for image in images {
        if image.height() != height {
            return Err(DatasetError::ShapeMismatch(format!(
                "cannot stack height {} next to height {}",
                image.height(),
                height
            )));
        }
    }

    let total_width = images.iter().map(|image| image.width()).sum::<u32>();
    let mut out = RgbImage::new(total_width, height);
    let mut offset = 0u32;
    for image in images {
        out.copy_from(image, offset, 0)
            .map_err(|_| DatasetError::ShapeMismatch("stack copy out of bounds".to_string()))?;
        offset += image.width();
    }
    Ok(out)
}
