use std::path::{Path, PathBuf};

use crate::error::{DatasetError, Result};
use crate::io::scan_dirs;

pub mod camera_order;
pub mod sample;
pub mod store;

pub use camera_order::{CameraIndexMap, CameraOrderVariant};
pub use sample::{Item, ItemKind, ItemValue, Sample};
pub use store::{ReorderedView, SampleSequence, SampleStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetConfig {
    pub reorder_cameras: bool,
    pub camera_order: CameraOrderVariant,
}

impl Default for DatasetConfig {
    fn default() -> DatasetConfig {
        DatasetConfig {
            reorder_cameras: true,
            camera_order: CameraOrderVariant::V1,
        }
    }
}

/// One captured subject. The lightset sequence is sized to the maximum
/// observed light index; numbering gaps are holes that fail on access.
pub struct Scene {
    name: String,
    lightsets: Vec<Option<SampleStore>>,
}

impl Scene {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn num_lights(&self) -> usize {
        self.lightsets.len()
    }

    pub fn lightset(&self, light_idx: usize) -> Result<&SampleStore> {
        match self.lightsets.get(light_idx) {
            Some(Some(store)) => Ok(store),
            Some(None) => Err(DatasetError::LightsetGap(light_idx)),
            None => Err(DatasetError::LightOutOfRange {
                index: light_idx,
                len: self.lightsets.len(),
            }),
        }
    }
}

/// The dataset index: scene name -> ordered lightsets -> ordered cameras,
/// with cameras resolved through the configured camera index map. Directory
/// discovery happens once at build time; sample items stay lazy.
pub struct ReneDataset {
    root: PathBuf,
    scenes: Vec<Scene>,
    camera_map: CameraIndexMap,
    config: DatasetConfig,
}

impl ReneDataset {
    pub fn build(root: &Path, config: DatasetConfig) -> Result<ReneDataset> {
        let scene_dirs = scan_dirs(root)?;
        let mut scenes = Vec::<Scene>::with_capacity(scene_dirs.len());

        for scene_dir in &scene_dirs {
            let name = scene_dir
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or_default()
                .to_string();
            let lightset_dirs = scan_dirs(scene_dir)?;

            let mut discovered = Vec::<(usize, SampleStore)>::with_capacity(lightset_dirs.len());
            let mut max_idx = None;
            for lightset_dir in &lightset_dirs {
                let light_idx = light_index_from_name(lightset_dir)?;
                max_idx = Some(max_idx.map_or(light_idx, |m: usize| m.max(light_idx)));
                discovered.push((light_idx, SampleStore::open(lightset_dir)?));
            }

            let mut lightsets: Vec<Option<SampleStore>> =
                (0..max_idx.map_or(0, |m| m + 1)).map(|_| None).collect();
            for (light_idx, store) in discovered {
                if lightsets[light_idx].is_some() {
                    return Err(DatasetError::DuplicateLightIndex(light_idx));
                }
                lightsets[light_idx] = Some(store);
            }

            scenes.push(Scene { name, lightsets });
        }

        let num_cameras = scenes
            .iter()
            .flat_map(|scene| scene.lightsets.iter().flatten())
            .map(|store| store.len())
            .next()
            .unwrap_or(0);
        let camera_map = match config.reorder_cameras {
            true => CameraIndexMap::from_variant(config.camera_order, num_cameras)?,
            false => CameraIndexMap::identity(num_cameras),
        };

        Ok(ReneDataset {
            root: root.to_path_buf(),
            scenes,
            camera_map,
            config,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &DatasetConfig {
        &self.config
    }

    pub fn camera_map(&self) -> &CameraIndexMap {
        &self.camera_map
    }

    pub fn num_scenes(&self) -> usize {
        self.scenes.len()
    }

    pub fn scene_names(&self) -> Vec<&str> {
        self.scenes.iter().map(|scene| scene.name()).collect()
    }

    pub fn scene(&self, name: &str) -> Result<&Scene> {
        self.scenes
            .iter()
            .find(|scene| scene.name == name)
            .ok_or_else(|| DatasetError::SceneNotFound(name.to_string()))
    }

    pub fn scene_at(&self, scene_idx: usize) -> Result<&Scene> {
        self.scenes.get(scene_idx).ok_or(DatasetError::SceneOutOfRange {
            index: scene_idx,
            len: self.scenes.len(),
        })
    }

    pub fn num_lights(&self, name: &str) -> Result<usize> {
        Ok(self.scene(name)?.num_lights())
    }

    pub fn num_cameras(&self, name: &str, light_idx: usize) -> Result<usize> {
        Ok(self.scene(name)?.lightset(light_idx)?.len())
    }

    /// Fetches the sample at a logical camera position, routed through the
    /// camera index map.
    pub fn get_sample(&self, name: &str, light_idx: usize, camera_idx: usize) -> Result<Sample> {
        let store = self.scene(name)?.lightset(light_idx)?;
        let physical = self.camera_map.physical(camera_idx)?;
        store.get_sample(physical)
    }

    /// Fetches a sample by raw physical position, bypassing the map.
    pub fn get_physical(
        &self,
        name: &str,
        light_idx: usize,
        physical_idx: usize,
    ) -> Result<Sample> {
        self.scene(name)?.lightset(light_idx)?.get_sample(physical_idx)
    }

    /// Resolves one item of the addressed sample, e.g. key "image".
    pub fn get(
        &self,
        name: &str,
        light_idx: usize,
        camera_idx: usize,
        key: &str,
    ) -> Result<ItemValue> {
        self.get_sample(name, light_idx, camera_idx)?.get(key)
    }

    /// Logically-ordered view over one lightset, for stacking overlays that
    /// address by post-reindex position.
    pub fn reordered(&self, name: &str, light_idx: usize) -> Result<ReorderedView> {
        let store = self.scene(name)?.lightset(light_idx)?;
        Ok(ReorderedView::new(store, &self.camera_map))
    }
}

/// The trailing integer suffix of a lightset directory name is its light
/// index ("lset021" -> 21).
fn light_index_from_name(lightset_dir: &Path) -> Result<usize> {
    let name = lightset_dir
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();
    let digits = name
        .chars()
        .rev()
        .take_while(|c| c.is_ascii_digit())
        .collect::<Vec<char>>();
    if digits.is_empty() {
        return Err(DatasetError::MalformedLightset(name.to_string()));
    }
    let suffix = digits.iter().rev().collect::<String>();
    suffix
        .parse::<usize>()
        .map_err(|_| DatasetError::MalformedLightset(name.to_string()))
}
