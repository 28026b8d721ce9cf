use std::path::{Path, PathBuf};

use crate::dataset::camera_order::CameraIndexMap;
use crate::dataset::sample::Sample;
use crate::error::{DatasetError, Result};
use crate::io::scan_dirs;

/// Lazy file-backed sequence of samples. Implementations resolve item bytes
/// only when a returned sample is invoked, never at `get_sample` time beyond
/// what the wrapper itself requires.
pub trait SampleSequence {
    fn len(&self) -> usize;

    fn get_sample(&self, idx: usize) -> Result<Sample>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One (scene, light) capture directory: an ordered sequence of per-camera
/// sample directories, sorted by name. Opening the store lists directories
/// but reads no file bytes.
pub struct SampleStore {
    folder: PathBuf,
    samples: Vec<Sample>,
}

impl SampleStore {
    pub fn open(lightset_dir: &Path) -> Result<SampleStore> {
        let sample_dirs = scan_dirs(lightset_dir)?;
        let samples = sample_dirs
            .iter()
            .map(|dir| Sample::from_dir(dir))
            .collect::<Result<Vec<Sample>>>()?;
        Ok(SampleStore {
            folder: lightset_dir.to_path_buf(),
            samples,
        })
    }

    pub fn folder(&self) -> &Path {
        &self.folder
    }
}

impl SampleSequence for SampleStore {
    fn len(&self) -> usize {
        self.samples.len()
    }

    fn get_sample(&self, idx: usize) -> Result<Sample> {
        self.samples
            .get(idx)
            .cloned()
            .ok_or(DatasetError::CameraOutOfRange {
                index: idx,
                len: self.samples.len(),
            })
    }
}

/// View over a store addressed by logical camera position: every access is
/// routed through the camera index map.
pub struct ReorderedView<'a> {
    source: &'a SampleStore,
    order: &'a CameraIndexMap,
}

impl<'a> ReorderedView<'a> {
    pub fn new(source: &'a SampleStore, order: &'a CameraIndexMap) -> ReorderedView<'a> {
        ReorderedView { source, order }
    }
}

impl SampleSequence for ReorderedView<'_> {
    fn len(&self) -> usize {
        self.order.len()
    }

    fn get_sample(&self, idx: usize) -> Result<Sample> {
        let physical = self.order.physical(idx)?;
        self.source.get_sample(physical)
    }
}
