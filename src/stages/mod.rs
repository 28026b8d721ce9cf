use std::collections::BTreeMap;

use crate::dataset::sample::{Item, Sample};
use crate::error::Result;

pub mod blackout;
pub mod resize;

pub use blackout::BlackoutOverlay;
pub use resize::ResizeStage;

/// A pure per-sample transform. Stages never mutate their input; they build
/// a new sample for every call.
pub trait Stage {
    fn apply(&self, sample: &Sample) -> Result<Sample>;
}

/// Ordered list of stages applied front to back. A plain list is enough, no
/// pipeline object graph.
#[derive(Default)]
pub struct StagePipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl StagePipeline {
    pub fn new() -> StagePipeline {
        StagePipeline { stages: Vec::new() }
    }

    pub fn with<S: Stage + 'static>(mut self, stage: S) -> StagePipeline {
        self.stages.push(Box::new(stage));
        self
    }

    pub fn apply(&self, sample: &Sample) -> Result<Sample> {
        let mut current = sample.clone();
        for stage in &self.stages {
            current = stage.apply(&current)?;
        }
        Ok(current)
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

/// Renames sample keys according to an ordered old->new table. Keys absent
/// from the table are dropped when `remove_missing` is set, kept otherwise.
pub struct RemapStage {
    pub remap: Vec<(String, String)>,
    pub remove_missing: bool,
}

impl RemapStage {
    pub fn new(remap: &[(&str, &str)], remove_missing: bool) -> RemapStage {
        RemapStage {
            remap: remap
                .iter()
                .map(|(old, new)| (old.to_string(), new.to_string()))
                .collect(),
            remove_missing,
        }
    }
}

impl Stage for RemapStage {
    fn apply(&self, sample: &Sample) -> Result<Sample> {
        let mut items = BTreeMap::<String, Item>::new();
        for (key, item) in sample.iter() {
            let target = self.remap.iter().find(|(old, _)| old == key);
            match target {
                Some((_, new)) => {
                    items.insert(new.clone(), item.clone());
                }
                None => {
                    if !self.remove_missing {
                        items.insert(key.clone(), item.clone());
                    }
                }
            }
        }
        Ok(Sample::from_items(items))
    }
}
