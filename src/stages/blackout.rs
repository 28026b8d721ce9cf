extern crate image as image_rs;

use std::ops::Range;

use image_rs::RgbImage;

use crate::dataset::sample::{ItemValue, Sample};
use crate::dataset::store::SampleSequence;
use crate::error::{DatasetError, Result};

/// Camera positions withheld from every released lightset.
pub const X_CAMS: [usize; 3] = [4, 8, 15];
/// Lightset positions withheld entirely from released scenes.
pub const X_LITS: [usize; 3] = [2, 21, 34];

/// Read-through substitution layer: samples at excluded positions (or inside
/// a fully withheld range) come back with the image item replaced by an
/// all-zero image of the sequence's reference shape. Membership is checked
/// by position within the wrapped sequence, so stacking this over a
/// `ReorderedView` makes the excluded indices logical (post-reindex) camera
/// positions.
pub struct BlackoutOverlay<'a> {
    source: &'a dyn SampleSequence,
    image_key: String,
    excluded: Vec<usize>,
    relieved: Vec<Range<usize>>,
    reference_size: (u32, u32),
}

impl<'a> BlackoutOverlay<'a> {
    pub fn new(
        source: &'a dyn SampleSequence,
        image_key: &str,
        excluded: &[usize],
        relieved: &[Range<usize>],
    ) -> Result<BlackoutOverlay<'a>> {
        if source.is_empty() {
            return Err(DatasetError::EmptySequence);
        }
        // The reference shape is captured once, from the first sample.
        let reference = source.get_sample(0)?;
        let reference_size = reference.get(image_key)?.into_image(image_key)?.dimensions();
        Ok(BlackoutOverlay {
            source,
            image_key: image_key.to_string(),
            excluded: excluded.to_vec(),
            relieved: relieved.to_vec(),
            reference_size,
        })
    }

    pub fn is_blacked_out(&self, idx: usize) -> bool {
        self.excluded.contains(&idx) || self.relieved.iter().any(|range| range.contains(&idx))
    }
}

impl SampleSequence for BlackoutOverlay<'_> {
    fn len(&self) -> usize {
        self.source.len()
    }

    fn get_sample(&self, idx: usize) -> Result<Sample> {
        let sample = self.source.get_sample(idx)?;
        match self.is_blacked_out(idx) {
            true => {
                let (width, height) = self.reference_size;
                let zeros = RgbImage::new(width, height);
                Ok(sample.set_value(&self.image_key, ItemValue::Image(zeros)))
            }
            false => Ok(sample),
        }
    }
}
