use std::fs;

use image::{Rgb, RgbImage};
use nalgebra::Matrix4;
use tempfile::TempDir;

use rene::dataset::camera_order::CameraIndexMap;
use rene::dataset::{ItemValue, ReorderedView, Sample, SampleSequence, SampleStore};
use rene::error::DatasetError;
use rene::stages::blackout::{BlackoutOverlay, X_CAMS, X_LITS};

struct MemorySequence {
    samples: Vec<Sample>,
}

impl SampleSequence for MemorySequence {
    fn len(&self) -> usize {
        self.samples.len()
    }

    fn get_sample(&self, idx: usize) -> Result<Sample, DatasetError> {
        self.samples
            .get(idx)
            .cloned()
            .ok_or(DatasetError::CameraOutOfRange {
                index: idx,
                len: self.samples.len(),
            })
    }
}

fn memory_sequence(sizes: &[(u32, u32)]) -> MemorySequence {
    let samples = sizes
        .iter()
        .enumerate()
        .map(|(idx, &(width, height))| {
            Sample::new()
                .set_value(
                    "image",
                    ItemValue::Image(RgbImage::from_pixel(width, height, Rgb([idx as u8 + 1, 7, 7]))),
                )
                .set_value("pose", ItemValue::Matrix(Matrix4::identity()))
        })
        .collect();
    MemorySequence { samples }
}

fn is_all_zero(image: &RgbImage) -> bool {
    image.as_raw().iter().all(|&value| value == 0)
}

#[test]
fn excluded_positions_get_zero_images() {
    let sequence = memory_sequence(&[(8, 6), (8, 6), (8, 6)]);
    let overlay = BlackoutOverlay::new(&sequence, "image", &[1], &[]).unwrap();

    assert_eq!(overlay.len(), 3);

    let blacked = overlay.get_sample(1).unwrap();
    let image = blacked.get("image").unwrap().into_image("image").unwrap();
    assert!(is_all_zero(&image));
    assert_eq!(image.dimensions(), (8, 6));
    // Non-image items pass through even at excluded positions.
    assert!(blacked.get("pose").unwrap().as_matrix().is_some());

    for idx in [0usize, 2].iter().copied() {
        let sample = overlay.get_sample(idx).unwrap();
        let image = sample.get("image").unwrap().into_image("image").unwrap();
        assert_eq!(image.get_pixel(0, 0)[0], idx as u8 + 1);
    }
}

#[test]
fn zero_image_shape_comes_from_the_first_sample() {
    let sequence = memory_sequence(&[(4, 3), (6, 5)]);
    let overlay = BlackoutOverlay::new(&sequence, "image", &[1], &[]).unwrap();

    let image = overlay
        .get_sample(1)
        .unwrap()
        .get("image")
        .unwrap()
        .into_image("image")
        .unwrap();
    assert_eq!(image.dimensions(), (4, 3));
}

#[test]
fn relieved_ranges_withhold_whole_spans() {
    let sequence = memory_sequence(&[(4, 3); 5]);
    let overlay = BlackoutOverlay::new(&sequence, "image", &[], &[1..3]).unwrap();

    for idx in 0..5 {
        let image = overlay
            .get_sample(idx)
            .unwrap()
            .get("image")
            .unwrap()
            .into_image("image")
            .unwrap();
        assert_eq!(is_all_zero(&image), (1..3).contains(&idx), "index {}", idx);
    }
}

#[test]
fn empty_sequence_is_rejected() {
    let sequence = MemorySequence { samples: vec![] };
    assert!(matches!(
        BlackoutOverlay::new(&sequence, "image", &[0], &[]),
        Err(DatasetError::EmptySequence)
    ));
}

#[test]
fn withheld_index_constants_are_in_range() {
    assert!(X_CAMS.iter().all(|&camera| camera < 50));
    assert!(X_LITS.iter().all(|&light| light < 40));
}

/// Exclusion is by logical (post-reindex) position, not by raw physical
/// index: stacking the overlay on a reordered view pins the convention.
#[test]
fn blackout_composes_over_camera_reindexing() {
    let root = TempDir::new().unwrap();
    for camera in 0..4u8 {
        let dir = root.path().join(format!("cam{:02}", camera));
        fs::create_dir_all(&dir).unwrap();
        RgbImage::from_pixel(4, 3, Rgb([camera + 1, 0, 0]))
            .save(dir.join("image.png"))
            .unwrap();
    }

    let store = SampleStore::open(root.path()).unwrap();
    let order = CameraIndexMap::from_table(vec![3, 2, 1, 0]).unwrap();
    let view = ReorderedView::new(&store, &order);
    let overlay = BlackoutOverlay::new(&view, "image", &[0], &[]).unwrap();

    // Logical 0 (physical 3) is blacked out.
    let blacked = overlay
        .get_sample(0)
        .unwrap()
        .get("image")
        .unwrap()
        .into_image("image")
        .unwrap();
    assert!(is_all_zero(&blacked));

    // Physical 3 accessed directly is untouched, and logical 3 (physical 0)
    // is not excluded.
    let direct = store.get_sample(3).unwrap().get("image").unwrap();
    assert_eq!(direct.as_image().unwrap().get_pixel(0, 0)[0], 4);
    let logical_3 = overlay.get_sample(3).unwrap().get("image").unwrap();
    assert_eq!(logical_3.as_image().unwrap().get_pixel(0, 0)[0], 1);
}
