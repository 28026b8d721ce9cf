use std::fs;
use std::path::Path;

use image::{Rgb, RgbImage};
use tempfile::TempDir;

use rene::error::DatasetError;
use rene::qualitative::colormap::{self, ColormapMode};
use rene::qualitative::{expr, files_index, QualitativeDataset, EASYTEST, HARDTEST};

fn write_image(path: &Path, width: u32, height: u32, fill: [u8; 3]) {
    RgbImage::from_pixel(width, height, Rgb(fill)).save(path).unwrap();
}

/// One object with an easytest and a hardtest split. Index 0 is complete,
/// index 1 misses most tags, index 2 has mismatched operand shapes.
fn make_qualitative_root() -> TempDir {
    let root = TempDir::new().unwrap();
    let easy = root.path().join("apple_TM").join(EASYTEST);
    fs::create_dir_all(&easy).unwrap();

    write_image(&easy.join("0_image.png"), 6, 4, [30, 30, 30]);
    write_image(&easy.join("0_gt.png"), 6, 4, [10, 10, 10]);
    write_image(&easy.join("0_depth.png"), 6, 4, [60, 60, 60]);
    write_image(&easy.join("0_shadows.png"), 6, 4, [128, 128, 128]);
    write_image(&easy.join("1_image.png"), 6, 4, [5, 5, 5]);
    write_image(&easy.join("2_image.png"), 6, 4, [5, 5, 5]);
    write_image(&easy.join("2_gt.png"), 6, 6, [5, 5, 5]);
    // Lenient layout: these do not parse as {index}_{tag} and are skipped.
    write_image(&easy.join("readme.png"), 2, 2, [0, 0, 0]);
    write_image(&easy.join("x_preview.png"), 2, 2, [0, 0, 0]);

    let hard = root.path().join("apple_TM").join(HARDTEST);
    fs::create_dir_all(&hard).unwrap();
    write_image(&hard.join("0_image.png"), 6, 4, [80, 80, 80]);
    write_image(&hard.join("0_gt.png"), 6, 4, [90, 90, 90]);

    root
}

#[test]
fn files_index_parses_and_skips_leniently() {
    let root = make_qualitative_root();
    let index = files_index(&root.path().join("apple_TM").join(EASYTEST)).unwrap();

    assert_eq!(index.keys().copied().collect::<Vec<usize>>(), vec![0, 1, 2]);
    assert_eq!(
        index[&0].keys().cloned().collect::<Vec<String>>(),
        vec!["depth", "gt", "image", "shadows"]
    );
    assert_eq!(index[&1].len(), 1);
}

#[test]
fn discovery_and_counts() {
    let root = make_qualitative_root();
    let qualitatives = QualitativeDataset::new(root.path()).unwrap();

    assert_eq!(qualitatives.objects_names(), vec!["apple_TM"]);
    assert_eq!(qualitatives.num_items("apple_TM", EASYTEST).unwrap(), 3);
    assert_eq!(qualitatives.num_items("apple_TM", HARDTEST).unwrap(), 1);
    assert!(matches!(
        qualitatives.num_items("pear_TM", EASYTEST),
        Err(DatasetError::ObjectNotFound(_))
    ));
    assert!(matches!(
        qualitatives.num_items("apple_TM", "valtest"),
        Err(DatasetError::SplitNotFound(_))
    ));
}

#[test]
fn diff_expression_is_absolute_difference() {
    let root = make_qualitative_root();
    let qualitatives = QualitativeDataset::new(root.path()).unwrap();

    let items = qualitatives
        .get("apple_TM", EASYTEST, 0, &["$diff|image,gt"])
        .unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].0, "$diff|image,gt");
    // |30 - 10| everywhere, and |90 - 80| holds on the other operand order.
    assert!(items[0].1.as_raw().iter().all(|&value| value == 20));

    let items = qualitatives
        .get("apple_TM", HARDTEST, 0, &["$diff|image,gt"])
        .unwrap();
    assert!(items[0].1.as_raw().iter().all(|&value| value == 10));
}

#[test]
fn expression_errors_surface_loudly() {
    let root = make_qualitative_root();
    let qualitatives = QualitativeDataset::new(root.path()).unwrap();

    assert!(matches!(
        qualitatives.get("apple_TM", EASYTEST, 0, &["$blend|image,gt"]),
        Err(DatasetError::UnknownOperator(_))
    ));
    assert!(matches!(
        qualitatives.get("apple_TM", EASYTEST, 0, &["$diff|image"]),
        Err(DatasetError::MalformedExpression(_))
    ));
    assert!(matches!(
        qualitatives.get("apple_TM", EASYTEST, 0, &["$diff"]),
        Err(DatasetError::MalformedExpression(_))
    ));
    assert!(matches!(
        qualitatives.get("apple_TM", EASYTEST, 2, &["$diff|image,gt"]),
        Err(DatasetError::ShapeMismatch(_))
    ));
}

#[test]
fn missing_entries_fail_instead_of_skipping() {
    let root = make_qualitative_root();
    let qualitatives = QualitativeDataset::new(root.path()).unwrap();

    assert!(matches!(
        qualitatives.get("apple_TM", EASYTEST, 1, &["gt"]),
        Err(DatasetError::MissingTag { index: 1, .. })
    ));
    assert!(matches!(
        qualitatives.get("apple_TM", EASYTEST, 99, &["image"]),
        Err(DatasetError::IndexNotFound(99))
    ));
    // A derived expression with a missing operand fails the same way.
    assert!(matches!(
        qualitatives.get("apple_TM", EASYTEST, 1, &["$diff|image,gt"]),
        Err(DatasetError::MissingTag { index: 1, .. })
    ));
}

#[test]
fn stack_concatenates_in_request_order() {
    let root = make_qualitative_root();
    let qualitatives = QualitativeDataset::new(root.path()).unwrap();

    let stack = qualitatives
        .get_stack("apple_TM", EASYTEST, 0, &["image", "gt"])
        .unwrap();
    assert_eq!(stack.dimensions(), (12, 4));
    // "image" and "gt" match no colormap entry and pass through unchanged.
    assert_eq!(stack.get_pixel(0, 0), &Rgb([30, 30, 30]));
    assert_eq!(stack.get_pixel(6, 0), &Rgb([10, 10, 10]));
}

#[test]
fn stack_with_mismatched_heights_fails() {
    let root = make_qualitative_root();
    let qualitatives = QualitativeDataset::new(root.path()).unwrap();

    assert!(matches!(
        qualitatives.get_stack("apple_TM", EASYTEST, 2, &["image", "gt"]),
        Err(DatasetError::ShapeMismatch(_))
    ));
}

#[test]
fn colormap_dispatch_is_ordered_first_match_wins() {
    assert_eq!(colormap::mode_for_key("depth"), Some(ColormapMode::InvertedPseudoColor));
    assert_eq!(colormap::mode_for_key("$diff|image,gt"), Some(ColormapMode::PseudoColor));
    assert_eq!(colormap::mode_for_key("soft_shadows"), Some(ColormapMode::Grayscale));
    assert_eq!(colormap::mode_for_key("image"), None);
    // "depth" precedes "diff" in the table, so a colliding name picks depth.
    assert_eq!(
        colormap::mode_for_key("depth_diff"),
        Some(ColormapMode::InvertedPseudoColor)
    );
}

#[test]
fn colormap_conversions() {
    // Normalization maps the max intensity to 255 and scales the rest.
    let mut image = RgbImage::from_pixel(2, 1, Rgb([128, 128, 128]));
    image.put_pixel(1, 0, Rgb([64, 64, 64]));
    let gray = colormap::apply(&image, ColormapMode::Grayscale);
    assert_eq!(gray.get_pixel(0, 0), &Rgb([255, 255, 255]));
    assert_eq!(gray.get_pixel(1, 0), &Rgb([127, 127, 127]));

    // An all-zero image stays all-zero.
    let zeros = RgbImage::new(2, 2);
    let gray = colormap::apply(&zeros, ColormapMode::Grayscale);
    assert!(gray.as_raw().iter().all(|&value| value == 0));

    // Jet ramp endpoints: cold is blue-ish, hot is red-ish.
    assert_eq!(colormap::jet(0), Rgb([0, 0, 127]));
    assert_eq!(colormap::jet(255), Rgb([127, 0, 0]));

    // Inversion flips which end of the ramp the max intensity lands on.
    let inverted = colormap::apply(&image, ColormapMode::InvertedPseudoColor);
    let direct = colormap::apply(&image, ColormapMode::PseudoColor);
    assert_eq!(direct.get_pixel(0, 0), &Rgb([127, 0, 0]));
    assert_eq!(inverted.get_pixel(0, 0), &Rgb([0, 0, 127]));
}

#[test]
fn expr_parsing() {
    assert!(expr::is_expr("$diff|image,gt"));
    assert!(!expr::is_expr("image"));

    let parsed = expr::parse("$diff|image, gt").unwrap();
    assert_eq!(parsed.op, expr::Op::Diff);
    assert_eq!(parsed.operands, vec!["image".to_string(), "gt".to_string()]);
}
