extern crate nalgebra as na;
extern crate image as image_rs;

use std::fs;
use std::path::Path;

use na::Matrix4;
use image_rs::{GrayImage, RgbImage};

use crate::error::{DatasetError, Result};
use crate::Float;

pub fn load_image(file_path: &Path) -> Result<RgbImage> {
    Ok(image_rs::open(file_path)?.to_rgb8())
}

pub fn load_image_as_gray(file_path: &Path) -> Result<GrayImage> {
    Ok(image_rs::open(file_path)?.to_luma8())
}

pub fn save_image(file_path: &Path, image: &RgbImage) -> Result<()> {
    image.save(file_path)?;
    Ok(())
}

/// Loads a whitespace-separated 4x4 row-major matrix, the on-disk format of
/// pose and light-pose items. Scientific notation is accepted.
pub fn load_pose_matrix(file_path: &Path) -> Result<Matrix4<Float>> {
    let contents = fs::read_to_string(file_path)?;
    let values = contents
        .split_whitespace()
        .map(|token| {
            token.parse::<Float>().map_err(|_| DatasetError::ItemParse {
                path: file_path.to_path_buf(),
                reason: format!("could not parse '{}' as a float", token),
            })
        })
        .collect::<Result<Vec<Float>>>()?;

    if values.len() != 16 {
        return Err(DatasetError::ItemParse {
            path: file_path.to_path_buf(),
            reason: format!("expected 16 matrix entries, got {}", values.len()),
        });
    }

    Ok(Matrix4::from_row_slice(&values))
}

/// Sorted subdirectories of a folder. The sort order is the logical index
/// order at every level of the dataset and must stay deterministic.
pub fn scan_dirs(folder: &Path) -> Result<Vec<std::path::PathBuf>> {
    let mut dirs = fs::read_dir(folder)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect::<Vec<std::path::PathBuf>>();
    dirs.sort();
    Ok(dirs)
}
