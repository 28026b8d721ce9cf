extern crate nalgebra as na;

use std::fs;
use std::path::Path;

use na::Matrix3;
use serde::{Deserialize, Serialize};

use crate::error::{DatasetError, Result};
use crate::Float;

/// Persisted calibration record. The nested key names and array shapes
/// round-trip unchanged; the resize stage only rewrites `camera_matrix`
/// and `image_size`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Calibration {
    pub intrinsics: Intrinsics,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Intrinsics {
    pub camera_matrix: [[Float; 3]; 3],
    pub dist_coeffs: [Float; 5],
    pub image_size: (u32, u32),
}

impl Intrinsics {
    pub fn camera_matrix(&self) -> Matrix3<Float> {
        let m = &self.camera_matrix;
        Matrix3::new(
            m[0][0], m[0][1], m[0][2],
            m[1][0], m[1][1], m[1][2],
            m[2][0], m[2][1], m[2][2],
        )
    }

    pub fn set_camera_matrix(&mut self, matrix: &Matrix3<Float>) {
        for r in 0..3 {
            for c in 0..3 {
                self.camera_matrix[r][c] = matrix[(r, c)];
            }
        }
    }

    pub fn focal_x(&self) -> Float {
        self.camera_matrix[0][0]
    }

    pub fn focal_y(&self) -> Float {
        self.camera_matrix[1][1]
    }

    pub fn principal_point(&self) -> (Float, Float) {
        (self.camera_matrix[0][2], self.camera_matrix[1][2])
    }
}

impl Calibration {
    pub fn from_path(file_path: &Path) -> Result<Calibration> {
        let contents = fs::read_to_string(file_path)?;
        let calibration: Calibration = serde_yaml::from_str(&contents)?;
        let (width, height) = calibration.intrinsics.image_size;
        if width == 0 || height == 0 {
            return Err(DatasetError::InvalidCalibration {
                path: file_path.to_path_buf(),
                reason: format!("image_size ({},{}) has a zero component", width, height),
            });
        }
        Ok(calibration)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
