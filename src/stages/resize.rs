extern crate image as image_rs;

use image_rs::imageops::{self, FilterType};

use crate::dataset::sample::{ItemValue, Sample};
use crate::error::Result;
use crate::stages::Stage;
use crate::Float;

/// Resizes the configured image items and co-rescales the calibration so
/// that the intrinsics keep describing the resized image. Distortion
/// coefficients are never touched.
pub struct ResizeStage {
    pub target_size: (u32, u32),
    pub image_keys: Vec<String>,
    pub camera_key: Option<String>,
}

impl ResizeStage {
    pub fn new(target_size: (u32, u32)) -> ResizeStage {
        ResizeStage {
            target_size,
            image_keys: vec!["image".to_string()],
            camera_key: Some("camera".to_string()),
        }
    }
}

impl Stage for ResizeStage {
    fn apply(&self, sample: &Sample) -> Result<Sample> {
        let (target_w, target_h) = self.target_size;
        let mut out = sample.clone();

        for key in &self.image_keys {
            let image = out.get(key)?.into_image(key)?;
            if image.dimensions() == (target_w, target_h) {
                continue;
            }
            // Cubic interpolation, matching the reference exporter output.
            let resized = imageops::resize(&image, target_w, target_h, FilterType::CatmullRom);
            out = out.set_value(key, ItemValue::Image(resized));
        }

        if let Some(camera_key) = &self.camera_key {
            if out.contains(camera_key) {
                let mut calibration = out.get(camera_key)?.into_calibration(camera_key)?;
                let (source_w, source_h) = calibration.intrinsics.image_size;
                if (source_w, source_h) != (target_w, target_h) {
                    let ratio_x = target_w as Float / source_w as Float;
                    let ratio_y = target_h as Float / source_h as Float;
                    let matrix = &mut calibration.intrinsics.camera_matrix;
                    matrix[0][0] *= ratio_x;
                    matrix[0][2] *= ratio_x;
                    matrix[1][1] *= ratio_y;
                    matrix[1][2] *= ratio_y;
                    calibration.intrinsics.image_size = (target_w, target_h);
                    out = out.set_value(camera_key, ItemValue::Calibration(calibration));
                }
            }
        }

        Ok(out)
    }
}
