use crate::error::{DatasetError, Result};

/// Capture-rig camera ordering by viewing-path continuity. Position is the
/// logical camera index, value is the physical capture index on disk.
pub const CAMERA_ORDER_V1: [usize; 50] = [
    48, 47, 46, 45, 44, 43, 42, 41, 40, 31, 32, 33, 34, 35, 36, 37, 38, 39, 30, 29, 28, 27, 26,
    25, 24, 23, 22, 14, 15, 16, 17, 18, 19, 20, 21, 13, 12, 11, 10, 9, 8, 3, 4, 5, 6, 7, 2, 1, 0,
    49,
];

/// Revised ordering after the rig recalibration; differs from V1 only in the
/// traversal direction of the lowest arc near the tail.
pub const CAMERA_ORDER_V2: [usize; 50] = [
    48, 47, 46, 45, 44, 43, 42, 41, 40, 31, 32, 33, 34, 35, 36, 37, 38, 39, 30, 29, 28, 27, 26,
    25, 24, 23, 22, 14, 15, 16, 17, 18, 19, 20, 21, 13, 12, 11, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1, 0,
    49,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraOrderVariant {
    V1,
    V2,
    Identity,
}

/// Fixed permutation translating logical camera positions to physical
/// capture indices. Pure lookup table, no I/O.
#[derive(Debug, Clone)]
pub struct CameraIndexMap {
    table: Vec<usize>,
}

impl CameraIndexMap {
    pub fn from_variant(variant: CameraOrderVariant, num_cameras: usize) -> Result<CameraIndexMap> {
        match variant {
            CameraOrderVariant::V1 => Self::from_fixed_table(&CAMERA_ORDER_V1, num_cameras),
            CameraOrderVariant::V2 => Self::from_fixed_table(&CAMERA_ORDER_V2, num_cameras),
            CameraOrderVariant::Identity => Ok(Self::identity(num_cameras)),
        }
    }

    pub fn identity(num_cameras: usize) -> CameraIndexMap {
        CameraIndexMap {
            table: (0..num_cameras).collect::<Vec<usize>>(),
        }
    }

    fn from_fixed_table(fixed: &[usize], num_cameras: usize) -> Result<CameraIndexMap> {
        if fixed.len() != num_cameras {
            return Err(DatasetError::CameraOrderSizeMismatch {
                table: fixed.len(),
                cameras: num_cameras,
            });
        }
        Self::from_table(fixed.to_vec())
    }

    /// Builds a map from an arbitrary table, rejecting anything that is not
    /// a bijection over 0..len.
    pub fn from_table(table: Vec<usize>) -> Result<CameraIndexMap> {
        let mut seen = vec![false; table.len()];
        for &physical in &table {
            if physical >= table.len() {
                return Err(DatasetError::InvalidCameraOrder(format!(
                    "entry {} out of range for {} cameras",
                    physical,
                    table.len()
                )));
            }
            if seen[physical] {
                return Err(DatasetError::InvalidCameraOrder(format!(
                    "entry {} appears more than once",
                    physical
                )));
            }
            seen[physical] = true;
        }
        Ok(CameraIndexMap { table })
    }

    pub fn physical(&self, logical: usize) -> Result<usize> {
        self.table
            .get(logical)
            .copied()
            .ok_or(DatasetError::CameraOutOfRange {
                index: logical,
                len: self.table.len(),
            })
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn table(&self) -> &[usize] {
        &self.table
    }
}
