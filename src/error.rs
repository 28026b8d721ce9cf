extern crate image as image_rs;

use std::path::PathBuf;

use thiserror::Error;

/// Every failure is fatal for the call that produced it; there are no retries.
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("image error: {0}")]
    Image(#[from] image_rs::ImageError),
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("scene '{0}' not found")]
    SceneNotFound(String),
    #[error("scene index {index} out of range ({len} scenes)")]
    SceneOutOfRange { index: usize, len: usize },
    #[error("light index {index} out of range ({len} lightsets)")]
    LightOutOfRange { index: usize, len: usize },
    #[error("light index {0} is a numbering gap with no data")]
    LightsetGap(usize),
    #[error("camera index {index} out of range ({len} cameras)")]
    CameraOutOfRange { index: usize, len: usize },
    #[error("camera order table has {table} entries but the dataset has {cameras} cameras")]
    CameraOrderSizeMismatch { table: usize, cameras: usize },
    #[error("camera order table is not a permutation: {0}")]
    InvalidCameraOrder(String),
    #[error("sample sequence is empty")]
    EmptySequence,
    #[error("missing item '{0}' in sample")]
    MissingItem(String),
    #[error("item '{key}' has unexpected type, expected {expected}")]
    ItemType { key: String, expected: &'static str },
    #[error("could not parse item at {path}: {reason}")]
    ItemParse { path: PathBuf, reason: String },
    #[error("lightset directory '{0}' has no trailing integer suffix")]
    MalformedLightset(String),
    #[error("duplicate light index {0}")]
    DuplicateLightIndex(usize),
    #[error("invalid calibration at {path}: {reason}")]
    InvalidCalibration { path: PathBuf, reason: String },
    #[error("object '{0}' not found")]
    ObjectNotFound(String),
    #[error("split '{0}' not found")]
    SplitNotFound(String),
    #[error("index {0} not found in split")]
    IndexNotFound(usize),
    #[error("missing item '{tag}' for index {index}")]
    MissingTag { index: usize, tag: String },
    #[error("unknown derived-expression operator '{0}'")]
    UnknownOperator(String),
    #[error("malformed derived-expression '{0}'")]
    MalformedExpression(String),
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),
}

pub type Result<T> = std::result::Result<T, DatasetError>;
