extern crate image as image_rs;

use image_rs::RgbImage;

use crate::error::{DatasetError, Result};
use crate::Float;

pub const EXPR_MARKER: char = '$';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Diff,
}

/// A derived-item expression, written `$op|arg1,arg2,...`.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub op: Op,
    pub operands: Vec<String>,
}

pub fn is_expr(key: &str) -> bool {
    key.starts_with(EXPR_MARKER)
}

pub fn parse(key: &str) -> Result<Expr> {
    let body = match key.strip_prefix(EXPR_MARKER) {
        Some(body) => body,
        None => return Err(DatasetError::MalformedExpression(key.to_string())),
    };
    let (op_name, args) = body
        .split_once('|')
        .ok_or_else(|| DatasetError::MalformedExpression(key.to_string()))?;

    // Unknown operators fail loudly instead of silently dropping the key.
    let op = match op_name {
        "diff" => Op::Diff,
        other => return Err(DatasetError::UnknownOperator(other.to_string())),
    };

    let operands = args
        .split(',')
        .map(|arg| arg.trim().to_string())
        .filter(|arg| !arg.is_empty())
        .collect::<Vec<String>>();

    match op {
        Op::Diff => {
            if operands.len() != 2 {
                return Err(DatasetError::MalformedExpression(key.to_string()));
            }
        }
    }

    Ok(Expr { op, operands })
}

pub fn eval(expr: &Expr, operands: &[RgbImage]) -> Result<RgbImage> {
    match expr.op {
        Op::Diff => abs_diff(&operands[0], &operands[1]),
    }
}

/// Absolute per-channel difference, computed in floating point and truncated
/// back to 8 bit.
pub fn abs_diff(a: &RgbImage, b: &RgbImage) -> Result<RgbImage> {
    if a.dimensions() != b.dimensions() {
        return Err(DatasetError::ShapeMismatch(format!(
            "diff operands {:?} vs {:?}",
            a.dimensions(),
            b.dimensions()
        )));
    }
    let buffer = a
        .as_raw()
        .iter()
        .zip(b.as_raw().iter())
        .map(|(&x, &y)| ((x as Float) - (y as Float)).abs() as u8)
        .collect::<Vec<u8>>();
    let (width, height) = a.dimensions();
    RgbImage::from_raw(width, height, buffer).ok_or_else(|| {
        DatasetError::ShapeMismatch("diff output buffer has wrong length".to_string())
    })
}
