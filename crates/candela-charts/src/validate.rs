//! Input validation.
//!
//! Structural problems (non-finite numbers, unsorted line data) are
//! programmer errors in the caller and fail fast with the offending index
//! and field. Stylistically questionable input (negative values, empty
//! arrays) degrades gracefully at render time, so it only produces
//! warnings the caller may surface or ignore.

use crate::data::{BarDatum, Category, DataPoint, RadialSegment, StackSegment};

/// Fatal input error: the chart cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataError {
    /// A numeric field held NaN or ±∞.
    NonFinite {
        /// Index of the offending item.
        index: usize,
        /// Dotted path of the offending field.
        field: &'static str,
    },
    /// Line/area X values must be monotonically non-decreasing.
    UnsortedX {
        /// Index of the first out-of-order point.
        index: usize,
    },
}

impl std::fmt::Display for DataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonFinite { index, field } => {
                write!(f, "data[{index}].{field} must be a finite number")
            }
            Self::UnsortedX { index } => write!(
                f,
                "data[{index}].x is out of order; points must be sorted by x"
            ),
        }
    }
}

impl std::error::Error for DataError {}

/// Non-fatal input oddity: rendering proceeds with degraded output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationWarning {
    /// A value was negative; bar/segment geometry is undefined below
    /// zero and renders degenerately.
    NegativeValue {
        /// Index of the offending item.
        index: usize,
        /// Dotted path of the offending field.
        field: &'static str,
    },
    /// The data array was empty; the chart renders nothing.
    EmptyData,
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeValue { index, field } => {
                write!(f, "data[{index}].{field} is negative; this may render oddly")
            }
            Self::EmptyData => write!(f, "data array is empty"),
        }
    }
}

fn check_value(
    value: f64,
    index: usize,
    field: &'static str,
    warnings: &mut Vec<ValidationWarning>,
) -> Result<(), DataError> {
    if !value.is_finite() {
        return Err(DataError::NonFinite { index, field });
    }
    if value < 0.0 {
        warnings.push(ValidationWarning::NegativeValue { index, field });
    }
    Ok(())
}

/// Validate flat bar data.
pub fn validate_bars(data: &[BarDatum]) -> Result<Vec<ValidationWarning>, DataError> {
    let mut warnings = Vec::new();
    if data.is_empty() {
        warnings.push(ValidationWarning::EmptyData);
    }
    for (index, bar) in data.iter().enumerate() {
        check_value(bar.value, index, "value", &mut warnings)?;
    }
    Ok(warnings)
}

fn validate_stack(
    index: usize,
    stack: &[StackSegment],
    warnings: &mut Vec<ValidationWarning>,
) -> Result<(), DataError> {
    if stack.is_empty() {
        warnings.push(ValidationWarning::EmptyData);
    }
    for segment in stack {
        check_value(segment.value, index, "stack.value", warnings)?;
    }
    Ok(())
}

/// Validate grouped/stacked category data.
pub fn validate_categories(data: &[Category]) -> Result<Vec<ValidationWarning>, DataError> {
    let mut warnings = Vec::new();
    if data.is_empty() {
        warnings.push(ValidationWarning::EmptyData);
    }
    for (index, category) in data.iter().enumerate() {
        match category {
            Category::Grouped { bars, .. } => {
                if bars.is_empty() {
                    warnings.push(ValidationWarning::EmptyData);
                }
                for bar in bars {
                    check_value(bar.value, index, "bars.value", &mut warnings)?;
                }
            }
            Category::Stacked { stack, .. } => validate_stack(index, stack, &mut warnings)?,
        }
    }
    Ok(warnings)
}

/// Validate radial segment data.
pub fn validate_radial(segments: &[RadialSegment]) -> Result<Vec<ValidationWarning>, DataError> {
    let mut warnings = Vec::new();
    if segments.is_empty() {
        warnings.push(ValidationWarning::EmptyData);
    }
    for (index, segment) in segments.iter().enumerate() {
        check_value(segment.value, index, "value", &mut warnings)?;
    }
    Ok(warnings)
}

/// Validate line/area point data.
///
/// Rejects non-finite coordinates and X values that go backwards; the
/// nearest-point binary search silently mis-resolves on unsorted input,
/// so unsorted data is an error rather than a wrong answer.
pub fn validate_points(data: &[DataPoint]) -> Result<Vec<ValidationWarning>, DataError> {
    let mut warnings = Vec::new();
    if data.is_empty() {
        warnings.push(ValidationWarning::EmptyData);
    }
    for (index, point) in data.iter().enumerate() {
        if !point.x.is_finite() {
            return Err(DataError::NonFinite { index, field: "x" });
        }
        if !point.y.is_finite() {
            return Err(DataError::NonFinite { index, field: "y" });
        }
        if index > 0 && point.x < data[index - 1].x {
            return Err(DataError::UnsortedX { index });
        }
    }
    Ok(warnings)
}
