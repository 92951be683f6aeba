//! DPI to sensitivity conversion
//!
//! `result = sensitivity + 15 * log2(old_dpi / new_dpi)`, rounded to 2 decimals.

use super::{Field, InputError, parse_dpi, parse_sensitivity, round2};
use tracing::info;

/// Sensitivity units added per doubling of the DPI ratio
pub const LOG2_SCALE: f64 = 15.0;

pub fn convert(sensitivity: f64, old_dpi: u32, new_dpi: u32) -> Result<f64, InputError> {
    if !sensitivity.is_finite() {
        return Err(InputError::invalid(Field::Sensitivity, sensitivity.to_string()));
    }
    if old_dpi == 0 {
        return Err(InputError::invalid(Field::OldDpi, "0"));
    }
    if new_dpi == 0 {
        return Err(InputError::invalid(Field::NewDpi, "0"));
    }

    let ratio = f64::from(old_dpi) / f64::from(new_dpi);
    Ok(round2(sensitivity + LOG2_SCALE * ratio.log2()))
}

/// Parse the three text fields of the DPI panel and convert
pub fn convert_input(sensitivity: &str, old_dpi: &str, new_dpi: &str) -> Result<f64, InputError> {
    let sensitivity = parse_sensitivity(sensitivity)?;
    let old_dpi = parse_dpi(Field::OldDpi, old_dpi)?;
    let new_dpi = parse_dpi(Field::NewDpi, new_dpi)?;

    let result = convert(sensitivity, old_dpi, new_dpi)?;
    info!(
        "Converted sensitivity {} from {} DPI to {} DPI: {}",
        sensitivity, old_dpi, new_dpi, result
    );
    Ok(result)
}
