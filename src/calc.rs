//! Arithmetic core shared by both panels
//!
//! Everything in here is pure and synchronous: the UI hands over the raw text
//! of its input fields and gets back either a number or an [`InputError`].

pub mod dpi;
pub mod psa;

use thiserror::Error;

/// Which input field a value was read from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Sensitivity,
    OldDpi,
    NewDpi,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Field::Sensitivity => "sensitivity",
            Field::OldDpi => "old DPI",
            Field::NewDpi => "new DPI",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("Invalid {field}: {value:?}")]
    InvalidInput { field: Field, value: String },
}

impl InputError {
    pub fn invalid(field: Field, value: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            value: value.into(),
        }
    }

    pub fn field(&self) -> Field {
        match self {
            Self::InvalidInput { field, .. } => *field,
        }
    }
}

/// Round to 2 decimal places, ties to even on the exact binary value
pub fn round2(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}

/// Parse a finite real number, ignoring surrounding whitespace
pub fn parse_sensitivity(text: &str) -> Result<f64, InputError> {
    let trimmed = text.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(InputError::invalid(Field::Sensitivity, trimmed)),
    }
}

/// Parse a strictly positive integer DPI value
pub fn parse_dpi(field: Field, text: &str) -> Result<u32, InputError> {
    let trimmed = text.trim();
    match trimmed.parse::<i64>() {
        Ok(value) if value > 0 => {
            u32::try_from(value).map_err(|_| InputError::invalid(field, trimmed))
        }
        _ => Err(InputError::invalid(field, trimmed)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(37.5), 37.5);
        assert_eq!(round2(1.234), 1.23);
        assert_eq!(round2(1.236), 1.24);
        assert_eq!(round2(-14.0), -14.0);
    }

    #[test]
    fn test_round2_ties_to_even() {
        assert_eq!(round2(28.125), 28.12);
        assert_eq!(round2(0.375), 0.38);
        // 2.675 is stored just below the tie
        assert_eq!(round2(2.675), 2.67);
    }

    #[test]
    fn test_parse_sensitivity() {
        assert_eq!(parse_sensitivity("50"), Ok(50.0));
        assert_eq!(parse_sensitivity("  1.25 "), Ok(1.25));
        assert_eq!(parse_sensitivity("-3.5"), Ok(-3.5));

        for bad in ["", "abc", "1,25", "inf", "NaN"] {
            let err = parse_sensitivity(bad).unwrap_err();
            assert_eq!(err.field(), Field::Sensitivity, "input {:?}", bad);
        }
    }

    #[test]
    fn test_parse_dpi() {
        assert_eq!(parse_dpi(Field::OldDpi, "800"), Ok(800));
        assert_eq!(parse_dpi(Field::NewDpi, " 1600\n"), Ok(1600));

        for bad in ["0", "-800", "800.0", "high", "99999999999"] {
            let err = parse_dpi(Field::NewDpi, bad).unwrap_err();
            assert_eq!(err, InputError::invalid(Field::NewDpi, bad));
        }
    }

    #[test]
    fn test_error_message_names_field() {
        let err = InputError::invalid(Field::OldDpi, "abc");
        assert_eq!(err.to_string(), "Invalid old DPI: \"abc\"");
    }
}
