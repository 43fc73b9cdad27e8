use crate::error::UscsError;
use rust_decimal::Decimal;
use std::str::FromStr;

/// A plasticity index as entered on a lab sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlasticityEntryValue {
    /// Reported as "NP".
    NonPlastic,
    Measured(Decimal),
}

impl PlasticityEntryValue {
    /// The numeric PI; non-plastic is 0.
    pub fn numeric(&self) -> Decimal {
        match self {
            PlasticityEntryValue::NonPlastic => Decimal::ZERO,
            PlasticityEntryValue::Measured(v) => *v,
        }
    }
}

/// Parse a plasticity index entry.
///
/// Handles formats like:
/// - "12" -> Measured(12)
/// - "12.5" or "12,5" -> Measured(12.5)
/// - "NP", "np", " N.P. " -> NonPlastic
///
/// Negative values are rejected.
pub fn parse_plasticity_index(s: &str) -> Result<PlasticityEntryValue, UscsError> {
    let s = s.trim();
    let compact: String = s
        .chars()
        .filter(|c| *c != '.' && !c.is_whitespace())
        .collect();
    if compact.eq_ignore_ascii_case("np") {
        return Ok(PlasticityEntryValue::NonPlastic);
    }

    let value = parse_decimal(s)?;
    if value < Decimal::ZERO {
        return Err(UscsError::ParseError(format!(
            "plasticity index cannot be negative: '{}'",
            s
        )));
    }
    Ok(PlasticityEntryValue::Measured(value))
}

/// Parse a decimal value, accepting a decimal comma.
pub fn parse_decimal(s: &str) -> Result<Decimal, UscsError> {
    let s = s.trim();
    let normalized = s.replace(',', ".");
    Decimal::from_str(&normalized)
        .map_err(|e| UscsError::ParseError(format!("invalid number '{}': {}", s, e)))
}
