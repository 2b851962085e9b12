use crate::error::{FundError, Result};

/// Parses a user-entered amount (campaign goal or donation).
///
/// The value must be a finite number strictly greater than zero.
pub fn parse_amount(raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    let value: f64 = trimmed
        .parse()
        .map_err(|_| FundError::InvalidAmount(raw.to_string()))?;

    if !value.is_finite() || value <= 0.0 {
        return Err(FundError::InvalidAmount(raw.to_string()));
    }
    Ok(value)
}
