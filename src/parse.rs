//! Host-side parsing of raw field text into engine inputs.
//!
//! An empty field means "unset" — the engine's defined not-enough-input
//! state — so emptiness is never an error here. Garbage text and values
//! outside the field's domain are errors, since the host can reject them
//! before they reach the engine.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("`{0}` is not a number")]
    NotANumber(String),
    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f64 },
    #[error("commission must be below 100% (got {0}%)")]
    CommissionTooHigh(f64),
}

fn parse_field(raw: &str, field: &'static str) -> Result<Option<f64>, ParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|_| ParseError::NotANumber(trimmed.to_string()))?;
    if value < 0.0 {
        return Err(ParseError::Negative { field, value });
    }
    Ok(Some(value))
}

/// Parse a stake field. Empty input is unset, not an error.
pub fn parse_money(raw: &str) -> Result<Option<f64>, ParseError> {
    parse_field(raw, "stake")
}

/// Parse a decimal-odds field. Empty input is unset.
///
/// Values at or below 1.0 are accepted: the engine's contract is to let a
/// degenerate price produce degenerate numbers rather than refuse it.
pub fn parse_odds(raw: &str) -> Result<Option<f64>, ParseError> {
    parse_field(raw, "odds")
}

/// Parse a commission field entered as a percentage (`"6"` or `"6%"`) into
/// a rate in `[0, 1)`. Empty input means no commission.
pub fn parse_commission_percent(raw: &str) -> Result<f64, ParseError> {
    let trimmed = raw.trim().trim_end_matches('%');
    let percent = parse_field(trimmed, "commission")?.unwrap_or(0.0);
    if percent >= 100.0 {
        return Err(ParseError::CommissionTooHigh(percent));
    }
    Ok(percent / 100.0)
}
