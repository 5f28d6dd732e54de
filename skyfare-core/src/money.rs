use crate::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};

/// A monetary amount in integer minor units (cents), with its currency code.
/// Supplier payloads quote decimal strings; those are parsed once at the
/// boundary and everything downstream stays integral.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Money {
    pub amount_minor: i64,
    pub currency: String,
}

impl Money {
    pub fn new(amount_minor: i64, currency: &str) -> Self {
        Self {
            amount_minor,
            currency: currency.to_string(),
        }
    }

    /// Parse a supplier decimal string such as "500.00" into minor units.
    /// Accepts zero, one, or two fractional digits.
    pub fn parse(decimal: &str, currency: &str) -> CoreResult<Self> {
        Ok(Self {
            amount_minor: parse_decimal_minor(decimal)?,
            currency: currency.to_string(),
        })
    }

    /// Render back as a two-decimal string for display
    pub fn format(&self) -> String {
        format_minor(self.amount_minor)
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.format(), self.currency)
    }
}

/// Parse a decimal amount string into integer minor units
pub fn parse_decimal_minor(decimal: &str) -> CoreResult<i64> {
    let trimmed = decimal.trim();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };

    let (whole, frac) = match digits.split_once('.') {
        Some((w, f)) => (w, f),
        None => (digits, ""),
    };

    if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CoreError::PayloadError(format!(
            "invalid amount '{decimal}'"
        )));
    }
    if frac.len() > 2 || !frac.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CoreError::PayloadError(format!(
            "invalid amount '{decimal}'"
        )));
    }

    let whole_minor: i64 = whole
        .parse::<i64>()
        .map_err(|_| CoreError::PayloadError(format!("amount out of range '{decimal}'")))?
        .checked_mul(100)
        .ok_or_else(|| CoreError::PayloadError(format!("amount out of range '{decimal}'")))?;

    let frac_minor = match frac.len() {
        0 => 0,
        1 => frac.parse::<i64>().unwrap_or(0) * 10,
        _ => frac.parse::<i64>().unwrap_or(0),
    };

    let total = whole_minor + frac_minor;
    Ok(if negative { -total } else { total })
}

/// Format minor units as a two-decimal string
pub fn format_minor(amount_minor: i64) -> String {
    let sign = if amount_minor < 0 { "-" } else { "" };
    let abs = amount_minor.abs();
    format!("{}{}.{:02}", sign, abs / 100, abs % 100)
}
