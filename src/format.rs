//! Monetary text handling in the pt-BR convention used by the card
//! statements (`R$ 1.234,56`).

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::decimal::Money;
use crate::errors::{LedgerError, Result};

/// Parse monetary text with or without a currency symbol.
///
/// Accepts comma-decimal input with dot thousand separators (`R$ 1.234,56`)
/// as well as plain dot-decimal (`1234.56`). Blank input parses as zero.
pub fn parse_brl(input: &str) -> Result<Money> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(Money::ZERO);
    }

    let cleaned: String = trimmed
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, ',' | '.' | '-'))
        .collect();

    if cleaned.is_empty() {
        return Ok(Money::ZERO);
    }

    // comma present means pt-BR digits: dots are grouping, comma is decimal
    let normalized = if cleaned.contains(',') {
        cleaned.replace('.', "").replace(',', ".")
    } else {
        cleaned
    };

    let value = Decimal::from_str(&normalized).map_err(|_| LedgerError::InvalidAmount {
        input: input.to_string(),
    })?;

    Ok(Money::from_decimal(value).round_dp(2))
}

/// Render a value as `R$ 1.234,56`.
pub fn format_brl(value: Money) -> String {
    let rounded = value.round_dp(2);
    let cents = (rounded.abs().as_decimal() * Decimal::from(100))
        .to_i64()
        .unwrap_or(0);

    let units = group_thousands(cents / 100);
    let sign = if rounded.is_negative() { "-" } else { "" };

    format!("{}R$ {},{:02}", sign, units, cents % 100)
}

fn group_thousands(units: i64) -> String {
    let digits = units.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    grouped
}
