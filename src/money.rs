use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::TrackerError;

/**
 * All amounts are rust_decimal values end to end: balances never touch a
 * binary float, so repeated fee and interest application stays exact.
 */
pub fn parse_amount(input: &str) -> Result<Decimal, TrackerError> {
    let trimmed = input.trim();
    Decimal::from_str(trimmed).map_err(|_| TrackerError::InvalidAmount)
}

pub fn format_currency(amount: Decimal) -> String {
    format!("${:.2}", amount)
}
