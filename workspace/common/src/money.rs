//! Currency display helpers.

use rust_decimal::Decimal;
use rusty_money::{iso, Money};
use tracing::warn;

/// Currency used when none is configured.
pub const DEFAULT_CURRENCY: &str = "USD";

/// Formats an amount for display, e.g. `$1,234.56` for USD.
///
/// Unknown ISO codes fall back to `<amount> <code>` with two decimals.
pub fn format_amount(amount: Decimal, currency_code: &str) -> String {
    match iso::find(currency_code) {
        Some(currency) => Money::from_decimal(amount, currency).to_string(),
        None => {
            warn!("Unknown currency code '{}', using plain formatting", currency_code);
            format!("{} {}", amount.round_dp(2), currency_code)
        }
    }
}
