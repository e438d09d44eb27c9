//! Type-safe price representation using decimal arithmetic.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Non-breaking space, used as the thousands separator and before the symbol
/// so a price never wraps across lines.
const NBSP: char = '\u{a0}';

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., rubles, not kopecks).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Whole-ruble price.
    #[must_use]
    pub fn rubles(amount: i64) -> Self {
        Self::new(Decimal::from(amount), CurrencyCode::RUB)
    }
}

/// ISO 4217 currency codes. The store sells in rubles only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    RUB,
}

impl CurrencyCode {
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::RUB => "₽",
        }
    }

    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::RUB => "RUB",
        }
    }
}

/// Insert `sep` between every group of three digits, counting from the right.
fn group_thousands(digits: &str, sep: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(c);
    }
    out
}

/// Formats for display in the Russian style: `8 499 ₽`, `12,50 ₽`. Whole
/// amounts omit the fraction.
impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self.amount.round_dp(2);
        let fixed = format!("{:.2}", rounded.abs());
        let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

        let mut number = group_thousands(whole, NBSP);
        if fraction != "00" {
            number.push(',');
            number.push_str(fraction);
        }

        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        write!(f, "{sign}{number}{NBSP}{}", self.currency_code.symbol())
    }
}
