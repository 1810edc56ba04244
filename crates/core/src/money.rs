//! Monetary amounts.

use core::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// Non-negative decimal amount in a single (implicit) currency.
///
/// Arithmetic is exact; rounding only happens when the amount is rendered.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Money(Decimal);

impl ValueObject for Money {}

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// Build an amount, rejecting negative values.
    pub fn new(amount: Decimal) -> DomainResult<Self> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(DomainError::validation(format!(
                "amount cannot be negative (got {amount})"
            )));
        }
        Ok(Self(amount))
    }

    /// Parse a plain decimal literal such as `"1.20"`.
    pub fn parse(input: &str) -> DomainResult<Self> {
        let amount = Decimal::from_str(input.trim())
            .map_err(|e| DomainError::validation(format!("invalid amount '{input}': {e}")))?;
        Self::new(amount)
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Unit price times quantity, rejecting products outside the decimal range.
    pub fn checked_times(&self, quantity: u32) -> DomainResult<Money> {
        self.0
            .checked_mul(Decimal::from(quantity))
            .map(Money)
            .ok_or_else(|| {
                DomainError::validation(format!("{} × {quantity} overflows", self.0))
            })
    }

    /// Unit price times quantity.
    ///
    /// Panics on overflow; callers holding an unchecked pair go through
    /// [`Money::checked_times`] first.
    pub fn times(&self, quantity: u32) -> Money {
        Money(self.0 * Decimal::from(quantity))
    }

    pub fn checked_add(&self, other: Money) -> DomainResult<Money> {
        self.0
            .checked_add(other.0)
            .map(Money)
            .ok_or_else(|| DomainError::validation(format!("{} + {} overflows", self.0, other.0)))
    }
}

impl TryFrom<Decimal> for Money {
    type Error = DomainError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Money::new(value)
    }
}

impl From<Money> for Decimal {
    fn from(value: Money) -> Self {
        value.0
    }
}

/// Renders as `$1,234.56`: thousands separators, exactly two decimals,
/// ties rounded to even.
impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut rounded = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
        rounded.rescale(2);
        let plain = rounded.to_string();
        let (whole, frac) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));
        write!(f, "${}.{frac}", group_thousands(whole))
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
