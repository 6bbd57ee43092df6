//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. On the wire (the persisted ledger blob and import/export payloads)
//! amounts are plain decimal euro numbers, matching the original payload
//! schema, so serialization converts between the two.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A monetary amount stored as cents (hundredths of a euro)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use finanzas_cli::models::Money;
    /// let amount = Money::from_cents(1050); // 10,50€
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole euros
    pub const fn from_euros(euros: i64) -> Self {
        Self(euros * 100)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the amount as a floating-point euro value (for rate math)
    pub fn as_euros(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Build a Money amount from a floating-point euro value, rounding to
    /// the nearest cent
    pub fn from_euros_f64(euros: f64) -> Self {
        Self((euros * 100.0).round() as i64)
    }

    /// Parse a money amount from a string
    ///
    /// Accepts "1234.56", "1234,56", "-10,50", "1234", the es-ES display
    /// form "1.234,56" and an optional trailing euro sign.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim().trim_end_matches('€').trim();
        let invalid = || MoneyParseError::InvalidFormat(s.to_string());

        let (negative, digits) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, s)
        };

        // With both separators present, '.' groups thousands and ',' marks
        // decimals, as in the display form
        let digits = if digits.contains('.') && digits.contains(',') {
            digits.replace('.', "")
        } else {
            digits.to_string()
        };
        let digits = digits.replace(',', ".");

        let cents = if let Some((euros_str, cents_str)) = digits.split_once('.') {
            if !cents_str.chars().all(|c| c.is_ascii_digit()) {
                return Err(invalid());
            }
            let euros: i64 = euros_str.parse().map_err(|_| invalid())?;

            // Pad or truncate the fractional part to 2 digits
            let cents: i64 = match cents_str.chars().count() {
                0 => 0,
                1 => cents_str.parse::<i64>().map_err(|_| invalid())? * 10,
                _ => {
                    let first_two: String = cents_str.chars().take(2).collect();
                    first_two.parse().map_err(|_| invalid())?
                }
            };

            euros * 100 + cents
        } else {
            digits.parse::<i64>().map_err(|_| invalid())? * 100
        };

        Ok(Self(if negative { -cents } else { cents }))
    }
}

impl fmt::Display for Money {
    /// es-ES formatting: thousands separated by '.', decimals by ','
    /// ("1.234,56€"), matching how the original app displayed amounts.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let euros = (self.0 / 100).abs();
        let cents = (self.0 % 100).abs();

        let digits = euros.to_string();
        let mut grouped = String::new();
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(c);
        }

        let sign = if self.is_negative() { "-" } else { "" };
        write!(f, "{}{},{:02}€", sign, grouped, cents)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// Wire format: decimal euro numbers, as the original blob stores them.

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0 % 100 == 0 {
            serializer.serialize_i64(self.0 / 100)
        } else {
            serializer.serialize_f64(self.as_euros())
        }
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let euros = f64::deserialize(deserializer)?;
        Ok(Self::from_euros_f64(euros))
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
