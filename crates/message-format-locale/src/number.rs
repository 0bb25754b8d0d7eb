//! Numeric values and locale-aware decimal rendering.
//!
//! `DecimalFormatter` instances are cached per thread per locale, the same way
//! plural rules are, so repeated renders under one locale reuse the loaded data.

use std::cell::RefCell;
use std::fmt::{Display, Formatter, Result as FmtResult};

use icu_decimal::DecimalFormatter;
use icu_decimal::input::Decimal;
use icu_locale_core::Locale;
use tracing::debug;

use crate::error::LocaleDataError;

thread_local! {
    /// Per-thread cache of decimal formatters keyed by canonical locale tag.
    static DECIMAL_FORMATTER_CACHE: RefCell<Vec<(String, DecimalFormatter)>> = const { RefCell::new(Vec::new()) };
}

/// A numeric argument value.
///
/// Integers stay exact; floats are converted to decimals through their
/// shortest round-trip representation before formatting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Numeric {
    Integer(i64),
    Float(f64),
}

impl Numeric {
    /// Subtracts a plural offset.
    pub fn minus(self, offset: i64) -> Numeric {
        if offset == 0 {
            return self;
        }
        match self {
            Numeric::Integer(n) => Numeric::Integer(n.saturating_sub(offset)),
            Numeric::Float(f) => Numeric::Float(f - offset as f64),
        }
    }

    pub fn as_f64(self) -> f64 {
        match self {
            Numeric::Integer(n) => n as f64,
            Numeric::Float(f) => f,
        }
    }

    /// Returns the value as an integer if it has no fractional part.
    pub fn as_integer(self) -> Option<i64> {
        match self {
            Numeric::Integer(n) => Some(n),
            Numeric::Float(f)
                if f.is_finite()
                    && f.fract() == 0.0
                    && f >= i64::MIN as f64
                    && f < i64::MAX as f64 =>
            {
                Some(f as i64)
            }
            Numeric::Float(_) => None,
        }
    }

    /// Rounds to the nearest integer, half away from zero.
    pub fn round(self) -> Result<i64, LocaleDataError> {
        match self {
            Numeric::Integer(n) => Ok(n),
            Numeric::Float(f) => Numeric::Float(f.round())
                .as_integer()
                .ok_or_else(|| LocaleDataError::InvalidNumber {
                    value: f.to_string(),
                }),
        }
    }

    /// Converts to an ICU decimal.
    pub fn to_decimal(self) -> Result<Decimal, LocaleDataError> {
        match self {
            Numeric::Integer(n) => Ok(Decimal::from(n)),
            Numeric::Float(f) => parse_decimal(&f.to_string()),
        }
    }
}

impl Display for Numeric {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Numeric::Integer(n) => write!(f, "{n}"),
            Numeric::Float(n) => write!(f, "{n}"),
        }
    }
}

impl From<i64> for Numeric {
    fn from(n: i64) -> Self {
        Numeric::Integer(n)
    }
}

impl From<f64> for Numeric {
    fn from(f: f64) -> Self {
        Numeric::Float(f)
    }
}

fn parse_decimal(text: &str) -> Result<Decimal, LocaleDataError> {
    text.parse::<Decimal>()
        .map_err(|_| LocaleDataError::InvalidNumber {
            value: text.to_string(),
        })
}

/// Formats a decimal with the locale's grouping and decimal separators.
pub(crate) fn format_decimal(locale: &Locale, decimal: &Decimal) -> Result<String, LocaleDataError> {
    let tag = locale.to_string();
    DECIMAL_FORMATTER_CACHE.with_borrow_mut(|cache| {
        if let Some((_, formatter)) = cache.iter().find(|(key, _)| *key == tag) {
            return Ok(formatter.format(decimal).to_string());
        }
        debug!(locale = %tag, "loading decimal formatter");
        let formatter = DecimalFormatter::try_new(locale.clone().into(), Default::default())
            .map_err(|e| LocaleDataError::Unavailable {
                locale: tag.clone(),
                what: "decimal",
                message: e.to_string(),
            })?;
        let text = formatter.format(decimal).to_string();
        cache.push((tag, formatter));
        Ok(text)
    })
}

/// Formats a value with exactly `fraction_digits` digits after the separator.
pub(crate) fn format_fixed(
    locale: &Locale,
    value: Numeric,
    fraction_digits: usize,
) -> Result<String, LocaleDataError> {
    let value = value.as_f64();
    if !value.is_finite() {
        return Err(LocaleDataError::InvalidNumber {
            value: value.to_string(),
        });
    }
    let decimal = parse_decimal(&format!("{value:.fraction_digits$}"))?;
    format_decimal(locale, &decimal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minus_applies_offset() {
        assert_eq!(Numeric::Integer(5).minus(1), Numeric::Integer(4));
        assert_eq!(Numeric::Float(2.5).minus(1), Numeric::Float(1.5));
        assert_eq!(Numeric::Integer(i64::MIN).minus(1), Numeric::Integer(i64::MIN));
    }

    #[test]
    fn integral_floats_become_integers() {
        assert_eq!(Numeric::Float(3.0).as_integer(), Some(3));
        assert_eq!(Numeric::Float(3.5).as_integer(), None);
        assert_eq!(Numeric::Float(f64::NAN).as_integer(), None);
    }

    #[test]
    fn round_is_half_away_from_zero() {
        assert_eq!(Numeric::Float(2.5).round(), Ok(3));
        assert_eq!(Numeric::Float(-2.5).round(), Ok(-3));
        assert!(Numeric::Float(f64::INFINITY).round().is_err());
    }
}
