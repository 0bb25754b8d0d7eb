//! The locale service contract and its ICU4X-backed implementation.

use chrono::{DateTime, FixedOffset};
use icu_locale_core::Locale;

use crate::datetime;
use crate::error::LocaleDataError;
use crate::number::{Numeric, format_decimal, format_fixed};
use crate::pattern;
use crate::plural::{PluralCategory, plural_category};
use crate::spellout::{english_ordinal_suffix, spell_out_english};
use crate::style::{DateTimeKind, DateTimeStyle, NumberStyle, PluralKind};

/// Locale-dependent classification and rendering, bound to one locale.
///
/// Implementations must be shareable across threads: a compiled message holds
/// its service and may be formatted concurrently.
pub trait LocaleService: Send + Sync {
    /// The canonical tag of the locale this service is bound to.
    fn locale(&self) -> &str;

    /// CLDR plural category of `value` under cardinal or ordinal rules.
    fn plural_category(
        &self,
        value: Numeric,
        kind: PluralKind,
    ) -> Result<PluralCategory, LocaleDataError>;

    /// Render a number in the given style.
    fn render_number(&self, value: Numeric, style: NumberStyle)
    -> Result<String, LocaleDataError>;

    /// Render the date or time part of `value` in the given style.
    fn render_date_time(
        &self,
        value: &DateTime<FixedOffset>,
        kind: DateTimeKind,
        style: &DateTimeStyle,
    ) -> Result<String, LocaleDataError>;
}

/// Currency symbols for common ISO 4217 codes, with their minor-unit digits.
/// Codes not listed render with the code itself as the symbol.
const CURRENCIES: &[(&str, &str, usize)] = &[
    ("USD", "$", 2),
    ("EUR", "€", 2),
    ("GBP", "£", 2),
    ("JPY", "¥", 0),
    ("CNY", "CN¥", 2),
    ("INR", "₹", 2),
    ("KRW", "₩", 0),
    ("CAD", "CA$", 2),
    ("AUD", "A$", 2),
];

/// Default [`LocaleService`] using ICU4X compiled data.
///
/// ICU objects are cached per thread (see the plural and number modules), so
/// the service itself only holds the parsed locale and stays `Send + Sync`.
///
/// # Example
///
/// ```
/// use message_format_locale::{IcuLocaleService, LocaleService, Numeric, NumberStyle};
///
/// let service = IcuLocaleService::try_new("en-US").unwrap();
/// let text = service.render_number(Numeric::Integer(1234), NumberStyle::Default).unwrap();
/// assert_eq!(text, "1,234");
/// ```
#[derive(Debug, Clone)]
pub struct IcuLocaleService {
    locale: Locale,
    /// Canonical tag, cached for `LocaleService::locale`.
    tag: String,
    /// Language subtag, used to pick language-specific rules.
    language: String,
    /// ISO 4217 code used by the `currency` style.
    currency: String,
}

impl IcuLocaleService {
    /// Create a service for a BCP-47 locale tag (e.g. "en-US", "ar").
    pub fn try_new(tag: &str) -> Result<Self, LocaleDataError> {
        let locale = tag.parse::<Locale>().map_err(|_| LocaleDataError::InvalidLocale {
            tag: tag.to_string(),
        })?;
        let canonical = locale.to_string();
        let language = canonical
            .split('-')
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        Ok(Self {
            locale,
            tag: canonical,
            language,
            currency: "USD".to_string(),
        })
    }

    /// Use a different currency for the `currency` style.
    pub fn with_currency(mut self, code: impl Into<String>) -> Self {
        self.currency = code.into().to_ascii_uppercase();
        self
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    fn unsupported(&self, style: NumberStyle) -> LocaleDataError {
        LocaleDataError::UnsupportedStyle {
            locale: self.tag.clone(),
            style: style.to_string(),
        }
    }

    fn render_currency(&self, value: Numeric) -> Result<String, LocaleDataError> {
        let (symbol, digits) = CURRENCIES
            .iter()
            .find(|(code, _, _)| *code == self.currency)
            .map_or((self.currency.as_str(), 2), |(_, symbol, digits)| (*symbol, *digits));
        let amount = format_fixed(&self.locale, Numeric::Float(value.as_f64().abs()), digits)?;
        let affixes = pattern::currency(&self.tag, &self.language);
        Ok(affixes.apply(value.as_f64() < 0.0, &amount, symbol))
    }

    fn render_percent(&self, value: Numeric) -> Result<String, LocaleDataError> {
        let percent = Numeric::Float(value.as_f64() * 100.0).round()?;
        let digits = format_decimal(&self.locale, &Numeric::Integer(percent.saturating_abs()).to_decimal()?)?;
        let affixes = pattern::percent(&self.tag, &self.language);
        Ok(affixes.apply(percent < 0, &digits, ""))
    }

    fn render_ordinal(&self, value: Numeric) -> Result<String, LocaleDataError> {
        if self.language != "en" {
            return Err(self.unsupported(NumberStyle::Ordinal));
        }
        let n = value.round()?;
        let category = plural_category(&self.locale, Numeric::Integer(n), PluralKind::Ordinal)?;
        let digits = format_decimal(&self.locale, &Numeric::Integer(n).to_decimal()?)?;
        Ok(format!("{digits}{}", english_ordinal_suffix(category)))
    }

    fn render_spellout(&self, value: Numeric) -> Result<String, LocaleDataError> {
        if self.language != "en" {
            return Err(self.unsupported(NumberStyle::Spellout));
        }
        spell_out_english(&value.to_string()).ok_or_else(|| LocaleDataError::InvalidNumber {
            value: value.to_string(),
        })
    }
}

/// Render whole seconds as `h:mm:ss`, or `m:ss` under an hour.
fn render_duration(value: Numeric) -> Result<String, LocaleDataError> {
    let total = value.round()?;
    let sign = if total < 0 { "-" } else { "" };
    let seconds = total.unsigned_abs();
    let hours = seconds.div_euclid(3600);
    let minutes = (seconds % 3600).div_euclid(60);
    let secs = seconds % 60;
    if hours > 0 {
        Ok(format!("{sign}{hours}:{minutes:02}:{secs:02}"))
    } else {
        Ok(format!("{sign}{minutes}:{secs:02}"))
    }
}

impl LocaleService for IcuLocaleService {
    fn locale(&self) -> &str {
        &self.tag
    }

    fn plural_category(
        &self,
        value: Numeric,
        kind: PluralKind,
    ) -> Result<PluralCategory, LocaleDataError> {
        plural_category(&self.locale, value, kind)
    }

    fn render_number(
        &self,
        value: Numeric,
        style: NumberStyle,
    ) -> Result<String, LocaleDataError> {
        match style {
            NumberStyle::Default => format_decimal(&self.locale, &value.to_decimal()?),
            NumberStyle::Integer => {
                format_decimal(&self.locale, &Numeric::Integer(value.round()?).to_decimal()?)
            }
            NumberStyle::Percent => self.render_percent(value),
            NumberStyle::Currency => self.render_currency(value),
            NumberStyle::Spellout => self.render_spellout(value),
            NumberStyle::Ordinal => self.render_ordinal(value),
            NumberStyle::Duration => render_duration(value),
        }
    }

    fn render_date_time(
        &self,
        value: &DateTime<FixedOffset>,
        kind: DateTimeKind,
        style: &DateTimeStyle,
    ) -> Result<String, LocaleDataError> {
        datetime::render(value, kind, style, &self.locale, &self.language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_uses_clock_layout() {
        assert_eq!(render_duration(Numeric::Integer(59)).unwrap(), "0:59");
        assert_eq!(render_duration(Numeric::Integer(61)).unwrap(), "1:01");
        assert_eq!(render_duration(Numeric::Integer(3661)).unwrap(), "1:01:01");
        assert_eq!(render_duration(Numeric::Integer(-90)).unwrap(), "-1:30");
    }

    #[test]
    fn language_is_taken_from_canonical_tag() {
        let service = IcuLocaleService::try_new("en-US").unwrap();
        assert_eq!(service.language, "en");
        assert_eq!(service.locale(), "en-US");
    }
}
