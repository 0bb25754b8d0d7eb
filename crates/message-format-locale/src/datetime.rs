//! Date and time rendering.
//!
//! The four standard lengths come from CLDR through `icu_datetime`. Named
//! styles are `strftime` patterns rendered by chrono with localized month,
//! weekday and day-period names.

use std::fmt::{Debug, Write};

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Datelike, FixedOffset, Locale as ChronoLocale, Timelike};
use icu_datetime::fieldsets::{T, YMD, YMDE};
use icu_datetime::input::{Date, Time};
use icu_datetime::options::TimePrecision;
use icu_datetime::{DateTimeFormatter, NoCalendarFormatter};
use icu_locale_core::Locale;
use tracing::trace;

use crate::error::LocaleDataError;
use crate::style::{DateTimeKind, DateTimeStyle};

/// POSIX locales used when a tag has only a language subtag.
const DEFAULT_REGIONS: &[(&str, &str)] = &[
    ("ar", "ar_SA"),
    ("de", "de_DE"),
    ("el", "el_GR"),
    ("en", "en_US"),
    ("es", "es_ES"),
    ("fr", "fr_FR"),
    ("he", "he_IL"),
    ("hi", "hi_IN"),
    ("it", "it_IT"),
    ("ja", "ja_JP"),
    ("ko", "ko_KR"),
    ("nl", "nl_NL"),
    ("pl", "pl_PL"),
    ("pt", "pt_PT"),
    ("ru", "ru_RU"),
    ("tr", "tr_TR"),
    ("uk", "uk_UA"),
    ("zh", "zh_CN"),
];

/// Resolve a BCP-47 tag to the closest POSIX locale chrono knows.
///
/// Falls back to `POSIX` for unknown languages rather than failing, so month
/// names degrade to English instead of breaking the message.
fn chrono_locale(tag: &str, language: &str) -> ChronoLocale {
    let posix = tag.replace('-', "_");
    if let Ok(locale) = ChronoLocale::try_from(posix.as_str()) {
        return locale;
    }
    DEFAULT_REGIONS
        .iter()
        .find(|(lang, _)| *lang == language)
        .and_then(|(_, region)| ChronoLocale::try_from(*region).ok())
        .unwrap_or(ChronoLocale::POSIX)
}

fn unavailable(tag: &str, error: impl Debug) -> LocaleDataError {
    LocaleDataError::Unavailable {
        locale: tag.to_string(),
        what: "date/time",
        message: format!("{error:?}"),
    }
}

/// Calendar fields never exceed `u8`; out-of-range input fails ICU validation.
fn field(value: u32) -> u8 {
    u8::try_from(value).unwrap_or(u8::MAX)
}

/// Render the wall-clock date of `value` at a CLDR length.
fn render_date(
    value: &DateTime<FixedOffset>,
    style: &DateTimeStyle,
    locale: &Locale,
    tag: &str,
) -> Result<String, LocaleDataError> {
    let date = Date::try_new_iso(value.year(), field(value.month()), field(value.day()))
        .map_err(|e| unavailable(tag, e))?;
    let text = match style {
        DateTimeStyle::Short => DateTimeFormatter::try_new(locale.clone().into(), YMD::short())
            .map(|formatter| formatter.format(&date).to_string()),
        // Named styles are handled by `render` before reaching here.
        DateTimeStyle::Medium | DateTimeStyle::Named(_) => {
            DateTimeFormatter::try_new(locale.clone().into(), YMD::medium())
                .map(|formatter| formatter.format(&date).to_string())
        }
        DateTimeStyle::Long => DateTimeFormatter::try_new(locale.clone().into(), YMD::long())
            .map(|formatter| formatter.format(&date).to_string()),
        DateTimeStyle::Full => DateTimeFormatter::try_new(locale.clone().into(), YMDE::long())
            .map(|formatter| formatter.format(&date).to_string()),
    };
    text.map_err(|e| unavailable(tag, e))
}

/// Render the wall-clock time of `value`; the short length drops seconds.
fn render_time(
    value: &DateTime<FixedOffset>,
    style: &DateTimeStyle,
    locale: &Locale,
    tag: &str,
) -> Result<String, LocaleDataError> {
    let time = Time::try_new(
        field(value.hour()),
        field(value.minute()),
        field(value.second()),
        0,
    )
    .map_err(|e| unavailable(tag, e))?;
    let fieldset = match style {
        DateTimeStyle::Short => T::short().with_time_precision(TimePrecision::Minute),
        DateTimeStyle::Medium | DateTimeStyle::Named(_) => {
            T::medium().with_time_precision(TimePrecision::Second)
        }
        DateTimeStyle::Long | DateTimeStyle::Full => {
            T::long().with_time_precision(TimePrecision::Second)
        }
    };
    NoCalendarFormatter::try_new(locale.clone().into(), fieldset)
        .map(|formatter| formatter.format(&time).to_string())
        .map_err(|e| unavailable(tag, e))
}

/// Render a `strftime` pattern; a malformed pattern is reported as an
/// unsupported style instead of panicking inside `Display`.
fn render_named(
    value: &DateTime<FixedOffset>,
    pattern: &str,
    tag: &str,
    language: &str,
) -> Result<String, LocaleDataError> {
    let unsupported = || LocaleDataError::UnsupportedStyle {
        locale: tag.to_string(),
        style: pattern.to_string(),
    };
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(unsupported());
    }
    let mut out = String::new();
    write!(
        out,
        "{}",
        value.format_localized(pattern, chrono_locale(tag, language))
    )
    .map_err(|_| unsupported())?;
    Ok(out)
}

/// Render a date or time of day in the given style.
pub(crate) fn render(
    value: &DateTime<FixedOffset>,
    kind: DateTimeKind,
    style: &DateTimeStyle,
    locale: &Locale,
    language: &str,
) -> Result<String, LocaleDataError> {
    let tag = locale.to_string();
    trace!(%tag, ?kind, %style, "Rendering date/time");
    match (kind, style) {
        (_, DateTimeStyle::Named(pattern)) => render_named(value, pattern, &tag, language),
        (DateTimeKind::Date, _) => render_date(value, style, locale, &tag),
        (DateTimeKind::Time, _) => render_time(value, style, locale, &tag),
    }
}
