//! Argument style keywords understood by the locale service.

use std::fmt::{Display, Formatter, Result as FmtResult};

/// Whether plural selection uses cardinal (`plural`) or ordinal
/// (`selectordinal`) rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluralKind {
    Cardinal,
    Ordinal,
}

impl PluralKind {
    /// Maps an argument type keyword to a plural kind.
    pub fn from_keyword(keyword: &str) -> Option<PluralKind> {
        match keyword {
            "plural" => Some(PluralKind::Cardinal),
            "selectordinal" => Some(PluralKind::Ordinal),
            _ => None,
        }
    }
}

/// Rendering style for numeric placeholders.
///
/// Unknown style keywords fall back to [`NumberStyle::Default`], which renders
/// the number with the locale's grouping and decimal separators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NumberStyle {
    #[default]
    Default,
    Integer,
    Percent,
    Currency,
    Spellout,
    Ordinal,
    Duration,
}

impl NumberStyle {
    /// Maps an optional style keyword to a number style.
    pub fn from_keyword(keyword: Option<&str>) -> NumberStyle {
        match keyword.map(str::trim) {
            Some("integer") => NumberStyle::Integer,
            Some("percent") => NumberStyle::Percent,
            Some("currency") => NumberStyle::Currency,
            Some("spellout") => NumberStyle::Spellout,
            Some("ordinal") => NumberStyle::Ordinal,
            Some("duration") => NumberStyle::Duration,
            _ => NumberStyle::Default,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NumberStyle::Default => "default",
            NumberStyle::Integer => "integer",
            NumberStyle::Percent => "percent",
            NumberStyle::Currency => "currency",
            NumberStyle::Spellout => "spellout",
            NumberStyle::Ordinal => "ordinal",
            NumberStyle::Duration => "duration",
        }
    }
}

impl Display for NumberStyle {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Whether a temporal placeholder renders the date or the time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateTimeKind {
    Date,
    Time,
}

impl DateTimeKind {
    /// Maps an argument type keyword to a temporal kind.
    pub fn from_keyword(keyword: &str) -> Option<DateTimeKind> {
        match keyword {
            "date" => Some(DateTimeKind::Date),
            "time" => Some(DateTimeKind::Time),
            _ => None,
        }
    }
}

/// Rendering style for date and time placeholders.
///
/// Any keyword other than the four standard lengths is kept as a named
/// style and interpreted as a `strftime` pattern by [`crate::IcuLocaleService`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum DateTimeStyle {
    Short,
    #[default]
    Medium,
    Long,
    Full,
    Named(String),
}

impl DateTimeStyle {
    /// Maps an optional style keyword to a date/time style. A missing keyword
    /// means `medium`.
    pub fn from_keyword(keyword: Option<&str>) -> DateTimeStyle {
        match keyword.map(str::trim) {
            None | Some("" | "medium") => DateTimeStyle::Medium,
            Some("short") => DateTimeStyle::Short,
            Some("long") => DateTimeStyle::Long,
            Some("full") => DateTimeStyle::Full,
            Some(named) => DateTimeStyle::Named(named.to_string()),
        }
    }
}

impl Display for DateTimeStyle {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DateTimeStyle::Short => f.write_str("short"),
            DateTimeStyle::Medium => f.write_str("medium"),
            DateTimeStyle::Long => f.write_str("long"),
            DateTimeStyle::Full => f.write_str("full"),
            DateTimeStyle::Named(name) => f.write_str(name),
        }
    }
}
