//! CLDR percent and currency number patterns.
//!
//! Digits, grouping and separators come from `icu_decimal`. These patterns only
//! decide where the sign, the percent sign and the currency symbol sit around
//! the formatted digits, and which spacing separates them. Entries are the
//! `latn` standard patterns from CLDR `numbers.json`, looked up by full tag,
//! then language, then the root locale.

/// `(locale, percent pattern, currency pattern)`.
const PATTERNS: &[(&str, &str, &str)] = &[
    ("root", "#,##0%", "¤\u{a0}#,##0.00"),
    ("ar", "#,##0%", "\u{200f}#,##0.00\u{a0}¤"),
    ("cs", "#,##0\u{a0}%", "#,##0.00\u{a0}¤"),
    ("da", "#,##0\u{a0}%", "#,##0.00\u{a0}¤"),
    ("de", "#,##0\u{a0}%", "#,##0.00\u{a0}¤"),
    ("de-AT", "#,##0\u{a0}%", "¤\u{a0}#,##0.00"),
    ("de-CH", "#,##0%", "¤\u{a0}#,##0.00"),
    ("el", "#,##0%", "#,##0.00\u{a0}¤"),
    ("en", "#,##0%", "¤#,##0.00"),
    ("es", "#,##0\u{a0}%", "#,##0.00\u{a0}¤"),
    ("fi", "#,##0\u{a0}%", "#,##0.00\u{a0}¤"),
    ("fr", "#,##0\u{202f}%", "#,##0.00\u{a0}¤"),
    ("he", "#,##0%", "\u{200f}#,##0.00\u{a0}¤;\u{200f}-#,##0.00\u{a0}¤"),
    ("hi", "#,##,##0%", "¤#,##,##0.00"),
    ("it", "#,##0%", "#,##0.00\u{a0}¤"),
    ("ja", "#,##0%", "¤#,##0.00"),
    ("ko", "#,##0%", "¤#,##0.00"),
    ("nb", "#,##0\u{a0}%", "#,##0.00\u{a0}¤"),
    ("nl", "#,##0%", "¤\u{a0}#,##0.00"),
    ("pl", "#,##0%", "#,##0.00\u{a0}¤"),
    ("pt", "#,##0%", "¤\u{a0}#,##0.00"),
    ("pt-PT", "#,##0%", "#,##0.00\u{a0}¤"),
    ("ru", "#,##0\u{a0}%", "#,##0.00\u{a0}¤"),
    ("sv", "#,##0\u{a0}%", "#,##0.00\u{a0}¤"),
    ("tr", "%#,##0", "¤#,##0.00"),
    ("uk", "#,##0%", "#,##0.00\u{a0}¤"),
    ("zh", "#,##0%", "¤#,##0.00"),
];

/// Affixes split out of a number pattern around its digit run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Affixes<'a> {
    pub prefix: &'a str,
    pub suffix: &'a str,
}

impl<'a> Affixes<'a> {
    /// Split a pattern such as `¤#,##0.00` or `#,##0 %`.
    ///
    /// Only the positive subpattern is used; negative numbers take a leading
    /// minus sign, as CLDR does for patterns without an explicit negative form.
    fn parse(pattern: &'a str) -> Self {
        let positive = pattern.split(';').next().unwrap_or(pattern);
        let is_digit = |c: char| c == '#' || c == '0';
        match (positive.find(is_digit), positive.rfind(is_digit)) {
            (Some(start), Some(end)) => Self {
                prefix: &positive[..start],
                suffix: &positive[end + 1..],
            },
            _ => Self {
                prefix: positive,
                suffix: "",
            },
        }
    }

    /// Wrap formatted digits, replacing `¤` with `symbol`.
    ///
    /// A symbol ending in a letter (an ISO code such as `CHF`) touching the
    /// digits is separated from them by a no-break space, following CLDR
    /// currency spacing.
    pub(crate) fn apply(&self, negative: bool, digits: &str, symbol: &str) -> String {
        let sign = if negative { "-" } else { "" };
        let mut prefix = self.prefix.replace('¤', symbol);
        if self.prefix.ends_with('¤') && symbol.ends_with(char::is_alphabetic) {
            prefix.push('\u{a0}');
        }
        let mut suffix = self.suffix.replace('¤', symbol);
        if self.suffix.starts_with('¤') && symbol.starts_with(char::is_alphabetic) {
            suffix.insert(0, '\u{a0}');
        }
        format!("{sign}{prefix}{digits}{suffix}")
    }
}

fn lookup(tag: &str, language: &str) -> &'static (&'static str, &'static str, &'static str) {
    let find = |key: &str| PATTERNS.iter().find(|(locale, _, _)| *locale == key);
    find(tag)
        .or_else(|| find(language))
        .unwrap_or(&PATTERNS[0])
}

/// The percent pattern for a locale.
pub(crate) fn percent(tag: &str, language: &str) -> Affixes<'static> {
    Affixes::parse(lookup(tag, language).1)
}

/// The currency pattern for a locale.
pub(crate) fn currency(tag: &str, language: &str) -> Affixes<'static> {
    Affixes::parse(lookup(tag, language).2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_prefix_and_suffix() {
        let en = currency("en-US", "en");
        assert_eq!(en, Affixes { prefix: "¤", suffix: "" });
        let de = currency("de", "de");
        assert_eq!(de, Affixes { prefix: "", suffix: "\u{a0}¤" });
        assert_eq!(percent("tr", "tr"), Affixes { prefix: "%", suffix: "" });
    }

    #[test]
    fn region_overrides_language() {
        assert_eq!(currency("de-AT", "de").prefix, "¤\u{a0}");
        assert_eq!(currency("pt-PT", "pt").suffix, "\u{a0}¤");
    }

    #[test]
    fn unknown_locales_use_root() {
        assert_eq!(currency("xx", "xx").prefix, "¤\u{a0}");
        assert_eq!(percent("xx", "xx").suffix, "%");
    }

    #[test]
    fn only_positive_subpattern_is_used() {
        let he = currency("he", "he");
        assert_eq!(he.prefix, "\u{200f}");
        assert_eq!(he.apply(true, "5.00", "₪"), "-\u{200f}5.00\u{a0}₪");
    }

    #[test]
    fn alphabetic_symbols_are_spaced_from_digits() {
        let en = currency("en", "en");
        assert_eq!(en.apply(false, "9.50", "CHF"), "CHF\u{a0}9.50");
        assert_eq!(en.apply(false, "9.50", "CA$"), "CA$9.50");
    }
}
