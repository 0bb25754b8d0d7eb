//! CLDR plural category resolution.
//!
//! Different languages have different plural rules. English has "one" and
//! "other", Russian adds "few" and "many", and Arabic uses all six categories.
//! Ordinal rules (1st, 2nd, 3rd) are a separate rule set per language.
//!
//! `PluralRules` are cached per thread, keyed by locale and rule type, and
//! built lazily on first use within each thread.

use std::cell::RefCell;
use std::fmt::{Display, Formatter, Result as FmtResult};

use icu_locale_core::Locale;
use icu_plurals::{PluralCategory as IcuPluralCategory, PluralRuleType, PluralRules};
use tracing::debug;

use crate::error::LocaleDataError;
use crate::number::Numeric;
use crate::style::PluralKind;

thread_local! {
    /// Per-thread cache of `PluralRules` keyed by canonical locale tag and kind.
    static PLURAL_RULES_CACHE: RefCell<Vec<(String, PluralKind, PluralRules)>> = const { RefCell::new(Vec::new()) };
}

/// A CLDR plural category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PluralCategory {
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

impl PluralCategory {
    /// The branch keyword for this category.
    pub fn as_str(self) -> &'static str {
        match self {
            PluralCategory::Zero => "zero",
            PluralCategory::One => "one",
            PluralCategory::Two => "two",
            PluralCategory::Few => "few",
            PluralCategory::Many => "many",
            PluralCategory::Other => "other",
        }
    }
}

impl Display for PluralCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl From<IcuPluralCategory> for PluralCategory {
    fn from(category: IcuPluralCategory) -> Self {
        match category {
            IcuPluralCategory::Zero => PluralCategory::Zero,
            IcuPluralCategory::One => PluralCategory::One,
            IcuPluralCategory::Two => PluralCategory::Two,
            IcuPluralCategory::Few => PluralCategory::Few,
            IcuPluralCategory::Many => PluralCategory::Many,
            IcuPluralCategory::Other => PluralCategory::Other,
        }
    }
}

fn build_rules(locale: &Locale, kind: PluralKind) -> Result<PluralRules, LocaleDataError> {
    let rule_type = match kind {
        PluralKind::Cardinal => PluralRuleType::Cardinal,
        PluralKind::Ordinal => PluralRuleType::Ordinal,
    };
    PluralRules::try_new(locale.clone().into(), rule_type.into()).map_err(|e| {
        LocaleDataError::Unavailable {
            locale: locale.to_string(),
            what: "plural rules",
            message: e.to_string(),
        }
    })
}

fn category_for(rules: &PluralRules, value: Numeric) -> Result<PluralCategory, LocaleDataError> {
    if let Some(n) = value.as_integer() {
        return Ok(rules.category_for(n).into());
    }
    let decimal = value.to_decimal()?;
    Ok(rules.category_for(&decimal).into())
}

/// Get the CLDR plural category for a number in a locale.
///
/// Rules are cached per thread, so repeated calls under the same locale and
/// kind reuse the previously constructed `PluralRules`.
pub(crate) fn plural_category(
    locale: &Locale,
    value: Numeric,
    kind: PluralKind,
) -> Result<PluralCategory, LocaleDataError> {
    let tag = locale.to_string();
    PLURAL_RULES_CACHE.with_borrow_mut(|cache| {
        if let Some((_, _, rules)) = cache.iter().find(|(key, k, _)| *key == tag && *k == kind) {
            return category_for(rules, value);
        }
        debug!(locale = %tag, ?kind, "loading plural rules");
        let rules = build_rules(locale, kind)?;
        let category = category_for(&rules, value)?;
        cache.push((tag, kind, rules));
        Ok(category)
    })
}
