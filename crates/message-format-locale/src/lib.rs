//! Locale service for ICU message formatting.
//!
//! The message interpreter never touches locale data directly. It asks a
//! [`LocaleService`] for three things: the CLDR plural category of a number,
//! the rendering of a number in a given style, and the rendering of a date or
//! time. [`IcuLocaleService`] is the default implementation, backed by ICU4X
//! compiled data for plurals, decimals, dates and times. Named `strftime`
//! date styles are rendered by `chrono`.

mod datetime;
mod error;
mod number;
mod pattern;
mod plural;
mod service;
mod spellout;
mod style;

pub use error::LocaleDataError;
pub use number::Numeric;
pub use plural::PluralCategory;
pub use service::{IcuLocaleService, LocaleService};
pub use spellout::{english_ordinal_suffix, spell_out_english};
pub use style::{DateTimeKind, DateTimeStyle, NumberStyle, PluralKind};
