//! The user-facing compiled message.

use std::fmt::{Debug, Formatter as FmtFormatter, Result as FmtResult};
use std::sync::Arc;

use bon::bon;
use message_format_locale::{IcuLocaleService, LocaleService};
use tracing::debug;

use crate::interpreter::compiler::compile;
use crate::interpreter::error::{CompileError, FormatError, MessageError};
use crate::interpreter::formatter::{Formatter, Rendering};
use crate::tree::{Node, decode};
use crate::types::{Args, Content};

/// A message pattern compiled for one locale.
///
/// Compilation happens once in [`MessageFormat::builder`]; each call to
/// [`MessageFormat::format`] renders the compiled tree against fresh
/// arguments. Formatting takes `&self` and the caller's arguments by shared
/// reference, so a message can be formatted from many threads at once.
///
/// # Example
///
/// ```
/// use message_format::{MessageFormat, Node, args};
///
/// let message = MessageFormat::builder()
///     .pattern(vec![Node::literal("Hello, "), Node::simple("name"), Node::literal("!")])
///     .locale("en-US")
///     .build()
///     .unwrap();
///
/// assert_eq!(message.format(&args! { "name" => "World" }).unwrap(), "Hello, World!");
/// ```
pub struct MessageFormat {
    formatter: Formatter,
    service: Arc<dyn LocaleService>,
    locale: String,
    /// When set, any missing argument fails the whole format call.
    raise_on_missing_params: bool,
}

#[bon]
impl MessageFormat {
    /// Compile `pattern` for `locale`.
    ///
    /// Without an explicit `locale_service`, an [`IcuLocaleService`] is built
    /// for `locale`, using `currency` (default `USD`) for the currency style.
    #[builder]
    pub fn new(
        pattern: Vec<Node>,
        #[builder(into)] locale: String,
        #[builder(default)] raise_on_missing_params: bool,
        #[builder(into)] currency: Option<String>,
        locale_service: Option<Arc<dyn LocaleService>>,
    ) -> Result<Self, CompileError> {
        let service: Arc<dyn LocaleService> = match locale_service {
            Some(service) => service,
            None => {
                let mut icu = IcuLocaleService::try_new(&locale)?;
                if let Some(code) = currency {
                    icu = icu.with_currency(code);
                }
                Arc::new(icu)
            }
        };
        let formatter = compile(&pattern)?;
        debug!(
            locale = %locale,
            nodes = pattern.iter().map(Node::size).sum::<usize>(),
            strict = raise_on_missing_params,
            "compiled message"
        );
        Ok(Self {
            formatter,
            service,
            locale,
            raise_on_missing_params,
        })
    }

    /// Decode a parser's JSON output and compile it with default options.
    pub fn from_json(json: &str, locale: &str) -> Result<Self, CompileError> {
        MessageFormat::builder()
            .pattern(decode(json)?)
            .locale(locale)
            .build()
    }

    /// Format the message to a string.
    pub fn format(&self, args: &Args) -> Result<String, FormatError> {
        self.format_content(args).map(String::from)
    }

    /// Format the message, keeping structured handler output intact.
    ///
    /// Tag handlers may return [`Content::Parts`]; this keeps those parts
    /// instead of flattening them to text.
    pub fn format_content(&self, args: &Args) -> Result<Content, FormatError> {
        let Rendering { content, missing } = self.formatter.render(args, self.service.as_ref())?;
        if self.raise_on_missing_params && !missing.is_empty() {
            let missing_params = missing.deduplicated();
            debug!(
                locale = %self.locale,
                ?missing_params,
                "rejecting message with missing parameters"
            );
            return Err(FormatError::MissingParameters { missing_params });
        }
        Ok(content)
    }

    /// The locale tag this message was compiled for.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Whether missing arguments fail formatting.
    pub fn raises_on_missing_params(&self) -> bool {
        self.raise_on_missing_params
    }
}

impl Debug for MessageFormat {
    fn fmt(&self, f: &mut FmtFormatter<'_>) -> FmtResult {
        f.debug_struct("MessageFormat")
            .field("formatter", &self.formatter)
            .field("locale", &self.locale)
            .field("raise_on_missing_params", &self.raise_on_missing_params)
            .finish_non_exhaustive()
    }
}

/// Compile and format a message in one step.
///
/// Useful for one-off messages; compile with [`MessageFormat::builder`] when
/// the same pattern is formatted repeatedly.
pub fn format_message(pattern: Vec<Node>, locale: &str, args: &Args) -> Result<String, MessageError> {
    let message = MessageFormat::builder()
        .pattern(pattern)
        .locale(locale)
        .build()?;
    Ok(message.format(args)?)
}
