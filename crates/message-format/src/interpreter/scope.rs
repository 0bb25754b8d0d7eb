//! Per-call render state.

use std::collections::{HashMap, HashSet};

use message_format_locale::LocaleService;
use tracing::trace;

use crate::interpreter::tags::{DefaultTag, TagShape};
use crate::types::{Args, Value};

/// Argument ids referenced during one render but absent from the arguments.
///
/// Ids are kept in evaluation order, duplicates included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MissingIds(Vec<String>);

impl MissingIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an absent id.
    pub fn record(&mut self, id: &str) {
        self.0.push(id.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// All recorded ids in evaluation order, including repeats.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Each id once, in order of first occurrence.
    pub fn deduplicated(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.0
            .iter()
            .filter(|id| seen.insert(id.as_str()))
            .cloned()
            .collect()
    }
}

/// State threaded through one render of a compiled formatter tree.
///
/// The scope borrows the caller's arguments immutably. Default tag handlers
/// synthesized for unbound tags live in a side table owned by the scope, so
/// they are shared by every use of the same tag id within the call and
/// discarded when the call ends.
pub(crate) struct RenderScope<'a> {
    /// Arguments supplied by the caller.
    args: &'a Args,
    /// Locale service the message was built with.
    service: &'a dyn LocaleService,
    /// Ids referenced but not supplied.
    missing: MissingIds,
    /// Default handlers synthesized during this call, by tag id.
    default_tags: HashMap<String, DefaultTag>,
}

impl<'a> RenderScope<'a> {
    pub(crate) fn new(args: &'a Args, service: &'a dyn LocaleService) -> Self {
        Self {
            args,
            service,
            missing: MissingIds::new(),
            default_tags: HashMap::new(),
        }
    }

    pub(crate) fn service(&self) -> &'a dyn LocaleService {
        self.service
    }

    /// Look up an argument, recording the id as missing if absent.
    pub(crate) fn argument(&mut self, id: &str) -> Option<&'a Value> {
        let value = self.args.get(id);
        if value.is_none() {
            trace!(id, "missing argument");
            self.missing.record(id);
        }
        value
    }

    /// Look up a tag binding. Unbound tags are not missing arguments.
    pub(crate) fn tag_binding(&self, id: &str) -> Option<&'a Value> {
        self.args.get(id)
    }

    /// The default handler for an unbound tag id.
    ///
    /// The first tag with a given id synthesizes the handler from its own
    /// attributes and shape; later tags with that id reuse it.
    pub(crate) fn default_tag(&mut self, id: &str, attributes: &str, shape: TagShape) -> DefaultTag {
        self.default_tags
            .entry(id.to_string())
            .or_insert_with(|| {
                trace!(id, "synthesized default tag handler");
                DefaultTag::new(id, attributes, shape)
            })
            .clone()
    }

    /// End the render, yielding the missing ids.
    pub(crate) fn finish(self) -> MissingIds {
        self.missing
    }
}
