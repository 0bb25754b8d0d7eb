//! Message trees produced by an ICU message parser.
//!
//! Pattern text is parsed elsewhere; this module defines the node model the
//! interpreter consumes and decodes the parser's JSON wire form into it.

mod error;
mod node;
mod wire;

pub use error::TreeError;
pub use node::{Branches, Node};
pub use wire::{decode, decode_value};
