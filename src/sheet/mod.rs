//! Stylesheet documents: selectors, serialization, and export.
//!
//! - [`Selector`] groups rules under a selector string, with optional
//!   pseudo-class blocks.
//! - [`StyleSheet`] keeps selectors in insertion order and serializes them.
//! - [`SheetWriter`] is the persistence seam; [`FsWriter`] writes to disk.

mod config;
mod document;
mod selector;
mod writer;

pub use config::{DEFAULT_EXTENSION, SheetConfig};
pub use document::StyleSheet;
pub use selector::{PseudoClass, Selector, SelectorId};
pub use writer::{FsWriter, SheetWriter, target_path};
