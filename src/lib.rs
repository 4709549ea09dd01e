//! # ussgen
//!
//! A typed builder and serializer for UI stylesheets (USS).
//!
//! ## Features
//!
//! - Typed values for lengths, numbers, angles, colors, and assets
//! - One constructor per supported property, with legality checks
//! - Selectors with pseudo-class blocks, emitted in insertion order
//! - Deterministic `name: value;` output, exported to disk on request
//!
//! Rule construction never fails. A value that is not legal for its property
//! still produces a rule, flagged invalid, and the problem is reported through
//! an injectable [`Diagnostics`] sink.
//!
//! ## Quick Start
//!
//! ```
//! use ussgen::{Selector, StyleSheet};
//! use ussgen::style::{Color, Length, RuleBuilder};
//!
//! let rules = RuleBuilder::default();
//!
//! let mut sheet = StyleSheet::new("Card");
//! sheet.add(
//!     Selector::new(".card")
//!         .with_rule(rules.margin((Length::px(4.0), Length::px(8.0))))
//!         .with_rule(rules.background_color(&Color::hex("#202020"))),
//! );
//!
//! assert_eq!(
//!     sheet.to_text(),
//!     ".card {\n    margin: 4px 8px;\n    background-color: #202020;\n}"
//! );
//! ```
//!
//! ## Collecting diagnostics
//!
//! ```
//! use ussgen::diagnostics::MemoryDiagnostics;
//! use ussgen::style::{Length, RuleBuilder};
//!
//! let sink = MemoryDiagnostics::new();
//! let rules = RuleBuilder::new(&sink);
//!
//! let rule = rules.padding(Length::auto());
//! assert!(!rule.is_valid());
//! assert_eq!(rule.to_text(), "padding: auto;");
//! assert_eq!(sink.len(), 1);
//! ```

pub mod diagnostics;
pub mod error;
pub mod sheet;
pub mod style;

#[cfg(feature = "cli")]
pub mod manifest;

pub use diagnostics::{Diagnostic, Diagnostics, MemoryDiagnostics, TracingDiagnostics};
pub use error::{Error, Result};
pub use sheet::{FsWriter, PseudoClass, Selector, SelectorId, SheetConfig, SheetWriter, StyleSheet};
pub use style::{RuleBuilder, RuleKind, StyleRule, StyleValue, ToCss};
