//! The stylesheet document: an ordered set of selectors.
//!
//! Selectors are emitted in insertion order. The document never sorts or
//! merges them; each selector is present at most once, by identity.
//!
//! # Example
//!
//! ```
//! use ussgen::sheet::{Selector, StyleSheet};
//! use ussgen::style::{Length, RuleBuilder};
//!
//! let rules = RuleBuilder::default();
//! let mut sheet = StyleSheet::new("Card");
//! sheet.add(Selector::new(".card").with_rule(rules.margin(Length::px(4.0))));
//!
//! assert_eq!(sheet.serialize(), vec![".card {", "    margin: 4px;", "}"]);
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use super::config::SheetConfig;
use super::selector::{Selector, SelectorId};
use super::writer::{FsWriter, SheetWriter};
use crate::diagnostics::{Diagnostics, TracingDiagnostics, report};
use crate::style::StyleRule;

/// A named stylesheet built from selectors.
#[derive(Debug, Clone)]
pub struct StyleSheet {
    name: String,
    selectors: Vec<Selector>,
    file_path: Option<PathBuf>,
    config: SheetConfig,
}

impl StyleSheet {
    /// Create an empty stylesheet with default configuration.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            selectors: Vec::new(),
            file_path: None,
            config: SheetConfig::default(),
        }
    }

    /// Create an empty stylesheet that stands for an existing file.
    pub fn imported(name: impl Into<String>, file_path: impl Into<PathBuf>) -> Self {
        let mut sheet = Self::new(name);
        sheet.file_path = Some(file_path.into());
        sheet
    }

    /// Configure serialization and export.
    pub fn with_config(mut self, config: SheetConfig) -> Self {
        self.config = config;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config(&self) -> &SheetConfig {
        &self.config
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// True when the sheet is backed by a (non-empty) file path.
    pub fn is_imported(&self) -> bool {
        self.file_path
            .as_ref()
            .is_some_and(|p| !p.as_os_str().is_empty())
    }

    // --- Selector set ---

    /// Append a selector.
    ///
    /// Returns false, leaving the sheet untouched, for pseudo-class selectors
    /// and for selectors already present.
    pub fn add(&mut self, selector: Selector) -> bool {
        if selector.is_pseudo_class() || self.contains(selector.id()) {
            return false;
        }
        self.selectors.push(selector);
        true
    }

    /// Remove a selector, keeping the order of the rest.
    pub fn remove(&mut self, id: SelectorId) -> Option<Selector> {
        let index = self.selectors.iter().position(|s| s.id() == id)?;
        Some(self.selectors.remove(index))
    }

    pub fn contains(&self, id: SelectorId) -> bool {
        self.selectors.iter().any(|s| s.id() == id)
    }

    pub fn get(&self, id: SelectorId) -> Option<&Selector> {
        self.selectors.iter().find(|s| s.id() == id)
    }

    pub fn get_mut(&mut self, id: SelectorId) -> Option<&mut Selector> {
        self.selectors.iter_mut().find(|s| s.id() == id)
    }

    pub fn selectors(&self) -> &[Selector] {
        &self.selectors
    }

    pub fn len(&self) -> usize {
        self.selectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selectors.is_empty()
    }

    /// Every rule flagged invalid, across all selectors.
    pub fn invalid_rules(&self) -> Vec<&StyleRule> {
        self.selectors
            .iter()
            .flat_map(|s| s.invalid_rules())
            .collect()
    }

    // --- Output ---

    /// Concatenate each selector's lines in insertion order.
    ///
    /// Selectors that translate to nothing are skipped.
    pub fn serialize(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for selector in &self.selectors {
            let block = selector.translate(self.config.indent);
            if block.is_empty() {
                continue;
            }
            if self.config.blank_line_between_blocks && !lines.is_empty() {
                lines.push(String::new());
            }
            lines.extend(block);
        }
        lines
    }

    /// The serialized lines joined with newlines.
    pub fn to_text(&self) -> String {
        self.serialize().join("\n")
    }

    /// Write the sheet to `directory` as `<name>.<extension>` on disk.
    ///
    /// Failures are logged through `tracing` and reported as `false`.
    pub fn export(&self, directory: impl AsRef<Path>, overwrite: bool) -> bool {
        self.export_with(&FsWriter, &TracingDiagnostics, directory, overwrite)
    }

    /// Write the sheet through `writer`, reporting failures to `diagnostics`.
    #[track_caller]
    pub fn export_with(
        &self,
        writer: &dyn SheetWriter,
        diagnostics: &dyn Diagnostics,
        directory: impl AsRef<Path>,
        overwrite: bool,
    ) -> bool {
        let lines = self.serialize();
        match writer.write(
            &lines,
            &self.name,
            &self.config.extension,
            directory.as_ref(),
            overwrite,
        ) {
            Ok(path) => {
                tracing::info!(sheet = %self.name, path = %path.display(), "exported stylesheet");
                true
            }
            Err(e) => {
                let message = format!("failed to export stylesheet '{}': {}", self.name, e);
                report(diagnostics, Some(&message));
                false
            }
        }
    }
}

impl fmt::Display for StyleSheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.serialize() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
