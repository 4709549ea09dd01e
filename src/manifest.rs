//! JSON manifests describing a stylesheet.
//!
//! ```json
//! {
//!   "name": "Card",
//!   "selectors": [
//!     {
//!       "selector": ".card",
//!       "rules": { "margin": "4px 8px", "opacity": 0.9 },
//!       "states": { "hover": { "opacity": 1 } }
//!     }
//!   ]
//! }
//! ```
//!
//! Value text is kept as written. Unknown property and pseudo-class names are
//! errors; values a property does not allow (`"padding": "auto"`) load as
//! invalid rules and are reported to the diagnostics sink.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::diagnostics::{Diagnostics, TracingDiagnostics};
use crate::error::{Error, Result};
use crate::sheet::{PseudoClass, Selector, SheetConfig, StyleSheet};
use crate::style::{RuleBuilder, RuleKind, StyleRule};

/// A stylesheet as described in a manifest file.
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    pub name: String,
    #[serde(default)]
    pub selectors: Vec<SelectorEntry>,
}

/// One selector block in a manifest.
#[derive(Debug, Clone, Deserialize)]
pub struct SelectorEntry {
    pub selector: String,
    #[serde(default)]
    pub rules: Map<String, Value>,
    #[serde(default)]
    pub states: Map<String, Value>,
}

impl Manifest {
    pub fn from_json(text: &str) -> Result<Self> {
        let manifest: Manifest =
            serde_json::from_str(text).map_err(|e| Error::Manifest(e.to_string()))?;
        if manifest.name.trim().is_empty() {
            return Err(Error::Manifest("stylesheet name is empty".into()));
        }
        Ok(manifest)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Build the stylesheet, keeping the manifest's selector and rule order.
    ///
    /// Illegal values are reported through `tracing`.
    pub fn into_sheet(self, config: SheetConfig) -> Result<StyleSheet> {
        self.into_sheet_with(config, &TracingDiagnostics)
    }

    /// Build the stylesheet, reporting illegal values to `diagnostics`.
    pub fn into_sheet_with(
        self,
        config: SheetConfig,
        diagnostics: &dyn Diagnostics,
    ) -> Result<StyleSheet> {
        let rules = RuleBuilder::new(diagnostics);
        let mut sheet = StyleSheet::new(self.name).with_config(config);
        for entry in self.selectors {
            sheet.add(entry.into_selector(&rules)?);
        }
        tracing::debug!(sheet = sheet.name(), selectors = sheet.len(), "loaded manifest");
        Ok(sheet)
    }
}

impl SelectorEntry {
    fn into_selector(self, builder: &RuleBuilder<'_>) -> Result<Selector> {
        if self.selector.trim().is_empty() {
            return Err(Error::Manifest("selector text is empty".into()));
        }
        let mut selector = Selector::new(self.selector);
        add_rules(builder, &mut selector, &self.rules)?;

        for (state, rules) in &self.states {
            let pseudo = PseudoClass::from_css(state)
                .ok_or_else(|| Error::Manifest(format!("unknown pseudo-class `{}`", state)))?;
            let rules = rules.as_object().ok_or_else(|| {
                Error::Manifest(format!("state `{}` must map properties to values", state))
            })?;
            add_rules(builder, selector.state(pseudo), rules)?;
        }
        Ok(selector)
    }
}

fn add_rules(
    builder: &RuleBuilder<'_>,
    selector: &mut Selector,
    rules: &Map<String, Value>,
) -> Result<()> {
    for (property, value) in rules {
        selector.add_rule(parse_rule(builder, property, value)?);
    }
    Ok(())
}

fn parse_rule(builder: &RuleBuilder<'_>, property: &str, value: &Value) -> Result<StyleRule> {
    let value = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        other => {
            return Err(Error::Manifest(format!(
                "value for `{}` must be a string or number, got {}",
                property, other
            )));
        }
    };
    match RuleKind::from_name(property.trim()) {
        Some(RuleKind::Variable) => Ok(builder.variable(property, value.as_str())),
        Some(kind) => Ok(builder.from_text(kind, &value)),
        None => Err(Error::UnknownProperty(property.to_string())),
    }
}
