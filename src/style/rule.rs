//! A single `name: value;` declaration.

use std::fmt;

use super::rule_kind::{RuleKind, VARIABLE_PREFIX};
use super::ToCss;

/// One property declaration.
///
/// The value is stored already rendered. `valid` starts out true and can only
/// ever be cleared; an invalid rule still renders exactly like a valid one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StyleRule {
    name: String,
    kind: RuleKind,
    value: String,
    valid: bool,
}

impl StyleRule {
    /// Create a rule for a registered property.
    pub fn new(kind: RuleKind, value: impl Into<String>) -> Self {
        Self {
            name: kind.name().to_string(),
            kind,
            value: value.into(),
            valid: true,
        }
    }

    /// Create a rule with an explicit validity flag.
    pub fn with_validity(kind: RuleKind, value: impl Into<String>, valid: bool) -> Self {
        let mut rule = Self::new(kind, value);
        if !valid {
            rule.invalidate();
        }
        rule
    }

    /// Create a rule from any typed value.
    pub fn from_value(kind: RuleKind, value: &impl ToCss) -> Self {
        Self::new(kind, value.to_css_string())
    }

    /// Create a custom property rule.
    ///
    /// The name is normalized to start with `--`. An empty name leaves the
    /// bare prefix as the name and marks the rule invalid.
    pub fn variable(name: &str, value: impl Into<String>) -> Self {
        let trimmed = name.trim().trim_start_matches(VARIABLE_PREFIX);
        let mut rule = Self {
            name: format!("{}{}", VARIABLE_PREFIX, trimmed),
            kind: RuleKind::Variable,
            value: value.into(),
            valid: true,
        };
        if trimmed.is_empty() {
            rule.invalidate();
        }
        rule
    }

    /// The property name, honoring a custom-property override.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> RuleKind {
        self.kind
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Mark the rule invalid. There is no way back.
    pub(crate) fn invalidate(&mut self) {
        self.valid = false;
    }

    /// `name: value;`
    pub fn to_text(&self) -> String {
        self.to_css_string()
    }

    /// `name: value;` left-padded with `indent` spaces.
    pub fn to_text_indented(&self, indent: usize) -> String {
        let mut buf = " ".repeat(indent);
        self.to_css(&mut buf);
        buf
    }
}

impl ToCss for StyleRule {
    fn to_css(&self, buf: &mut String) {
        buf.push_str(&self.name);
        buf.push_str(": ");
        buf.push_str(&self.value);
        buf.push(';');
    }
}

impl fmt::Display for StyleRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_uses_registry_name() {
        let rule = StyleRule::new(RuleKind::MarginTop, "4px");
        assert_eq!(rule.name(), "margin-top");
        assert_eq!(rule.kind(), RuleKind::MarginTop);
        assert_eq!(rule.value(), "4px");
        assert!(rule.is_valid());
    }

    #[test]
    fn test_to_text() {
        let rule = StyleRule::new(RuleKind::Opacity, "0.5");
        assert_eq!(rule.to_text(), "opacity: 0.5;");
        assert_eq!(rule.to_string(), "opacity: 0.5;");
    }

    #[test]
    fn test_empty_value() {
        let rule = StyleRule::new(RuleKind::Color, "");
        assert_eq!(rule.to_text(), "color: ;");
    }

    #[test]
    fn test_indented() {
        let rule = StyleRule::new(RuleKind::Width, "10px");
        assert_eq!(rule.to_text_indented(4), "    width: 10px;");
        assert_eq!(rule.to_text_indented(0), "width: 10px;");
    }

    #[test]
    fn test_invalid_renders_identically() {
        let valid = StyleRule::new(RuleKind::Padding, "auto");
        let invalid = StyleRule::with_validity(RuleKind::Padding, "auto", false);
        assert!(!invalid.is_valid());
        assert_eq!(valid.to_text(), invalid.to_text());
        assert_eq!(valid.to_text_indented(2), invalid.to_text_indented(2));
    }

    #[test]
    fn test_invalidate_is_sticky() {
        let mut rule = StyleRule::with_validity(RuleKind::Top, "0px", true);
        assert!(rule.is_valid());
        rule.invalidate();
        rule.invalidate();
        assert!(!rule.is_valid());
    }

    #[test]
    fn test_variable_name_normalized() {
        let rule = StyleRule::variable("accent", "#ff0000");
        assert_eq!(rule.name(), "--accent");
        assert_eq!(rule.kind(), RuleKind::Variable);
        assert_eq!(rule.to_text(), "--accent: #ff0000;");

        let rule = StyleRule::variable("--accent", "red");
        assert_eq!(rule.name(), "--accent");
        assert!(rule.is_valid());
    }

    #[test]
    fn test_variable_empty_name() {
        let rule = StyleRule::variable("  ", "1px");
        assert_eq!(rule.name(), "--");
        assert!(!rule.is_valid());
    }

    #[test]
    fn test_from_value() {
        use crate::style::Length;
        let rule = StyleRule::from_value(RuleKind::Height, &Length::percent(100.0));
        assert_eq!(rule.to_text(), "height: 100%;");
    }

    proptest! {
        #[test]
        fn prop_to_text_shape(
            idx in 0..RuleKind::ALL.len(),
            value in "[a-z0-9 #%().-]{0,24}",
            valid in any::<bool>(),
        ) {
            let kind = RuleKind::ALL[idx];
            let rule = StyleRule::with_validity(kind, value.clone(), valid);
            prop_assert_eq!(rule.to_text(), format!("{}: {};", kind.name(), value));
            prop_assert_eq!(rule.is_valid(), valid);
        }

        #[test]
        fn prop_indent_prefix(indent in 0usize..16) {
            let rule = StyleRule::new(RuleKind::Left, "1px");
            let text = rule.to_text_indented(indent);
            prop_assert_eq!(text.len(), indent + rule.to_text().len());
            prop_assert!(text.ends_with(&rule.to_text()));
        }
    }
}
