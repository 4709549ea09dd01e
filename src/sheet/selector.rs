//! Selector blocks: a selector string plus its rules.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::style::{StyleRule, StyleValue, ToCss, enum_property};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a selector. Clones share the identity of their original.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SelectorId(u64);

impl SelectorId {
    fn next() -> Self {
        SelectorId(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

enum_property! {
    /// Interaction states a selector can be narrowed to.
    /// Unknown names fall back to `Hover`.
    pub enum PseudoClass {
        #[default]
        Hover => "hover",
        Active => "active",
        Inactive => "inactive",
        Focus => "focus",
        Disabled => "disabled",
        Enabled => "enabled",
        Checked => "checked",
        Root => "root",
    }
}

/// A selector and the rules declared under it.
///
/// Rules keep insertion order; declaring a property twice replaces the first
/// declaration in place. Pseudo-class blocks (`.button:hover`) hang off their
/// parent and are emitted right after it.
#[derive(Debug, Clone, PartialEq)]
pub struct Selector {
    id: SelectorId,
    text: String,
    pseudo: Option<PseudoClass>,
    rules: Vec<StyleRule>,
    states: Vec<Selector>,
}

impl Selector {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: SelectorId::next(),
            text: text.into().trim().to_string(),
            pseudo: None,
            rules: Vec::new(),
            states: Vec::new(),
        }
    }

    pub fn id(&self) -> SelectorId {
        self.id
    }

    /// The selector text, including the `:state` suffix for pseudo-classes.
    pub fn text(&self) -> String {
        match self.pseudo {
            Some(state) => format!("{}:{}", self.text, state.as_str()),
            None => self.text.clone(),
        }
    }

    pub fn is_pseudo_class(&self) -> bool {
        self.pseudo.is_some()
    }

    pub fn pseudo_class(&self) -> Option<PseudoClass> {
        self.pseudo
    }

    pub fn rules(&self) -> &[StyleRule] {
        &self.rules
    }

    /// Rules flagged invalid, in this block and its pseudo-class blocks.
    pub fn invalid_rules(&self) -> Vec<&StyleRule> {
        let mut out: Vec<&StyleRule> = self.rules.iter().filter(|r| !r.is_valid()).collect();
        for state in &self.states {
            out.extend(state.invalid_rules());
        }
        out
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty() && self.states.iter().all(Selector::is_empty)
    }

    /// Add a rule, replacing an earlier rule for the same property.
    ///
    /// Returns the replaced rule, if any.
    pub fn add_rule(&mut self, rule: StyleRule) -> Option<StyleRule> {
        match self.rules.iter_mut().find(|r| r.name() == rule.name()) {
            Some(existing) => Some(std::mem::replace(existing, rule)),
            None => {
                self.rules.push(rule);
                None
            }
        }
    }

    /// Builder-style [`add_rule`](Self::add_rule).
    pub fn with_rule(mut self, rule: StyleRule) -> Self {
        self.add_rule(rule);
        self
    }

    /// Remove the rule for `name`, if present.
    pub fn remove_rule(&mut self, name: &str) -> Option<StyleRule> {
        let index = self.rules.iter().position(|r| r.name() == name)?;
        Some(self.rules.remove(index))
    }

    /// The block for `state`, created empty on first use.
    ///
    /// Pseudo-class blocks do not nest: on a pseudo-class block this returns
    /// the block itself.
    pub fn state(&mut self, state: PseudoClass) -> &mut Selector {
        if self.pseudo.is_some() {
            return self;
        }
        let index = match self.states.iter().position(|s| s.pseudo == Some(state)) {
            Some(i) => i,
            None => {
                self.states.push(Selector {
                    id: SelectorId::next(),
                    text: self.text.clone(),
                    pseudo: Some(state),
                    rules: Vec::new(),
                    states: Vec::new(),
                });
                self.states.len() - 1
            }
        };
        &mut self.states[index]
    }

    pub fn states(&self) -> &[Selector] {
        &self.states
    }

    /// Lines for this block followed by its pseudo-class blocks.
    ///
    /// Empty blocks produce no lines at all.
    pub fn translate(&self, indent: usize) -> Vec<String> {
        let mut lines = Vec::new();
        if !self.rules.is_empty() {
            lines.push(format!("{} {{", self.text()));
            lines.extend(self.rules.iter().map(|r| r.to_text_indented(indent)));
            lines.push("}".to_string());
        }
        for state in &self.states {
            lines.extend(state.translate(indent));
        }
        lines
    }
}
