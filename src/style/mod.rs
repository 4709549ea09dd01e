//! Typed style values, the property registry, and style rules.
//!
//! This module contains:
//! - Value types (Length, Number, Angle, Color, Asset, Edges)
//! - Keyword enums (ScaleMode, CursorIcon, Position, ...)
//! - The RuleKind registry of supported properties
//! - StyleRule and the per-property RuleBuilder

mod builder;
mod properties;
mod rule;
mod rule_kind;
mod values;

/// Types that can be written as stylesheet text.
pub trait ToCss {
    /// Write this value as CSS to the buffer.
    fn to_css(&self, buf: &mut String);

    /// Convert to a CSS string (convenience method).
    fn to_css_string(&self) -> String {
        let mut buf = String::new();
        self.to_css(&mut buf);
        buf
    }
}

impl ToCss for str {
    fn to_css(&self, buf: &mut String) {
        buf.push_str(self);
    }
}

/// A value that can appear on the right-hand side of a rule.
pub trait StyleValue: ToCss {
    /// Whether this value is (or contains) the `auto` keyword.
    ///
    /// Only the length family can be `auto`.
    fn is_auto(&self) -> bool {
        false
    }
}

pub use properties::{
    Axis, CursorIcon, DisplayStyle, FlexAlign, FlexDirection, FlexWrap, FontStyle, Justify,
    OriginAlign, Overflow, Position, ScaleMode, TextAnchor, Visibility, WhiteSpace,
};

pub use values::{Angle, AngleUnit, Asset, Color, Edges, Length, Number, channel_from_unit};

pub use rule_kind::{RuleKind, VARIABLE_PREFIX};

pub use rule::StyleRule;

pub use builder::RuleBuilder;

pub(crate) use properties::enum_property;
