//! Per-property rule constructors.
//!
//! [`RuleBuilder`] turns typed values into [`StyleRule`]s. Properties with
//! restrictions (`auto` on padding, conflicting `transform-origin` keywords,
//! ...) are still built, but the rule comes back flagged invalid and a
//! diagnostic is sent to the builder's sink.
//!
//! # Example
//!
//! ```
//! use ussgen::diagnostics::MemoryDiagnostics;
//! use ussgen::style::{Length, RuleBuilder};
//!
//! let sink = MemoryDiagnostics::new();
//! let rules = RuleBuilder::new(&sink);
//!
//! let margin = rules.margin((Length::px(4.0), Length::px(8.0)));
//! assert_eq!(margin.to_text(), "margin: 4px 8px;");
//!
//! let padding = rules.padding(Length::auto());
//! assert_eq!(padding.to_text(), "padding: auto;");
//! assert!(!padding.is_valid());
//! assert_eq!(sink.len(), 1);
//! ```

use std::fmt::Write;

use super::properties::*;
use super::rule::StyleRule;
use super::rule_kind::RuleKind;
use super::values::{Angle, Asset, Color, Edges, Length, Number};
use super::{StyleValue, ToCss};
use crate::diagnostics::{Diagnostics, TracingDiagnostics, report};

static DEFAULT_SINK: TracingDiagnostics = TracingDiagnostics;

/// Builds rules, reporting legality violations to a diagnostics sink.
#[derive(Clone, Copy)]
pub struct RuleBuilder<'d> {
    diagnostics: &'d dyn Diagnostics,
}

impl Default for RuleBuilder<'static> {
    fn default() -> Self {
        Self {
            diagnostics: &DEFAULT_SINK,
        }
    }
}

impl std::fmt::Debug for RuleBuilder<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleBuilder").finish_non_exhaustive()
    }
}

impl<'d> RuleBuilder<'d> {
    pub fn new(diagnostics: &'d dyn Diagnostics) -> Self {
        Self { diagnostics }
    }

    // --- Shared plumbing ---

    fn rule(&self, kind: RuleKind, value: &impl ToCss) -> StyleRule {
        StyleRule::from_value(kind, value)
    }

    /// Build the rule and, if `violation` holds, flag it and report.
    #[track_caller]
    fn checked(
        &self,
        kind: RuleKind,
        value: String,
        violation: bool,
        message: impl FnOnce() -> String,
    ) -> StyleRule {
        if violation {
            report(self.diagnostics, Some(&message()));
        }
        StyleRule::with_validity(kind, value, !violation)
    }

    /// Build a length-valued rule, rejecting `auto` when the kind forbids it.
    #[track_caller]
    fn length_rule(&self, kind: RuleKind, value: &impl StyleValue) -> StyleRule {
        self.checked(
            kind,
            value.to_css_string(),
            value.is_auto() && !kind.accepts_auto(),
            || auto_message(kind),
        )
    }

    /// Build a color rule, rejecting malformed hex codes and keywords.
    #[track_caller]
    fn color_rule(&self, kind: RuleKind, color: &Color) -> StyleRule {
        let value = color.to_css_string();
        self.checked(kind, value.clone(), !color.is_well_formed(), move || {
            malformed_color_message(kind, &value)
        })
    }

    // --- Background ---

    #[track_caller]
    pub fn background_color(&self, color: &Color) -> StyleRule {
        self.color_rule(RuleKind::BackgroundColor, color)
    }

    pub fn background_image(&self, asset: &Asset) -> StyleRule {
        self.rule(RuleKind::BackgroundImage, asset)
    }

    /// `background-image: none;`
    pub fn background_image_none(&self) -> StyleRule {
        StyleRule::new(RuleKind::BackgroundImage, "none")
    }

    pub fn background_scale_mode(&self, mode: ScaleMode) -> StyleRule {
        self.rule(RuleKind::BackgroundScaleMode, &mode)
    }

    #[track_caller]
    pub fn background_image_tint(&self, color: &Color) -> StyleRule {
        self.color_rule(RuleKind::BackgroundImageTint, color)
    }

    // --- Border ---

    #[track_caller]
    pub fn border_color(&self, color: &Color) -> StyleRule {
        self.color_rule(RuleKind::BorderColor, color)
    }

    #[track_caller]
    pub fn border_width(&self, edges: impl Into<Edges>) -> StyleRule {
        self.length_rule(RuleKind::BorderWidth, &edges.into())
    }

    #[track_caller]
    pub fn border_radius(&self, edges: impl Into<Edges>) -> StyleRule {
        self.length_rule(RuleKind::BorderRadius, &edges.into())
    }

    // --- Text ---

    #[track_caller]
    pub fn color(&self, color: &Color) -> StyleRule {
        self.color_rule(RuleKind::Color, color)
    }

    #[track_caller]
    pub fn font_size(&self, size: Length) -> StyleRule {
        self.length_rule(RuleKind::FontSize, &size)
    }

    pub fn font(&self, asset: &Asset) -> StyleRule {
        self.rule(RuleKind::Font, asset)
    }

    pub fn font_style(&self, style: FontStyle) -> StyleRule {
        self.rule(RuleKind::FontStyle, &style)
    }

    pub fn text_align(&self, anchor: TextAnchor) -> StyleRule {
        self.rule(RuleKind::TextAlign, &anchor)
    }

    pub fn white_space(&self, mode: WhiteSpace) -> StyleRule {
        self.rule(RuleKind::WhiteSpace, &mode)
    }

    // --- Margin ---

    #[track_caller]
    pub fn margin(&self, edges: impl Into<Edges>) -> StyleRule {
        self.length_rule(RuleKind::Margin, &edges.into())
    }

    #[track_caller]
    pub fn margin_top(&self, length: Length) -> StyleRule {
        self.length_rule(RuleKind::MarginTop, &length)
    }

    #[track_caller]
    pub fn margin_right(&self, length: Length) -> StyleRule {
        self.length_rule(RuleKind::MarginRight, &length)
    }

    #[track_caller]
    pub fn margin_bottom(&self, length: Length) -> StyleRule {
        self.length_rule(RuleKind::MarginBottom, &length)
    }

    #[track_caller]
    pub fn margin_left(&self, length: Length) -> StyleRule {
        self.length_rule(RuleKind::MarginLeft, &length)
    }

    // --- Padding (no `auto`) ---

    #[track_caller]
    pub fn padding(&self, edges: impl Into<Edges>) -> StyleRule {
        self.length_rule(RuleKind::Padding, &edges.into())
    }

    #[track_caller]
    pub fn padding_top(&self, length: Length) -> StyleRule {
        self.length_rule(RuleKind::PaddingTop, &length)
    }

    #[track_caller]
    pub fn padding_right(&self, length: Length) -> StyleRule {
        self.length_rule(RuleKind::PaddingRight, &length)
    }

    #[track_caller]
    pub fn padding_bottom(&self, length: Length) -> StyleRule {
        self.length_rule(RuleKind::PaddingBottom, &length)
    }

    #[track_caller]
    pub fn padding_left(&self, length: Length) -> StyleRule {
        self.length_rule(RuleKind::PaddingLeft, &length)
    }

    // --- Size ---

    #[track_caller]
    pub fn width(&self, length: Length) -> StyleRule {
        self.length_rule(RuleKind::Width, &length)
    }

    #[track_caller]
    pub fn height(&self, length: Length) -> StyleRule {
        self.length_rule(RuleKind::Height, &length)
    }

    #[track_caller]
    pub fn min_width(&self, length: Length) -> StyleRule {
        self.length_rule(RuleKind::MinWidth, &length)
    }

    #[track_caller]
    pub fn min_height(&self, length: Length) -> StyleRule {
        self.length_rule(RuleKind::MinHeight, &length)
    }

    #[track_caller]
    pub fn max_width(&self, length: Length) -> StyleRule {
        self.length_rule(RuleKind::MaxWidth, &length)
    }

    #[track_caller]
    pub fn max_height(&self, length: Length) -> StyleRule {
        self.length_rule(RuleKind::MaxHeight, &length)
    }

    // --- Position ---

    pub fn position(&self, position: Position) -> StyleRule {
        self.rule(RuleKind::Position, &position)
    }

    #[track_caller]
    pub fn top(&self, length: Length) -> StyleRule {
        self.length_rule(RuleKind::Top, &length)
    }

    #[track_caller]
    pub fn right(&self, length: Length) -> StyleRule {
        self.length_rule(RuleKind::Right, &length)
    }

    #[track_caller]
    pub fn bottom(&self, length: Length) -> StyleRule {
        self.length_rule(RuleKind::Bottom, &length)
    }

    #[track_caller]
    pub fn left(&self, length: Length) -> StyleRule {
        self.length_rule(RuleKind::Left, &length)
    }

    // --- Flex ---

    pub fn display(&self, display: DisplayStyle) -> StyleRule {
        self.rule(RuleKind::Display, &display)
    }

    pub fn flex_direction(&self, direction: FlexDirection) -> StyleRule {
        self.rule(RuleKind::FlexDirection, &direction)
    }

    pub fn flex_wrap(&self, wrap: FlexWrap) -> StyleRule {
        self.rule(RuleKind::FlexWrap, &wrap)
    }

    pub fn flex_grow(&self, grow: f32) -> StyleRule {
        self.rule(RuleKind::FlexGrow, &Number::new(grow))
    }

    pub fn flex_shrink(&self, shrink: f32) -> StyleRule {
        self.rule(RuleKind::FlexShrink, &Number::new(shrink))
    }

    #[track_caller]
    pub fn flex_basis(&self, basis: Length) -> StyleRule {
        self.length_rule(RuleKind::FlexBasis, &basis)
    }

    pub fn align_items(&self, align: FlexAlign) -> StyleRule {
        self.rule(RuleKind::AlignItems, &align)
    }

    pub fn align_self(&self, align: FlexAlign) -> StyleRule {
        self.rule(RuleKind::AlignSelf, &align)
    }

    pub fn align_content(&self, align: FlexAlign) -> StyleRule {
        self.rule(RuleKind::AlignContent, &align)
    }

    pub fn justify_content(&self, justify: Justify) -> StyleRule {
        self.rule(RuleKind::JustifyContent, &justify)
    }

    // --- Misc ---

    pub fn cursor(&self, icon: CursorIcon) -> StyleRule {
        self.rule(RuleKind::Cursor, &icon)
    }

    /// Custom cursor texture with its hotspot.
    pub fn cursor_image(&self, asset: &Asset, hotspot_x: i32, hotspot_y: i32) -> StyleRule {
        let mut value = asset.to_css_string();
        write!(value, " {} {}", hotspot_x, hotspot_y).unwrap();
        StyleRule::new(RuleKind::Cursor, value)
    }

    pub fn opacity(&self, opacity: f32) -> StyleRule {
        self.rule(RuleKind::Opacity, &Number::new(opacity))
    }

    pub fn overflow(&self, overflow: Overflow) -> StyleRule {
        self.rule(RuleKind::Overflow, &overflow)
    }

    pub fn visibility(&self, visibility: Visibility) -> StyleRule {
        self.rule(RuleKind::Visibility, &visibility)
    }

    // --- Transform ---

    pub fn rotate(&self, angle: Angle) -> StyleRule {
        self.rule(RuleKind::Rotate, &angle)
    }

    pub fn scale(&self, x: f32, y: f32) -> StyleRule {
        let (x, y) = (Number::new(x), Number::new(y));
        StyleRule::new(
            RuleKind::Scale,
            format!("{} {}", x.to_css_string(), y.to_css_string()),
        )
    }

    /// Scale the x axis only; y keeps the identity scale.
    pub fn scale_x(&self, x: f32) -> StyleRule {
        self.scale(x, 1.0)
    }

    /// Scale the y axis only; x keeps the identity scale.
    pub fn scale_y(&self, y: f32) -> StyleRule {
        self.scale(1.0, y)
    }

    /// `scale: none;`
    pub fn scale_none(&self) -> StyleRule {
        StyleRule::new(RuleKind::Scale, "none")
    }

    #[track_caller]
    pub fn translate(&self, x: Length, y: Length) -> StyleRule {
        self.length_rule(RuleKind::Translate, &Edges::Axes(x, y))
    }

    /// Translate along x only; y stays at zero.
    #[track_caller]
    pub fn translate_x(&self, x: Length) -> StyleRule {
        self.translate(x, Length::ZERO)
    }

    /// Translate along y only; x stays at zero.
    #[track_caller]
    pub fn translate_y(&self, y: Length) -> StyleRule {
        self.translate(Length::ZERO, y)
    }

    /// Two-length `transform-origin`. Neither length may be `auto`.
    #[track_caller]
    pub fn transform_origin(&self, x: Length, y: Length) -> StyleRule {
        self.length_rule(RuleKind::TransformOrigin, &Edges::Axes(x, y))
    }

    /// Two-keyword `transform-origin`. The keywords must address different
    /// axes (`center` fits either).
    #[track_caller]
    pub fn transform_origin_keywords(&self, first: OriginAlign, second: OriginAlign) -> StyleRule {
        self.checked(
            RuleKind::TransformOrigin,
            format!("{} {}", first.as_str(), second.as_str()),
            first.conflicts(second),
            || {
                format!(
                    "{} keywords `{}` and `{}` address the same axis",
                    RuleKind::TransformOrigin.name(),
                    first.as_str(),
                    second.as_str()
                )
            },
        )
    }

    // --- 9-slice ---

    pub fn slice_top(&self, pixels: i32) -> StyleRule {
        StyleRule::new(RuleKind::SliceTop, pixels.to_string())
    }

    pub fn slice_left(&self, pixels: i32) -> StyleRule {
        StyleRule::new(RuleKind::SliceLeft, pixels.to_string())
    }

    pub fn slice_right(&self, pixels: i32) -> StyleRule {
        StyleRule::new(RuleKind::SliceRight, pixels.to_string())
    }

    pub fn slice_bottom(&self, pixels: i32) -> StyleRule {
        StyleRule::new(RuleKind::SliceBottom, pixels.to_string())
    }

    #[track_caller]
    pub fn slice_scale(&self, scale: Length) -> StyleRule {
        self.length_rule(RuleKind::SliceScale, &scale)
    }

    // --- Custom properties ---

    /// `--name: value;`. An empty name is reported.
    #[track_caller]
    pub fn variable(&self, name: &str, value: &(impl ToCss + ?Sized)) -> StyleRule {
        let rule = StyleRule::variable(name, value.to_css_string());
        if !rule.is_valid() {
            report(self.diagnostics, Some("custom property declared without a name"));
        }
        rule
    }

    // --- Pre-rendered text ---

    /// Build a rule from value text rendered elsewhere.
    ///
    /// The typed methods' checks still apply to the text: `auto` where the
    /// property forbids it, two `transform-origin` keywords on one axis, and
    /// malformed colors all yield an invalid, reported rule.
    #[track_caller]
    pub fn from_text(&self, kind: RuleKind, value: &str) -> StyleRule {
        let value = value.trim();
        let tokens: Vec<&str> = value.split_whitespace().collect();

        if !kind.accepts_auto() && tokens.iter().any(|t| t.eq_ignore_ascii_case("auto")) {
            return self.checked(kind, value.to_string(), true, || auto_message(kind));
        }

        if kind == RuleKind::TransformOrigin
            && let [first, second] = tokens.as_slice()
            && let (Some(first), Some(second)) =
                (OriginAlign::from_css(first), OriginAlign::from_css(second))
        {
            return self.transform_origin_keywords(first, second);
        }

        if kind.is_color() && value.starts_with('#') {
            let color = Color::hex(value);
            return self.checked(kind, value.to_string(), !color.is_well_formed(), || {
                malformed_color_message(kind, value)
            });
        }

        StyleRule::new(kind, value)
    }
}

fn auto_message(kind: RuleKind) -> String {
    format!("{} does not accept `auto`", kind.name())
}

fn malformed_color_message(kind: RuleKind, value: &str) -> String {
    format!("{} has a malformed color `{}`", kind.name(), value)
}
