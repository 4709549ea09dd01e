//! Registry of supported properties.
//!
//! [`RuleKind::name`] is the only place property-name text comes from.

macro_rules! rule_kinds {
    (
        $(
            $(#[$variant_meta:meta])*
            $variant:ident => $css:literal
        ),* $(,)?
    ) => {
        /// A supported style property.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum RuleKind {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
            /// Custom property (`--name`). Rules of this kind carry their own name.
            Variable,
        }

        impl RuleKind {
            /// Every kind except the `Variable` sentinel.
            pub const ALL: &'static [RuleKind] = &[$(RuleKind::$variant,)*];

            /// Canonical property name.
            ///
            /// `Variable` maps to the bare `--` prefix; variable rules always
            /// override it with their own name.
            pub const fn name(self) -> &'static str {
                match self {
                    $(RuleKind::$variant => $css,)*
                    RuleKind::Variable => VARIABLE_PREFIX,
                }
            }

            /// Look up a kind by canonical name. Any `--`-prefixed name is a
            /// `Variable`.
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($css => Some(RuleKind::$variant),)*
                    n if n.starts_with(VARIABLE_PREFIX) => Some(RuleKind::Variable),
                    _ => None,
                }
            }
        }
    };
}

/// Prefix shared by every custom property name.
pub const VARIABLE_PREFIX: &str = "--";

rule_kinds! {
    // Background
    BackgroundColor => "background-color",
    BackgroundImage => "background-image",
    BackgroundScaleMode => "-unity-background-scale-mode",
    BackgroundImageTint => "-unity-background-image-tint-color",

    // Border
    BorderColor => "border-color",
    BorderWidth => "border-width",
    BorderRadius => "border-radius",

    // Text
    Color => "color",
    FontSize => "font-size",
    Font => "-unity-font",
    FontStyle => "-unity-font-style",
    TextAlign => "-unity-text-align",
    WhiteSpace => "white-space",

    // Margin
    Margin => "margin",
    MarginTop => "margin-top",
    MarginRight => "margin-right",
    MarginBottom => "margin-bottom",
    MarginLeft => "margin-left",

    // Padding
    Padding => "padding",
    PaddingTop => "padding-top",
    PaddingRight => "padding-right",
    PaddingBottom => "padding-bottom",
    PaddingLeft => "padding-left",

    // Size
    Width => "width",
    Height => "height",
    MinWidth => "min-width",
    MinHeight => "min-height",
    MaxWidth => "max-width",
    MaxHeight => "max-height",

    // Position
    Position => "position",
    Top => "top",
    Right => "right",
    Bottom => "bottom",
    Left => "left",

    // Flex
    Display => "display",
    FlexDirection => "flex-direction",
    FlexWrap => "flex-wrap",
    FlexGrow => "flex-grow",
    FlexShrink => "flex-shrink",
    FlexBasis => "flex-basis",
    AlignItems => "align-items",
    AlignSelf => "align-self",
    AlignContent => "align-content",
    JustifyContent => "justify-content",

    // Misc
    Cursor => "cursor",
    Opacity => "opacity",
    Overflow => "overflow",
    Visibility => "visibility",

    // Transform
    Rotate => "rotate",
    Scale => "scale",
    Translate => "translate",
    TransformOrigin => "transform-origin",

    // 9-slice
    SliceTop => "-unity-slice-top",
    SliceLeft => "-unity-slice-left",
    SliceRight => "-unity-slice-right",
    SliceBottom => "-unity-slice-bottom",
    SliceScale => "-unity-slice-scale",
}

impl RuleKind {
    /// Whether the property accepts the `auto` length keyword.
    pub fn accepts_auto(self) -> bool {
        !matches!(
            self,
            RuleKind::Padding
                | RuleKind::PaddingTop
                | RuleKind::PaddingRight
                | RuleKind::PaddingBottom
                | RuleKind::PaddingLeft
                | RuleKind::SliceScale
                | RuleKind::TransformOrigin
        )
    }

    /// Whether the property takes a color value.
    pub fn is_color(self) -> bool {
        matches!(
            self,
            RuleKind::BackgroundColor
                | RuleKind::BackgroundImageTint
                | RuleKind::BorderColor
                | RuleKind::Color
        )
    }
}

impl std::fmt::Display for RuleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
