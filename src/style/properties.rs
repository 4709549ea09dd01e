//! Keyword property types and the enum_property! macro.
//!
//! Every keyword enum has three projections:
//!
//! - `as_str()`: total, variant to keyword.
//! - `from_css()`: strict inverse, `None` on unknown text.
//! - `from_name()`: total inverse, unknown text falls back to the variant
//!   marked `#[default]`.

use super::{StyleValue, ToCss};

/// Macro for defining keyword enums with automatic ToCss implementation.
///
/// The `#[default]` variant doubles as the fallback for `from_name`.
///
/// # Example
///
/// ```ignore
/// enum_property! {
///     /// Positioning scheme.
///     pub enum Position {
///         #[default]
///         Relative => "relative",
///         Absolute => "absolute",
///     }
/// }
/// ```
macro_rules! enum_property {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $css:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant,)*];

            /// Returns the keyword for this value.
            #[inline]
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $css,)*
                }
            }

            /// Parse a keyword into this enum.
            #[inline]
            pub fn from_css(s: &str) -> Option<Self> {
                match s {
                    $($css => Some($name::$variant),)*
                    _ => None,
                }
            }

            /// Parse a keyword, falling back to the default variant.
            #[inline]
            pub fn from_name(s: &str) -> Self {
                Self::from_css(s.trim()).unwrap_or_default()
            }
        }

        impl ToCss for $name {
            fn to_css(&self, buf: &mut String) {
                buf.push_str(self.as_str());
            }
        }

        impl StyleValue for $name {}
    };
}

pub(crate) use enum_property;

enum_property! {
    /// Background image scaling (`-unity-background-scale-mode`).
    /// Unknown names fall back to `StretchToFill`.
    pub enum ScaleMode {
        #[default]
        StretchToFill => "stretch-to-fill",
        ScaleAndCrop => "scale-and-crop",
        ScaleToFit => "scale-to-fit",
    }
}

enum_property! {
    /// Built-in cursor icons. Unknown names fall back to `Arrow`.
    pub enum CursorIcon {
        #[default]
        Arrow => "arrow",
        Text => "text",
        ResizeVertical => "resize-vertical",
        ResizeHorizontal => "resize-horizontal",
        Link => "link",
        SlideArrow => "slide-arrow",
        ResizeUpRight => "resize-up-right",
        ResizeUpLeft => "resize-up-left",
        MoveArrow => "move-arrow",
        RotateArrow => "rotate-arrow",
        ScaleArrow => "scale-arrow",
        ArrowPlus => "arrow-plus",
        ArrowMinus => "arrow-minus",
        Pan => "pan",
        Orbit => "orbit",
        Zoom => "zoom",
        Fps => "fps",
        SplitResizeUpDown => "split-resize-up-down",
        SplitResizeLeftRight => "split-resize-left-right",
    }
}

enum_property! {
    /// Positioning scheme. Unknown names fall back to `Relative`.
    pub enum Position {
        #[default]
        Relative => "relative",
        Absolute => "absolute",
    }
}

enum_property! {
    /// Cross-axis alignment for `align-items`, `align-self` and
    /// `align-content`. Unknown names fall back to `Auto`.
    pub enum FlexAlign {
        #[default]
        Auto => "auto",
        FlexStart => "flex-start",
        FlexEnd => "flex-end",
        Center => "center",
        Stretch => "stretch",
    }
}

enum_property! {
    /// Main-axis distribution for `justify-content`.
    /// Unknown names fall back to `FlexStart`.
    pub enum Justify {
        #[default]
        FlexStart => "flex-start",
        FlexEnd => "flex-end",
        Center => "center",
        SpaceBetween => "space-between",
        SpaceAround => "space-around",
    }
}

enum_property! {
    /// Flex main axis. Unknown names fall back to `Column`.
    pub enum FlexDirection {
        #[default]
        Column => "column",
        ColumnReverse => "column-reverse",
        Row => "row",
        RowReverse => "row-reverse",
    }
}

enum_property! {
    /// Flex line wrapping. Unknown names fall back to `NoWrap`.
    pub enum FlexWrap {
        #[default]
        NoWrap => "nowrap",
        Wrap => "wrap",
        WrapReverse => "wrap-reverse",
    }
}

enum_property! {
    /// Display mode. Unknown names fall back to `Flex`.
    pub enum DisplayStyle {
        #[default]
        Flex => "flex",
        None => "none",
    }
}

enum_property! {
    /// Visibility. Unknown names fall back to `Visible`.
    pub enum Visibility {
        #[default]
        Visible => "visible",
        Hidden => "hidden",
    }
}

enum_property! {
    /// Overflow clipping. Unknown names fall back to `Visible`.
    pub enum Overflow {
        #[default]
        Visible => "visible",
        Hidden => "hidden",
    }
}

enum_property! {
    /// White-space handling. Unknown names fall back to `Normal`.
    pub enum WhiteSpace {
        #[default]
        Normal => "normal",
        NoWrap => "nowrap",
    }
}

enum_property! {
    /// Font style and weight (`-unity-font-style`).
    /// Unknown names fall back to `Normal`.
    pub enum FontStyle {
        #[default]
        Normal => "normal",
        Italic => "italic",
        Bold => "bold",
        BoldAndItalic => "bold-and-italic",
    }
}

enum_property! {
    /// Text anchor inside its box (`-unity-text-align`).
    /// Unknown names fall back to `UpperLeft`.
    pub enum TextAnchor {
        #[default]
        UpperLeft => "upper-left",
        UpperCenter => "upper-center",
        UpperRight => "upper-right",
        MiddleLeft => "middle-left",
        MiddleCenter => "middle-center",
        MiddleRight => "middle-right",
        LowerLeft => "lower-left",
        LowerCenter => "lower-center",
        LowerRight => "lower-right",
    }
}

enum_property! {
    /// Keyword form of `transform-origin`. Unknown names fall back to `Center`.
    pub enum OriginAlign {
        Left => "left",
        Right => "right",
        Top => "top",
        Bottom => "bottom",
        #[default]
        Center => "center",
    }
}

/// The axis an [`OriginAlign`] keyword addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
    /// `center` is valid on either axis.
    Both,
}

impl OriginAlign {
    pub fn axis(self) -> Axis {
        match self {
            OriginAlign::Left | OriginAlign::Right => Axis::Horizontal,
            OriginAlign::Top | OriginAlign::Bottom => Axis::Vertical,
            OriginAlign::Center => Axis::Both,
        }
    }

    /// True when both keywords address the same single axis, e.g.
    /// `left right` or `top bottom`.
    pub fn conflicts(self, other: OriginAlign) -> bool {
        match (self.axis(), other.axis()) {
            (Axis::Both, _) | (_, Axis::Both) => false,
            (a, b) => a == b,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::AngleUnit;

    #[test]
    fn test_as_str() {
        assert_eq!(ScaleMode::ScaleAndCrop.as_str(), "scale-and-crop");
        assert_eq!(CursorIcon::ResizeUpLeft.as_str(), "resize-up-left");
        assert_eq!(FontStyle::BoldAndItalic.as_str(), "bold-and-italic");
        assert_eq!(FlexWrap::NoWrap.as_str(), "nowrap");
    }

    #[test]
    fn test_from_css_is_strict() {
        assert_eq!(Position::from_css("absolute"), Some(Position::Absolute));
        assert_eq!(Position::from_css("fixed"), None);
        assert_eq!(Position::from_css("Absolute"), None);
    }

    #[test]
    fn test_from_name_falls_back_to_default() {
        assert_eq!(ScaleMode::from_name("stretch"), ScaleMode::StretchToFill);
        assert_eq!(CursorIcon::from_name("hand"), CursorIcon::Arrow);
        assert_eq!(Position::from_name(""), Position::Relative);
        assert_eq!(FlexAlign::from_name("baseline"), FlexAlign::Auto);
        assert_eq!(Justify::from_name("space-evenly"), Justify::FlexStart);
        assert_eq!(TextAnchor::from_name("centre"), TextAnchor::UpperLeft);
        assert_eq!(OriginAlign::from_name("middle"), OriginAlign::Center);
    }

    #[test]
    fn test_from_name_trims() {
        assert_eq!(DisplayStyle::from_name("  none "), DisplayStyle::None);
    }

    #[test]
    fn test_round_trip_all_enums() {
        fn check<T: Copy + PartialEq + std::fmt::Debug>(
            all: &[T],
            to: fn(&T) -> &'static str,
            from: fn(&str) -> T,
        ) {
            for v in all {
                assert_eq!(from(to(v)), *v);
            }
        }
        check(ScaleMode::ALL, ScaleMode::as_str, ScaleMode::from_name);
        check(CursorIcon::ALL, CursorIcon::as_str, CursorIcon::from_name);
        check(Position::ALL, Position::as_str, Position::from_name);
        check(FlexAlign::ALL, FlexAlign::as_str, FlexAlign::from_name);
        check(Justify::ALL, Justify::as_str, Justify::from_name);
        check(FlexDirection::ALL, FlexDirection::as_str, FlexDirection::from_name);
        check(FlexWrap::ALL, FlexWrap::as_str, FlexWrap::from_name);
        check(DisplayStyle::ALL, DisplayStyle::as_str, DisplayStyle::from_name);
        check(Visibility::ALL, Visibility::as_str, Visibility::from_name);
        check(Overflow::ALL, Overflow::as_str, Overflow::from_name);
        check(WhiteSpace::ALL, WhiteSpace::as_str, WhiteSpace::from_name);
        check(FontStyle::ALL, FontStyle::as_str, FontStyle::from_name);
        check(TextAnchor::ALL, TextAnchor::as_str, TextAnchor::from_name);
        check(OriginAlign::ALL, OriginAlign::as_str, OriginAlign::from_name);
        check(AngleUnit::ALL, AngleUnit::as_str, AngleUnit::from_name);
    }

    #[test]
    fn test_origin_conflicts() {
        use OriginAlign::*;
        assert!(Left.conflicts(Right));
        assert!(Left.conflicts(Left));
        assert!(Top.conflicts(Bottom));
        assert!(!Left.conflicts(Top));
        assert!(!Bottom.conflicts(Right));
        assert!(!Center.conflicts(Center));
        assert!(!Center.conflicts(Left));
        assert!(!Top.conflicts(Center));
    }

    #[test]
    fn test_keyword_is_never_auto() {
        assert!(!FlexAlign::Auto.is_auto());
    }

    #[test]
    fn test_to_css() {
        assert_eq!(Justify::SpaceBetween.to_css_string(), "space-between");
    }
}
