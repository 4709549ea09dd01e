//! Typed value types: lengths, numbers, angles, colors and asset references.
//!
//! Constructors never fail. Out-of-range inputs are clamped and non-finite
//! magnitudes collapse to zero, so every value always has a text form.

use std::fmt::Write;
use std::hash::{Hash, Hasher};

use super::{StyleValue, ToCss};

/// Replace NaN, infinities and negative zero with zero.
#[inline]
fn finite_or_zero(v: f32) -> f32 {
    if v.is_finite() && v != 0.0 { v } else { 0.0 }
}

/// Length value with unit, or the `auto` keyword.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Length {
    #[default]
    Auto,
    Px(f32),
    Percent(f32),
}

impl Length {
    pub const ZERO: Length = Length::Px(0.0);

    pub fn px(v: f32) -> Self {
        Length::Px(finite_or_zero(v))
    }

    pub fn percent(v: f32) -> Self {
        Length::Percent(finite_or_zero(v))
    }

    pub fn auto() -> Self {
        Length::Auto
    }
}

impl Eq for Length {}

impl Hash for Length {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Length::Auto => 0u8.hash(state),
            Length::Px(v) => {
                1u8.hash(state);
                v.to_bits().hash(state);
            }
            Length::Percent(v) => {
                2u8.hash(state);
                v.to_bits().hash(state);
            }
        }
    }
}

impl ToCss for Length {
    fn to_css(&self, buf: &mut String) {
        match self {
            Length::Auto => buf.push_str("auto"),
            Length::Px(v) => write!(buf, "{}px", v).unwrap(),
            Length::Percent(v) => write!(buf, "{}%", v).unwrap(),
        }
    }
}

impl StyleValue for Length {
    fn is_auto(&self) -> bool {
        matches!(self, Length::Auto)
    }
}

/// One to four lengths in shorthand order (top, right, bottom, left).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edges {
    All(Length),
    Axes(Length, Length),
    TopAxisBottom(Length, Length, Length),
    Each(Length, Length, Length, Length),
}

impl Edges {
    fn for_each(&self, mut f: impl FnMut(&Length)) {
        match self {
            Edges::All(a) => f(a),
            Edges::Axes(v, h) => {
                f(v);
                f(h);
            }
            Edges::TopAxisBottom(t, h, b) => {
                f(t);
                f(h);
                f(b);
            }
            Edges::Each(t, r, b, l) => {
                f(t);
                f(r);
                f(b);
                f(l);
            }
        }
    }

    /// True if any participating length is `auto`.
    pub fn any_auto(&self) -> bool {
        let mut found = false;
        self.for_each(|l| found |= l.is_auto());
        found
    }
}

impl From<Length> for Edges {
    fn from(l: Length) -> Self {
        Edges::All(l)
    }
}

impl From<(Length, Length)> for Edges {
    fn from((v, h): (Length, Length)) -> Self {
        Edges::Axes(v, h)
    }
}

impl From<(Length, Length, Length)> for Edges {
    fn from((t, h, b): (Length, Length, Length)) -> Self {
        Edges::TopAxisBottom(t, h, b)
    }
}

impl From<(Length, Length, Length, Length)> for Edges {
    fn from((t, r, b, l): (Length, Length, Length, Length)) -> Self {
        Edges::Each(t, r, b, l)
    }
}

impl ToCss for Edges {
    fn to_css(&self, buf: &mut String) {
        let mut first = true;
        self.for_each(|l| {
            if !first {
                buf.push(' ');
            }
            first = false;
            l.to_css(buf);
        });
    }
}

impl StyleValue for Edges {
    fn is_auto(&self) -> bool {
        self.any_auto()
    }
}

/// A unitless scalar.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Number(f32);

impl Number {
    pub fn new(v: f32) -> Self {
        Number(finite_or_zero(v))
    }

    pub fn get(self) -> f32 {
        self.0
    }
}

impl From<f32> for Number {
    fn from(v: f32) -> Self {
        Number::new(v)
    }
}

impl ToCss for Number {
    fn to_css(&self, buf: &mut String) {
        write!(buf, "{}", self.0).unwrap();
    }
}

impl StyleValue for Number {}

super::enum_property! {
    /// Angular units.
    pub enum AngleUnit {
        #[default]
        Deg => "deg",
        Grad => "grad",
        Rad => "rad",
        Turn => "turn",
    }
}

/// An angle, or unset (rendered as `none`).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Angle(Option<(f32, AngleUnit)>);

impl Angle {
    pub fn new(value: f32, unit: AngleUnit) -> Self {
        Angle(Some((finite_or_zero(value), unit)))
    }

    pub fn deg(value: f32) -> Self {
        Self::new(value, AngleUnit::Deg)
    }

    pub fn rad(value: f32) -> Self {
        Self::new(value, AngleUnit::Rad)
    }

    pub fn turn(value: f32) -> Self {
        Self::new(value, AngleUnit::Turn)
    }

    pub fn none() -> Self {
        Angle(None)
    }

    pub fn is_none(&self) -> bool {
        self.0.is_none()
    }
}

impl ToCss for Angle {
    fn to_css(&self, buf: &mut String) {
        match self.0 {
            Some((v, unit)) => write!(buf, "{}{}", v, unit.as_str()).unwrap(),
            None => buf.push_str("none"),
        }
    }
}

impl StyleValue for Angle {}

/// Convert a unit-interval intensity to a channel byte.
///
/// Multiply by 255, clamp to `[0, 255]`, truncate. NaN maps to 0.
#[inline]
pub fn channel_from_unit(c: f32) -> u8 {
    (c * 255.0).clamp(0.0, 255.0) as u8
}

/// A color. All variants are accepted wherever a color is.
#[derive(Debug, Clone, PartialEq)]
pub enum Color {
    /// `#rrggbb` / `#rgb`, stored lowercase with the leading `#`.
    Hex(String),
    Rgb(u8, u8, u8),
    /// Alpha in `[0, 1]`.
    Rgba(u8, u8, u8, f32),
    /// A color keyword such as `red` or `transparent`.
    Named(String),
}

impl Color {
    /// Hex color from `rgb`, `rgba`, `rrggbb` or `rrggbbaa` digits, with or
    /// without the leading `#`.
    ///
    /// The digits are taken as given; see [`Color::is_well_formed`].
    pub fn hex(code: &str) -> Self {
        let code = code.trim().trim_start_matches('#').to_ascii_lowercase();
        Color::Hex(format!("#{}", code))
    }

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb(r, g, b)
    }

    pub fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        let a = if a.is_nan() { 0.0 } else { a.clamp(0.0, 1.0) };
        Color::Rgba(r, g, b, a)
    }

    pub fn named(keyword: impl Into<String>) -> Self {
        Color::Named(keyword.into())
    }

    /// Build from unit-interval channels, clamping each.
    pub fn from_unit_rgb(r: f32, g: f32, b: f32) -> Self {
        Color::Rgb(
            channel_from_unit(r),
            channel_from_unit(g),
            channel_from_unit(b),
        )
    }

    /// Build from unit-interval channels plus alpha, clamping each.
    pub fn from_unit_rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Color::rgba(
            channel_from_unit(r),
            channel_from_unit(g),
            channel_from_unit(b),
            a,
        )
    }

    /// Whether this color renders to legal color text.
    ///
    /// Hex codes need 3, 4, 6 or 8 hex digits; keywords must be a non-empty
    /// identifier.
    pub fn is_well_formed(&self) -> bool {
        match self {
            Color::Hex(code) => {
                let digits = code.trim_start_matches('#');
                matches!(digits.len(), 3 | 4 | 6 | 8)
                    && digits.bytes().all(|b| b.is_ascii_hexdigit())
            }
            Color::Rgb(..) | Color::Rgba(..) => true,
            Color::Named(name) => {
                !name.is_empty() && name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
            }
        }
    }
}

impl ToCss for Color {
    fn to_css(&self, buf: &mut String) {
        match self {
            Color::Hex(code) => buf.push_str(code),
            Color::Rgb(r, g, b) => write!(buf, "rgb({}, {}, {})", r, g, b).unwrap(),
            Color::Rgba(r, g, b, a) => write!(buf, "rgba({}, {}, {}, {})", r, g, b, a).unwrap(),
            Color::Named(name) => buf.push_str(name),
        }
    }
}

impl StyleValue for Color {}

/// Reference to an image, font or other asset.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Asset {
    /// Project-relative path, rendered as `url("...")`.
    Url(String),
    /// Resources-folder lookup, rendered as `resource("...")`.
    Resource(String),
}

impl Asset {
    pub fn url(path: impl Into<String>) -> Self {
        Asset::Url(path.into())
    }

    pub fn resource(path: impl Into<String>) -> Self {
        Asset::Resource(path.into())
    }
}

impl ToCss for Asset {
    fn to_css(&self, buf: &mut String) {
        let (func, path) = match self {
            Asset::Url(p) => ("url", p),
            Asset::Resource(p) => ("resource", p),
        };
        buf.push_str(func);
        buf.push('(');
        cssparser::serialize_string(path, buf).unwrap();
        buf.push(')');
    }
}

impl StyleValue for Asset {}
