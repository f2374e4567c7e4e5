//! Item presentation and the transition shorthand.
//!
//! [`StyleDescriptor`] is the host-agnostic output of a layout pass: where
//! an item goes, how opaque it is, and whether position changes animate.
//! The host maps it onto whatever it paints with (CSS, a scene graph, a
//! retained toolkit).
//!
//! [`Transition`] is the typed form of the CSS-ish shorthand the widget is
//! configured with:
//!
//! ```
//! use slotgrid::style::{Easing, Transition, TransitionProperty};
//!
//! let t: Transition = "transform 300ms ease".parse().unwrap();
//! assert_eq!(t, Transition::default());
//! assert_eq!(t.to_string(), "transform 300ms ease");
//! assert_eq!(t.easing, Easing::Ease);
//! assert_eq!(t.property, TransitionProperty::Transform);
//! ```

use std::f32::consts::PI;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use cssparser::{Parser, ParserInput, Token};
use slotgrid_core::{Point, Rect, Size};

use crate::error::{Error, Result};

/// Stacking level for the dragged item. Resting items use 0.
pub const DRAG_Z_INDEX: i32 = 1000;

/// How one item should be presented for the current pass.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleDescriptor {
    /// Absolute position of the item's top-left corner.
    pub origin: Point,
    /// Size the item is given.
    pub size: Size,
    /// 0.0 fully transparent, 1.0 opaque.
    pub opacity: f32,
    /// Whether the item should receive pointer input.
    pub pointer_events: bool,
    /// Stacking level; [`DRAG_Z_INDEX`] while dragged.
    pub z_index: i32,
    /// Positional animation. `None` means apply the position instantly.
    pub transition: Option<Transition>,
}

impl StyleDescriptor {
    /// Bounding box of the item, for host-side hit testing.
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.size)
    }
}

/// Which property group a transition animates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionProperty {
    /// Every animatable property.
    All,
    /// Position changes.
    #[default]
    Transform,
    /// Opacity changes.
    Opacity,
}

impl TransitionProperty {
    /// Canonical keyword for this property group.
    pub fn as_str(self) -> &'static str {
        match self {
            TransitionProperty::All => "all",
            TransitionProperty::Transform => "transform",
            TransitionProperty::Opacity => "opacity",
        }
    }

    fn from_keyword(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "all" => Some(TransitionProperty::All),
            "transform" => Some(TransitionProperty::Transform),
            "opacity" => Some(TransitionProperty::Opacity),
            _ => None,
        }
    }
}

/// Timing curves for transitions, named after the CSS keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Gentle sinusoidal acceleration and deceleration.
    #[default]
    Ease,
    /// Linear interpolation (no easing).
    Linear,
    /// Quadratic ease-in (starts slow, accelerates).
    EaseIn,
    /// Quadratic ease-out (starts fast, decelerates).
    EaseOut,
    /// Quadratic ease-in-out (smooth start and end).
    EaseInOut,
}

impl Easing {
    /// Apply the curve to a progress value.
    ///
    /// `t` is clamped to 0.0..=1.0, so callers can feed raw
    /// elapsed-over-duration ratios. Hosts without their own animation
    /// engine drive interpolation through this.
    pub fn evaluate(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Easing::Ease => ease_in_out_sine(t),
            Easing::Linear => t,
            Easing::EaseIn => ease_in_quad(t),
            Easing::EaseOut => ease_out_quad(t),
            Easing::EaseInOut => ease_in_out_quad(t),
        }
    }

    /// Canonical keyword for this curve.
    pub fn as_str(self) -> &'static str {
        match self {
            Easing::Ease => "ease",
            Easing::Linear => "linear",
            Easing::EaseIn => "ease-in",
            Easing::EaseOut => "ease-out",
            Easing::EaseInOut => "ease-in-out",
        }
    }

    fn from_keyword(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "ease" => Some(Easing::Ease),
            "linear" => Some(Easing::Linear),
            "ease-in" => Some(Easing::EaseIn),
            "ease-out" => Some(Easing::EaseOut),
            "ease-in-out" => Some(Easing::EaseInOut),
            _ => None,
        }
    }
}

#[inline]
fn ease_in_quad(t: f32) -> f32 {
    t * t
}

#[inline]
fn ease_out_quad(t: f32) -> f32 {
    1.0 - (1.0 - t) * (1.0 - t)
}

#[inline]
fn ease_in_out_quad(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

#[inline]
fn ease_in_out_sine(t: f32) -> f32 {
    -((PI * t).cos() - 1.0) / 2.0
}

/// Positional animation settings.
///
/// The typed form of the `"transform 300ms ease"` shorthand: a property
/// group, a duration, and a timing curve, in that order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// Which property group animates.
    pub property: TransitionProperty,
    /// How long one transition runs.
    pub duration: Duration,
    /// Timing curve.
    pub easing: Easing,
}

impl Transition {
    /// Create a transition.
    pub fn new(property: TransitionProperty, duration: Duration, easing: Easing) -> Self {
        Self {
            property,
            duration,
            easing,
        }
    }
}

impl Default for Transition {
    /// `transform 300ms ease`.
    fn default() -> Self {
        Self {
            property: TransitionProperty::Transform,
            duration: Duration::from_millis(300),
            easing: Easing::Ease,
        }
    }
}

impl fmt::Display for Transition {
    /// Formats the canonical shorthand with the duration in whole
    /// milliseconds.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}ms {}",
            self.property.as_str(),
            self.duration.as_millis(),
            self.easing.as_str()
        )
    }
}

impl FromStr for Transition {
    type Err = Error;

    /// Parse the `"<property> <duration> <timing>"` shorthand.
    ///
    /// Keywords are matched case-insensitively; the duration takes `ms` or
    /// `s` units. Extra whitespace is tolerated, extra tokens are not.
    fn from_str(s: &str) -> Result<Self> {
        let mut input = ParserInput::new(s);
        let mut parser = Parser::new(&mut input);

        let property = parse_property(&mut parser, s)?;
        let duration = parse_duration(&mut parser, s)?;
        let easing = parse_easing(&mut parser, s)?;

        parser.skip_whitespace();
        if !parser.is_exhausted() {
            return Err(Error::parse(s, "trailing input after timing keyword"));
        }

        Ok(Self {
            property,
            duration,
            easing,
        })
    }
}

fn parse_property(parser: &mut Parser<'_, '_>, source: &str) -> Result<TransitionProperty> {
    parser.skip_whitespace();

    match parser.next() {
        Ok(Token::Ident(name)) => TransitionProperty::from_keyword(name.as_ref())
            .ok_or_else(|| Error::unknown_property(name.as_ref())),
        _ => Err(Error::parse(source, "expected a property keyword")),
    }
}

fn parse_duration(parser: &mut Parser<'_, '_>, source: &str) -> Result<Duration> {
    parser.skip_whitespace();

    match parser.next() {
        Ok(Token::Dimension { value, unit, .. }) => {
            let value = f64::from(*value);
            if !value.is_finite() || value < 0.0 {
                return Err(Error::parse(source, "duration must be non-negative"));
            }
            // Nanosecond math in f64 keeps integral millisecond values exact
            let nanos = if unit.eq_ignore_ascii_case("ms") {
                value * 1_000_000.0
            } else if unit.eq_ignore_ascii_case("s") {
                value * 1_000_000_000.0
            } else {
                return Err(Error::parse(source, "duration unit must be ms or s"));
            };
            Ok(Duration::from_nanos(nanos.round() as u64))
        }
        _ => Err(Error::parse(source, "expected a duration")),
    }
}

fn parse_easing(parser: &mut Parser<'_, '_>, source: &str) -> Result<Easing> {
    parser.skip_whitespace();

    match parser.next() {
        Ok(Token::Ident(name)) => Easing::from_keyword(name.as_ref())
            .ok_or_else(|| Error::unknown_timing(name.as_ref())),
        _ => Err(Error::parse(source, "expected a timing keyword")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_the_canonical_shorthand() {
        let parsed: Transition = "transform 300ms ease".parse().unwrap();
        assert_eq!(parsed, Transition::default());
    }

    #[test]
    fn test_display_round_trip() {
        for shorthand in ["transform 300ms ease", "opacity 150ms ease-out", "all 50ms linear"] {
            let parsed: Transition = shorthand.parse().unwrap();
            assert_eq!(parsed.to_string(), shorthand);
        }
    }

    #[test]
    fn test_parse_second_units() {
        let t: Transition = "all 2s linear".parse().unwrap();
        assert_eq!(t.duration, Duration::from_secs(2));
        assert_eq!(t.to_string(), "all 2000ms linear"); // Canonical form is ms
    }

    #[test]
    fn test_parse_tolerates_whitespace_and_case() {
        let t: Transition = "  Transform   300MS   EASE-IN  ".parse().unwrap();
        assert_eq!(t.property, TransitionProperty::Transform);
        assert_eq!(t.duration, Duration::from_millis(300));
        assert_eq!(t.easing, Easing::EaseIn);
    }

    #[test]
    fn test_parse_rejections() {
        // Unknown property keyword
        assert!(matches!(
            "slide 300ms ease".parse::<Transition>(),
            Err(Error::UnknownProperty { .. })
        ));
        // Unknown timing keyword
        assert!(matches!(
            "transform 300ms bouncy".parse::<Transition>(),
            Err(Error::UnknownTiming { .. })
        ));
        // Bare number, no unit
        assert!("transform 300 ease".parse::<Transition>().is_err());
        // Negative duration
        assert!("transform -5ms ease".parse::<Transition>().is_err());
        // Trailing tokens
        assert!("transform 300ms ease 1s".parse::<Transition>().is_err());
        // Empty input
        assert!("".parse::<Transition>().is_err());
    }

    #[test]
    fn test_easing_endpoints() {
        for easing in [
            Easing::Ease,
            Easing::Linear,
            Easing::EaseIn,
            Easing::EaseOut,
            Easing::EaseInOut,
        ] {
            assert!((easing.evaluate(0.0) - 0.0).abs() < 1e-6);
            assert!((easing.evaluate(1.0) - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_easing_shapes() {
        assert_eq!(Easing::Linear.evaluate(0.5), 0.5);
        assert!(Easing::EaseIn.evaluate(0.5) < 0.5); // Slower at start
        assert!(Easing::EaseOut.evaluate(0.5) > 0.5); // Faster at start
        assert!((Easing::Ease.evaluate(0.5) - 0.5).abs() < 1e-6); // Midpoint unchanged
    }

    #[test]
    fn test_easing_clamps_progress() {
        assert_eq!(Easing::Linear.evaluate(-2.0), 0.0);
        assert_eq!(Easing::Linear.evaluate(1.5), 1.0);
    }

    #[test]
    fn test_drag_z_index() {
        assert_eq!(DRAG_Z_INDEX, 1000);
    }

    #[test]
    fn test_bounds_cover_the_cell() {
        let style = StyleDescriptor {
            origin: Point::new(100.0, 200.0),
            size: Size::new(100.0, 100.0),
            opacity: 1.0,
            pointer_events: true,
            z_index: 0,
            transition: None,
        };

        let bounds = style.bounds();
        assert!(bounds.contains(Point::new(100.0, 200.0)));
        assert!(bounds.contains(Point::new(150.0, 250.0)));
        assert!(!bounds.contains(Point::new(200.0, 250.0))); // Right edge exclusive
    }
}
