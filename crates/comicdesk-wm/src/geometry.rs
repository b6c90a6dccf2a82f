//! Pure coordinate math: measures, start anchors, and clamping.
//!
//! Nothing in here panics. Bad input resolves to the caller's fallback so
//! a window can always be placed, even before the container is measured.

use comicdesk_common::Size;
use serde::{Deserialize, Serialize};

/// A length given either in pixels or as text (`"60%"`, `"480"`, `"auto"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Measure {
    Pixels(f64),
    Text(String),
}

impl Measure {
    /// A percentage of the container dimension.
    pub fn percent(value: f64) -> Self {
        Measure::Text(format!("{value}%"))
    }
}

impl From<f64> for Measure {
    fn from(value: f64) -> Self {
        Measure::Pixels(value)
    }
}

impl From<&str> for Measure {
    fn from(value: &str) -> Self {
        Measure::Text(value.to_string())
    }
}

impl std::str::FromStr for Measure {
    type Err = std::convert::Infallible;

    /// Bare numbers become pixels; anything else is kept as text and
    /// resolved later.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().parse::<f64>() {
            Ok(px) if px.is_finite() => Measure::Pixels(px),
            _ => Measure::Text(s.to_string()),
        })
    }
}

/// Resolve a measure to pixels against `container`.
///
/// Percentages are taken of `container`; numeric text is read as pixels
/// (leading number only, so `"480px"` is 480). Missing, unparsable or
/// non-finite values give `fallback`.
pub fn parse_measure(value: Option<&Measure>, container: f64, fallback: f64) -> f64 {
    let resolved = match value {
        Some(Measure::Pixels(px)) => Some(*px),
        Some(Measure::Text(text)) => {
            let trimmed = text.trim();
            trimmed
                .strip_suffix('%')
                .and_then(parse_float_prefix)
                .map(|percent| container * percent / 100.0)
                .filter(|v| v.is_finite())
                .or_else(|| parse_float_prefix(trimmed))
        }
        None => None,
    };

    resolved.filter(|v| v.is_finite()).unwrap_or(fallback)
}

/// Parse the longest leading decimal number of `s`, ignoring trailing text.
fn parse_float_prefix(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let digits_while = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_end = digits_while(end);
    let mut mantissa_digits = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_while(end + 1);
        mantissa_digits += frac_end - (end + 1);
        if mantissa_digits > 0 {
            end = frac_end;
        }
    }
    if mantissa_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_while(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}

/// `min(max(value, min), max)`. Never panics; when `min > max` the result is `max`.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Named initial placement of a window inside the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StartAnchor {
    TopLeft,
    TopCenter,
    TopRight,
    CenterLeft,
    #[default]
    Center,
    CenterRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

#[derive(Debug, Clone, Copy)]
enum Align {
    Start,
    Middle,
    End,
}

impl Align {
    fn offset(self, container: f64, extent: f64) -> f64 {
        match self {
            Align::Start => 0.0,
            Align::Middle => (container - extent) / 2.0,
            Align::End => container - extent,
        }
    }
}

impl StartAnchor {
    pub const ALL: [StartAnchor; 9] = [
        StartAnchor::TopLeft,
        StartAnchor::TopCenter,
        StartAnchor::TopRight,
        StartAnchor::CenterLeft,
        StartAnchor::Center,
        StartAnchor::CenterRight,
        StartAnchor::BottomLeft,
        StartAnchor::BottomCenter,
        StartAnchor::BottomRight,
    ];

    /// (horizontal, vertical) alignment of the anchor.
    fn alignment(self) -> (Align, Align) {
        use Align::*;
        match self {
            StartAnchor::TopLeft => (Start, Start),
            StartAnchor::TopCenter => (Middle, Start),
            StartAnchor::TopRight => (End, Start),
            StartAnchor::CenterLeft => (Start, Middle),
            StartAnchor::Center => (Middle, Middle),
            StartAnchor::CenterRight => (End, Middle),
            StartAnchor::BottomLeft => (Start, End),
            StartAnchor::BottomCenter => (Middle, End),
            StartAnchor::BottomRight => (End, End),
        }
    }
}

/// Top-left corner of a window, in container pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub left: f64,
    pub top: f64,
}

/// Place a `width` x `height` window at `anchor` inside `container`.
///
/// The result is unclamped: a window larger than the container gets a
/// negative offset for centre and end anchors.
pub fn resolve_position_by_start(
    anchor: StartAnchor,
    width: f64,
    height: f64,
    container: Size,
) -> Position {
    let (horizontal, vertical) = anchor.alignment();
    Position {
        left: horizontal.offset(container.width, width),
        top: vertical.offset(container.height, height),
    }
}
