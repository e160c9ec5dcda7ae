//! Cross-fading between colors and color lists

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::ColorValue;
use crate::range::{Number, Range};

/// Shape of the fade curve applied to both mix ratios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FadeKind {
    #[default]
    Linear,
    /// Sign-preserving square: slow start
    Sqr,
    /// Sign-preserving square root: fast start
    Sqrt,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown fade kind {0:?} (expected linear, sqr or sqrt)")]
pub struct ParseFadeKindError(String);

impl FromStr for FadeKind {
    type Err = ParseFadeKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" => Ok(FadeKind::Linear),
            "sqr" => Ok(FadeKind::Sqr),
            "sqrt" => Ok(FadeKind::Sqrt),
            _ => Err(ParseFadeKindError(s.to_string())),
        }
    }
}

impl fmt::Display for FadeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FadeKind::Linear => "linear",
            FadeKind::Sqr => "sqr",
            FadeKind::Sqrt => "sqrt",
        })
    }
}

/// A fade between two inputs, driven by a fader position.
///
/// The fader maps into `begin..end` for the first input and, mirrored, for
/// the second: with the defaults a fader of 1 gives all of `x`, 0 gives all
/// of `y`, and 0.5 an even mix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fade {
    pub begin: f64,
    pub end: f64,
    pub kind: FadeKind,
}

impl Default for Fade {
    fn default() -> Self {
        Self {
            begin: 0.0,
            end: 1.0,
            kind: FadeKind::Linear,
        }
    }
}

impl Fade {
    pub fn new(kind: FadeKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Mix two values at `fader`.
    pub fn mix(&self, fader: f64, x: f64, y: f64) -> f64 {
        let span = self.end - self.begin;
        let xratio = self.shape(self.begin + fader * span);
        let yratio = self.shape(self.begin + (1.0 - fader) * span);
        xratio * x + yratio * y
    }

    fn shape(&self, ratio: f64) -> f64 {
        match self.kind {
            FadeKind::Linear => ratio,
            FadeKind::Sqr => ratio * ratio.abs(),
            FadeKind::Sqrt => ratio.abs().sqrt() * ratio.signum(),
        }
    }
}

/// Mix two colors channel by channel.
pub fn fade_to<R: Range>(
    fader: f64,
    fade: &Fade,
    x: ColorValue<R>,
    y: ColorValue<R>,
) -> ColorValue<R> {
    let [a, b, c] = x.channels();
    let [p, q, r] = y.channels();
    let mix = |u: R::Number, v: R::Number| {
        R::Number::from_f64(fade.mix(fader, u.to_f64(), v.to_f64()))
    };
    ColorValue::new(mix(a, p), mix(b, q), mix(c, r))
}

/// Mix two color lists pairwise; the result has the shorter list's length.
pub fn fade_over<R: Range>(
    fader: f64,
    fade: &Fade,
    xs: &[ColorValue<R>],
    ys: &[ColorValue<R>],
) -> Vec<ColorValue<R>> {
    xs.iter()
        .zip(ys)
        .map(|(&x, &y)| fade_to(fader, fade, x, y))
        .collect()
}

/// `steps` evenly spaced fader positions from `x` (first) to `y` (last).
///
/// A single step yields just `x`; zero steps yield nothing.
pub fn fade_steps<R: Range>(
    fade: &Fade,
    x: ColorValue<R>,
    y: ColorValue<R>,
    steps: usize,
) -> Vec<ColorValue<R>> {
    (0..steps)
        .map(|i| {
            let fader = if steps > 1 {
                1.0 - i as f64 / (steps - 1) as f64
            } else {
                1.0
            };
            fade_to(fader, fade, x, y)
        })
        .collect()
}
