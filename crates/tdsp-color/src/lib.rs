//! tdsp-color: three-channel color values for light shows
//!
//! A [`ColorValue`] holds red, green and blue as floats and knows its
//! full-scale value through a [`Range`] marker. Two ranges are built in:
//!
//! - [`Color`]: unit range, full on is `1.0`
//! - [`Color256`]: byte range, full on is `255.0`
//!
//! # Quick Start
//!
//! ```
//! use tdsp_color::{Color, Color256};
//!
//! let red: Color = "red".parse().unwrap();
//! let half = red * 0.5;
//! assert_eq!(half, Color::new(0.5, 0.0, 0.0));
//!
//! let orange = Color256::from_name("orange").unwrap();
//! assert_eq!(orange.to_string(), "orange");
//! assert_eq!(orange.convert::<tdsp_color::Normal>().to_hex(), 0xFFA500);
//! ```
//!
//! # Names
//!
//! The 481-entry named-color table is generated at build time from
//! `data/colors.txt`. Colors display as their name when they match an
//! entry exactly, and as the nearest name plus a deviation otherwise;
//! see [`format`] for the exact grammar, which [`str::parse`] accepts back.
//!
//! # Fades
//!
//! [`fade`] mixes colors and color lists with linear or shaped curves.

pub mod color;
pub mod error;
pub mod fade;
pub mod format;
pub mod names;
pub mod range;

pub use color::{ColorValue, Slice};
pub use error::ColorError;
pub use fade::{fade_over, fade_steps, fade_to, Fade, FadeKind, ParseFadeKindError};
pub use range::{EightBit, Normal, Number, Range};

/// Color with channels in `0.0..=1.0`
pub type Color = ColorValue<Normal>;

/// Color with channels in `0.0..=255.0`
pub type Color256 = ColorValue<EightBit>;

/// Unit-range color with double precision channels
pub type Color64 = ColorValue<Normal<f64>>;
