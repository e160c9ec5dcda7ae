//! The three-channel color value type
//!
//! [`ColorValue`] is a plain `(r, g, b)` triple tagged at compile time with a
//! [`Range`] that fixes its full-scale value. Channels are unconstrained:
//! negative and over-range values are legal and survive arithmetic until
//! [`ColorValue::normalized`] clamps them.
//!
//! # Example
//!
//! ```
//! use tdsp_color::{Color, Color256};
//!
//! let red = Color::from_name("red").unwrap();
//! let green = Color::from_name("green").unwrap();
//! assert_eq!(red + green, Color::from_name("yellow").unwrap());
//!
//! let white = Color256::new(255.0, 255.0, 255.0);
//! assert_eq!(!white, Color256::default());
//! ```

mod ops;
mod serialize;
mod slice;

use std::fmt;
use std::marker::PhantomData;
use std::ops::Index;

use crate::error::ColorError;
use crate::names::{bytes_to_hex, hex_to_bytes, table};
use crate::range::{clamp, Normal, Number, Range};

pub use slice::Slice;

/// An RGB color whose full-scale channel value is `R::RATIO`.
#[derive(Clone, Copy)]
pub struct ColorValue<R: Range = Normal> {
    channels: [R::Number; 3],
    range: PhantomData<R>,
}

impl<R: Range> ColorValue<R> {
    /// Create a color from its three channels.
    #[inline]
    pub fn new(r: R::Number, g: R::Number, b: R::Number) -> Self {
        Self {
            channels: [r, g, b],
            range: PhantomData,
        }
    }

    /// Same as [`ColorValue::new`].
    #[inline]
    pub fn from_components(r: R::Number, g: R::Number, b: R::Number) -> Self {
        Self::new(r, g, b)
    }

    /// Create a color from a slice of exactly three channels.
    ///
    /// # Errors
    ///
    /// [`ColorError::InvalidArity`] if the slice does not hold 3 values.
    ///
    /// ```
    /// use tdsp_color::{Color, ColorError};
    ///
    /// assert_eq!(Color::from_sequence(&[1.0, 1.0, 1.0]), Ok(Color::new(1.0, 1.0, 1.0)));
    /// assert_eq!(Color::from_sequence(&[1.0, 1.0]), Err(ColorError::InvalidArity(2)));
    /// ```
    pub fn from_sequence(values: &[R::Number]) -> Result<Self, ColorError> {
        match *values {
            [r, g, b] => Ok(Self::new(r, g, b)),
            _ => Err(ColorError::InvalidArity(values.len())),
        }
    }

    /// Look a color up in the named-color table.
    ///
    /// The table triple is scaled into this variant, so `Color256` gets
    /// `(255, 0, 0)` for "red" where `Color` gets `(1, 0, 0)`. Only names are
    /// accepted here; use [`str::parse`] for hex, grey levels and the
    /// formatted deviation syntax.
    ///
    /// # Errors
    ///
    /// [`ColorError::UnknownColorName`] if no table entry matches.
    pub fn from_name(name: &str) -> Result<Self, ColorError> {
        table()
            .lookup(name)
            .map(|entry| Self::from_bytes(entry.bytes()))
            .ok_or_else(|| ColorError::UnknownColorName(name.to_string()))
    }

    /// A grey with all three channels set to `level`.
    #[inline]
    pub fn splat(level: R::Number) -> Self {
        Self::new(level, level, level)
    }

    /// Create a color from packed `0xRRGGBB`.
    pub fn from_hex(hex: u32) -> Self {
        Self::from_bytes(hex_to_bytes(hex))
    }

    /// Scale 8-bit channels into this variant.
    ///
    /// Every path from the table into a color goes through here, so exact
    /// name matching in `Display` compares against identical values.
    pub(crate) fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::from(bytes.map(|b| R::Number::from_f64(b as f64) * R::RATIO / R::Number::FULL_BYTE))
    }

    /// The full-scale channel value of this variant.
    #[inline]
    pub fn ratio() -> R::Number {
        R::RATIO
    }

    /// All registered color names, in lexicographic order.
    pub fn names() -> Vec<&'static str> {
        table().names().collect()
    }

    #[inline]
    pub fn r(self) -> R::Number {
        self.channels[0]
    }

    #[inline]
    pub fn g(self) -> R::Number {
        self.channels[1]
    }

    #[inline]
    pub fn b(self) -> R::Number {
        self.channels[2]
    }

    /// The channels as an `[r, g, b]` array.
    #[inline]
    pub fn channels(self) -> [R::Number; 3] {
        self.channels
    }

    /// Channel at `index`, counting from the end for negative indices.
    ///
    /// # Errors
    ///
    /// [`ColorError::IndexOutOfRange`] unless `-3 <= index <= 2`.
    ///
    /// ```
    /// use tdsp_color::Color;
    ///
    /// let c = Color::new(1.0, 2.0, 3.0);
    /// assert_eq!(c.get(-1), Ok(3.0));
    /// assert!(c.get(3).is_err());
    /// ```
    pub fn get(self, index: isize) -> Result<R::Number, ColorError> {
        let wrapped = if index < 0 { index + 3 } else { index };
        if !(0..3).contains(&wrapped) {
            return Err(ColorError::IndexOutOfRange(index));
        }
        Ok(self.channels[wrapped as usize])
    }

    /// Iterate over `r`, `g`, `b`.
    #[inline]
    pub fn iter(self) -> std::array::IntoIter<R::Number, 3> {
        self.channels.into_iter()
    }

    /// Rotate the channels left by `n` places (right for negative `n`).
    ///
    /// `rotated(1)` maps `(r, g, b)` to `(g, b, r)`; rotation has period 3.
    pub fn rotated(self, n: isize) -> Self {
        let mut channels = self.channels;
        channels.rotate_left(n.rem_euclid(3) as usize);
        Self::from(channels)
    }

    /// Clamp every channel into `0..=ratio`.
    pub fn normalized(self) -> Self {
        self.map(|c| clamp(c, R::Number::ZERO, R::RATIO))
    }

    /// Elementwise absolute value.
    pub fn abs(self) -> Self {
        self.map(Number::abs)
    }

    /// Linear interpolation: `self` at `t = 0`, `other` at `t = 1`.
    pub fn interpolate(self, other: Self, t: R::Number) -> Self {
        self.zip_with(other, |x, y| x + t * (y - x))
    }

    /// Sum of squared channel differences.
    pub fn distance2(self, other: Self) -> R::Number {
        let [dr, dg, db] = (self - other).channels;
        dr * dr + dg * dg + db * db
    }

    /// Sum of squared differences between channels; zero for pure greys.
    pub fn greyness2(self) -> R::Number {
        let [r, g, b] = self.channels;
        let (rg, gb, br) = (r - g, g - b, b - r);
        rg * rg + gb * gb + br * br
    }

    /// Rescale into another variant, e.g. unit to byte range.
    ///
    /// ```
    /// use tdsp_color::{Color, Color256};
    ///
    /// let half = Color::new(0.5, 1.0, 0.0).convert::<tdsp_color::EightBit>();
    /// assert_eq!(half, Color256::new(127.5, 255.0, 0.0));
    /// ```
    pub fn convert<R2: Range>(self) -> ColorValue<R2> {
        let (from, to) = (R::RATIO.to_f64(), R2::RATIO.to_f64());
        ColorValue::from(
            self.channels
                .map(|c| R2::Number::from_f64(c.to_f64() / from * to)),
        )
    }

    /// Pack into `0xRRGGBB`, clamping to gamut and rounding to bytes.
    pub fn to_hex(self) -> u32 {
        let ratio = R::RATIO.to_f64();
        let bytes = self
            .normalized()
            .channels
            .map(|c| (c.to_f64() / ratio * 255.0).round() as u8);
        bytes_to_hex(bytes)
    }

    /// Channels divided by the ratio, in the table's 0..1 domain.
    pub(crate) fn to_unit_triple(self) -> [f64; 3] {
        let ratio = R::RATIO.to_f64();
        self.channels.map(|c| c.to_f64() / ratio)
    }

    /// Apply `f` to every channel.
    #[inline]
    pub fn map(self, f: impl Fn(R::Number) -> R::Number) -> Self {
        Self::from(self.channels.map(f))
    }

    #[inline]
    pub(crate) fn zip_with(
        self,
        other: Self,
        f: impl Fn(R::Number, R::Number) -> R::Number,
    ) -> Self {
        let [a, b, c] = self.channels;
        let [x, y, z] = other.channels;
        Self::new(f(a, x), f(b, y), f(c, z))
    }
}

impl<R: Range> Default for ColorValue<R> {
    /// Black.
    fn default() -> Self {
        Self::splat(R::Number::ZERO)
    }
}

impl<R: Range> From<[R::Number; 3]> for ColorValue<R> {
    #[inline]
    fn from([r, g, b]: [R::Number; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl<R: Range> TryFrom<&[R::Number]> for ColorValue<R> {
    type Error = ColorError;

    fn try_from(values: &[R::Number]) -> Result<Self, Self::Error> {
        Self::from_sequence(values)
    }
}

impl<R: Range> PartialEq for ColorValue<R> {
    fn eq(&self, other: &Self) -> bool {
        self.channels == other.channels
    }
}

impl<R: Range> PartialOrd for ColorValue<R> {
    /// Lexicographic on `(r, g, b)`: red decides, then green, then blue.
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.channels.partial_cmp(&other.channels)
    }
}

impl<R: Range> fmt::Debug for ColorValue<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.channels;
        write!(f, "ColorValue<{}>({r:?}, {g:?}, {b:?})", R::NAME)
    }
}

impl<R: Range> Index<usize> for ColorValue<R> {
    type Output = R::Number;

    /// # Panics
    /// Panics if `index > 2`; use [`ColorValue::get`] for checked,
    /// wrapping access.
    fn index(&self, index: usize) -> &Self::Output {
        &self.channels[index]
    }
}

impl<R: Range> IntoIterator for ColorValue<R> {
    type Item = R::Number;
    type IntoIter = std::array::IntoIter<R::Number, 3>;

    fn into_iter(self) -> Self::IntoIter {
        self.channels.into_iter()
    }
}

impl<'a, R: Range> IntoIterator for &'a ColorValue<R> {
    type Item = &'a R::Number;
    type IntoIter = std::slice::Iter<'a, R::Number>;

    fn into_iter(self) -> Self::IntoIter {
        self.channels.iter()
    }
}
