//! Channel storage kinds and full-scale ranges.
//!
//! A [`Range`] fixes, at compile time, how a color stores its channels and
//! what value counts as "full on". All instances of a variant share it.
//!
//! | Variant | Storage | Ratio |
//! |---------|---------|-------|
//! | [`Normal`] | `f32` (default) or `f64` | 1 |
//! | [`EightBit`] | `f32` (default) or `f64` | 255 |
//!
//! The byte variant still stores floats: scaling a byte color by 0.5 must
//! give 127.5, not a truncated integer.

use std::fmt::{Debug, Display};
use std::marker::PhantomData;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// A floating point channel type, usable as `f32` or `f64`.
pub trait Number:
    Copy
    + Default
    + PartialOrd
    + Debug
    + Display
    + FromStr
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Serialize
    + DeserializeOwned
    + Send
    + Sync
    + 'static
{
    const ZERO: Self;
    const ONE: Self;
    /// The largest 8-bit channel value, 255
    const FULL_BYTE: Self;

    fn from_f64(x: f64) -> Self;
    fn to_f64(self) -> f64;
    fn abs(self) -> Self;
    fn sqrt(self) -> Self;
}

impl Number for f32 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const FULL_BYTE: Self = 255.0;

    #[inline]
    fn from_f64(x: f64) -> Self {
        x as f32
    }
    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }
    #[inline]
    fn abs(self) -> Self {
        f32::abs(self)
    }
    #[inline]
    fn sqrt(self) -> Self {
        f32::sqrt(self)
    }
}

impl Number for f64 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const FULL_BYTE: Self = 255.0;

    #[inline]
    fn from_f64(x: f64) -> Self {
        x
    }
    #[inline]
    fn to_f64(self) -> f64 {
        self
    }
    #[inline]
    fn abs(self) -> Self {
        f64::abs(self)
    }
    #[inline]
    fn sqrt(self) -> Self {
        f64::sqrt(self)
    }
}

/// Compile-time description of a color variant.
pub trait Range: Copy + Debug + Default + PartialEq + Send + Sync + 'static {
    type Number: Number;

    /// Full-scale channel value
    const RATIO: Self::Number;

    /// Short variant name, used in logs and the CLI
    const NAME: &'static str;
}

/// Unit range: channels run from 0 to 1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Normal<T = f32>(PhantomData<T>);

/// Byte range: channels run from 0 to 255.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct EightBit<T = f32>(PhantomData<T>);

impl<T: Number> Range for Normal<T> {
    type Number = T;
    const RATIO: T = T::ONE;
    const NAME: &'static str = "unit";
}

impl<T: Number> Range for EightBit<T> {
    type Number = T;
    const RATIO: T = T::FULL_BYTE;
    const NAME: &'static str = "byte";
}

/// Clamp a value between two bounds.
#[inline]
pub(crate) fn clamp<T: PartialOrd>(x: T, lo: T, hi: T) -> T {
    if x < lo {
        lo
    } else if x > hi {
        hi
    } else {
        x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratios() {
        assert_eq!(<Normal as Range>::RATIO, 1.0f32);
        assert_eq!(<EightBit as Range>::RATIO, 255.0f32);
        assert_eq!(<Normal<f64> as Range>::RATIO, 1.0f64);
        assert_eq!(<EightBit<f64> as Range>::RATIO, 255.0f64);
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(-3.0, 0.0, 1.0), 0.0);
        assert_eq!(clamp(5.0, 0.0, 1.0), 1.0);
        assert_eq!(clamp(0.25, 0.0, 1.0), 0.25);
    }
}
