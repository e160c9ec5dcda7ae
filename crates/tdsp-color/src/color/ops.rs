//! Arithmetic on colors
//!
//! Everything is elementwise and unclamped. Color-by-color products are not
//! rescaled by the ratio: for byte colors, divide by 255 afterwards to stay
//! in range.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Not, Sub, SubAssign};

use super::ColorValue;
use crate::range::Range;

impl<R: Range> Add for ColorValue<R> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl<R: Range> Sub for ColorValue<R> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl<R: Range> Mul for ColorValue<R> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a * b)
    }
}

impl<R: Range> Neg for ColorValue<R> {
    type Output = Self;

    /// Mathematical negation; the result is out of gamut.
    fn neg(self) -> Self {
        self.map(|c| -c)
    }
}

impl<R: Range> Not for ColorValue<R> {
    type Output = Self;

    /// Complement: `ratio - channel`, so `!white == black`.
    ///
    /// Applying it twice gives back the original only up to float rounding:
    /// in `f32`, `1 - (1 - 0.1)` is not `0.1`.
    fn not(self) -> Self {
        self.map(|c| R::RATIO - c)
    }
}

impl<R: Range> AddAssign for ColorValue<R> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<R: Range> SubAssign for ColorValue<R> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<R: Range> MulAssign for ColorValue<R> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

// Scalar impls are per concrete channel type; a blanket `Mul<R::Number>`
// would overlap with `Mul<ColorValue<R>>` under coherence.
macro_rules! scalar_ops {
    ($($t:ty),*) => {$(
        impl<R: Range<Number = $t>> Mul<$t> for ColorValue<R> {
            type Output = Self;

            fn mul(self, rhs: $t) -> Self {
                self.map(|c| c * rhs)
            }
        }

        impl<R: Range<Number = $t>> Mul<ColorValue<R>> for $t {
            type Output = ColorValue<R>;

            fn mul(self, rhs: ColorValue<R>) -> ColorValue<R> {
                rhs * self
            }
        }

        impl<R: Range<Number = $t>> Div<$t> for ColorValue<R> {
            type Output = Self;

            fn div(self, rhs: $t) -> Self {
                self.map(|c| c / rhs)
            }
        }

        impl<R: Range<Number = $t>> MulAssign<$t> for ColorValue<R> {
            fn mul_assign(&mut self, rhs: $t) {
                *self = *self * rhs;
            }
        }

        impl<R: Range<Number = $t>> DivAssign<$t> for ColorValue<R> {
            fn div_assign(&mut self, rhs: $t) {
                *self = *self / rhs;
            }
        }
    )*};
}

scalar_ops!(f32, f64);

#[cfg(test)]
mod tests {
    use crate::{Color, Color256, Color64};
    use pretty_assertions::assert_eq;

    const PRIMARIES: [&str; 8] = [
        "black", "red", "green", "blue", "white", "yellow", "cyan", "magenta",
    ];

    fn palette() -> [Color; 8] {
        PRIMARIES.map(|name| Color::from_name(name).unwrap())
    }

    fn palette256() -> [Color256; 8] {
        PRIMARIES.map(|name| Color256::from_name(name).unwrap())
    }

    #[test]
    fn test_additive_identities() {
        let [black, red, green, blue, white, yellow, cyan, magenta] = palette();

        assert_eq!(red + green + blue, white);
        assert_eq!(red + green, yellow);
        assert_eq!(green + blue, cyan);
        assert_eq!(red + blue, magenta);

        assert_eq!(white - blue, yellow);
        assert_eq!(white - green, magenta);
        assert_eq!(white - red, cyan);

        assert_eq!(!white, black);
        assert_eq!(!black, white);

        assert_eq!(white * red, red);
        assert_eq!(white * cyan, cyan);
    }

    #[test]
    fn test_additive_identities_byte_range() {
        let [black, red, green, blue, white, yellow, cyan, magenta] = palette256();

        assert_eq!(red + green + blue, white);
        assert_eq!(red + green, yellow);
        assert_eq!(green + blue, cyan);
        assert_eq!(red + blue, magenta);

        assert_eq!(white - blue, yellow);
        assert_eq!(white - green, magenta);
        assert_eq!(white - red, cyan);

        assert_eq!(!white, black);
        assert_eq!(!black, white);

        // Products of byte colors must be brought back into range explicitly
        assert_eq!(white * red / 255.0, red);
        assert_eq!(white * cyan / 255.0, cyan);
    }

    #[test]
    fn test_negation() {
        let [_, red, ..] = palette();
        let antired = Color::new(-1.0, 0.0, 0.0);
        assert_eq!(-red, antired);
        assert_eq!(antired + red, Color::default());
        assert_eq!(-(-red), red);
    }

    #[test]
    fn test_complement_is_involution() {
        // Dyadic values survive both subtractions exactly
        for c in [
            Color::new(0.25, -1.0, 3.0),
            Color::new(0.5, 0.125, 0.75),
            Color::default(),
        ] {
            assert_eq!(!!c, c);
        }

        let rounded = !!Color::new(0.1, 0.2, 0.3);
        for (x, y) in rounded.iter().zip([0.1, 0.2, 0.3]) {
            assert!((x - y).abs() < 1e-6, "{x} vs {y}");
        }
        let c = Color256::new(12.0, 200.0, 255.0);
        assert_eq!(!c, Color256::new(243.0, 55.0, 0.0));
        assert_eq!(!!c, c);
    }

    #[test]
    fn test_scalar_ops() {
        let c = Color::new(0.5, 1.0, -2.0);
        assert_eq!(c * 2.0, Color::new(1.0, 2.0, -4.0));
        assert_eq!(2.0 * c, c * 2.0);
        assert_eq!(c / 2.0, Color::new(0.25, 0.5, -1.0));

        let wide = Color64::new(0.5, 1.0, -2.0);
        assert_eq!(wide * 2.0, Color64::new(1.0, 2.0, -4.0));
    }

    #[test]
    fn test_assign_ops() {
        let [_, red, green, blue, white, ..] = palette();
        let mut c = red;
        c += green;
        c += blue;
        assert_eq!(c, white);
        c -= green;
        assert_eq!(c, red + blue);
        c *= 0.5;
        assert_eq!(c, Color::new(0.5, 0.0, 0.5));
        c /= 0.5;
        assert_eq!(c, red + blue);
        c *= red;
        assert_eq!(c, red);
    }

    #[test]
    fn test_operators_do_not_mutate() {
        let [_, red, green, ..] = palette();
        let sum = red + green;
        assert_eq!(red, Color::new(1.0, 0.0, 0.0));
        assert_eq!(green, Color::new(0.0, 1.0, 0.0));
        assert_eq!(sum, Color::new(1.0, 1.0, 0.0));
    }
}
