//! Converting colors to and from strings
//!
//! # Display
//!
//! A color prints as the name of the table entry it exactly matches
//! (`"red"`, `"alice blue"`). When several names share a triple, the
//! lexicographically first one is used (`"aqua"`, never `"cyan"`).
//!
//! A color that matches no entry prints as its nearest entry followed by the
//! per-channel deviation from it, in the color's own units, with explicit
//! signs: `Color256::new(127.5, 0.0, 0.0)` prints `"web maroon[-0.5,+0,+0]"`.
//! Deviations are written as the shortest text that round-trips the float.
//!
//! Negative channels are handled first: the magnitude is formatted as above
//! and a three-character sign suffix follows, `-` for a negative channel and
//! `+` otherwise. Negated white is `"white---"`; `(-1, 0, 0)` is `"red-++"`.
//!
//! # Parsing
//!
//! [`str::parse`] accepts everything `Display` produces, plus:
//!
//! - `#RRGGBB`, `#RGB` and `0xRRGGBB` hex
//! - `gray N` / `grey N`: a grey at N percent
//! - `r, g, b`: raw channels in the color's own units
//!
//! Case and repeated whitespace are ignored.

use std::fmt::{self, Write};
use std::str::FromStr;

use crate::color::ColorValue;
use crate::error::ColorError;
use crate::names::{bytes_to_hex, canonicalize, table};
use crate::range::{Number, Range};

impl<R: Range> ColorValue<R> {
    /// Canonical name of this exact value, if it is a scaled table triple.
    pub fn exact_name(self) -> Option<&'static str> {
        let ratio = R::RATIO.to_f64();
        let mut bytes = [0u8; 3];
        for (byte, channel) in bytes.iter_mut().zip(self.channels()) {
            let scaled = (channel.to_f64() / ratio * 255.0).round();
            if !(0.0..=255.0).contains(&scaled) {
                return None;
            }
            *byte = scaled as u8;
        }

        // Rounding found the candidate; only an identical value counts
        if Self::from_bytes(bytes) != self {
            return None;
        }
        table().lookup_hex(bytes_to_hex(bytes))
    }

    /// Nearest table name and this value's deviation from it, in this
    /// variant's units.
    pub fn nearest_name(self) -> (&'static str, Self) {
        let (entry, _) = table().nearest(self.to_unit_triple());
        (entry.name(), self - Self::from_bytes(entry.bytes()))
    }
}

impl<R: Range> fmt::Display for ColorValue<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let negative = self.channels().map(|c| c < R::Number::ZERO);
        let magnitude = self.abs();

        match magnitude.exact_name() {
            Some(name) => f.write_str(name)?,
            None => {
                let (entry, _) = table().nearest(magnitude.to_unit_triple());
                tracing::trace!(color = ?self, nearest = entry.name(), "No exact color name");
                let reference = Self::from_bytes(entry.bytes());
                let deviation: Vec<String> = reference
                    .iter()
                    .zip(magnitude)
                    .map(|(base, value)| deviation_text(base, value))
                    .collect();
                write!(f, "{}[{}]", entry.name(), deviation.join(","))?;
            }
        }

        if negative.contains(&true) {
            for n in negative {
                f.write_char(if n { '-' } else { '+' })?;
            }
        }
        Ok(())
    }
}

/// Signed text for `value - base` that parses back to exactly `value`.
///
/// Parsing adds the deviation to the base in `f64` and narrows the sum, so
/// the shortest text of the narrowed difference is tried first, then the
/// `f64` difference and its two neighbours.
fn deviation_text<N: Number>(base: N, value: N) -> String {
    let base_f64 = base.to_f64();
    let exact = value.to_f64() - base_f64;
    let restores = |text: &str| {
        text.parse::<f64>()
            .is_ok_and(|d| N::from_f64(base_f64 + d) == value)
    };

    let short = format!("{:+}", N::from_f64(exact));
    if restores(&short) {
        return short;
    }
    [exact, next_f64(exact, true), next_f64(exact, false)]
        .map(|d| format!("{d:+}"))
        .into_iter()
        .find(|text| restores(text))
        .unwrap_or_else(|| format!("{exact:+}"))
}

/// Adjacent `f64` above (`up`) or below `x`.
fn next_f64(x: f64, up: bool) -> f64 {
    if !x.is_finite() {
        return x;
    }
    if x == 0.0 {
        let tiny = f64::from_bits(1);
        return if up { tiny } else { -tiny };
    }
    let bits = x.to_bits();
    f64::from_bits(if (x > 0.0) == up { bits + 1 } else { bits - 1 })
}

impl<R: Range> FromStr for ColorValue<R> {
    type Err = ColorError;

    /// Parse any of the forms listed in the [module docs](self).
    ///
    /// # Examples
    ///
    /// ```
    /// use tdsp_color::Color;
    ///
    /// let antired: Color = "red-++".parse().unwrap();
    /// assert_eq!(antired, Color::new(-1.0, 0.0, 0.0));
    ///
    /// let gray: Color = "gray 50".parse().unwrap();
    /// assert_eq!(gray, Color::splat(0.5));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s).ok_or_else(|| ColorError::UnknownColorName(s.to_string()))
    }
}

fn parse<R: Range>(input: &str) -> Option<ColorValue<R>> {
    let text = canonicalize(input);

    let body = text.trim_end_matches(['+', '-']);
    let negate = match text[body.len()..].as_bytes() {
        [] => [false; 3],
        &[r, g, b] => [r, g, b].map(|sign| sign == b'-'),
        _ => return None,
    };

    let body = body.trim_end();
    if body.is_empty() {
        return None;
    }

    let mut channels = parse_with_deviation::<R>(body)?.channels();
    for (channel, negate) in channels.iter_mut().zip(negate) {
        if negate {
            *channel = -*channel;
        }
    }
    Some(ColorValue::from(channels))
}

/// `base` or `base[dr,dg,db]`.
fn parse_with_deviation<R: Range>(body: &str) -> Option<ColorValue<R>> {
    let Some(inner) = body.strip_suffix(']') else {
        return parse_base(body);
    };
    let (base, deviation) = inner.rsplit_once('[')?;
    let base = parse_base::<R>(base.trim_end())?;
    let deviation = parse_triple(deviation)?;

    let mut channels = base.channels();
    for (channel, d) in channels.iter_mut().zip(deviation) {
        *channel = R::Number::from_f64(channel.to_f64() + d);
    }
    Some(ColorValue::from(channels))
}

fn parse_base<R: Range>(text: &str) -> Option<ColorValue<R>> {
    if let Some(entry) = table().lookup(text) {
        return Some(ColorValue::from_bytes(entry.bytes()));
    }

    if let Some(digits) = text.strip_prefix('#').or_else(|| text.strip_prefix("0x")) {
        return parse_hex(digits);
    }

    if let Some(level) = text
        .strip_prefix("gray ")
        .or_else(|| text.strip_prefix("grey "))
    {
        let percent: f64 = level.trim().parse().ok()?;
        let level = R::Number::from_f64(percent / 100.0 * R::RATIO.to_f64());
        return Some(ColorValue::splat(level));
    }

    parse_components(text)
}

fn parse_hex<R: Range>(digits: &str) -> Option<ColorValue<R>> {
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let hex = u32::from_str_radix(digits, 16).ok()?;

    match digits.len() {
        6 => Some(ColorValue::from_hex(hex)),
        // Shorthand: each digit is doubled, 0xF -> 0xFF
        3 => {
            let expand = |nibble: u32| (nibble & 0xF) * 0x11;
            Some(ColorValue::from_hex(
                expand(hex >> 8) << 16 | expand(hex >> 4) << 8 | expand(hex),
            ))
        }
        _ => None,
    }
}

/// Three comma-separated numbers.
fn parse_triple(text: &str) -> Option<[f64; 3]> {
    let values = text
        .split(',')
        .map(|part| part.trim().parse::<f64>().ok())
        .collect::<Option<Vec<_>>>()?;
    values.try_into().ok()
}

fn parse_components<R: Range>(text: &str) -> Option<ColorValue<R>> {
    parse_triple(text).map(|triple| ColorValue::from(triple.map(R::Number::from_f64)))
}

#[cfg(test)]
mod tests {
    use crate::{Color, Color256, ColorError};
    use crate::names::table;
    use pretty_assertions::assert_eq;

    fn named(name: &str) -> Color {
        Color::from_name(name).unwrap()
    }

    #[test]
    fn test_exact_names() {
        assert_eq!(Color::new(1.0, 1.0, 1.0).to_string(), "white");
        assert_eq!(Color::new(1.0, 0.0, 0.0).to_string(), "red");
        assert_eq!(Color::default().to_string(), "black");
        assert_eq!(Color256::new(255.0, 255.0, 255.0).to_string(), "white");
        assert_eq!(Color256::new(255.0, 0.0, 0.0).to_string(), "red");
        assert_eq!(Color256::new(0.0, 255.0, 255.0).to_string(), "aqua");
    }

    #[test]
    fn test_negative_channels() {
        let antired = Color::new(-1.0, 0.0, 0.0);
        assert_eq!(antired.to_string(), "red-++");
        assert_eq!(antired + named("red"), named("black"));
        assert_eq!((-named("white")).to_string(), "white---");
        assert_eq!(Color256::new(0.0, -255.0, 0.0).to_string(), "green+-+");
    }

    #[test]
    fn test_negative_zero_is_not_negative() {
        assert_eq!(Color::new(-0.0, 0.0, 1.0).to_string(), "blue");
    }

    #[test]
    fn test_deviation_marker() {
        let text = Color::new(0.5, 0.0, 0.0).to_string();
        assert!(text.starts_with("web maroon[-0.00196"), "{text}");
        assert!(text.ends_with(",+0,+0]"), "{text}");

        // Half of byte red sits between web maroon (128) and dark red (139)
        assert_eq!(Color256::new(127.5, 0.0, 0.0).to_string(), "web maroon[-0.5,+0,+0]");
        assert_eq!(
            Color256::new(255.0, 0.0, 1.0).to_string(),
            "red[+0,+0,+1]"
        );
    }

    #[test]
    fn test_deviation_with_signs() {
        assert_eq!(
            Color256::new(-127.5, 0.0, 0.0).to_string(),
            "web maroon[-0.5,+0,+0]-++"
        );
    }

    #[test]
    fn test_far_out_of_gamut() {
        // Nearest to a huge value is still white; the deviation carries the rest
        assert_eq!(
            Color256::new(1255.0, 255.0, 255.0).to_string(),
            "white[+1000,+0,+0]"
        );
    }

    #[test]
    fn test_round_trip_every_entry() {
        for entry in table().entries() {
            let color = named(entry.name());
            let [r, g, b] = entry.bytes().map(|b| b as f32 / 255.0);
            assert_eq!(color, Color::new(r, g, b), "{}", entry.name());

            let byte_color = Color256::from_name(entry.name()).unwrap();
            let [r, g, b] = entry.bytes().map(|b| b as f32);
            assert_eq!(byte_color, Color256::new(r, g, b), "{}", entry.name());

            // Aliases print as the canonical name of their triple
            let canonical = table().lookup_hex(entry.hex()).unwrap();
            assert_eq!(color.to_string(), canonical);
            assert_eq!(byte_color.to_string(), canonical);
            if canonical == entry.name() {
                assert_eq!(color.to_string(), entry.name());
            }
            assert_eq!(color.to_string().parse::<Color>(), Ok(color));
        }
    }

    #[test]
    fn test_round_trip_sweep() {
        for i in 0..=1000u16 {
            let [x, y, z] = [i, 1000 - i, (i * 7) % 1001].map(|n| n as f32 / 1000.0);

            let color = Color::new(x, y, z);
            assert_eq!(color.to_string().parse::<Color>(), Ok(color), "{color}");
            assert_eq!((-color).to_string().parse::<Color>(), Ok(-color));

            let byte_color = Color256::new(x * 255.0, y * 255.0, z * 255.0);
            assert_eq!(
                byte_color.to_string().parse::<Color256>(),
                Ok(byte_color),
                "{byte_color}"
            );
        }
    }

    #[test]
    fn test_deviation_text_is_short_when_exact() {
        assert_eq!(super::deviation_text(0.0f32, 0.001), "+0.001");
        assert_eq!(super::deviation_text(255.0f32, 254.5), "-0.5");
        assert_eq!(super::deviation_text(1.0f32, 1.0), "+0");
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("Alice Blue".parse::<Color>(), Ok(named("alice blue")));
        assert_eq!("  dark   red ".parse::<Color>(), Ok(named("dark red")));
        assert_eq!("DarkSlateGray4".parse::<Color>(), Ok(named("dark slate gray 4")));
    }

    #[test]
    fn test_parse_signs() {
        assert_eq!("red-++".parse::<Color>(), Ok(Color::new(-1.0, 0.0, 0.0)));
        assert_eq!("white---".parse::<Color>(), Ok(-named("white")));
        assert_eq!("white+++".parse::<Color>(), Ok(named("white")));
        assert!("white--".parse::<Color>().is_err());
        assert!("white----".parse::<Color>().is_err());
        assert!("---".parse::<Color>().is_err());
    }

    #[test]
    fn test_parse_deviation() {
        assert_eq!(
            "web maroon[-0.5,+0,+0]".parse::<Color256>(),
            Ok(Color256::new(127.5, 0.0, 0.0))
        );
        assert_eq!(
            "web maroon[-0.5,+0,+0]-++".parse::<Color256>(),
            Ok(Color256::new(-127.5, 0.0, 0.0))
        );
        assert!("web maroon[-0.5,+0]".parse::<Color256>().is_err());
        assert!("nothing[+1,+0,+0]".parse::<Color256>().is_err());
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!("#F0F8FF".parse::<Color>(), Ok(named("alice blue")));
        assert_eq!("0xf0f8ff".parse::<Color>(), Ok(named("alice blue")));
        assert_eq!("#f00".parse::<Color256>(), Ok(Color256::new(255.0, 0.0, 0.0)));
        assert!("#f0f8f".parse::<Color>().is_err());
        assert!("#+f0f8f".parse::<Color>().is_err());
        assert!("#ggg".parse::<Color>().is_err());
    }

    #[test]
    fn test_parse_gray_levels() {
        assert_eq!("gray 50".parse::<Color>(), Ok(Color::splat(0.5)));
        assert_eq!("grey 100".parse::<Color256>(), Ok(Color256::splat(255.0)));
        assert_eq!("gray 0".parse::<Color>(), Ok(named("black")));
        assert!("gray fifty".parse::<Color>().is_err());
        // Named greys still come from the table
        assert_eq!("gray".parse::<Color>(), Ok(named("gray")));
    }

    #[test]
    fn test_parse_components() {
        assert_eq!("1, 0.5, 0".parse::<Color>(), Ok(Color::new(1.0, 0.5, 0.0)));
        assert_eq!(
            "300,-500,1000".parse::<Color256>(),
            Ok(Color256::new(300.0, -500.0, 1000.0))
        );
        assert!("1, 0.5".parse::<Color>().is_err());
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "blurple".parse::<Color>(),
            Err(ColorError::UnknownColorName("blurple".to_string()))
        );
        assert!("".parse::<Color>().is_err());
        assert!("   ".parse::<Color>().is_err());
    }

    #[test]
    fn test_exact_name_requires_identical_value() {
        // Rounds to red's bytes but is not red
        assert_eq!(Color::new(0.999, 0.0, 0.0).exact_name(), None);
        assert_eq!(Color::new(1.0, 0.0, 0.0).exact_name(), Some("red"));
        assert_eq!(Color::new(2.0, 0.0, 0.0).exact_name(), None);
        assert_eq!(Color::new(f32::NAN, 0.0, 0.0).exact_name(), None);
    }
}
