//! Config documents shared by the integration tests.

/// Byte base, a doubled fade range and two aliases
pub const SHOW_CONFIG: &str = r##"
base: byte
fade:
  begin: 0
  end: 2
  steps: 3
aliases:
  Blackout: black
  wash: "#F0F8FF"
"##;

/// An alias pointing at something that is not a color
pub const BROKEN_ALIAS_CONFIG: &str = r##"
aliases:
  mystery: blurple
"##;

/// Not a mapping at all
pub const MALFORMED_CONFIG: &str = "base: [unit, byte";
