//! Serde support
//!
//! Colors serialize as an `[r, g, b]` sequence. They deserialize from either
//! a sequence or any string [`str::parse`] accepts, so configuration files can
//! say `red` or `[1.0, 0.0, 0.0]`.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

use super::ColorValue;
use crate::range::Range;

#[derive(Deserialize)]
#[serde(untagged)]
enum Repr<N> {
    Text(String),
    Components(Vec<N>),
}

impl<R: Range> Serialize for ColorValue<R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.channels.serialize(serializer)
    }
}

impl<'de, R: Range> Deserialize<'de> for ColorValue<R> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Repr::<R::Number>::deserialize(deserializer)? {
            Repr::Text(text) => text.parse().map_err(de::Error::custom),
            Repr::Components(values) => Self::from_sequence(&values).map_err(de::Error::custom),
        }
    }
}
