//! The named-color table
//!
//! A read-only catalogue mapping canonical names ("alice blue",
//! "antique white 1", ...) to RGB triples. The catalogue itself is a static
//! array embedded at build time; the lookup indexes over it are built once,
//! on first use, behind a [`OnceLock`].
//!
//! # Example
//!
//! ```
//! use tdsp_color::names::table;
//!
//! let entry = table().lookup("Alice  Blue").unwrap();
//! assert_eq!(entry.name(), "alice blue");
//! assert_eq!(entry.bytes(), [240, 248, 255]);
//! ```

mod table;

use std::collections::HashMap;
use std::sync::OnceLock;

use table::COLOR_TABLE;

/// One catalogue entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    name: &'static str,
    hex: u32,
}

impl Entry {
    /// Canonical name of this entry
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Packed `0xRRGGBB` value
    pub fn hex(&self) -> u32 {
        self.hex
    }

    /// The triple as 8-bit channels.
    pub fn bytes(&self) -> [u8; 3] {
        hex_to_bytes(self.hex)
    }

    /// The triple in the normalized 0..1 domain.
    pub fn triple(&self) -> [f64; 3] {
        self.bytes().map(|b| b as f64 / 255.0)
    }
}

impl From<(&'static str, u32)> for Entry {
    fn from((name, hex): (&'static str, u32)) -> Self {
        Self { name, hex }
    }
}

/// Split a packed `0xRRGGBB` value into its channel bytes.
pub fn hex_to_bytes(hex: u32) -> [u8; 3] {
    [(hex >> 16) as u8, (hex >> 8) as u8, hex as u8]
}

/// Pack channel bytes into `0xRRGGBB`.
pub fn bytes_to_hex([r, g, b]: [u8; 3]) -> u32 {
    (r as u32) << 16 | (g as u32) << 8 | b as u32
}

/// Lowercase a name and collapse its whitespace to single spaces.
pub fn canonicalize(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Process-wide index over the embedded catalogue.
#[derive(Debug)]
pub struct NamedColorTable {
    entries: &'static [(&'static str, u32)],
    /// Triple -> lexicographically first name carrying it
    canonical: HashMap<u32, &'static str>,
    /// Name with all spaces removed -> table index, for "AliceBlue" spellings
    compact: HashMap<String, usize>,
}

static TABLE: OnceLock<NamedColorTable> = OnceLock::new();

/// The shared table, built on first call.
pub fn table() -> &'static NamedColorTable {
    TABLE.get_or_init(|| NamedColorTable::build(&COLOR_TABLE))
}

impl NamedColorTable {
    fn build(entries: &'static [(&'static str, u32)]) -> Self {
        let mut canonical = HashMap::with_capacity(entries.len());
        let mut compact = HashMap::with_capacity(entries.len());

        for (i, &(name, hex)) in entries.iter().enumerate() {
            // Entries are sorted, so the first name seen for a triple wins
            canonical.entry(hex).or_insert(name);
            compact.insert(name.replace(' ', ""), i);
        }

        tracing::debug!(
            entries = entries.len(),
            distinct = canonical.len(),
            "Built named color index"
        );

        Self {
            entries,
            canonical,
            compact,
        }
    }

    /// Number of named colors.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All names in lexicographic order.
    pub fn names(&self) -> impl ExactSizeIterator<Item = &'static str> {
        let entries = self.entries;
        entries.iter().map(|&(name, _)| name)
    }

    /// All entries in name order.
    pub fn entries(&self) -> impl ExactSizeIterator<Item = Entry> {
        let entries = self.entries;
        entries.iter().map(|&e| Entry::from(e))
    }

    /// Find a color by name.
    ///
    /// Matching ignores case and extra whitespace. A name written as a
    /// single word ("AliceBlue", "DarkSlateGray4") also matches; spaces in
    /// other places do not ("r ed" is unknown).
    pub fn lookup(&self, name: &str) -> Option<Entry> {
        let key = canonicalize(name);
        let index = match self
            .entries
            .binary_search_by(|&(n, _)| n.cmp(key.as_str()))
        {
            Ok(i) => i,
            Err(_) if !key.contains(' ') => *self.compact.get(&key)?,
            Err(_) => return None,
        };
        Some(Entry::from(self.entries[index]))
    }

    /// Canonical name of an exact `0xRRGGBB` triple, if one is registered.
    pub fn lookup_hex(&self, hex: u32) -> Option<&'static str> {
        self.canonical.get(&hex).copied()
    }

    /// Nearest entry to a normalized triple, and the deviation
    /// `triple - entry` per channel.
    ///
    /// Distance is squared Euclidean in the 0..1 domain. Ties resolve to the
    /// lexicographically first name.
    pub fn nearest(&self, triple: [f64; 3]) -> (Entry, [f64; 3]) {
        let mut best = Entry::from(self.entries[0]);
        let mut best_distance = f64::INFINITY;

        for entry in self.entries() {
            let reference = entry.triple();
            let distance: f64 = (0..3).map(|i| (triple[i] - reference[i]).powi(2)).sum();
            // Strict comparison keeps the earlier name on ties
            if distance < best_distance {
                best = entry;
                best_distance = distance;
            }
        }

        let reference = best.triple();
        let deviation = [0, 1, 2].map(|i| triple[i] - reference[i]);
        (best, deviation)
    }
}
