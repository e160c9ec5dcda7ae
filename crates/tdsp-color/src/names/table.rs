//! Embedded color catalogue.
//!
//! Generated at compile time by build.rs from `data/colors.txt`; entries are
//! sorted by name and names are unique.

include!(concat!(env!("OUT_DIR"), "/color_table.rs"));
