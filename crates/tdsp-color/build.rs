use std::collections::BTreeMap;
use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

const CATALOGUE: &str = "data/colors.txt";

/// Parse one `RRGGBB name` line into a name and its packed 0xRRGGBB value.
fn parse_line(line: &str, lineno: usize) -> (String, u32) {
    let (hex, name) = line
        .split_once(char::is_whitespace)
        .unwrap_or_else(|| panic!("{CATALOGUE}:{lineno}: expected `RRGGBB name`"));

    assert_eq!(hex.len(), 6, "{CATALOGUE}:{lineno}: bad hex {hex:?}");
    let value = u32::from_str_radix(hex, 16)
        .unwrap_or_else(|e| panic!("{CATALOGUE}:{lineno}: bad hex {hex:?}: {e}"));

    // Names are stored canonicalized: lowercase words joined by single spaces
    let name = name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();
    assert!(!name.is_empty(), "{CATALOGUE}:{lineno}: empty name");

    (name, value)
}

fn main() {
    let source = fs::read_to_string(CATALOGUE).unwrap();

    // BTreeMap gives the lexicographic order the table is searched in
    let mut entries = BTreeMap::new();
    for (i, line) in source.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let (name, value) = parse_line(line, i + 1);
        if entries.insert(name.clone(), value).is_some() {
            panic!("{CATALOGUE}:{}: duplicate color name {name:?}", i + 1);
        }
    }

    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("color_table.rs");
    let mut file = File::create(&dest_path).unwrap();

    writeln!(file, "/// Named colors sorted by name, as (name, 0xRRGGBB)").unwrap();
    writeln!(
        file,
        "pub static COLOR_TABLE: [(&str, u32); {}] = [",
        entries.len()
    )
    .unwrap();
    for (name, value) in &entries {
        writeln!(file, "    ({name:?}, 0x{value:06X}),").unwrap();
    }
    writeln!(file, "];").unwrap();

    println!("cargo::rerun-if-changed={CATALOGUE}");
    println!("cargo::rerun-if-changed=build.rs");
}
