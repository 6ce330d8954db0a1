//! Build script to embed the fallback word list
//!
//! Reads `data/words.txt` and generates a Rust const array compiled into the
//! binary, so the game can always pick a goal word without touching the
//! network or the filesystem.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    let content =
        fs::read_to_string("data/words.txt").unwrap_or_else(|e| panic!("Failed to read data/words.txt: {e}"));
    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let output_path = Path::new(&out_dir).join("words.rs");
    let mut output = fs::File::create(&output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word list").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Fallback goal words embedded at build time").unwrap();
    writeln!(output, "pub const WORDS: &[&str] = &[").unwrap();
    for word in &words {
        writeln!(output, "    \"{word}\",").unwrap();
    }
    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in WORDS").unwrap();
    writeln!(output, "pub const WORDS_COUNT: usize = {};", words.len()).unwrap();

    println!("cargo:rerun-if-changed=data/words.txt");
}
