//! Build script to embed the word lists
//!
//! Reads one word per line and generates Rust source with const slices.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_word_list(
        "data/secrets.txt",
        &Path::new(&out_dir).join("secrets.rs"),
        "SECRETS",
        "Words a round may pick as its secret",
    );

    generate_word_list(
        "data/words.txt",
        &Path::new(&out_dir).join("accepted.rs"),
        "ACCEPTED",
        "Words accepted as guesses (includes every secret)",
    );

    println!("cargo:rerun-if-changed=data/secrets.txt");
    println!("cargo:rerun-if-changed=data/words.txt");
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_ascii_uppercase)
        .collect();
    let count = words.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();
    for word in &words {
        writeln!(output, "    {word:?},").unwrap();
    }
    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
