//! Tokenizer utility: reads lines from stdin, writes space-joined word
//! tokens to stdout. Pass-through wrapper over Unicode word segmentation;
//! not used by the evaluation pipelines.

use std::io::{self, BufRead, Write};
use unicode_segmentation::UnicodeSegmentation;

fn main() -> anyhow::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in stdin.lock().lines() {
        let line = line?;
        let tokens: Vec<&str> = line.unicode_words().collect();
        writeln!(out, "{}", tokens.join(" "))?;
    }
    Ok(())
}
