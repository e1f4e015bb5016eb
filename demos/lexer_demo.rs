//! Tokenizes a snippet and prints each token's kind, text, and span.
//!
//! Run with `cargo run --example lexer_demo`.

use combinator_core::lexer::tokenize;

fn main() {
    let source = "let total = 1 + 2 // running total\nlet ok = true";
    let result = tokenize(source);

    for token in &result.tokens {
        println!(
            "{:<14} {:<10} {}",
            format!("{:?}", token.kind),
            format!("{:?}", token.text),
            token.span
        );
    }

    for diagnostic in &result.diagnostics {
        eprintln!("{diagnostic}");
    }
}
