//! Shows the `otherwise` tie-break in action: whichever branch consumed
//! more tokens before failing wins the diagnostic, rendered through
//! `miette`.
//!
//! Run with `cargo run --example diagnostics_demo`.

use combinator_core::diagnostic::{Diagnostic, render};
use combinator_core::lexer::{Token, TokenKind, tokenize};
use combinator_core::{TokenStream, named, otherwise, then_discard, token, with_message};

fn kind(k: TokenKind) -> impl Fn(&Token) -> bool {
    move |t: &Token| t.kind == k
}

fn main() {
    let source = "let x 5";
    let lexed = tokenize(source);
    let stream = TokenStream::new(lexed.tokens);

    // Branch A expects `let <identifier> = ...` and fails at the missing
    // `=`, having consumed two tokens (`let`, `x`).
    let branch_a = with_message(
        then_discard(
            then_discard(
                token(kind(TokenKind::Let), Some("let")),
                token(kind(TokenKind::Identifier), Some("identifier")),
            ),
            token(kind(TokenKind::Eq), Some("'='")),
        ),
        Diagnostic::error("expected '=' after the binding name"),
    );

    // Branch B expects a bare integer literal and fails immediately, at
    // `let`, having consumed nothing.
    let branch_b = named(token(kind(TokenKind::Integer), None), "integer");

    let attempt = otherwise(branch_a, branch_b);
    let outcome = attempt.parse(&stream);

    assert!(!outcome.successful(), "`let x 5` should not match either branch");
    // Branch A consumed more before failing, so its diagnostic wins.
    let report = render(source, outcome.messages()).expect("a failing outcome carries messages");
    println!("{report:?}");
}
