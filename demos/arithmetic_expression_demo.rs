//! Sums a `+`-separated list of integers, built entirely from combinators
//! over the companion lexer's token stream.
//!
//! Run with `cargo run --example arithmetic_expression_demo`.

use combinator_core::lexer::{Token, TokenKind, tokenize};
use combinator_core::{TokenStream, end, many, named, select, then, then_discard, token};

fn is_integer(t: &Token) -> bool {
    matches!(t.kind, TokenKind::Integer)
}

fn is_plus(t: &Token) -> bool {
    matches!(t.kind, TokenKind::Plus)
}

fn main() {
    let source = "1 + 2 + 3 + 40";
    let lexed = tokenize(source);
    assert!(
        lexed.diagnostics.is_empty(),
        "unexpected lexer diagnostics: {:?}",
        lexed.diagnostics
    );
    let stream = TokenStream::new(lexed.tokens);

    let number = named(
        select(token(is_integer, None), |t: Token| {
            t.text.parse::<i64>().expect("lexer only emits digit runs for Integer")
        }),
        "integer",
    );

    let plus_number = then_discard(token(is_plus, Some("+")), number.clone());

    let expression = then(number, move |first: i64| {
        select(many(plus_number.clone()), move |rest: Vec<i64>| {
            first + rest.iter().sum::<i64>()
        })
    });

    let fully_consumed = then_discard(expression, end());
    let outcome = fully_consumed.parse(&stream);

    if outcome.successful() {
        println!("{source} = {}", outcome.into_value().unwrap());
    } else {
        for message in outcome.messages() {
            eprintln!("{message}");
        }
        std::process::exit(1);
    }
}
