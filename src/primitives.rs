//! The four primitive parser constructors everything else is built from.

use std::fmt;

use crate::diagnostic::Diagnostic;
use crate::outcome::ParseOutcome;
use crate::parser::Parser;
use crate::stream::TokenStream;

/// A parser that always succeeds with `value`, without consuming input.
///
/// If `name` is given, it is recorded as an expectation on the resulting
/// outcome (the source attaches it even on a construct that cannot fail;
/// see spec Open Questions — this crate follows the source and emits it).
pub fn succeed<V, T>(value: V, name: Option<&str>) -> Parser<V, T>
where
    V: Clone + Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    let name = name.map(str::to_owned);
    Parser::new(move |input| {
        let outcome = ParseOutcome::success(value.clone(), input.clone());
        match &name {
            Some(n) => outcome.with_expectation(n.clone()),
            None => outcome,
        }
    })
}

/// A parser that always fails, without consuming input and without any
/// diagnostics of its own — callers attach those with `with_message`.
pub fn fail<V, T>() -> Parser<V, T>
where
    V: Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    Parser::new(|input| ParseOutcome::failure(input.clone()))
}

/// A parser that consumes exactly one token if `predicate` holds for it.
///
/// Fails with `"Unexpected end of input."` at end of stream, or
/// `"Unexpected token <token>."` when the predicate rejects the current
/// token. `name`, if given, is attached as an expectation in every branch.
pub fn token<T, F>(predicate: F, name: Option<&str>) -> Parser<T, T>
where
    T: Clone + fmt::Display + Send + Sync + 'static,
    F: Fn(&T) -> bool + Send + Sync + 'static,
{
    let name = name.map(str::to_owned);
    Parser::new(move |input: &TokenStream<T>| {
        let outcome = match input.current() {
            None => ParseOutcome::failure(input.clone())
                .with_message(Diagnostic::error("Unexpected end of input.")),
            Some(current) if predicate(current) => {
                ParseOutcome::success(current.clone(), input.advance())
            }
            Some(current) => ParseOutcome::failure(input.clone())
                .with_message(Diagnostic::error(format!("Unexpected token {current}."))),
        };
        match &name {
            Some(n) => outcome.with_expectation(n.clone()),
            None => outcome,
        }
    })
}

/// A parser that succeeds with `()` iff the stream is at end, otherwise
/// fails with `"Unexpected token <token>."`. Always carries the expectation
/// `"end of input"`.
pub fn end<T>() -> Parser<(), T>
where
    T: fmt::Display + Send + Sync + 'static,
{
    Parser::new(|input: &TokenStream<T>| {
        let outcome = match input.current() {
            None => ParseOutcome::success((), input.clone()),
            Some(current) => ParseOutcome::failure(input.clone())
                .with_message(Diagnostic::error(format!("Unexpected token {current}."))),
        };
        outcome.with_expectation("end of input")
    })
}
