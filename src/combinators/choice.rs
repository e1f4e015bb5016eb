//! `otherwise`, `not_`, and `except`: backtracking choice.

use crate::diagnostic::Diagnostic;
use crate::outcome::ParseOutcome;
use crate::parser::Parser;
use crate::stream::TokenStream;

/// First-wins choice with a tie-break merge. If `first` succeeds, returns
/// it. Otherwise runs `second` on the *original* input (both alternatives
/// see the same starting point) and combines the two failures with
/// [`ParseOutcome::or`]: whichever consumed more wins outright; an exact
/// tie merges both sets of diagnostics.
pub fn otherwise<V, T>(first: Parser<V, T>, second: Parser<V, T>) -> Parser<V, T>
where
    V: Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    Parser::new(move |input| {
        let a = first.parse(input);
        if a.successful() {
            return a;
        }
        let b = second.parse(input);
        a.or(b)
    })
}

/// Negative lookahead. Succeeds with `()` at the original input iff `p`
/// fails; fails at the original input (never consuming) iff `p` succeeds.
pub fn not_<V, T>(p: Parser<V, T>) -> Parser<(), T>
where
    V: Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    Parser::new(move |input| {
        let outcome = p.parse(input);
        if outcome.successful() {
            let joined = outcome.expectations().join(", ");
            let message = if joined.is_empty() {
                "Unexpected token.".to_string()
            } else {
                format!("Unexpected {joined}.")
            };
            ParseOutcome::failure(input.clone()).with_message(Diagnostic::error(message))
        } else {
            ParseOutcome::success((), input.clone())
        }
    })
}

/// Runs `p` only if `e` does not succeed at the current input. If `e`
/// succeeds, the whole parser fails with exactly the message
/// `"Parser should not have succeeded."` — `not_`'s own generic
/// `"Unexpected <joined>."` diagnostic is not part of the reported failure,
/// only this one.
pub fn except<V, E, T>(p: Parser<V, T>, e: Parser<E, T>) -> Parser<V, T>
where
    V: Send + Sync + 'static,
    E: Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    Parser::new(move |input: &TokenStream<T>| {
        if e.parse(input).successful() {
            return ParseOutcome::failure(input.clone())
                .with_message(Diagnostic::error("Parser should not have succeeded."));
        }
        p.parse(input)
    })
}
