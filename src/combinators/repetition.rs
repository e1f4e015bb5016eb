//! `maybe`, `once`, `at_least_once`, `many`, `until`, `take`, `concat`: the
//! sequence combinators. Termination and non-consumption-on-failure are the
//! subtle bits here — see the state machine described on `many`.

use crate::diagnostic::Diagnostic;
use crate::outcome::ParseOutcome;
use crate::parser::Parser;
use crate::stream::TokenStream;

use super::choice::{except, otherwise};
use super::sequencing::{select, then, then_discard};

/// `select(p, v => vec![v])`.
pub fn once<V, T>(p: Parser<V, T>) -> Parser<Vec<V>, T>
where
    V: Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    select(p, |v| vec![v])
}

/// `otherwise(once(p), succeed([]))`. Always succeeds; on failure of `p`
/// the diagnostics of the failed attempt are dropped, because the absence
/// is legitimate — this falls out of [`ParseOutcome::or`]'s rule that a
/// successful second alternative wins outright, discarding the first's
/// diagnostics.
pub fn maybe<V, T>(p: Parser<V, T>) -> Parser<Vec<V>, T>
where
    V: Clone + Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    otherwise(once(p), crate::primitives::succeed(Vec::new(), None))
}

/// Repeatedly applies `p`, collecting successful values, until it fails.
/// Always succeeds.
///
/// Implements the `{Accumulating, Stopped}` state machine: a success that
/// advances the remainder keeps accumulating; a success that leaves the
/// remainder unchanged (a zero-consumption success) is collected once and
/// then the loop stops, guaranteeing termination; a failure stops the loop
/// and its diagnostics are discarded (only successful iterations'
/// messages/expectations are merged into the result).
pub fn many<V, T>(p: Parser<V, T>) -> Parser<Vec<V>, T>
where
    V: Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    Parser::new(move |input: &TokenStream<T>| {
        let mut values = Vec::new();
        let mut messages = Vec::new();
        let mut expectations: Vec<String> = Vec::new();
        let mut remainder = input.clone();

        loop {
            let outcome = p.parse(&remainder);
            if !outcome.successful() {
                break;
            }

            let next_remainder = outcome.remainder().clone();
            let stalled = next_remainder == remainder;

            messages.extend(outcome.messages().iter().cloned());
            for name in outcome.expectations() {
                if !expectations.contains(name) {
                    expectations.push(name.clone());
                }
            }
            values.push(
                outcome
                    .into_value()
                    .expect("successful outcome carries a value"),
            );
            remainder = next_remainder;

            if stalled {
                break;
            }
        }

        ParseOutcome::success(values, remainder)
            .with_messages(messages)
            .with_expectations(expectations)
    })
}

/// `once(p) then (first => many(p) select (rest => first ++ rest))`.
/// Fails iff the first invocation fails, preserving its diagnostics and
/// its (unchanged) remainder.
pub fn at_least_once<V, T>(p: Parser<V, T>) -> Parser<Vec<V>, T>
where
    V: Clone + Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    let rest_source = p.clone();
    then(once(p), move |first: Vec<V>| {
        let rest_source = rest_source.clone();
        select(many(rest_source), move |rest: Vec<V>| {
            let mut combined = first.clone();
            combined.extend(rest);
            combined
        })
    })
}

/// `many(except(p, stop)) then_discard stop`: repeatedly applies `p` while
/// `stop` does not yet succeed, then consumes `stop`. Fails iff `stop`
/// never succeeds before input is exhausted (manifesting as a failure of
/// `p` at end of input).
pub fn until<V, S, T>(p: Parser<V, T>, stop: Parser<S, T>) -> Parser<Vec<V>, T>
where
    V: Send + Sync + 'static,
    S: Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    then_discard(many(except(p, stop.clone())), stop)
}

/// Runs `p` exactly `n` times. `n = 0` always succeeds with an empty
/// sequence. Fails as soon as any iteration fails, forwarding that
/// iteration's own message and adding the expectation
/// `"<n> repetitions of <joined>"`, where `<joined>` is `p`'s own
/// expectations at the point of failure.
pub fn take<V, T>(p: Parser<V, T>, n: usize) -> Parser<Vec<V>, T>
where
    V: Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    Parser::new(move |input: &TokenStream<T>| {
        let mut values = Vec::with_capacity(n);
        let mut messages = Vec::new();
        let mut expectations: Vec<String> = Vec::new();
        let mut remainder = input.clone();

        for _ in 0..n {
            let outcome = p.parse(&remainder);
            if !outcome.successful() {
                let joined = outcome.expectations().join(", ");
                let label = format!("{n} repetitions of {joined}");
                let mut all_messages = messages;
                all_messages.extend(outcome.messages().iter().cloned());
                let mut all_expectations = expectations;
                if !all_expectations.contains(&label) {
                    all_expectations.push(label);
                }
                return ParseOutcome::failure(outcome.remainder().clone())
                    .with_messages(all_messages)
                    .with_expectations(all_expectations);
            }

            let next_remainder = outcome.remainder().clone();
            messages.extend(outcome.messages().iter().cloned());
            for name in outcome.expectations() {
                if !expectations.contains(name) {
                    expectations.push(name.clone());
                }
            }
            values.push(
                outcome
                    .into_value()
                    .expect("successful outcome carries a value"),
            );
            remainder = next_remainder;
        }

        ParseOutcome::success(values, remainder)
            .with_messages(messages)
            .with_expectations(expectations)
    })
}

/// `then(a, xs => select(b, ys => xs ++ ys))` for sequence-typed parsers.
pub fn concat<V, T>(a: Parser<Vec<V>, T>, b: Parser<Vec<V>, T>) -> Parser<Vec<V>, T>
where
    V: Clone + Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    then(a, move |xs: Vec<V>| {
        select(b.clone(), move |ys: Vec<V>| {
            let mut combined = xs.clone();
            combined.extend(ys);
            combined
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{fail, succeed, token};

    fn stream(tokens: Vec<i32>) -> TokenStream<i32> {
        TokenStream::new(tokens)
    }

    #[test]
    fn once_wraps_a_single_value_in_a_vec() {
        let s = stream(vec![5]);
        let p = once(token(|_: &i32| true, None));
        assert_eq!(p.parse(&s).into_value(), Some(vec![5]));
    }

    #[test]
    fn maybe_always_succeeds_and_drops_messages_on_inner_failure() {
        let s = stream(vec![1]);
        let p = maybe(with_message_fail());
        let outcome = p.parse(&s);
        assert!(outcome.successful());
        assert_eq!(outcome.into_value(), Some(Vec::new()));
        assert!(outcome.messages().is_empty());
    }

    fn with_message_fail() -> Parser<i32, i32> {
        crate::combinators::sequencing::with_message(
            fail::<i32, i32>(),
            Diagnostic::error("should be dropped"),
        )
    }

    #[test]
    fn maybe_succeeds_with_inner_value_when_p_succeeds() {
        let s = stream(vec![9]);
        let p = maybe(token(|_: &i32| true, None));
        assert_eq!(p.parse(&s).into_value(), Some(vec![9]));
    }

    #[test]
    fn many_collects_until_failure() {
        let s = stream(vec![0, 0, 1, 0]);
        let p = many(token(|t: &i32| *t == 0, None));
        let outcome = p.parse(&s);
        assert!(outcome.successful());
        assert_eq!(outcome.into_value(), Some(vec![0, 0]));
        assert_eq!(outcome.remainder().position(), 2);
    }

    #[test]
    fn many_of_a_never_matching_parser_succeeds_empty_at_original_input() {
        let s = stream(vec![1, 2]);
        let p = many(token(|t: &i32| *t == 99, None));
        let outcome = p.parse(&s);
        assert!(outcome.successful());
        assert_eq!(outcome.into_value(), Some(Vec::new()));
        assert_eq!(outcome.remainder(), &s);
    }

    #[test]
    fn many_terminates_on_zero_consumption_success() {
        let s = stream(vec![1, 2]);
        // Always succeeds without consuming: must collect exactly once, then stop.
        let stalling = succeed::<i32, i32>(0, None);
        let p = many(stalling);
        let outcome = p.parse(&s);
        assert!(outcome.successful());
        assert_eq!(outcome.into_value(), Some(vec![0]));
        assert_eq!(outcome.remainder(), &s);
    }

    #[test]
    fn at_least_once_fails_iff_first_fails_preserving_original_input() {
        let s = stream(vec![1]);
        let p = at_least_once(token(|t: &i32| *t == 99, None));
        let outcome = p.parse(&s);
        assert!(!outcome.successful());
        assert_eq!(outcome.remainder(), &s);
    }

    #[test]
    fn at_least_once_collects_first_plus_subsequent_matches() {
        let s = stream(vec![0, 0, 1]);
        let p = at_least_once(token(|t: &i32| *t == 0, None));
        let outcome = p.parse(&s);
        assert_eq!(outcome.into_value(), Some(vec![0, 0]));
    }

    #[test]
    fn until_collects_the_prefix_and_consumes_the_stop_token() {
        let s = stream(vec![0, 0, 1, 0]);
        let p = until(
            token(|_: &i32| true, None),
            token(|t: &i32| *t == 1, None),
        );
        let outcome = p.parse(&s);
        assert!(outcome.successful());
        assert_eq!(outcome.into_value(), Some(vec![0, 0]));
        assert_eq!(outcome.remainder().position(), 3);
    }

    #[test]
    fn until_fails_when_stop_never_matches() {
        let s = stream(vec![0, 0]);
        let p = until(
            token(|_: &i32| true, None),
            token(|t: &i32| *t == 9, None),
        );
        assert!(!p.parse(&s).successful());
    }

    #[test]
    fn take_zero_always_succeeds_empty_at_original_input() {
        let s = stream(vec![1, 2]);
        let p = take(token(|_: &i32| true, None), 0);
        let outcome = p.parse(&s);
        assert!(outcome.successful());
        assert_eq!(outcome.into_value(), Some(Vec::new()));
        assert_eq!(outcome.remainder(), &s);
    }

    #[test]
    fn take_n_fails_with_unexpected_end_of_input_when_exhausted() {
        let s = stream(vec![0, 1, 0]);
        let p = take(token(|_: &i32| true, None), 4);
        let outcome = p.parse(&s);
        assert!(!outcome.successful());
        assert_eq!(
            outcome.messages().last().unwrap().text,
            "Unexpected end of input."
        );
    }

    #[test]
    fn take_n_succeeds_with_exactly_n_values() {
        let s = stream(vec![0, 1, 2, 3]);
        let p = take(token(|_: &i32| true, None), 3);
        let outcome = p.parse(&s);
        assert!(outcome.successful());
        assert_eq!(outcome.into_value(), Some(vec![0, 1, 2]));
        assert_eq!(outcome.remainder().position(), 3);
    }

    #[test]
    fn concat_joins_two_sequence_parsers_left_to_right() {
        let s = stream(vec![0, 0, 1]);
        let p = concat(
            once(token(|t: &i32| *t == 0, None)),
            once(token(|t: &i32| *t == 0, None)),
        );
        let outcome = p.parse(&s);
        assert_eq!(outcome.into_value(), Some(vec![0, 0]));
    }
}
