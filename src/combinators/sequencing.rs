//! `then`, `then_discard`, `select`, `select_many`, `where_`, `named`, and
//! `with_message`: monadic bind, its map/filter/query-style projections, and
//! the two annotation combinators.

use crate::diagnostic::Diagnostic;
use crate::outcome::ParseOutcome;
use crate::parser::Parser;

/// Monadic bind. Runs `p`; on success, runs `f(value)` against the
/// remainder. `p`'s messages precede the continuation's; expectations
/// union. On failure of `p`, its failure is propagated, re-typed.
pub fn then<V, U, T, F>(p: Parser<V, T>, f: F) -> Parser<U, T>
where
    F: Fn(V) -> Parser<U, T> + Send + Sync + 'static,
    V: Send + Sync + 'static,
    U: Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    Parser::new(move |input| {
        let first = p.parse(input);
        if !first.successful() {
            let messages = first.messages().to_vec();
            let expectations = first.expectations().to_vec();
            return ParseOutcome::failure(first.remainder().clone())
                .with_messages(messages)
                .with_expectations(expectations);
        }

        let first_messages = first.messages().to_vec();
        let first_expectations = first.expectations().to_vec();
        let remainder = first.remainder().clone();
        let value = first
            .into_value()
            .expect("successful outcome carries a value");

        let second = f(value).parse(&remainder);
        let successful = second.successful();
        let second_remainder = second.remainder().clone();
        let second_messages = second.messages().to_vec();
        let second_expectations = second.expectations().to_vec();
        let second_value = second.into_value();

        let base = if successful {
            ParseOutcome::success(
                second_value.expect("successful outcome carries a value"),
                second_remainder,
            )
        } else {
            ParseOutcome::failure(second_remainder)
        };

        base.with_messages(first_messages)
            .with_messages(second_messages)
            .with_expectations(first_expectations)
            .with_expectations(second_expectations)
    })
}

/// `then(p, _ => q)`: runs `p`, discards its value, then runs `q`.
pub fn then_discard<V, U, T>(p: Parser<V, T>, q: Parser<U, T>) -> Parser<U, T>
where
    V: Send + Sync + 'static,
    U: Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    then(p, move |_| q.clone())
}

/// Pure map over a successful value. Does not add any messages or
/// expectations beyond what `p` already produced.
pub fn select<V, U, T, F>(p: Parser<V, T>, f: F) -> Parser<U, T>
where
    F: Fn(V) -> U + Send + Sync + 'static,
    V: Send + Sync + 'static,
    U: Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    Parser::new(move |input| {
        let outcome = p.parse(input);
        outcome.on_success(|o| {
            let remainder = o.remainder().clone();
            let messages = o.messages().to_vec();
            let expectations = o.expectations().to_vec();
            let value = o.into_value().expect("successful outcome carries a value");
            ParseOutcome::success(f(value), remainder)
                .with_messages(messages)
                .with_expectations(expectations)
        })
    })
}

/// Bind-then-project: `then(p, v => select(f(v), u => g(v, u)))`. Lets
/// callers build a projection from both the first parser's value and the
/// second (dependent) parser's value, enabling query-style composition.
pub fn select_many<V, U, W, T, F, G>(p: Parser<V, T>, f: F, g: G) -> Parser<W, T>
where
    F: Fn(V) -> Parser<U, T> + Send + Sync + 'static,
    G: Fn(V, U) -> W + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
    U: Send + Sync + 'static,
    W: Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    then(p, move |v| {
        let second = f(v.clone());
        select(second, {
            let v = v.clone();
            move |u| g(v.clone(), u)
        })
    })
}

/// Runs `p`; if it succeeds but `pred(value)` is false, reports a failure
/// at the *original* input (the consumption is logically cancelled) with
/// message `"Unexpected <joined expectations>"`. Propagates a failing `p`
/// unchanged.
pub fn where_<V, T, P>(p: Parser<V, T>, pred: P) -> Parser<V, T>
where
    P: Fn(&V) -> bool + Send + Sync + 'static,
    V: Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    Parser::new(move |input| {
        let outcome = p.parse(input);
        if !outcome.successful() {
            return outcome;
        }

        let satisfies = {
            let value = outcome
                .value()
                .expect("successful outcome carries a value");
            pred(value)
        };

        if satisfies {
            return outcome;
        }

        let joined = outcome.expectations().join(", ");
        let message = if joined.is_empty() {
            "Unexpected value.".to_string()
        } else {
            format!("Unexpected {joined}")
        };
        ParseOutcome::failure(input.clone()).with_message(Diagnostic::error(message))
    })
}

/// Runs `p` and attaches `name` to the resulting expectations, whether it
/// succeeds or fails.
pub fn named<V, T>(p: Parser<V, T>, name: impl Into<String>) -> Parser<V, T>
where
    V: Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    let name = name.into();
    Parser::new(move |input| p.parse(input).with_expectation(name.clone()))
}

/// Runs `p` and appends `message` to the resulting messages.
pub fn with_message<V, T>(p: Parser<V, T>, message: Diagnostic) -> Parser<V, T>
where
    V: Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    Parser::new(move |input| p.parse(input).with_message(message.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{fail, succeed, token};
    use crate::stream::TokenStream;

    fn stream(tokens: Vec<i32>) -> TokenStream<i32> {
        TokenStream::new(tokens)
    }

    #[test]
    fn then_left_identity_succeed_then_f_equals_f_of_v() {
        let s = stream(vec![1, 2]);
        let via_succeed = then(succeed::<i32, i32>(5, None), |v| succeed::<i32, i32>(v + 1, None));
        let direct = succeed::<i32, i32>(6, None);
        assert_eq!(
            via_succeed.parse(&s).into_value(),
            direct.parse(&s).into_value()
        );
    }

    #[test]
    fn then_right_identity_p_then_succeed_equals_p() {
        let s = stream(vec![7, 8]);
        let p = token(|t: &i32| *t == 7, None);
        let via_then = then(p.clone(), |v| succeed::<i32, i32>(v, None));
        assert_eq!(p.parse(&s).into_value(), via_then.parse(&s).into_value());
    }

    #[test]
    fn then_propagates_failure_without_running_continuation() {
        let s = stream(vec![1]);
        let p = token(|t: &i32| *t == 99, None);
        let combined = then(p, |_: i32| -> Parser<i32, i32> { panic!("must not run") });
        let outcome = combined.parse(&s);
        assert!(!outcome.successful());
    }

    #[test]
    fn then_discard_runs_both_but_keeps_only_second_value() {
        let s = stream(vec![0, 1]);
        let p = token(|t: &i32| *t == 0, None);
        let q = token(|t: &i32| *t == 1, None);
        let combined = then_discard(p, q);
        let outcome = combined.parse(&s);
        assert_eq!(outcome.into_value(), Some(1));
    }

    #[test]
    fn select_is_observationally_equal_to_identity_map() {
        let s = stream(vec![3]);
        let p = token(|_: &i32| true, None);
        let mapped = select(p.clone(), |v| v);
        assert_eq!(p.parse(&s).into_value(), mapped.parse(&s).into_value());
    }

    #[test]
    fn select_many_projects_from_both_the_first_and_dependent_values() {
        // Query-style: `from first in token(..) from second in token(..) select first + second`.
        let s = stream(vec![4, 5]);
        let first = token(|_: &i32| true, None);
        let combined = select_many(
            first,
            |_first: i32| token(|_: &i32| true, None),
            |first: i32, second: i32| first + second,
        );
        let outcome = combined.parse(&s);
        assert!(outcome.successful());
        assert_eq!(outcome.into_value(), Some(9));
        assert_eq!(outcome.remainder().position(), 2);
    }

    #[test]
    fn select_many_propagates_failure_of_the_first_parser() {
        let s = stream(vec![4]);
        let first = token(|t: &i32| *t == 99, None);
        let combined = select_many(
            first,
            |_first: i32| -> Parser<i32, i32> { panic!("must not run") },
            |first: i32, second: i32| first + second,
        );
        let outcome = combined.parse(&s);
        assert!(!outcome.successful());
        assert_eq!(outcome.remainder(), &s);
    }

    #[test]
    fn select_many_propagates_failure_of_the_dependent_parser() {
        let s = stream(vec![4, 5]);
        let first = token(|_: &i32| true, None);
        let combined = select_many(
            first,
            |_first: i32| token(|t: &i32| *t == 99, None),
            |first: i32, second: i32| first + second,
        );
        let outcome = combined.parse(&s);
        assert!(!outcome.successful());
    }

    #[test]
    fn where_cancels_consumption_on_predicate_failure() {
        let s = stream(vec![4, 5]);
        let p = token(|_: &i32| true, None);
        let filtered = where_(p, |v: &i32| *v > 10);
        let outcome = filtered.parse(&s);
        assert!(!outcome.successful());
        assert_eq!(outcome.remainder(), &s);
    }

    #[test]
    fn where_passes_through_on_predicate_success() {
        let s = stream(vec![4, 5]);
        let p = token(|_: &i32| true, None);
        let filtered = where_(p, |v: &i32| *v == 4);
        let outcome = filtered.parse(&s);
        assert!(outcome.successful());
        assert_eq!(outcome.into_value(), Some(4));
    }

    #[test]
    fn where_propagates_a_failing_inner_parser() {
        let s = stream(vec![4]);
        let p = fail::<i32, i32>();
        let filtered = where_(p, |_: &i32| true);
        assert!(!filtered.parse(&s).successful());
    }

    #[test]
    fn named_attaches_expectation_on_success_and_failure() {
        let s = stream(vec![1]);
        let ok = named(succeed::<i32, i32>(1, None), "a number");
        assert_eq!(ok.parse(&s).expectations(), &["a number".to_string()]);

        let failing = named(fail::<i32, i32>(), "a number");
        assert_eq!(
            failing.parse(&s).expectations(),
            &["a number".to_string()]
        );
    }

    #[test]
    fn with_message_appends_to_existing_messages() {
        let s = stream(vec![1]);
        let p = with_message(fail::<i32, i32>(), Diagnostic::error("extra context"));
        assert_eq!(p.parse(&s).messages().len(), 1);
    }
}
