//! The algebraic parse result: success/value, remainder, messages, and
//! expectations, plus the operations every combinator is built from.

use crate::diagnostic::Diagnostic;
use crate::stream::TokenStream;

/// Appends `name` to `expectations` if it isn't already present, keeping
/// insertion order. `expectations` is conceptually a set; this keeps it as
/// an insertion-ordered unique list so rendering stays deterministic.
fn push_unique(expectations: &mut Vec<String>, name: String) {
    if !expectations.contains(&name) {
        expectations.push(name);
    }
}

/// The result of running a [`Parser`](crate::parser::Parser) against a
/// [`TokenStream`]: either a value plus the unconsumed remainder, or a
/// structured failure — never an exception.
///
/// `value` carries no meaning when `successful` is `false`; callers must
/// not read it in that case (enforced here by [`ParseOutcome::value`]
/// returning `None` unconditionally unless [`successful`](Self::successful)).
#[derive(Debug, Clone)]
pub struct ParseOutcome<V, T> {
    successful: bool,
    value: Option<V>,
    remainder: TokenStream<T>,
    messages: Vec<Diagnostic>,
    expectations: Vec<String>,
}

impl<V, T> ParseOutcome<V, T> {
    /// A successful outcome carrying `value` at `remainder`.
    pub fn success(value: V, remainder: TokenStream<T>) -> Self {
        Self {
            successful: true,
            value: Some(value),
            remainder,
            messages: Vec::new(),
            expectations: Vec::new(),
        }
    }

    /// A failing outcome whose remainder is `remainder` (the position
    /// reached whether or not anything was consumed).
    pub fn failure(remainder: TokenStream<T>) -> Self {
        Self {
            successful: false,
            value: None,
            remainder,
            messages: Vec::new(),
            expectations: Vec::new(),
        }
    }

    pub fn successful(&self) -> bool {
        self.successful
    }

    /// The produced value, or `None` on failure (or if already taken).
    pub fn value(&self) -> Option<&V> {
        if self.successful {
            self.value.as_ref()
        } else {
            None
        }
    }

    /// Consumes the outcome, returning the value on success.
    pub fn into_value(self) -> Option<V> {
        if self.successful {
            self.value
        } else {
            None
        }
    }

    pub fn remainder(&self) -> &TokenStream<T> {
        &self.remainder
    }

    pub fn messages(&self) -> &[Diagnostic] {
        &self.messages
    }

    pub fn expectations(&self) -> &[String] {
        &self.expectations
    }

    /// Appends a diagnostic to `messages`, preserving everything else.
    pub fn with_message(mut self, message: Diagnostic) -> Self {
        self.messages.push(message);
        self
    }

    /// Bulk variant of [`with_message`](Self::with_message).
    pub fn with_messages(mut self, messages: impl IntoIterator<Item = Diagnostic>) -> Self {
        self.messages.extend(messages);
        self
    }

    /// Unions a single name into `expectations`.
    pub fn with_expectation(mut self, name: impl Into<String>) -> Self {
        push_unique(&mut self.expectations, name.into());
        self
    }

    /// Bulk variant of [`with_expectation`](Self::with_expectation).
    pub fn with_expectations(mut self, names: impl IntoIterator<Item = String>) -> Self {
        for name in names {
            push_unique(&mut self.expectations, name);
        }
        self
    }

    /// If successful, replaces this outcome with `f(self)`; otherwise
    /// returns a failure carrying the same remainder/messages/expectations,
    /// re-typed to the continuation's result type.
    pub fn on_success<U>(self, f: impl FnOnce(Self) -> ParseOutcome<U, T>) -> ParseOutcome<U, T> {
        if self.successful {
            f(self)
        } else {
            ParseOutcome {
                successful: false,
                value: None,
                remainder: self.remainder,
                messages: self.messages,
                expectations: self.expectations,
            }
        }
    }

    /// Logical AND: if both succeeded, yields `second`'s value at
    /// `second`'s remainder with the union of messages/expectations; if
    /// either failed, yields a failure with the union of diagnostics and
    /// the later-stage remainder.
    pub fn and<U>(self, second: ParseOutcome<U, T>) -> ParseOutcome<U, T> {
        let successful = self.successful && second.successful;
        let mut messages = self.messages;
        messages.extend(second.messages);
        let mut expectations = self.expectations;
        for name in second.expectations {
            push_unique(&mut expectations, name);
        }

        ParseOutcome {
            successful,
            value: if successful { second.value } else { None },
            remainder: second.remainder,
            messages,
            expectations,
        }
    }

    /// The choice tie-breaker: first success wins, then second success,
    /// then whichever alternative consumed more (smaller `remaining`
    /// wins), merging diagnostics on an exact tie.
    pub fn or(self, second: Self) -> Self {
        if self.successful {
            return self;
        }
        if second.successful {
            return second;
        }

        let self_remaining = self.remainder.remaining();
        let second_remaining = second.remainder.remaining();

        if self_remaining < second_remaining {
            self
        } else if second_remaining < self_remaining {
            second
        } else {
            let mut messages = self.messages;
            messages.extend(second.messages);
            let mut expectations = self.expectations;
            for name in second.expectations {
                push_unique(&mut expectations, name);
            }
            ParseOutcome {
                successful: false,
                value: None,
                remainder: self.remainder,
                messages,
                expectations,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::Diagnostic;

    fn stream(n: usize) -> TokenStream<i32> {
        TokenStream::new((0..n as i32).collect::<Vec<_>>())
    }

    #[test]
    fn with_message_preserves_everything_else() {
        let s = stream(3);
        let outcome = ParseOutcome::<(), i32>::success((), s.clone())
            .with_message(Diagnostic::info("note"));
        assert!(outcome.successful());
        assert_eq!(outcome.messages().len(), 1);
        assert_eq!(outcome.remainder(), &s);
    }

    #[test]
    fn with_expectation_is_deduplicated() {
        let outcome = ParseOutcome::<(), i32>::failure(stream(1))
            .with_expectation("digit")
            .with_expectation("digit")
            .with_expectation("letter");
        assert_eq!(outcome.expectations(), &["digit".to_string(), "letter".to_string()]);
    }

    #[test]
    fn on_success_runs_continuation_only_when_successful() {
        let ok = ParseOutcome::<i32, i32>::success(1, stream(1));
        let mapped = ok.on_success(|o| {
            let v = *o.value().unwrap();
            ParseOutcome::success(v + 1, o.remainder().clone())
        });
        assert_eq!(mapped.into_value(), Some(2));

        let err = ParseOutcome::<i32, i32>::failure(stream(1)).with_message(Diagnostic::error("x"));
        let mapped_err: ParseOutcome<i32, i32> = err.on_success(|_| unreachable!());
        assert!(!mapped_err.successful());
        assert_eq!(mapped_err.messages().len(), 1);
    }

    #[test]
    fn and_unions_diagnostics_and_takes_second_remainder_on_success() {
        let s = stream(5).advance();
        let a = ParseOutcome::<i32, i32>::success(1, s.clone()).with_expectation("a");
        let b = ParseOutcome::<i32, i32>::success(2, s.advance()).with_expectation("b");
        let combined = a.and(b);
        assert!(combined.successful());
        assert_eq!(combined.into_value(), Some(2));
    }

    #[test]
    fn and_fails_if_either_side_fails() {
        let s = stream(5);
        let a = ParseOutcome::<i32, i32>::success(1, s.clone());
        let b = ParseOutcome::<i32, i32>::failure(s.clone()).with_message(Diagnostic::error("bad"));
        let combined = a.and(b);
        assert!(!combined.successful());
        assert_eq!(combined.messages().len(), 1);
    }

    #[test]
    fn or_prefers_first_success_then_second_success() {
        let s = stream(3);
        let ok = ParseOutcome::<i32, i32>::success(1, s.clone());
        let fail = ParseOutcome::<i32, i32>::failure(s.clone());
        assert!(ok.clone().or(fail.clone()).successful());
        assert!(fail.or(ok).successful());
    }

    #[test]
    fn or_tie_break_prefers_the_one_that_consumed_more() {
        let s = stream(5);
        let shallow = ParseOutcome::<i32, i32>::failure(s.advance()).with_message(Diagnostic::error("A"));
        let deep = ParseOutcome::<i32, i32>::failure(s.advance().advance()).with_message(Diagnostic::error("B"));
        let combined = shallow.or(deep);
        assert!(!combined.successful());
        assert_eq!(combined.messages().len(), 1);
        assert_eq!(combined.messages()[0].text, "B");
    }

    #[test]
    fn or_merges_on_exact_tie() {
        let s = stream(5);
        let a = ParseOutcome::<i32, i32>::failure(s.advance()).with_message(Diagnostic::error("A"));
        let b = ParseOutcome::<i32, i32>::failure(s.advance()).with_message(Diagnostic::error("B"));
        let combined = a.or(b);
        assert!(!combined.successful());
        let texts: Vec<_> = combined.messages().iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["A", "B"]);
    }
}
