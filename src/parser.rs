//! The `Parser` value: a callable, cloneable mapping from a token stream to
//! a [`ParseOutcome`].

use std::sync::Arc;

use crate::outcome::ParseOutcome;
use crate::stream::TokenStream;

/// A parser is a pure function `TokenStream<T> -> ParseOutcome<V, T>`.
///
/// It is represented as a reference-counted closure so that parser values
/// can be built once (typically at program start, composing combinators)
/// and cloned cheaply into every branch that needs them — there is no
/// mutable state anywhere in this type.
pub struct Parser<V, T> {
    run: Arc<dyn Fn(&TokenStream<T>) -> ParseOutcome<V, T> + Send + Sync>,
}

impl<V, T> Parser<V, T> {
    /// Wraps a closure as a parser value.
    pub fn new<F>(run: F) -> Self
    where
        F: Fn(&TokenStream<T>) -> ParseOutcome<V, T> + Send + Sync + 'static,
    {
        Self { run: Arc::new(run) }
    }

    /// Runs the parser against `input`, producing an outcome.
    pub fn parse(&self, input: &TokenStream<T>) -> ParseOutcome<V, T> {
        (self.run)(input)
    }
}

impl<V, T> Clone for Parser<V, T> {
    fn clone(&self) -> Self {
        Self {
            run: Arc::clone(&self.run),
        }
    }
}
