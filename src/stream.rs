//! An immutable, finite, random-access cursor over a token sequence.

use std::fmt;
use std::sync::Arc;

/// An immutable cursor into a finite, random-access token sequence.
///
/// Cloning is cheap (an `Arc` clone plus a `usize`). Two streams are equal
/// iff they share the same underlying sequence (by identity, not content)
/// and the same cursor offset — this is what lets `otherwise`'s tie-break
/// compare "how far did each alternative get" without caring what the
/// tokens themselves look like.
pub struct TokenStream<T> {
    tokens: Arc<[T]>,
    pos: usize,
}

impl<T> TokenStream<T> {
    /// Builds a stream positioned at the start of `tokens`.
    pub fn new(tokens: impl Into<Arc<[T]>>) -> Self {
        Self {
            tokens: tokens.into(),
            pos: 0,
        }
    }

    /// True exactly when no further token exists.
    pub fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// The token under the cursor, or `None` when [`at_end`](Self::at_end).
    pub fn current(&self) -> Option<&T> {
        self.tokens.get(self.pos)
    }

    /// Count of tokens from the cursor to the end of the sequence.
    pub fn remaining(&self) -> usize {
        self.tokens.len() - self.pos.min(self.tokens.len())
    }

    /// A new stream with the cursor one position further. Calling this at
    /// end returns an equal stream.
    pub fn advance(&self) -> Self {
        Self {
            tokens: Arc::clone(&self.tokens),
            pos: (self.pos + 1).min(self.tokens.len()),
        }
    }

    /// Current cursor offset, 0-based.
    pub fn position(&self) -> usize {
        self.pos
    }
}

impl<T> Clone for TokenStream<T> {
    fn clone(&self) -> Self {
        Self {
            tokens: Arc::clone(&self.tokens),
            pos: self.pos,
        }
    }
}

impl<T> PartialEq for TokenStream<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.tokens, &other.tokens) && self.pos == other.pos
    }
}

impl<T> Eq for TokenStream<T> {}

impl<T: fmt::Debug> fmt::Debug for TokenStream<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenStream")
            .field("pos", &self.pos)
            .field("remaining", &self.remaining())
            .finish()
    }
}
