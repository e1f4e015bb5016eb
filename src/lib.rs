#![allow(rustdoc::broken_intra_doc_links)]
//! A small parser-combinator core: parsers as first-class, composable
//! values over a token stream, producing either a typed result plus the
//! unconsumed remainder, or a structured failure carrying diagnostics and
//! expectations.
//!
//! # Build a parser
//!
//! ```
//! use combinator_core::{TokenStream, token, select, named};
//!
//! let is_digit = |t: &i32| (0..=9).contains(t);
//! let digit = named(token(is_digit, None), "digit");
//! let doubled = select(digit, |d| d * 2);
//!
//! let stream = TokenStream::new(vec![4, 5, 6]);
//! let outcome = doubled.parse(&stream);
//! assert_eq!(outcome.into_value(), Some(8));
//! ```
//!
//! # Choice and repetition
//!
//! ```
//! use combinator_core::{TokenStream, token, many, otherwise, succeed};
//!
//! let zero = token(|t: &i32| *t == 0, Some("zero"));
//! let one = token(|t: &i32| *t == 1, Some("one"));
//! let zero_or_one = otherwise(zero, one);
//!
//! let stream = TokenStream::new(vec![1, 0, 0, 2]);
//! let run = many(zero_or_one);
//! let outcome = run.parse(&stream);
//! assert_eq!(outcome.into_value(), Some(vec![1, 0, 0]));
//! assert_eq!(outcome.remainder().remaining(), 1);
//!
//! // `succeed` never fails and never consumes.
//! let always_42 = succeed::<i32, i32>(42, None);
//! assert_eq!(always_42.parse(&stream).into_value(), Some(42));
//! ```

pub mod combinators;
pub mod diagnostic;
pub mod lexer;
pub mod outcome;
pub mod parser;
pub mod primitives;
pub mod span;
pub mod stream;

pub use combinators::{
    at_least_once, concat, except, many, named, not_, once, otherwise, select, select_many, take,
    then, then_discard, until, where_, with_message,
};
pub use diagnostic::{Diagnostic, Severity};
pub use outcome::ParseOutcome;
pub use parser::Parser;
pub use primitives::{end, fail, succeed, token};
pub use span::{SourcePosition, Span};
pub use stream::TokenStream;
