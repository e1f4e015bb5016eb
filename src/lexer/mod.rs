//! A small regex-driven (via `logos`) companion lexer.
//!
//! Lexing is out of scope for the combinator core itself — it is
//! parametric in the token type and never imports this module. It exists
//! so tests and demos have a real, production-shaped token source (the
//! conventional `(text, kind, span)` shape) to run combinators against.

pub mod token;

use logos::Logos;

use crate::diagnostic::Diagnostic;
use crate::span::{SourcePosition, Span};
use crate::stream::TokenStream;

pub use token::{Token, TokenKind};

/// Result of tokenizing a source string: the tokens produced, plus any
/// diagnostics for text the lexer's rules couldn't classify.
#[derive(Debug, Clone)]
pub struct LexerResult {
    pub tokens: Vec<Token>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Tokenizes `source`, tracking line/column as it goes (including across
/// skipped whitespace and comments, which `logos` consumes silently).
pub fn tokenize(source: &str) -> LexerResult {
    let mut lexer = TokenKind::lexer(source);
    let mut tokens = Vec::new();
    let mut diagnostics = Vec::new();
    let mut pos = SourcePosition::start();

    while let Some(result) = lexer.next() {
        let byte_span = lexer.span();
        let gap = &source[pos.offset..byte_span.start];
        pos = pos.add_string(gap);
        let start = pos;
        let text = &source[byte_span];
        pos = pos.add_string(text);
        let span = Span::new(start, pos);

        match result {
            Ok(kind) => tokens.push(Token::new(kind, text, span)),
            Err(()) => diagnostics
                .push(Diagnostic::error(format!("Unrecognized token {text:?}.")).with_span(span)),
        }
    }

    LexerResult {
        tokens,
        diagnostics,
    }
}

/// Convenience: tokenizes `source` and builds a [`TokenStream`] directly,
/// discarding lexer diagnostics. Callers that need to report lexer errors
/// should use [`tokenize`] instead.
pub fn token_stream(source: &str) -> TokenStream<Token> {
    TokenStream::new(tokenize(source).tokens)
}
