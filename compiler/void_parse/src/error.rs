//! Parse error types.

use thiserror::Error;
use void_ir::TokenKind;

/// A recoverable parse failure.
///
/// Parsing never stops on an error; each one is recorded in order and the
/// construct being parsed is dropped. The `Display` form is the user-facing
/// message.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum ParseError {
    /// The token after the current one was not the kind the grammar requires.
    #[error("expected next token to be `{expected}`, got `{found}` instead at literal `{literal}`")]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
        literal: String,
    },

    /// No prefix handler is registered for the token starting an expression.
    #[error("no `prefix parse function` found for `{literal}`")]
    NoPrefixParseFn { literal: String },

    /// A construct that needs an expression did not get one.
    #[error("no `expression` found for `{construct}`")]
    MissingExpression { construct: &'static str },

    /// A digit run that does not fit in a 64-bit signed integer.
    #[error("no `integer literal` found for `{literal}`")]
    InvalidInteger { literal: String },
}

impl ParseError {
    /// Whether the error concerns the shape of a statement or construct.
    ///
    /// Missing prefix handlers and bad literals are reported at the token
    /// where an expression was expected; they are usually the cause of a
    /// structural error reported right after them.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            ParseError::UnexpectedToken { .. } | ParseError::MissingExpression { .. }
        )
    }
}
