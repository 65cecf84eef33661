//! Lexer for the Void language.
//!
//! [`Lexer::next_token`] produces one [`Token`] per call with a single byte
//! of lookahead. Once the input is exhausted every further call returns the
//! end-of-input token.
//!
//! The lexer never fails. Characters it does not recognize, and string
//! literals missing their closing quote, come back as
//! [`TokenKind::Illegal`](void_ir::TokenKind::Illegal) tokens for the parser
//! to report.

mod cursor;
mod lexer;

pub use lexer::{tokenize, Lexer};
pub use void_ir::{Token, TokenKind};
