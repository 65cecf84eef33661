//! Parser tests.
//!
//! - `parser`: precedence, associativity, and the canonical form of every construct
//! - `recovery`: error messages and what survives a failed statement

mod parser;
