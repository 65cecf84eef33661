//! Test modules for the evaluator.
//!
//! Operator and builtin tests call the dispatch functions directly; the
//! session tests run source text end to end.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod builtins_tests;
