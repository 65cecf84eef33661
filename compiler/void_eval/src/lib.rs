//! Void Eval - tree-walking evaluator for the Void language.
//!
//! # Architecture
//!
//! - [`Session`]: the embedding entry point; `evaluate(source) -> Value`
//! - [`Interpreter`]: walks one parsed unit against an [`Environment`]
//! - `evaluate_infix` / `evaluate_prefix`: direct enum-based operator dispatch
//! - `builtins`: the fixed table of native functions (`len`, `first`, `last`,
//!   `push`, `pop`, `puts`)
//! - [`ProgramArena`]: keeps every parsed unit alive for the session, so
//!   function values can refer to their literal by index
//!
//! Runtime errors are typed ([`EvalError`]) inside the evaluator and become
//! [`Value::Error`] only when they reach `Session::evaluate`.

mod arena;
pub mod builtins;
mod environment;
pub mod errors;
pub mod interpreter;
mod operators;
mod print_handler;
mod session;
mod unary_operators;
mod value;

pub use arena::{FunctionRef, ProgramArena, UnitId};
pub use builtins::Builtin;
pub use environment::{Environment, LocalScope, Scope, ScopeRegistry};
pub use errors::{ControlAction, EvalError, EvalErrorKind, EvalResult};
pub use interpreter::Interpreter;
pub use operators::evaluate_infix;
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use session::Session;
pub use unary_operators::evaluate_prefix;
pub use value::{FunctionValue, Value};

#[cfg(test)]
mod tests;
