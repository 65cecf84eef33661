//! Incremental evaluation against one persistent root scope.
//!
//! Each [`Session::evaluate`] call parses a standalone unit, keeps it in the
//! session's arena (function values created by it may outlive the call),
//! and evaluates it in the root environment, so later units see earlier
//! `let` bindings.

use tracing::debug;

use crate::arena::ProgramArena;
use crate::environment::{Environment, ScopeRegistry};
use crate::errors::parse_failed;
use crate::interpreter::Interpreter;
use crate::print_handler::{stdout_handler, SharedPrintHandler};
use crate::value::Value;

pub struct Session {
    arena: ProgramArena,
    env: Environment,
    print: SharedPrintHandler,
    scopes: ScopeRegistry,
}

impl Session {
    /// A session whose `puts` writes to stdout.
    pub fn new() -> Self {
        Session::with_print_handler(stdout_handler())
    }

    /// A session whose `puts` writes to `print`.
    pub fn with_print_handler(print: SharedPrintHandler) -> Self {
        let env = Environment::new();
        let scopes = ScopeRegistry::new();
        scopes.track(&env);
        Session {
            arena: ProgramArena::new(),
            env,
            print,
            scopes,
        }
    }

    /// Parse and evaluate `source`.
    ///
    /// Never fails: problems come back as [`Value::Error`]. Statements the
    /// parser recovered are evaluated and the unit is retained even when
    /// parsing reported errors; a runtime error is returned as is, otherwise
    /// the parse errors replace the unit's value.
    #[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
    pub fn evaluate(&mut self, source: &str) -> Value {
        let output = void_parse::parse(source);
        let parse_summary = output.error_summary();
        if let Some(summary) = &parse_summary {
            debug!(errors = output.errors.len(), %summary, "evaluating recovered unit");
        }

        let unit = self.arena.alloc(output.program);
        let Some(program) = self.arena.program(unit) else {
            return Value::Null;
        };
        let mut interpreter = Interpreter::new(&self.arena, unit, &self.print, &self.scopes);
        match interpreter.eval_program(program, &self.env) {
            Ok(value) => match parse_summary {
                Some(summary) => Value::error(parse_failed(summary).message()),
                None => value,
            },
            Err(error) => {
                debug!(%error, "evaluation failed");
                Value::error(error.message())
            }
        }
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print
    }

    /// The root scope that every unit is evaluated in.
    pub fn environment(&self) -> &Environment {
        &self.env
    }

    /// Number of units retained so far.
    pub fn unit_count(&self) -> usize {
        self.arena.len()
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.scopes.clear_all();
    }
}
