//! Tree-walking evaluator.
//!
//! An [`Interpreter`] evaluates one program unit against a caller-supplied
//! [`Environment`]. It borrows the session's [`ProgramArena`] so that calls
//! to functions defined by earlier units can find their literal.
//!
//! # Control flow
//!
//! Every node yields an [`EvalResult`]. `return` travels up as
//! `Err(ControlAction::Return)` and is unwrapped by the innermost statement
//! sequence (program body, block body), which then stops. Errors travel as
//! `Err(ControlAction::Error)` and stop every enclosing sequence.
//!
//! # Scopes
//!
//! Blocks do not open a scope. Evaluating a function literal opens one
//! closure scope; every call of that function value binds its parameters
//! into that same scope.

use rustc_hash::FxHashMap;
use std::rc::Rc;

use tracing::{debug, trace};
use void_ir::{BlockStatement, Expression, FunctionLiteral, IfExpression, Program, Statement};
use void_stack::ensure_sufficient_stack;

use crate::arena::{FunctionRef, ProgramArena, UnitId};
use crate::builtins;
use crate::environment::{Environment, ScopeRegistry};
use crate::errors::{
    function_not_loaded, identifier_not_found, index_not_supported, index_out_of_bounds,
    not_callable, wrong_arg_count, ControlAction, EvalError, EvalResult,
};
use crate::operators::evaluate_infix;
use crate::print_handler::PrintHandlerImpl;
use crate::unary_operators::evaluate_prefix;
use crate::value::{FunctionValue, Value};

pub struct Interpreter<'a> {
    arena: &'a ProgramArena,
    unit: UnitId,
    print: &'a PrintHandlerImpl,
    scopes: &'a ScopeRegistry,
    /// Literals already resolved through the arena, keyed by function value source.
    functions: FxHashMap<FunctionRef, &'a FunctionLiteral>,
}

impl<'a> Interpreter<'a> {
    /// An interpreter for `unit`, which must have been allocated in `arena`.
    pub fn new(
        arena: &'a ProgramArena,
        unit: UnitId,
        print: &'a PrintHandlerImpl,
        scopes: &'a ScopeRegistry,
    ) -> Self {
        Interpreter {
            arena,
            unit,
            print,
            scopes,
            functions: FxHashMap::default(),
        }
    }

    /// Evaluate `program` in `env`. A top-level `return` ends the program early.
    pub fn eval_program(
        &mut self,
        program: &'a Program,
        env: &Environment,
    ) -> Result<Value, EvalError> {
        match self.eval_statements(&program.statements, env) {
            Ok(value) | Err(ControlAction::Return(value)) => Ok(value),
            Err(ControlAction::Error(error)) => Err(error),
        }
    }

    /// Evaluate a statement sequence; its value is the last statement's.
    ///
    /// A `return` inside the sequence stops it and becomes its value.
    fn eval_statements(&mut self, statements: &'a [Statement], env: &Environment) -> EvalResult {
        let mut result = Value::Null;
        for statement in statements {
            match self.eval_statement(statement, env) {
                Ok(value) => result = value,
                Err(ControlAction::Return(value)) => return Ok(value),
                Err(error @ ControlAction::Error(_)) => return Err(error),
            }
        }
        Ok(result)
    }

    fn eval_statement(&mut self, statement: &'a Statement, env: &Environment) -> EvalResult {
        match statement {
            Statement::Let { name, value } => {
                let value = self.eval_expression(value, env)?;
                trace!(name = %name.name, "let");
                env.set(&name.name, value);
                Ok(Value::Null)
            }
            Statement::Return(value) => {
                let value = self.eval_expression(value, env)?;
                Err(ControlAction::Return(value))
            }
            Statement::Expression(expression) => self.eval_expression(expression, env),
            Statement::Block(block) => self.eval_block(block, env),
        }
    }

    #[inline]
    fn eval_block(&mut self, block: &'a BlockStatement, env: &Environment) -> EvalResult {
        self.eval_statements(&block.statements, env)
    }

    fn eval_expression(&mut self, expression: &'a Expression, env: &Environment) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_expression_inner(expression, env))
    }

    fn eval_expression_inner(
        &mut self,
        expression: &'a Expression,
        env: &Environment,
    ) -> EvalResult {
        match expression {
            Expression::Integer(n) => Ok(Value::Integer(*n)),
            Expression::Boolean(b) => Ok(Value::Boolean(*b)),
            Expression::Str(text) => Ok(Value::string(text.as_str())),
            Expression::Identifier(ident) => Ok(Self::eval_identifier(&ident.name, env)?),
            Expression::Array(elements) => {
                let elements = elements
                    .iter()
                    .map(|element| self.eval_expression(element, env))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Value::array(elements))
            }
            Expression::Function(literal) => Ok(self.eval_function_literal(literal, env)),
            Expression::If(if_expr) => self.eval_if(if_expr, env),
            Expression::Call {
                function,
                arguments,
            } => self.eval_call(function, arguments, env),
            Expression::Index { left, index } => {
                let left = self.eval_expression(left, env)?;
                let index = self.eval_expression(index, env)?;
                Ok(eval_index(&left, &index)?)
            }
            Expression::Prefix { operator, operand } => {
                let operand = self.eval_expression(operand, env)?;
                Ok(evaluate_prefix(*operator, &operand)?)
            }
            Expression::Infix {
                operator,
                left,
                right,
            } => {
                let left = self.eval_expression(left, env)?;
                let right = self.eval_expression(right, env)?;
                Ok(evaluate_infix(*operator, &left, &right)?)
            }
        }
    }

    /// Bindings first. A name that is unbound or bound to null resolves to
    /// the builtin of that name, if there is one.
    fn eval_identifier(name: &str, env: &Environment) -> Result<Value, EvalError> {
        let bound = env.lookup(name);
        if let Some(value) = bound.as_ref().filter(|value| !matches!(value, Value::Null)) {
            return Ok(value.clone());
        }
        if let Some(builtin) = builtins::lookup(name) {
            return Ok(Value::Builtin(builtin));
        }
        bound.ok_or_else(|| identifier_not_found(name))
    }

    /// Evaluate every argument left to right, then report the first error.
    fn eval_arguments(
        &mut self,
        arguments: &'a [Expression],
        env: &Environment,
    ) -> Result<Vec<Value>, ControlAction> {
        let results: Vec<EvalResult> = arguments
            .iter()
            .map(|argument| self.eval_expression(argument, env))
            .collect();
        results.into_iter().collect()
    }

    fn eval_function_literal(&mut self, literal: &'a FunctionLiteral, env: &Environment) -> Value {
        let closure = Environment::new_enclosed(env);
        self.scopes.track(&closure);
        let source = FunctionRef::new(self.unit, literal.id);
        self.functions.insert(source, literal);
        let rendering = self
            .arena
            .rendering(source)
            .unwrap_or_else(|| Rc::from(literal.to_string()));
        Value::Function(FunctionValue::new(
            source,
            closure,
            literal.parameters.len(),
            rendering,
        ))
    }

    fn eval_if(&mut self, if_expr: &'a IfExpression, env: &Environment) -> EvalResult {
        let condition = self.eval_expression(&if_expr.condition, env)?;
        if condition.is_truthy() {
            self.eval_block(&if_expr.consequence, env)
        } else if let Some(alternative) = &if_expr.alternative {
            self.eval_block(alternative, env)
        } else {
            Ok(Value::Null)
        }
    }

    fn eval_call(
        &mut self,
        function: &'a Expression,
        arguments: &'a [Expression],
        env: &Environment,
    ) -> EvalResult {
        let callee = self.eval_expression(function, env)?;
        if !matches!(callee, Value::Function(_) | Value::Builtin(_)) {
            return Err(not_callable(&callee).into());
        }
        let args = self.eval_arguments(arguments, env)?;
        match &callee {
            Value::Function(function) => self.apply_function(function, args),
            Value::Builtin(builtin) => Ok(builtin.call(&args, self.print)?),
            other => Err(not_callable(other).into()),
        }
    }

    /// Bind `args` into the function's closure scope and run its body there.
    fn apply_function(&mut self, function: &FunctionValue, args: Vec<Value>) -> EvalResult {
        if args.len() != function.arity() {
            return Err(wrong_arg_count(function.arity(), args.len()).into());
        }
        let literal = self.function_literal(function.source())?;
        debug!(
            unit = function.source().unit.raw(),
            function = function.source().function.raw(),
            argc = args.len(),
            "call"
        );
        let scope = function.closure();
        for (parameter, arg) in literal.parameters.iter().zip(args) {
            scope.set(&parameter.name, arg);
        }
        self.eval_block(&literal.body, scope)
    }

    fn function_literal(&mut self, source: FunctionRef) -> Result<&'a FunctionLiteral, EvalError> {
        if let Some(&literal) = self.functions.get(&source) {
            return Ok(literal);
        }
        let literal = self
            .arena
            .function(source)
            .ok_or_else(|| function_not_loaded(source.function.raw()))?;
        self.functions.insert(source, literal);
        Ok(literal)
    }
}

/// `array[index]`; negative and past-the-end indices are out of bounds.
fn eval_index(left: &Value, index: &Value) -> Result<Value, EvalError> {
    match (left, index) {
        (Value::Array(elements), Value::Integer(i)) => usize::try_from(*i)
            .ok()
            .and_then(|i| elements.get(i))
            .cloned()
            .ok_or_else(|| index_out_of_bounds(*i, elements.len())),
        _ => Err(index_not_supported(left, index)),
    }
}
