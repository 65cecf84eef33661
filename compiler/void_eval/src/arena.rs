//! Storage for parsed program units.
//!
//! Function values outlive the `evaluate` call that created them, so every
//! parsed unit is kept for the whole session. A function value
//! names its literal by [`FunctionRef`] (unit index plus the literal's id)
//! rather than by reference.

use rustc_hash::FxHashMap;
use std::rc::Rc;

use void_ir::{FunctionId, FunctionLiteral, Program};

/// Index of a unit in a [`ProgramArena`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct UnitId(u32);

impl UnitId {
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// Stable address of a function literal within a session.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct FunctionRef {
    pub unit: UnitId,
    pub function: FunctionId,
}

impl FunctionRef {
    #[inline]
    pub const fn new(unit: UnitId, function: FunctionId) -> Self {
        FunctionRef { unit, function }
    }
}

struct ProgramUnit {
    program: Program,
    /// Canonical form of each function literal, computed once on load.
    renderings: FxHashMap<FunctionId, Rc<str>>,
}

/// Append-only store of parsed units.
#[derive(Default)]
pub struct ProgramArena {
    units: Vec<ProgramUnit>,
}

impl ProgramArena {
    pub fn new() -> Self {
        ProgramArena::default()
    }

    /// Take ownership of `program` for the rest of the session.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "a session never holds more than u32::MAX units"
    )]
    pub fn alloc(&mut self, program: Program) -> UnitId {
        let renderings = program
            .functions()
            .into_iter()
            .map(|function| (function.id, Rc::from(function.to_string())))
            .collect();
        let id = UnitId(self.units.len() as u32);
        self.units.push(ProgramUnit {
            program,
            renderings,
        });
        id
    }

    /// The program stored under `unit`.
    ///
    /// `UnitId`s are only handed out by [`alloc`](Self::alloc), so the index
    /// is always in range for the arena that produced it.
    pub fn program(&self, unit: UnitId) -> Option<&Program> {
        self.units.get(unit.0 as usize).map(|u| &u.program)
    }

    pub fn function(&self, source: FunctionRef) -> Option<&FunctionLiteral> {
        self.program(source.unit)?.function(source.function)
    }

    pub fn rendering(&self, source: FunctionRef) -> Option<Rc<str>> {
        self.units
            .get(source.unit.0 as usize)?
            .renderings
            .get(&source.function)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}
