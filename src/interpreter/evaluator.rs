/// Arithmetic and comparison evaluation.
///
/// Implements the four checked arithmetic operators, floor division with
/// its explicit zero-divisor check, and the single equality comparison.
pub mod binary;
/// The interpreter core.
///
/// Defines the [`core::Interpreter`] session state, the statement and
/// expression dispatch, conditionals, scoped bindings, and block
/// evaluation.
pub mod core;
/// Function-call evaluation.
///
/// Resolves calls against the global function table, enforces arity, and
/// builds the non-closure call frame whose parent is always the global
/// scope.
pub mod function;
/// Scope frames.
///
/// The parent-linked frame arena behind variable definition, lookup, and
/// the push/pop discipline on the current-frame pointer.
pub(crate) mod scope;
