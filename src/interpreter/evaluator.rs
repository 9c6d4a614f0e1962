/// Core evaluation logic and runtime state.
///
/// Contains the [`Interpreter`](core::Interpreter), its execution limits, the
/// final variable [`Store`](core::Store), and declaration handling.
pub mod core;

/// Command execution.
///
/// Assignments, conditionals, loops, blocks and the console commands `ler`
/// and `escrever`.
pub mod command;

/// Expression evaluation.
///
/// Folds continuation chains from the left and evaluates factors and
/// conditions.
pub mod expression;

/// Arithmetic and comparison operators.
///
/// Checked integer arithmetic with floor division, and the six relational
/// operators.
pub mod arithmetic;
