/// Program structure: the program header, the `var` section, types and
/// blocks. Also holds the [`parse`](core::parse) entry point.
pub mod core;

/// Command parsing.
///
/// Assignments, `ler`, `escrever`, `se` and `enquanto`.
pub mod command;

/// Expression parsing.
///
/// Arithmetic expressions with their continuation chains, factors and the
/// logical expressions used as conditions.
pub mod expression;

/// Token-level helpers shared by the other parser modules.
pub mod utils;
