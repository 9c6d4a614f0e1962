/// The checker's state, its options, and the declaration and command rules.
pub mod core;

/// Type inference for expressions and conditions.
pub mod expression;

/// The flat name-to-type table built during a checking pass.
pub mod symbol_table;
