use std::collections::HashMap;

use crate::interpreter::value::Type;

/// A declared variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    /// The variable's name, as written.
    pub name: String,
    /// Its declared type.
    pub ty:   Type,
}

/// Maps variable names to their declarations.
///
/// The language has a single flat scope, so one table covers a whole
/// program. Names are case-sensitive.
///
/// # Example
/// ```
/// use lalg::interpreter::{
///     checker::symbol_table::{Symbol, SymbolTable},
///     value::Type,
/// };
///
/// let mut table = SymbolTable::new();
/// table.define(Symbol { name: "x".to_string(),
///                       ty:   Type::Integer, });
///
/// assert_eq!(table.lookup("x").map(|s| s.ty), Some(Type::Integer));
/// assert!(table.lookup("X").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    symbols: HashMap<String, Symbol>,
}

impl SymbolTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a symbol, returning the one it replaced, if any.
    pub fn define(&mut self, symbol: Symbol) -> Option<Symbol> {
        self.symbols.insert(symbol.name.clone(), symbol)
    }

    /// Finds a symbol by name.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Symbol> {
        self.symbols.get(name)
    }

    /// Number of declared symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether nothing has been declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Iterates over the declared symbols in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.values()
    }
}
