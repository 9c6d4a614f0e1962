use std::{
    collections::HashMap,
    io::{BufRead, Write},
};

use tracing::{debug, debug_span, trace};

use crate::{
    ast::{Declarations, Program},
    error::RuntimeError,
    interpreter::{
        lexer::Token,
        value::{Type, Value},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Optional safety limits applied during execution.
///
/// The default imposes no limit, which is the language's own semantics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Limits {
    /// Maximum number of iterations a single `while` loop may run.
    pub max_loop_iterations: Option<u64>,
}

/// The variables of a finished run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Store {
    values: HashMap<String, Value>,
    types:  HashMap<String, Type>,
}

impl Store {
    /// The final value of a variable.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        self.values.get(name).copied()
    }

    /// The declared type of a variable.
    #[must_use]
    pub fn type_of(&self, name: &str) -> Option<Type> {
        self.types.get(name).copied()
    }

    /// Iterates over all variables in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Value)> {
        self.values.iter().map(|(name, value)| (name.as_str(), *value))
    }

    /// Number of variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the program declared no variables.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// One `name (type): value` line per variable, sorted by name.
///
/// # Example
/// ```
/// use lalg::{Config, run};
///
/// let source = "programa p; var b: lógico; a: inteiro; início a := 7 fim.";
/// let store = run(source, &Config::default(), "".as_bytes(), Vec::new()).unwrap();
///
/// assert_eq!(store.to_string(), "a (integer): 7\nb (boolean): false\n");
/// ```
impl std::fmt::Display for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_unstable_by_key(|(name, _)| *name);

        for (name, value) in entries {
            let ty = self.type_of(name).unwrap_or_else(|| value.type_of());
            writeln!(f, "{name} ({ty}): {value}")?;
        }
        Ok(())
    }
}

/// Stores the runtime evaluation context.
///
/// Holds the current value and declared type of every variable, the console
/// the program reads from and writes to, and the configured [`Limits`].
///
/// ## Usage
///
/// Create one per run with the input and output streams, then call
/// [`Interpreter::evaluate`]. Any `BufRead` works as input and any `Write` as
/// output, so tests can use byte slices and vectors.
///
/// # Example
/// ```
/// use lalg::interpreter::{
///     evaluator::core::Interpreter, lexer::tokenize, parser::core::parse, value::Value,
/// };
///
/// let source = "programa p; var a: inteiro; início ler(a); escrever(\"dobro: \", a * 2) fim.";
/// let program = parse(&tokenize(source).unwrap()).unwrap();
///
/// let mut output = Vec::new();
/// let store = Interpreter::new("21\n".as_bytes(), &mut output).evaluate(&program)
///                                                          .unwrap();
///
/// assert_eq!(String::from_utf8(output).unwrap(), "dobro: 42\n");
/// assert_eq!(store.get("a"), Some(Value::Integer(21)));
/// ```
pub struct Interpreter<R, W> {
    /// Current value of every declared variable.
    pub(in crate::interpreter::evaluator) variables: HashMap<String, Value>,
    /// Declared type of every variable.
    pub(in crate::interpreter::evaluator) types:     HashMap<String, Type>,
    /// Execution limits.
    pub(in crate::interpreter::evaluator) limits:    Limits,
    /// Console input, one line per read variable.
    pub(in crate::interpreter::evaluator) input:     R,
    /// Console output, one line per `escrever`.
    pub(in crate::interpreter::evaluator) output:    W,
}

impl<R: BufRead, W: Write> Interpreter<R, W> {
    /// Creates an interpreter with no variables and no limits.
    #[must_use]
    pub fn new(input: R, output: W) -> Self {
        Self { variables: HashMap::new(),
               types: HashMap::new(),
               limits: Limits::default(),
               input,
               output }
    }

    /// Replaces the execution limits.
    #[must_use]
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Runs a program from a clean state and returns its final variables.
    ///
    /// Declarations run first and give every variable its type's default
    /// value. Then the main block executes.
    ///
    /// # Errors
    /// Returns the first [`RuntimeError`] raised. Output written before the
    /// failure stays written.
    pub fn evaluate(&mut self, program: &Program) -> EvalResult<Store> {
        let span = debug_span!("evaluate", program = %program.name.text);
        let _guard = span.enter();

        self.variables.clear();
        self.types.clear();

        if let Some(declarations) = &program.declarations {
            self.declare(declarations);
        }
        self.exec_block(&program.block)?;

        debug!(variables = self.variables.len(), "program finished");
        Ok(Store { values: std::mem::take(&mut self.variables),
                   types:  std::mem::take(&mut self.types), })
    }

    /// Binds every declared name to its type's default value.
    pub fn declare(&mut self, declarations: &Declarations) {
        for declaration in &declarations.declarations {
            let ty = declaration.ty.ty;
            for name in &declaration.names {
                trace!(name = %name.text, %ty, "declared");
                self.variables.insert(name.text.clone(), ty.default_value());
                self.types.insert(name.text.clone(), ty);
            }
        }
    }

    /// The current value of a variable.
    ///
    /// # Errors
    /// `UndeclaredVariable` if the name has no binding. The checker rules this
    /// out for checked programs.
    pub fn get_variable(&self, token: &Token) -> EvalResult<Value> {
        self.variables
            .get(&token.text)
            .copied()
            .ok_or_else(|| undeclared(token))
    }

    /// Stores a value, converted to the variable's declared type.
    ///
    /// # Errors
    /// `UndeclaredVariable` if the name was never declared.
    pub fn set_variable(&mut self, token: &Token, value: Value) -> EvalResult<()> {
        let ty = self.type_of(token)?;
        let value = value.coerce_to(ty);
        trace!(name = %token.text, %value, "assigned");
        self.variables.insert(token.text.clone(), value);
        Ok(())
    }

    /// The declared type of a variable.
    ///
    /// # Errors
    /// `UndeclaredVariable` if the name was never declared.
    pub fn type_of(&self, token: &Token) -> EvalResult<Type> {
        self.types
            .get(&token.text)
            .copied()
            .ok_or_else(|| undeclared(token))
    }
}

fn undeclared(token: &Token) -> RuntimeError {
    RuntimeError::UndeclaredVariable { name:   token.text.clone(),
                                       line:   token.line,
                                       column: token.column, }
}
