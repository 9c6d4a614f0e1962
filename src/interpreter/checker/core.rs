use tracing::{debug, debug_span, trace};

use crate::{
    ast::{Block, Command, Declarations, LogicalExpr, Program, WriteItem},
    error::SemanticError,
    interpreter::{
        checker::symbol_table::{Symbol, SymbolTable},
        lexer::Token,
        value::Type,
    },
};

/// Result type used by the checker.
pub type CheckResult<T> = Result<T, SemanticError>;

/// Switches for the looser typing rules some dialects accept.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckOptions {
    /// Accept the bare literals `0` and `1` as the source of an assignment to
    /// a boolean variable.
    pub literal_booleans: bool,
}

/// Walks a program once and validates declarations and types.
///
/// The walk is pre-order and left to right: first the `var` section, then the
/// main block. It stops at the first violation.
pub struct Checker {
    /// Every name declared so far.
    pub(in crate::interpreter::checker) symbols: SymbolTable,
    /// Active typing switches.
    pub(in crate::interpreter::checker) options: CheckOptions,
}

/// Checks a program with a fresh symbol table.
///
/// Returns the populated table on success. Calling this twice on the same
/// program gives the same answer, since no state survives between calls.
///
/// # Errors
/// Returns the first [`SemanticError`] found.
///
/// # Example
/// ```
/// use lalg::interpreter::{
///     checker::core::{CheckOptions, check},
///     lexer::tokenize,
///     parser::core::parse,
/// };
///
/// let source = "programa p; var x: inteiro; início x := y fim.";
/// let program = parse(&tokenize(source).unwrap()).unwrap();
///
/// let error = check(&program, CheckOptions::default()).unwrap_err();
/// assert_eq!(error.to_string(),
///            "Error on line 1, column 41: Undeclared variable 'y'.");
/// ```
pub fn check(program: &Program, options: CheckOptions) -> CheckResult<SymbolTable> {
    let mut checker = Checker::new(options);
    checker.check_program(program)?;
    Ok(checker.symbols)
}

impl Checker {
    /// Creates a checker with an empty symbol table.
    #[must_use]
    pub fn new(options: CheckOptions) -> Self {
        Self { symbols: SymbolTable::new(),
               options }
    }

    /// Checks the declarations, then the main block.
    pub fn check_program(&mut self, program: &Program) -> CheckResult<()> {
        let span = debug_span!("check", program = %program.name.text);
        let _guard = span.enter();

        if let Some(declarations) = &program.declarations {
            self.check_declarations(declarations)?;
        }
        self.check_block(&program.block)?;

        debug!(symbols = self.symbols.len(), "semantic check passed");
        Ok(())
    }

    /// Registers every declared name.
    ///
    /// # Errors
    /// `DuplicateDeclaration` when a name is declared a second time, in the
    /// same group or a later one.
    pub fn check_declarations(&mut self, declarations: &Declarations) -> CheckResult<()> {
        for declaration in &declarations.declarations {
            let ty = declaration.ty.ty;
            for name in &declaration.names {
                if self.symbols.lookup(&name.text).is_some() {
                    return Err(SemanticError::DuplicateDeclaration { name:   name.text.clone(),
                                                                     line:   name.line,
                                                                     column: name.column, });
                }
                trace!(name = %name.text, %ty, "declared");
                self.symbols.define(Symbol { name: name.text.clone(),
                                             ty });
            }
        }
        Ok(())
    }

    fn check_block(&self, block: &Block) -> CheckResult<()> {
        block.commands
             .iter()
             .try_for_each(|command| self.check_command(command))
    }

    /// Checks one command and everything nested in it.
    pub fn check_command(&self, command: &Command) -> CheckResult<()> {
        match command {
            Command::Assignment { target,
                                  operator,
                                  value, } => {
                let expected = self.lookup(target)?;
                let found = self.infer_expr(value)?;

                let literal_allowed = self.options.literal_booleans
                                      && expected == Type::Boolean
                                      && matches!(value.as_literal(), Some(0 | 1));

                if found != expected && !literal_allowed {
                    return Err(SemanticError::TypeMismatch { expected,
                                                             found,
                                                             line: operator.line,
                                                             column: operator.column });
                }
                Ok(())
            },
            Command::If { condition,
                          then_branch,
                          else_branch,
                          .. } => {
                self.check_condition(condition, "if")?;
                self.check_command(then_branch)?;
                if let Some(else_branch) = else_branch {
                    self.check_command(else_branch)?;
                }
                Ok(())
            },
            Command::While { condition, body, .. } => {
                self.check_condition(condition, "while")?;
                self.check_command(body)
            },
            Command::Read { variables } => {
                for variable in variables {
                    self.lookup(variable)?;
                }
                Ok(())
            },
            Command::Write { items } => {
                for item in items {
                    if let WriteItem::Expr(expr) = item {
                        self.infer_expr(expr)?;
                    }
                }
                Ok(())
            },
            Command::Compound(block) => self.check_block(block),
        }
    }

    /// Requires a condition to type as boolean.
    ///
    /// # Errors
    /// `NonBooleanCondition`, located at the first token of the condition.
    fn check_condition(&self, condition: &LogicalExpr, construct: &'static str) -> CheckResult<()> {
        let found = self.infer_logical(condition)?;
        if found == Type::Boolean {
            return Ok(());
        }

        let token = condition.first_token();
        Err(SemanticError::NonBooleanCondition { construct,
                                                 found,
                                                 line: token.line,
                                                 column: token.column })
    }

    /// The declared type of an identifier.
    ///
    /// # Errors
    /// `UndeclaredVariable` if the name is not in the table.
    pub(in crate::interpreter::checker) fn lookup(&self, token: &Token) -> CheckResult<Type> {
        self.symbols
            .lookup(&token.text)
            .map(|symbol| symbol.ty)
            .ok_or_else(|| SemanticError::UndeclaredVariable { name:   token.text.clone(),
                                                               line:   token.line,
                                                               column: token.column, })
    }
}
