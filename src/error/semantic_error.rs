use crate::interpreter::value::Type;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors the semantic checker can report.
pub enum SemanticError {
    /// A variable was declared twice.
    DuplicateDeclaration {
        /// The name of the variable.
        name:   String,
        /// The source line of the second declaration.
        line:   usize,
        /// The source column of the second declaration.
        column: usize,
    },
    /// A variable was used without being declared.
    UndeclaredVariable {
        /// The name of the variable.
        name:   String,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// Two types that must agree do not.
    TypeMismatch {
        /// The type required by the context.
        expected: Type,
        /// The type actually inferred.
        found:    Type,
        /// The source line where the error occurred.
        line:     usize,
        /// The source column where the error occurred.
        column:   usize,
    },
    /// An arithmetic operator was applied to an operand of the wrong type.
    InvalidOperand {
        /// The operator text, such as `+`.
        operator: String,
        /// The offending operand type.
        found:    Type,
        /// The source line where the error occurred.
        line:     usize,
        /// The source column where the error occurred.
        column:   usize,
    },
    /// The condition of an `if` or `while` is not boolean.
    NonBooleanCondition {
        /// `if` or `while`.
        construct: &'static str,
        /// The type the condition has.
        found:     Type,
        /// The source line where the error occurred.
        line:      usize,
        /// The source column where the error occurred.
        column:    usize,
    },
}

impl SemanticError {
    /// The `(line, column)` of the error.
    #[must_use]
    pub const fn location(&self) -> (usize, usize) {
        match self {
            Self::DuplicateDeclaration { line, column, .. }
            | Self::UndeclaredVariable { line, column, .. }
            | Self::TypeMismatch { line, column, .. }
            | Self::InvalidOperand { line, column, .. }
            | Self::NonBooleanCondition { line, column, .. } => (*line, *column),
        }
    }
}

impl std::fmt::Display for SemanticError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateDeclaration { name, line, column } => write!(f,
                                                                        "Error on line {line}, column {column}: Variable '{name}' is already declared."),

            Self::UndeclaredVariable { name, line, column } => write!(f,
                                                                      "Error on line {line}, column {column}: Undeclared variable '{name}'."),

            Self::TypeMismatch { expected,
                                 found,
                                 line,
                                 column, } => write!(f,
                                                     "Error on line {line}, column {column}: Type mismatch: expected {expected}, found {found}."),

            Self::InvalidOperand { operator,
                                   found,
                                   line,
                                   column, } => write!(f,
                                                       "Error on line {line}, column {column}: Operator '{operator}' cannot be applied to {found}."),

            Self::NonBooleanCondition { construct,
                                        found,
                                        line,
                                        column, } => write!(f,
                                                            "Error on line {line}, column {column}: Condition of '{construct}' must be boolean, found {found}."),
        }
    }
}

impl std::error::Error for SemanticError {}
