#[derive(Debug)]
/// Represents all errors that can occur during execution.
pub enum RuntimeError {
    /// Tried to use a variable with no runtime binding.
    UndeclaredVariable {
        /// The name of the variable.
        name:   String,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// Arithmetic operation overflowed.
    Overflow {
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// A line read from the console could not be parsed for its variable.
    InvalidInput {
        /// The variable being read.
        name:  String,
        /// The raw input line.
        input: String,
        /// The source line of the `read` operand.
        line:  usize,
    },
    /// The console ran out of lines during a `read`.
    UnexpectedEndOfInput {
        /// The variable being read.
        name: String,
        /// The source line of the `read` operand.
        line: usize,
    },
    /// An operator token the evaluator does not know.
    UnknownOperator {
        /// The operator text.
        operator: String,
        /// The source line where the error occurred.
        line:     usize,
        /// The source column where the error occurred.
        column:   usize,
    },
    /// A value had a type the operation cannot use.
    TypeError {
        /// Details about the type mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A `while` loop ran more iterations than the configured limit.
    LoopLimitExceeded {
        /// The configured limit.
        limit: u64,
        /// The source line of the `while`.
        line:  usize,
    },
    /// Reading from or writing to the console failed.
    Io(std::io::Error),
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndeclaredVariable { name, line, column } => write!(f,
                                                                      "Error on line {line}, column {column}: Undeclared variable '{name}'."),
            Self::DivisionByZero { line, column } => {
                write!(f, "Error on line {line}, column {column}: Division by zero.")
            },
            Self::Overflow { line, column } => write!(f,
                                                      "Error on line {line}, column {column}: Integer overflow while trying to compute result."),
            Self::InvalidInput { name, input, line } => write!(f,
                                                               "Error on line {line}: Invalid value '{input}' for variable '{name}'."),
            Self::UnexpectedEndOfInput { name, line } => write!(f,
                                                                "Error on line {line}: Input ended while reading variable '{name}'."),
            Self::UnknownOperator { operator,
                                    line,
                                    column, } => write!(f,
                                                        "Error on line {line}, column {column}: Unknown operator '{operator}'."),
            Self::TypeError { details, line } => {
                write!(f, "Error on line {line}: Type error: {details}.")
            },
            Self::LoopLimitExceeded { limit, line } => write!(f,
                                                              "Error on line {line}: Loop exceeded the limit of {limit} iterations."),
            Self::Io(e) => write!(f, "Console I/O failed: {e}."),
        }
    }
}

impl std::error::Error for RuntimeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RuntimeError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
