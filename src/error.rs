/// Lexical errors.
///
/// Raised while turning source text into tokens, before any token is produced
/// for the offending position.
pub mod lex_error;
/// Syntax errors.
///
/// Defines the failures of the recursive-descent parser: a token of the wrong
/// kind, a token no grammar rule accepts, running out of tokens, or leftovers
/// after the final `.`.
pub mod syntax_error;
/// Semantic errors.
///
/// Violations found by the checker: duplicate or missing declarations, type
/// mismatches and non-boolean conditions.
pub mod semantic_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while executing a checked
/// program, such as division by zero or malformed console input.
pub mod runtime_error;

pub use lex_error::LexError;
pub use runtime_error::RuntimeError;
pub use semantic_error::SemanticError;
pub use syntax_error::SyntaxError;

/// Any failure of the full pipeline, tagged with the stage that raised it.
#[derive(Debug)]
pub enum Error {
    /// The lexer rejected the source.
    Lex(LexError),
    /// The parser rejected the token stream.
    Syntax(SyntaxError),
    /// The checker rejected the program.
    Semantic(SemanticError),
    /// Execution failed.
    Runtime(RuntimeError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "Lexical error: {e}"),
            Self::Syntax(e) => write!(f, "Syntax error: {e}"),
            Self::Semantic(e) => write!(f, "Semantic error: {e}"),
            Self::Runtime(e) => write!(f, "Runtime error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Syntax(e) => Some(e),
            Self::Semantic(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}

impl From<LexError> for Error {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl From<SyntaxError> for Error {
    fn from(e: SyntaxError) -> Self {
        Self::Syntax(e)
    }
}

impl From<SemanticError> for Error {
    fn from(e: SemanticError) -> Self {
        Self::Semantic(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}
