#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during tokenization.
pub enum LexError {
    /// A character that starts no valid token.
    UnrecognizedCharacter {
        /// The offending character.
        character: char,
        /// The source line where the error occurred.
        line:      usize,
        /// The source column where the error occurred.
        column:    usize,
    },
}

impl LexError {
    /// The `(line, column)` of the error.
    #[must_use]
    pub const fn location(&self) -> (usize, usize) {
        match self {
            Self::UnrecognizedCharacter { line, column, .. } => (*line, *column),
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedCharacter { character,
                                          line,
                                          column, } => write!(f,
                                                              "Error on line {line}, column {column}: Unrecognized character '{character}'."),
        }
    }
}

impl std::error::Error for LexError {}
