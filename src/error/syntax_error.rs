use crate::interpreter::lexer::TokenKind;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing a token stream.
pub enum SyntaxError {
    /// A specific token kind was required but another one was found.
    ExpectedToken {
        /// The kind the grammar required.
        expected: TokenKind,
        /// The kind actually found.
        found:    TokenKind,
        /// The text of the token found.
        text:     String,
        /// The source line where the error occurred.
        line:     usize,
        /// The source column where the error occurred.
        column:   usize,
    },
    /// No grammar alternative accepts the current token.
    UnexpectedToken {
        /// The construct being parsed, such as `command` or `factor`.
        context: &'static str,
        /// The kind actually found.
        found:   TokenKind,
        /// The text of the token found.
        text:    String,
        /// The source line where the error occurred.
        line:    usize,
        /// The source column where the error occurred.
        column:  usize,
    },
    /// Ran past the last token while something was still required.
    UnexpectedEndOfInput {
        /// What the parser was looking for.
        expected: String,
    },
    /// Found tokens after the program's closing `.`.
    UnexpectedTrailingTokens {
        /// The first extra token's text.
        text:   String,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// Parentheses, signs or nested commands go deeper than the parser allows.
    NestingTooDeep {
        /// The maximum nesting depth.
        limit:  usize,
        /// The source line of the token that went too deep.
        line:   usize,
        /// The source column of the token that went too deep.
        column: usize,
    },
    /// An integer literal does not fit in 64 bits.
    LiteralTooLarge {
        /// The literal as written.
        text:   String,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
}

impl SyntaxError {
    /// The `(line, column)` of the error, if it points at a token.
    #[must_use]
    pub const fn location(&self) -> Option<(usize, usize)> {
        match self {
            Self::ExpectedToken { line, column, .. }
            | Self::UnexpectedToken { line, column, .. }
            | Self::UnexpectedTrailingTokens { line, column, .. }
            | Self::NestingTooDeep { line, column, .. }
            | Self::LiteralTooLarge { line, column, .. } => Some((*line, *column)),
            Self::UnexpectedEndOfInput { .. } => None,
        }
    }
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ExpectedToken { expected,
                                  found,
                                  text,
                                  line,
                                  column, } => write!(f,
                                                      "Error on line {line}, column {column}: Expected {expected}, found {found} '{text}'."),

            Self::UnexpectedToken { context,
                                    found,
                                    text,
                                    line,
                                    column, } => write!(f,
                                                        "Error on line {line}, column {column}: Unexpected {found} '{text}' while parsing {context}."),

            Self::UnexpectedEndOfInput { expected } => {
                write!(f, "Unexpected end of input: expected {expected}.")
            },

            Self::UnexpectedTrailingTokens { text, line, column } => write!(f,
                                                                            "Error on line {line}, column {column}: Extra tokens after the end of the program, starting at '{text}'."),

            Self::NestingTooDeep { limit, line, column } => write!(f,
                                                                   "Error on line {line}, column {column}: Nesting is deeper than {limit} levels."),

            Self::LiteralTooLarge { text, line, column } => write!(f,
                                                                   "Error on line {line}, column {column}: Literal {text} is too large."),
        }
    }
}

impl std::error::Error for SyntaxError {}
