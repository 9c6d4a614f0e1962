/// The checker module validates a parsed program before it runs.
///
/// The checker walks the AST once, records every declared variable in a flat
/// symbol table and infers the type of each expression. A program that passes
/// cannot reference an unknown name or store a value of the wrong type.
///
/// # Responsibilities
/// - Rejects duplicate declarations and references to undeclared names.
/// - Infers expression types and enforces assignment and comparison rules.
/// - Ensures `se` and `enquanto` conditions are boolean.
pub mod checker;
/// The evaluator module executes a checked program.
///
/// The evaluator walks the AST, keeps the current value of every variable,
/// reads from and writes to the console, and returns the final variable store.
///
/// # Responsibilities
/// - Executes assignments, conditionals, loops and console commands.
/// - Folds arithmetic chains from the left with checked integer operations.
/// - Reports runtime errors such as division by zero or malformed input.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a list of
/// tokens, each corresponding to a keyword, identifier, literal, operator or
/// punctuation mark. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind and source
///   location.
/// - Recognises reserved words case-insensitively, with or without accents.
/// - Skips whitespace and comments, and reports unrecognised characters.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A recursive-descent parser with one token of lookahead, plus a second one
/// to tell a bare boolean condition from a comparison.
///
/// # Responsibilities
/// - Converts tokens into a [`Program`](crate::ast::Program).
/// - Reports the first syntax error with its location.
pub mod parser;
/// The value module defines the runtime data types.
///
/// Declares the two variable types of the language and the values they hold,
/// with the conversions used by assignment and console input.
pub mod value;
