//! # lalg
//!
//! lalg is an interpreter for LALG, a small Pascal-like teaching language with
//! Portuguese keywords. It tokenizes, parses, type-checks and runs programs
//! that declare integer and boolean variables, compute with them, branch,
//! loop, and talk to the console.
//!
//! ```text
//! programa soma;
//! var a, b: inteiro;
//! início
//!     ler(a, b);
//!     escrever("soma: ", a + b)
//! fim.
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::{BufRead, Write};

use tracing::debug;

pub use crate::{
    config::Config,
    error::Error,
    interpreter::{
        checker::core::{CheckOptions, check},
        evaluator::core::{Interpreter, Limits, Store},
        lexer::tokenize,
        parser::core::parse,
    },
};

/// Defines the structure of parsed programs.
///
/// This module declares the `Program` root and the command, expression and
/// condition nodes below it. The grammar's right-recursive continuations are
/// kept as linked chains so the tree matches the grammar one to one.
///
/// # Responsibilities
/// - Defines a node type for every grammar rule.
/// - Keeps the tokens of each node for error locations.
pub mod ast;
/// Settings shared by the library entry point and the command line.
pub mod config;
/// Provides unified error types for every stage.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// checking or evaluating a program. Each one carries the source location of
/// the failure where there is one.
///
/// # Responsibilities
/// - Defines one error enum per stage, plus [`Error`] for the whole pipeline.
/// - Renders every error as a single human-readable line.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the stages of interpretation.
///
/// This module contains the lexer, parser, checker and evaluator, along with
/// the value types they share.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, checker and evaluator.
/// - Provides entry points for each stage on its own.
pub mod interpreter;

/// Runs a program from source to finish.
///
/// The source is tokenized, parsed, checked and then executed. Console reads
/// take lines from `input` and every `escrever` writes a line to `output`. The
/// first failure of any stage ends the run.
///
/// # Errors
/// Returns the error of the stage that failed, wrapped in [`Error`].
///
/// # Examples
/// ```
/// use lalg::{Config, run, interpreter::value::Value};
///
/// let source = "
///     programa teste;
///     var x, y: inteiro;
///     início
///         x := 4;
///         y := x + 5;
///         escrever(y)
///     fim.";
///
/// let mut output = Vec::new();
/// let store = run(source, &Config::default(), "".as_bytes(), &mut output).unwrap();
///
/// assert_eq!(String::from_utf8(output).unwrap(), "9\n");
/// assert_eq!(store.get("y"), Some(Value::Integer(9)));
///
/// // 'z' is never declared.
/// let result = run("programa p; início z := 1 fim.", &Config::default(), "".as_bytes(), Vec::new());
/// assert!(result.is_err());
/// ```
pub fn run<R, W>(source: &str, config: &Config, input: R, output: W) -> Result<Store, Error>
    where R: BufRead,
          W: Write
{
    let tokens = tokenize(source)?;
    let program = parse(&tokens)?;
    let symbols = check(&program, config.check)?;
    debug!(program = %program.name.text, variables = symbols.len(), "program accepted");

    let store = Interpreter::new(input, output).with_limits(config.limits)
                                               .evaluate(&program)?;
    Ok(store)
}
