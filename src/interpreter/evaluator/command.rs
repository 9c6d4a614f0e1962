use std::io::{BufRead, Write};

use tracing::trace;

use crate::{
    ast::{Block, Command, LogicalExpr, WriteItem},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        lexer::Token,
        value::{Type, Value},
    },
};

impl<R: BufRead, W: Write> Interpreter<R, W> {
    /// Executes the commands of a block in order.
    ///
    /// # Errors
    /// Stops at the first command that fails.
    pub fn exec_block(&mut self, block: &Block) -> EvalResult<()> {
        block.commands
             .iter()
             .try_for_each(|command| self.exec_command(command))
    }

    /// Executes a single command.
    ///
    /// # Errors
    /// Any [`RuntimeError`] raised by the command or its sub-expressions.
    pub fn exec_command(&mut self, command: &Command) -> EvalResult<()> {
        match command {
            Command::Assignment { target, value, .. } => {
                let value = self.eval_expr(value)?;
                self.set_variable(target, value)
            },
            Command::If { condition,
                          then_branch,
                          else_branch,
                          .. } => {
                if self.eval_logical(condition)? {
                    self.exec_command(then_branch)
                } else if let Some(else_branch) = else_branch {
                    self.exec_command(else_branch)
                } else {
                    Ok(())
                }
            },
            Command::While { keyword,
                             condition,
                             body, } => self.exec_while(keyword, condition, body),
            Command::Read { variables } => variables.iter()
                                                    .try_for_each(|variable| self.read_variable(variable)),
            Command::Write { items } => self.write_line(items),
            Command::Compound(block) => self.exec_block(block),
        }
    }

    /// Runs a loop body while the condition holds.
    ///
    /// The condition is evaluated before every iteration, so a body may run
    /// zero times.
    ///
    /// # Errors
    /// `LoopLimitExceeded` once the configured iteration limit is passed.
    fn exec_while(&mut self, keyword: &Token, condition: &LogicalExpr, body: &Command) -> EvalResult<()> {
        let mut iterations: u64 = 0;

        while self.eval_logical(condition)? {
            iterations += 1;
            if let Some(limit) = self.limits.max_loop_iterations
               && iterations > limit
            {
                return Err(RuntimeError::LoopLimitExceeded { limit,
                                                             line: keyword.line });
            }
            self.exec_command(body)?;
        }

        trace!(line = keyword.line, iterations, "loop finished");
        Ok(())
    }

    /// Reads one input line into a variable.
    ///
    /// Integers accept an optionally signed decimal number surrounded by
    /// whitespace. Booleans become `true` only for the text `1`.
    ///
    /// # Errors
    /// - `UndeclaredVariable` if the target has no declared type.
    /// - `UnexpectedEndOfInput` if the input is exhausted.
    /// - `InvalidInput` if an integer line does not parse.
    fn read_variable(&mut self, variable: &Token) -> EvalResult<()> {
        let ty = self.type_of(variable)?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(RuntimeError::UnexpectedEndOfInput { name: variable.text.clone(),
                                                            line: variable.line, });
        }
        let text = line.trim();

        let value = match ty {
            Type::Integer => {
                let n = text.parse::<i64>()
                            .map_err(|_| RuntimeError::InvalidInput { name:  variable.text.clone(),
                                                                      input: text.to_string(),
                                                                      line:  variable.line, })?;
                Value::Integer(n)
            },
            Type::Boolean => Value::Boolean(text == "1"),
        };

        trace!(name = %variable.text, %value, "read");
        self.set_variable(variable, value)
    }

    /// Prints the items of an `escrever` on one line and flushes.
    ///
    /// Items are concatenated without separators.
    fn write_line(&mut self, items: &[WriteItem]) -> EvalResult<()> {
        let mut line = String::new();
        for item in items {
            match item {
                WriteItem::Text(text) => line.push_str(&text.value),
                WriteItem::Expr(expr) => line.push_str(&self.eval_expr(expr)?.to_string()),
            }
        }

        trace!(%line, "write");
        writeln!(self.output, "{line}")?;
        self.output.flush()?;
        Ok(())
    }
}
