use std::io::{BufRead, Write};

use crate::{
    ast::{Expr, Factor, LogicalExpr, Term},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            arithmetic::{apply_arithmetic, compare},
            core::{EvalResult, Interpreter},
        },
        lexer::TokenKind,
        value::Value,
    },
};

impl<R: BufRead, W: Write> Interpreter<R, W> {
    /// Evaluates an arithmetic expression.
    ///
    /// The continuation chain is walked from the front with an accumulator,
    /// which makes `+` and `-` left-associative: `10 - 3 - 2` is `5`.
    ///
    /// # Errors
    /// Any error raised by an operand or operator.
    pub fn eval_expr(&self, expr: &Expr) -> EvalResult<Value> {
        let mut acc = self.eval_term(&expr.term)?;

        let mut rest = expr.rest.as_deref();
        while let Some(step) = rest {
            let right = self.eval_term(&step.term)?;
            acc = apply_arithmetic(&step.operator, acc, right)?;
            rest = step.rest.as_deref();
        }

        Ok(acc)
    }

    /// Evaluates a term, folding `*` and `/` from the left.
    ///
    /// # Errors
    /// `DivisionByZero` and `Overflow` among others.
    pub fn eval_term(&self, term: &Term) -> EvalResult<Value> {
        let mut acc = self.eval_factor(&term.factor)?;

        let mut rest = term.rest.as_deref();
        while let Some(step) = rest {
            let right = self.eval_factor(&step.factor)?;
            acc = apply_arithmetic(&step.operator, acc, right)?;
            rest = step.rest.as_deref();
        }

        Ok(acc)
    }

    /// Evaluates a factor.
    ///
    /// # Errors
    /// - `UndeclaredVariable` for unknown names.
    /// - `Overflow` when negating the smallest integer.
    /// - `TypeError` when a sign is applied to a boolean.
    pub fn eval_factor(&self, factor: &Factor) -> EvalResult<Value> {
        match factor {
            Factor::Grouped { expr, .. } => self.eval_expr(expr),
            Factor::Unary { operator, operand } => {
                let n = match self.eval_factor(operand)? {
                    Value::Integer(n) => n,
                    Value::Boolean(_) => {
                        return Err(RuntimeError::TypeError { details: format!("cannot apply '{}' to a boolean",
                                                                              operator.text),
                                                             line:    operator.line, });
                    },
                };
                match operator.kind {
                    TokenKind::Plus => Ok(Value::Integer(n)),
                    TokenKind::Minus => n.checked_neg()
                                         .map(Value::Integer)
                                         .ok_or(RuntimeError::Overflow { line:   operator.line,
                                                                         column: operator.column, }),
                    _ => Err(RuntimeError::UnknownOperator { operator: operator.text.clone(),
                                                             line:     operator.line,
                                                             column:   operator.column, }),
                }
            },
            Factor::Variable(token) => self.get_variable(token),
            Factor::Number(number) => Ok(Value::Integer(number.value)),
        }
    }

    /// Evaluates the condition of `se` or `enquanto`.
    ///
    /// A bare identifier is true when its value is true, or non-zero for an
    /// integer.
    ///
    /// # Errors
    /// Any error raised while evaluating the operands.
    pub fn eval_logical(&self, condition: &LogicalExpr) -> EvalResult<bool> {
        match condition {
            LogicalExpr::Comparison { left, operator, right } => {
                let left = self.eval_expr(left)?;
                let right = self.eval_expr(right)?;
                compare(operator, left, right)
            },
            LogicalExpr::Bare(token) => Ok(self.get_variable(token)?.is_truthy()),
        }
    }
}
