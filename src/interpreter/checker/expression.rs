use crate::{
    ast::{Expr, Factor, LogicalExpr, Term},
    error::SemanticError,
    interpreter::{
        checker::core::{CheckResult, Checker},
        lexer::Token,
        value::Type,
    },
};

impl Checker {
    /// Infers the type of an arithmetic expression.
    ///
    /// The continuation chain is walked left to right, joining each step's
    /// operand with the type accumulated so far, so `a + b` with one integer
    /// side is an integer.
    pub fn infer_expr(&self, expr: &Expr) -> CheckResult<Type> {
        let mut ty = self.infer_term(&expr.term)?;

        let mut rest = expr.rest.as_deref();
        while let Some(step) = rest {
            let rhs = self.infer_term(&step.term)?;
            ty = join(ty, rhs);
            rest = step.rest.as_deref();
        }

        Ok(ty)
    }

    /// Infers the type of a term.
    pub fn infer_term(&self, term: &Term) -> CheckResult<Type> {
        let mut ty = self.infer_factor(&term.factor)?;

        let mut rest = term.rest.as_deref();
        while let Some(step) = rest {
            let rhs = self.infer_factor(&step.factor)?;
            ty = join(ty, rhs);
            rest = step.rest.as_deref();
        }

        Ok(ty)
    }

    /// Infers the type of a factor.
    ///
    /// Numbers are always integers. A signed factor must be an integer.
    pub fn infer_factor(&self, factor: &Factor) -> CheckResult<Type> {
        match factor {
            Factor::Grouped { expr, .. } => self.infer_expr(expr),
            Factor::Unary { operator, operand } => {
                let ty = self.infer_factor(operand)?;
                if ty != Type::Integer {
                    return Err(invalid_operand(operator, ty));
                }
                Ok(Type::Integer)
            },
            Factor::Variable(token) => self.lookup(token),
            Factor::Number(_) => Ok(Type::Integer),
        }
    }

    /// Infers the type of a condition.
    ///
    /// Comparisons are boolean, provided both sides have the same type. A bare
    /// identifier has its declared type, which the caller then checks.
    pub fn infer_logical(&self, condition: &LogicalExpr) -> CheckResult<Type> {
        match condition {
            LogicalExpr::Comparison { left,
                                      operator,
                                      right, } => {
                let expected = self.infer_expr(left)?;
                let found = self.infer_expr(right)?;
                if expected != found {
                    return Err(SemanticError::TypeMismatch { expected,
                                                             found,
                                                             line: operator.line,
                                                             column: operator.column });
                }
                Ok(Type::Boolean)
            },
            LogicalExpr::Bare(token) => self.lookup(token),
        }
    }
}

/// Combines the types on both sides of `+ - * /`.
///
/// The result is boolean only when both sides are boolean. Every other pair
/// joins to integer.
const fn join(left: Type, right: Type) -> Type {
    match (left, right) {
        (Type::Boolean, Type::Boolean) => Type::Boolean,
        _ => Type::Integer,
    }
}

fn invalid_operand(operator: &Token, found: Type) -> SemanticError {
    SemanticError::InvalidOperand { operator: operator.text.clone(),
                                    found,
                                    line: operator.line,
                                    column: operator.column }
}
