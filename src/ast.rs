use crate::interpreter::{lexer::Token, value::Type};

/// The root of a parsed source file.
///
/// `programa <name>; [var ...] início ... fim.`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    /// The program's name.
    pub name:         Token,
    /// The `var` section, if present.
    pub declarations: Option<Declarations>,
    /// The main block.
    pub block:        Block,
}

/// The `var` section: one or more declaration groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declarations {
    /// Declaration groups in source order.
    pub declarations: Vec<VarDeclaration>,
}

/// One declaration group, such as `x, y: inteiro;`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarDeclaration {
    /// The declared names, in order.
    pub names: Vec<Token>,
    /// Their common type.
    pub ty:    TypeSpec,
}

/// A type name as written in a declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSpec {
    /// The resolved type.
    pub ty:    Type,
    /// The keyword token.
    pub token: Token,
}

/// `início <commands> fim`, used both as the main block and as a compound
/// command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// The `início` token.
    pub begin:    Token,
    /// Commands in execution order.
    pub commands: Vec<Command>,
}

/// An executable statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `target := value`
    Assignment {
        /// The assigned variable.
        target:   Token,
        /// The `:=` token.
        operator: Token,
        /// The source expression.
        value:    Expr,
    },
    /// `se <condition> então <command> [senão <command>]`
    If {
        /// The `se` token.
        keyword:     Token,
        /// The condition.
        condition:   LogicalExpr,
        /// Runs when the condition holds.
        then_branch: Box<Self>,
        /// Runs otherwise, if present.
        else_branch: Option<Box<Self>>,
    },
    /// `enquanto <condition> faça <command>`
    While {
        /// The `enquanto` token.
        keyword:   Token,
        /// Checked before every iteration.
        condition: LogicalExpr,
        /// The loop body.
        body:      Box<Self>,
    },
    /// `ler(a, b, ...)`
    Read {
        /// Variables to fill, in order.
        variables: Vec<Token>,
    },
    /// `escrever(item, ...)`
    Write {
        /// Items printed in order without separators.
        items: Vec<WriteItem>,
    },
    /// A nested `início ... fim`.
    Compound(Block),
}

/// One argument of `escrever`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteItem {
    /// A string literal, printed verbatim.
    Text(StringLiteral),
    /// An arithmetic expression, printed as its value.
    Expr(Expr),
}

/// `expr := term expr2`
///
/// The grammar is right-recursive, so `a - b - c` is stored as `a` followed by
/// the chain `(- b (- c ε))`. Evaluation must still fold it from the left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expr {
    /// The leading term.
    pub term: Term,
    /// Further `+`/`-` steps. `None` is the empty continuation.
    pub rest: Option<Box<ExprCont>>,
}

/// `expr2 := ('+' | '-') term expr2 | ε`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprCont {
    /// The `+` or `-` token.
    pub operator: Token,
    /// The right operand of this step.
    pub term:     Term,
    /// The next step, if any.
    pub rest:     Option<Box<Self>>,
}

/// `term := factor term2`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    /// The leading factor.
    pub factor: Factor,
    /// Further `*`/`/` steps. `None` is the empty continuation.
    pub rest:   Option<Box<TermCont>>,
}

/// `term2 := ('*' | '/') factor term2 | ε`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermCont {
    /// The `*` or `/` token.
    pub operator: Token,
    /// The right operand of this step.
    pub factor:   Factor,
    /// The next step, if any.
    pub rest:     Option<Box<Self>>,
}

/// The operands of arithmetic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Factor {
    /// `( expr )`
    Grouped {
        /// The `(` token.
        open: Token,
        /// The inner expression.
        expr: Box<Expr>,
    },
    /// `-factor` or `+factor`.
    Unary {
        /// The sign token.
        operator: Token,
        /// The signed operand.
        operand:  Box<Self>,
    },
    /// A variable reference.
    Variable(Token),
    /// An integer literal.
    Number(Number),
}

/// A condition of `se` or `enquanto`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogicalExpr {
    /// `left <relop> right`
    Comparison {
        /// Left operand.
        left:     Expr,
        /// One of `< <= > >= = <>`.
        operator: Token,
        /// Right operand.
        right:    Expr,
    },
    /// A lone identifier standing for a boolean variable.
    Bare(Token),
}

/// An integer literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Number {
    /// The parsed value.
    pub value: i64,
    /// The literal token.
    pub token: Token,
}

/// A string literal inside `escrever`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringLiteral {
    /// The contents with the surrounding quotes removed.
    pub value: String,
    /// The literal token, quotes included.
    pub token: Token,
}

impl StringLiteral {
    /// Wraps a string token, stripping its delimiting quotes.
    ///
    /// # Example
    /// ```
    /// use lalg::{
    ///     ast::StringLiteral,
    ///     interpreter::lexer::{Token, TokenKind},
    /// };
    ///
    /// let literal = StringLiteral::from_token(Token::new(TokenKind::String, "\"oi\"", 1, 1));
    /// assert_eq!(literal.value, "oi");
    /// ```
    #[must_use]
    pub fn from_token(token: Token) -> Self {
        let text = token.text.as_str();
        let value = text.strip_prefix('"')
                        .and_then(|t| t.strip_suffix('"'))
                        .unwrap_or(text)
                        .to_string();
        Self { value, token }
    }
}

impl Expr {
    /// The first token of the expression, used to locate diagnostics.
    #[must_use]
    pub const fn first_token(&self) -> &Token {
        self.term.first_token()
    }

    /// The literal value if the whole expression is a single number.
    #[must_use]
    pub fn as_literal(&self) -> Option<i64> {
        match (&self.term.factor, &self.rest, &self.term.rest) {
            (Factor::Number(n), None, None) => Some(n.value),
            _ => None,
        }
    }
}

impl Term {
    /// The first token of the term.
    #[must_use]
    pub const fn first_token(&self) -> &Token {
        self.factor.first_token()
    }
}

impl Factor {
    /// The first token of the factor.
    #[must_use]
    pub const fn first_token(&self) -> &Token {
        match self {
            Self::Grouped { open, .. } => open,
            Self::Unary { operator, .. } => operator,
            Self::Variable(token) => token,
            Self::Number(n) => &n.token,
        }
    }
}

impl LogicalExpr {
    /// The token closest to the start of the condition.
    #[must_use]
    pub const fn first_token(&self) -> &Token {
        match self {
            Self::Comparison { left, .. } => left.first_token(),
            Self::Bare(token) => token,
        }
    }
}
