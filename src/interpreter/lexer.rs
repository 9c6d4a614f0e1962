use logos::Logos;
use tracing::{debug, trace};

use crate::error::LexError;

/// The kind of a lexical token.
///
/// Keywords are not matched by dedicated patterns: every word is scanned as an
/// identifier and then retyped through [`keyword`], which makes the reserved
/// words case-insensitive and lets accented and unaccented spellings share a
/// kind.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[logos(extras = LexerExtras)]
pub enum TokenKind {
    /// `programa` / `program`
    Program,
    /// `var`
    Var,
    /// `início` / `begin`
    Begin,
    /// `fim` / `end`
    End,
    /// `inteiro` / `integer`
    Integer,
    /// `lógico` / `boolean`
    Boolean,
    /// `ler` / `read`
    Read,
    /// `escrever` / `write`
    Write,
    /// `se` / `if`
    If,
    /// `então` / `then`
    Then,
    /// `senão` / `else`
    Else,
    /// `enquanto` / `while`
    While,
    /// `faça` / `do`
    Do,
    /// Identifier tokens; variable and program names such as `x` or `soma`.
    #[regex(r"[a-zA-Z_À-ú][a-zA-Z0-9_À-ú]*", identifier_or_keyword)]
    Identifier,
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+")]
    Number,
    /// String literal tokens, quotes included: `"total: "`.
    #[regex(r#""([^"\\]|\\(.|\n))*""#, |lex| {
        track_newlines(lex);
        TokenKind::String
    })]
    String,
    /// `:=`
    #[token(":=")]
    Assign,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<>`
    #[token("<>")]
    NotEqual,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `=`
    #[token("=")]
    Equal,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `:`
    #[token(":")]
    Colon,
    /// `.`
    #[token(".")]
    Dot,
    /// `,`
    #[token(",")]
    Comma,
    /// ```text
    /// /* Comments, possibly spanning lines. */
    /// ```
    #[token("/*", skip_comment)]
    Comment,
    /// Line breaks.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        lex.extras.line_start = lex.span().end;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

impl TokenKind {
    /// Returns `true` for the six relational operators.
    #[must_use]
    pub const fn is_relational(self) -> bool {
        matches!(self,
                 Self::Less
                 | Self::LessEqual
                 | Self::Greater
                 | Self::GreaterEqual
                 | Self::Equal
                 | Self::NotEqual)
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Self::Program => "'program'",
            Self::Var => "'var'",
            Self::Begin => "'begin'",
            Self::End => "'end'",
            Self::Integer => "'integer'",
            Self::Boolean => "'boolean'",
            Self::Read => "'read'",
            Self::Write => "'write'",
            Self::If => "'if'",
            Self::Then => "'then'",
            Self::Else => "'else'",
            Self::While => "'while'",
            Self::Do => "'do'",
            Self::Identifier => "identifier",
            Self::Number => "number",
            Self::String => "string",
            Self::Assign => "':='",
            Self::LessEqual => "'<='",
            Self::GreaterEqual => "'>='",
            Self::NotEqual => "'<>'",
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Star => "'*'",
            Self::Slash => "'/'",
            Self::Equal => "'='",
            Self::Less => "'<'",
            Self::Greater => "'>'",
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::LBracket => "'['",
            Self::RBracket => "']'",
            Self::Semicolon => "';'",
            Self::Colon => "':'",
            Self::Dot => "'.'",
            Self::Comma => "','",
            Self::Comment => "comment",
            Self::NewLine => "newline",
            Self::Ignored => "whitespace",
        };
        f.write_str(text)
    }
}

/// A token together with its source text and position.
///
/// `line` and `column` are 1-based and point at the first character of the
/// token. Columns count characters, not bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What was matched.
    pub kind:   TokenKind,
    /// The raw matched text. String tokens keep their quotes.
    pub text:   String,
    /// Source line.
    pub line:   usize,
    /// Source column.
    pub column: usize,
}

impl Token {
    /// Builds a token by hand. Mostly useful in tests.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize, column: usize) -> Self {
        Self { kind,
               text: text.into(),
               line,
               column }
    }
}

/// Position bookkeeping carried by the lexer.
///
/// `line_start` is the byte offset where the current line begins, from which
/// the column of each token is derived.
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line:       usize,
    /// Byte offset of the first character of the current line.
    pub line_start: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line:       1,
               line_start: 0, }
    }
}

/// Looks up a word in the reserved-word table.
///
/// The comparison is case-insensitive. Both the Portuguese keywords (with or
/// without accents) and their English counterparts are recognised.
///
/// # Example
/// ```
/// use lalg::interpreter::lexer::{TokenKind, keyword};
///
/// assert_eq!(keyword("INÍCIO"), Some(TokenKind::Begin));
/// assert_eq!(keyword("while"), Some(TokenKind::While));
/// assert_eq!(keyword("contador"), None);
/// ```
#[must_use]
pub fn keyword(word: &str) -> Option<TokenKind> {
    let kind = match word.to_lowercase().as_str() {
        "programa" | "program" => TokenKind::Program,
        "var" => TokenKind::Var,
        "início" | "inicio" | "begin" => TokenKind::Begin,
        "fim" | "end" => TokenKind::End,
        "inteiro" | "integer" => TokenKind::Integer,
        "lógico" | "logico" | "boolean" => TokenKind::Boolean,
        "ler" | "read" => TokenKind::Read,
        "escrever" | "write" => TokenKind::Write,
        "se" | "if" => TokenKind::If,
        "então" | "entao" | "then" => TokenKind::Then,
        "senão" | "senao" | "else" => TokenKind::Else,
        "enquanto" | "while" => TokenKind::While,
        "faça" | "faca" | "do" => TokenKind::Do,
        _ => return None,
    };
    Some(kind)
}

fn identifier_or_keyword(lex: &mut logos::Lexer<TokenKind>) -> TokenKind {
    keyword(lex.slice()).unwrap_or(TokenKind::Identifier)
}

/// Extends the match to the closing `*/` and skips it.
///
/// An unterminated comment is an error at its opening `/`.
fn skip_comment(lex: &mut logos::Lexer<TokenKind>) -> Result<logos::Skip, ()> {
    let end = lex.remainder().find("*/").ok_or(())?;
    lex.bump(end + 2);
    track_newlines(lex);
    Ok(logos::Skip)
}

/// Advances the line counter past newlines embedded in the current match.
fn track_newlines(lex: &mut logos::Lexer<TokenKind>) {
    let start = lex.span().start;
    if let Some(last) = lex.slice().rfind('\n') {
        lex.extras.line += lex.slice().matches('\n').count();
        lex.extras.line_start = start + last + 1;
    }
}

/// Converts source text into an ordered list of tokens.
///
/// Whitespace, newlines and `/* ... */` comments are consumed but never
/// emitted. Every other match yields exactly one [`Token`] carrying the line
/// and column of its first character.
///
/// # Errors
/// Returns [`LexError::UnrecognizedCharacter`] for the first character no
/// pattern accepts, including an unterminated string's opening quote.
///
/// # Example
/// ```
/// use lalg::interpreter::lexer::{TokenKind, tokenize};
///
/// let tokens = tokenize("x := 10").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds, [TokenKind::Identifier, TokenKind::Assign, TokenKind::Number]);
/// assert_eq!(tokens[2].column, 6);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let line = lexer.extras.line;
        let column = column_of(source, lexer.extras.line_start, span.start);

        match result {
            Ok(kind) => {
                // Multi-line tokens already moved the counters, so take the
                // position from before the match.
                let (line, column) = if kind == TokenKind::String {
                    start_of(source, span.start)
                } else {
                    (line, column)
                };
                trace!(?kind, text = lexer.slice(), line, column, "token");
                tokens.push(Token { kind,
                                    text: lexer.slice().to_string(),
                                    line,
                                    column });
            },
            Err(()) => {
                let character = lexer.slice().chars().next().unwrap_or_default();
                return Err(LexError::UnrecognizedCharacter { character, line, column });
            },
        }
    }

    debug!(count = tokens.len(), "tokenized source");
    Ok(tokens)
}

fn column_of(source: &str, line_start: usize, offset: usize) -> usize {
    source.get(line_start..offset)
          .map_or(1, |prefix| prefix.chars().count() + 1)
}

/// Recomputes the 1-based position of a byte offset from scratch.
fn start_of(source: &str, offset: usize) -> (usize, usize) {
    let prefix = &source[..offset];
    let line = prefix.matches('\n').count() + 1;
    let line_start = prefix.rfind('\n').map_or(0, |i| i + 1);
    (line, column_of(source, line_start, offset))
}
