use std::fmt;

use logos::Logos;

/// The closed set of lexical categories.
///
/// Every variant except [`TokenKind::EndOfInput`] is produced by the `logos`
/// state machine; the end marker is appended by [`scan`] once the input is
/// exhausted. Whitespace, lone `=` and `!`, and any character the language
/// does not know are matched by skip rules so the scanner never fails.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[logos(extras = LexerExtras)]
pub enum TokenKind {
    /// Identifier tokens such as `x` or `else`.
    #[regex(r"\p{L}[\p{L}\p{Nd}]*", priority = 3)]
    Identifier,
    /// Decimal digit runs such as `42` or `٤٢`. There is no fractional syntax.
    #[regex(r"\p{Nd}+", priority = 3)]
    Number,
    /// `📦`
    #[token("📦")]
    Assign,
    /// `📢` or `🖨`
    #[token("📢")]
    #[token("🖨")]
    #[token("🖨\u{fe0f}")]
    Print,
    /// `➕`
    #[token("➕")]
    Plus,
    /// `➖`
    #[token("➖")]
    Minus,
    /// `✖`
    #[token("✖")]
    #[token("✖\u{fe0f}")]
    Star,
    /// `➗`
    #[token("➗")]
    Slash,
    /// `❓`
    #[token("❓")]
    If,
    /// `🔁`
    #[token("🔁")]
    While,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `>`
    #[token(">")]
    Greater,
    /// `<`
    #[token("<")]
    Less,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `;`
    #[token(";")]
    Semicolon,
    /// Appended once after the last real token.
    EndOfInput,

    /// Line feeds only bump the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and carriage returns.
    #[regex(r"[ \t\r]+", logos::skip, priority = 3)]
    Ignored,
    /// A lone `=` or `!` that does not start `==` or `!=`.
    #[token("=", logos::skip)]
    #[token("!", logos::skip)]
    Stray,
    /// Every other character is dropped. Loses to every rule above.
    #[regex(r".", logos::skip, priority = 1)]
    Unknown,
}

impl TokenKind {
    /// The upper-case name used in a token's printable form.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Identifier => "IDENTIFIER",
            Self::Number => "NUMBER",
            Self::Assign => "ASSIGN",
            Self::Print => "PRINT",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Star => "STAR",
            Self::Slash => "SLASH",
            Self::If => "IF",
            Self::While => "WHILE",
            Self::LBrace => "LBRACE",
            Self::RBrace => "RBRACE",
            Self::LParen => "LPAREN",
            Self::RParen => "RPAREN",
            Self::Greater => "GREATER",
            Self::Less => "LESS",
            Self::EqualEqual => "EQUAL_EQUAL",
            Self::BangEqual => "BANG_EQUAL",
            Self::Semicolon => "SEMICOLON",
            Self::EndOfInput => "END_OF_INPUT",
            Self::NewLine => "NEW_LINE",
            Self::Ignored => "IGNORED",
            Self::Stray => "STRAY",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number so that every token, and therefore every
/// AST node and error, can point back into the source.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// A scanned token: its kind, the exact source text it came from and the line
/// it started on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The lexical category.
    pub kind:   TokenKind,
    /// The source substring this token was scanned from.
    pub lexeme: String,
    /// 1-based source line.
    pub line:   usize,
}

impl Token {
    /// Creates a token.
    #[must_use]
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize) -> Self {
        Self { kind,
               lexeme: lexeme.into(),
               line }
    }

    /// Returns `true` for the end-of-input marker.
    #[must_use]
    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.kind, self.lexeme)
    }
}

/// Converts source text into a token sequence terminated by exactly one
/// [`TokenKind::EndOfInput`] token.
///
/// Scanning works on Unicode scalar values, so emoji outside the basic
/// multilingual plane are recognized as single symbols. It never fails:
/// characters the language does not know are dropped.
///
/// # Example
/// ```
/// use emojilang::interpreter::lexer::{TokenKind, scan};
///
/// let tokens = scan("📦 x == 42");
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            [TokenKind::Assign,
///             TokenKind::Identifier,
///             TokenKind::EqualEqual,
///             TokenKind::Number,
///             TokenKind::EndOfInput]);
/// assert_eq!(tokens[3].lexeme, "42");
/// ```
#[must_use]
pub fn scan(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(result) = lexer.next() {
        // Every character is covered by a rule; an error here can only be a
        // partial match, which is dropped like any other unknown input.
        if let Ok(kind) = result {
            tokens.push(Token::new(kind, lexer.slice(), lexer.extras.line));
        }
    }

    tokens.push(Token::new(TokenKind::EndOfInput, "", lexer.extras.line));
    tokens
}
