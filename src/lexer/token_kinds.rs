use logos::Logos;

/// Lexemes that can open a single command-line argument.
///
/// Only the leading lexeme of an argument is ever inspected; see
/// [`ArgToken::classify`].
#[derive(Logos, Clone, Copy, Debug, PartialEq)]
#[logos(subpattern digit = r"[0-9]")]
#[logos(subpattern sign = r"[+-]")]
#[logos(subpattern exponent = r"[eE](?&sign)?(?&digit)+")]
pub enum Lexeme {
    #[token("--")]
    LongPrefix,
    #[token("-")]
    ShortPrefix,

    #[regex("(?&sign)?(?&digit)+")]
    Integer,

    #[regex(r"(?&sign)?(?&digit)+\.(?&digit)*(?&exponent)?")]
    #[regex(r"(?&sign)?\.(?&digit)+(?&exponent)?")]
    #[regex("(?&sign)?(?&digit)+(?&exponent)")]
    Decimal,

    #[error]
    Error,
}

impl Lexeme {
    #[inline]
    pub fn is_number(&self) -> bool {
        matches!(self, Lexeme::Integer | Lexeme::Decimal)
    }
}

/// Role of one argument within the `--key value` grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgToken<'input> {
    /// A key with its `--` or `-` prefix stripped. May be empty.
    Key(&'input str),
    Value(&'input str),
}

impl<'input> ArgToken<'input> {
    /// Numeric literals such as `-5` or `.5e3` are values even though they
    /// may start with a dash.
    pub fn classify(arg: &'input str) -> Self {
        let mut lex = Lexeme::lexer(arg);
        match lex.next() {
            Some(Lexeme::LongPrefix) | Some(Lexeme::ShortPrefix) => ArgToken::Key(lex.remainder()),
            Some(lexeme) if lexeme.is_number() && lex.remainder().is_empty() => {
                ArgToken::Value(arg)
            }
            // "-5abc" lexes as a number followed by junk, but is still a key.
            Some(_) if arg.starts_with('-') => ArgToken::Key(&arg[1..]),
            _ => ArgToken::Value(arg),
        }
    }

    /// Read an argument that must be a key. Only the prefix matters here, so
    /// `-5` is the key `5`. `None` if the argument has no dash prefix.
    pub fn key_in(arg: &'input str) -> Option<&'input str> {
        arg.strip_prefix("--").or_else(|| arg.strip_prefix('-'))
    }

    #[inline]
    pub fn is_key(&self) -> bool {
        matches!(self, ArgToken::Key(_))
    }
}
