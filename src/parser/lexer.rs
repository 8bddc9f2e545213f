//! Lexer (tokenizer) for script source code
//!
//! Converts raw source text into a flat [`Token`] stream consumed by the parser.
//! The lexer stops at the first character it does not recognise; there is no
//! resynchronisation and no partial-token recovery.

use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;

/// Every kind of token the lexer can produce.
///
/// Literal payloads live in [`TokenValue`], so kinds can be compared and
/// reported in errors without carrying any text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Literals
    Number,
    String,
    Id,

    // Keywords
    Var,
    Function,
    Return,
    If,
    Else,
    While,
    For,
    Break,
    Continue,
    Class,

    // Arithmetic
    Add, // +
    Sub, // -
    Mul, // *
    Div, // /
    Mod, // %

    // Assignment and comparison
    Assign, // =
    Eq,     // ==
    Neq,    // !=
    Not,    // !
    Lt,     // <
    Lte,    // <=
    Gt,     // >
    Gte,    // >=

    // Logical (spelled `and` / `or`)
    And,
    Or,

    // Punctuation
    LParen,    // (
    RParen,    // )
    LBrace,    // {
    RBrace,    // }
    Semicolon, // ;
    Comma,     // ,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Number => write!(f, "number literal"),
            TokenKind::String => write!(f, "string literal"),
            TokenKind::Id => write!(f, "identifier"),
            TokenKind::Var => write!(f, "'var'"),
            TokenKind::Function => write!(f, "'function'"),
            TokenKind::Return => write!(f, "'return'"),
            TokenKind::If => write!(f, "'if'"),
            TokenKind::Else => write!(f, "'else'"),
            TokenKind::While => write!(f, "'while'"),
            TokenKind::For => write!(f, "'for'"),
            TokenKind::Break => write!(f, "'break'"),
            TokenKind::Continue => write!(f, "'continue'"),
            TokenKind::Class => write!(f, "'class'"),
            TokenKind::Add => write!(f, "'+'"),
            TokenKind::Sub => write!(f, "'-'"),
            TokenKind::Mul => write!(f, "'*'"),
            TokenKind::Div => write!(f, "'/'"),
            TokenKind::Mod => write!(f, "'%'"),
            TokenKind::Assign => write!(f, "'='"),
            TokenKind::Eq => write!(f, "'=='"),
            TokenKind::Neq => write!(f, "'!='"),
            TokenKind::Not => write!(f, "'!'"),
            TokenKind::Lt => write!(f, "'<'"),
            TokenKind::Lte => write!(f, "'<='"),
            TokenKind::Gt => write!(f, "'>'"),
            TokenKind::Gte => write!(f, "'>='"),
            TokenKind::And => write!(f, "'and'"),
            TokenKind::Or => write!(f, "'or'"),
            TokenKind::LParen => write!(f, "'('"),
            TokenKind::RParen => write!(f, "')'"),
            TokenKind::LBrace => write!(f, "'{{'"),
            TokenKind::RBrace => write!(f, "'}}'"),
            TokenKind::Semicolon => write!(f, "';'"),
            TokenKind::Comma => write!(f, "','"),
        }
    }
}

/// Literal payload attached to a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenValue {
    None,
    Integer(i64),
    Str(String),
    Ident(String),
}

/// A single lexical unit: its kind plus the literal value, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: TokenValue,
}

impl Token {
    /// A token without a payload (keywords, operators, punctuation).
    pub fn new(kind: TokenKind) -> Self {
        Self {
            kind,
            value: TokenValue::None,
        }
    }

    pub fn number(value: i64) -> Self {
        Self {
            kind: TokenKind::Number,
            value: TokenValue::Integer(value),
        }
    }

    pub fn string(text: impl Into<String>) -> Self {
        Self {
            kind: TokenKind::String,
            value: TokenValue::Str(text.into()),
        }
    }

    pub fn ident(name: impl Into<String>) -> Self {
        Self {
            kind: TokenKind::Id,
            value: TokenValue::Ident(name.into()),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            TokenValue::None => write!(f, "{}", self.kind),
            TokenValue::Integer(n) => write!(f, "{} {}", self.kind, n),
            TokenValue::Str(s) => write!(f, "{} \"{}\"", self.kind, s),
            TokenValue::Ident(name) => write!(f, "{} '{}'", self.kind, name),
        }
    }
}

/// Reserved words, resolved once per identifier after the full run is read.
static KEYWORDS: LazyLock<FxHashMap<&'static str, TokenKind>> = LazyLock::new(|| {
    let mut map = FxHashMap::default();
    map.insert("var", TokenKind::Var);
    map.insert("function", TokenKind::Function);
    map.insert("return", TokenKind::Return);
    map.insert("if", TokenKind::If);
    map.insert("else", TokenKind::Else);
    map.insert("while", TokenKind::While);
    map.insert("for", TokenKind::For);
    map.insert("break", TokenKind::Break);
    map.insert("continue", TokenKind::Continue);
    map.insert("class", TokenKind::Class);
    map.insert("and", TokenKind::And);
    map.insert("or", TokenKind::Or);
    map
});

/// Lexer error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("Illegal character: '{0}'")]
    UnexpectedChar(char),

    #[error("Integer literal out of range: {0}")]
    IntegerOverflow(String),
}

/// Tokenize a complete source string into an ordered token buffer.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).tokenize()
}

/// Lexer for script source code
///
/// Tokens can be pulled one at a time through the [`Iterator`] impl, or
/// collected up front with [`Lexer::tokenize`]. Once an error has been
/// yielded the iterator is exhausted.
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    failed: bool,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            failed: false,
        }
    }

    /// Tokenize the entire input
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        self.by_ref().collect()
    }

    /// Get next token, or `None` once the input is consumed
    fn next_token(&mut self) -> Option<Result<Token, LexError>> {
        self.skip_whitespace();

        let ch = self.advance()?;

        let token = match ch {
            '0'..='9' => return Some(self.number_literal(ch)),
            '"' => self.string_literal(),
            c if c.is_alphabetic() || c == '_' => self.identifier_or_keyword(c),

            '=' => self.one_or_two('=', TokenKind::Eq, TokenKind::Assign),
            '!' => self.one_or_two('=', TokenKind::Neq, TokenKind::Not),
            '<' => self.one_or_two('=', TokenKind::Lte, TokenKind::Lt),
            '>' => self.one_or_two('=', TokenKind::Gte, TokenKind::Gt),

            '+' => Token::new(TokenKind::Add),
            '-' => Token::new(TokenKind::Sub),
            '*' => Token::new(TokenKind::Mul),
            '/' => Token::new(TokenKind::Div),
            '%' => Token::new(TokenKind::Mod),
            '(' => Token::new(TokenKind::LParen),
            ')' => Token::new(TokenKind::RParen),
            '{' => Token::new(TokenKind::LBrace),
            '}' => Token::new(TokenKind::RBrace),
            ';' => Token::new(TokenKind::Semicolon),
            ',' => Token::new(TokenKind::Comma),

            _ => return Some(Err(LexError::UnexpectedChar(ch))),
        };

        Some(Ok(token))
    }

    /// Emit `double` if the next character is `second`, otherwise `single`.
    fn one_or_two(&mut self, second: char, double: TokenKind, single: TokenKind) -> Token {
        if self.peek() == Some(second) {
            self.advance();
            Token::new(double)
        } else {
            Token::new(single)
        }
    }

    /// Parse string literal
    ///
    /// Reads up to the next `"`. Input that ends before the closing quote still
    /// produces a token holding whatever was read.
    fn string_literal(&mut self) -> Token {
        let mut string = String::new();

        while let Some(ch) = self.advance() {
            if ch == '"' {
                break;
            }
            string.push(ch);
        }

        Token::string(string)
    }

    /// Parse numeric literal (integers only)
    fn number_literal(&mut self, first_digit: char) -> Result<Token, LexError> {
        let mut num_str = String::new();
        num_str.push(first_digit);

        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                num_str.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        let value = num_str
            .parse::<i64>()
            .map_err(|_| LexError::IntegerOverflow(num_str.clone()))?;

        Ok(Token::number(value))
    }

    /// Parse identifier or keyword
    fn identifier_or_keyword(&mut self, first_char: char) -> Token {
        let mut ident = String::new();
        ident.push(first_char);

        while let Some(ch) = self.peek() {
            if ch.is_alphanumeric() || ch == '_' {
                ident.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        match KEYWORDS.get(ident.as_str()) {
            Some(&kind) => Token::new(kind),
            None => Token::ident(ident),
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Advance to next character
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;
        Some(ch)
    }
}

impl Iterator for Lexer {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let item = self.next_token();
        if matches!(item, Some(Err(_))) {
            self.failed = true;
        }
        item
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source)
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_simple_tokens() {
        let tokens = tokenize("var x = 5;").unwrap();

        assert_eq!(
            tokens,
            vec![
                Token::new(TokenKind::Var),
                Token::ident("x"),
                Token::new(TokenKind::Assign),
                Token::number(5),
                Token::new(TokenKind::Semicolon),
            ]
        );
    }

    #[test]
    fn test_operators() {
        assert_eq!(
            kinds("= == ! != < <= > >="),
            vec![
                TokenKind::Assign,
                TokenKind::Eq,
                TokenKind::Not,
                TokenKind::Neq,
                TokenKind::Lt,
                TokenKind::Lte,
                TokenKind::Gt,
                TokenKind::Gte,
            ]
        );

        // No whitespace between operators
        assert_eq!(
            kinds("a<=b==c"),
            vec![
                TokenKind::Id,
                TokenKind::Lte,
                TokenKind::Id,
                TokenKind::Eq,
                TokenKind::Id,
            ]
        );
        assert_eq!(kinds("!!x"), vec![TokenKind::Not, TokenKind::Not, TokenKind::Id]);
    }

    #[test]
    fn test_punctuation() {
        assert_eq!(
            kinds("+-*/%(){};,"),
            vec![
                TokenKind::Add,
                TokenKind::Sub,
                TokenKind::Mul,
                TokenKind::Div,
                TokenKind::Mod,
                TokenKind::LParen,
                TokenKind::RParen,
                TokenKind::LBrace,
                TokenKind::RBrace,
                TokenKind::Semicolon,
                TokenKind::Comma,
            ]
        );
    }

    #[test]
    fn test_keywords() {
        assert_eq!(
            kinds("var function return if else while for break continue class and or"),
            vec![
                TokenKind::Var,
                TokenKind::Function,
                TokenKind::Return,
                TokenKind::If,
                TokenKind::Else,
                TokenKind::While,
                TokenKind::For,
                TokenKind::Break,
                TokenKind::Continue,
                TokenKind::Class,
                TokenKind::And,
                TokenKind::Or,
            ]
        );
    }

    #[test]
    fn test_identifiers_are_not_keyword_prefixes() {
        let tokens = tokenize("variable _tmp if2 orange").unwrap();

        assert_eq!(
            tokens,
            vec![
                Token::ident("variable"),
                Token::ident("_tmp"),
                Token::ident("if2"),
                Token::ident("orange"),
            ]
        );
    }

    #[test]
    fn test_number_literal() {
        for digits in ["0", "7", "42", "007", "123456789", "9223372036854775807"] {
            let tokens = tokenize(digits).unwrap();
            assert_eq!(tokens, vec![Token::number(digits.parse().unwrap())]);
        }

        // A digit run stops at the first non-digit
        assert_eq!(
            tokenize("12abc").unwrap(),
            vec![Token::number(12), Token::ident("abc")]
        );
    }

    #[test]
    fn test_number_overflow() {
        let err = tokenize("9223372036854775808").unwrap_err();
        assert_eq!(
            err,
            LexError::IntegerOverflow("9223372036854775808".to_string())
        );
    }

    #[test]
    fn test_string_literal() {
        let tokens = tokenize(r#""hello world" x"#).unwrap();
        assert_eq!(tokens, vec![Token::string("hello world"), Token::ident("x")]);
    }

    #[test]
    fn test_unterminated_string_keeps_text() {
        let tokens = tokenize(r#"var s = "abc"#).unwrap();
        assert_eq!(tokens.last(), Some(&Token::string("abc")));
    }

    #[test]
    fn test_illegal_character() {
        assert_eq!(tokenize("@").unwrap_err(), LexError::UnexpectedChar('@'));
        assert_eq!(
            tokenize("var x = 1 & 2;").unwrap_err(),
            LexError::UnexpectedChar('&')
        );
    }

    #[test]
    fn test_non_ascii_digits() {
        // Unicode digits may continue an identifier but never start a number
        assert_eq!(tokenize("x٣").unwrap(), vec![Token::ident("x٣")]);
        assert_eq!(tokenize("٣").unwrap_err(), LexError::UnexpectedChar('٣'));
    }

    #[test]
    fn test_token_display() {
        assert_eq!(Token::new(TokenKind::Semicolon).to_string(), "';'");
        assert_eq!(Token::number(5).to_string(), "number literal 5");
        assert_eq!(Token::string("hi").to_string(), "string literal \"hi\"");
        assert_eq!(Token::ident("x").to_string(), "identifier 'x'");
    }

    #[test]
    fn test_iterator_stops_after_error() {
        let mut lexer = Lexer::new("x # y");

        assert_eq!(lexer.next(), Some(Ok(Token::ident("x"))));
        assert_eq!(lexer.next(), Some(Err(LexError::UnexpectedChar('#'))));
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_whitespace_only() {
        assert!(tokenize(" \t\r\n ").unwrap().is_empty());
        assert!(tokenize("").unwrap().is_empty());
    }
}
