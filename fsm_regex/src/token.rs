use std::fmt::{Display, Formatter};

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub(crate) enum Token {
    Literal(char),
    Dot,
    Star,
    Plus,
    QuestionMark,
    Pipe,
    LParen,
    RParen,
    LCurlyBracket,
    RCurlyBracket,
    LSquareBracket,
    RSquareBracket,
    Caret,
    Dollar,
    BackSlash,
}

/// Positioned tokens of a pattern. Positions are char indexes, not byte
/// offsets, so they can be reported back to the user as is.
#[derive(Clone, Debug)]
pub(crate) struct TokenSequence {
    tokens: Vec<Token>,
    pos: usize,
}

impl TokenSequence {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }
}

impl Iterator for TokenSequence {
    type Item = (usize, Token);

    fn next(&mut self) -> Option<Self::Item> {
        let token = *self.tokens.get(self.pos)?;
        let index = self.pos;
        self.pos += 1;
        Some((index, token))
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", char::from(self))
    }
}

impl From<Token> for char {
    fn from(value: Token) -> Self {
        char::from(&value)
    }
}

impl From<&Token> for char {
    fn from(value: &Token) -> Self {
        match value {
            Token::Literal(c) => *c,
            Token::Dot => '.',
            Token::Star => '*',
            Token::Plus => '+',
            Token::QuestionMark => '?',
            Token::Pipe => '|',
            Token::LParen => '(',
            Token::RParen => ')',
            Token::LCurlyBracket => '{',
            Token::RCurlyBracket => '}',
            Token::LSquareBracket => '[',
            Token::RSquareBracket => ']',
            Token::Caret => '^',
            Token::Dollar => '$',
            Token::BackSlash => '\\',
        }
    }
}

impl From<&str> for TokenSequence {
    fn from(pattern: &str) -> Self {
        TokenSequence::new(pattern.chars().map(Token::from).collect())
    }
}

impl From<char> for Token {
    fn from(value: char) -> Self {
        match value {
            '.' => Token::Dot,
            '*' => Token::Star,
            '+' => Token::Plus,
            '?' => Token::QuestionMark,
            '|' => Token::Pipe,
            '(' => Token::LParen,
            ')' => Token::RParen,
            '{' => Token::LCurlyBracket,
            '}' => Token::RCurlyBracket,
            '[' => Token::LSquareBracket,
            ']' => Token::RSquareBracket,
            '^' => Token::Caret,
            '$' => Token::Dollar,
            '\\' => Token::BackSlash,
            _ => Token::Literal(value),
        }
    }
}
