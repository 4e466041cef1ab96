use std::iter::FusedIterator;

use tracing::{debug, trace};

use super::{Cursor, Token, TokenKind};
use crate::span::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Scanning,
    Finished,
}

/// Turns source text into tokens, one per call.
///
/// The scanner never fails: a character no rule accepts becomes a
/// [`TokenKind::Illegal`] token and scanning carries on after it. Once the
/// end of input is reached every further call yields the same `Eof` token.
///
/// As an [`Iterator`] it yields the whole token stream, ending with exactly
/// one `Eof`, and then `None`.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    state: State,
}

impl<'a> Scanner<'a> {
    pub const fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            state: State::Scanning,
        }
    }

    pub fn scan(self) -> Vec<Token<'a>> {
        let tokens: Vec<_> = self.collect();
        debug!(
            tokens = tokens.len(),
            illegal = tokens.iter().filter(|t| t.is_illegal()).count(),
            "scan finished"
        );
        tokens
    }

    pub const fn is_finished(&self) -> bool {
        matches!(self.state, State::Finished)
    }

    pub fn next_token(&mut self) -> Token<'a> {
        self.skip_whitespace();

        let start = self.cursor.pos();
        let line = self.cursor.line();

        let kind = match self.cursor.peek() {
            None => {
                self.state = State::Finished;
                TokenKind::Eof
            }
            Some(b) if b.is_ascii() => {
                let _ = self.cursor.advance();
                self.scan_ascii(b, start)
            }
            Some(_) => {
                let _ = self.cursor.advance_char();
                TokenKind::Illegal
            }
        };

        let token = Token::new(
            kind,
            self.cursor.slice_from(start),
            Span::new(start..self.cursor.pos(), line),
        );
        trace!(kind = %token.kind, literal = token.literal, offset = start, "token");

        token
    }
}

impl Scanner<'_> {
    fn skip_whitespace(&mut self) {
        self.cursor.eat_while(is_whitespace);
    }

    fn scan_ascii(&mut self, b: u8, start: usize) -> TokenKind {
        match b {
            b'(' => TokenKind::LeftParen,
            b')' => TokenKind::RightParen,
            b'{' => TokenKind::LeftBrace,
            b'}' => TokenKind::RightBrace,
            b',' => TokenKind::Comma,
            b';' => TokenKind::Semicolon,
            b'+' => TokenKind::Plus,
            b'-' => TokenKind::Minus,
            b'*' => TokenKind::Star,
            b'/' => TokenKind::Slash,
            b'<' => TokenKind::Less,
            b'>' => TokenKind::Greater,
            b'=' => {
                if self.cursor.eat(b'=') {
                    TokenKind::EqualEqual
                } else {
                    TokenKind::Equal
                }
            }
            b'!' => {
                if self.cursor.eat(b'=') {
                    TokenKind::BangEqual
                } else {
                    TokenKind::Bang
                }
            }
            b if b.is_ascii_digit() => {
                self.cursor.eat_while(|b| b.is_ascii_digit());
                TokenKind::Int
            }
            b if is_ident_start(b) => self.identifier_or_keyword(start),
            _ => TokenKind::Illegal,
        }
    }

    fn identifier_or_keyword(&mut self, start: usize) -> TokenKind {
        self.cursor.eat_while(is_ident_continue);

        let word = self.cursor.slice_from(start);
        TokenKind::keyword(word).unwrap_or(TokenKind::Identifier)
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_finished() {
            return None;
        }

        Some(self.next_token())
    }
}

impl FusedIterator for Scanner<'_> {}

const fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r')
}

const fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

const fn is_ident_continue(b: u8) -> bool {
    is_ident_start(b) || b.is_ascii_digit()
}
