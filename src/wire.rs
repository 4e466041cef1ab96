//! Length-prefixed transfer format for token streams.
//!
//! Used whenever tokens have to leave the process (or cross any other
//! isolation boundary). Nothing is terminated by a sentinel; every byte
//! string carries its length up front:
//!
//! ```text
//! stream  := count:u32 token*count
//! token   := type_len:u32 type_bytes literal_len:u32 literal_bytes
//! ```
//!
//! All integers are little-endian. `type_bytes` is [`TokenKind::name`].
//! Literals are UTF-8, except that an `ILLEGAL` literal may be a single byte
//! taken from source that was not valid UTF-8.
//! Decoding checks every length against the remaining input before touching
//! the payload and rejects the whole buffer on the first inconsistency.

use std::{slice, str};

use smol_str::SmolStr;
use thiserror::Error;
use tracing::debug;

use crate::scan::{Lexeme, Scanner, Token, TokenKind};
use crate::span::Span;

const LEN_SIZE: usize = 4;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WireError {
    #[error("truncated input: needed {needed} bytes at offset {offset}, {available} available")]
    Truncated {
        offset: usize,
        needed: usize,
        available: usize,
    },
    #[error("unknown token type `{0}`")]
    UnknownType(String),
    #[error("invalid utf-8 at offset {offset}")]
    InvalidUtf8 { offset: usize },
    #[error("{0} trailing bytes after last token")]
    TrailingBytes(usize),
    #[error("length {0} does not fit the wire format")]
    TooLarge(usize),
}

/// Scan `source` and encode the resulting stream, `Eof` included.
///
/// The length of `source` is authoritative; it needs no terminator. Bytes
/// that are not valid UTF-8 become one `ILLEGAL` token each, carrying the
/// raw byte as literal.
pub fn tokenize(source: &[u8]) -> Result<Vec<u8>, WireError> {
    let mut pairs: Vec<(TokenKind, &[u8])> = Vec::new();
    for chunk in source.utf8_chunks() {
        pairs.extend(
            Scanner::new(chunk.valid())
                .take_while(|t| !t.is_eof())
                .map(|t| (t.kind, t.literal.as_bytes())),
        );
        pairs.extend(
            chunk
                .invalid()
                .iter()
                .map(|b| (TokenKind::Illegal, slice::from_ref(b))),
        );
    }
    pairs.push((TokenKind::Eof, b"".as_slice()));

    let illegal = pairs.iter().filter(|(k, _)| *k == TokenKind::Illegal).count();
    debug!(tokens = pairs.len(), illegal, "tokenized raw buffer");

    encode_pairs(pairs.len(), pairs.into_iter())
}

pub fn encode(tokens: &[Token<'_>]) -> Result<Vec<u8>, WireError> {
    encode_pairs(
        tokens.len(),
        tokens.iter().map(|t| (t.kind, t.literal.as_bytes())),
    )
}

pub fn encode_lexemes(lexemes: &[Lexeme]) -> Result<Vec<u8>, WireError> {
    encode_pairs(
        lexemes.len(),
        lexemes.iter().map(|l| (l.kind, l.literal.as_bytes())),
    )
}

fn encode_pairs<'a, I>(count: usize, pairs: I) -> Result<Vec<u8>, WireError>
where
    I: Iterator<Item = (TokenKind, &'a [u8])>,
{
    let mut out = Vec::with_capacity(LEN_SIZE + count * 16);
    put_len(&mut out, count)?;
    for (kind, literal) in pairs {
        put_bytes(&mut out, kind.name().as_bytes())?;
        put_bytes(&mut out, literal)?;
    }

    Ok(out)
}

fn put_len(out: &mut Vec<u8>, len: usize) -> Result<(), WireError> {
    let len = u32::try_from(len).map_err(|_| WireError::TooLarge(len))?;
    out.extend_from_slice(&len.to_le_bytes());
    Ok(())
}

fn put_bytes(out: &mut Vec<u8>, bytes: &[u8]) -> Result<(), WireError> {
    put_len(out, bytes.len())?;
    out.extend_from_slice(bytes);
    Ok(())
}

pub fn decode(bytes: &[u8]) -> Result<Vec<Lexeme>, WireError> {
    let mut reader = Reader { bytes, offset: 0 };

    let count = reader.len()?;
    // Every token needs at least its two length prefixes.
    reader.ensure(count.saturating_mul(2 * LEN_SIZE))?;

    let mut lexemes = Vec::with_capacity(count);
    for _ in 0..count {
        let name = reader.str()?;
        let kind = TokenKind::from_name(name)
            .ok_or_else(|| WireError::UnknownType(name.to_owned()))?;
        let literal = match kind {
            TokenKind::Illegal => SmolStr::new(String::from_utf8_lossy(reader.bytes()?)),
            _ => SmolStr::new(reader.str()?),
        };
        lexemes.push(Lexeme::new(kind, literal, Span::default()));
    }

    match reader.remaining() {
        0 => Ok(lexemes),
        n => Err(WireError::TrailingBytes(n)),
    }
}

struct Reader<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> Reader<'a> {
    fn remaining(&self) -> usize {
        self.bytes.len() - self.offset
    }

    fn ensure(&self, needed: usize) -> Result<(), WireError> {
        let available = self.remaining();
        if needed > available {
            return Err(WireError::Truncated {
                offset: self.offset,
                needed,
                available,
            });
        }
        Ok(())
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], WireError> {
        self.ensure(n)?;
        let out = &self.bytes[self.offset..self.offset + n];
        self.offset += n;
        Ok(out)
    }

    fn len(&mut self) -> Result<usize, WireError> {
        let mut buf = [0; LEN_SIZE];
        buf.copy_from_slice(self.take(LEN_SIZE)?);
        Ok(u32::from_le_bytes(buf) as usize)
    }

    fn bytes(&mut self) -> Result<&'a [u8], WireError> {
        let len = self.len()?;
        self.take(len)
    }

    fn str(&mut self) -> Result<&'a str, WireError> {
        let len = self.len()?;
        let offset = self.offset;
        let bytes = self.take(len)?;
        str::from_utf8(bytes).map_err(|e| WireError::InvalidUtf8 {
            offset: offset + e.valid_up_to(),
        })
    }
}
