/// Read cursor over an immutable source buffer.
///
/// Byte oriented: `peek` and `advance` work one byte at a time and report the
/// end of input as `None`, no matter how often they are called past it. A
/// byte outside ASCII is the lead of a multi-byte `char`; `advance` steps over
/// the whole `char` there, so the position always sits on a `char` boundary.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    source: &'a str,
    pos: usize,
    line: usize,
}

impl<'a> Cursor<'a> {
    pub const fn new(source: &'a str) -> Self {
        Self {
            source,
            pos: 0,
            line: 1,
        }
    }

    pub const fn pos(&self) -> usize {
        self.pos
    }

    /// 1-based line of the byte under the cursor.
    pub const fn line(&self) -> usize {
        self.line
    }

    pub fn peek(&self) -> Option<u8> {
        self.source.as_bytes().get(self.pos).copied()
    }

    pub fn advance(&mut self) -> Option<u8> {
        let b = self.peek()?;
        if !b.is_ascii() {
            let _ = self.advance_char();
            return Some(b);
        }
        self.pos += 1;
        if b == b'\n' {
            self.line += 1;
        }
        Some(b)
    }

    /// Consume a whole `char`, however many bytes it is encoded in.
    pub fn advance_char(&mut self) -> Option<char> {
        let c = self.source[self.pos..].chars().next()?;
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    pub fn eat(&mut self, expected: u8) -> bool {
        self.eat_if(|b| b == expected)
    }

    pub fn eat_if<F>(&mut self, pred: F) -> bool
    where
        F: FnOnce(u8) -> bool,
    {
        if self.peek().is_some_and(pred) {
            let _ = self.advance();
            true
        } else {
            false
        }
    }

    pub fn eat_while<F>(&mut self, mut pred: F)
    where
        F: FnMut(u8) -> bool,
    {
        while self.eat_if(&mut pred) {}
    }

    /// Source text from `start` up to the cursor.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.pos]
    }
}
