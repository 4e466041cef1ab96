use std::io::Write;

use rmonkey::cli::Emit;
use rmonkey::report;
use rmonkey::Scanner;
use tracing::debug;

pub const PROMPT: &str = ">> ";
pub const QUIT: &str = "\\q";

#[derive(Debug)]
pub struct Repl {
    mode: Emit,
    lines: usize,
    illegal: usize,
}

impl Repl {
    pub const fn new(mode: Emit) -> Self {
        Self {
            mode,
            lines: 0,
            illegal: 0,
        }
    }

    pub fn is_quit(input: &str) -> bool {
        input.trim() == QUIT
    }

    pub const fn illegal(&self) -> usize {
        self.illegal
    }

    /// Scan one line with a fresh scanner and print its tokens.
    pub fn rep<W: Write>(&mut self, input: &str, out: &mut W) -> anyhow::Result<()> {
        self.lines += 1;

        let tokens = Scanner::new(input).scan();
        rmonkey::emit(&tokens, self.mode, out)?;
        writeln!(out)?;

        self.illegal += report::eprint_illegal("<repl>", input, &tokens)?;
        debug!(line = self.lines, tokens = tokens.len(), "evaluated line");

        Ok(())
    }
}
