//! Lexical analysis for the Monkey language.
//!
//! [`Scanner`] turns source text into a stream of [`Token`]s that borrow
//! their literals from the source; [`Lexeme`] is the owned form. The
//! [`wire`] module moves token streams across process boundaries.
//!
//! Logging goes through `tracing`. Enable it with `RUST_LOG`, e.g.
//! `RUST_LOG=rmonkey=trace` prints every scanned token.

pub mod cli;
pub mod report;
mod scan;
mod span;
pub mod wire;

pub use scan::{Lexeme, Scanner, Token, TokenKind};
pub use span::Span;

use std::io::{self, Write};
use std::path::Path;
use std::sync::Once;

use cli::Emit;
use tracing::info;

static TRACING_INIT: Once = Once::new();

/// Install the stderr log subscriber. `RUST_LOG` takes precedence over
/// `verbosity`. Later calls are no-ops.
pub fn init_tracing(verbosity: u8) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let level = match verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(io::stderr).with_target(true))
            .with(filter)
            .init();
    });
}

/// Write `tokens` to `out` in the requested form.
pub fn emit<W: Write>(tokens: &[Token<'_>], mode: Emit, out: &mut W) -> anyhow::Result<()> {
    match mode {
        Emit::Tokens => {
            for token in tokens {
                writeln!(out, "{token}")?;
            }
        }
        Emit::Kinds => {
            let kinds: Vec<_> = tokens.iter().map(|t| t.kind.name()).collect();
            writeln!(out, "{}", kinds.join(" "))?;
        }
        Emit::Wire => out.write_all(&wire::encode(tokens)?)?,
    }

    out.flush()?;
    Ok(())
}

/// Scan a whole script, emit its tokens and report illegal ones on stderr.
///
/// Returns the number of illegal tokens.
pub fn run<W: Write>(
    path: &Path,
    source: &str,
    mode: Emit,
    out: &mut W,
) -> anyhow::Result<usize> {
    let tokens = Scanner::new(source).scan();
    info!(path = %path.display(), tokens = tokens.len(), "scanned script");

    emit(&tokens, mode, out)?;

    let path = path.to_string_lossy();
    let illegal = report::eprint_illegal(&path, source, &tokens)?;

    Ok(illegal)
}
