use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

#[derive(Debug, Parser)]
#[command(name = "rmonkey", version, about = "Tokenizer for the Monkey language")]
pub struct Cli {
    /// Tokenize a script instead of starting the REPL
    pub script: Option<PathBuf>,

    /// How scanned tokens are written to stdout
    #[arg(long, value_enum, default_value_t = Emit::Tokens)]
    pub emit: Emit,

    /// Exit with a failure status if any illegal token is scanned
    #[arg(long)]
    pub deny_illegal: bool,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Emit {
    /// `{ Type: ..    Literal: .. }` per line
    Tokens,
    /// Only the type name of each token
    Kinds,
    /// Length-prefixed binary stream
    Wire,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["rmonkey"]).unwrap();
        assert!(cli.script.is_none());
        assert_eq!(cli.emit, Emit::Tokens);
        assert!(!cli.deny_illegal);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn script_with_flags() {
        let cli = Cli::try_parse_from([
            "rmonkey",
            "prog.mk",
            "--emit",
            "wire",
            "--deny-illegal",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.script, Some(PathBuf::from("prog.mk")));
        assert_eq!(cli.emit, Emit::Wire);
        assert!(cli.deny_illegal);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn rejects_unknown_emit() {
        assert!(Cli::try_parse_from(["rmonkey", "--emit", "ast"]).is_err());
    }
}
