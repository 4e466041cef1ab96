mod repl;

use std::fs;
use std::io;
use std::process::exit;

use anyhow::Context;
use clap::Parser;
use repl::Repl;
use rmonkey::cli::Cli;
use rmonkey::run;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// `EX_DATAERR` from sysexits.h
const EXIT_ILLEGAL: i32 = 65;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    rmonkey::init_tracing(cli.verbose);

    let illegal = if let Some(script) = &cli.script {
        let code =
            fs::read_to_string(script).with_context(|| format!("script `{}`", script.display()))?;
        run(script, &code, cli.emit, &mut io::stdout().lock())?
    } else {
        repl(&cli)?
    };

    if cli.deny_illegal && illegal > 0 {
        exit(EXIT_ILLEGAL);
    }

    Ok(())
}

fn repl(cli: &Cli) -> anyhow::Result<usize> {
    let mut rl = DefaultEditor::new()?;
    let mut state = Repl::new(cli.emit);

    println!("Welcome to the Monkey programming language");
    loop {
        match rl.readline(repl::PROMPT) {
            Ok(line) => {
                if Repl::is_quit(&line) {
                    return Ok(state.illegal());
                }
                rl.add_history_entry(&line)?;
                state.rep(&line, &mut io::stdout().lock())?;
            }
            Err(ReadlineError::Eof) => return Ok(state.illegal()),
            Err(ReadlineError::Interrupted) => {
                eprintln!("user exit");
                exit(1);
            }
            Err(e) => return Err(e.into()),
        }
    }
}
