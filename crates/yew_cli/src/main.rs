use crate::args::Args;
use clap::{CommandFactory, Parser as _};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::ExitCode;
use tracing::metadata::LevelFilter;
use tracing::{debug, trace};
use tracing_error::ErrorLayer;
use tracing_subscriber::fmt::format;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::Registry;
use yew_ast::render_tree;
use yew_ast_parsing::diagnostics::bin_ordered;
use yew_ast_parsing::{Lexer, Parser, ReplCommand, ReplStatement};
use yew_tokens::{scoped_repl_mode, TokenType};

mod args;

fn main() -> eyre::Result<ExitCode> {
    color_eyre::install()?;
    let args = Args::parse();
    init_logging(args.logging().log_level_filter())?;
    trace!("starting yew with args: {args:?}");
    debug!("yew version: {}", env!("CARGO_PKG_VERSION"));

    let mut clean = true;
    if let Some(file) = &args.file {
        clean = parse_file(file)?;
    }
    if args.interactive {
        repl()?;
    } else if args.file.is_none() {
        Args::command().print_help()?;
    }
    Ok(if clean {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Parses one file and prints its diagnostics grouped by severity. Returns
/// `false` when an error-severity diagnostic was emitted.
fn parse_file(path: &Path) -> eyre::Result<bool> {
    let text = fs::read_to_string(path)?;
    let mut parser = Parser::new(Lexer::from_text(path.display().to_string(), text));
    let ok = parser.parse();
    for diagnostic in bin_ordered(parser.errors()) {
        eprintln!("{diagnostic}");
    }
    if let Some(ast) = parser.ast() {
        debug!("syntax tree for {}:\n{}", path.display(), render_tree(ast));
    }
    Ok(ok)
}

fn repl() -> eyre::Result<()> {
    println!(
        "Yew (interactive) v{}\nUse :quit to exit\n",
        env!("CARGO_PKG_VERSION")
    );
    let _repl = scoped_repl_mode(true);
    repl_loop()
}

/// One submission per line: restore the scanner, feed it the line, then
/// print the statement's tree or the diagnostics.
fn repl_loop() -> eyre::Result<()> {
    let mut parser = Parser::new(Lexer::from_text("<stdin>", ""));
    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("yew> ");
        io::stdout().flush()?;
        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(());
        }
        parser.clear();
        let scanner = parser.reference_scanner();
        scanner.restore();
        scanner.append_source(&line);
        let ok = parser.repl_parse();
        let errors = parser.take_errors();
        for diagnostic in bin_ordered(&errors) {
            eprintln!("{diagnostic}");
        }
        if !ok {
            continue;
        }
        match parser.take_statement() {
            Some(ReplStatement::Command(command)) => {
                if !run_command(&command) {
                    return Ok(());
                }
            }
            Some(ReplStatement::Element(element)) => println!("{}", render_tree(&element)),
            Some(ReplStatement::Expr(expr)) => println!("{}", render_tree(&expr)),
            None => {}
        }
    }
}

/// Returns `false` when the command ends the session.
fn run_command(command: &ReplCommand) -> bool {
    match command.command.ty {
        TokenType::QuitCommand => false,
        TokenType::HelpCommand => {
            println!(
                "commands:\n  \
                 :help (:?)  show this listing\n  \
                 :quit       leave the session\n\n\
                 anything else is parsed as a definition, a typing, or an expression"
            );
            true
        }
        _ => {
            println!("command not implemented: {}", command.command.value);
            true
        }
    }
}

fn init_logging(level_filter: LevelFilter) -> eyre::Result<()> {
    let registry = Registry::default()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format().with_thread_ids(true))
                .with_writer(io::stderr)
                .with_filter(level_filter),
        )
        .with(ErrorLayer::default());

    tracing::subscriber::set_global_default(registry)?;

    Ok(())
}
