use std::{io, process::ExitCode};

use clap::Parser;
use infixa::{
    interpreter::{evaluator::core::Evaluator, operator::Associativity},
    shell::Shell,
};
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;

/// infixa is a console calculator for infix arithmetic with `+`, `-`, `*`,
/// `/`, `^` and parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluates this expression once instead of starting the interactive
    /// calculator.
    #[arg(allow_hyphen_values = true)]
    expression: Option<String>,

    /// Groups chains of `^` from the right, so `2^3^2` is 512 instead of 64.
    #[arg(long)]
    right_assoc_pow: bool,

    /// Logs more to stderr; repeat for even more.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt().with_max_level(level)
                             .with_target(false)
                             .with_writer(io::stderr)
                             .init();
    debug!(?args, "parsed arguments");

    let evaluator = if args.right_assoc_pow {
        Evaluator::with_power_associativity(Associativity::Right)
    } else {
        Evaluator::new()
    };

    if let Some(expression) = args.expression {
        return match evaluator.evaluate(&expression) {
            Ok(value) => {
                println!("{value:?}");
                ExitCode::SUCCESS
            },
            Err(e) => {
                eprintln!("Error: {e}");
                ExitCode::FAILURE
            },
        };
    }

    let mut shell = Shell::new(evaluator, io::stdin().lock(), io::stdout().lock());
    if let Err(e) = shell.run() {
        eprintln!("Failed to talk to the terminal: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
