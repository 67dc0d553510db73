use std::io::{self, BufRead};

use anyhow::{Context, bail};
use charcomb::arith::evaluate;
use clap::Parser;

/// Evaluate arithmetic expressions with + - * / and parentheses
#[derive(Parser, Debug)]
#[command(name = "charcomb", version)]
struct Cli {
    /// Expressions to evaluate; read one per line from stdin when omitted
    expressions: Vec<String>,

    /// Show the surrounding source when an expression fails
    #[arg(long)]
    context: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let expressions = if cli.expressions.is_empty() {
        io::stdin()
            .lock()
            .lines()
            .collect::<Result<Vec<_>, _>>()
            .context("Failed to read expressions from stdin")?
    } else {
        cli.expressions
    };

    let mut failures = 0;
    for expression in expressions.iter().filter(|e| !e.trim().is_empty()) {
        match evaluate(expression) {
            Ok(value) => println!("{expression} = {value}"),
            Err(err) => {
                failures += 1;
                if cli.context {
                    eprintln!("{}", err.render(expression));
                } else {
                    eprintln!("{err}");
                }
            }
        }
    }

    if failures > 0 {
        bail!("{failures} expression(s) failed");
    }
    Ok(())
}
