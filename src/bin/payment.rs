use clap::Parser;
use miette::{IntoDiagnostic, Result};
use patterns_demo::application::payment::run_payment;
use patterns_demo::interfaces::cli::CommonArgs;
use patterns_demo::interfaces::console::Terminal;
use std::io;

/// Pay an amount through one of several adapted payment providers.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.common.apply();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut terminal = Terminal::new(stdin.lock(), stdout.lock());
    run_payment(&mut terminal).into_diagnostic()?;

    Ok(())
}
