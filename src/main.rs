use std::io;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use simple_calculator::{cli::Cli, run};

fn main() {
    // Логи идут в stderr, stdout остаётся только для подсказок и результата
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let prompts = cli.prompts();
    let mut stdout = io::stdout().lock();

    let result = match cli.expr.as_deref() {
        Some(text) => run(text.as_bytes(), &mut stdout, prompts),
        None => run(io::stdin().lock(), &mut stdout, prompts),
    };

    // Арифметические ошибки уже напечатаны как итог, код выхода остаётся 0
    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
