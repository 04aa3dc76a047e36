//! Аргументы командной строки.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "simple-calculator")]
#[command(version, about = "Reads two integers and an operator, prints one result", long_about = None)]
pub struct Cli {
    /// Read the operation from TEXT instead of stdin (e.g. "7 * -3")
    #[arg(short, long, value_name = "TEXT", allow_hyphen_values = true)]
    pub expr: Option<String>,

    /// Do not print the banner and prompts
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Печатать ли заголовок и подсказки.
    #[must_use]
    pub const fn prompts(&self) -> bool {
        !self.quiet && self.expr.is_none()
    }
}
