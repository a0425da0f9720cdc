use clap::Parser;
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use promdoc::Result;

mod commands;

use crate::commands::GenerateArgs;

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "promdoc", version, about)]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(flatten)]
    args: GenerateArgs,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    commands::generate_docs(&cli.args).await
}
