//! NICU CLI - inspect uploads and export dashboards without a browser.

use clap::Parser;

mod cmd;

#[derive(Parser)]
#[command(
    name = "nicu-cli",
    version,
    about = "NICU weight and blood gas dashboard toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    cmd::run(cli.command)
}
