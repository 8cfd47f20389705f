//! GI CLI - Command line tool for resolving geotechnical investigation workbooks.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "gi-cli",
    version,
    about = "Geotechnical investigation workbook toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: gi_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    gi_cmd::run(cli.command)
}
