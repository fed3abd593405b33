use clap::Parser;
use vls_cli::args::Cli;

fn main() -> anyhow::Result<()> {
    vls_cli::run(Cli::parse())
}
