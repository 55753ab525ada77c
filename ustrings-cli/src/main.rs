use anyhow::Result;
use clap::Parser;
use ustrings_cli::commands::ScanArgs;

fn main() -> Result<()> {
    ScanArgs::parse().execute()
}
