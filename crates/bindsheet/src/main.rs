use anyhow::Context;
use bindsheet::{CheatSheet, Cli, Config};
use clap::Parser;
use std::io::{self, BufWriter};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    bindsheet::logging::init();

    let config = Config::from(cli);
    tracing::debug!(?config, "resolved configuration");

    let stdin = io::stdin().lock();
    let mut stdout = BufWriter::new(io::stdout().lock());
    CheatSheet::new(config)
        .run(stdin, &mut stdout)
        .context("failed to render key-bindings")?;
    Ok(())
}
