use clap::Parser;
use fizzbuzz_cli::Cli;

fn main() -> anyhow::Result<()> {
    fizzbuzz_cli::init_tracing();
    let cli = Cli::parse();
    cli.run()?;
    Ok(())
}
