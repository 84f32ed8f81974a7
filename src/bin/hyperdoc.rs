use clap::Parser;
use hyperdoc::cli::{run_cli, Cli};
use hyperdoc::logging::{init_logging_with_config, LogConfig};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = init_logging_with_config(&LogConfig::from_env())?;
    run_cli(cli)
}
