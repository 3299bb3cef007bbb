#![allow(clippy::print_stdout)]

use clap::Parser;
use sitely::features::billing::handle_real_upgrade;
use sitely_logger::{LevelFilter, Logger};
use sitely_shell::{Cli, effective_config, render, resolve_entitlements};

#[sitely_runtime::main(current_thread)]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = effective_config(&cli)?;

    let level: LevelFilter = config.log.level.parse()?;
    let logger = Logger::builder().name(env!("CARGO_PKG_NAME")).level(level);
    let _logger = match &config.log.path {
        Some(dir) => logger.path(dir).json(config.log.json).init()?,
        None => logger.init()?,
    };

    let entitlements = resolve_entitlements(config.plan.as_deref(), cli.strict)?;
    tracing::info!(plan = %entitlements.plan(), "Plan resolved");

    if cli.upgrade {
        handle_real_upgrade().await;
    }

    println!("{}", render(&config, &entitlements, cli.json)?);
    Ok(())
}
