use anyhow::Context;

use stockledger_cli::{AppConfig, FromEnv};
use stockledger_inventory::Ledger;

fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("invalid configuration")?;
    stockledger_observability::init(&config.log);

    let mut ledger = Ledger::with_threshold(config.low_stock_threshold);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    stockledger_cli::run(&mut ledger, stdin.lock(), stdout.lock()).context("terminal I/O failed")?;

    Ok(())
}
