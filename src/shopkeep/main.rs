use clap::Parser;
use shopkeep::api::ShopApi;
use shopkeep::config::ShopConfig;
use shopkeep::error::Result;
use shopkeep::model::{InventoryItem, SalesRecord};
use shopkeep::store::fs::CsvStore;
use std::io;
use std::path::PathBuf;
use tracing::Level;

mod args;
mod cli;

use args::Cli;
use cli::{Exit, MenuController};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let data_dir = cli.data_dir.unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&data_dir)?;

    let config = ShopConfig::load(&data_dir)?;
    let inventory = CsvStore::<InventoryItem>::open(config.inventory_path(&data_dir))?;
    let sales = CsvStore::<SalesRecord>::open(config.sales_path(&data_dir))?;
    tracing::info!(
        inventory = %inventory.path().display(),
        sales = %sales.path().display(),
        "opened tables"
    );

    let api = ShopApi::new(inventory, sales);
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut controller = MenuController::new(api, stdin.lock(), stdout.lock());

    match controller.run()? {
        Exit::Farewell => tracing::debug!("session ended by operator"),
        Exit::EndOfInput => tracing::debug!("session ended at end of input"),
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
