use std::{
    error::Error,
    io::{self},
    path::PathBuf,
};

use clap::Parser;

use toll_gate::{
    ConnectionProvider, DEFAULT_DB_PATH, DEFAULT_LOG_PATH, DatabaseConfig, RecordStore, Shell,
    initialize_db, setup_logging,
};

/// An interactive tool for collecting tolls and managing toll records.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to the toll SQLite database. Created if it does not exist.
    #[arg(long, env = "TOLL_GATE_DB_PATH", default_value = DEFAULT_DB_PATH)]
    db_path: PathBuf,

    /// File path to append debug logs to.
    #[arg(long, env = "TOLL_GATE_LOG_PATH", default_value = DEFAULT_LOG_PATH)]
    log_path: PathBuf,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    setup_logging(&args.log_path)?;

    let provider = ConnectionProvider::new(DatabaseConfig::new(args.db_path));
    {
        let connection = provider.open_or_create()?;
        initialize_db(&connection)?;
    }
    tracing::info!("Using toll database at {:?}", provider.config().path());

    let store = RecordStore::new(provider);
    let mut shell = Shell::new(store, io::stdin().lock(), io::stdout().lock());
    shell.run()?;

    Ok(())
}
