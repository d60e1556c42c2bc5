use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;

use toll_gate::{
    ConnectionProvider, DatabaseConfig, TollAmount, VehicleType, create_toll_record,
    initialize_db,
};

/// A utility for creating a test database for the toll gate tool.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'toll_system.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'toll_system.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let provider = ConnectionProvider::new(DatabaseConfig::new(output_path));
    let conn = provider.open_or_create()?;

    initialize_db(&conn)?;

    println!("Creating test toll records...");

    for vehicle_type in VehicleType::all() {
        let toll_amount = TollAmount::new(vehicle_type.toll_fee())?;
        create_toll_record(vehicle_type.as_str(), toll_amount, &conn)?;
    }

    println!("Success!");

    Ok(())
}
