use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};
use log::info;

use invite::distance::Formula;
use invite::geo::{Point, DUBLIN_OFFICE};
use invite::reader::read_customers;
use invite::report::{print_invited, write_csv};
use invite::select::{rank_by_distance, select_with_distances};

#[derive(Parser, Debug)]
#[command(name = "invite")]
#[command(about = "List the customers living within a radius of the office, read from a JSON-lines file.", long_about = None)]
struct Cli {
    /// Input file, one JSON customer record per line
    #[arg(short, long, default_value_t = String::from("input/customers.txt"))]
    file: String,

    /// Radius of the invitation circle, in km
    #[arg(short, long, default_value_t = 100.0)]
    radius: f64,

    /// Office latitude in degrees
    #[arg(long, default_value_t = DUBLIN_OFFICE.latitude, allow_negative_numbers = true)]
    lat: f64,

    /// Office longitude in degrees
    #[arg(long, default_value_t = DUBLIN_OFFICE.longitude, allow_negative_numbers = true)]
    lon: f64,

    /// Great-circle distance formula
    #[arg(long, value_enum, default_value_t = Formula::Vincenty)]
    formula: Formula,

    /// Order of the invited customers
    #[arg(long, value_enum, default_value_t = SortOrder::Id)]
    sort: SortOrder,

    /// Also write the invited customers and their distances to this CSV file
    #[arg(short, long)]
    out: Option<String>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum SortOrder {
    /// Ascending user id
    Id,
    /// Nearest first, ties by user id
    Distance,
}

fn main() -> Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    let cli = Cli::parse();

    if !cli.radius.is_finite() || cli.radius < 0.0 {
        bail!("radius must be a non-negative number of km, got {}", cli.radius);
    }
    if !cli.lat.is_finite() || !cli.lon.is_finite() {
        bail!("office coordinates must be finite, got ({}, {})", cli.lat, cli.lon);
    }
    let office = Point::new(cli.lat, cli.lon);

    let customers = read_customers(&cli.file)?;

    let mut invited = select_with_distances(&customers, &office, &cli.formula, cli.radius);
    if cli.sort == SortOrder::Distance {
        rank_by_distance(&mut invited);
    }
    info!(
        "{} of {} customers within {} km of ({}, {}) using {:?}",
        invited.len(),
        customers.len(),
        cli.radius,
        office.latitude,
        office.longitude,
        cli.formula
    );

    print_invited(&invited)?;

    if let Some(out_path) = cli.out {
        write_csv(&out_path, &invited)?;
        info!("Wrote {} invited customers to {}", invited.len(), out_path);
    }

    Ok(())
}
