use anyhow::{Context, Result};
use log::{info, warn};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::customer::Customer;

/// Read customers from a JSON-lines file. Lines that don't parse are logged
/// and skipped; failing to open or read the file is an error.
pub fn read_customers<P: AsRef<Path>>(path: P) -> Result<Vec<Customer>> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let customers = parse_customers(BufReader::new(file))
        .with_context(|| format!("reading {}", path.display()))?;
    info!("Read {} customers from {}", customers.len(), path.display());
    Ok(customers)
}

/// One customer per line. Blank lines are ignored.
pub fn parse_customers<R: BufRead>(reader: R) -> Result<Vec<Customer>> {
    let mut customers = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("line {}", idx + 1))?;
        if line.trim().is_empty() {
            continue;
        }
        match Customer::from_json(&line) {
            Ok(customer) => customers.push(customer),
            Err(e) => warn!("cannot read customer on line {}, ignoring: {}", idx + 1, e),
        }
    }
    Ok(customers)
}
