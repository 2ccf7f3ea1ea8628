use anyhow::{Context, Result};
use csv::Writer;
use std::io::{self, Write};
use std::path::Path;

use crate::customer::Customer;
use crate::select::Selected;

pub const HEADER: &str = "***INVITED CUSTOMERS***";

/// Header line, then one `Customer\tid: ..\tname: ..` line per invitee.
pub fn write_invited<W: Write>(out: &mut W, invited: &[Selected<'_, Customer>]) -> io::Result<()> {
    writeln!(out, "{HEADER}")?;
    for selected in invited {
        writeln!(out, "{}", selected.entity)?;
    }
    Ok(())
}

pub fn print_invited(invited: &[Selected<'_, Customer>]) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_invited(&mut out, invited).context("writing to stdout")?;
    out.flush()?;
    Ok(())
}

/// CSV report with columns `user_id,name,distance_km`.
pub fn write_csv<P: AsRef<Path>>(path: P, invited: &[Selected<'_, Customer>]) -> Result<()> {
    let path = path.as_ref();
    let mut wtr =
        Writer::from_path(path).with_context(|| format!("creating CSV {}", path.display()))?;
    write_records(&mut wtr, invited)?;
    wtr.flush()?;
    Ok(())
}

fn write_records<W: Write>(wtr: &mut Writer<W>, invited: &[Selected<'_, Customer>]) -> Result<()> {
    wtr.write_record(["user_id", "name", "distance_km"])?;
    for selected in invited {
        wtr.write_record(&[
            selected.entity.user_id.to_string(),
            selected.entity.name.clone(),
            format!("{:.6}", selected.distance_km),
        ])?;
    }
    Ok(())
}
