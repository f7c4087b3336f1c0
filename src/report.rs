use std::io::Write;

use anyhow::Result;

use crate::models::{AnnualStat, StateAnnualStat};

fn format_prop(prop: Option<f64>) -> String {
    // An undefined ratio (total = 0) serializes as an empty field
    match prop {
        Some(p) => p.to_string(),
        None => String::new(),
    }
}

/// Write the overall aggregation: one row per fiscal year
pub fn write_annual_csv<W: Write>(out: W, rows: &[AnnualStat]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(["year", "total", "req_experience", "prop_req_experience"])?;

    for row in rows {
        writer.write_record([
            row.year.to_string(),
            row.total.to_string(),
            row.req_experience.to_string(),
            format_prop(row.prop_req_experience),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// Write the by-state aggregation: one row per (year, state name) pair
pub fn write_state_csv<W: Write>(out: W, rows: &[StateAnnualStat]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record([
        "year",
        "state_name",
        "total",
        "req_experience",
        "prop_req_experience",
    ])?;

    for row in rows {
        writer.write_record([
            row.year.to_string(),
            row.state_name.clone(),
            row.total.to_string(),
            row.req_experience.to_string(),
            format_prop(row.prop_req_experience),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
