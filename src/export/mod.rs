//! The two per-year export jobs and the run loop tying them together.

use std::path::PathBuf;

use tracing::info;

use crate::config::{
    COMPLAINTS_DATASET, COMPLAINTS_PAGE_SIZE, EXPORT_YEARS, OUTPUT_DIR, VIOLATIONS_DATASET,
    VIOLATIONS_DROPPED_COLUMN, VIOLATIONS_FETCH_LIMIT,
};
use crate::error::Result;
use crate::fetch::{fetch_bulk, fetch_paged};
use crate::soda::SodaClient;
use crate::table::Table;

fn complaints_filter(year: u32) -> String {
    format!("complaint_type = 'Illegal Parking' AND date_extract_y(created_date)={year}")
}

fn violations_filter(year: u32) -> String {
    // issue_date is a free-form string in this dataset, so the year is
    // matched by suffix rather than a date function.
    format!("violation LIKE '%PARKING%' AND (issue_date LIKE '%{year}')")
}

fn complaints_output_path(year: u32) -> PathBuf {
    PathBuf::from(OUTPUT_DIR).join(format!("311_illegal_parking_complaints_{year}.csv"))
}

fn violations_output_path(year: u32) -> PathBuf {
    PathBuf::from(OUTPUT_DIR).join(format!("open_parking_violations_{year}.csv"))
}

/// Export one year of 311 Illegal Parking complaints: count, page through
/// the full result set, flatten, write.
pub async fn export_complaints(client: &SodaClient, year: u32) -> Result<PathBuf> {
    info!(year, "fetching Illegal Parking complaints");
    let records = fetch_paged(
        client,
        COMPLAINTS_DATASET,
        &complaints_filter(year),
        COMPLAINTS_PAGE_SIZE,
    )
    .await?;

    let path = complaints_output_path(year);
    Table::from_records(records).write_csv(&path)?;
    Ok(path)
}

/// Export one year of Open Parking violations: one capped bulk fetch, drop
/// the loader-hostile column, flatten, write.
pub async fn export_violations(client: &SodaClient, year: u32) -> Result<PathBuf> {
    info!(year, "fetching Open Parking violations");
    let records = fetch_bulk(
        client,
        VIOLATIONS_DATASET,
        &violations_filter(year),
        VIOLATIONS_FETCH_LIMIT,
    )
    .await?;

    let mut table = Table::from_records(records);
    table.drop_column(VIOLATIONS_DROPPED_COLUMN)?;

    let path = violations_output_path(year);
    table.write_csv(&path)?;
    Ok(path)
}

/// Run both exports for every configured year, strictly sequentially. The
/// first failure aborts everything.
pub async fn run_all(client: &SodaClient) -> Result<()> {
    for year in EXPORT_YEARS {
        let path = export_complaints(client, year).await?;
        info!(year, path = %path.display(), "complaints export done");
    }
    for year in EXPORT_YEARS {
        let path = export_violations(client, year).await?;
        info!(year, path = %path.display(), "violations export done");
    }
    Ok(())
}
