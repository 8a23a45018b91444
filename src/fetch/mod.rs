//! Pagination over a SODA dataset.
//!
//! Two strategies, matching the two datasets we pull:
//!
//! - [`fetch_paged`]: ask for the total count, then walk offsets in fixed
//!   steps until the whole result set has been accumulated.
//! - [`fetch_bulk`]: one request with a large fixed limit, for datasets where
//!   the count query is skipped. Rows beyond the limit are silently lost.

use tracing::{debug, info};

use crate::error::Result;
use crate::soda::{Query, Record, SodaClient};

/// The offsets a count-then-page walk requests for a reported `total`.
///
/// The bound check happens after advancing past each fetched page, so there
/// is always at least one offset even when `total` is zero, and a total that
/// lands exactly on a page boundary gets one trailing (empty) page.
///
/// `page_size` must be nonzero, otherwise the walk can never pass `total`.
pub fn page_offsets(total: u64, page_size: u64) -> Vec<u64> {
    assert!(page_size > 0, "page_size must be nonzero");
    let mut offsets = Vec::new();
    let mut next = 0;
    loop {
        offsets.push(next);
        next += page_size;
        if next > total {
            break;
        }
    }
    offsets
}

/// Count the rows matching `where_clause`, then fetch them page by page in
/// offset order into a single accumulator.
pub async fn fetch_paged(
    client: &SodaClient,
    dataset: &str,
    where_clause: &str,
    page_size: u64,
) -> Result<Vec<Record>> {
    let total = client.count(dataset, where_clause).await?;
    info!(dataset, total, page_size, "paging through result set");

    let mut records = Vec::with_capacity(total as usize);
    for offset in page_offsets(total, page_size) {
        let query = Query::new()
            .filter(where_clause)
            .offset(offset)
            .limit(page_size);
        let page = client.page(dataset, &query).await?;
        debug!(dataset, offset, rows = page.len(), "fetched page");
        records.extend(page);
    }
    Ok(records)
}

/// Fetch everything matching `where_clause` in one request capped at `limit`.
/// No count is taken first, so a result set larger than `limit` is truncated
/// without any indication.
pub async fn fetch_bulk(
    client: &SodaClient,
    dataset: &str,
    where_clause: &str,
    limit: u64,
) -> Result<Vec<Record>> {
    info!(dataset, limit, "single bulk fetch");
    let query = Query::new().filter(where_clause).offset(0).limit(limit);
    let records = client.page(dataset, &query).await?;
    debug!(dataset, rows = records.len(), "bulk fetch complete");
    Ok(records)
}
