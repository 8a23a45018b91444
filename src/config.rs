//! Fixed configuration for the exporter.
//!
//! Everything here is a literal by design: dataset ids, the service host,
//! and the app token are pinned to the NYC open-data portal and there is no
//! environment or file override in this version.

use std::ops::RangeInclusive;

// ========== Socrata service ==========

/// NYC open-data portal host.
pub const DATA_DOMAIN: &str = "data.cityofnewyork.us";

/// Static application token sent with every request.
pub const APP_TOKEN: &str = "P6aMTgXXbSq4qlMfdjZTfZcdq";

/// Per-request timeout, applied uniformly to every call.
pub const REQUEST_TIMEOUT_SECS: u64 = 600;

// ========== Datasets ==========

/// 311 Service Requests dataset.
pub const COMPLAINTS_DATASET: &str = "erm2-nwe9";

/// Open Parking and Camera Violations dataset.
pub const VIOLATIONS_DATASET: &str = "nc67-uf89";

/// Page size for the count-then-page loop over 311 complaints.
pub const COMPLAINTS_PAGE_SIZE: u64 = 2000;

/// Single-shot limit for the violations fetch. If a year ever matches more
/// rows than this, the result is silently truncated at the server.
pub const VIOLATIONS_FETCH_LIMIT: u64 = 1_000_000;

/// Column the violations export removes: its value format breaks the
/// downstream BigQuery loader.
pub const VIOLATIONS_DROPPED_COLUMN: &str = "interest_amount";

// ========== Output ==========

/// Years exported, inclusive on both ends.
pub const EXPORT_YEARS: RangeInclusive<u32> = 2021..=2023;

/// Directory the per-year CSV files land in.
pub const OUTPUT_DIR: &str = "data";
