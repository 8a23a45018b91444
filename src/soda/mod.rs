//! Thin client for the Socrata Open Data API (SODA).
//!
//! One `SodaClient` is built at startup and shared by reference across every
//! fetch; there is no module-level client state.

pub mod query;

pub use query::Query;

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::config::REQUEST_TIMEOUT_SECS;
use crate::error::{Error, Result};

/// One row as returned by the API: field name to JSON value, no local schema.
pub type Record = serde_json::Map<String, Value>;

#[derive(Debug)]
pub struct SodaClient {
    http: Client,
    base: Url,
}

impl SodaClient {
    /// Build a client for `domain`, sending `app_token` with every request.
    /// The fixed per-request timeout applies uniformly to every call.
    pub fn new(domain: &str, app_token: &str) -> Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        let token = reqwest::header::HeaderValue::from_str(app_token)?;
        headers.insert("X-App-Token", token);
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .default_headers(headers)
            .build()?;
        let base = Url::parse(&format!("https://{}/resource/", domain))?;
        Ok(Self { http, base })
    }

    fn resource_url(&self, dataset: &str) -> Result<Url> {
        Ok(self.base.join(&format!("{}.json", dataset))?)
    }

    /// Fetch one page of records for `dataset`.
    pub async fn page(&self, dataset: &str, query: &Query) -> Result<Vec<Record>> {
        let url = self.resource_url(dataset)?;
        debug!(%url, "GET page");
        let records = self
            .http
            .get(url)
            .query(&query.to_params())
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<Record>>()
            .await?;
        Ok(records)
    }

    /// Total number of rows in `dataset` matching `where_clause`, via
    /// `SELECT COUNT(*)`.
    pub async fn count(&self, dataset: &str, where_clause: &str) -> Result<u64> {
        let query = Query::new().filter(where_clause).select("COUNT(*)");
        let records = self.page(dataset, &query).await?;
        parse_count(&records)
    }
}

/// Pull the count out of a `SELECT COUNT(*)` response. The service returns a
/// single record with a `COUNT` field, sometimes as a JSON string and
/// sometimes as a number.
fn parse_count(records: &[Record]) -> Result<u64> {
    let value = records
        .first()
        .and_then(|rec| rec.get("COUNT"))
        .ok_or_else(|| Error::BadCount(format!("{:?}", records)))?;
    match value {
        Value::String(s) => s
            .trim()
            .parse::<u64>()
            .map_err(|_| Error::BadCount(s.clone())),
        Value::Number(n) => n
            .as_u64()
            .ok_or_else(|| Error::BadCount(n.to_string())),
        other => Err(Error::BadCount(other.to_string())),
    }
}
