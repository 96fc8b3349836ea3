use log::debug;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::client::Api;
use crate::error::{Error, Result};
use crate::model::Page;

pub const PAGE_SIZE: usize = 100;

/// Append the page-size hint to a list URL.
pub fn with_page_size(url: &str) -> String {
    let sep = if url.contains('?') { '&' } else { '?' };
    format!("{url}{sep}limit={PAGE_SIZE}")
}

/// Follow `next_page` cursors until the service stops sending one, returning
/// every record exactly as the service sent it, in server order. The first
/// failed page aborts the whole fetch.
///
/// There is no page cap: a service that keeps returning a cursor keeps this
/// looping.
pub fn fetch_all(api: &impl Api, url: &str) -> Result<Vec<Value>> {
    let mut records = Vec::new();
    let mut next = Some(with_page_size(url));
    let mut pages = 0usize;

    while let Some(current) = next.take() {
        let body = api.get(&current)?;
        let page: Page<Value> = serde_json::from_value(body)
            .map_err(|e| Error::Malformed(format!("{e} (from {current})")))?;
        pages += 1;
        debug!("page {pages} of {url}: {} records", page.data.len());
        records.extend(page.data);
        next = page.next_page.map(|n| n.uri);
    }

    Ok(records)
}

/// Read raw records into typed ones.
pub fn decode<T: DeserializeOwned>(records: Vec<Value>) -> Result<Vec<T>> {
    records
        .into_iter()
        .map(|r| serde_json::from_value(r).map_err(|e| Error::Malformed(e.to_string())))
        .collect()
}
