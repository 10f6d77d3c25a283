//! Full-text floor search. The backend proxies these queries to
//! Elasticsearch; all parameters travel in the query string.

use chrono::{DateTime, Utc};
use reqwest::{Method, StatusCode};

use crate::client::{Client, Endpoint};
use crate::models::Floor;
use crate::response::{build_response, Parsed, Response};
use crate::utils::error::Result;

#[derive(Debug, Clone, PartialEq)]
pub struct SearchFloorsQuery {
    /// Match the phrase exactly instead of analyzed text.
    pub accurate: bool,
    pub end_time: Option<DateTime<Utc>>,
    pub offset: i32,
    pub search: String,
    pub size: i32,
    pub start_time: Option<DateTime<Utc>>,
}

impl SearchFloorsQuery {
    pub fn new(search: impl Into<String>) -> Self {
        Self {
            accurate: false,
            end_time: None,
            offset: 0,
            search: search.into(),
            size: 10,
            start_time: None,
        }
    }
}

fn search_floors_endpoint(query: &SearchFloorsQuery) -> Endpoint {
    let mut endpoint = Endpoint::new(Method::POST, "/floors/search");
    endpoint.push_query("accurate", query.accurate);
    if let Some(end_time) = &query.end_time {
        endpoint.push_query("end_time", end_time.timestamp());
    }
    endpoint.push_query("offset", query.offset);
    endpoint.push_query("search", &query.search);
    endpoint.push_query("size", query.size);
    if let Some(start_time) = &query.start_time {
        endpoint.push_query("start_time", start_time.timestamp());
    }
    endpoint
}

fn parse_search_floors(status: StatusCode, body: &[u8]) -> Result<Parsed<Vec<Floor>>> {
    match status.as_u16() {
        200 => Ok(Parsed::Value(serde_json::from_slice(body)?)),
        _ => Ok(Parsed::Unexpected),
    }
}

/// Search floors by content. `POST /floors/search`
pub async fn search_floors_detailed(
    client: &Client,
    query: &SearchFloorsQuery,
) -> Result<Response<Vec<Floor>>> {
    let raw = client.execute(search_floors_endpoint(query)).await?;
    build_response(
        client.error_on_unexpected_status(),
        raw,
        parse_search_floors,
    )
}

pub async fn search_floors(
    client: &Client,
    query: &SearchFloorsQuery,
) -> Result<Option<Vec<Floor>>> {
    Ok(search_floors_detailed(client, query).await?.parsed)
}

#[cfg(feature = "blocking")]
pub mod blocking {
    //! Synchronous search endpoints.

    use super::*;
    use crate::blocking::Client;

    pub fn search_floors_detailed(
        client: &Client,
        query: &SearchFloorsQuery,
    ) -> Result<Response<Vec<Floor>>> {
        let raw = client.execute(super::search_floors_endpoint(query))?;
        build_response(
            client.error_on_unexpected_status(),
            raw,
            parse_search_floors,
        )
    }

    pub fn search_floors(
        client: &Client,
        query: &SearchFloorsQuery,
    ) -> Result<Option<Vec<Floor>>> {
        Ok(search_floors_detailed(client, query)?.parsed)
    }
}
