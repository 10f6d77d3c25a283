//! Tag endpoints.

use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::client::{Client, Endpoint};
use crate::models::Tag;
use crate::response::{build_response, Parsed, Response};
use crate::utils::error::{ApiError, Result};

/// Tag reference used when creating or modifying holes; a tag that does not
/// exist yet is created on the fly.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TagCreate {
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListTagsQuery {
    /// Fuzzy name filter.
    pub s: Option<String>,
}

fn list_tags_endpoint(query: &ListTagsQuery) -> Endpoint {
    let mut endpoint = Endpoint::new(Method::GET, "/tags");
    if let Some(s) = &query.s {
        endpoint.push_query("s", s);
    }
    endpoint
}

fn parse_list_tags(status: StatusCode, body: &[u8]) -> Result<Parsed<Vec<Tag>>> {
    match status.as_u16() {
        200 => Ok(Parsed::Value(serde_json::from_slice(body)?)),
        _ => Ok(Parsed::Unexpected),
    }
}

/// List all tags. `GET /tags`
pub async fn list_tags_detailed(
    client: &Client,
    query: &ListTagsQuery,
) -> Result<Response<Vec<Tag>>> {
    let raw = client.execute(list_tags_endpoint(query)).await?;
    build_response(client.error_on_unexpected_status(), raw, parse_list_tags)
}

pub async fn list_tags(client: &Client, query: &ListTagsQuery) -> Result<Option<Vec<Tag>>> {
    Ok(list_tags_detailed(client, query).await?.parsed)
}

fn get_tag_endpoint(id: i32) -> Endpoint {
    Endpoint::new(Method::GET, format!("/tags/{}", id))
}

fn parse_get_tag(status: StatusCode, body: &[u8]) -> Result<Parsed<Tag>> {
    match status.as_u16() {
        200 => Ok(Parsed::Value(serde_json::from_slice(body)?)),
        404 => Err(ApiError::from_status(status, body)),
        _ => Ok(Parsed::Unexpected),
    }
}

/// Get a tag. `GET /tags/{id}`
pub async fn get_tag_detailed(client: &Client, id: i32) -> Result<Response<Tag>> {
    let raw = client.execute(get_tag_endpoint(id)).await?;
    build_response(client.error_on_unexpected_status(), raw, parse_get_tag)
}

pub async fn get_tag(client: &Client, id: i32) -> Result<Option<Tag>> {
    Ok(get_tag_detailed(client, id).await?.parsed)
}

#[cfg(feature = "blocking")]
pub mod blocking {
    //! Synchronous tag endpoints.

    use super::*;
    use crate::blocking::Client;

    pub fn list_tags_detailed(
        client: &Client,
        query: &ListTagsQuery,
    ) -> Result<Response<Vec<Tag>>> {
        let raw = client.execute(super::list_tags_endpoint(query))?;
        build_response(client.error_on_unexpected_status(), raw, parse_list_tags)
    }

    pub fn list_tags(client: &Client, query: &ListTagsQuery) -> Result<Option<Vec<Tag>>> {
        Ok(list_tags_detailed(client, query)?.parsed)
    }

    pub fn get_tag_detailed(client: &Client, id: i32) -> Result<Response<Tag>> {
        let raw = client.execute(super::get_tag_endpoint(id))?;
        build_response(client.error_on_unexpected_status(), raw, parse_get_tag)
    }

    pub fn get_tag(client: &Client, id: i32) -> Result<Option<Tag>> {
        Ok(get_tag_detailed(client, id)?.parsed)
    }
}
