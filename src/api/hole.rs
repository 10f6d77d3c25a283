//! Hole endpoints. A hole is a forum thread; listing is cursor-based on
//! update time.

use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::api::tag::TagCreate;
use crate::client::{Client, Endpoint};
use crate::models::Hole;
use crate::response::{build_response, Parsed, Response};
use crate::utils::error::{ApiError, Result};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HoleCreate {
    /// Content of the first floor.
    pub content: String,
    /// Admin and operator only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<TagCreate>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HoleCreateOld {
    pub content: String,
    /// Defaults to 1 server-side.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub division_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<TagCreate>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Only admins may change `division_id`, `lock`, `hidden` and `unhidden`;
/// `unhidden` takes effect only while the hole is hidden.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HoleModify {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub division_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lock: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<TagCreate>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unhidden: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Response of the old hole-creation route.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HoleCreateOldResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Hole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Time-cursor pagination shared by the per-division and per-user listings.
#[derive(Debug, Clone, PartialEq)]
pub struct HoleListQuery {
    /// Only holes updated before this time are returned; unset means "now".
    pub offset: Option<DateTime<Utc>>,
    pub order: Option<String>,
    pub size: i32,
}

impl Default for HoleListQuery {
    fn default() -> Self {
        Self {
            offset: None,
            order: None,
            size: 10,
        }
    }
}

impl HoleListQuery {
    fn apply(&self, endpoint: &mut Endpoint) {
        if let Some(offset) = &self.offset {
            endpoint.push_query("offset", offset.to_rfc3339_opts(SecondsFormat::Micros, true));
        }
        if let Some(order) = &self.order {
            endpoint.push_query("order", order);
        }
        endpoint.push_query("size", self.size);
    }
}

/// Query of the old hole listing route.
#[derive(Debug, Clone, PartialEq)]
pub struct ListHolesOldQuery {
    pub division_id: Option<i32>,
    pub length: i32,
    pub order: Option<String>,
    /// Only holes updated before this time are returned.
    pub start_time: Option<DateTime<Utc>>,
    pub tag: Option<String>,
}

impl Default for ListHolesOldQuery {
    fn default() -> Self {
        Self {
            division_id: None,
            length: 10,
            order: None,
            start_time: None,
            tag: None,
        }
    }
}

fn parse_hole(status: StatusCode, body: &[u8]) -> Result<Parsed<Hole>> {
    match status.as_u16() {
        200 => Ok(Parsed::Value(serde_json::from_slice(body)?)),
        404 => Err(ApiError::from_status(status, body)),
        _ => Ok(Parsed::Unexpected),
    }
}

fn parse_hole_list(status: StatusCode, body: &[u8]) -> Result<Parsed<Vec<Hole>>> {
    match status.as_u16() {
        200 => Ok(Parsed::Value(serde_json::from_slice(body)?)),
        _ => Ok(Parsed::Unexpected),
    }
}

fn list_holes_in_division_endpoint(division_id: i32, query: &HoleListQuery) -> Endpoint {
    let mut endpoint = Endpoint::new(Method::GET, format!("/divisions/{}/holes", division_id));
    query.apply(&mut endpoint);
    endpoint
}

fn parse_list_holes_in_division(status: StatusCode, body: &[u8]) -> Result<Parsed<Vec<Hole>>> {
    match status.as_u16() {
        200 => Ok(Parsed::Value(serde_json::from_slice(body)?)),
        404 | 500 => Err(ApiError::from_status(status, body)),
        _ => Ok(Parsed::Unexpected),
    }
}

/// List holes in a division. `GET /divisions/{division_id}/holes`
pub async fn list_holes_in_division_detailed(
    client: &Client,
    division_id: i32,
    query: &HoleListQuery,
) -> Result<Response<Vec<Hole>>> {
    let raw = client
        .execute(list_holes_in_division_endpoint(division_id, query))
        .await?;
    build_response(
        client.error_on_unexpected_status(),
        raw,
        parse_list_holes_in_division,
    )
}

pub async fn list_holes_in_division(
    client: &Client,
    division_id: i32,
    query: &HoleListQuery,
) -> Result<Option<Vec<Hole>>> {
    Ok(list_holes_in_division_detailed(client, division_id, query)
        .await?
        .parsed)
}

fn get_hole_endpoint(id: i32) -> Endpoint {
    Endpoint::new(Method::GET, format!("/holes/{}", id))
}

/// Get a hole. `GET /holes/{id}`
pub async fn get_hole_detailed(client: &Client, id: i32) -> Result<Response<Hole>> {
    let raw = client.execute(get_hole_endpoint(id)).await?;
    build_response(client.error_on_unexpected_status(), raw, parse_hole)
}

pub async fn get_hole(client: &Client, id: i32) -> Result<Option<Hole>> {
    Ok(get_hole_detailed(client, id).await?.parsed)
}

fn list_holes_old_endpoint(query: &ListHolesOldQuery) -> Endpoint {
    let mut endpoint = Endpoint::new(Method::GET, "/holes");
    if let Some(division_id) = query.division_id {
        endpoint.push_query("division_id", division_id);
    }
    endpoint.push_query("length", query.length);
    if let Some(order) = &query.order {
        endpoint.push_query("order", order);
    }
    if let Some(start_time) = &query.start_time {
        endpoint.push_query(
            "start_time",
            start_time.to_rfc3339_opts(SecondsFormat::Micros, true),
        );
    }
    if let Some(tag) = &query.tag {
        endpoint.push_query("tag", tag);
    }
    endpoint
}

/// Old API for listing holes. `GET /holes`
pub async fn list_holes_old_detailed(
    client: &Client,
    query: &ListHolesOldQuery,
) -> Result<Response<Vec<Hole>>> {
    let raw = client.execute(list_holes_old_endpoint(query)).await?;
    build_response(client.error_on_unexpected_status(), raw, parse_hole_list)
}

pub async fn list_holes_old(
    client: &Client,
    query: &ListHolesOldQuery,
) -> Result<Option<Vec<Hole>>> {
    Ok(list_holes_old_detailed(client, query).await?.parsed)
}

fn list_my_holes_endpoint(query: &HoleListQuery) -> Endpoint {
    let mut endpoint = Endpoint::new(Method::GET, "/users/me/holes");
    query.apply(&mut endpoint);
    endpoint
}

/// List holes created by the current user. `GET /users/me/holes`
pub async fn list_my_holes_detailed(
    client: &Client,
    query: &HoleListQuery,
) -> Result<Response<Vec<Hole>>> {
    let raw = client.execute(list_my_holes_endpoint(query)).await?;
    build_response(client.error_on_unexpected_status(), raw, parse_hole_list)
}

pub async fn list_my_holes(client: &Client, query: &HoleListQuery) -> Result<Option<Vec<Hole>>> {
    Ok(list_my_holes_detailed(client, query).await?.parsed)
}

fn create_hole_endpoint(division_id: i32, body: &HoleCreate) -> Result<Endpoint> {
    Endpoint::new(Method::POST, format!("/divisions/{}/holes", division_id)).with_json(body)
}

fn parse_create_hole(status: StatusCode, body: &[u8]) -> Result<Parsed<Hole>> {
    match status.as_u16() {
        201 => Ok(Parsed::Value(serde_json::from_slice(body)?)),
        _ => Ok(Parsed::Unexpected),
    }
}

/// Create a hole with its first floor and tags.
/// `POST /divisions/{division_id}/holes`
pub async fn create_hole_detailed(
    client: &Client,
    division_id: i32,
    body: &HoleCreate,
) -> Result<Response<Hole>> {
    let raw = client
        .execute(create_hole_endpoint(division_id, body)?)
        .await?;
    build_response(client.error_on_unexpected_status(), raw, parse_create_hole)
}

pub async fn create_hole(
    client: &Client,
    division_id: i32,
    body: &HoleCreate,
) -> Result<Option<Hole>> {
    Ok(create_hole_detailed(client, division_id, body).await?.parsed)
}

fn create_hole_old_endpoint(body: &HoleCreateOld) -> Result<Endpoint> {
    Endpoint::new(Method::POST, "/holes").with_json(body)
}

fn parse_create_hole_old(status: StatusCode, body: &[u8]) -> Result<Parsed<HoleCreateOldResponse>> {
    match status.as_u16() {
        201 => Ok(Parsed::Value(serde_json::from_slice(body)?)),
        _ => Ok(Parsed::Unexpected),
    }
}

/// Old API for creating a hole. `POST /holes`
pub async fn create_hole_old_detailed(
    client: &Client,
    body: &HoleCreateOld,
) -> Result<Response<HoleCreateOldResponse>> {
    let raw = client.execute(create_hole_old_endpoint(body)?).await?;
    build_response(
        client.error_on_unexpected_status(),
        raw,
        parse_create_hole_old,
    )
}

pub async fn create_hole_old(
    client: &Client,
    body: &HoleCreateOld,
) -> Result<Option<HoleCreateOldResponse>> {
    Ok(create_hole_old_detailed(client, body).await?.parsed)
}

fn modify_hole_endpoint(id: i32, body: &HoleModify) -> Result<Endpoint> {
    Endpoint::new(Method::PATCH, format!("/holes/{}/_webvpn", id)).with_json(body)
}

/// Modify a hole's tags, division or visibility. `PATCH /holes/{id}/_webvpn`
pub async fn modify_hole_detailed(
    client: &Client,
    id: i32,
    body: &HoleModify,
) -> Result<Response<Hole>> {
    let raw = client.execute(modify_hole_endpoint(id, body)?).await?;
    build_response(client.error_on_unexpected_status(), raw, parse_hole)
}

pub async fn modify_hole(client: &Client, id: i32, body: &HoleModify) -> Result<Option<Hole>> {
    Ok(modify_hole_detailed(client, id, body).await?.parsed)
}

fn delete_hole_endpoint(id: i32) -> Endpoint {
    Endpoint::new(Method::DELETE, format!("/holes/{}", id))
}

fn parse_delete_hole(status: StatusCode, body: &[u8]) -> Result<Parsed<()>> {
    match status.as_u16() {
        204 => Ok(Parsed::Value(())),
        404 => Err(ApiError::from_status(status, body)),
        _ => Ok(Parsed::Unexpected),
    }
}

/// Hide a hole, admin only. `DELETE /holes/{id}`
pub async fn delete_hole_detailed(client: &Client, id: i32) -> Result<Response<()>> {
    let raw = client.execute(delete_hole_endpoint(id)).await?;
    build_response(client.error_on_unexpected_status(), raw, parse_delete_hole)
}

pub async fn delete_hole(client: &Client, id: i32) -> Result<Option<()>> {
    Ok(delete_hole_detailed(client, id).await?.parsed)
}

#[cfg(feature = "blocking")]
pub mod blocking {
    //! Synchronous hole endpoints.

    use super::*;
    use crate::blocking::Client;

    pub fn list_holes_in_division_detailed(
        client: &Client,
        division_id: i32,
        query: &HoleListQuery,
    ) -> Result<Response<Vec<Hole>>> {
        let raw = client.execute(super::list_holes_in_division_endpoint(division_id, query))?;
        build_response(
            client.error_on_unexpected_status(),
            raw,
            parse_list_holes_in_division,
        )
    }

    pub fn list_holes_in_division(
        client: &Client,
        division_id: i32,
        query: &HoleListQuery,
    ) -> Result<Option<Vec<Hole>>> {
        Ok(list_holes_in_division_detailed(client, division_id, query)?.parsed)
    }

    pub fn get_hole_detailed(client: &Client, id: i32) -> Result<Response<Hole>> {
        let raw = client.execute(super::get_hole_endpoint(id))?;
        build_response(client.error_on_unexpected_status(), raw, parse_hole)
    }

    pub fn get_hole(client: &Client, id: i32) -> Result<Option<Hole>> {
        Ok(get_hole_detailed(client, id)?.parsed)
    }

    pub fn list_holes_old_detailed(
        client: &Client,
        query: &ListHolesOldQuery,
    ) -> Result<Response<Vec<Hole>>> {
        let raw = client.execute(super::list_holes_old_endpoint(query))?;
        build_response(client.error_on_unexpected_status(), raw, parse_hole_list)
    }

    pub fn list_holes_old(
        client: &Client,
        query: &ListHolesOldQuery,
    ) -> Result<Option<Vec<Hole>>> {
        Ok(list_holes_old_detailed(client, query)?.parsed)
    }

    pub fn list_my_holes_detailed(
        client: &Client,
        query: &HoleListQuery,
    ) -> Result<Response<Vec<Hole>>> {
        let raw = client.execute(super::list_my_holes_endpoint(query))?;
        build_response(client.error_on_unexpected_status(), raw, parse_hole_list)
    }

    pub fn list_my_holes(client: &Client, query: &HoleListQuery) -> Result<Option<Vec<Hole>>> {
        Ok(list_my_holes_detailed(client, query)?.parsed)
    }

    pub fn create_hole_detailed(
        client: &Client,
        division_id: i32,
        body: &HoleCreate,
    ) -> Result<Response<Hole>> {
        let raw = client.execute(super::create_hole_endpoint(division_id, body)?)?;
        build_response(client.error_on_unexpected_status(), raw, parse_create_hole)
    }

    pub fn create_hole(
        client: &Client,
        division_id: i32,
        body: &HoleCreate,
    ) -> Result<Option<Hole>> {
        Ok(create_hole_detailed(client, division_id, body)?.parsed)
    }

    pub fn create_hole_old_detailed(
        client: &Client,
        body: &HoleCreateOld,
    ) -> Result<Response<HoleCreateOldResponse>> {
        let raw = client.execute(super::create_hole_old_endpoint(body)?)?;
        build_response(
            client.error_on_unexpected_status(),
            raw,
            parse_create_hole_old,
        )
    }

    pub fn create_hole_old(
        client: &Client,
        body: &HoleCreateOld,
    ) -> Result<Option<HoleCreateOldResponse>> {
        Ok(create_hole_old_detailed(client, body)?.parsed)
    }

    pub fn modify_hole_detailed(
        client: &Client,
        id: i32,
        body: &HoleModify,
    ) -> Result<Response<Hole>> {
        let raw = client.execute(super::modify_hole_endpoint(id, body)?)?;
        build_response(client.error_on_unexpected_status(), raw, parse_hole)
    }

    pub fn modify_hole(client: &Client, id: i32, body: &HoleModify) -> Result<Option<Hole>> {
        Ok(modify_hole_detailed(client, id, body)?.parsed)
    }

    pub fn delete_hole_detailed(client: &Client, id: i32) -> Result<Response<()>> {
        let raw = client.execute(super::delete_hole_endpoint(id))?;
        build_response(client.error_on_unexpected_status(), raw, parse_delete_hole)
    }

    pub fn delete_hole(client: &Client, id: i32) -> Result<Option<()>> {
        Ok(delete_hole_detailed(client, id)?.parsed)
    }
}
