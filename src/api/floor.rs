//! Floor endpoints. A floor is a post within a hole; floors are numbered in
//! creation order ("storey").

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::api::SortOrder;
use crate::client::{Client, Endpoint};
use crate::models::{BanDivision, Floor, FloorHistory, SensitiveFloor};
use crate::response::{build_response, Parsed, Response};
use crate::utils::error::{ApiError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloorOrderBy {
    Id,
    Like,
}

impl FloorOrderBy {
    pub fn as_str(self) -> &'static str {
        match self {
            FloorOrderBy::Id => "id",
            FloorOrderBy::Like => "like",
        }
    }
}

impl fmt::Display for FloorOrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensitiveOrderBy {
    TimeCreated,
    TimeUpdated,
}

impl SensitiveOrderBy {
    pub fn as_str(self) -> &'static str {
        match self {
            SensitiveOrderBy::TimeCreated => "time_created",
            SensitiveOrderBy::TimeUpdated => "time_updated",
        }
    }
}

impl fmt::Display for SensitiveOrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Offset pagination shared by the in-hole and per-user floor listings.
#[derive(Debug, Clone, PartialEq)]
pub struct FloorListQuery {
    pub offset: i32,
    pub order_by: FloorOrderBy,
    pub size: i32,
    pub sort: SortOrder,
}

impl Default for FloorListQuery {
    fn default() -> Self {
        Self {
            offset: 0,
            order_by: FloorOrderBy::Id,
            size: 30,
            sort: SortOrder::Asc,
        }
    }
}

impl FloorListQuery {
    fn apply(&self, endpoint: &mut Endpoint) {
        endpoint.push_query("offset", self.offset);
        endpoint.push_query("order_by", self.order_by);
        endpoint.push_query("size", self.size);
        endpoint.push_query("sort", self.sort);
    }
}

/// Query of the old floor listing route.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListFloorsOldQuery {
    pub hole_id: Option<i32>,
    pub length: Option<i32>,
    /// Content search text.
    pub s: Option<String>,
    pub start_floor: Option<i32>,
}

/// Query of the sensitive-floor moderation listing.
#[derive(Debug, Clone, PartialEq)]
pub struct SensitiveFloorListQuery {
    pub all: Option<bool>,
    /// Time cursor; only floors before this time are returned.
    pub offset: Option<DateTime<Utc>>,
    pub open: Option<bool>,
    pub order_by: SensitiveOrderBy,
    pub size: i32,
}

impl Default for SensitiveFloorListQuery {
    fn default() -> Self {
        Self {
            all: None,
            offset: None,
            open: None,
            order_by: SensitiveOrderBy::TimeCreated,
            size: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FloorCreate {
    pub content: String,
    /// Id of the floor this one replies to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<i32>,
    /// Admin and operator only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_tag: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FloorCreateOld {
    pub hole_id: i32,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_tag: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Response of the old floor-creation route.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FloorCreateOldResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Floor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Deprecated like switch carried by [`FloorModify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FloorLike {
    Add,
    Cancel,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FloorModify {
    /// Owner or admin; the previous content is kept as floor history.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Fold reasons, version 1 clients.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fold: Option<Vec<String>>,
    /// Fold reason, version 2 clients.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fold_v2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub like: Option<FloorLike>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_tag: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FloorDelete {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_reason: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FloorRestore {
    pub restore_reason: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SensitiveFloorModify {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_actual_sensitive: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn parse_floor(status: StatusCode, body: &[u8]) -> Result<Parsed<Floor>> {
    match status.as_u16() {
        200 => Ok(Parsed::Value(serde_json::from_slice(body)?)),
        404 => Err(ApiError::from_status(status, body)),
        _ => Ok(Parsed::Unexpected),
    }
}

fn parse_floor_list(status: StatusCode, body: &[u8]) -> Result<Parsed<Vec<Floor>>> {
    match status.as_u16() {
        200 => Ok(Parsed::Value(serde_json::from_slice(body)?)),
        _ => Ok(Parsed::Unexpected),
    }
}

fn list_floors_endpoint(hole_id: i32, query: &FloorListQuery) -> Endpoint {
    let mut endpoint = Endpoint::new(Method::GET, format!("/holes/{}/floors", hole_id));
    query.apply(&mut endpoint);
    endpoint
}

/// List floors in a hole. `GET /holes/{hole_id}/floors`
pub async fn list_floors_detailed(
    client: &Client,
    hole_id: i32,
    query: &FloorListQuery,
) -> Result<Response<Vec<Floor>>> {
    let raw = client.execute(list_floors_endpoint(hole_id, query)).await?;
    build_response(client.error_on_unexpected_status(), raw, parse_floor_list)
}

pub async fn list_floors(
    client: &Client,
    hole_id: i32,
    query: &FloorListQuery,
) -> Result<Option<Vec<Floor>>> {
    Ok(list_floors_detailed(client, hole_id, query).await?.parsed)
}

fn list_floors_old_endpoint(query: &ListFloorsOldQuery) -> Endpoint {
    let mut endpoint = Endpoint::new(Method::GET, "/floors");
    if let Some(hole_id) = query.hole_id {
        endpoint.push_query("hole_id", hole_id);
    }
    if let Some(length) = query.length {
        endpoint.push_query("length", length);
    }
    if let Some(s) = &query.s {
        endpoint.push_query("s", s);
    }
    if let Some(start_floor) = query.start_floor {
        endpoint.push_query("start_floor", start_floor);
    }
    endpoint
}

/// Old API for listing floors. `GET /floors`
pub async fn list_floors_old_detailed(
    client: &Client,
    query: &ListFloorsOldQuery,
) -> Result<Response<Vec<Floor>>> {
    let raw = client.execute(list_floors_old_endpoint(query)).await?;
    build_response(client.error_on_unexpected_status(), raw, parse_floor_list)
}

pub async fn list_floors_old(
    client: &Client,
    query: &ListFloorsOldQuery,
) -> Result<Option<Vec<Floor>>> {
    Ok(list_floors_old_detailed(client, query).await?.parsed)
}

fn get_floor_endpoint(id: i32) -> Endpoint {
    Endpoint::new(Method::GET, format!("/floors/{}", id))
}

/// Get a floor. `GET /floors/{id}`
pub async fn get_floor_detailed(client: &Client, id: i32) -> Result<Response<Floor>> {
    let raw = client.execute(get_floor_endpoint(id)).await?;
    build_response(client.error_on_unexpected_status(), raw, parse_floor)
}

pub async fn get_floor(client: &Client, id: i32) -> Result<Option<Floor>> {
    Ok(get_floor_detailed(client, id).await?.parsed)
}

fn create_floor_endpoint(hole_id: i32, body: &FloorCreate) -> Result<Endpoint> {
    Endpoint::new(Method::POST, format!("/holes/{}/floors", hole_id)).with_json(body)
}

fn parse_create_floor(status: StatusCode, body: &[u8]) -> Result<Parsed<Floor>> {
    match status.as_u16() {
        201 => Ok(Parsed::Value(serde_json::from_slice(body)?)),
        _ => Ok(Parsed::Unexpected),
    }
}

/// Create a floor. `POST /holes/{hole_id}/floors`
pub async fn create_floor_detailed(
    client: &Client,
    hole_id: i32,
    body: &FloorCreate,
) -> Result<Response<Floor>> {
    let raw = client.execute(create_floor_endpoint(hole_id, body)?).await?;
    build_response(client.error_on_unexpected_status(), raw, parse_create_floor)
}

pub async fn create_floor(
    client: &Client,
    hole_id: i32,
    body: &FloorCreate,
) -> Result<Option<Floor>> {
    Ok(create_floor_detailed(client, hole_id, body).await?.parsed)
}

fn create_floor_old_endpoint(body: &FloorCreateOld) -> Result<Endpoint> {
    Endpoint::new(Method::POST, "/floors").with_json(body)
}

fn parse_create_floor_old(
    status: StatusCode,
    body: &[u8],
) -> Result<Parsed<FloorCreateOldResponse>> {
    match status.as_u16() {
        201 => Ok(Parsed::Value(serde_json::from_slice(body)?)),
        _ => Ok(Parsed::Unexpected),
    }
}

/// Old API for creating a floor. `POST /floors`
pub async fn create_floor_old_detailed(
    client: &Client,
    body: &FloorCreateOld,
) -> Result<Response<FloorCreateOldResponse>> {
    let raw = client.execute(create_floor_old_endpoint(body)?).await?;
    build_response(
        client.error_on_unexpected_status(),
        raw,
        parse_create_floor_old,
    )
}

pub async fn create_floor_old(
    client: &Client,
    body: &FloorCreateOld,
) -> Result<Option<FloorCreateOldResponse>> {
    Ok(create_floor_old_detailed(client, body).await?.parsed)
}

fn modify_floor_endpoint(id: i32, body: &FloorModify) -> Result<Endpoint> {
    Endpoint::new(Method::PUT, format!("/floors/{}", id)).with_json(body)
}

/// Modify a floor's content, folding or special tag. `PUT /floors/{id}`
pub async fn modify_floor_detailed(
    client: &Client,
    id: i32,
    body: &FloorModify,
) -> Result<Response<Floor>> {
    let raw = client.execute(modify_floor_endpoint(id, body)?).await?;
    build_response(client.error_on_unexpected_status(), raw, parse_floor)
}

pub async fn modify_floor(client: &Client, id: i32, body: &FloorModify) -> Result<Option<Floor>> {
    Ok(modify_floor_detailed(client, id, body).await?.parsed)
}

fn delete_floor_endpoint(id: i32, body: &FloorDelete) -> Result<Endpoint> {
    Endpoint::new(Method::DELETE, format!("/floors/{}", id)).with_json(body)
}

/// Delete a floor; the deleted content is kept as floor history.
/// `DELETE /floors/{id}`
pub async fn delete_floor_detailed(
    client: &Client,
    id: i32,
    body: &FloorDelete,
) -> Result<Response<Floor>> {
    let raw = client.execute(delete_floor_endpoint(id, body)?).await?;
    build_response(client.error_on_unexpected_status(), raw, parse_floor)
}

pub async fn delete_floor(client: &Client, id: i32, body: &FloorDelete) -> Result<Option<Floor>> {
    Ok(delete_floor_detailed(client, id, body).await?.parsed)
}

fn get_floor_history_endpoint(id: i32) -> Endpoint {
    Endpoint::new(Method::GET, format!("/floors/{}/history", id))
}

fn parse_floor_history(status: StatusCode, body: &[u8]) -> Result<Parsed<Vec<FloorHistory>>> {
    match status.as_u16() {
        200 => Ok(Parsed::Value(serde_json::from_slice(body)?)),
        404 => Err(ApiError::from_status(status, body)),
        _ => Ok(Parsed::Unexpected),
    }
}

/// List a floor's content revisions, admin only. `GET /floors/{id}/history`
pub async fn get_floor_history_detailed(
    client: &Client,
    id: i32,
) -> Result<Response<Vec<FloorHistory>>> {
    let raw = client.execute(get_floor_history_endpoint(id)).await?;
    build_response(client.error_on_unexpected_status(), raw, parse_floor_history)
}

pub async fn get_floor_history(client: &Client, id: i32) -> Result<Option<Vec<FloorHistory>>> {
    Ok(get_floor_history_detailed(client, id).await?.parsed)
}

fn restore_floor_endpoint(id: i32, floor_history_id: i32, body: &FloorRestore) -> Result<Endpoint> {
    Endpoint::new(
        Method::POST,
        format!("/floors/{}/restore/{}", id, floor_history_id),
    )
    .with_json(body)
}

/// Restore a floor from a history version, admin only.
/// `POST /floors/{id}/restore/{floor_history_id}`
pub async fn restore_floor_detailed(
    client: &Client,
    id: i32,
    floor_history_id: i32,
    body: &FloorRestore,
) -> Result<Response<Floor>> {
    let raw = client
        .execute(restore_floor_endpoint(id, floor_history_id, body)?)
        .await?;
    build_response(client.error_on_unexpected_status(), raw, parse_floor)
}

pub async fn restore_floor(
    client: &Client,
    id: i32,
    floor_history_id: i32,
    body: &FloorRestore,
) -> Result<Option<Floor>> {
    Ok(restore_floor_detailed(client, id, floor_history_id, body)
        .await?
        .parsed)
}

fn list_my_floors_endpoint(query: &FloorListQuery) -> Endpoint {
    let mut endpoint = Endpoint::new(Method::GET, "/users/me/floors");
    query.apply(&mut endpoint);
    endpoint
}

fn parse_list_my_floors(status: StatusCode, body: &[u8]) -> Result<Parsed<Vec<Floor>>> {
    match status.as_u16() {
        200 => Ok(Parsed::Value(serde_json::from_slice(body)?)),
        404 => Err(ApiError::from_status(status, body)),
        _ => Ok(Parsed::Unexpected),
    }
}

/// List the current user's reply floors. `GET /users/me/floors`
pub async fn list_my_floors_detailed(
    client: &Client,
    query: &FloorListQuery,
) -> Result<Response<Vec<Floor>>> {
    let raw = client.execute(list_my_floors_endpoint(query)).await?;
    build_response(
        client.error_on_unexpected_status(),
        raw,
        parse_list_my_floors,
    )
}

pub async fn list_my_floors(
    client: &Client,
    query: &FloorListQuery,
) -> Result<Option<Vec<Floor>>> {
    Ok(list_my_floors_detailed(client, query).await?.parsed)
}

fn get_user_silence_endpoint(id: i32) -> Endpoint {
    Endpoint::new(Method::GET, format!("/floors/{}/user_silence", id))
}

fn parse_user_silence(status: StatusCode, body: &[u8]) -> Result<Parsed<BanDivision>> {
    match status.as_u16() {
        200 => Ok(Parsed::Value(serde_json::from_slice(body)?)),
        403 | 404 => Err(ApiError::from_status(status, body)),
        _ => Ok(Parsed::Unexpected),
    }
}

/// Get the silence status of a floor's author, admin only.
/// `GET /floors/{id}/user_silence`
pub async fn get_user_silence_detailed(client: &Client, id: i32) -> Result<Response<BanDivision>> {
    let raw = client.execute(get_user_silence_endpoint(id)).await?;
    build_response(client.error_on_unexpected_status(), raw, parse_user_silence)
}

pub async fn get_user_silence(client: &Client, id: i32) -> Result<Option<BanDivision>> {
    Ok(get_user_silence_detailed(client, id).await?.parsed)
}

fn list_sensitive_floors_endpoint(query: &SensitiveFloorListQuery) -> Endpoint {
    let mut endpoint = Endpoint::new(Method::GET, "/floors/_sensitive");
    if let Some(all) = query.all {
        endpoint.push_query("all", all);
    }
    if let Some(offset) = &query.offset {
        endpoint.push_query("offset", offset.to_rfc3339_opts(SecondsFormat::Micros, true));
    }
    if let Some(open) = query.open {
        endpoint.push_query("open", open);
    }
    endpoint.push_query("order_by", query.order_by);
    endpoint.push_query("size", query.size);
    endpoint
}

fn parse_sensitive_floors(status: StatusCode, body: &[u8]) -> Result<Parsed<Vec<SensitiveFloor>>> {
    match status.as_u16() {
        200 => Ok(Parsed::Value(serde_json::from_slice(body)?)),
        404 => Err(ApiError::from_status(status, body)),
        _ => Ok(Parsed::Unexpected),
    }
}

/// List floors flagged as sensitive, admin only. `GET /floors/_sensitive`
pub async fn list_sensitive_floors_detailed(
    client: &Client,
    query: &SensitiveFloorListQuery,
) -> Result<Response<Vec<SensitiveFloor>>> {
    let raw = client.execute(list_sensitive_floors_endpoint(query)).await?;
    build_response(
        client.error_on_unexpected_status(),
        raw,
        parse_sensitive_floors,
    )
}

pub async fn list_sensitive_floors(
    client: &Client,
    query: &SensitiveFloorListQuery,
) -> Result<Option<Vec<SensitiveFloor>>> {
    Ok(list_sensitive_floors_detailed(client, query).await?.parsed)
}

fn modify_floor_sensitive_endpoint(id: i32, body: &SensitiveFloorModify) -> Result<Endpoint> {
    Endpoint::new(Method::PUT, format!("/floors/{}/_sensitive", id)).with_json(body)
}

/// Confirm or clear a floor's sensitive flag, admin only.
/// `PUT /floors/{id}/_sensitive`
pub async fn modify_floor_sensitive_detailed(
    client: &Client,
    id: i32,
    body: &SensitiveFloorModify,
) -> Result<Response<Floor>> {
    let raw = client
        .execute(modify_floor_sensitive_endpoint(id, body)?)
        .await?;
    build_response(client.error_on_unexpected_status(), raw, parse_floor)
}

pub async fn modify_floor_sensitive(
    client: &Client,
    id: i32,
    body: &SensitiveFloorModify,
) -> Result<Option<Floor>> {
    Ok(modify_floor_sensitive_detailed(client, id, body)
        .await?
        .parsed)
}

#[cfg(feature = "blocking")]
pub mod blocking {
    //! Synchronous floor endpoints.

    use super::*;
    use crate::blocking::Client;

    pub fn list_floors_detailed(
        client: &Client,
        hole_id: i32,
        query: &FloorListQuery,
    ) -> Result<Response<Vec<Floor>>> {
        let raw = client.execute(super::list_floors_endpoint(hole_id, query))?;
        build_response(client.error_on_unexpected_status(), raw, parse_floor_list)
    }

    pub fn list_floors(
        client: &Client,
        hole_id: i32,
        query: &FloorListQuery,
    ) -> Result<Option<Vec<Floor>>> {
        Ok(list_floors_detailed(client, hole_id, query)?.parsed)
    }

    pub fn list_floors_old_detailed(
        client: &Client,
        query: &ListFloorsOldQuery,
    ) -> Result<Response<Vec<Floor>>> {
        let raw = client.execute(super::list_floors_old_endpoint(query))?;
        build_response(client.error_on_unexpected_status(), raw, parse_floor_list)
    }

    pub fn list_floors_old(
        client: &Client,
        query: &ListFloorsOldQuery,
    ) -> Result<Option<Vec<Floor>>> {
        Ok(list_floors_old_detailed(client, query)?.parsed)
    }

    pub fn get_floor_detailed(client: &Client, id: i32) -> Result<Response<Floor>> {
        let raw = client.execute(super::get_floor_endpoint(id))?;
        build_response(client.error_on_unexpected_status(), raw, parse_floor)
    }

    pub fn get_floor(client: &Client, id: i32) -> Result<Option<Floor>> {
        Ok(get_floor_detailed(client, id)?.parsed)
    }

    pub fn create_floor_detailed(
        client: &Client,
        hole_id: i32,
        body: &FloorCreate,
    ) -> Result<Response<Floor>> {
        let raw = client.execute(super::create_floor_endpoint(hole_id, body)?)?;
        build_response(client.error_on_unexpected_status(), raw, parse_create_floor)
    }

    pub fn create_floor(
        client: &Client,
        hole_id: i32,
        body: &FloorCreate,
    ) -> Result<Option<Floor>> {
        Ok(create_floor_detailed(client, hole_id, body)?.parsed)
    }

    pub fn create_floor_old_detailed(
        client: &Client,
        body: &FloorCreateOld,
    ) -> Result<Response<FloorCreateOldResponse>> {
        let raw = client.execute(super::create_floor_old_endpoint(body)?)?;
        build_response(
            client.error_on_unexpected_status(),
            raw,
            parse_create_floor_old,
        )
    }

    pub fn create_floor_old(
        client: &Client,
        body: &FloorCreateOld,
    ) -> Result<Option<FloorCreateOldResponse>> {
        Ok(create_floor_old_detailed(client, body)?.parsed)
    }

    pub fn modify_floor_detailed(
        client: &Client,
        id: i32,
        body: &FloorModify,
    ) -> Result<Response<Floor>> {
        let raw = client.execute(super::modify_floor_endpoint(id, body)?)?;
        build_response(client.error_on_unexpected_status(), raw, parse_floor)
    }

    pub fn modify_floor(client: &Client, id: i32, body: &FloorModify) -> Result<Option<Floor>> {
        Ok(modify_floor_detailed(client, id, body)?.parsed)
    }

    pub fn delete_floor_detailed(
        client: &Client,
        id: i32,
        body: &FloorDelete,
    ) -> Result<Response<Floor>> {
        let raw = client.execute(super::delete_floor_endpoint(id, body)?)?;
        build_response(client.error_on_unexpected_status(), raw, parse_floor)
    }

    pub fn delete_floor(client: &Client, id: i32, body: &FloorDelete) -> Result<Option<Floor>> {
        Ok(delete_floor_detailed(client, id, body)?.parsed)
    }

    pub fn get_floor_history_detailed(
        client: &Client,
        id: i32,
    ) -> Result<Response<Vec<FloorHistory>>> {
        let raw = client.execute(super::get_floor_history_endpoint(id))?;
        build_response(client.error_on_unexpected_status(), raw, parse_floor_history)
    }

    pub fn get_floor_history(client: &Client, id: i32) -> Result<Option<Vec<FloorHistory>>> {
        Ok(get_floor_history_detailed(client, id)?.parsed)
    }

    pub fn restore_floor_detailed(
        client: &Client,
        id: i32,
        floor_history_id: i32,
        body: &FloorRestore,
    ) -> Result<Response<Floor>> {
        let raw = client.execute(super::restore_floor_endpoint(id, floor_history_id, body)?)?;
        build_response(client.error_on_unexpected_status(), raw, parse_floor)
    }

    pub fn restore_floor(
        client: &Client,
        id: i32,
        floor_history_id: i32,
        body: &FloorRestore,
    ) -> Result<Option<Floor>> {
        Ok(restore_floor_detailed(client, id, floor_history_id, body)?.parsed)
    }

    pub fn list_my_floors_detailed(
        client: &Client,
        query: &FloorListQuery,
    ) -> Result<Response<Vec<Floor>>> {
        let raw = client.execute(super::list_my_floors_endpoint(query))?;
        build_response(
            client.error_on_unexpected_status(),
            raw,
            parse_list_my_floors,
        )
    }

    pub fn list_my_floors(client: &Client, query: &FloorListQuery) -> Result<Option<Vec<Floor>>> {
        Ok(list_my_floors_detailed(client, query)?.parsed)
    }

    pub fn get_user_silence_detailed(client: &Client, id: i32) -> Result<Response<BanDivision>> {
        let raw = client.execute(super::get_user_silence_endpoint(id))?;
        build_response(client.error_on_unexpected_status(), raw, parse_user_silence)
    }

    pub fn get_user_silence(client: &Client, id: i32) -> Result<Option<BanDivision>> {
        Ok(get_user_silence_detailed(client, id)?.parsed)
    }

    pub fn list_sensitive_floors_detailed(
        client: &Client,
        query: &SensitiveFloorListQuery,
    ) -> Result<Response<Vec<SensitiveFloor>>> {
        let raw = client.execute(super::list_sensitive_floors_endpoint(query))?;
        build_response(
            client.error_on_unexpected_status(),
            raw,
            parse_sensitive_floors,
        )
    }

    pub fn list_sensitive_floors(
        client: &Client,
        query: &SensitiveFloorListQuery,
    ) -> Result<Option<Vec<SensitiveFloor>>> {
        Ok(list_sensitive_floors_detailed(client, query)?.parsed)
    }

    pub fn modify_floor_sensitive_detailed(
        client: &Client,
        id: i32,
        body: &SensitiveFloorModify,
    ) -> Result<Response<Floor>> {
        let raw = client.execute(super::modify_floor_sensitive_endpoint(id, body)?)?;
        build_response(client.error_on_unexpected_status(), raw, parse_floor)
    }

    pub fn modify_floor_sensitive(
        client: &Client,
        id: i32,
        body: &SensitiveFloorModify,
    ) -> Result<Option<Floor>> {
        Ok(modify_floor_sensitive_detailed(client, id, body)?.parsed)
    }
}
