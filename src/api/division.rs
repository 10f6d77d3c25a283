//! Division endpoints. A division is a forum category containing holes.

use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::client::{Client, Endpoint};
use crate::models::Division;
use crate::response::{build_response, Parsed, Response};
use crate::utils::error::{ApiError, Result};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DivisionCreate {
    pub name: String,
    pub description: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DivisionModify {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Hole ids pinned to the top of the division, in display order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pinned: Option<Vec<i32>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DivisionDelete {
    /// Division that receives the deleted division's holes (defaults to 1
    /// server-side).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<i32>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn list_divisions_endpoint() -> Endpoint {
    Endpoint::new(Method::GET, "/divisions")
}

fn parse_list_divisions(status: StatusCode, body: &[u8]) -> Result<Parsed<Vec<Division>>> {
    match status.as_u16() {
        200 => Ok(Parsed::Value(serde_json::from_slice(body)?)),
        _ => Ok(Parsed::Unexpected),
    }
}

/// List all divisions. `GET /divisions`
pub async fn list_divisions_detailed(client: &Client) -> Result<Response<Vec<Division>>> {
    let raw = client.execute(list_divisions_endpoint()).await?;
    build_response(
        client.error_on_unexpected_status(),
        raw,
        parse_list_divisions,
    )
}

pub async fn list_divisions(client: &Client) -> Result<Option<Vec<Division>>> {
    Ok(list_divisions_detailed(client).await?.parsed)
}

fn get_division_endpoint(id: i32) -> Endpoint {
    Endpoint::new(Method::GET, format!("/divisions/{}", id))
}

fn parse_get_division(status: StatusCode, body: &[u8]) -> Result<Parsed<Division>> {
    match status.as_u16() {
        200 => Ok(Parsed::Value(serde_json::from_slice(body)?)),
        404 => Err(ApiError::from_status(status, body)),
        _ => Ok(Parsed::Unexpected),
    }
}

/// Get a division. `GET /divisions/{id}`
pub async fn get_division_detailed(client: &Client, id: i32) -> Result<Response<Division>> {
    let raw = client.execute(get_division_endpoint(id)).await?;
    build_response(client.error_on_unexpected_status(), raw, parse_get_division)
}

pub async fn get_division(client: &Client, id: i32) -> Result<Option<Division>> {
    Ok(get_division_detailed(client, id).await?.parsed)
}

fn add_division_endpoint(body: &DivisionCreate) -> Result<Endpoint> {
    Endpoint::new(Method::POST, "/divisions").with_json(body)
}

fn parse_add_division(status: StatusCode, body: &[u8]) -> Result<Parsed<Division>> {
    match status.as_u16() {
        // 200 when a division with the same name already exists.
        200 | 201 => Ok(Parsed::Value(serde_json::from_slice(body)?)),
        _ => Ok(Parsed::Unexpected),
    }
}

/// Create a division, admin only. `POST /divisions`
pub async fn add_division_detailed(
    client: &Client,
    body: &DivisionCreate,
) -> Result<Response<Division>> {
    let raw = client.execute(add_division_endpoint(body)?).await?;
    build_response(client.error_on_unexpected_status(), raw, parse_add_division)
}

pub async fn add_division(client: &Client, body: &DivisionCreate) -> Result<Option<Division>> {
    Ok(add_division_detailed(client, body).await?.parsed)
}

fn modify_division_endpoint(id: i32, body: &DivisionModify) -> Result<Endpoint> {
    Endpoint::new(Method::PATCH, format!("/divisions/{}/_webvpn", id)).with_json(body)
}

fn parse_modify_division(status: StatusCode, body: &[u8]) -> Result<Parsed<Division>> {
    match status.as_u16() {
        200 => Ok(Parsed::Value(serde_json::from_slice(body)?)),
        404 => Err(ApiError::from_status(status, body)),
        _ => Ok(Parsed::Unexpected),
    }
}

/// Modify a division, admin only. `PATCH /divisions/{id}/_webvpn`
pub async fn modify_division_detailed(
    client: &Client,
    id: i32,
    body: &DivisionModify,
) -> Result<Response<Division>> {
    let raw = client.execute(modify_division_endpoint(id, body)?).await?;
    build_response(
        client.error_on_unexpected_status(),
        raw,
        parse_modify_division,
    )
}

pub async fn modify_division(
    client: &Client,
    id: i32,
    body: &DivisionModify,
) -> Result<Option<Division>> {
    Ok(modify_division_detailed(client, id, body).await?.parsed)
}

fn delete_division_endpoint(id: i32, body: &DivisionDelete) -> Result<Endpoint> {
    Endpoint::new(Method::DELETE, format!("/divisions/{}", id)).with_json(body)
}

fn parse_delete_division(status: StatusCode, body: &[u8]) -> Result<Parsed<()>> {
    match status.as_u16() {
        204 => Ok(Parsed::Value(())),
        404 => Err(ApiError::from_status(status, body)),
        _ => Ok(Parsed::Unexpected),
    }
}

/// Delete a division and move its holes to another one, admin only.
/// `DELETE /divisions/{id}`
pub async fn delete_division_detailed(
    client: &Client,
    id: i32,
    body: &DivisionDelete,
) -> Result<Response<()>> {
    let raw = client.execute(delete_division_endpoint(id, body)?).await?;
    build_response(
        client.error_on_unexpected_status(),
        raw,
        parse_delete_division,
    )
}

pub async fn delete_division(
    client: &Client,
    id: i32,
    body: &DivisionDelete,
) -> Result<Option<()>> {
    Ok(delete_division_detailed(client, id, body).await?.parsed)
}

#[cfg(feature = "blocking")]
pub mod blocking {
    //! Synchronous division endpoints.

    use super::*;
    use crate::blocking::Client;

    pub fn list_divisions_detailed(client: &Client) -> Result<Response<Vec<Division>>> {
        let raw = client.execute(super::list_divisions_endpoint())?;
        build_response(
            client.error_on_unexpected_status(),
            raw,
            parse_list_divisions,
        )
    }

    pub fn list_divisions(client: &Client) -> Result<Option<Vec<Division>>> {
        Ok(list_divisions_detailed(client)?.parsed)
    }

    pub fn get_division_detailed(client: &Client, id: i32) -> Result<Response<Division>> {
        let raw = client.execute(super::get_division_endpoint(id))?;
        build_response(client.error_on_unexpected_status(), raw, parse_get_division)
    }

    pub fn get_division(client: &Client, id: i32) -> Result<Option<Division>> {
        Ok(get_division_detailed(client, id)?.parsed)
    }

    pub fn add_division_detailed(
        client: &Client,
        body: &DivisionCreate,
    ) -> Result<Response<Division>> {
        let raw = client.execute(super::add_division_endpoint(body)?)?;
        build_response(client.error_on_unexpected_status(), raw, parse_add_division)
    }

    pub fn add_division(client: &Client, body: &DivisionCreate) -> Result<Option<Division>> {
        Ok(add_division_detailed(client, body)?.parsed)
    }

    pub fn modify_division_detailed(
        client: &Client,
        id: i32,
        body: &DivisionModify,
    ) -> Result<Response<Division>> {
        let raw = client.execute(super::modify_division_endpoint(id, body)?)?;
        build_response(
            client.error_on_unexpected_status(),
            raw,
            parse_modify_division,
        )
    }

    pub fn modify_division(
        client: &Client,
        id: i32,
        body: &DivisionModify,
    ) -> Result<Option<Division>> {
        Ok(modify_division_detailed(client, id, body)?.parsed)
    }

    pub fn delete_division_detailed(
        client: &Client,
        id: i32,
        body: &DivisionDelete,
    ) -> Result<Response<()>> {
        let raw = client.execute(super::delete_division_endpoint(id, body)?)?;
        build_response(
            client.error_on_unexpected_status(),
            raw,
            parse_delete_division,
        )
    }

    pub fn delete_division(client: &Client, id: i32, body: &DivisionDelete) -> Result<Option<()>> {
        Ok(delete_division_detailed(client, id, body)?.parsed)
    }
}
