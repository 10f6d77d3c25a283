//! Penalty endpoints, admin only.

use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::client::{Client, Endpoint};
use crate::models::User;
use crate::response::{build_response, Parsed, Response};
use crate::utils::error::Result;

/// `days`/`divisions` take precedence over the deprecated `penalty_level`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PenaltyBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days: Option<i32>,
    /// Divisions the silence applies to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub divisions: Option<Vec<i32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub penalty_level: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn ban_floor_publisher_endpoint(floor_id: i32, body: &PenaltyBody) -> Result<Endpoint> {
    Endpoint::new(Method::POST, format!("/penalty/{}", floor_id)).with_json(body)
}

fn parse_ban_floor_publisher(status: StatusCode, body: &[u8]) -> Result<Parsed<User>> {
    match status.as_u16() {
        201 => Ok(Parsed::Value(serde_json::from_slice(body)?)),
        _ => Ok(Parsed::Unexpected),
    }
}

/// Silence the publisher of a floor. `POST /penalty/{floor_id}`
pub async fn ban_floor_publisher_detailed(
    client: &Client,
    floor_id: i32,
    body: &PenaltyBody,
) -> Result<Response<User>> {
    let raw = client
        .execute(ban_floor_publisher_endpoint(floor_id, body)?)
        .await?;
    build_response(
        client.error_on_unexpected_status(),
        raw,
        parse_ban_floor_publisher,
    )
}

pub async fn ban_floor_publisher(
    client: &Client,
    floor_id: i32,
    body: &PenaltyBody,
) -> Result<Option<User>> {
    Ok(ban_floor_publisher_detailed(client, floor_id, body)
        .await?
        .parsed)
}

#[cfg(feature = "blocking")]
pub mod blocking {
    //! Synchronous penalty endpoints.

    use super::*;
    use crate::blocking::Client;

    pub fn ban_floor_publisher_detailed(
        client: &Client,
        floor_id: i32,
        body: &PenaltyBody,
    ) -> Result<Response<User>> {
        let raw = client.execute(super::ban_floor_publisher_endpoint(floor_id, body)?)?;
        build_response(
            client.error_on_unexpected_status(),
            raw,
            parse_ban_floor_publisher,
        )
    }

    pub fn ban_floor_publisher(
        client: &Client,
        floor_id: i32,
        body: &PenaltyBody,
    ) -> Result<Option<User>> {
        Ok(ban_floor_publisher_detailed(client, floor_id, body)?.parsed)
    }
}
