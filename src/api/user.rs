//! User endpoints.

use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::client::{Client, Endpoint};
use crate::models::User;
use crate::response::{build_response, Parsed, Response};
use crate::utils::error::Result;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserModify {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<UserConfigModify>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserConfigModify {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_folded: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn get_current_user_endpoint() -> Endpoint {
    Endpoint::new(Method::GET, "/users/me")
}

fn parse_user(status: StatusCode, body: &[u8]) -> Result<Parsed<User>> {
    match status.as_u16() {
        200 => Ok(Parsed::Value(serde_json::from_slice(body)?)),
        _ => Ok(Parsed::Unexpected),
    }
}

/// Get the current user. `GET /users/me`
pub async fn get_current_user_detailed(client: &Client) -> Result<Response<User>> {
    let raw = client.execute(get_current_user_endpoint()).await?;
    build_response(client.error_on_unexpected_status(), raw, parse_user)
}

pub async fn get_current_user(client: &Client) -> Result<Option<User>> {
    Ok(get_current_user_detailed(client).await?.parsed)
}

fn modify_user_endpoint(user_id: i32, body: &UserModify) -> Result<Endpoint> {
    Endpoint::new(Method::PUT, format!("/users/{}", user_id)).with_json(body)
}

/// Modify a user's nickname or config, owner or admin. `PUT /users/{user_id}`
pub async fn modify_user_detailed(
    client: &Client,
    user_id: i32,
    body: &UserModify,
) -> Result<Response<User>> {
    let raw = client.execute(modify_user_endpoint(user_id, body)?).await?;
    build_response(client.error_on_unexpected_status(), raw, parse_user)
}

pub async fn modify_user(client: &Client, user_id: i32, body: &UserModify) -> Result<Option<User>> {
    Ok(modify_user_detailed(client, user_id, body).await?.parsed)
}

#[cfg(feature = "blocking")]
pub mod blocking {
    //! Synchronous user endpoints.

    use super::*;
    use crate::blocking::Client;

    pub fn get_current_user_detailed(client: &Client) -> Result<Response<User>> {
        let raw = client.execute(super::get_current_user_endpoint())?;
        build_response(client.error_on_unexpected_status(), raw, parse_user)
    }

    pub fn get_current_user(client: &Client) -> Result<Option<User>> {
        Ok(get_current_user_detailed(client)?.parsed)
    }

    pub fn modify_user_detailed(
        client: &Client,
        user_id: i32,
        body: &UserModify,
    ) -> Result<Response<User>> {
        let raw = client.execute(super::modify_user_endpoint(user_id, body)?)?;
        build_response(client.error_on_unexpected_status(), raw, parse_user)
    }

    pub fn modify_user(
        client: &Client,
        user_id: i32,
        body: &UserModify,
    ) -> Result<Option<User>> {
        Ok(modify_user_detailed(client, user_id, body)?.parsed)
    }
}
