//! Subscription endpoints: holes a user follows for updates.

use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::client::{Client, Endpoint};
use crate::models::Hole;
use crate::response::{build_response, Parsed, Response};
use crate::utils::error::{ApiError, Result};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListSubscriptionsQuery {
    /// Skip expanding hole floors and tags.
    pub plain: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SubscriptionAdd {
    pub hole_id: i32,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SubscriptionDelete {
    pub hole_id: i32,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Acknowledgement carrying the updated list of subscribed hole ids.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SubscriptionResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<i32>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn list_subscriptions_endpoint(query: &ListSubscriptionsQuery) -> Endpoint {
    let mut endpoint = Endpoint::new(Method::GET, "/users/subscriptions");
    endpoint.push_query("plain", query.plain);
    endpoint
}

fn parse_list_subscriptions(status: StatusCode, body: &[u8]) -> Result<Parsed<Vec<Hole>>> {
    match status.as_u16() {
        200 => Ok(Parsed::Value(serde_json::from_slice(body)?)),
        _ => Ok(Parsed::Unexpected),
    }
}

/// List the current user's subscribed holes. `GET /users/subscriptions`
pub async fn list_subscriptions_detailed(
    client: &Client,
    query: &ListSubscriptionsQuery,
) -> Result<Response<Vec<Hole>>> {
    let raw = client.execute(list_subscriptions_endpoint(query)).await?;
    build_response(
        client.error_on_unexpected_status(),
        raw,
        parse_list_subscriptions,
    )
}

pub async fn list_subscriptions(
    client: &Client,
    query: &ListSubscriptionsQuery,
) -> Result<Option<Vec<Hole>>> {
    Ok(list_subscriptions_detailed(client, query).await?.parsed)
}

fn add_subscription_endpoint(body: &SubscriptionAdd) -> Result<Endpoint> {
    Endpoint::new(Method::POST, "/users/subscriptions").with_json(body)
}

fn parse_add_subscription(status: StatusCode, body: &[u8]) -> Result<Parsed<SubscriptionResponse>> {
    match status.as_u16() {
        201 => Ok(Parsed::Value(serde_json::from_slice(body)?)),
        _ => Ok(Parsed::Unexpected),
    }
}

/// Subscribe to a hole. `POST /users/subscriptions`
pub async fn add_subscription_detailed(
    client: &Client,
    body: &SubscriptionAdd,
) -> Result<Response<SubscriptionResponse>> {
    let raw = client.execute(add_subscription_endpoint(body)?).await?;
    build_response(
        client.error_on_unexpected_status(),
        raw,
        parse_add_subscription,
    )
}

pub async fn add_subscription(
    client: &Client,
    body: &SubscriptionAdd,
) -> Result<Option<SubscriptionResponse>> {
    Ok(add_subscription_detailed(client, body).await?.parsed)
}

fn delete_subscription_endpoint(body: &SubscriptionDelete) -> Result<Endpoint> {
    Endpoint::new(Method::DELETE, "/users/subscription").with_json(body)
}

fn parse_delete_subscription(
    status: StatusCode,
    body: &[u8],
) -> Result<Parsed<SubscriptionResponse>> {
    match status.as_u16() {
        200 => Ok(Parsed::Value(serde_json::from_slice(body)?)),
        404 => Err(ApiError::from_status(status, body)),
        _ => Ok(Parsed::Unexpected),
    }
}

/// Unsubscribe from a hole. `DELETE /users/subscription`
pub async fn delete_subscription_detailed(
    client: &Client,
    body: &SubscriptionDelete,
) -> Result<Response<SubscriptionResponse>> {
    let raw = client.execute(delete_subscription_endpoint(body)?).await?;
    build_response(
        client.error_on_unexpected_status(),
        raw,
        parse_delete_subscription,
    )
}

pub async fn delete_subscription(
    client: &Client,
    body: &SubscriptionDelete,
) -> Result<Option<SubscriptionResponse>> {
    Ok(delete_subscription_detailed(client, body).await?.parsed)
}

#[cfg(feature = "blocking")]
pub mod blocking {
    //! Synchronous subscription endpoints.

    use super::*;
    use crate::blocking::Client;

    pub fn list_subscriptions_detailed(
        client: &Client,
        query: &ListSubscriptionsQuery,
    ) -> Result<Response<Vec<Hole>>> {
        let raw = client.execute(super::list_subscriptions_endpoint(query))?;
        build_response(
            client.error_on_unexpected_status(),
            raw,
            parse_list_subscriptions,
        )
    }

    pub fn list_subscriptions(
        client: &Client,
        query: &ListSubscriptionsQuery,
    ) -> Result<Option<Vec<Hole>>> {
        Ok(list_subscriptions_detailed(client, query)?.parsed)
    }

    pub fn add_subscription_detailed(
        client: &Client,
        body: &SubscriptionAdd,
    ) -> Result<Response<SubscriptionResponse>> {
        let raw = client.execute(super::add_subscription_endpoint(body)?)?;
        build_response(
            client.error_on_unexpected_status(),
            raw,
            parse_add_subscription,
        )
    }

    pub fn add_subscription(
        client: &Client,
        body: &SubscriptionAdd,
    ) -> Result<Option<SubscriptionResponse>> {
        Ok(add_subscription_detailed(client, body)?.parsed)
    }

    pub fn delete_subscription_detailed(
        client: &Client,
        body: &SubscriptionDelete,
    ) -> Result<Response<SubscriptionResponse>> {
        let raw = client.execute(super::delete_subscription_endpoint(body)?)?;
        build_response(
            client.error_on_unexpected_status(),
            raw,
            parse_delete_subscription,
        )
    }

    pub fn delete_subscription(
        client: &Client,
        body: &SubscriptionDelete,
    ) -> Result<Option<SubscriptionResponse>> {
        Ok(delete_subscription_detailed(client, body)?.parsed)
    }
}
