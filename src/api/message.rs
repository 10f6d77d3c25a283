//! Notification endpoints.

use reqwest::{Method, StatusCode};

use crate::client::{Client, Endpoint};
use crate::models::Message;
use crate::response::{build_response, Parsed, Response};
use crate::utils::error::Result;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListMessagesQuery {
    /// Only unread messages.
    pub not_read: bool,
}

fn list_messages_endpoint(query: &ListMessagesQuery) -> Endpoint {
    let mut endpoint = Endpoint::new(Method::GET, "/messages");
    endpoint.push_query("not_read", query.not_read);
    endpoint
}

fn parse_list_messages(status: StatusCode, body: &[u8]) -> Result<Parsed<Vec<Message>>> {
    match status.as_u16() {
        200 => Ok(Parsed::Value(serde_json::from_slice(body)?)),
        _ => Ok(Parsed::Unexpected),
    }
}

/// List the current user's notifications. `GET /messages`
pub async fn list_messages_detailed(
    client: &Client,
    query: &ListMessagesQuery,
) -> Result<Response<Vec<Message>>> {
    let raw = client.execute(list_messages_endpoint(query)).await?;
    build_response(
        client.error_on_unexpected_status(),
        raw,
        parse_list_messages,
    )
}

pub async fn list_messages(
    client: &Client,
    query: &ListMessagesQuery,
) -> Result<Option<Vec<Message>>> {
    Ok(list_messages_detailed(client, query).await?.parsed)
}

#[cfg(feature = "blocking")]
pub mod blocking {
    //! Synchronous notification endpoints.

    use super::*;
    use crate::blocking::Client;

    pub fn list_messages_detailed(
        client: &Client,
        query: &ListMessagesQuery,
    ) -> Result<Response<Vec<Message>>> {
        let raw = client.execute(super::list_messages_endpoint(query))?;
        build_response(
            client.error_on_unexpected_status(),
            raw,
            parse_list_messages,
        )
    }

    pub fn list_messages(
        client: &Client,
        query: &ListMessagesQuery,
    ) -> Result<Option<Vec<Message>>> {
        Ok(list_messages_detailed(client, query)?.parsed)
    }
}
