//! Favorite endpoints: holes a user has bookmarked, organized in favorite
//! groups.

use std::fmt;

use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::client::{Client, Endpoint};
use crate::models::{FavoriteGroup, Hole, MessageModel};
use crate::response::{build_response, Parsed, Response};
use crate::utils::error::{ApiError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteOrder {
    Id,
    TimeCreated,
    HoleTimeUpdated,
}

impl FavoriteOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            FavoriteOrder::Id => "id",
            FavoriteOrder::TimeCreated => "time_created",
            FavoriteOrder::HoleTimeUpdated => "hole_time_updated",
        }
    }
}

impl fmt::Display for FavoriteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteGroupOrder {
    Id,
    TimeCreated,
    TimeUpdated,
}

impl FavoriteGroupOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            FavoriteGroupOrder::Id => "id",
            FavoriteGroupOrder::TimeCreated => "time_created",
            FavoriteGroupOrder::TimeUpdated => "time_updated",
        }
    }
}

impl fmt::Display for FavoriteGroupOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListFavoritesQuery {
    /// Restrict to one favorite group; unset means the default group.
    pub favorite_group_id: Option<i32>,
    pub order: FavoriteOrder,
    /// Skip expanding hole floors and tags.
    pub plain: bool,
}

impl Default for ListFavoritesQuery {
    fn default() -> Self {
        Self {
            favorite_group_id: None,
            order: FavoriteOrder::TimeCreated,
            plain: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListFavoriteGroupsQuery {
    pub order: FavoriteGroupOrder,
    pub plain: bool,
}

impl Default for ListFavoriteGroupsQuery {
    fn default() -> Self {
        Self {
            order: FavoriteGroupOrder::TimeCreated,
            plain: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FavoriteAdd {
    pub hole_id: i32,
    /// Unset targets the default group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favorite_group_id: Option<i32>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Replace the hole set of one favorite group.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FavoriteModify {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favorite_group_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hole_ids: Option<Vec<i32>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FavoriteMove {
    pub from_favorite_group_id: i32,
    pub to_favorite_group_id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hole_ids: Option<Vec<i32>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FavoriteDelete {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hole_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favorite_group_id: Option<i32>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FavoriteGroupCreate {
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FavoriteGroupModify {
    pub favorite_group_id: i32,
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FavoriteGroupDelete {
    pub favorite_group_id: i32,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn parse_message(status: StatusCode, body: &[u8]) -> Result<Parsed<MessageModel>> {
    match status.as_u16() {
        200 | 201 => Ok(Parsed::Value(serde_json::from_slice(body)?)),
        404 => Err(ApiError::from_status(status, body)),
        _ => Ok(Parsed::Unexpected),
    }
}

fn parse_group_list(status: StatusCode, body: &[u8]) -> Result<Parsed<Vec<FavoriteGroup>>> {
    match status.as_u16() {
        200 | 201 => Ok(Parsed::Value(serde_json::from_slice(body)?)),
        404 => Err(ApiError::from_status(status, body)),
        _ => Ok(Parsed::Unexpected),
    }
}

fn list_favorites_endpoint(query: &ListFavoritesQuery) -> Endpoint {
    let mut endpoint = Endpoint::new(Method::GET, "/user/favorites");
    if let Some(favorite_group_id) = query.favorite_group_id {
        endpoint.push_query("favorite_group_id", favorite_group_id);
    }
    endpoint.push_query("order", query.order);
    endpoint.push_query("plain", query.plain);
    endpoint
}

fn parse_list_favorites(status: StatusCode, body: &[u8]) -> Result<Parsed<Vec<Hole>>> {
    match status.as_u16() {
        200 => Ok(Parsed::Value(serde_json::from_slice(body)?)),
        _ => Ok(Parsed::Unexpected),
    }
}

/// List the current user's favorite holes. `GET /user/favorites`
pub async fn list_favorites_detailed(
    client: &Client,
    query: &ListFavoritesQuery,
) -> Result<Response<Vec<Hole>>> {
    let raw = client.execute(list_favorites_endpoint(query)).await?;
    build_response(
        client.error_on_unexpected_status(),
        raw,
        parse_list_favorites,
    )
}

pub async fn list_favorites(
    client: &Client,
    query: &ListFavoritesQuery,
) -> Result<Option<Vec<Hole>>> {
    Ok(list_favorites_detailed(client, query).await?.parsed)
}

fn add_favorite_endpoint(body: &FavoriteAdd) -> Result<Endpoint> {
    Endpoint::new(Method::POST, "/user/favorites").with_json(body)
}

/// Add a hole to the user's favorites; answers 200 when it already was one.
/// `POST /user/favorites`
pub async fn add_favorite_detailed(
    client: &Client,
    body: &FavoriteAdd,
) -> Result<Response<MessageModel>> {
    let raw = client.execute(add_favorite_endpoint(body)?).await?;
    build_response(client.error_on_unexpected_status(), raw, parse_message)
}

pub async fn add_favorite(client: &Client, body: &FavoriteAdd) -> Result<Option<MessageModel>> {
    Ok(add_favorite_detailed(client, body).await?.parsed)
}

fn modify_favorite_endpoint(body: &FavoriteModify) -> Result<Endpoint> {
    Endpoint::new(Method::PUT, "/user/favorites").with_json(body)
}

/// Replace the user's favorites. `PUT /user/favorites`
pub async fn modify_favorite_detailed(
    client: &Client,
    body: &FavoriteModify,
) -> Result<Response<MessageModel>> {
    let raw = client.execute(modify_favorite_endpoint(body)?).await?;
    build_response(client.error_on_unexpected_status(), raw, parse_message)
}

pub async fn modify_favorite(
    client: &Client,
    body: &FavoriteModify,
) -> Result<Option<MessageModel>> {
    Ok(modify_favorite_detailed(client, body).await?.parsed)
}

fn move_favorite_endpoint(body: &FavoriteMove) -> Result<Endpoint> {
    Endpoint::new(Method::PUT, "/user/favorites/move").with_json(body)
}

/// Move holes between favorite groups. `PUT /user/favorites/move`
pub async fn move_favorite_detailed(
    client: &Client,
    body: &FavoriteMove,
) -> Result<Response<MessageModel>> {
    let raw = client.execute(move_favorite_endpoint(body)?).await?;
    build_response(client.error_on_unexpected_status(), raw, parse_message)
}

pub async fn move_favorite(client: &Client, body: &FavoriteMove) -> Result<Option<MessageModel>> {
    Ok(move_favorite_detailed(client, body).await?.parsed)
}

fn delete_favorite_endpoint(body: &FavoriteDelete) -> Result<Endpoint> {
    Endpoint::new(Method::DELETE, "/user/favorites").with_json(body)
}

fn parse_delete_favorite(status: StatusCode, body: &[u8]) -> Result<Parsed<()>> {
    match status.as_u16() {
        204 => Ok(Parsed::Value(())),
        404 => Err(ApiError::from_status(status, body)),
        _ => Ok(Parsed::Unexpected),
    }
}

/// Remove a hole from the user's favorites. `DELETE /user/favorites`
pub async fn delete_favorite_detailed(
    client: &Client,
    body: &FavoriteDelete,
) -> Result<Response<()>> {
    let raw = client.execute(delete_favorite_endpoint(body)?).await?;
    build_response(
        client.error_on_unexpected_status(),
        raw,
        parse_delete_favorite,
    )
}

pub async fn delete_favorite(client: &Client, body: &FavoriteDelete) -> Result<Option<()>> {
    Ok(delete_favorite_detailed(client, body).await?.parsed)
}

fn list_favorite_groups_endpoint(query: &ListFavoriteGroupsQuery) -> Endpoint {
    let mut endpoint = Endpoint::new(Method::GET, "/user/favorite_groups");
    endpoint.push_query("order", query.order);
    endpoint.push_query("plain", query.plain);
    endpoint
}

fn parse_list_favorite_groups(
    status: StatusCode,
    body: &[u8],
) -> Result<Parsed<Vec<FavoriteGroup>>> {
    match status.as_u16() {
        200 => Ok(Parsed::Value(serde_json::from_slice(body)?)),
        _ => Ok(Parsed::Unexpected),
    }
}

/// List the user's favorite groups. `GET /user/favorite_groups`
pub async fn list_favorite_groups_detailed(
    client: &Client,
    query: &ListFavoriteGroupsQuery,
) -> Result<Response<Vec<FavoriteGroup>>> {
    let raw = client.execute(list_favorite_groups_endpoint(query)).await?;
    build_response(
        client.error_on_unexpected_status(),
        raw,
        parse_list_favorite_groups,
    )
}

pub async fn list_favorite_groups(
    client: &Client,
    query: &ListFavoriteGroupsQuery,
) -> Result<Option<Vec<FavoriteGroup>>> {
    Ok(list_favorite_groups_detailed(client, query).await?.parsed)
}

fn add_favorite_group_endpoint(body: &FavoriteGroupCreate) -> Result<Endpoint> {
    Endpoint::new(Method::POST, "/user/favorite_groups").with_json(body)
}

/// Create a favorite group; answers the full group list.
/// `POST /user/favorite_groups`
pub async fn add_favorite_group_detailed(
    client: &Client,
    body: &FavoriteGroupCreate,
) -> Result<Response<Vec<FavoriteGroup>>> {
    let raw = client.execute(add_favorite_group_endpoint(body)?).await?;
    build_response(client.error_on_unexpected_status(), raw, parse_group_list)
}

pub async fn add_favorite_group(
    client: &Client,
    body: &FavoriteGroupCreate,
) -> Result<Option<Vec<FavoriteGroup>>> {
    Ok(add_favorite_group_detailed(client, body).await?.parsed)
}

fn modify_favorite_group_endpoint(body: &FavoriteGroupModify) -> Result<Endpoint> {
    Endpoint::new(Method::PUT, "/user/favorite_groups").with_json(body)
}

/// Rename a favorite group; answers the full group list.
/// `PUT /user/favorite_groups`
pub async fn modify_favorite_group_detailed(
    client: &Client,
    body: &FavoriteGroupModify,
) -> Result<Response<Vec<FavoriteGroup>>> {
    let raw = client.execute(modify_favorite_group_endpoint(body)?).await?;
    build_response(client.error_on_unexpected_status(), raw, parse_group_list)
}

pub async fn modify_favorite_group(
    client: &Client,
    body: &FavoriteGroupModify,
) -> Result<Option<Vec<FavoriteGroup>>> {
    Ok(modify_favorite_group_detailed(client, body).await?.parsed)
}

fn delete_favorite_group_endpoint(body: &FavoriteGroupDelete) -> Result<Endpoint> {
    Endpoint::new(Method::DELETE, "/user/favorite_groups").with_json(body)
}

fn parse_delete_favorite_group(status: StatusCode, body: &[u8]) -> Result<Parsed<()>> {
    match status.as_u16() {
        204 => Ok(Parsed::Value(())),
        404 => Err(ApiError::from_status(status, body)),
        _ => Ok(Parsed::Unexpected),
    }
}

/// Delete a favorite group and the favorites in it.
/// `DELETE /user/favorite_groups`
pub async fn delete_favorite_group_detailed(
    client: &Client,
    body: &FavoriteGroupDelete,
) -> Result<Response<()>> {
    let raw = client.execute(delete_favorite_group_endpoint(body)?).await?;
    build_response(
        client.error_on_unexpected_status(),
        raw,
        parse_delete_favorite_group,
    )
}

pub async fn delete_favorite_group(
    client: &Client,
    body: &FavoriteGroupDelete,
) -> Result<Option<()>> {
    Ok(delete_favorite_group_detailed(client, body).await?.parsed)
}

#[cfg(feature = "blocking")]
pub mod blocking {
    //! Synchronous favorite endpoints.

    use super::*;
    use crate::blocking::Client;

    pub fn list_favorites_detailed(
        client: &Client,
        query: &ListFavoritesQuery,
    ) -> Result<Response<Vec<Hole>>> {
        let raw = client.execute(super::list_favorites_endpoint(query))?;
        build_response(
            client.error_on_unexpected_status(),
            raw,
            parse_list_favorites,
        )
    }

    pub fn list_favorites(
        client: &Client,
        query: &ListFavoritesQuery,
    ) -> Result<Option<Vec<Hole>>> {
        Ok(list_favorites_detailed(client, query)?.parsed)
    }

    pub fn add_favorite_detailed(
        client: &Client,
        body: &FavoriteAdd,
    ) -> Result<Response<MessageModel>> {
        let raw = client.execute(super::add_favorite_endpoint(body)?)?;
        build_response(client.error_on_unexpected_status(), raw, parse_message)
    }

    pub fn add_favorite(client: &Client, body: &FavoriteAdd) -> Result<Option<MessageModel>> {
        Ok(add_favorite_detailed(client, body)?.parsed)
    }

    pub fn modify_favorite_detailed(
        client: &Client,
        body: &FavoriteModify,
    ) -> Result<Response<MessageModel>> {
        let raw = client.execute(super::modify_favorite_endpoint(body)?)?;
        build_response(client.error_on_unexpected_status(), raw, parse_message)
    }

    pub fn modify_favorite(
        client: &Client,
        body: &FavoriteModify,
    ) -> Result<Option<MessageModel>> {
        Ok(modify_favorite_detailed(client, body)?.parsed)
    }

    pub fn move_favorite_detailed(
        client: &Client,
        body: &FavoriteMove,
    ) -> Result<Response<MessageModel>> {
        let raw = client.execute(super::move_favorite_endpoint(body)?)?;
        build_response(client.error_on_unexpected_status(), raw, parse_message)
    }

    pub fn move_favorite(client: &Client, body: &FavoriteMove) -> Result<Option<MessageModel>> {
        Ok(move_favorite_detailed(client, body)?.parsed)
    }

    pub fn delete_favorite_detailed(
        client: &Client,
        body: &FavoriteDelete,
    ) -> Result<Response<()>> {
        let raw = client.execute(super::delete_favorite_endpoint(body)?)?;
        build_response(
            client.error_on_unexpected_status(),
            raw,
            parse_delete_favorite,
        )
    }

    pub fn delete_favorite(client: &Client, body: &FavoriteDelete) -> Result<Option<()>> {
        Ok(delete_favorite_detailed(client, body)?.parsed)
    }

    pub fn list_favorite_groups_detailed(
        client: &Client,
        query: &ListFavoriteGroupsQuery,
    ) -> Result<Response<Vec<FavoriteGroup>>> {
        let raw = client.execute(super::list_favorite_groups_endpoint(query))?;
        build_response(
            client.error_on_unexpected_status(),
            raw,
            parse_list_favorite_groups,
        )
    }

    pub fn list_favorite_groups(
        client: &Client,
        query: &ListFavoriteGroupsQuery,
    ) -> Result<Option<Vec<FavoriteGroup>>> {
        Ok(list_favorite_groups_detailed(client, query)?.parsed)
    }

    pub fn add_favorite_group_detailed(
        client: &Client,
        body: &FavoriteGroupCreate,
    ) -> Result<Response<Vec<FavoriteGroup>>> {
        let raw = client.execute(super::add_favorite_group_endpoint(body)?)?;
        build_response(client.error_on_unexpected_status(), raw, parse_group_list)
    }

    pub fn add_favorite_group(
        client: &Client,
        body: &FavoriteGroupCreate,
    ) -> Result<Option<Vec<FavoriteGroup>>> {
        Ok(add_favorite_group_detailed(client, body)?.parsed)
    }

    pub fn modify_favorite_group_detailed(
        client: &Client,
        body: &FavoriteGroupModify,
    ) -> Result<Response<Vec<FavoriteGroup>>> {
        let raw = client.execute(super::modify_favorite_group_endpoint(body)?)?;
        build_response(client.error_on_unexpected_status(), raw, parse_group_list)
    }

    pub fn modify_favorite_group(
        client: &Client,
        body: &FavoriteGroupModify,
    ) -> Result<Option<Vec<FavoriteGroup>>> {
        Ok(modify_favorite_group_detailed(client, body)?.parsed)
    }

    pub fn delete_favorite_group_detailed(
        client: &Client,
        body: &FavoriteGroupDelete,
    ) -> Result<Response<()>> {
        let raw = client.execute(super::delete_favorite_group_endpoint(body)?)?;
        build_response(
            client.error_on_unexpected_status(),
            raw,
            parse_delete_favorite_group,
        )
    }

    pub fn delete_favorite_group(
        client: &Client,
        body: &FavoriteGroupDelete,
    ) -> Result<Option<()>> {
        Ok(delete_favorite_group_detailed(client, body)?.parsed)
    }
}
