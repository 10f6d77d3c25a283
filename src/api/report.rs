//! Report endpoints. Users report floors; admins deal the reports.

use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::api::SortOrder;
use crate::client::{Client, Endpoint};
use crate::models::{Report, User};
use crate::response::{build_response, Parsed, Response};
use crate::utils::error::{ApiError, Result};

/// Which reports to list, serialized as its numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportRange {
    NotDealt,
    Dealt,
    All,
}

impl ReportRange {
    pub fn as_i32(self) -> i32 {
        match self {
            ReportRange::NotDealt => 0,
            ReportRange::Dealt => 1,
            ReportRange::All => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListReportsQuery {
    pub offset: i32,
    pub order_by: String,
    pub range: Option<ReportRange>,
    pub size: i32,
    pub sort: SortOrder,
}

impl Default for ListReportsQuery {
    fn default() -> Self {
        Self {
            offset: 0,
            order_by: "id".to_string(),
            range: None,
            size: 30,
            sort: SortOrder::Desc,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReportAdd {
    pub floor_id: i32,
    pub reason: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The deal result is sent to the reporter as a notification.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReportDeal {
    pub result: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReportBan {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn list_reports_endpoint(query: &ListReportsQuery) -> Endpoint {
    let mut endpoint = Endpoint::new(Method::GET, "/reports");
    endpoint.push_query("offset", query.offset);
    endpoint.push_query("order_by", &query.order_by);
    if let Some(range) = query.range {
        endpoint.push_query("range", range.as_i32());
    }
    endpoint.push_query("size", query.size);
    endpoint.push_query("sort", query.sort);
    endpoint
}

fn parse_list_reports(status: StatusCode, body: &[u8]) -> Result<Parsed<Vec<Report>>> {
    match status.as_u16() {
        200 => Ok(Parsed::Value(serde_json::from_slice(body)?)),
        404 => Err(ApiError::from_status(status, body)),
        _ => Ok(Parsed::Unexpected),
    }
}

/// List reports, admin only. `GET /reports`
pub async fn list_reports_detailed(
    client: &Client,
    query: &ListReportsQuery,
) -> Result<Response<Vec<Report>>> {
    let raw = client.execute(list_reports_endpoint(query)).await?;
    build_response(client.error_on_unexpected_status(), raw, parse_list_reports)
}

pub async fn list_reports(
    client: &Client,
    query: &ListReportsQuery,
) -> Result<Option<Vec<Report>>> {
    Ok(list_reports_detailed(client, query).await?.parsed)
}

fn get_report_endpoint(id: i32) -> Endpoint {
    Endpoint::new(Method::GET, format!("/reports/{}", id))
}

fn parse_get_report(status: StatusCode, body: &[u8]) -> Result<Parsed<Report>> {
    match status.as_u16() {
        200 => Ok(Parsed::Value(serde_json::from_slice(body)?)),
        404 => Err(ApiError::from_status(status, body)),
        _ => Ok(Parsed::Unexpected),
    }
}

/// Get a report, admin only. `GET /reports/{id}`
pub async fn get_report_detailed(client: &Client, id: i32) -> Result<Response<Report>> {
    let raw = client.execute(get_report_endpoint(id)).await?;
    build_response(client.error_on_unexpected_status(), raw, parse_get_report)
}

pub async fn get_report(client: &Client, id: i32) -> Result<Option<Report>> {
    Ok(get_report_detailed(client, id).await?.parsed)
}

fn add_report_endpoint(body: &ReportAdd) -> Result<Endpoint> {
    Endpoint::new(Method::POST, "/reports").with_json(body)
}

fn parse_add_report(status: StatusCode, body: &[u8]) -> Result<Parsed<()>> {
    match status.as_u16() {
        204 => Ok(Parsed::Value(())),
        400 => Err(ApiError::from_status(status, body)),
        _ => Ok(Parsed::Unexpected),
    }
}

/// Report a floor. `POST /reports`
pub async fn add_report_detailed(client: &Client, body: &ReportAdd) -> Result<Response<()>> {
    let raw = client.execute(add_report_endpoint(body)?).await?;
    build_response(client.error_on_unexpected_status(), raw, parse_add_report)
}

pub async fn add_report(client: &Client, body: &ReportAdd) -> Result<Option<()>> {
    Ok(add_report_detailed(client, body).await?.parsed)
}

fn deal_report_endpoint(id: i32, body: &ReportDeal) -> Result<Endpoint> {
    Endpoint::new(Method::DELETE, format!("/reports/{}", id)).with_json(body)
}

fn parse_deal_report(status: StatusCode, body: &[u8]) -> Result<Parsed<Report>> {
    match status.as_u16() {
        200 => Ok(Parsed::Value(serde_json::from_slice(body)?)),
        400 => Err(ApiError::from_status(status, body)),
        _ => Ok(Parsed::Unexpected),
    }
}

/// Mark a report as dealt and notify the reporter, admin only.
/// `DELETE /reports/{id}`
pub async fn deal_report_detailed(
    client: &Client,
    id: i32,
    body: &ReportDeal,
) -> Result<Response<Report>> {
    let raw = client.execute(deal_report_endpoint(id, body)?).await?;
    build_response(client.error_on_unexpected_status(), raw, parse_deal_report)
}

pub async fn deal_report(client: &Client, id: i32, body: &ReportDeal) -> Result<Option<Report>> {
    Ok(deal_report_detailed(client, id, body).await?.parsed)
}

fn ban_reporter_endpoint(id: i32, body: &ReportBan) -> Result<Endpoint> {
    Endpoint::new(Method::POST, format!("/reports/ban/{}", id)).with_json(body)
}

fn parse_ban_reporter(status: StatusCode, body: &[u8]) -> Result<Parsed<User>> {
    match status.as_u16() {
        201 => Ok(Parsed::Value(serde_json::from_slice(body)?)),
        _ => Ok(Parsed::Unexpected),
    }
}

/// Silence the author of the reported floor, admin only.
/// `POST /reports/ban/{id}`
pub async fn ban_reporter_detailed(
    client: &Client,
    id: i32,
    body: &ReportBan,
) -> Result<Response<User>> {
    let raw = client.execute(ban_reporter_endpoint(id, body)?).await?;
    build_response(client.error_on_unexpected_status(), raw, parse_ban_reporter)
}

pub async fn ban_reporter(client: &Client, id: i32, body: &ReportBan) -> Result<Option<User>> {
    Ok(ban_reporter_detailed(client, id, body).await?.parsed)
}

#[cfg(feature = "blocking")]
pub mod blocking {
    //! Synchronous report endpoints.

    use super::*;
    use crate::blocking::Client;

    pub fn list_reports_detailed(
        client: &Client,
        query: &ListReportsQuery,
    ) -> Result<Response<Vec<Report>>> {
        let raw = client.execute(super::list_reports_endpoint(query))?;
        build_response(client.error_on_unexpected_status(), raw, parse_list_reports)
    }

    pub fn list_reports(
        client: &Client,
        query: &ListReportsQuery,
    ) -> Result<Option<Vec<Report>>> {
        Ok(list_reports_detailed(client, query)?.parsed)
    }

    pub fn get_report_detailed(client: &Client, id: i32) -> Result<Response<Report>> {
        let raw = client.execute(super::get_report_endpoint(id))?;
        build_response(client.error_on_unexpected_status(), raw, parse_get_report)
    }

    pub fn get_report(client: &Client, id: i32) -> Result<Option<Report>> {
        Ok(get_report_detailed(client, id)?.parsed)
    }

    pub fn add_report_detailed(client: &Client, body: &ReportAdd) -> Result<Response<()>> {
        let raw = client.execute(super::add_report_endpoint(body)?)?;
        build_response(client.error_on_unexpected_status(), raw, parse_add_report)
    }

    pub fn add_report(client: &Client, body: &ReportAdd) -> Result<Option<()>> {
        Ok(add_report_detailed(client, body)?.parsed)
    }

    pub fn deal_report_detailed(
        client: &Client,
        id: i32,
        body: &ReportDeal,
    ) -> Result<Response<Report>> {
        let raw = client.execute(super::deal_report_endpoint(id, body)?)?;
        build_response(client.error_on_unexpected_status(), raw, parse_deal_report)
    }

    pub fn deal_report(client: &Client, id: i32, body: &ReportDeal) -> Result<Option<Report>> {
        Ok(deal_report_detailed(client, id, body)?.parsed)
    }

    pub fn ban_reporter_detailed(
        client: &Client,
        id: i32,
        body: &ReportBan,
    ) -> Result<Response<User>> {
        let raw = client.execute(super::ban_reporter_endpoint(id, body)?)?;
        build_response(client.error_on_unexpected_status(), raw, parse_ban_reporter)
    }

    pub fn ban_reporter(client: &Client, id: i32, body: &ReportBan) -> Result<Option<User>> {
        Ok(ban_reporter_detailed(client, id, body)?.parsed)
    }
}
