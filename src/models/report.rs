use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::floor::Floor;

/// A user report against a floor. `floor` is the reported floor, expanded.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Report {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dealt: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dealt_by: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floor: Option<Box<Floor>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floor_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hole_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_created: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_updated: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
