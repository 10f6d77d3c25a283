use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::division::Division;
use crate::models::floor::Floor;

/// A silence applied to a user for a floor, scoped to a division.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Punishment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub division: Option<Box<Division>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub division_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floor: Option<Box<Floor>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floor_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub made_by: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i32>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
