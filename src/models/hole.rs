use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::floor::Floor;
use crate::models::tag::Tag;

/// A forum thread.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Hole {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub division_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floors: Option<HoleFloors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub good: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hole_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_purge: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_created: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_deleted: Option<DeletedAt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_updated: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<i32>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Floor summary embedded in a hole: the opening floor, the latest floor and
/// a prefetched page of floors.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HoleFloors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_floor: Option<Box<Floor>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_floor: Option<Box<Floor>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefetch: Option<Vec<Floor>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Soft-deletion marker.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DeletedAt {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
