use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A post within a hole. `mention` carries the floors this one references,
/// expanded one level deep.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Floor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anonyname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dislike: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disliked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floor_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fold: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fold_v2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hole_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_actual_sensitive: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_me: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_sensitive: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub like: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub liked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mention: Option<Vec<Floor>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ranking: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sensitive_detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_created: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_updated: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One saved revision of a floor's content.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FloorHistory {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floor_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_actual_sensitive: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_sensitive: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sensitive_detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_created: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_updated: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i32>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Reduced floor view returned by the sensitive-floor moderation listing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SensitiveFloor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hole_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_actual_sensitive: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sensitive_detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_created: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_updated: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Silence status of a floor's author: division id mapped to the end time of
/// the silence, e.g. `{"1": "2024-05-01T14:42:31.722026326+08:00"}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BanDivision(pub BTreeMap<String, String>);
