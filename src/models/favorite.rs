use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A named collection of favorited holes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FavoriteGroup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favorite_group_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_created: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_updated: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i32>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
