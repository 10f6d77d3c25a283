use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct User {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<UserConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_special_tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favorite_group_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_answered_questions: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_admin: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub joined_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission: Option<UserPermission>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i32>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_folded: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Moderation state of a user. `silent` maps division ids to the end time of
/// the silence in that division.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserPermission {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offense_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub silent: Option<BTreeMap<String, String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
