use serde_json::json;
use treehole_client::api::floor::{FloorLike, FloorModify};
use treehole_client::api::hole::HoleCreate;
use treehole_client::api::tag::TagCreate;
use treehole_client::api::user::{UserConfigModify, UserModify};
use treehole_client::models::{
    BanDivision, Division, Floor, FloorHistory, Hole, Message, MessageType, Punishment, Tag, User,
};

#[test]
fn test_hole_round_trip_preserves_known_fields() {
    let value = json!({
        "hole_id": 123,
        "id": 123,
        "division_id": 2,
        "time_created": "2023-01-15T08:30:00+08:00",
        "time_updated": "2023-01-16T10:00:00+08:00",
        "reply": 42,
        "view": 1000,
        "hidden": false,
        "locked": false,
        "tags": [{"tag_id": 1, "name": "校园", "temperature": 5}],
        "floors": {
            "first_floor": {"floor_id": 1000, "content": "首条内容", "anonyname": "Alice"},
            "last_floor": {"floor_id": 1042, "content": "最新内容", "anonyname": "Bob"},
            "prefetch": [{"floor_id": 1000, "content": "首条内容"}]
        }
    });

    let hole: Hole = serde_json::from_value(value.clone()).unwrap();
    assert_eq!(hole.hole_id, Some(123));
    assert_eq!(hole.reply, Some(42));
    let floors = hole.floors.as_ref().unwrap();
    assert_eq!(
        floors.first_floor.as_ref().unwrap().anonyname.as_deref(),
        Some("Alice")
    );
    assert_eq!(floors.prefetch.as_ref().unwrap().len(), 1);
    assert_eq!(hole.tags.as_ref().unwrap()[0].name.as_deref(), Some("校园"));

    // Every field the server sent must serialize back identically.
    assert_eq!(serde_json::to_value(&hole).unwrap(), value);
}

#[test]
fn test_unknown_fields_survive_round_trip() {
    let value = json!({
        "tag_id": 7,
        "name": "树洞",
        "brand_new_field": {"nested": [1, 2, 3]},
        "another_one": "kept"
    });

    let tag: Tag = serde_json::from_value(value.clone()).unwrap();
    assert_eq!(tag.tag_id, Some(7));
    assert_eq!(tag.extra["brand_new_field"], json!({"nested": [1, 2, 3]}));
    assert_eq!(tag.extra["another_one"], json!("kept"));

    assert_eq!(serde_json::to_value(&tag).unwrap(), value);
}

#[test]
fn test_unset_fields_are_omitted_on_serialize() {
    let tag = Tag {
        name: Some("tag".to_string()),
        ..Default::default()
    };

    assert_eq!(serde_json::to_value(&tag).unwrap(), json!({"name": "tag"}));
}

#[test]
fn test_floor_mentions_nest() {
    let value = json!({
        "floor_id": 9,
        "content": "##123",
        "mention": [
            {"floor_id": 123, "content": "被引用的楼层", "hole_id": 5}
        ],
        "fold": ["折叠原因"],
        "like": 3,
        "liked": true
    });

    let floor: Floor = serde_json::from_value(value.clone()).unwrap();
    assert_eq!(floor.mention.as_ref().unwrap()[0].floor_id, Some(123));
    assert_eq!(serde_json::to_value(&floor).unwrap(), value);
}

#[test]
fn test_message_type_wire_names() {
    let message: Message =
        serde_json::from_value(json!({"code": "report_dealt", "message": "已处理"})).unwrap();
    assert_eq!(message.code, Some(MessageType::ReportDealt));

    assert_eq!(
        serde_json::to_value(MessageType::Mention).unwrap(),
        json!("mention")
    );
}

#[test]
fn test_ban_division_is_a_plain_map() {
    let value = json!({"1": "2024-05-01T14:42:31.722026326+08:00", "4": "2024-06-01T00:00:00+08:00"});

    let ban: BanDivision = serde_json::from_value(value.clone()).unwrap();
    assert_eq!(ban.0.len(), 2);
    assert_eq!(ban.0["1"], "2024-05-01T14:42:31.722026326+08:00");
    assert_eq!(serde_json::to_value(&ban).unwrap(), value);
}

#[test]
fn test_user_permission_round_trip() {
    let value = json!({
        "user_id": 42,
        "nickname": "user_42",
        "is_admin": false,
        "config": {"notify": ["mention", "favorite"], "show_folded": "fold"},
        "permission": {"admin": "1970-01-01T00:00:00+00:00", "offense_count": 0, "silent": {"1": "2024-05-01T00:00:00+08:00"}}
    });

    let user: User = serde_json::from_value(value.clone()).unwrap();
    assert_eq!(
        user.config.as_ref().unwrap().notify.as_ref().unwrap().len(),
        2
    );
    assert_eq!(
        user.permission.as_ref().unwrap().silent.as_ref().unwrap()["1"],
        "2024-05-01T00:00:00+08:00"
    );
    assert_eq!(serde_json::to_value(&user).unwrap(), value);
}

#[test]
fn test_division_pins_whole_holes() {
    let value = json!({
        "division_id": 1,
        "name": "树洞",
        "description": "主分区",
        "pinned": [{"hole_id": 77, "reply": 3}]
    });

    let division: Division = serde_json::from_value(value.clone()).unwrap();
    assert_eq!(division.pinned.as_ref().unwrap()[0].hole_id, Some(77));
    assert_eq!(serde_json::to_value(&division).unwrap(), value);
}

#[test]
fn test_floor_history_and_punishment_round_trip() {
    let history_value = json!({
        "id": 5,
        "floor_id": 1000,
        "content": "修改前的内容",
        "reason": "delete",
        "user_id": 42,
        "time_created": "2023-02-01T12:00:00+08:00"
    });
    let history: FloorHistory = serde_json::from_value(history_value.clone()).unwrap();
    assert_eq!(history.floor_id, Some(1000));
    assert_eq!(serde_json::to_value(&history).unwrap(), history_value);

    let punishment_value = json!({
        "id": 9,
        "user_id": 42,
        "floor_id": 1000,
        "division_id": 1,
        "day": 3,
        "reason": "广告",
        "start_time": "2023-02-01T12:00:00+08:00",
        "end_time": "2023-02-04T12:00:00+08:00"
    });
    let punishment: Punishment = serde_json::from_value(punishment_value.clone()).unwrap();
    assert_eq!(punishment.day, Some(3));
    assert_eq!(
        serde_json::to_value(&punishment).unwrap(),
        punishment_value
    );
}

#[test]
fn test_request_bodies_omit_unset_fields() {
    let body = HoleCreate {
        content: "新帖内容".to_string(),
        tags: Some(vec![TagCreate {
            name: "校园".to_string(),
            ..Default::default()
        }]),
        ..Default::default()
    };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        json!({"content": "新帖内容", "tags": [{"name": "校园"}]})
    );

    let body = FloorModify {
        like: Some(FloorLike::Add),
        ..Default::default()
    };
    assert_eq!(serde_json::to_value(&body).unwrap(), json!({"like": "add"}));

    let body = UserModify {
        nickname: Some("new_name".to_string()),
        config: Some(UserConfigModify {
            show_folded: Some("hide".to_string()),
            ..Default::default()
        }),
        ..Default::default()
    };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        json!({"nickname": "new_name", "config": {"show_folded": "hide"}})
    );
}
