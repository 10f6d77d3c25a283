#![cfg(feature = "blocking")]

use anyhow::Result;
use httpmock::prelude::*;
use serde_json::json;
use treehole_client::api::hole::HoleCreate;
use treehole_client::api::tag::ListTagsQuery;
use treehole_client::{api, blocking, ApiError};

#[test]
fn test_blocking_list_tags() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/tags").query_param("s", "校园");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!([{"tag_id": 1, "name": "校园"}]));
    });

    let client = blocking::Client::new(server.base_url())?;
    let query = ListTagsQuery {
        s: Some("校园".to_string()),
    };
    let tags = api::tag::blocking::list_tags(&client, &query)?.unwrap();

    mock.assert();
    assert_eq!(tags[0].name.as_deref(), Some("校园"));
    Ok(())
}

#[test]
fn test_blocking_create_hole_sends_token() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/divisions/1/holes")
            .header("authorization", "Bearer tok")
            .json_body(json!({"content": "新帖"}));
        then.status(201)
            .header("Content-Type", "application/json")
            .json_body(json!({"hole_id": 9}));
    });

    let client = blocking::Client::authenticated(server.base_url(), "tok")?;
    let body = HoleCreate {
        content: "新帖".to_string(),
        ..Default::default()
    };
    let hole = api::hole::blocking::create_hole(&client, 1, &body)?.unwrap();

    mock.assert();
    assert_eq!(hole.hole_id, Some(9));
    Ok(())
}

#[test]
fn test_blocking_documented_error() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/divisions/99");
        then.status(404)
            .header("Content-Type", "application/json")
            .json_body(json!({"message": "division not found"}));
    });

    let client = blocking::Client::new(server.base_url())?;
    let err = api::division::blocking::get_division(&client, 99).unwrap_err();

    match err {
        ApiError::Api { message, .. } => assert_eq!(message, "division not found"),
        other => panic!("unexpected error: {other:?}"),
    }
    Ok(())
}
