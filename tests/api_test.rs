use anyhow::Result;
use httpmock::prelude::*;
use serde_json::json;
use treehole_client::api::division::DivisionDelete;
use treehole_client::api::floor::{FloorCreate, FloorListQuery};
use treehole_client::api::hole::ListHolesOldQuery;
use treehole_client::api::report::{ReportAdd, ReportDeal};
use treehole_client::api::search::SearchFloorsQuery;
use treehole_client::api::tag::ListTagsQuery;
use treehole_client::{api, ApiError, Client};

fn init_test_logger() {
    use tracing_subscriber::EnvFilter;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("treehole_client=debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

fn client_for(server: &MockServer) -> Client {
    init_test_logger();
    Client::new(server.base_url()).unwrap()
}

#[tokio::test]
async fn test_list_holes_sends_defaults_and_parses() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/holes").query_param("length", "10");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!([
                {"hole_id": 1, "reply": 2},
                {"hole_id": 2, "reply": 0}
            ]));
    });

    let client = client_for(&server);
    let holes = api::hole::list_holes_old(&client, &ListHolesOldQuery::default())
        .await?
        .unwrap();

    mock.assert();
    assert_eq!(holes.len(), 2);
    assert_eq!(holes[0].hole_id, Some(1));
    Ok(())
}

#[tokio::test]
async fn test_list_floors_sends_full_query() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/holes/55/floors")
            .query_param("offset", "0")
            .query_param("order_by", "id")
            .query_param("size", "30")
            .query_param("sort", "asc");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!([{"floor_id": 9, "content": "hi"}]));
    });

    let client = client_for(&server);
    let floors = api::floor::list_floors(&client, 55, &FloorListQuery::default())
        .await?
        .unwrap();

    mock.assert();
    assert_eq!(floors[0].floor_id, Some(9));
    Ok(())
}

#[tokio::test]
async fn test_get_hole_not_found_is_api_error() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/holes/404404");
        then.status(404)
            .header("Content-Type", "application/json")
            .json_body(json!({"message": "hole not found"}));
    });

    let client = client_for(&server);
    let err = api::hole::get_hole(&client, 404404).await.unwrap_err();

    mock.assert();
    match err {
        ApiError::Api {
            status, message, ..
        } => {
            assert_eq!(status.as_u16(), 404);
            assert_eq!(message, "hole not found");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn test_unexpected_status_raises_by_default() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/tags");
        then.status(418).body("i'm a teapot");
    });

    let client = client_for(&server);
    let err = api::tag::list_tags(&client, &ListTagsQuery::default())
        .await
        .unwrap_err();

    match err {
        ApiError::UnexpectedStatus { status, content } => {
            assert_eq!(status.as_u16(), 418);
            assert_eq!(content, b"i'm a teapot");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn test_unexpected_status_yields_none_when_disabled() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/tags");
        then.status(418);
    });

    let client = Client::builder(server.base_url())
        .error_on_unexpected_status(false)
        .build()?;

    let parsed = api::tag::list_tags(&client, &ListTagsQuery::default()).await?;
    assert!(parsed.is_none());

    let detailed = api::tag::list_tags_detailed(&client, &ListTagsQuery::default()).await?;
    assert_eq!(detailed.status.as_u16(), 418);
    assert!(detailed.parsed.is_none());
    Ok(())
}

#[tokio::test]
async fn test_create_floor_sends_token_and_body() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/holes/8/floors")
            .header("authorization", "Bearer secret-token")
            .json_body(json!({"content": "回复内容", "reply_to": 1000}));
        then.status(201)
            .header("Content-Type", "application/json")
            .json_body(json!({"floor_id": 1043, "content": "回复内容"}));
    });

    let client = Client::authenticated(server.base_url(), "secret-token")?;
    let body = FloorCreate {
        content: "回复内容".to_string(),
        reply_to: Some(1000),
        ..Default::default()
    };
    let floor = api::floor::create_floor(&client, 8, &body).await?.unwrap();

    mock.assert();
    assert_eq!(floor.floor_id, Some(1043));
    Ok(())
}

#[tokio::test]
async fn test_delete_division_no_content() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(DELETE)
            .path("/divisions/3")
            .json_body(json!({"to": 1}));
        then.status(204);
    });

    let client = client_for(&server);
    let body = DivisionDelete {
        to: Some(1),
        ..Default::default()
    };
    let parsed = api::division::delete_division(&client, 3, &body).await?;

    mock.assert();
    assert_eq!(parsed, Some(()));
    Ok(())
}

#[tokio::test]
async fn test_search_floors_uses_query_string() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/floors/search")
            .query_param("accurate", "false")
            .query_param("offset", "0")
            .query_param("search", "考试")
            .query_param("size", "10");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!([{"floor_id": 12, "content": "考试相关"}]));
    });

    let client = client_for(&server);
    let floors = api::search::search_floors(&client, &SearchFloorsQuery::new("考试"))
        .await?
        .unwrap();

    mock.assert();
    assert_eq!(floors.len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_add_report_no_content_and_bad_request() -> Result<()> {
    let server = MockServer::start();
    let ok_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/reports")
            .json_body(json!({"floor_id": 77, "reason": "spam"}));
        then.status(204);
    });

    let client = client_for(&server);
    let body = ReportAdd {
        floor_id: 77,
        reason: "spam".to_string(),
        ..Default::default()
    };
    assert_eq!(api::report::add_report(&client, &body).await?, Some(()));
    ok_mock.assert();

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(DELETE).path("/reports/5");
        then.status(400)
            .header("Content-Type", "application/json")
            .json_body(json!({"code": 400, "message": "report has been dealt"}));
    });

    let client = client_for(&server);
    let deal = ReportDeal {
        result: "ok".to_string(),
        ..Default::default()
    };
    let err = api::report::deal_report(&client, 5, &deal)
        .await
        .unwrap_err();
    match err {
        ApiError::Api {
            message, detail, ..
        } => {
            assert_eq!(message, "report has been dealt");
            assert_eq!(detail.code, Some(400));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn test_detailed_response_exposes_raw_exchange() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/divisions");
        then.status(200)
            .header("Content-Type", "application/json")
            .header("X-Request-Id", "abc123")
            .json_body(json!([{"division_id": 1, "name": "树洞"}]));
    });

    let client = client_for(&server);
    let response = api::division::list_divisions_detailed(&client).await?;

    assert_eq!(response.status.as_u16(), 200);
    assert_eq!(
        response.headers.get("X-Request-Id").unwrap().to_str()?,
        "abc123"
    );
    assert!(!response.content.is_empty());
    assert_eq!(response.parsed.unwrap()[0].division_id, Some(1));
    Ok(())
}

#[tokio::test]
async fn test_malformed_success_body_is_serialization_error() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/users/me");
        then.status(200)
            .header("Content-Type", "application/json")
            .body("not json at all");
    });

    let client = client_for(&server);
    let err = api::user::get_current_user(&client).await.unwrap_err();
    assert!(matches!(err, ApiError::Serialization(_)));
    Ok(())
}
