use std::io::Write;

use anyhow::Result;
use httpmock::prelude::*;
use serde_json::json;
use tempfile::NamedTempFile;
use treehole_client::{api, Client, ClientConfig};

#[test]
fn test_config_from_file() -> Result<()> {
    let mut temp_file = NamedTempFile::new()?;

    let toml_content = r#"
[api]
base_url = "https://hole.example.com/api"
token = "file-token"
timeout_seconds = 5
user_agent = "config-test/1.0"
"#;

    temp_file.write_all(toml_content.as_bytes())?;

    let config = ClientConfig::from_file(temp_file.path())?;
    assert_eq!(config.api.base_url, "https://hole.example.com/api");
    assert_eq!(config.api.token.as_deref(), Some("file-token"));
    assert_eq!(config.api.timeout_seconds, Some(5));

    // The config must be enough to build a client.
    Client::from_config(&config)?;
    Ok(())
}

#[test]
fn test_config_env_substitution_reaches_client() -> Result<()> {
    std::env::set_var("TREEHOLE_TEST_TOKEN", "env-token");

    let toml_content = r#"
[api]
base_url = "https://hole.example.com"
token = "${TREEHOLE_TEST_TOKEN}"
"#;

    let config = ClientConfig::from_toml_str(toml_content)?;
    assert_eq!(config.api.token.as_deref(), Some("env-token"));

    std::env::remove_var("TREEHOLE_TEST_TOKEN");
    Ok(())
}

#[tokio::test]
async fn test_client_from_config_against_mock_server() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/users/me")
            .header("authorization", "Bearer config-token");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({"user_id": 1, "nickname": "from_config"}));
    });

    let toml_content = format!(
        r#"
[api]
base_url = "{}"
token = "config-token"
error_on_unexpected_status = true
"#,
        server.base_url()
    );

    let config = ClientConfig::from_toml_str(&toml_content)?;
    let client = Client::from_config(&config)?;
    let user = api::user::get_current_user(&client).await?.unwrap();

    mock.assert();
    assert_eq!(user.nickname.as_deref(), Some("from_config"));
    Ok(())
}

#[test]
fn test_invalid_config_is_rejected_at_build() {
    let toml_content = r#"
[api]
base_url = "https://hole.example.com"
token = "has whitespace"
"#;

    let config = ClientConfig::from_toml_str(toml_content).unwrap();
    assert!(Client::from_config(&config).is_err());
}
