use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::utils::error::{ApiError, Result};
use crate::utils::validation;

/// Client configuration loaded from a TOML file.
///
/// ```toml
/// [api]
/// base_url = "https://hole.example.com/api"
/// token = "${TREEHOLE_TOKEN}"
/// timeout_seconds = 30
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    pub api: ApiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub token: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub connect_timeout_seconds: Option<u64>,
    pub user_agent: Option<String>,
    pub error_on_unexpected_status: Option<bool>,
}

impl ClientConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ApiError::Io)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| ApiError::ConfigError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace `${VAR_NAME}` occurrences with environment values.
    /// Unresolved variables are left verbatim.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    pub fn validate(&self) -> Result<()> {
        validation::validate_url("api.base_url", &self.api.base_url)?;

        if let Some(token) = &self.api.token {
            validation::validate_non_empty_string("api.token", token)?;
            validation::validate_no_whitespace("api.token", token)?;
        }

        if let Some(timeout) = self.api.timeout_seconds {
            validation::validate_positive_number("api.timeout_seconds", timeout, 1)?;
        }

        if let Some(timeout) = self.api.connect_timeout_seconds {
            validation::validate_positive_number("api.connect_timeout_seconds", timeout, 1)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_config() {
        let toml_content = r#"
[api]
base_url = "https://hole.example.com/api"
timeout_seconds = 10
"#;

        let config = ClientConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.api.base_url, "https://hole.example.com/api");
        assert_eq!(config.api.timeout_seconds, Some(10));
        assert!(config.api.token.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TEST_TREEHOLE_BASE", "https://test.hole.com");

        let toml_content = r#"
[api]
base_url = "${TEST_TREEHOLE_BASE}"
"#;

        let config = ClientConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.api.base_url, "https://test.hole.com");

        std::env::remove_var("TEST_TREEHOLE_BASE");
    }

    #[test]
    fn test_unresolved_env_var_left_verbatim() {
        let toml_content = r#"
[api]
base_url = "https://hole.example.com"
token = "${DEFINITELY_NOT_SET_ANYWHERE}"
"#;

        let config = ClientConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.api.token.as_deref(),
            Some("${DEFINITELY_NOT_SET_ANYWHERE}")
        );
    }

    #[test]
    fn test_validate_rejects_bad_scheme() {
        let toml_content = r#"
[api]
base_url = "ftp://hole.example.com"
"#;

        let config = ClientConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let toml_content = r#"
[api]
base_url = "https://hole.example.com"
timeout_seconds = 0
"#;

        let config = ClientConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }
}
