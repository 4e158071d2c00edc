use std::path::Path;

use color_eyre::eyre::{eyre, Result};
use serde::Deserialize;

const CONFIG_FILE: &str = "forgeline.toml";

#[derive(Debug, Deserialize)]
struct RawConfig {
    rpc_url: String,
    private_key: String,
}

/// Deployment endpoint and signing credential, loaded from forgeline.toml
/// with environment references resolved. The credential is never compiled
/// into the tool.
#[derive(Debug, Clone)]
pub struct Config {
    pub rpc_url: String,
    pub private_key: String,
    /// Whether the private key came from a `${VAR}` environment reference
    /// rather than a literal in the config file.
    pub key_from_env: bool,
}

impl Config {
    /// Load configuration from forgeline.toml in the current directory
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|_| {
            eyre!(
                "Could not find {}. Run `forgeline init` to create one.",
                path.display()
            )
        })?;
        Self::parse(&content)
    }

    /// Parse config text and resolve environment references
    fn parse(content: &str) -> Result<Self> {
        let raw: RawConfig = toml::from_str(content)?;
        let key_from_env = is_env_ref(&raw.private_key);

        Ok(Config {
            rpc_url: resolve_env_var(&raw.rpc_url)?,
            private_key: resolve_env_var(&raw.private_key)?,
            key_from_env,
        })
    }
}

fn is_env_ref(value: &str) -> bool {
    value.starts_with("${") && value.ends_with('}')
}

/// Resolve environment variable references in a string
/// Supports ${VAR_NAME} syntax
fn resolve_env_var(value: &str) -> Result<String> {
    if is_env_ref(value) {
        let var_name = &value[2..value.len() - 1];
        std::env::var(var_name).map_err(|_| eyre!("Environment variable '{}' not set", var_name))
    } else {
        Ok(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_literal_values() {
        let config = Config::parse(
            r#"
rpc_url = "http://0.0.0.0:8546"
private_key = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80"
"#,
        )
        .unwrap();

        assert_eq!(config.rpc_url, "http://0.0.0.0:8546");
        assert!(config.private_key.starts_with("0xac0974"));
        assert!(!config.key_from_env);
    }

    #[test]
    fn test_parse_resolves_env_reference() {
        std::env::set_var("FORGELINE_TEST_KEY", "0xdeadbeef");

        let config = Config::parse(
            r#"
rpc_url = "http://localhost:8545"
private_key = "${FORGELINE_TEST_KEY}"
"#,
        )
        .unwrap();

        assert_eq!(config.private_key, "0xdeadbeef");
        assert!(config.key_from_env);

        std::env::remove_var("FORGELINE_TEST_KEY");
    }

    #[test]
    fn test_parse_fails_on_unset_env_reference() {
        let result = Config::parse(
            r#"
rpc_url = "${FORGELINE_UNSET_VAR_99999}"
private_key = "0xaa"
"#,
        );

        assert!(result.is_err());
    }

    #[test]
    fn test_parse_fails_on_missing_field() {
        assert!(Config::parse(r#"rpc_url = "http://localhost:8545""#).is_err());
    }

    #[test]
    fn test_load_fails_on_missing_file() {
        assert!(Config::load_from(Path::new("/nonexistent/forgeline.toml")).is_err());
    }

    #[test]
    fn test_resolve_env_var_literal() {
        let result = resolve_env_var("https://literal.url").unwrap();
        assert_eq!(result, "https://literal.url");
    }
}
