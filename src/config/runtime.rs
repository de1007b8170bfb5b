//! Runtime configuration: the API base URL, resolved once at startup.
//!
//! Precedence: CLI flag, then `RUNWAY_API_URL`, then the runtime-injected value
//! (runtime script before config file), then `DEFAULT_API_URL`. Empty values
//! are treated as unset.

use serde::{Deserialize, Serialize};

use super::ConfigError;

pub const DEFAULT_API_URL: &str = "http://localhost:3000";
pub const API_URL_ENV: &str = "RUNWAY_API_URL";

const SCRIPT_GLOBAL: &str = "__RUNTIME_CONFIG__";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConfigSource {
    Cli,
    Environment,
    RuntimeScript,
    ConfigFile,
    Default,
}

impl ConfigSource {
    pub fn title(&self) -> &'static str {
        match self {
            ConfigSource::Cli => "cli flag",
            ConfigSource::Environment => API_URL_ENV,
            ConfigSource::RuntimeScript => "runtime script",
            ConfigSource::ConfigFile => "config file",
            ConfigSource::Default => "default",
        }
    }
}

/// Configuration handed to the app at startup. Never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuntimeConfig {
    pub api_url: String,
    pub source: ConfigSource,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            source: ConfigSource::Default,
        }
    }
}

/// Candidate values, one per source
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigInputs<'a> {
    pub cli: Option<&'a str>,
    pub env: Option<&'a str>,
    pub script: Option<&'a str>,
    pub file: Option<&'a str>,
}

pub fn resolve(inputs: ConfigInputs<'_>) -> RuntimeConfig {
    let candidates = [
        (inputs.cli, ConfigSource::Cli),
        (inputs.env, ConfigSource::Environment),
        (inputs.script, ConfigSource::RuntimeScript),
        (inputs.file, ConfigSource::ConfigFile),
    ];
    candidates
        .into_iter()
        .find_map(|(value, source)| {
            let value = value.map(str::trim).filter(|v| !v.is_empty())?;
            Some(RuntimeConfig {
                api_url: value.to_string(),
                source,
            })
        })
        .unwrap_or_default()
}

#[derive(Debug, Serialize, Deserialize)]
struct ScriptPayload {
    #[serde(rename = "apiUrl", default, skip_serializing_if = "Option::is_none")]
    api_url: Option<String>,
}

/// Extract `apiUrl` from `window.__RUNTIME_CONFIG__ = {...};`
pub fn parse_runtime_script(source: &str) -> Result<Option<String>, ConfigError> {
    let Some(start) = source.find(SCRIPT_GLOBAL) else {
        return Err(ConfigError::Script(format!("missing {SCRIPT_GLOBAL} assignment")));
    };
    let rest = &source[start + SCRIPT_GLOBAL.len()..];
    let Some(rest) = rest.trim_start().strip_prefix('=') else {
        return Err(ConfigError::Script(format!("expected '=' after {SCRIPT_GLOBAL}")));
    };
    let body = rest.trim().trim_end_matches(';').trim_end();
    let payload: ScriptPayload = serde_json::from_str(body)?;
    Ok(payload.api_url)
}

/// Render the script body the deployment writes next to the static assets
pub fn render_runtime_script(api_url: &str) -> Result<String, ConfigError> {
    let payload = serde_json::to_string(&ScriptPayload {
        api_url: Some(api_url.to_string()),
    })?;
    Ok(format!("window.{SCRIPT_GLOBAL} = {payload};"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = resolve(ConfigInputs::default());
        assert_eq!(config.api_url, "http://localhost:3000");
        assert_eq!(config.source, ConfigSource::Default);
    }

    #[test]
    fn test_env_beats_runtime_value() {
        let config = resolve(ConfigInputs {
            env: Some("http://dev.local:4000"),
            script: Some("https://prod.example/prod/"),
            file: Some("https://file.example/"),
            ..Default::default()
        });
        assert_eq!(config.api_url, "http://dev.local:4000");
        assert_eq!(config.source, ConfigSource::Environment);
    }

    #[test]
    fn test_runtime_value_used_without_env() {
        let config = resolve(ConfigInputs {
            script: Some("https://prod.example/prod/"),
            file: Some("https://file.example/"),
            ..Default::default()
        });
        assert_eq!(config.api_url, "https://prod.example/prod/");
        assert_eq!(config.source, ConfigSource::RuntimeScript);

        let config = resolve(ConfigInputs {
            file: Some("https://file.example/"),
            ..Default::default()
        });
        assert_eq!(config.source, ConfigSource::ConfigFile);
    }

    #[test]
    fn test_cli_beats_everything() {
        let config = resolve(ConfigInputs {
            cli: Some("http://cli:1"),
            env: Some("http://env:2"),
            ..Default::default()
        });
        assert_eq!(config.api_url, "http://cli:1");
        assert_eq!(config.source, ConfigSource::Cli);
    }

    #[test]
    fn test_blank_values_fall_through() {
        let config = resolve(ConfigInputs {
            env: Some(""),
            script: Some("   "),
            ..Default::default()
        });
        assert_eq!(config, RuntimeConfig::default());
    }

    #[test]
    fn test_script_round_trip() {
        let script = render_runtime_script("https://x.execute-api.test/prod/").unwrap();
        assert_eq!(
            script,
            "window.__RUNTIME_CONFIG__ = {\"apiUrl\":\"https://x.execute-api.test/prod/\"};"
        );
        assert_eq!(
            parse_runtime_script(&script).unwrap().as_deref(),
            Some("https://x.execute-api.test/prod/")
        );
    }

    #[test]
    fn test_script_without_api_url() {
        assert_eq!(
            parse_runtime_script("window.__RUNTIME_CONFIG__ = {};").unwrap(),
            None
        );
    }

    #[test]
    fn test_script_errors() {
        assert!(matches!(
            parse_runtime_script("var x = 1;"),
            Err(ConfigError::Script(_))
        ));
        assert!(matches!(
            parse_runtime_script("window.__RUNTIME_CONFIG__ {}"),
            Err(ConfigError::Script(_))
        ));
        assert!(matches!(
            parse_runtime_script("window.__RUNTIME_CONFIG__ = {apiUrl: 1};"),
            Err(ConfigError::Json(_))
        ));
    }
}
