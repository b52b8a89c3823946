use std::env;

use chrono_tz::Tz;

pub const DEFAULT_LLM_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_LLM_MODEL: &str = "llama3-8b-8192";
pub const DEFAULT_LLM_TEMPERATURE: f32 = 0.2;
pub const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";

/// Runtime configuration read from the Lambda environment.
///
/// Credentials are optional here: a missing key only fails the gateway call
/// that needs it, so `/mail` keeps working without a provider key and vice versa.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub llm_api_key: Option<String>,
    pub llm_base_url: String,
    pub llm_model: String,
    pub llm_temperature: f32,
    pub smtp_user: Option<String>,
    pub smtp_pass: Option<String>,
    pub smtp_host: String,
    pub display_timezone: Tz,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            llm_api_key: None,
            llm_base_url: DEFAULT_LLM_BASE_URL.to_string(),
            llm_model: DEFAULT_LLM_MODEL.to_string(),
            llm_temperature: DEFAULT_LLM_TEMPERATURE,
            smtp_user: None,
            smtp_pass: None,
            smtp_host: DEFAULT_SMTP_HOST.to_string(),
            display_timezone: Tz::UTC,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let llm_temperature = match get("LLM_TEMPERATURE") {
            Some(raw) => raw
                .trim()
                .parse::<f32>()
                .map_err(|e| format!("LLM_TEMPERATURE: {}", e))?,
            None => defaults.llm_temperature,
        };

        let display_timezone = match get("DISPLAY_TIMEZONE") {
            Some(raw) => raw
                .trim()
                .parse::<Tz>()
                .map_err(|e| format!("DISPLAY_TIMEZONE: {}", e))?,
            None => defaults.display_timezone,
        };

        Ok(Self {
            llm_api_key: get("GROQ_API_KEY").or_else(|| get("QROQ_API_KEY")),
            llm_base_url: get("LLM_BASE_URL")
                .map(|u| u.trim().trim_end_matches('/').to_string())
                .unwrap_or(defaults.llm_base_url),
            llm_model: get("LLM_MODEL").unwrap_or(defaults.llm_model),
            llm_temperature,
            smtp_user: get("GMAIL_USER"),
            smtp_pass: get("GMAIL_PASS"),
            smtp_host: get("SMTP_HOST").unwrap_or(defaults.smtp_host),
            display_timezone,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert!(config.llm_api_key.is_none());
        assert!(config.smtp_user.is_none());
        assert_eq!(config.llm_base_url, DEFAULT_LLM_BASE_URL);
        assert_eq!(config.llm_model, DEFAULT_LLM_MODEL);
        assert_eq!(config.smtp_host, DEFAULT_SMTP_HOST);
        assert_eq!(config.display_timezone, Tz::UTC);
    }

    #[test]
    fn legacy_key_name_is_accepted() {
        let config = AppConfig::from_lookup(lookup(&[("QROQ_API_KEY", "k-legacy")])).unwrap();
        assert_eq!(config.llm_api_key.as_deref(), Some("k-legacy"));

        let config = AppConfig::from_lookup(lookup(&[
            ("QROQ_API_KEY", "k-legacy"),
            ("GROQ_API_KEY", "k-new"),
        ]))
        .unwrap();
        assert_eq!(config.llm_api_key.as_deref(), Some("k-new"));
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config = AppConfig::from_lookup(lookup(&[("GMAIL_USER", "   ")])).unwrap();
        assert!(config.smtp_user.is_none());
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let config =
            AppConfig::from_lookup(lookup(&[("LLM_BASE_URL", "http://localhost:8080/v1/")]))
                .unwrap();
        assert_eq!(config.llm_base_url, "http://localhost:8080/v1");
    }

    #[test]
    fn bad_timezone_is_rejected() {
        let err = AppConfig::from_lookup(lookup(&[("DISPLAY_TIMEZONE", "Mars/Olympus")]))
            .unwrap_err();
        assert!(err.starts_with("DISPLAY_TIMEZONE"));
    }

    #[test]
    fn bad_temperature_is_rejected() {
        let err =
            AppConfig::from_lookup(lookup(&[("LLM_TEMPERATURE", "warm")])).unwrap_err();
        assert!(err.starts_with("LLM_TEMPERATURE"));
    }
}
