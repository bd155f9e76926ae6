use std::fmt::Display;
use tracing::debug;
use crate::error::Error;

/// Environment variable holding the API base URL.
pub const BASE_URL_VAR: &str = "BASE_URL";

/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "INFLECTION_API_KEY";

/// Model used when none is specified.
pub const DEFAULT_MODEL: &str = "inflection_3_pi";

/// Request/response JSON layouts supported by the inference API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireShape {
    /// `config`/`context` request, `text` reply, `type`/`text` turns.
    Legacy,
    /// Chat-completions request, `choices[0].message.content` reply, `role`/`content` turns.
    Chat,
}

impl TryFrom<&str> for WireShape {
    type Error = Error;

    fn try_from(val: &str) -> Result<Self, Self::Error> {
        match val {
            "legacy" => Ok(WireShape::Legacy),
            "chat" | "openai" => Ok(WireShape::Chat),
            _ => Err(Error::UnknownWireShape(val.to_owned())),
        }
    }
}

impl Display for WireShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            WireShape::Legacy => "legacy",
            WireShape::Chat => "chat",
        })
    }
}

/// Endpoint and credential, fixed for the lifetime of a client.
#[derive(Clone, Debug)]
pub struct Config {
    /// API base URL, without the endpoint path.
    pub base_url: String,
    /// API key sent as a bearer token.
    pub api_key: String,
}

impl Config {

    /// Create config from base URL and API key.
    pub fn new(base_url: String, api_key: String) -> Self {
        Config {
            base_url,
            api_key,
        }
    }

    /// Read `BASE_URL` and `INFLECTION_API_KEY` from the process environment.
    ///
    /// Missing values are left empty; the first request fails instead.
    pub fn from_env() -> Self {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Build config using `lookup` to resolve variable names.
    pub fn from_vars<F>(lookup: F) -> Self
        where F: Fn(&str) -> Option<String>
    {
        let base_url = lookup(BASE_URL_VAR).unwrap_or_default();
        let api_key = lookup(API_KEY_VAR).unwrap_or_default();

        if base_url.is_empty() {
            debug!("{BASE_URL_VAR} is not set");
        }
        if api_key.is_empty() {
            debug!("{API_KEY_VAR} is not set");
        }

        Config::new(base_url, api_key)
    }
}

/// Per-call model parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct Params {
    /// Model (config) name.
    pub model: String,
    /// Level of randomization when choosing tokens.
    pub temperature: f64,
    /// Only the tokens comprising the top_p probability mass will be considered.
    pub top_p: f64,
    /// Let the model search the web.
    pub web_search: bool,
}

impl Params {
    /// Default parameters for `model`.
    pub fn new(model: String) -> Self {
        Params {
            model,
            ..Default::default()
        }
    }
}

impl Default for Params {
    fn default() -> Self {
        Params {
            model: DEFAULT_MODEL.to_owned(),
            temperature: 0.0,
            top_p: 1.0,
            web_search: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape_try_from() {
        assert_eq!(WireShape::try_from("legacy").expect("legacy"), WireShape::Legacy);
        assert_eq!(WireShape::try_from("chat").expect("chat"), WireShape::Chat);
        assert_eq!(WireShape::try_from("openai").expect("openai alias"), WireShape::Chat);
        assert!(matches!(WireShape::try_from("grpc"), Err(Error::UnknownWireShape(s)) if s == "grpc"));
        assert_eq!(WireShape::Chat.to_string(), "chat");
    }

    #[test]
    fn test_config_from_vars() {
        let config = Config::from_vars(|name| match name {
            BASE_URL_VAR => Some("https://api.example.com".to_owned()),
            API_KEY_VAR => Some("secret".to_owned()),
            _ => None,
        });
        assert_eq!(config.base_url, "https://api.example.com");
        assert_eq!(config.api_key, "secret");

        let config = Config::from_vars(|_| None);
        assert_eq!(config.base_url, "");
        assert_eq!(config.api_key, "");
    }

    #[test]
    fn test_params_default() {
        let params = Params::new("inflection_3_productivity".into());
        assert_eq!(params.model, "inflection_3_productivity");
        assert_eq!(params.temperature, 0.0);
        assert_eq!(params.top_p, 1.0);
        assert!(!params.web_search);
        assert_eq!(Params::default().model, DEFAULT_MODEL);
    }
}
