use cookbook_lib::Config as ApiConfig;
use cookbook_lib::{Params, WireShape, DEFAULT_MODEL};
use cookbook_lib::context::DEFAULT_USER_LABEL;
use tracing::warn;

use crate::{error::AppError, options::Options};

/// What the app does with the user's message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Intent-routed answer.
    Ask,
    /// Raw completion for a system prompt.
    Complete,
    /// Tagged fields from a completion.
    Extract,
    /// JSON object verdict from a completion.
    Judge,
}

impl TryFrom<&str> for Mode {
    type Error = AppError;

    fn try_from(val: &str) -> Result<Self, Self::Error> {
        match val {
            "ask" => Ok(Mode::Ask),
            "complete" => Ok(Mode::Complete),
            "extract" => Ok(Mode::Extract),
            "judge" => Ok(Mode::Judge),
            _ => Err(AppError::ConfigParseError("unknown mode")),
        }
    }
}

/// App config
#[derive(Clone, Debug)]
pub struct Config {
    /// Endpoint and credentials.
    pub api: ApiConfig,
    /// Model parameters.
    pub params: Params,
    /// Request/response format.
    pub wire_shape: WireShape,
    /// Mode
    pub mode: Mode,
    /// Message
    pub message: Option<String>,
    /// System prompt for complete and extract.
    pub system: String,
    /// Label prefixed to the user message.
    pub user_label: String,
    /// Fields extracted as text.
    pub fields: Vec<String>,
    /// Fields extracted as lists.
    pub list_fields: Vec<String>,
    /// Few-shot `(input, output)` pairs.
    pub examples: Vec<(String, String)>,
}

impl TryFrom<Options> for Config {
    type Error = AppError;

    fn try_from(options: Options) -> Result<Self, AppError> {
        let wire_shape = match options.wire_shape.as_deref() {
            Some(s) => WireShape::try_from(s)?,
            None => WireShape::Legacy,
        };

        let mode = match options.mode.as_deref() {
            Some(s) => Mode::try_from(s)?,
            None => Mode::Ask,
        };

        if options.base_url.is_none() {
            warn!("Base URL is not set, requests will fail");
        }
        if options.api_key.is_none() {
            warn!("API key is not set, requests will fail");
        }

        let api = ApiConfig::new(
            options.base_url.unwrap_or_default(),
            options.api_key.unwrap_or_default(),
        );

        let mut params = Params::new(options.model.unwrap_or_else(|| DEFAULT_MODEL.to_owned()));
        if let Some(temperature) = options.temperature {
            params.temperature = temperature;
        }
        if let Some(top_p) = options.top_p {
            params.top_p = top_p;
        }
        if let Some(web_search) = options.web_search {
            params.web_search = web_search;
        }

        Ok(Config {
            api,
            params,
            wire_shape,
            mode,
            message: options.message,
            system: options.system.unwrap_or_default(),
            user_label: options.user_label.unwrap_or_else(|| DEFAULT_USER_LABEL.to_owned()),
            fields: options.fields,
            list_fields: options.list_fields,
            examples: options.examples,
        })
    }
}
