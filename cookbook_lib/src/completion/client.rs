use std::time::Instant;
use serde_json::Value;
use tracing::{debug, error, info};
use crate::config::{Config, Params, WireShape};
use crate::context::Context;
use crate::error::Error;
use crate::extract::{Extractor, FieldMap};
use crate::request::Client;
use super::format::{get_wire_format, WireFormat};
use super::util;

/// Sends contexts to the inference API and returns the reply text.
///
/// Any failure (transport, status, body shape) is logged and comes back as
/// `None` from [`CompletionClient::complete`]; [`CompletionClient::try_complete`]
/// keeps the cause.
pub struct CompletionClient {
    config: Config,
    client: Box<dyn Client>,
    format: Box<dyn WireFormat>,
}

impl CompletionClient {

    /// Create client speaking `shape`.
    pub fn new(config: Config, client: Box<dyn Client>, shape: WireShape) -> Self {
        CompletionClient {
            config,
            client,
            format: get_wire_format(shape),
        }
    }

    /// Wire shape in use.
    pub fn wire_shape(&self) -> WireShape {
        self.format.shape()
    }

    /// Full endpoint URL.
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.config.base_url, self.format.path())
    }

    /// Reply text, or the reason there is none.
    pub async fn try_complete(&self, context: &Context, params: &Params) -> Result<String, Error> {
        let url = self.endpoint();
        let payload = self.format.payload(context, params);

        let token = format!("Bearer {}", self.config.api_key);
        let headers = &[
            ("Authorization", token.as_ref()),
            ("Content-Type", "application/json"),
        ];

        info!("Sending {} turns to model '{}' ({} api)...", context.len(), params.model, self.wire_shape());

        let start = Instant::now();
        let response = self.client.make_json_request(&url, payload, headers).await?;
        let duration = start.elapsed().as_secs_f64() * 1000.0;

        info!("Inference API request took {duration:.2} ms (model={})", params.model);

        util::check_for_empty(&response)?;
        util::check_for_error(&response)?;

        self.format.reply_text(&response)
    }

    /// Reply text, or `None` on any failure.
    pub async fn complete(&self, context: &Context, params: &Params) -> Option<String> {
        match self.try_complete(context, params).await {
            Ok(text) => Some(text),
            Err(err) => {
                error!("Completion failed: {err}");
                None
            }
        }
    }

    /// Complete and extract `fields` from the reply.
    ///
    /// Every field is present in the result; when the completion is absent
    /// all of them hold their empty value.
    pub async fn respond(&self, context: &Context, extractor: &Extractor, fields: &[&str], params: &Params) -> FieldMap {
        let text = self.complete(context, params).await.unwrap_or_default();
        let result = extractor.extract(&text, fields);
        debug!("Extracted fields: {:?}", result);
        result
    }

    /// Complete and parse the reply as a JSON object.
    ///
    /// Markdown code fences around the object are ignored.
    pub async fn complete_json(&self, context: &Context, params: &Params) -> Option<Value> {
        let text = self.complete(context, params).await?;

        match parse_json_object(&text) {
            Ok(value) => Some(value),
            Err(err) => {
                error!("Failed to decode JSON reply: {err}");
                None
            }
        }
    }
}

fn parse_json_object(text: &str) -> Result<Value, Error> {
    let mut body = text.trim();
    if let Some(inner) = body.strip_prefix("```") {
        let inner = inner.strip_prefix("json").unwrap_or(inner);
        body = inner.strip_suffix("```").unwrap_or(inner).trim();
    }

    let value: Value = serde_json::from_str(body)?;
    if !value.is_object() {
        return Err(Error::ResponseError("reply is not a JSON object."));
    }
    Ok(value)
}
