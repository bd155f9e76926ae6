use async_trait::async_trait;
use serde_json::Value;
use crate::error::Error;
use super::reqwest::ReqwestClient;

/// Request client.
#[async_trait]
pub trait Client: Send + Sync {
    /// POST `payload` as JSON and receive the JSON response body.
    ///
    /// Non-success status codes and empty bodies are errors.
    async fn make_json_request(&self, url: &str, payload: Value, headers: &[(&str, &str)]) -> Result<Value, Error>;
}

/// Create reqwest client.
pub fn get_reqwest_client() -> Result<Box<dyn Client>, Error> {
    Ok(Box::new(ReqwestClient::new()))
}
