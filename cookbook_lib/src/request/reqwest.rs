use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde_json::Value;
use crate::error::Error;
use crate::request::client::Client;

pub struct ReqwestClient {
    client: HttpClient,
}

impl ReqwestClient {

    pub fn new() -> Self {
        ReqwestClient {
            client: HttpClient::new(),
        }
    }
}

#[async_trait]
impl Client for ReqwestClient {

    async fn make_json_request(&self, url: &str, payload: Value, headers: &[(&str, &str)]) -> Result<Value, Error> {

        let mut request = self.client
            .post(url)
            .json(&payload);

        for (k, v) in headers {
            request = request.header(*k, *v);
        }

        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::HttpStatus(status.as_u16()));
        }

        let body = response.bytes().await?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(Error::EmptyBody);
        }

        let ret = serde_json::from_slice(&body)?;
        Ok(ret)
    }
}
