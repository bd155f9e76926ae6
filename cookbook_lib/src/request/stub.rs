//! Only for tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use serde_json::Value;
use crate::error::Error;
use crate::request::client::Client;

/// Scripted outcome of one request.
pub enum StubReply {
    /// 2xx with JSON body.
    Body(Value),
    /// Non-success status.
    Status(u16),
    /// 2xx with nothing in it.
    Empty,
    /// Connection never established.
    Unreachable,
}

/// Requests seen by the stub: url and payload.
pub type Seen = Arc<Mutex<Vec<(String, Value)>>>;

/// Client for tests.
pub struct StubClient {
    expected_headers: Vec<(String, String)>,
    expected_payload: Option<Value>,
    replies: Mutex<VecDeque<StubReply>>,
    seen: Seen,
}

impl StubClient {

    /// Client that checks headers and payload of a single request.
    pub fn new(expected_headers: Vec<(String, String)>, expected_payload: Value, reply: StubReply) -> Self {
        StubClient {
            expected_headers,
            expected_payload: Some(expected_payload),
            replies: Mutex::new(VecDeque::from([reply])),
            seen: Seen::default(),
        }
    }

    /// Client that answers requests with `replies` in order, without checks.
    pub fn scripted(replies: Vec<StubReply>) -> Self {
        StubClient {
            expected_headers: vec![],
            expected_payload: None,
            replies: Mutex::new(replies.into()),
            seen: Seen::default(),
        }
    }

    /// Handle to the recorded requests.
    pub fn seen(&self) -> Seen {
        self.seen.clone()
    }
}

#[async_trait]
impl Client for StubClient {

    async fn make_json_request(&self, url: &str, payload: Value, headers: &[(&str, &str)]) -> Result<Value, Error> {
        for (expected, actual) in self.expected_headers.iter().zip(headers.iter()) {
            assert_eq!(expected.0, actual.0, "headers keys");
            assert_eq!(expected.1, actual.1, "headers values");
        }

        if let Some(expected_payload) = &self.expected_payload {
            assert_eq!(&payload, expected_payload);
        }

        self.seen.lock().unwrap().push((url.to_owned(), payload));

        match self.replies.lock().unwrap().pop_front().expect("unexpected request") {
            StubReply::Body(body) => Ok(body),
            StubReply::Status(code) => Err(Error::HttpStatus(code)),
            StubReply::Empty => Err(Error::EmptyBody),
            StubReply::Unreachable => Err(Error::Error("connection refused".to_owned())),
        }
    }
}
