// In-memory Auth double shared by the integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use prosegur_smart::{Auth, Method, ProsegurError, Response, Result};
use serde_json::{json, Value};

/// A request as seen by [`MockAuth`].
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub method: Method,
    pub path: String,
    pub json: Option<Value>,
}

#[derive(Debug)]
pub struct MockResponse {
    pub status: u16,
    pub body: String,
}

impl MockResponse {
    pub fn json(status: u16, body: Value) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }

    pub fn text(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }
}

impl Response for MockResponse {
    fn status(&self) -> u16 {
        self.status
    }

    async fn text(self) -> Result<String> {
        Ok(self.body)
    }

    async fn json(self) -> Result<Value> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// Replays queued responses in order and records every call.
#[derive(Default)]
pub struct MockAuth {
    responses: Mutex<VecDeque<Result<MockResponse>>>,
    calls: Mutex<Vec<Call>>,
}

impl MockAuth {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, response: MockResponse) -> Self {
        self.responses.lock().unwrap().push_back(Ok(response));
        self
    }

    pub fn fail(self, error: ProsegurError) -> Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl Auth for MockAuth {
    type Response = MockResponse;

    async fn request(&self, method: Method, path: &str, json: Option<&Value>) -> Result<MockResponse> {
        self.calls.lock().unwrap().push(Call {
            method,
            path: path.to_string(),
            json: json.cloned(),
        });
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("MockAuth: no response queued")
    }
}

/// Body of a successful `GET /installation` with one installation in `status`.
pub fn installation_list(status: &str) -> Value {
    json!({
        "result": { "code": 200, "message": "OK" },
        "data": [
            { "installationId": "I1", "contractId": "C1", "status": status, "description": "Home" }
        ]
    })
}
