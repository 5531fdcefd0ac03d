// MIT License - Copyright (c) 2026 prosegur-smart contributors
// Prosegur Smart client

pub mod smart;

pub use reqwest::Method;
use serde_json::Value;

use crate::error::Result;

/// An authenticated session able to issue requests against the Smart API.
///
/// [`smart::SmartAuth`] talks to the real service; tests substitute an
/// in-memory double. Paths are relative to the web-service root
/// (e.g. `/installation`).
#[allow(async_fn_in_trait)]
pub trait Auth {
    type Response: Response;

    /// Issue `method path`, optionally with a JSON body.
    async fn request(&self, method: Method, path: &str, json: Option<&Value>)
        -> Result<Self::Response>;
}

/// The response handed back by [`Auth::request`].
#[allow(async_fn_in_trait)]
pub trait Response {
    /// HTTP status code.
    fn status(&self) -> u16;

    /// Consume the response and return the body as text.
    async fn text(self) -> Result<String>;

    /// Consume the response and parse the body as JSON.
    async fn json(self) -> Result<Value>;
}
