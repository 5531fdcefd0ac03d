// MIT License - Copyright (c) 2026 prosegur-smart contributors
// Prosegur Smart client

use reqwest::header::{ACCEPT, CONTENT_TYPE, ORIGIN, REFERER};
use reqwest::{Method, RequestBuilder};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

use super::{Auth, Response};
use crate::config::AuthConfig;
use crate::error::{ProsegurError, Result};

const TOKEN_HEADER: &str = "X-Smart-Token";

#[derive(Deserialize)]
struct LoginResponse {
    data: LoginData,
}

#[derive(Deserialize)]
struct LoginData {
    token: String,
}

/// HTTP session against the Smart web service.
///
/// Logs in lazily on the first request and attaches the session token
/// (`X-Smart-Token`) to every request after that. A 4xx answer drops the
/// token so the next request logs in again. Nothing is retried here.
pub struct SmartAuth {
    http: reqwest::Client,
    config: AuthConfig,
    token: RwLock<Option<String>>,
}

impl SmartAuth {
    pub fn new(config: AuthConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Use an existing HTTP client (shared connection pool, custom timeouts).
    pub fn with_client(http: reqwest::Client, config: AuthConfig) -> Self {
        Self {
            http,
            config,
            token: RwLock::new(None),
        }
    }

    /// The configuration this session was built from.
    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Whether a session token is currently held.
    pub async fn is_logged_in(&self) -> bool {
        self.token.read().await.is_some()
    }

    /// Log in and store the session token.
    pub async fn login(&self) -> Result<String> {
        let body = json!({
            "user": self.config.user,
            "password": self.config.password,
            "language": self.config.language,
            "origin": self.config.country.login_origin(),
            "platform": "smart2",
            "provider": null,
        });

        let url = format!("{}/access/login", self.config.base_url);
        debug!("Logging in as {} ({})", self.config.user, self.config.country);
        let resp = self.with_headers(self.http.post(&url)).json(&body).send().await?;

        let status = resp.status().as_u16();
        if status != 200 {
            error!("Login failed with HTTP {}", status);
            return Err(ProsegurError::LoginFailed { status });
        }

        let login: LoginResponse = resp.json().await?;
        *self.token.write().await = Some(login.data.token.clone());
        info!("Logged in to Smart API");
        Ok(login.data.token)
    }

    fn with_headers(&self, builder: RequestBuilder) -> RequestBuilder {
        let country = self.config.country;
        builder
            .header(ACCEPT, "application/json, text/plain, */*")
            .header(CONTENT_TYPE, "application/json;charset=UTF-8")
            .header(ORIGIN, country.origin_header())
            .header(REFERER, country.referer_header())
    }
}

impl Auth for SmartAuth {
    type Response = SmartResponse;

    async fn request(&self, method: Method, path: &str, json: Option<&Value>) -> Result<SmartResponse> {
        let cached = self.token.read().await.clone();
        let token = match cached {
            Some(token) => token,
            None => {
                debug!("No {}, attempting login", TOKEN_HEADER);
                self.login().await?
            }
        };

        let url = format!("{}{}", self.config.base_url, path);
        let mut builder = self
            .with_headers(self.http.request(method.clone(), &url))
            .header(TOKEN_HEADER, token);
        if let Some(body) = json {
            builder = builder.json(body);
        }

        let resp = builder.send().await?;
        let status = resp.status().as_u16();

        if (500..=600).contains(&status) {
            warn!("{} {} -> HTTP {}: backend unresponsive", method, path, status);
            return Err(ProsegurError::BackendUnavailable { status });
        }

        if (400..500).contains(&status) {
            debug!("{} {} -> HTTP {}: dropping session token", method, path, status);
            *self.token.write().await = None;
            return Err(ProsegurError::Refused { status });
        }

        if status != 200 {
            let body = resp.text().await.unwrap_or_default();
            error!("{} {} -> HTTP {}: {}", method, path, status, body);
            return Err(ProsegurError::UnexpectedStatus {
                status,
                method: method.to_string(),
                path: path.to_string(),
                body,
            });
        }

        Ok(SmartResponse(resp))
    }
}

/// A successful response from [`SmartAuth`].
#[derive(Debug)]
pub struct SmartResponse(reqwest::Response);

impl Response for SmartResponse {
    fn status(&self) -> u16 {
        self.0.status().as_u16()
    }

    async fn text(self) -> Result<String> {
        Ok(self.0.text().await?)
    }

    async fn json(self) -> Result<Value> {
        Ok(self.0.json().await?)
    }
}
