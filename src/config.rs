// MIT License - Copyright (c) 2026 prosegur-smart contributors
// Prosegur Smart client

use std::fmt;
use std::str::FromStr;

use crate::error::{ProsegurError, Result};

/// Default Smart server web-service root.
pub const SMART_SERVER_WS: &str = "https://smart.prosegur.com/smart-server/ws";

/// Country the account is registered in.
///
/// Each country is served by a different web front end, which the backend
/// checks through the `Origin`/`Referer` headers and the login `origin` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Country {
    /// PT - Prosegur Smart
    Portugal,
    /// ES - Movistar Prosegur Alarmas
    Spain,
}

impl Country {
    pub fn from_code(code: &str) -> Result<Self> {
        match code {
            "PT" => Ok(Self::Portugal),
            "ES" => Ok(Self::Spain),
            other => Err(ProsegurError::UnsupportedCountry {
                code: other.to_string(),
            }),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Portugal => "PT",
            Self::Spain => "ES",
        }
    }

    /// Value of the `Origin` header.
    pub fn origin_header(&self) -> &'static str {
        match self {
            Self::Portugal => "https://smart.prosegur.com/smart-individuo",
            Self::Spain => "https://alarmas.movistarproseguralarmas.es",
        }
    }

    /// Value of the `Referer` header.
    pub fn referer_header(&self) -> &'static str {
        match self {
            Self::Portugal => "https://smart.prosegur.com/smart-individuo/login.html",
            Self::Spain => "https://alarmas.movistarproseguralarmas.es/smart-mv/login.html",
        }
    }

    /// The `origin` field sent in the login body.
    pub fn login_origin(&self) -> &'static str {
        match self {
            Self::Portugal => "Web",
            Self::Spain => "WebM",
        }
    }
}

impl FromStr for Country {
    type Err = ProsegurError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_code(s)
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Configuration for a Smart API session.
#[derive(Clone)]
pub struct AuthConfig {
    /// Account user name
    pub user: String,
    /// Account password
    pub password: String,
    /// Country the account belongs to (default: PT)
    pub country: Country,
    /// Web-service root (default: [`SMART_SERVER_WS`])
    pub base_url: String,
    /// Language sent at login (default: en_GB)
    pub language: String,
}

// Keep the password out of logs.
impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("user", &self.user)
            .field("password", &"***")
            .field("country", &self.country)
            .field("base_url", &self.base_url)
            .field("language", &self.language)
            .finish()
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            user: String::new(),
            password: String::new(),
            country: Country::Portugal,
            base_url: SMART_SERVER_WS.to_string(),
            language: "en_GB".to_string(),
        }
    }
}

impl AuthConfig {
    /// Create a new config builder starting from defaults.
    pub fn builder() -> AuthConfigBuilder {
        AuthConfigBuilder::default()
    }
}

/// Builder for AuthConfig.
#[derive(Debug, Clone, Default)]
pub struct AuthConfigBuilder {
    config: AuthConfig,
}

impl AuthConfigBuilder {
    pub fn user(mut self, user: impl Into<String>) -> Self {
        self.config.user = user.into();
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.config.password = password.into();
        self
    }

    pub fn country(mut self, country: Country) -> Self {
        self.config.country = country;
        self
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.config.language = language.into();
        self
    }

    pub fn build(self) -> AuthConfig {
        self.config
    }
}
