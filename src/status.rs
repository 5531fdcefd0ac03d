// MIT License - Copyright (c) 2026 prosegur-smart contributors
// Prosegur Smart client

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ProsegurError, Result};

/// Alarm panel status as reported by the Smart API.
///
/// Serialized as its two-letter wire code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// AT - Armed
    #[serde(rename = "AT")]
    Armed,
    /// DA - Disarmed
    #[serde(rename = "DA")]
    Disarmed,
}

impl Status {
    /// Parse a wire status code ("AT", "DA").
    pub fn from_code(code: &str) -> Result<Self> {
        match code {
            "AT" => Ok(Self::Armed),
            "DA" => Ok(Self::Disarmed),
            other => Err(ProsegurError::UnrecognizedStatusCode {
                code: other.to_string(),
            }),
        }
    }

    /// The wire code sent in `statusCode` when changing state.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Armed => "AT",
            Self::Disarmed => "DA",
        }
    }

    /// Human-readable name, also used by `Display`.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Armed => "Armed",
            Self::Disarmed => "Disarmed",
        }
    }
}

impl FromStr for Status {
    type Err = ProsegurError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_code(s)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}
