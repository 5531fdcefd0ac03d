// MIT License - Copyright (c) 2026 prosegur-smart contributors
// Prosegur Smart client

use serde_json::{json, Value};
use tracing::{debug, error};

use crate::auth::{Auth, Method, Response};
use crate::error::{ProsegurError, Result};
use crate::status::Status;

/// One alarm site, as listed by `GET /installation`.
///
/// The record fetched by [`Installation::retrieve`] is kept as a snapshot
/// and every accessor reads from it. [`arm`](Installation::arm) and
/// [`disarm`](Installation::disarm) change the remote panel only: the
/// snapshot, and therefore [`status`](Installation::status), keeps the
/// value from the last retrieve until `retrieve` is called again.
#[derive(Debug, Clone)]
pub struct Installation {
    number: usize,
    installation_id: String,
    data: Value,
}

impl Installation {
    /// Fetch the installation list and select entry `number`.
    ///
    /// Returns `Ok(None)` when the API reports a non-200 `result.code`
    /// (the `result` object is logged). Fails with
    /// [`ProsegurError::InstallationIndex`] when `number` is past the end of
    /// the list. Errors from `auth` are passed through unchanged.
    pub async fn retrieve<A: Auth>(auth: &A, number: usize) -> Result<Option<Self>> {
        let resp = auth.request(Method::GET, "/installation", None).await?;
        let body = resp.json().await?;

        let result = body
            .get("result")
            .ok_or(ProsegurError::MissingField { field: "result" })?;
        if result.get("code").and_then(Value::as_i64) != Some(200) {
            error!(%result, "Installation list request failed");
            return Ok(None);
        }

        let list = body
            .get("data")
            .and_then(Value::as_array)
            .ok_or(ProsegurError::MissingField { field: "data" })?;
        let record = list.get(number).ok_or(ProsegurError::InstallationIndex {
            index: number,
            len: list.len(),
        })?;

        Self::from_record(number, record.clone()).map(Some)
    }

    fn from_record(number: usize, data: Value) -> Result<Self> {
        let installation_id = identifier(&data, "installationId")?;
        debug!("Selected installation {} ({})", number, installation_id);
        Ok(Self {
            number,
            installation_id,
            data,
        })
    }

    /// Position of this installation in the vendor's list.
    pub fn number(&self) -> usize {
        self.number
    }

    pub fn installation_id(&self) -> &str {
        &self.installation_id
    }

    /// The raw record as returned by the API.
    pub fn data(&self) -> &Value {
        &self.data
    }

    /// Contract identifier. Numeric identifiers are rendered as decimal.
    pub fn contract(&self) -> Result<String> {
        identifier(&self.data, "contractId")
    }

    /// Panel status from the snapshot. No request is made.
    pub fn status(&self) -> Result<Status> {
        match self.data.get("status") {
            Some(Value::String(code)) => Status::from_code(code),
            Some(other) => Err(ProsegurError::UnrecognizedStatusCode {
                code: other.to_string(),
            }),
            None => Err(ProsegurError::MissingField { field: "status" }),
        }
    }

    /// Order the panel to arm itself.
    ///
    /// Returns `Ok(true)` without a request when the snapshot already says
    /// armed; otherwise `Ok(true)` iff the API answered HTTP 200.
    pub async fn arm<A: Auth>(&self, auth: &A) -> Result<bool> {
        self.change_status(auth, Status::Armed).await
    }

    /// Order the panel to disarm itself. Same contract as [`arm`](Self::arm).
    pub async fn disarm<A: Auth>(&self, auth: &A) -> Result<bool> {
        self.change_status(auth, Status::Disarmed).await
    }

    async fn change_status<A: Auth>(&self, auth: &A, target: Status) -> Result<bool> {
        if self.status()? == target {
            return Ok(true);
        }

        let body = json!({ "statusCode": target.code() });
        let path = format!("/installation/{}/status", self.installation_id);
        let resp = auth.request(Method::PUT, &path, Some(&body)).await?;

        let status = resp.status();
        let text = resp.text().await?;
        debug!("{} HTTP status: {}\t{}", target.description().to_uppercase(), status, text);

        Ok(status == 200)
    }
}

/// Read an identifier the API sends either as a string or as a number.
fn identifier(data: &Value, field: &'static str) -> Result<String> {
    match data.get(field) {
        Some(Value::String(id)) => Ok(id.clone()),
        Some(id @ Value::Number(_)) => Ok(id.to_string()),
        _ => Err(ProsegurError::MissingField { field }),
    }
}
