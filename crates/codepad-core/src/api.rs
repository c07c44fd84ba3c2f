//! Request and response shapes shared by the HTTP server and the CLI
//!
//! The three operations validate their request and hand the payload to the
//! matching module. Only an empty string counts as missing; whitespace-only
//! input is processed as-is.

use serde::{Deserialize, Serialize};

use crate::{autofix, help as help_table, simulator, Error, Result};

/// Body of `/run` and `/autofix`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeRequest {
    #[serde(default)]
    pub code: String,
}

/// Body of `/help`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRequest {
    #[serde(default)]
    pub query: String,
}

/// Reply envelope for every endpoint
///
/// `output` is always present (empty on rejection); `error` only when set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub output: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Response {
    pub fn ok(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            error: None,
        }
    }

    pub fn rejected(err: &Error) -> Self {
        Self {
            output: String::new(),
            error: Some(err.to_string()),
        }
    }
}

impl From<Result<String>> for Response {
    fn from(result: Result<String>) -> Self {
        match result {
            Ok(output) => Response::ok(output),
            Err(e) => Response::rejected(&e),
        }
    }
}

impl CodeRequest {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }

    fn code(&self) -> Result<&str> {
        if self.code.is_empty() {
            return Err(Error::CodeRequired);
        }
        Ok(&self.code)
    }
}

impl QueryRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }

    fn query(&self) -> Result<&str> {
        if self.query.is_empty() {
            return Err(Error::QueryRequired);
        }
        Ok(&self.query)
    }
}

/// Decode a JSON body, mapping any failure to [`Error::InvalidBody`]
pub fn decode<T: serde::de::DeserializeOwned>(body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(|_| Error::InvalidBody)
}

// ── Operations ─────────────────────────────────────────────

/// Simulated execution of the submitted code
pub fn run(req: &CodeRequest) -> Result<String> {
    Ok(simulator::simulate_execution(req.code()?))
}

/// Autofix the submitted code
pub fn autofix(req: &CodeRequest) -> Result<String> {
    Ok(autofix::apply_auto_fixes(req.code()?))
}

/// Help paragraph for the query
pub fn help(req: &QueryRequest) -> Result<String> {
    Ok(help_table::help_response(req.query()?).to_string())
}
