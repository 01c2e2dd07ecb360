use std::fmt;
use std::time::Duration;

use reqwest::{Client, RequestBuilder, StatusCode};
use thiserror::Error;

/// Per-request deadline. Kept below the probe period so a black-holed
/// endpoint cannot make probe ticks overlap.
pub const HTTP_TIMEOUT: Duration = Duration::from_secs(3);

/// Fixed address of the robot controller, read-only for the process
/// lifetime. The controller speaks plain HTTP on two paths: `/js` for
/// commands and `/` for reachability probes.
#[derive(Debug, Clone)]
pub struct RobotEndpoint {
    host: String,
}

impl RobotEndpoint {
    pub fn new(host: impl Into<String>) -> Self {
        Self { host: host.into() }
    }

    pub fn command_url(&self) -> String {
        format!("http://{}/js", self.host)
    }

    pub fn probe_url(&self) -> String {
        format!("http://{}/", self.host)
    }
}

impl fmt::Display for RobotEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.host)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FailureReason {
    #[error("robot answered HTTP {0}")]
    Status(u16),
    #[error("{0}")]
    Transport(String),
}

/// Result of one best-effort request. Only HTTP 200 counts as success;
/// every other response or transport error is a failure, uniformly for
/// command dispatch and reachability probes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpOutcome {
    Success(String),
    Failure(FailureReason),
}

impl HttpOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, HttpOutcome::Success(_))
    }
}

pub fn build_client() -> Client {
    Client::builder()
        .timeout(HTTP_TIMEOUT)
        .build()
        .expect("failed to build HTTP client")
}

/// Issues the request and folds status handling and transport errors into
/// an [`HttpOutcome`]. Never returns an error to the caller.
pub async fn outcome_of(request: RequestBuilder) -> HttpOutcome {
    match request.send().await {
        Ok(response) if response.status() == StatusCode::OK => match response.text().await {
            Ok(body) => HttpOutcome::Success(body),
            Err(e) => HttpOutcome::Failure(FailureReason::Transport(e.to_string())),
        },
        Ok(response) => HttpOutcome::Failure(FailureReason::Status(response.status().as_u16())),
        Err(e) => HttpOutcome::Failure(FailureReason::Transport(e.to_string())),
    }
}
