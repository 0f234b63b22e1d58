use crate::domain::NewSubmission;
use reqwest::{Client, StatusCode};
use serde::Serialize;

pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "\n{}", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "caused by:\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}

#[derive(thiserror::Error)]
pub enum SubmitError {
    #[error("Submission was rejected with status {status}")]
    Rejected {
        status: StatusCode,
        message: Option<String>,
    },
    #[error("Failed to reach the submission endpoint")]
    Transport(#[source] reqwest::Error),
}

impl std::fmt::Debug for SubmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

pub struct SubmitClient {
    client: Client,
    base_url: String,
}

#[derive(Serialize)]
struct SubmitRequest<'a> {
    email: &'a str,
    article_url: &'a str,
}

struct SubmitResponse {
    success: bool,
    session_id: Option<String>,
    detail: Option<serde_json::Value>,
    message: Option<String>,
}

impl SubmitResponse {
    /// Fields are read one by one so a mistyped field does not hide the rest.
    /// A body that is not JSON carries no fields.
    fn from_body(body: &[u8]) -> Self {
        let value: serde_json::Value = serde_json::from_slice(body).unwrap_or_default();
        let string_field = |name: &str| value.get(name).and_then(|v| v.as_str()).map(String::from);
        Self {
            success: value.get("success").and_then(|v| v.as_bool()).unwrap_or(false),
            session_id: string_field("session_id"),
            detail: value.get("detail").cloned(),
            message: string_field("message"),
        }
    }

    fn error_message(self) -> Option<String> {
        self.detail
            .and_then(detail_text)
            .or(self.message)
            .filter(|m| !m.is_empty())
    }
}

/// `detail` is either a plain string or a list of `{ "msg": .. }` entries.
fn detail_text(detail: serde_json::Value) -> Option<String> {
    let text = match detail {
        serde_json::Value::String(s) => s,
        serde_json::Value::Array(items) => items
            .iter()
            .filter_map(|item| item.get("msg").and_then(|m| m.as_str()))
            .collect::<Vec<_>>()
            .join("; "),
        _ => return None,
    };
    Some(text).filter(|t| !t.is_empty())
}

fn interpret_response(status: StatusCode, body: &[u8]) -> Result<String, SubmitError> {
    let response = SubmitResponse::from_body(body);
    if status.is_success() && response.success {
        if let Some(session_id) = response.session_id {
            return Ok(session_id);
        }
    }
    Err(SubmitError::Rejected {
        status,
        message: response.error_message(),
    })
}

impl SubmitClient {
    pub fn new(base_url: String, timeout: std::time::Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        let base_url = base_url.trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    #[cfg(test)]
    fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Posts the submission and returns the session id the backend assigned.
    #[tracing::instrument(
        name = "Submitting article for analysis",
        skip(self, submission),
        fields(
            submitter_email = %submission.email.as_ref(),
            article_url = %submission.article_url.as_ref(),
        )
    )]
    pub async fn submit(&self, submission: &NewSubmission) -> Result<String, SubmitError> {
        let url = format!("{}/submit", self.base_url);
        let request_body = SubmitRequest {
            email: submission.email.as_ref(),
            article_url: submission.article_url.as_ref(),
        };
        let response = self
            .client
            .post(&url)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error.cause_chain = ?e, "Failed to send submission");
                SubmitError::Transport(e)
            })?;
        let status = response.status();
        let body = response.bytes().await.map_err(|e| {
            tracing::error!(error.cause_chain = ?e, "Failed to read submission response");
            SubmitError::Transport(e)
        })?;

        interpret_response(status, &body).map_err(|e| {
            tracing::warn!(error.cause_chain = ?e, "Submission was rejected");
            e
        })
    }
}
