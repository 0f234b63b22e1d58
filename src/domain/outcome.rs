use crate::submit_client::SubmitError;

pub const GENERIC_REJECTION_MESSAGE: &str = "An unexpected error occurred. Please try again.";
pub const CONNECTIVITY_MESSAGE: &str =
    "Unable to connect to the server. Please check if the backend is running.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Success { session_id: String },
    Failure { message: String },
    NetworkError { message: String },
}

impl SubmissionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionOutcome::Success { .. })
    }
}

impl From<Result<String, SubmitError>> for SubmissionOutcome {
    fn from(result: Result<String, SubmitError>) -> Self {
        match result {
            Ok(session_id) => SubmissionOutcome::Success { session_id },
            Err(SubmitError::Rejected { message, .. }) => SubmissionOutcome::Failure {
                message: message.unwrap_or_else(|| GENERIC_REJECTION_MESSAGE.to_string()),
            },
            Err(SubmitError::Transport(_)) => SubmissionOutcome::NetworkError {
                message: CONNECTIVITY_MESSAGE.to_string(),
            },
        }
    }
}
