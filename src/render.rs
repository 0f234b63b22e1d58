use crate::domain::SubmissionOutcome;

pub const SUCCESS_HEADING: &str = "Request Submitted Successfully!";
pub const SUCCESS_NOTE: &str = "Your article analysis request has been submitted.";
pub const EMAIL_NOTE: &str = "Please check your email in a few seconds for the analysis results.";
pub const FAILURE_HEADING: &str = "Submission Failed";
pub const RETRY_HINT: &str = "Please check your inputs and try again.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessagePanel {
    Success {
        heading: &'static str,
        note: &'static str,
        email_note: &'static str,
        session_id: String,
    },
    Error {
        heading: &'static str,
        message: String,
        retry_hint: &'static str,
    },
}

impl MessagePanel {
    pub fn icon(&self) -> &'static str {
        match self {
            MessagePanel::Success { .. } => "✅",
            MessagePanel::Error { .. } => "❌",
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            MessagePanel::Success { heading, .. } | MessagePanel::Error { heading, .. } => *heading,
        }
    }

    pub fn session_id(&self) -> Option<&str> {
        match self {
            MessagePanel::Success { session_id, .. } => Some(session_id.as_str()),
            MessagePanel::Error { .. } => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            MessagePanel::Success { .. } => None,
            MessagePanel::Error { message, .. } => Some(message.as_str()),
        }
    }

    /// Body lines under the heading, in display order.
    pub fn lines(&self) -> Vec<String> {
        match self {
            MessagePanel::Success {
                note,
                email_note,
                session_id,
                ..
            } => vec![
                note.to_string(),
                email_note.to_string(),
                format!("Session ID: {}", session_id),
            ],
            MessagePanel::Error {
                message,
                retry_hint,
                ..
            } => vec![message.clone(), retry_hint.to_string()],
        }
    }
}

// Rejections and transport failures share one panel; only the message differs.
pub fn render(outcome: &SubmissionOutcome) -> MessagePanel {
    match outcome {
        SubmissionOutcome::Success { session_id } => MessagePanel::Success {
            heading: SUCCESS_HEADING,
            note: SUCCESS_NOTE,
            email_note: EMAIL_NOTE,
            session_id: session_id.clone(),
        },
        SubmissionOutcome::Failure { message } | SubmissionOutcome::NetworkError { message } => {
            MessagePanel::Error {
                heading: FAILURE_HEADING,
                message: message.clone(),
                retry_hint: RETRY_HINT,
            }
        }
    }
}
