mod article_url;
mod field_error;
mod form_input;
mod new_submission;
mod outcome;
mod submitter_email;

pub use article_url::ArticleUrl;
pub use field_error::{Field, FieldError};
pub use form_input::{validate, FormInput, ValidationResult};
pub use new_submission::NewSubmission;
pub use outcome::{SubmissionOutcome, CONNECTIVITY_MESSAGE, GENERIC_REJECTION_MESSAGE};
pub use submitter_email::SubmitterEmail;
