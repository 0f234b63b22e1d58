use super::{Field, FieldError, NewSubmission};

/// Raw field values as typed into the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub email: String,
    pub article_url: String,
}

impl FormInput {
    pub fn new(email: impl Into<String>, article_url: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            article_url: article_url.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid: bool,
    pub email_error: Option<String>,
    pub url_error: Option<String>,
}

impl ValidationResult {
    pub fn from_errors(email: Option<FieldError>, article_url: Option<FieldError>) -> Self {
        let email_error = email.map(|e| e.message(Field::Email).to_string());
        let url_error = article_url.map(|e| e.message(Field::ArticleUrl).to_string());
        Self {
            valid: email_error.is_none() && url_error.is_none(),
            email_error,
            url_error,
        }
    }

    pub fn error_for(&self, field: Field) -> Option<&str> {
        match field {
            Field::Email => self.email_error.as_deref(),
            Field::ArticleUrl => self.url_error.as_deref(),
        }
    }
}

/// Checks both fields; never stops at the first failure.
pub fn validate(input: &FormInput) -> ValidationResult {
    match NewSubmission::parse(input) {
        Ok(_) => ValidationResult::from_errors(None, None),
        Err(result) => result,
    }
}
