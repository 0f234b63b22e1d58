#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Email,
    ArticleUrl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("field is required")]
    Required,
    #[error("field is malformed")]
    Malformed,
}

impl FieldError {
    /// Text shown next to `field` in the form.
    pub fn message(self, field: Field) -> &'static str {
        match (field, self) {
            (Field::Email, FieldError::Required) => "Email is required",
            (Field::Email, FieldError::Malformed) => "Please enter a valid email address",
            (Field::ArticleUrl, FieldError::Required) => "Article URL is required",
            (Field::ArticleUrl, FieldError::Malformed) => {
                "Please enter a valid URL (must start with http:// or https://)"
            }
        }
    }
}
