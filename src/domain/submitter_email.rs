use super::FieldError;

pub struct SubmitterEmail(String);

impl TryFrom<String> for SubmitterEmail {
    type Error = FieldError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let value = value.trim();
        if value.is_empty() {
            Err(FieldError::Required)
        } else if has_email_shape(value) {
            Ok(Self(value.to_string()))
        } else {
            Err(FieldError::Malformed)
        }
    }
}

impl AsRef<str> for SubmitterEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// `local@domain.tld`: no whitespace, a single `@`, and a dot in the domain
/// with text on both sides of it.
fn has_email_shape(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}
