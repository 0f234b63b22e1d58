use super::FieldError;
use reqwest::Url;

pub struct ArticleUrl(String);

impl TryFrom<String> for ArticleUrl {
    type Error = FieldError;

    fn try_from(value: String) -> Result<Self, FieldError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(FieldError::Required);
        }

        let has_web_scheme = value.starts_with("http://") || value.starts_with("https://");
        let host_has_dot = Url::parse(value)
            .ok()
            .and_then(|url| url.host_str().map(|host| host.contains('.')))
            .unwrap_or(false);

        if has_web_scheme && host_has_dot {
            Ok(Self(value.to_string()))
        } else {
            Err(FieldError::Malformed)
        }
    }
}

impl AsRef<str> for ArticleUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
