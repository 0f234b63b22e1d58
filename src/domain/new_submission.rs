use super::{ArticleUrl, FormInput, SubmitterEmail, ValidationResult};

pub struct NewSubmission {
    pub email: SubmitterEmail,
    pub article_url: ArticleUrl,
}

impl NewSubmission {
    pub fn parse(input: &FormInput) -> Result<Self, ValidationResult> {
        let email = SubmitterEmail::try_from(input.email.clone());
        let article_url = ArticleUrl::try_from(input.article_url.clone());
        match (email, article_url) {
            (Ok(email), Ok(article_url)) => Ok(Self { email, article_url }),
            (email, article_url) => Err(ValidationResult::from_errors(
                email.err(),
                article_url.err(),
            )),
        }
    }
}
