use article_submitter::domain::{validate, FormInput};
use fake::faker::internet::en::SafeEmail;
use fake::Fake;

#[test]
fn generated_emails_pass_validation() {
    for _ in 0..20 {
        let email: String = SafeEmail().fake();
        let result = validate(&FormInput::new(email.clone(), "https://example.com/a"));
        assert!(result.valid, "rejected generated email {}", email);
    }
}

#[test]
fn invalid_forms_report_field_errors() {
    let invalid_forms = vec![
        (("", "https://example.com/a"), (true, false), "missing email"),
        (("user@example.com", ""), (false, true), "missing url"),
        (("", ""), (true, true), "missing email and url"),
        (("not-an-email", "https://example.com/a"), (true, false), "invalid email"),
        (("user@example.com", "ftp://example.com"), (false, true), "invalid url"),
        (("user@example", "example.com"), (true, true), "invalid email and url"),
    ];

    for ((email, url), (email_err, url_err), error) in invalid_forms {
        let result = validate(&FormInput::new(email, url));
        assert!(!result.valid, "Did not fail with invalid form: {}", error);
        assert_eq!(result.email_error.is_some(), email_err, "{}", error);
        assert_eq!(result.url_error.is_some(), url_err, "{}", error);
    }
}

#[test]
fn permissive_email_shapes_accepted() {
    for email in [
        "josé@example.com",
        "first_last@my_host.com",
        "a@b..com",
        "user@-x.com",
    ] {
        let result = validate(&FormInput::new(email, "https://example.com/a"));
        assert!(result.valid, "rejected {}: {:?}", email, result.email_error);
    }
}
