use super::*;

#[test]
fn validate_email_trims_and_accepts() {
    assert_eq!(validate_email("  ada@example.com "), Ok("ada@example.com".to_owned()));
}

#[test]
fn validate_email_requires_value() {
    assert_eq!(validate_email("   "), Err("Enter your email."));
}

#[test]
fn validate_email_rejects_malformed_addresses() {
    for bad in ["ada", "@example.com", "ada@localhost", "ada@example."] {
        assert_eq!(validate_email(bad), Err("Enter a valid email address."), "{bad}");
    }
}

#[test]
fn validate_sign_in_requires_password() {
    assert_eq!(validate_sign_in("ada@example.com", ""), Err("Enter your password."));
}

#[test]
fn validate_sign_in_keeps_password_verbatim() {
    let creds = validate_sign_in(" ada@example.com ", " s3cret ").unwrap();
    assert_eq!(creds.email, "ada@example.com");
    assert_eq!(creds.password, " s3cret ");
}
