use super::*;

#[test]
fn validate_credentials_trims_both_fields() {
    assert_eq!(
        validate_credentials("  alice  ", " s3cret "),
        Ok(("alice".to_owned(), "s3cret".to_owned()))
    );
}

#[test]
fn validate_credentials_requires_username() {
    assert_eq!(
        validate_credentials("   ", "s3cret"),
        Err("Enter both username and password.")
    );
}

#[test]
fn validate_credentials_requires_password() {
    assert_eq!(
        validate_credentials("alice", ""),
        Err("Enter both username and password.")
    );
}
