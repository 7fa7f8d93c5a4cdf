use super::*;

#[test]
fn required_trims_and_rejects_blank() {
    assert_eq!(required("name", "Company name", "  Acme  "), Ok("Acme".to_owned()));
    assert_eq!(
        required("name", "Company name", "   "),
        Err(FieldError::new("name", "Company name is required."))
    );
}

#[test]
fn email_requires_at_sign() {
    assert_eq!(email("email", " ops@acme.test "), Ok("ops@acme.test".to_owned()));
    assert_eq!(email("email", "ops.acme.test").unwrap_err().message, "Enter a valid email address.");
    assert_eq!(email("email", "").unwrap_err().message, "Email is required.");
}

#[test]
fn quantity_must_be_positive_integer() {
    assert_eq!(quantity("q", " 12 "), Ok(12));
    assert!(quantity("q", "0").is_err());
    assert!(quantity("q", "-3").is_err());
    assert!(quantity("q", "1.5").is_err());
    assert!(quantity("q", "").is_err());
}

#[test]
fn optional_drops_blank_values() {
    assert_eq!(optional("  "), None);
    assert_eq!(optional(" note "), Some("note".to_owned()));
}

#[test]
fn field_error_displays_message() {
    assert_eq!(FieldError::new("phone", "Phone is required.").to_string(), "Phone is required.");
}
