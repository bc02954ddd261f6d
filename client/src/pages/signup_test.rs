use super::*;

fn form(username: &str, email: &str, password: &str) -> SignupForm {
    SignupForm { username: username.to_owned(), email: email.to_owned(), password: password.to_owned() }
}

#[test]
fn validate_signup_trims_identity_fields() {
    assert_eq!(validate_signup(&form(" alice ", " a@example.com", "pw")), Ok(form("alice", "a@example.com", "pw")));
}

#[test]
fn validate_signup_requires_all_fields() {
    for bad in [form("", "a@example.com", "pw"), form("alice", " ", "pw"), form("alice", "a@example.com", "")] {
        assert_eq!(validate_signup(&bad), Err("All fields are required"));
    }
}

#[test]
fn signup_toast_starts_loading_then_resolves() {
    assert_eq!(CREATING_ACCOUNT, "Creating account...");
    assert_eq!(signup_notice(true), (ToastKind::Success, "Account created successfully!"));
    assert_eq!(signup_notice(false), (ToastKind::Error, "Registration failed. Please try again."));
}
