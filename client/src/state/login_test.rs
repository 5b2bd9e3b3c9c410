use super::*;

#[test]
fn begin_submit_clears_previous_error_and_snapshots_fields() {
    let mut form = LoginForm {
        email: "user@example.com".to_owned(),
        password: "hunter2".to_owned(),
        local_error: Some("Invalid credentials".to_owned()),
    };
    let creds = form.begin_submit();
    assert!(form.local_error.is_none());
    assert_eq!(
        creds,
        Credentials { email: "user@example.com".to_owned(), password: "hunter2".to_owned() }
    );
}

#[test]
fn begin_submit_does_not_validate_empty_fields() {
    let mut form = LoginForm::default();
    let creds = form.begin_submit();
    assert!(creds.email.is_empty());
    assert!(creds.password.is_empty());
}

#[test]
fn fail_shows_exact_message_and_keeps_fields() {
    let mut form = LoginForm { email: "user@example.com".to_owned(), password: "pw".to_owned(), local_error: None };
    let _ = form.begin_submit();
    form.fail("Invalid credentials");
    assert_eq!(form.displayed_error(None).as_deref(), Some("Invalid credentials"));
    assert_eq!(form.email, "user@example.com");
    assert_eq!(form.password, "pw");
}

#[test]
fn succeed_discards_password_only() {
    let mut form = LoginForm { email: "user@example.com".to_owned(), password: "pw".to_owned(), local_error: None };
    form.succeed();
    assert_eq!(form.email, "user@example.com");
    assert!(form.password.is_empty());
}

#[test]
fn displayed_error_falls_back_to_auth_error() {
    let form = LoginForm::default();
    assert_eq!(form.displayed_error(Some("server down")).as_deref(), Some("server down"));
    assert_eq!(form.displayed_error(None), None);
}
