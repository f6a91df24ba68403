use super::*;

#[test]
fn accepts_matching_long_enough_password() {
    assert_eq!(
        validate_password_change("old-pass", "newpass1", "newpass1"),
        Ok(PasswordChange { old_password: "old-pass".to_owned(), new_password: "newpass1".to_owned() })
    );
}

#[test]
fn rejects_empty_fields() {
    assert_eq!(validate_password_change("", "newpass1", "newpass1"), Err("Enter the current and the new password."));
    assert_eq!(validate_password_change("old", "", ""), Err("Enter the current and the new password."));
}

#[test]
fn rejects_short_password_before_mismatch() {
    assert_eq!(validate_password_change("old", "abc", "xyz"), Err("Password must be at least 6 characters."));
}

#[test]
fn rejects_mismatched_confirmation() {
    assert_eq!(validate_password_change("old", "newpass1", "newpass2"), Err("Passwords do not match."));
}

#[test]
fn rejects_unchanged_password() {
    assert_eq!(
        validate_password_change("samepass", "samepass", "samepass"),
        Err("The new password must differ from the current one.")
    );
}
