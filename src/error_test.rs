use super::*;

// =============================================================================
// Display
// =============================================================================

#[test]
fn rejected_displays_server_message_verbatim() {
    let err = AuthError::Rejected("Invalid Credentials".into());
    assert_eq!(err.to_string(), "Invalid Credentials");
}

#[test]
fn tenant_not_selected_display() {
    assert_eq!(AuthError::TenantNotSelected.to_string(), "no institute selected");
}

#[test]
fn transport_display_includes_detail() {
    let err = AuthError::Transport("connection refused".into());
    assert!(err.to_string().contains("connection refused"));
}

#[test]
fn timeout_display() {
    assert_eq!(AuthError::Timeout.to_string(), "request timed out");
}

#[test]
fn identity_unconfirmed_display() {
    assert_eq!(AuthError::IdentityUnconfirmed.to_string(), "identity not confirmed");
}
