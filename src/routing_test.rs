use super::*;
use crate::net::types::{InstituteRef, UserRecord};

fn institute() -> InstituteRef {
    InstituteRef {
        id: "1".into(),
        name: "ITCEW Institute".into(),
        code: "ITCEW".into(),
        logo: None,
    }
}

fn anonymous() -> Session {
    Session { is_loading: false, ..Session::default() }
}

fn selected() -> Session {
    Session {
        selected_institute: Some(institute()),
        ..anonymous()
    }
}

fn authenticated() -> Session {
    Session {
        is_auth: true,
        user: Some(UserRecord(serde_json::json!({"username": "alice"}))),
        ..selected()
    }
}

const ALL_ROUTES: [Route; 5] = [
    Route::SelectInstitute,
    Route::Signup,
    Route::Login,
    Route::Home,
    Route::Dashboard,
];

// =============================================================================
// Route requirements
// =============================================================================

#[test]
fn only_selection_screen_skips_institute_requirement() {
    assert!(!Route::SelectInstitute.requires_institute());
    assert!(Route::Login.requires_institute());
    assert!(Route::Signup.requires_institute());
    assert!(Route::Home.requires_institute());
}

#[test]
fn interior_routes_require_auth() {
    assert!(Route::Home.requires_auth());
    assert!(Route::Dashboard.requires_auth());
    assert!(!Route::Login.requires_auth());
    assert!(!Route::SelectInstitute.requires_auth());
}

#[test]
fn paths_are_distinct() {
    for a in ALL_ROUTES {
        for b in ALL_ROUTES {
            if a != b {
                assert_ne!(a.path(), b.path());
            }
        }
    }
}

// =============================================================================
// guard
// =============================================================================

#[test]
fn missing_institute_redirects_to_selection_with_return_target() {
    let redirect = guard(&anonymous(), Route::Login).unwrap();
    assert_eq!(redirect.to, Route::SelectInstitute);
    assert_eq!(redirect.return_to, Some(Route::Login));
}

#[test]
fn missing_institute_allows_selection_screen() {
    assert!(guard(&anonymous(), Route::SelectInstitute).is_none());
}

#[test]
fn unauthenticated_with_institute_redirected_from_protected_routes() {
    let redirect = guard(&selected(), Route::Home).unwrap();
    assert_eq!(redirect.to, Route::Login);
    assert!(redirect.return_to.is_none());
}

#[test]
fn unauthenticated_with_institute_allowed_on_login_and_signup() {
    assert!(guard(&selected(), Route::Login).is_none());
    assert!(guard(&selected(), Route::Signup).is_none());
}

#[test]
fn authenticated_redirected_from_credential_screens_to_home() {
    assert_eq!(guard(&authenticated(), Route::Login).unwrap().to, Route::Home);
    assert_eq!(guard(&authenticated(), Route::Signup).unwrap().to, Route::Home);
}

#[test]
fn authenticated_allowed_on_protected_routes() {
    assert!(guard(&authenticated(), Route::Home).is_none());
    assert!(guard(&authenticated(), Route::Dashboard).is_none());
}

#[test]
fn guard_is_idempotent_for_every_session_and_route() {
    for session in [anonymous(), selected(), authenticated()] {
        for route in ALL_ROUTES {
            if let Some(redirect) = guard(&session, route) {
                assert!(
                    guard(&session, redirect.to).is_none(),
                    "guard not idempotent for {route:?}"
                );
            }
        }
    }
}
