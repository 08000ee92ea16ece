//! Session value, action protocol, and the pure transition function.
//!
//! DESIGN
//! ======
//! `reduce` is a total function over a closed action enum, matched
//! exhaustively. Tenant-presence validation deliberately does NOT live
//! here; the orchestration layer refuses to issue network calls without a
//! selected institute, so the reducer stays a trivially testable value
//! transform.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::{InstituteRef, UserRecord};

/// Which credential draft field an input edit targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Username,
    Email,
    Password,
    InstituteId,
}

/// In-progress credential form values, edited field by field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CredentialDraft {
    pub username: String,
    pub email: String,
    pub password: String,
    pub institute_id: String,
}

/// The authoritative in-memory session record. Exactly one exists per
/// process; it is owned by a [`super::store::SessionStore`] and mutated
/// only via dispatched [`Action`]s.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub is_loading: bool,
    pub is_auth: bool,
    pub is_success: bool,
    pub user: Option<UserRecord>,
    pub data: CredentialDraft,
    pub selected_institute: Option<InstituteRef>,
}

impl Default for Session {
    /// Startup shape: loading until the first identity refresh settles.
    fn default() -> Self {
        Self {
            is_loading: true,
            is_auth: false,
            is_success: false,
            user: None,
            data: CredentialDraft::default(),
            selected_institute: None,
        }
    }
}

/// State transitions applied through [`reduce`].
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// An orchestration operation has started.
    Loading,
    /// The user edited one draft field.
    HandleInput { field: Field, value: String },
    /// An institute was chosen (or re-confirmed after a credential call).
    SetInstitute { institute: InstituteRef },
    /// Signup was accepted by the server.
    UserSignup,
    /// Login was accepted by the server.
    UserLogin,
    /// Logout was confirmed by the server.
    UserLogout,
    /// Identity refresh confirmed the current user.
    LoadUser { user: UserRecord },
    /// Identity refresh did not confirm a user.
    LoadUserError,
    /// A credential call was rejected or failed in transit; only the
    /// loading flag is released so no exit path leaves it dangling.
    OperationFailed,
}

/// Pure transition function from (session, action) to the next session.
#[must_use]
pub fn reduce(mut session: Session, action: &Action) -> Session {
    match action {
        Action::Loading => {
            session.is_loading = true;
        }
        Action::HandleInput { field, value } => {
            let slot = match field {
                Field::Username => &mut session.data.username,
                Field::Email => &mut session.data.email,
                Field::Password => &mut session.data.password,
                Field::InstituteId => &mut session.data.institute_id,
            };
            *slot = value.clone();
        }
        Action::SetInstitute { institute } => {
            session.selected_institute = Some(institute.clone());
            session.is_loading = false;
        }
        Action::UserSignup => {
            session.is_success = true;
            session.is_loading = false;
            session.data = CredentialDraft::default();
        }
        Action::UserLogin => {
            session.is_auth = true;
            session.is_loading = false;
            session.data = CredentialDraft::default();
        }
        Action::UserLogout => {
            session.is_auth = false;
            session.user = None;
            session.is_loading = false;
        }
        Action::LoadUser { user } => {
            session.is_auth = true;
            session.user = Some(user.clone());
            session.is_loading = false;
        }
        Action::LoadUserError => {
            session.is_auth = false;
            session.user = None;
            session.is_loading = false;
        }
        Action::OperationFailed => {
            session.is_loading = false;
        }
    }
    session
}
