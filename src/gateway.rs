//! Orchestration operations tying session, selection, and the auth API.
//!
//! ARCHITECTURE
//! ============
//! Each operation follows the same shape: guard the tenant invariant,
//! dispatch `Loading` strictly before the awaited call, dispatch exactly
//! one terminal action after it resolves, and fold the result into an
//! [`OpOutcome`] the embedding application can present. Failures are
//! absorbed here; nothing propagates to callers as an unhandled fault, and
//! no exit path leaves the loading flag set.
//!
//! CONCURRENCY
//! ===========
//! Requests carry a per-operation-kind generation token. A response that
//! lost the race to a newer request of the same kind is dropped without
//! touching the session, so stale data never overwrites fresher state.

#[cfg(test)]
#[path = "gateway_test.rs"]
mod gateway_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, info, warn};

use crate::error::AuthError;
use crate::net::api::AuthApi;
use crate::net::types::{CredentialPayload, IdentityResponse, InstituteRef, fallback_institutes};
use crate::routing::{Redirect, Route};
use crate::selection::SelectionStore;
use crate::state::session::Action;
use crate::state::store::SessionStore;

const INTERNAL_ERROR_NOTICE: &str = "Internal Server Error";
const SELECT_INSTITUTE_NOTICE: &str = "Please select an institute first";

/// User-facing message produced by an operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

/// What the caller should present and where it should navigate next.
/// Every Rejected/Transport outcome carries exactly one error notice.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OpOutcome {
    pub notice: Option<Notice>,
    pub redirect: Option<Redirect>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum OpKind {
    Signup,
    Login,
    Logout,
    Refresh,
}

/// Monotonic request generations, one counter per operation kind.
#[derive(Default)]
struct Generations {
    signup: AtomicU64,
    login: AtomicU64,
    logout: AtomicU64,
    refresh: AtomicU64,
}

impl Generations {
    fn slot(&self, kind: OpKind) -> &AtomicU64 {
        match kind {
            OpKind::Signup => &self.signup,
            OpKind::Login => &self.login,
            OpKind::Logout => &self.logout,
            OpKind::Refresh => &self.refresh,
        }
    }

    /// Claim the next generation for `kind`.
    fn begin(&self, kind: OpKind) -> u64 {
        self.slot(kind).fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether `generation` is still the latest issued for `kind`.
    fn is_current(&self, kind: OpKind, generation: u64) -> bool {
        self.slot(kind).load(Ordering::SeqCst) == generation
    }
}

/// Auth gateway: the only writer of the session store and the selection
/// store.
pub struct AuthGateway {
    api: Arc<dyn AuthApi>,
    session: Arc<SessionStore>,
    selection: Arc<dyn SelectionStore>,
    generations: Generations,
}

impl AuthGateway {
    #[must_use]
    pub fn new(api: Arc<dyn AuthApi>, session: Arc<SessionStore>, selection: Arc<dyn SelectionStore>) -> Self {
        Self {
            api,
            session,
            selection,
            generations: Generations::default(),
        }
    }

    /// The session store this gateway drives.
    #[must_use]
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Startup sequence: seed the persisted selection into the session
    /// before any network activity, then confirm identity once.
    pub async fn bootstrap(&self) -> OpOutcome {
        if let Some(institute) = self.selection.get() {
            debug!(institute = %institute.code, "seeding persisted institute selection");
            self.session.dispatch(Action::SetInstitute { institute });
        }
        self.refresh_identity().await
    }

    /// Create an account under the selected institute.
    pub async fn signup(&self) -> OpOutcome {
        self.session.dispatch(Action::Loading);
        let Some(institute) = self.selection.get() else {
            return self.tenant_missing_outcome(Route::Signup);
        };
        let payload = self.draft_payload(&institute);

        let generation = self.generations.begin(OpKind::Signup);
        let result = self.api.signup(&payload).await;
        if !self.generations.is_current(OpKind::Signup, generation) {
            debug!(generation, "dropping stale signup response");
            return OpOutcome::default();
        }

        match result {
            Ok(message) => {
                info!(institute = %institute.code, "signup accepted");
                self.session.dispatch(Action::UserSignup);
                self.session.dispatch(Action::SetInstitute { institute });
                OpOutcome {
                    notice: Some(Notice::Success(message)),
                    redirect: Some(Redirect::to(Route::Login)),
                }
            }
            Err(err) => self.failure_outcome("signup", &err),
        }
    }

    /// Sign in under the selected institute. On success the identity
    /// refresh is chained so the user payload lands in the same flow.
    pub async fn login(&self) -> OpOutcome {
        self.session.dispatch(Action::Loading);
        let Some(institute) = self.selection.get() else {
            return self.tenant_missing_outcome(Route::Login);
        };
        let payload = self.draft_payload(&institute);

        let generation = self.generations.begin(OpKind::Login);
        let result = self.api.login(&payload).await;
        if !self.generations.is_current(OpKind::Login, generation) {
            debug!(generation, "dropping stale login response");
            return OpOutcome::default();
        }

        match result {
            Ok(message) => {
                info!(institute = %institute.code, "login accepted");
                self.session.dispatch(Action::UserLogin);
                self.session.dispatch(Action::SetInstitute { institute });
                self.refresh_identity().await;
                OpOutcome {
                    notice: Some(Notice::Success(message)),
                    redirect: Some(Redirect::to(Route::Home)),
                }
            }
            Err(err) => self.failure_outcome("login", &err),
        }
    }

    /// End the server session. On success the session auth fields and the
    /// persisted selection are cleared together; on failure both are left
    /// untouched so a failed logout never strands a half-cleared session.
    pub async fn logout(&self) -> OpOutcome {
        self.session.dispatch(Action::Loading);
        let generation = self.generations.begin(OpKind::Logout);
        let result = self.api.logout().await;
        if !self.generations.is_current(OpKind::Logout, generation) {
            debug!(generation, "dropping stale logout response");
            return OpOutcome::default();
        }

        match result {
            Ok(()) => {
                info!("logout confirmed");
                self.session.dispatch(Action::UserLogout);
                self.selection.clear();
                OpOutcome {
                    notice: Some(Notice::Success("Logout successful".into())),
                    redirect: Some(Redirect::to(Route::SelectInstitute)),
                }
            }
            Err(err) => self.failure_outcome("logout", &err),
        }
    }

    /// Ask the server who the current user is. Anything short of a
    /// positive confirmation resets identity; no notice either way.
    pub async fn refresh_identity(&self) -> OpOutcome {
        self.session.dispatch(Action::Loading);
        let generation = self.generations.begin(OpKind::Refresh);
        let result = self.api.current_user().await;
        if !self.generations.is_current(OpKind::Refresh, generation) {
            debug!(generation, "dropping stale identity response");
            return OpOutcome::default();
        }

        match result {
            Ok(IdentityResponse { success: true, user: Some(user) }) => {
                self.session.dispatch(Action::LoadUser { user });
            }
            Ok(_) => {
                debug!("identity not confirmed");
                self.session.dispatch(Action::LoadUserError);
            }
            Err(err) => {
                debug!(error = %err, "identity refresh failed");
                self.session.dispatch(Action::LoadUserError);
            }
        }
        OpOutcome::default()
    }

    /// Fetch the institute directory, falling back to the built-in list
    /// when the server cannot provide one.
    pub async fn list_institutes(&self) -> Vec<InstituteRef> {
        match self.api.list_institutes().await {
            Ok(institutes) => institutes,
            Err(err) => {
                warn!(error = %err, "institute list unavailable, using local fallback");
                fallback_institutes()
            }
        }
    }

    /// Persist a chosen institute and seed it into the session.
    pub fn select_institute(&self, institute: InstituteRef) {
        self.selection.set(&institute);
        self.session.dispatch(Action::SetInstitute { institute });
    }

    /// Build the request body from the current draft; the tenant always
    /// comes from the selected institute, never from the raw draft field.
    fn draft_payload(&self, institute: &InstituteRef) -> CredentialPayload {
        let draft = self.session.snapshot().data;
        CredentialPayload {
            username: draft.username,
            email: draft.email,
            password: draft.password,
            institute_id: institute.id.clone(),
        }
    }

    /// Invariant I1: no credential call without a selected tenant. Resolved
    /// by redirecting to the selection screen, not by a hard error.
    fn tenant_missing_outcome(&self, intended: Route) -> OpOutcome {
        warn!(
            intended = intended.path(),
            error = %AuthError::TenantNotSelected,
            "credential operation refused"
        );
        self.session.dispatch(Action::OperationFailed);
        OpOutcome {
            notice: Some(Notice::Error(SELECT_INSTITUTE_NOTICE.into())),
            redirect: Some(Redirect {
                to: Route::SelectInstitute,
                return_to: Some(intended),
            }),
        }
    }

    /// Rejections surface the server message verbatim; transport failures
    /// and timeouts surface a generic internal error.
    fn failure_outcome(&self, op: &'static str, err: &AuthError) -> OpOutcome {
        self.session.dispatch(Action::OperationFailed);
        let message = match err {
            AuthError::Rejected(message) => {
                warn!(op, %message, "request rejected");
                message.clone()
            }
            AuthError::TenantNotSelected
            | AuthError::Transport(_)
            | AuthError::Timeout
            | AuthError::IdentityUnconfirmed => {
                warn!(op, error = %err, "request failed");
                INTERNAL_ERROR_NOTICE.to_owned()
            }
        };
        OpOutcome {
            notice: Some(Notice::Error(message)),
            redirect: None,
        }
    }
}
