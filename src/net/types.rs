//! Wire types shared by the auth gateway and the session state machine.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A tenant the user can sign in under. Immutable once selected.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstituteRef {
    /// Server-assigned identifier. Accepts Mongo-style `_id` on the wire.
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

/// Opaque server-defined identity payload. Only presence matters here;
/// the raw value is kept for display by the embedding application.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserRecord(pub serde_json::Value);

impl UserRecord {
    /// True when the payload carries no identity (JSON null or `{}`).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match &self.0 {
            serde_json::Value::Null => true,
            serde_json::Value::Object(map) => map.is_empty(),
            _ => false,
        }
    }
}

/// Request body for `POST /api/signup` and `POST /api/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialPayload {
    pub username: String,
    pub email: String,
    pub password: String,
    /// Always taken from the selected institute, never from the raw draft.
    pub institute_id: String,
}

/// `{message}` body returned by signup/login on both success and rejection.
#[derive(Debug, Default, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// `GET /api/me` response. `success=false` means "not logged in".
#[derive(Clone, Debug, Default, Deserialize)]
pub struct IdentityResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub user: Option<UserRecord>,
}

/// `GET /api/institutes` response.
#[derive(Debug, Default, Deserialize)]
pub struct InstituteListResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub institutes: Vec<InstituteRef>,
}

/// Local directory used when the institute listing cannot be fetched.
#[must_use]
pub fn fallback_institutes() -> Vec<InstituteRef> {
    [
        ("1", "ITCEW Institute", "ITCEW"),
        ("2", "Tech University", "TECHU"),
        ("3", "Engineering College", "ENGC"),
        ("4", "Business School", "BUSCH"),
    ]
    .into_iter()
    .map(|(id, name, code)| InstituteRef {
        id: id.into(),
        name: name.into(),
        code: code.into(),
        logo: None,
    })
    .collect()
}

/// Case-insensitive substring match on institute name or code.
#[must_use]
pub fn filter_institutes(institutes: &[InstituteRef], search: &str) -> Vec<InstituteRef> {
    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        return institutes.to_vec();
    }
    institutes
        .iter()
        .filter(|i| i.name.to_lowercase().contains(&needle) || i.code.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
