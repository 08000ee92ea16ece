use super::*;

// =============================================================================
// InstituteRef
// =============================================================================

#[test]
fn institute_deserializes_plain_id() {
    let i: InstituteRef = serde_json::from_str(r#"{"id":"1","name":"ITCEW Institute","code":"ITCEW"}"#).unwrap();
    assert_eq!(i.id, "1");
    assert!(i.logo.is_none());
}

#[test]
fn institute_deserializes_mongo_id_alias() {
    let i: InstituteRef =
        serde_json::from_str(r#"{"_id":"64ab","name":"Tech University","code":"TECHU","logo":"/image/logo.jpeg"}"#)
            .unwrap();
    assert_eq!(i.id, "64ab");
    assert_eq!(i.logo.as_deref(), Some("/image/logo.jpeg"));
}

#[test]
fn institute_serializes_without_null_logo() {
    let i = InstituteRef {
        id: "1".into(),
        name: "ITCEW Institute".into(),
        code: "ITCEW".into(),
        logo: None,
    };
    let json = serde_json::to_string(&i).unwrap();
    assert!(!json.contains("logo"));
}

// =============================================================================
// UserRecord
// =============================================================================

#[test]
fn user_record_null_is_empty() {
    assert!(UserRecord(serde_json::Value::Null).is_empty());
}

#[test]
fn user_record_empty_object_is_empty() {
    assert!(UserRecord(serde_json::json!({})).is_empty());
}

#[test]
fn user_record_with_fields_is_not_empty() {
    assert!(!UserRecord(serde_json::json!({"username": "alice"})).is_empty());
}

// =============================================================================
// CredentialPayload
// =============================================================================

#[test]
fn payload_serializes_institute_id_camel_case() {
    let payload = CredentialPayload {
        username: "alice".into(),
        email: "a@x.com".into(),
        password: "p".into(),
        institute_id: "1".into(),
    };
    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(json["instituteId"], "1");
    assert_eq!(json["username"], "alice");
}

// =============================================================================
// Response shapes
// =============================================================================

#[test]
fn message_response_tolerates_missing_message() {
    let r: MessageResponse = serde_json::from_str("{}").unwrap();
    assert!(r.message.is_none());
}

#[test]
fn identity_response_defaults_to_unconfirmed() {
    let r: IdentityResponse = serde_json::from_str("{}").unwrap();
    assert!(!r.success);
    assert!(r.user.is_none());
}

#[test]
fn identity_response_parses_user_payload() {
    let r: IdentityResponse = serde_json::from_str(r#"{"success":true,"user":{"username":"alice"}}"#).unwrap();
    assert!(r.success);
    assert!(!r.user.unwrap().is_empty());
}

#[test]
fn institute_list_response_defaults_empty() {
    let r: InstituteListResponse = serde_json::from_str("{}").unwrap();
    assert!(!r.success);
    assert!(r.institutes.is_empty());
}

// =============================================================================
// fallback_institutes / filter_institutes
// =============================================================================

#[test]
fn fallback_list_is_not_empty() {
    let list = fallback_institutes();
    assert!(!list.is_empty());
    assert!(list.iter().any(|i| i.code == "ITCEW"));
}

#[test]
fn filter_matches_name_case_insensitive() {
    let list = fallback_institutes();
    let hits = filter_institutes(&list, "tech");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].code, "TECHU");
}

#[test]
fn filter_matches_code() {
    let list = fallback_institutes();
    let hits = filter_institutes(&list, "ENGC");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Engineering College");
}

#[test]
fn filter_blank_search_returns_all() {
    let list = fallback_institutes();
    assert_eq!(filter_institutes(&list, "   ").len(), list.len());
}

#[test]
fn filter_no_match_returns_empty() {
    let list = fallback_institutes();
    assert!(filter_institutes(&list, "zzz").is_empty());
}
