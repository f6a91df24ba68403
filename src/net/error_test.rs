use super::*;

// =============================================================
// from_status
// =============================================================

#[test]
fn success_statuses_are_not_errors() {
    assert!(ApiError::from_status(200, "").is_none());
    assert!(ApiError::from_status(204, "").is_none());
}

#[test]
fn statuses_map_to_taxonomy() {
    assert_eq!(ApiError::from_status(401, ""), Some(ApiError::Unauthorized));
    assert_eq!(ApiError::from_status(403, ""), Some(ApiError::Forbidden));
    assert_eq!(ApiError::from_status(404, ""), Some(ApiError::NotFound));
    assert_eq!(ApiError::from_status(500, ""), Some(ApiError::Server));
    assert_eq!(
        ApiError::from_status(409, r#"{"detail":"Book already borrowed"}"#),
        Some(ApiError::Status { status: 409, detail: Some("Book already borrowed".to_owned()) })
    );
}

#[test]
fn bad_request_carries_detail() {
    assert_eq!(
        ApiError::from_status(400, r#"{"detail":"Invalid email"}"#),
        Some(ApiError::BadRequest { detail: Some("Invalid email".to_owned()) })
    );
}

#[test]
fn server_fault_covers_all_5xx() {
    assert!(ApiError::Server.is_server_fault());
    assert!(ApiError::from_status(503, "").expect("err").is_server_fault());
    assert!(!ApiError::from_status(409, "").expect("err").is_server_fault());
    assert!(!ApiError::Network("offline".to_owned()).is_server_fault());
}

// =============================================================
// detail_text
// =============================================================

#[test]
fn detail_text_reads_string_detail() {
    assert_eq!(detail_text(r#"{"detail":"  Invalid email "}"#).as_deref(), Some("Invalid email"));
}

#[test]
fn detail_text_joins_validation_messages() {
    let body = r#"{"detail":[{"loc":["body","email"],"msg":"field required"},{"msg":"too short"}]}"#;
    assert_eq!(detail_text(body).as_deref(), Some("field required; too short"));
}

#[test]
fn detail_text_falls_back_to_message() {
    assert_eq!(detail_text(r#"{"message":"quota exceeded"}"#).as_deref(), Some("quota exceeded"));
}

#[test]
fn detail_text_ignores_non_json_and_blank() {
    assert!(detail_text("<html>502</html>").is_none());
    assert!(detail_text(r#"{"detail":""}"#).is_none());
    assert!(detail_text(r#"{"detail":[]}"#).is_none());
    assert!(detail_text("").is_none());
}

// =============================================================
// notice_message
// =============================================================

#[test]
fn bad_request_notice_contains_server_text() {
    let err = ApiError::BadRequest { detail: Some("Invalid email".to_owned()) };
    assert!(err.notice_message().contains("Invalid email"));
}

#[test]
fn other_status_notice_uses_detail_or_status() {
    let with_detail = ApiError::Status { status: 409, detail: Some("Already reserved".to_owned()) };
    assert_eq!(with_detail.notice_message(), "Request failed: Already reserved");
    let without = ApiError::Status { status: 418, detail: None };
    assert_eq!(without.notice_message(), "Request failed (418).");
}

#[test]
fn rejected_notice_is_server_message() {
    let err = ApiError::Rejected { code: Some("1001".to_owned()), message: "Username taken".to_owned() };
    assert_eq!(err.notice_message(), "Username taken");
}
