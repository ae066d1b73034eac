use super::*;

// =============================================================
// extract_error_message — body polymorphism
// =============================================================

#[test]
fn extracts_error_key() {
    assert_eq!(
        extract_error_message(r#"{"error":"Invalid username or password"}"#).as_deref(),
        Some("Invalid username or password")
    );
}

#[test]
fn extracts_message_key() {
    assert_eq!(
        extract_error_message(r#"{"message":"Task not found"}"#).as_deref(),
        Some("Task not found")
    );
}

#[test]
fn error_key_wins_over_message_key() {
    assert_eq!(
        extract_error_message(r#"{"error":"a","message":"b"}"#).as_deref(),
        Some("a")
    );
}

#[test]
fn extracts_bare_json_string() {
    assert_eq!(
        extract_error_message(r#""something broke""#).as_deref(),
        Some("something broke")
    );
}

#[test]
fn falls_back_to_plaintext_body() {
    assert_eq!(
        extract_error_message("Bad Gateway").as_deref(),
        Some("Bad Gateway")
    );
}

#[test]
fn empty_and_unusable_bodies_yield_none() {
    assert!(extract_error_message("").is_none());
    assert!(extract_error_message("   ").is_none());
    assert!(extract_error_message("{}").is_none());
    assert!(extract_error_message(r#"{"error":42}"#).is_none());
    assert!(extract_error_message("[1,2]").is_none());
}

// =============================================================
// classify_response — taxonomy
// =============================================================

#[test]
fn status_401_is_auth_rejected() {
    let error = classify_response(401, r#"{"error":"Missing authentication token"}"#);
    assert_eq!(
        error,
        ApiError::AuthRejected {
            status: 401,
            message: "Missing authentication token".to_owned(),
        }
    );
    assert!(error.is_auth_rejected());
}

#[test]
fn other_4xx_is_validation() {
    let error = classify_response(400, r#"{"error":"Description is required"}"#);
    assert_eq!(error.status(), Some(400));
    assert!(matches!(error, ApiError::Validation { .. }));
}

#[test]
fn status_404_is_validation_class() {
    let error = classify_response(404, r#"{"error":"Task not found"}"#);
    assert!(matches!(error, ApiError::Validation { status: 404, .. }));
}

#[test]
fn status_5xx_is_server() {
    let error = classify_response(500, "");
    assert_eq!(
        error,
        ApiError::Server {
            status: 500,
            message: "Server error (500)".to_owned(),
        }
    );
}

#[test]
fn out_of_range_status_is_unknown() {
    let error = classify_response(302, "");
    assert!(matches!(error, ApiError::Unknown { .. }));
    assert_eq!(error.status(), None);
}

// =============================================================
// Display / helpers
// =============================================================

#[test]
fn display_is_the_bare_message() {
    let error = classify_response(500, r#"{"error":"boom"}"#);
    assert_eq!(error.to_string(), "boom");
    assert_eq!(ApiError::transport("no route to host").to_string(), "no route to host");
}

#[test]
fn transport_and_unknown_carry_no_status() {
    assert_eq!(ApiError::transport("x").status(), None);
    assert_eq!(ApiError::unknown("x").status(), None);
}
