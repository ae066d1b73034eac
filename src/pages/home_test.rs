use super::*;

#[test]
fn banner_message_names_the_action_and_cause() {
    let error = ApiError::Validation {
        status: 400,
        message: "Description is required".to_owned(),
    };
    assert_eq!(
        action_failed_message("create task", &error),
        "Failed to create task: Description is required"
    );
}

#[test]
fn banner_message_uses_transport_text_when_no_response_arrived() {
    let error = ApiError::transport("connection refused");
    assert_eq!(
        action_failed_message("fetch tasks", &error),
        "Failed to fetch tasks: connection refused"
    );
}
