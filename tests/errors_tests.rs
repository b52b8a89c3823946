use std::error::Error;
use minutemind::errors::MinutesError;

#[test]
fn test_minutes_error_implements_error_trait() {
    // Verify MinutesError implements the Error trait
    fn assert_error<T: Error>(_: &T) {}

    let error = MinutesError::Parse("test error".to_string());
    assert_error(&error);
}

#[test]
fn test_minutes_error_display() {
    let error = MinutesError::Provider("Invalid API Key".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to access text-generation provider: Invalid API Key"
    );

    let error = MinutesError::Delivery("535 Authentication failed".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to deliver email: 535 Authentication failed"
    );

    let error = MinutesError::missing_fields(&["transcript"]);
    assert_eq!(format!("{error}"), "Missing required field(s): transcript");
}

#[test]
fn test_status_codes() {
    assert_eq!(MinutesError::Validation("x".into()).status_code(), 400);
    assert_eq!(MinutesError::Parse("x".into()).status_code(), 400);
    assert_eq!(MinutesError::NotFound("/x".into()).status_code(), 404);
    assert_eq!(MinutesError::MethodNotAllowed("GET".into()).status_code(), 405);
    assert_eq!(MinutesError::Config("x".into()).status_code(), 500);
    assert_eq!(MinutesError::Provider("x".into()).status_code(), 500);
    assert_eq!(MinutesError::Delivery("x".into()).status_code(), 500);
    assert_eq!(MinutesError::HttpError("x".into()).status_code(), 500);
    assert_eq!(
        MinutesError::Api {
            status: 502,
            message: "bad gateway".into()
        }
        .status_code(),
        502
    );
}

#[test]
fn test_minutes_error_from_conversions() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let minutes_err: MinutesError = json_err.into();
    assert_eq!(minutes_err.status_code(), 400);

    // Compile-time check that the reqwest conversion exists
    #[allow(unused)]
    #[allow(clippy::items_after_statements)]
    fn _check_reqwest_conversion(err: reqwest::Error) -> MinutesError {
        MinutesError::from(err)
    }
}
