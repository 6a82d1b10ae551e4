//! Custom assertion macros and utilities

/// Assert that a response has the given status, printing the body otherwise
#[macro_export]
macro_rules! assert_status {
    ($response:expr, $status:expr) => {
        assert_eq!(
            $response.status, $status,
            "unexpected status, body: {}",
            $response.body
        );
    };
}

/// Assert that a JSON error body names `field` in its `details`
#[macro_export]
macro_rules! assert_field_error {
    ($body:expr, $field:expr) => {
        let details = $body["details"]
            .as_array()
            .unwrap_or_else(|| panic!("no details in error body: {}", $body));
        assert!(
            details.iter().any(|d| d["field"] == $field),
            "Expected a field error for '{}' in {}",
            $field,
            $body
        );
    };
}
