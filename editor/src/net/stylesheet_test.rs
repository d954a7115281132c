use super::*;

#[test]
fn status_error_names_path_and_code() {
    let err = StylesheetError::Status { path: "default-style.css".to_owned(), status: 404 };
    assert_eq!(err.to_string(), "stylesheet request for default-style.css returned status 404");
}

#[test]
fn request_error_wraps_message() {
    let err = StylesheetError::Request("network down".to_owned());
    assert_eq!(err.to_string(), "stylesheet request failed: network down");
}

#[cfg(not(feature = "csr"))]
#[test]
fn native_build_reports_unavailable() {
    let result = pollster::block_on(fetch_stylesheet("default-style.css"));
    assert_eq!(result, Err(StylesheetError::Unavailable));
}
