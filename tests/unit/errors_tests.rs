/*!
 * Tests for error types and conversions
 */

use famform::errors::{FormError, PageError, SubmissionError};

#[test]
fn test_pageError_unknownContainer_shouldDisplayCorrectly() {
    let error = PageError::UnknownContainer("hobby_list".to_string());
    let display = format!("{}", error);
    assert!(display.contains("Unknown container"));
    assert!(display.contains("hobby_list"));
}

#[test]
fn test_pageError_duplicateContainer_shouldDisplayCorrectly() {
    let error = PageError::DuplicateContainer("name_group".to_string());
    let display = format!("{}", error);
    assert!(display.contains("Duplicate container"));
    assert!(display.contains("name_group"));
}

#[test]
fn test_pageError_duplicateInput_shouldDisplayCorrectly() {
    let error = PageError::DuplicateInput("mobno".to_string());
    let display = format!("{}", error);
    assert!(display.contains("Duplicate input"));
    assert!(display.contains("mobno"));
}

#[test]
fn test_pageError_radioWithoutValue_shouldDisplayCorrectly() {
    let error = PageError::RadioWithoutValue("marital_status".to_string());
    let display = format!("{}", error);
    assert!(display.contains("Radio inputs require a choice value"));
    assert!(display.contains("marital_status"));
}

#[test]
fn test_submissionError_parse_shouldDisplayCorrectly() {
    let error = SubmissionError::Parse("unexpected end of input".to_string());
    let display = format!("{}", error);
    assert!(display.contains("Failed to parse submission response"));
    assert!(display.contains("unexpected end of input"));
}

#[test]
fn test_submissionError_fromSerdeError_shouldWrapAsParse() {
    let serde_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error: SubmissionError = serde_error.into();
    let display = format!("{}", error);
    assert!(display.contains("Failed to parse submission response"));
}

#[test]
fn test_formError_fromPageError_shouldWrapCorrectly() {
    let page_error = PageError::UnknownContainer("member_list".to_string());
    let form_error: FormError = page_error.into();
    let display = format!("{}", form_error);
    assert!(display.contains("Page error"));
    assert!(display.contains("member_list"));
}

#[test]
fn test_formError_fromSubmissionError_shouldWrapCorrectly() {
    let submission_error = SubmissionError::Parse("bad body".to_string());
    let form_error: FormError = submission_error.into();
    let display = format!("{}", form_error);
    assert!(display.contains("Submission error"));
    assert!(display.contains("bad body"));
}

#[test]
fn test_formError_fromAnyhowError_shouldWrapAsUnknown() {
    let anyhow_error = anyhow::anyhow!("Something went wrong");
    let form_error: FormError = anyhow_error.into();
    let display = format!("{}", form_error);
    assert!(display.contains("Unknown error"));
    assert!(display.contains("Something went wrong"));
}

#[test]
fn test_formError_field_shouldDisplayCorrectly() {
    let error = FormError::Field("no such field: members-9-member_name".to_string());
    let display = format!("{}", error);
    assert!(display.contains("Field error"));
    assert!(display.contains("members-9-member_name"));
}

#[test]
fn test_pageError_debug_shouldBeImplemented() {
    let error = PageError::DuplicateInput("name".to_string());
    let debug = format!("{:?}", error);
    assert!(debug.contains("DuplicateInput"));
}

#[test]
fn test_formError_debug_shouldBeImplemented() {
    let error: FormError = PageError::UnknownContainer("x".to_string()).into();
    let debug = format!("{:?}", error);
    assert!(debug.contains("Page"));
}
