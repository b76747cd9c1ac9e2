// Unit tests for error handling
use std::io;
use tagsort_core::error::TagsortError;

#[test]
fn test_error_from_io() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let err: TagsortError = io_err.into();

    assert!(matches!(err, TagsortError::Io(_)));
    assert!(err.to_string().contains("I/O error"));
}

#[test]
fn test_error_parse() {
    let err = TagsortError::parse("unexpected token");
    assert!(matches!(err, TagsortError::Parse(_)));
    assert_eq!(err.to_string(), "Parse error: unexpected token");
}

#[test]
fn test_error_missing_input() {
    let err = TagsortError::missing_input("sources");
    assert!(matches!(err, TagsortError::MissingInput(_)));
    assert_eq!(err.to_string(), "Missing required input: sources");
}

#[test]
fn test_error_invalid_config() {
    let err = TagsortError::invalid_config("bad flag");
    assert_eq!(err.to_string(), "Invalid configuration: bad flag");
}

#[test]
fn test_error_from_strings() {
    let err: TagsortError = "plain message".into();
    assert!(matches!(err, TagsortError::Other(_)));
    assert_eq!(err.to_string(), "plain message");

    let err: TagsortError = String::from("owned").into();
    assert_eq!(err.to_string(), "owned");
}

#[test]
fn test_error_from_serde_json() {
    let json_err = serde_json::from_str::<Vec<String>>("not json").unwrap_err();
    let err: TagsortError = json_err.into();
    assert!(matches!(err, TagsortError::Parse(_)));
}

#[test]
fn test_error_from_regex() {
    let regex_err = regex::Regex::new("[").unwrap_err();
    let err: TagsortError = regex_err.into();
    assert!(matches!(err, TagsortError::InvalidConfig(_)));
}
