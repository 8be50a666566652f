//! Tests for error types

use race_timeout::core::RaceError;

#[test]
fn test_deadline_elapsed_error() {
    let err = RaceError::DeadlineElapsed { deadline_ms: 20 };
    assert_eq!(format!("{}", err), "deadline of 20ms elapsed");
}

#[test]
fn test_invalid_config_error() {
    let err = RaceError::InvalidConfig("default_deadline_ms must be greater than 0".to_string());
    assert_eq!(
        format!("{}", err),
        "invalid configuration: default_deadline_ms must be greater than 0"
    );
}

#[test]
fn test_runtime_unavailable_error() {
    let err = RaceError::RuntimeUnavailable("no reactor".to_string());
    assert_eq!(format!("{}", err), "runtime unavailable: no reactor");
}

#[test]
fn test_race_error_into_anyhow() {
    let result: race_timeout::core::AppResult<()> =
        Err(RaceError::DeadlineElapsed { deadline_ms: 5 }.into());
    let err = result.unwrap_err();
    assert_eq!(
        err.downcast_ref::<RaceError>(),
        Some(&RaceError::DeadlineElapsed { deadline_ms: 5 })
    );
}
