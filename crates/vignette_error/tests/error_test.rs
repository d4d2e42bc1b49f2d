//! Tests for error classification and location tracking.

use vignette_error::{
    ConfigError, ContractError, ContractErrorKind, DatabaseError, DatabaseErrorKind,
    ForbiddenStateError, ForbiddenStateErrorKind, GenerationError, GenerationErrorKind,
    NotFoundError, NotFoundErrorKind, ValidationError, ValidationErrorKind, VignetteError,
    VignetteErrorKind,
};

#[test]
fn test_categories_are_distinguishable() {
    let validation: VignetteError =
        ValidationError::new(ValidationErrorKind::EmptyField("prompt")).into();
    let not_found: VignetteError =
        NotFoundError::new(NotFoundErrorKind::Part { index: 3, part_count: 3 }).into();
    let forbidden: VignetteError =
        ForbiddenStateError::new(ForbiddenStateErrorKind::NotSplit("p1".to_string())).into();

    assert!(validation.is_validation());
    assert!(not_found.is_not_found());
    assert!(forbidden.is_forbidden());
    assert!(!forbidden.is_not_found());
}

#[test]
fn test_upstream_covers_generation_and_contract() {
    let generation: VignetteError = GenerationError::new(GenerationErrorKind::EmptyReply).into();
    let contract: VignetteError = ContractError::new(ContractErrorKind::NotAnObject).into();
    let database: VignetteError =
        DatabaseError::new(DatabaseErrorKind::Query("boom".to_string())).into();

    assert!(generation.is_upstream());
    assert!(contract.is_upstream());
    assert!(!database.is_upstream());
    assert!(matches!(database.kind(), VignetteErrorKind::Database(_)));
}

#[test]
fn test_location_is_captured() {
    let err = ConfigError::new("missing key");
    assert!(err.file.ends_with("error_test.rs"));
    assert!(err.line > 0);

    let wrapped: VignetteError = err.into();
    assert!(wrapped.to_string().contains("missing key"));
}

#[test]
fn test_display_includes_kind_details() {
    let err = ValidationError::new(ValidationErrorKind::PartCountOutOfRange { count: 11, max: 10 });
    assert!(err.to_string().contains("Invalid count 11, must be between 1 and 10"));

    let err = ContractError::new(ContractErrorKind::CountMismatch {
        expected: 3,
        actual: 2,
    });
    assert!(err.to_string().contains("Expected 3 parts, model returned 2"));
}
