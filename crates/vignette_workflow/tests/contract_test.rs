//! Tests for the part-list contract parser.

mod test_utils;

use test_utils::parts_json;
use vignette_error::{ContractErrorKind, VignetteErrorKind};
use vignette_workflow::{parse_parts, parse_parts_exact};

fn contract_kind(raw: &str) -> ContractErrorKind {
    match parse_parts(raw).unwrap_err().kind() {
        VignetteErrorKind::Contract(err) => err.kind.clone(),
        other => panic!("expected contract error, got {other}"),
    }
}

#[test]
fn test_parses_well_formed_reply() -> anyhow::Result<()> {
    let parts = parse_parts(&parts_json(3))?;

    assert_eq!(parts.len(), 3);
    assert_eq!(parts[0].title, "Part 1");
    assert_eq!(parts[2].description, "Scene 3 of the robot");
    Ok(())
}

#[test]
fn test_orders_by_numeric_key() -> anyhow::Result<()> {
    let entries: Vec<String> = [10, 2, 1, 9, 3, 4, 5, 6, 7, 8]
        .iter()
        .map(|n| format!(r#""{n}": {{"title": "T{n}", "description": "D{n}"}}"#))
        .collect();
    let raw = format!("{{{}}}", entries.join(","));

    let titles: Vec<String> = parse_parts(&raw)?.into_iter().map(|p| p.title).collect();
    let expected: Vec<String> = (1..=10).map(|n| format!("T{n}")).collect();
    assert_eq!(titles, expected);
    Ok(())
}

#[test]
fn test_accepts_fenced_reply() -> anyhow::Result<()> {
    let raw = format!("```json\n{}\n```", parts_json(2));
    assert_eq!(parse_parts(&raw)?.len(), 2);
    Ok(())
}

#[test]
fn test_accepts_single_line_fenced_reply() -> anyhow::Result<()> {
    let raw = r#"```json {"1": {"title": "Dawn", "description": "A field"}}```"#;
    let parts = parse_parts(raw)?;
    assert_eq!(parts.len(), 1);
    assert_eq!(parts[0].title, "Dawn");
    Ok(())
}

#[test]
fn test_rejects_prose() {
    assert!(matches!(
        contract_kind("Sure! Here are your parts."),
        ContractErrorKind::Decode(_)
    ));
}

#[test]
fn test_rejects_non_object() {
    assert_eq!(
        contract_kind(r#"[{"title": "a", "description": "b"}]"#),
        ContractErrorKind::NotAnObject
    );
}

#[test]
fn test_rejects_empty_object() {
    assert_eq!(contract_kind("{}"), ContractErrorKind::Empty);
}

#[test]
fn test_rejects_non_numeric_key() {
    assert_eq!(
        contract_kind(r#"{"first": {"title": "a", "description": "b"}}"#),
        ContractErrorKind::InvalidKey("first".to_string())
    );
    assert_eq!(
        contract_kind(r#"{"0": {"title": "a", "description": "b"}}"#),
        ContractErrorKind::InvalidKey("0".to_string())
    );
}

#[test]
fn test_rejects_gap_in_keys() {
    let raw = r#"{"1": {"title": "a", "description": "b"},
                  "3": {"title": "c", "description": "d"}}"#;
    assert_eq!(contract_kind(raw), ContractErrorKind::NonSequentialKeys(2));
}

#[test]
fn test_rejects_missing_or_non_string_fields() {
    assert_eq!(
        contract_kind(r#"{"1": {"title": "a"}}"#),
        ContractErrorKind::MissingField {
            key: "1".to_string(),
            field: "description",
        }
    );
    assert_eq!(
        contract_kind(r#"{"1": {"title": 7, "description": "b"}}"#),
        ContractErrorKind::MissingField {
            key: "1".to_string(),
            field: "title",
        }
    );
}

#[test]
fn test_exact_count_is_enforced() {
    let err = parse_parts_exact(&parts_json(2), 3).unwrap_err();
    match err.kind() {
        VignetteErrorKind::Contract(err) => assert_eq!(
            err.kind,
            ContractErrorKind::CountMismatch {
                expected: 3,
                actual: 2
            }
        ),
        other => panic!("expected contract error, got {other}"),
    }
    assert!(parse_parts_exact(&parts_json(3), 3).is_ok());
}
