//! Parsing of the structured part-list reply.
//!
//! The split prompt asks the model for a JSON object keyed by part number:
//!
//! ```json
//! { "1": { "title": "...", "description": "..." }, "2": { ... } }
//! ```
//!
//! Models frequently wrap that object in a markdown code fence, so a single
//! fenced block is unwrapped before decoding.

use serde_json::{Map, Value};
use vignette_core::PartDraft;
use vignette_error::{ContractError, ContractErrorKind, VignetteResult};

/// Parse a part-list reply into drafts ordered by their numeric key.
///
/// Keys must be positive integers forming exactly `1..=n`; each value must be
/// an object with string `title` and `description` fields. Key order in the
/// raw text does not matter, and `"10"` sorts after `"9"`.
///
/// # Errors
///
/// Returns a contract error if the reply is not JSON, not an object, empty,
/// has a non-numeric or out-of-sequence key, or a part lacks a string field.
///
/// # Examples
///
/// ```
/// use vignette_workflow::parse_parts;
///
/// let raw = r#"{"2": {"title": "End", "description": "d2"},
///               "1": {"title": "Start", "description": "d1"}}"#;
/// let parts = parse_parts(raw).unwrap();
/// assert_eq!(parts[0].title, "Start");
/// assert_eq!(parts[1].title, "End");
/// ```
#[tracing::instrument(skip(raw), fields(raw_len = raw.len()))]
pub fn parse_parts(raw: &str) -> VignetteResult<Vec<PartDraft>> {
    let body = strip_code_fence(raw);

    let value: Value = serde_json::from_str(body).map_err(|e| {
        tracing::warn!(error = %e, "Part list reply is not valid JSON");
        ContractError::new(ContractErrorKind::Decode(e.to_string()))
    })?;

    let Value::Object(map) = value else {
        return Err(ContractError::new(ContractErrorKind::NotAnObject).into());
    };

    if map.is_empty() {
        return Err(ContractError::new(ContractErrorKind::Empty).into());
    }

    let mut numbered = numbered_parts(&map)?;
    numbered.sort_by_key(|(number, _)| *number);

    let count = numbered.len();
    if numbered
        .iter()
        .enumerate()
        .any(|(position, (number, _))| *number != position + 1)
    {
        return Err(ContractError::new(ContractErrorKind::NonSequentialKeys(count)).into());
    }

    tracing::debug!(count, "Parsed part list");
    Ok(numbered.into_iter().map(|(_, draft)| draft).collect())
}

/// Parse a part-list reply and require exactly `expected` parts.
///
/// # Errors
///
/// Everything [`parse_parts`] rejects, plus a count mismatch.
pub fn parse_parts_exact(raw: &str, expected: usize) -> VignetteResult<Vec<PartDraft>> {
    let drafts = parse_parts(raw)?;
    if drafts.len() != expected {
        tracing::warn!(expected, actual = drafts.len(), "Model returned wrong part count");
        return Err(ContractError::new(ContractErrorKind::CountMismatch {
            expected,
            actual: drafts.len(),
        })
        .into());
    }
    Ok(drafts)
}

fn numbered_parts(map: &Map<String, Value>) -> VignetteResult<Vec<(usize, PartDraft)>> {
    map.iter()
        .map(|(key, value)| -> VignetteResult<(usize, PartDraft)> {
            let number = key
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|n| *n >= 1)
                .ok_or_else(|| ContractError::new(ContractErrorKind::InvalidKey(key.clone())))?;

            let draft = PartDraft {
                title: string_field(key, value, "title")?,
                description: string_field(key, value, "description")?,
            };
            Ok((number, draft))
        })
        .collect()
}

fn string_field(key: &str, value: &Value, field: &'static str) -> VignetteResult<String> {
    value
        .get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| {
            ContractError::new(ContractErrorKind::MissingField {
                key: key.to_string(),
                field,
            })
            .into()
        })
}

/// Unwrap a single markdown code fence (```json or bare ```), if present.
fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    // Optional language tag, ending at whitespace or where the JSON starts
    let tag_end = rest
        .find(|c: char| c.is_whitespace() || c == '{' || c == '[')
        .unwrap_or(rest.len());
    let body = &rest[tag_end..];
    let body = body.rfind("```").map_or(body, |end| &body[..end]);
    body.trim()
}
