use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::domain::common::entities::app_errors::CoreError;

/// Widest `{ ... }` span in the text, from the first opening brace to the last closing one.
static GREEDY_OBJECT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\{.*\}").expect("greedy object pattern is valid")
});

/// What a pipeline does when the model reply cannot be turned into the expected shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnParseFailure {
    /// Surface `CoreError::InvalidAiResponseFormat` to the caller.
    Throw,
    /// Hand back the empty value of the target type.
    EmptyResult,
}

/// Pulls a JSON value out of free-form model output.
///
/// Strategies, in order:
/// 1. strict parse of the trimmed text
/// 2. the greedy span from the first `{` to the last `}`
/// 3. balanced-brace objects found by scanning, largest first
pub fn extract_json(text: &str) -> Result<Value, CoreError> {
    let trimmed = text.trim();

    if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
        return Ok(value);
    }

    if let Some(found) = GREEDY_OBJECT.find(trimmed) {
        if let Ok(value) = serde_json::from_str::<Value>(found.as_str()) {
            return Ok(value);
        }
    }

    let mut candidates = balanced_objects(trimmed);
    candidates.sort_by_key(|candidate| std::cmp::Reverse(candidate.len()));

    candidates
        .into_iter()
        .find_map(|candidate| serde_json::from_str::<Value>(candidate).ok())
        .ok_or_else(|| {
            tracing::warn!(
                response_len = text.len(),
                "no JSON object could be extracted from model response"
            );
            CoreError::InvalidAiResponseFormat
        })
}

/// Extracts JSON from `text` and maps it with `shape`, applying `policy` when either step fails.
pub fn parse_with_policy<T, F>(text: &str, policy: OnParseFailure, shape: F) -> Result<T, CoreError>
where
    T: Default,
    F: FnOnce(Value) -> Option<T>,
{
    let shaped = extract_json(text).and_then(|value| {
        shape(value).ok_or_else(|| {
            tracing::warn!("model response JSON does not have the expected shape");
            CoreError::InvalidAiResponseFormat
        })
    });

    match (shaped, policy) {
        (Ok(value), _) => Ok(value),
        (Err(e), OnParseFailure::Throw) => Err(e),
        (Err(_), OnParseFailure::EmptyResult) => Ok(T::default()),
    }
}

/// Top-level `{ ... }` substrings whose braces balance, ignoring braces inside JSON strings.
fn balanced_objects(text: &str) -> Vec<&str> {
    let mut objects = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (index, ch) in text.char_indices() {
        if depth > 0 && in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match ch {
            '"' if depth > 0 => in_string = true,
            '{' => {
                if depth == 0 {
                    start = index;
                }
                depth += 1;
            }
            '}' if depth > 0 => {
                depth -= 1;
                if depth == 0 {
                    objects.push(&text[start..=index]);
                }
            }
            _ => {}
        }
    }

    objects
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_strict_parse_of_trimmed_text() {
        let value = extract_json("  {\"monday\": {\"breakfast\": \"Poha\"}}\n").unwrap();
        assert_eq!(value, json!({"monday": {"breakfast": "Poha"}}));
    }

    #[test]
    fn test_leading_prose_is_ignored() {
        let text = "Here is your plan: {\"monday\":{\"breakfast\":\"Poha\"}, \"tuesday\":{\"breakfast\":\"Idli\"}}";
        let value = extract_json(text).unwrap();
        assert_eq!(value["monday"]["breakfast"], "Poha");
        assert_eq!(value["tuesday"]["breakfast"], "Idli");
    }

    #[test]
    fn test_markdown_fence_is_ignored() {
        let text = "```json\n{\"grouped\": [], \"consolidated\": [\"rice\"]}\n```";
        let value = extract_json(text).unwrap();
        assert_eq!(value["consolidated"], json!(["rice"]));
    }

    #[test]
    fn test_balanced_scan_recovers_when_greedy_span_is_invalid() {
        let text = "Plan {\"monday\": {\"lunch\": \"Dal {spicy}\"}} and a note {not json}";
        let value = extract_json(text).unwrap();
        assert_eq!(value["monday"]["lunch"], "Dal {spicy}");
    }

    #[test]
    fn test_largest_balanced_object_wins() {
        let text = "{\"a\": 1} then {\"b\": {\"c\": 2}, \"d\": 3} then {oops";
        let value = extract_json(text).unwrap();
        assert_eq!(value, json!({"b": {"c": 2}, "d": 3}));
    }

    #[test]
    fn test_non_json_response_is_an_error() {
        let err = extract_json("Sorry, I cannot help with that.").unwrap_err();
        assert_eq!(err, CoreError::InvalidAiResponseFormat);
        assert_eq!(err.to_string(), "Invalid AI response format");
    }

    #[test]
    fn test_throw_policy_surfaces_shape_mismatch() {
        let result: Result<Vec<String>, _> =
            parse_with_policy("[1, 2]", OnParseFailure::Throw, |value| {
                value.as_object().map(|_| Vec::new())
            });
        assert_eq!(result.unwrap_err(), CoreError::InvalidAiResponseFormat);
    }

    #[test]
    fn test_empty_result_policy_swallows_failures() {
        let result: Vec<String> =
            parse_with_policy("garbage", OnParseFailure::EmptyResult, |_| {
                Some(vec!["unreachable".to_string()])
            })
            .unwrap();
        assert!(result.is_empty());
    }
}
