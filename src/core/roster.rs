use crate::domain::model::Roster;
use crate::utils::error::{Result, SummaryError};

/// Interprets the model's roster-extraction response as a Roster.
///
/// Vision models rarely return bare JSON; the payload is usually wrapped in
/// prose or a code fence. The first JSON-object-shaped substring that parses
/// as an object of string values wins. Duplicate keys follow object literal
/// semantics (last occurrence wins). A short roster is not an error here;
/// completeness is a prompt-quality concern.
pub fn parse_roster(response: &str) -> Result<Roster> {
    if response.trim().is_empty() {
        return Err(SummaryError::ExtractionError {
            message: "model returned an empty roster response".to_string(),
        });
    }

    let payload = find_json_object(response).ok_or_else(|| SummaryError::ExtractionError {
        message: "no JSON object found in roster response".to_string(),
    })?;

    // serde_json with preserve_order keeps document order; repeated keys
    // keep their first position and last value.
    let value: serde_json::Value = serde_json::from_str(payload)?;
    let object = value.as_object().ok_or_else(|| SummaryError::ExtractionError {
        message: "roster payload is not a JSON object".to_string(),
    })?;

    let mut roster = Roster::new();
    for (number, name) in object {
        let name = name.as_str().ok_or_else(|| SummaryError::ExtractionError {
            message: format!("roster value for player '{}' is not a string", number),
        })?;
        roster.insert(number.clone(), name);
    }

    Ok(roster)
}

/// Returns the first balanced `{...}` substring that parses as JSON.
fn find_json_object(text: &str) -> Option<&str> {
    let bytes = text.as_bytes();
    let mut search_from = 0;

    while let Some(offset) = text[search_from..].find('{') {
        let start = search_from + offset;

        if let Some(end) = balanced_end(bytes, start) {
            let candidate = &text[start..=end];
            if serde_json::from_str::<serde_json::Value>(candidate).is_ok() {
                return Some(candidate);
            }
        }

        search_from = start + 1;
    }

    None
}

/// Index of the `}` closing the object opened at `start`, honoring string
/// literals and escapes.
fn balanced_end(bytes: &[u8], start: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, &b) in bytes.iter().enumerate().skip(start) {
        if escaped {
            escaped = false;
            continue;
        }
        match b {
            b'\\' if in_string => escaped = true,
            b'"' => in_string = !in_string,
            b'{' if !in_string => depth += 1,
            b'}' if !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_json_object() {
        let roster = parse_roster(r#"{"7": "Smith", "10": "Jones"}"#).unwrap();
        assert_eq!(roster.len(), 2);
        let entries: Vec<(&str, &str)> = roster.iter().collect();
        assert_eq!(entries, vec![("7", "Smith"), ("10", "Jones")]);
    }

    #[test]
    fn parses_json_wrapped_in_prose_and_fence() {
        let response = "Here is the extracted team list:\n```json\n{\"7\": \"Smith\", \"10\": \"Jones\"}\n```\nLet me know if you need anything else.";
        let roster = parse_roster(response).unwrap();
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn duplicate_keys_last_occurrence_wins() {
        let roster = parse_roster(r#"{"7": "Smith", "7": "Smyth"}"#).unwrap();
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.iter().next().unwrap(), ("7", "Smyth"));
    }

    #[test]
    fn short_roster_is_not_an_error() {
        let roster = parse_roster(r#"{"7": "Smith"}"#).unwrap();
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn empty_name_values_are_kept() {
        let roster = parse_roster(r#"{"7": ""}"#).unwrap();
        assert_eq!(roster.iter().next().unwrap(), ("7", ""));
    }

    #[test]
    fn rejects_empty_response() {
        assert!(matches!(
            parse_roster("   \n"),
            Err(SummaryError::ExtractionError { .. })
        ));
    }

    #[test]
    fn rejects_response_without_json() {
        assert!(matches!(
            parse_roster("I could not read the image, sorry."),
            Err(SummaryError::ExtractionError { .. })
        ));
    }

    #[test]
    fn rejects_non_string_values() {
        assert!(parse_roster(r#"{"7": 12}"#).is_err());
    }

    #[test]
    fn braces_inside_strings_do_not_break_scanning() {
        let roster = parse_roster(r#"noise { not json } {"7": "Smith {captain}"}"#).unwrap();
        assert_eq!(roster.iter().next().unwrap(), ("7", "Smith {captain}"));
    }
}
