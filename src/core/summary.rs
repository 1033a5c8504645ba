use crate::core::linker;
use crate::domain::model::{MatchOptions, Roster, SummaryRecord};
use crate::utils::error::{Result, SummaryError};

/// Builds one SummaryRecord per roster entry, in roster iteration order.
///
/// This is the pure heart of the tool: no I/O, no model calls, directly
/// unit-testable with in-memory data.
pub fn summarize(roster: &Roster, notes: &[String], options: MatchOptions) -> Vec<SummaryRecord> {
    let comments = linker::link_notes(roster, notes, options);

    roster
        .iter()
        .zip(comments)
        .map(|((number, name), comments)| SummaryRecord {
            number: number.to_string(),
            name: name.to_string(),
            comments,
        })
        .collect()
}

/// Serializes records to the exchange format: a JSON list of mappings with
/// explicit field names.
pub fn to_json(records: &[SummaryRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

pub fn from_json(json: &str) -> Result<Vec<SummaryRecord>> {
    Ok(serde_json::from_str(json)?)
}

pub fn to_csv(records: &[SummaryRecord]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for record in records {
        writer.serialize(record)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| SummaryError::ProcessingError {
            message: format!("CSV writer flush failed: {}", e),
        })?;
    String::from_utf8(bytes).map_err(|e| SummaryError::ProcessingError {
        message: format!("CSV output is not valid UTF-8: {}", e),
    })
}

/// Renders the parsed roster back to a JSON object for the artifact bundle.
pub fn roster_to_json(roster: &Roster) -> Result<String> {
    let mut object = serde_json::Map::new();
    for (number, name) in roster.iter() {
        object.insert(
            number.to_string(),
            serde_json::Value::String(name.to_string()),
        );
    }
    Ok(serde_json::to_string_pretty(&serde_json::Value::Object(
        object,
    ))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(entries: &[(&str, &str)]) -> Roster {
        entries
            .iter()
            .map(|(n, v)| (n.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn scenario_two_players_two_notes() {
        let roster = roster(&[("7", "Smith"), ("10", "Jones")]);
        let notes = vec![
            "Great game from Smith".to_string(),
            "10 was injured".to_string(),
        ];

        let records = summarize(&roster, &notes, MatchOptions::default());

        assert_eq!(
            records,
            vec![
                SummaryRecord {
                    number: "7".to_string(),
                    name: "Smith".to_string(),
                    comments: "Great game from Smith".to_string(),
                },
                SummaryRecord {
                    number: "10".to_string(),
                    name: "Jones".to_string(),
                    comments: "10 was injured".to_string(),
                },
            ]
        );
    }

    #[test]
    fn scenario_no_notes_yields_sentinel_record() {
        let roster = roster(&[("7", "Smith")]);
        let records = summarize(&roster, &[], MatchOptions::default());

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].comments, "No comments.");
    }

    #[test]
    fn record_count_and_order_follow_roster() {
        let roster = roster(&[("10", "Jones"), ("7", "Smith"), ("3", "Brown")]);
        let records = summarize(&roster, &[], MatchOptions::default());

        let numbers: Vec<&str> = records.iter().map(|r| r.number.as_str()).collect();
        assert_eq!(numbers, vec!["10", "7", "3"]);
    }

    #[test]
    fn json_round_trip_is_field_equal() {
        let roster = roster(&[("7", "Smith"), ("10", "Jones")]);
        let notes = vec!["Great game from Smith".to_string()];
        let records = summarize(&roster, &notes, MatchOptions::default());

        let json = to_json(&records).unwrap();
        let parsed = from_json(&json).unwrap();

        assert_eq!(parsed, records);
    }

    #[test]
    fn json_output_uses_explicit_field_names() {
        let records = vec![SummaryRecord {
            number: "7".to_string(),
            name: "Smith".to_string(),
            comments: "No comments.".to_string(),
        }];

        let json = to_json(&records).unwrap();
        assert!(json.contains("\"number\""));
        assert!(json.contains("\"name\""));
        assert!(json.contains("\"comments\""));
    }

    #[test]
    fn csv_output_has_header_and_rows() {
        let records = vec![SummaryRecord {
            number: "7".to_string(),
            name: "Smith".to_string(),
            comments: "Great game from Smith".to_string(),
        }];

        let csv = to_csv(&records).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "number,name,comments");
        assert_eq!(lines[1], "7,Smith,Great game from Smith");
    }

    #[test]
    fn roster_json_preserves_entries() {
        let roster = roster(&[("7", "Smith")]);
        let json = roster_to_json(&roster).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["7"], "Smith");
    }
}
