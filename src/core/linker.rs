use crate::domain::model::{MatchOptions, Roster};

/// Comment value for roster entries no note line matched.
pub const NO_COMMENTS: &str = "No comments.";

/// Associates note lines with roster entries.
///
/// Returns one comment string per roster entry, in roster iteration order.
/// A line matches an entry when it contains the player number or the player
/// name according to `options`; matching is non-exclusive, so one line may
/// be attributed to several players. Matched lines are joined with a single
/// space and trimmed. Total over any roster and any note sequence.
pub fn link_notes(roster: &Roster, notes: &[String], options: MatchOptions) -> Vec<String> {
    roster
        .iter()
        .map(|(number, name)| {
            let matched: Vec<&str> = notes
                .iter()
                .filter(|line| {
                    line_matches(line, number, options) || line_matches(line, name, options)
                })
                .map(|line| line.as_str())
                .collect();

            if matched.is_empty() {
                NO_COMMENTS.to_string()
            } else {
                matched.join(" ").trim().to_string()
            }
        })
        .collect()
}

fn line_matches(line: &str, needle: &str, options: MatchOptions) -> bool {
    // An empty needle (extraction produced no name for a slot) must not
    // attribute every line to that player.
    if needle.trim().is_empty() {
        return false;
    }

    let folded_line;
    let folded_needle;
    let (line, needle) = if options.case_insensitive {
        folded_line = line.to_lowercase();
        folded_needle = needle.to_lowercase();
        (folded_line.as_str(), folded_needle.as_str())
    } else {
        (line, needle)
    };

    if options.whole_token {
        contains_token_sequence(line, needle)
    } else {
        line.contains(needle)
    }
}

/// Whole-token matching: the needle's tokens must appear as a contiguous
/// run of line tokens, so number "1" no longer matches "13" or "injured
/// for 10 minutes" style digits embedded in larger tokens.
fn contains_token_sequence(line: &str, needle: &str) -> bool {
    let line_tokens = tokenize(line);
    let needle_tokens = tokenize(needle);

    if needle_tokens.is_empty() {
        return false;
    }

    line_tokens
        .windows(needle_tokens.len())
        .any(|window| window == needle_tokens.as_slice())
}

fn tokenize(text: &str) -> Vec<&str> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .collect()
}
