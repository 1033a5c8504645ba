/// Splits the raw notes-extraction response into ordered note lines.
///
/// Blank lines carry no content a match could attribute, so they are
/// dropped; relative order of the remaining lines is preserved. No case or
/// punctuation normalization happens here, that is the linker's concern.
pub fn split_notes(raw: &str) -> Vec<String> {
    raw.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.to_string())
        .collect()
}
