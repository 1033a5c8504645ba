use serde::{Deserialize, Serialize};

/// Insertion-ordered mapping from player number to player name.
///
/// Backed by a Vec of pairs so output order always follows the order the
/// entries appeared in the model response. Duplicate numbers keep their
/// first position but take the last value seen, matching JSON object
/// literal semantics.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    entries: Vec<(String, String)>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, number: impl Into<String>, name: impl Into<String>) {
        let number = number.into();
        let name = name.into();
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| *n == number) {
            entry.1 = name;
        } else {
            self.entries.push((number, name));
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, String)> for Roster {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        let mut roster = Roster::new();
        for (number, name) in iter {
            roster.insert(number, name);
        }
        roster
    }
}

/// One per-player output row. Immutable once assembled; exists to be
/// serialized to JSON/CSV and bundled into the downloadable artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRecord {
    pub number: String,
    pub name: String,
    pub comments: String,
}

/// How note lines are matched against roster entries.
///
/// The defaults reproduce the original behavior: case-sensitive substring
/// containment. Substring matching is a known weak point (a short number
/// like "1" matches any line containing the digit), so token matching and
/// case folding are offered as options rather than hard-coded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchOptions {
    pub case_insensitive: bool,
    pub whole_token: bool,
}

/// Raw model responses gathered during the extract phase.
#[derive(Debug, Clone)]
pub struct Extraction {
    pub roster_response: String,
    pub notes_response: String,
}

/// Everything the load phase writes out.
#[derive(Debug, Clone)]
pub struct SummaryArtifacts {
    pub records: Vec<SummaryRecord>,
    pub json_output: String,
    pub csv_output: String,
    pub roster_json: String,
    pub raw_notes: String,
}

/// A single prompt round trip to the inference endpoint.
#[derive(Debug, Clone, Default)]
pub struct ModelRequest {
    pub prompt: String,
    pub image: Option<Vec<u8>>,
    pub context: Option<String>,
}

impl ModelRequest {
    pub fn text(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Self::default()
        }
    }

    pub fn with_image(prompt: impl Into<String>, image: Vec<u8>) -> Self {
        Self {
            prompt: prompt.into(),
            image: Some(image),
            context: None,
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }
}
