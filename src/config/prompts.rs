/// Default prompt sent with the roster image.
pub const DEFAULT_ROSTER_PROMPT: &str = "Analyze the image and extract the list of players for the team. \
The team list includes player numbers and their corresponding names. \
Return the information as a JSON object with player numbers as keys and names as values. \
Capture every player on the image; do not stop until all players have been captured.";

/// Default prompt sent with the raw notes text.
pub const DEFAULT_NOTES_PROMPT: &str = "Extract every coaching note from the text below. \
Return the notes as plain text, one note per line, without numbering or extra commentary.";

/// Builds the roster prompt, folding in team name and jersey color when the
/// user supplied them.
pub fn roster_prompt(team_name: Option<&str>, team_color: Option<&str>) -> String {
    let mut prompt = DEFAULT_ROSTER_PROMPT.to_string();
    if let Some(name) = team_name {
        prompt.push_str(&format!(" The team is called {}.", name));
    }
    if let Some(color) = team_color {
        prompt.push_str(&format!(" The team wears {} jerseys.", color));
    }
    prompt
}
