use crate::config::prompts;
use crate::domain::model::MatchOptions;
use crate::domain::ports::ConfigProvider;
use crate::utils::validation::{
    self, validate_non_empty_string, validate_output_formats, validate_path, validate_url,
    Validate,
};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "roster-summary")]
#[command(about = "Extract a team roster from an image and link coach notes to players")]
pub struct CliConfig {
    /// Image of the team list (png/jpg/jpeg)
    #[arg(long, required_unless_present = "config")]
    pub roster_image: Option<String>,

    /// Plain-text notes file to attribute to players
    #[arg(long, required_unless_present = "config")]
    pub notes_file: Option<String>,

    #[arg(long, default_value = "http://localhost:11434/api/chat")]
    pub endpoint: String,

    #[arg(long, default_value = "llama3.2-vision")]
    pub model: String,

    #[arg(long)]
    pub team_name: Option<String>,

    #[arg(long)]
    pub team_color: Option<String>,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    /// Match player numbers and names case-insensitively
    #[arg(long)]
    pub ignore_case: bool,

    /// Match whole tokens only instead of raw substrings
    #[arg(long)]
    pub whole_token: bool,

    #[arg(long, value_delimiter = ',', default_value = "json")]
    pub output_formats: Vec<String>,

    /// Also write a zip bundle with the summary, roster and raw notes
    #[arg(long)]
    pub bundle: bool,

    /// Load settings from a TOML file instead of CLI flags
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log per-phase system stats")]
    pub monitor: bool,
}

impl ConfigProvider for CliConfig {
    fn api_endpoint(&self) -> &str {
        &self.endpoint
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn roster_image(&self) -> &str {
        self.roster_image.as_deref().unwrap_or_default()
    }

    fn notes_file(&self) -> &str {
        self.notes_file.as_deref().unwrap_or_default()
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn roster_prompt(&self) -> String {
        prompts::roster_prompt(self.team_name.as_deref(), self.team_color.as_deref())
    }

    fn notes_prompt(&self) -> String {
        prompts::DEFAULT_NOTES_PROMPT.to_string()
    }

    fn match_options(&self) -> MatchOptions {
        MatchOptions {
            case_insensitive: self.ignore_case,
            whole_token: self.whole_token,
        }
    }

    fn output_formats(&self) -> &[String] {
        &self.output_formats
    }

    fn bundle(&self) -> bool {
        self.bundle
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        validate_url("endpoint", &self.endpoint)?;
        validate_non_empty_string("model", &self.model)?;
        validate_path("output_path", &self.output_path)?;
        validate_output_formats("output_formats", &self.output_formats)?;

        validation::validate_input_file(
            "roster_image",
            ConfigProvider::roster_image(self),
            &["png", "jpg", "jpeg"],
        )?;
        validation::validate_input_file("notes_file", ConfigProvider::notes_file(self), &["txt"])?;

        Ok(())
    }
}
