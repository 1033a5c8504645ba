use crate::config::prompts;
use crate::domain::model::MatchOptions;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, SummaryError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub pipeline: PipelineConfig,
    pub model: ModelConfig,
    pub inputs: InputsConfig,
    pub prompts: Option<PromptsConfig>,
    pub matching: Option<MatchingConfig>,
    pub load: LoadConfig,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub name: String,
    pub description: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    pub endpoint: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputsConfig {
    pub roster_image: String,
    pub notes_file: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptsConfig {
    pub roster: Option<String>,
    pub notes: Option<String>,
    pub team_name: Option<String>,
    pub team_color: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingConfig {
    pub case_insensitive: Option<bool>,
    pub whole_token: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    pub output_path: String,
    pub output_formats: Vec<String>,
    pub bundle: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SummaryError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| SummaryError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` placeholders with environment values; unset
    /// variables are left as-is so validation can flag them.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn api_endpoint(&self) -> &str {
        &self.model.endpoint
    }

    fn model(&self) -> &str {
        &self.model.name
    }

    fn roster_image(&self) -> &str {
        &self.inputs.roster_image
    }

    fn notes_file(&self) -> &str {
        &self.inputs.notes_file
    }

    fn output_path(&self) -> &str {
        &self.load.output_path
    }

    fn roster_prompt(&self) -> String {
        let prompts_section = self.prompts.as_ref();
        if let Some(custom) = prompts_section.and_then(|p| p.roster.clone()) {
            return custom;
        }
        prompts::roster_prompt(
            prompts_section.and_then(|p| p.team_name.as_deref()),
            prompts_section.and_then(|p| p.team_color.as_deref()),
        )
    }

    fn notes_prompt(&self) -> String {
        self.prompts
            .as_ref()
            .and_then(|p| p.notes.clone())
            .unwrap_or_else(|| prompts::DEFAULT_NOTES_PROMPT.to_string())
    }

    fn match_options(&self) -> MatchOptions {
        let matching = self.matching.as_ref();
        MatchOptions {
            case_insensitive: matching
                .and_then(|m| m.case_insensitive)
                .unwrap_or(false),
            whole_token: matching.and_then(|m| m.whole_token).unwrap_or(false),
        }
    }

    fn output_formats(&self) -> &[String] {
        &self.load.output_formats
    }

    fn bundle(&self) -> bool {
        self.load.bundle.unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("model.endpoint", &self.model.endpoint)?;
        validation::validate_non_empty_string("model.name", &self.model.name)?;
        validation::validate_path("load.output_path", &self.load.output_path)?;
        validation::validate_output_formats("load.output_formats", &self.load.output_formats)?;
        validation::validate_input_file(
            "inputs.roster_image",
            &self.inputs.roster_image,
            &["png", "jpg", "jpeg"],
        )?;
        validation::validate_input_file("inputs.notes_file", &self.inputs.notes_file, &["txt"])?;
        Ok(())
    }
}
