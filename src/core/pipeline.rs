use crate::core::{notes, roster, summary};
use crate::domain::model::{Extraction, ModelRequest, SummaryArtifacts};
use crate::domain::ports::{ConfigProvider, ModelClient, Pipeline, Storage};
use crate::utils::error::{Result, SummaryError};
use chrono::Utc;
use std::io::Write;
use zip::write::{FileOptions, ZipWriter};

pub struct SummaryPipeline<S: Storage, C: ConfigProvider, M: ModelClient> {
    storage: S,
    config: C,
    model: M,
}

impl<S: Storage, C: ConfigProvider, M: ModelClient> SummaryPipeline<S, C, M> {
    pub fn new(storage: S, config: C, model: M) -> Self {
        Self {
            storage,
            config,
            model,
        }
    }

    /// Output directory scoped to this run. Fixed scratch names collide when
    /// two runs overlap; a timestamped directory keeps artifacts separate.
    fn run_scope(&self) -> String {
        format!(
            "run_{}_{}",
            Utc::now().format("%Y%m%dT%H%M%S%3f"),
            std::process::id()
        )
    }

    fn manifest(&self, result: &SummaryArtifacts) -> Result<String> {
        let manifest = serde_json::json!({
            "generated_at": Utc::now().to_rfc3339(),
            "model": self.config.model(),
            "players": result.records.len(),
            "matching": self.config.match_options(),
        });
        Ok(serde_json::to_string_pretty(&manifest)?)
    }

    fn build_bundle(&self, result: &SummaryArtifacts) -> Result<Vec<u8>> {
        let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));

        zip.start_file::<_, ()>("summary.json", FileOptions::default())?;
        zip.write_all(result.json_output.as_bytes())?;

        zip.start_file::<_, ()>("roster.json", FileOptions::default())?;
        zip.write_all(result.roster_json.as_bytes())?;

        zip.start_file::<_, ()>("notes.txt", FileOptions::default())?;
        zip.write_all(result.raw_notes.as_bytes())?;

        zip.start_file::<_, ()>("manifest.json", FileOptions::default())?;
        zip.write_all(self.manifest(result)?.as_bytes())?;

        let cursor = zip.finish()?;
        Ok(cursor.into_inner())
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider, M: ModelClient> Pipeline for SummaryPipeline<S, C, M> {
    /// Two sequential model round trips: roster image first, then notes.
    async fn extract(&self) -> Result<Extraction> {
        tracing::debug!("Reading roster image: {}", self.config.roster_image());
        let image = tokio::fs::read(self.config.roster_image()).await?;

        tracing::debug!("Requesting roster extraction from {}", self.config.api_endpoint());
        let roster_response = self
            .model
            .complete(ModelRequest::with_image(self.config.roster_prompt(), image))
            .await?;
        tracing::debug!("Roster response: {} bytes", roster_response.len());

        tracing::debug!("Reading notes file: {}", self.config.notes_file());
        let notes_text = tokio::fs::read_to_string(self.config.notes_file()).await?;

        tracing::debug!("Requesting notes extraction");
        let notes_response = self
            .model
            .complete(ModelRequest::text(self.config.notes_prompt()).with_context(notes_text))
            .await?;
        tracing::debug!("Notes response: {} bytes", notes_response.len());

        Ok(Extraction {
            roster_response,
            notes_response,
        })
    }

    /// Pure, synchronous step: parse the roster, split the notes, link and
    /// assemble. An unparsable roster response halts here, before linking.
    async fn transform(&self, data: Extraction) -> Result<SummaryArtifacts> {
        let roster = roster::parse_roster(&data.roster_response)?;
        tracing::info!("Parsed roster with {} players", roster.len());

        let note_lines = notes::split_notes(&data.notes_response);
        tracing::info!("Split notes into {} lines", note_lines.len());

        let records = summary::summarize(&roster, &note_lines, self.config.match_options());

        Ok(SummaryArtifacts {
            json_output: summary::to_json(&records)?,
            csv_output: summary::to_csv(&records)?,
            roster_json: summary::roster_to_json(&roster)?,
            raw_notes: data.notes_response,
            records,
        })
    }

    async fn load(&self, result: SummaryArtifacts) -> Result<String> {
        let scope = self.run_scope();

        let summary_path = format!("{}/summary.json", scope);
        self.storage
            .write_file(&summary_path, result.json_output.as_bytes())
            .await?;

        for format in self.config.output_formats() {
            if format == "csv" {
                let csv_path = format!("{}/summary.csv", scope);
                self.storage
                    .write_file(&csv_path, result.csv_output.as_bytes())
                    .await?;
            }
        }

        if self.config.bundle() {
            let bundle = self.build_bundle(&result)?;
            tracing::debug!("Writing artifact bundle ({} bytes)", bundle.len());
            let bundle_path = format!("{}/summary_bundle.zip", scope);
            self.storage.write_file(&bundle_path, &bundle).await?;
        }

        Ok(format!("{}/{}", self.config.output_path(), scope))
    }
}
