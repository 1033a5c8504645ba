use crate::domain::ports::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

/// Drives the strictly sequential extract -> transform -> load pipeline.
pub struct SummaryEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> SummaryEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(false),
        }
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Extracting roster and notes from the model...");
        let extraction = self.pipeline.extract().await?;
        self.monitor.log_stats("Extract");

        tracing::info!("Linking notes to players...");
        let artifacts = self.pipeline.transform(extraction).await?;
        tracing::info!("Assembled {} summary records", artifacts.records.len());
        self.monitor.log_stats("Transform");

        tracing::info!("Writing summary artifacts...");
        let output_path = self.pipeline.load(artifacts).await?;
        self.monitor.log_stats("Load");

        self.monitor.log_final_stats();
        Ok(output_path)
    }
}
