use crate::core::Pipeline;
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::monitor::SystemMonitor;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
    #[cfg(feature = "cli")]
    monitor: Option<SystemMonitor>,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            #[cfg(feature = "cli")]
            monitor: None,
        }
    }

    #[cfg(feature = "cli")]
    pub fn new_with_monitoring(pipeline: P, enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: enabled.then(|| SystemMonitor::new(true)),
        }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting region split...");

        tracing::info!("Loading inputs...");
        let source = self.pipeline.extract().await?;
        tracing::info!(
            "Loaded {} member records and {} mapping sheets",
            source.roster.records.len(),
            source.sheets.len()
        );
        self.log_phase("extract");

        tracing::info!("Merging and partitioning...");
        let result = self.pipeline.transform(source).await?;
        tracing::info!(
            "Partitioned into {} regions, {} unmatched rows",
            result.regions.len(),
            result.unmatched.len()
        );
        self.log_phase("transform");

        tracing::info!("Writing archive...");
        let output_path = self.pipeline.load(result).await?;
        tracing::info!("Archive saved to: {}", output_path);
        self.log_phase("load");

        #[cfg(feature = "cli")]
        if let Some(monitor) = &self.monitor {
            monitor.log_final_stats();
        }

        Ok(output_path)
    }

    #[cfg(feature = "cli")]
    fn log_phase(&self, phase: &str) {
        if let Some(monitor) = &self.monitor {
            monitor.log_stats(phase);
        }
    }

    #[cfg(not(feature = "cli"))]
    fn log_phase(&self, _phase: &str) {}
}
