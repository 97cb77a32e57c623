use crate::core::{LoadOutcome, Pipeline};
use crate::utils::error::Result;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<LoadOutcome> {
        tracing::info!("Starting CPF list processing");

        // Extract
        let raw = self.pipeline.extract().await?;
        tracing::debug!("Extracted {} bytes of input", raw.len());

        // Transform
        let result = self.pipeline.transform(raw).await?;
        tracing::info!("Processed {} CPF entries", result.token_count);

        // Load
        let outcome = self.pipeline.load(result).await?;
        if let LoadOutcome::Written(path) = &outcome {
            tracing::info!("Output saved to: {}", path);
        }

        Ok(outcome)
    }
}
