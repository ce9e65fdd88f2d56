use crate::core::Pipeline;
use crate::utils::error::Result;
use std::time::Instant;

pub struct GalleryEngine<P: Pipeline> {
    pipeline: P,
}

/// What a finished run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GallerySummary {
    pub output_path: String,
    pub cards: usize,
    pub fallback_domains: usize,
}

impl<P: Pipeline> GalleryEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<GallerySummary> {
        let started = Instant::now();
        tracing::info!("Starting gallery render...");

        let requests = self.pipeline.extract().await?;
        tracing::info!("Collected {} cards", requests.len());

        let result = self.pipeline.transform(requests).await?;
        let cards = result.cards.len();
        let fallback_domains = result.fallback_domains;
        if fallback_domains > 0 {
            tracing::warn!(
                "{} card(s) used an unknown domain and were rendered as regulatory",
                fallback_domains
            );
        }
        tracing::info!("Rendered {} cards", cards);

        let output_path = self.pipeline.load(result).await?;
        tracing::info!("Output saved to: {} ({:?})", output_path, started.elapsed());

        Ok(GallerySummary {
            output_path,
            cards,
            fallback_domains,
        })
    }
}
