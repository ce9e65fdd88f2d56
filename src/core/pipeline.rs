use crate::core::{CardRequest, ConfigProvider, Pipeline, RenderResult, Storage};
use crate::utils::error::Result;
use serde::Serialize;

pub const INDEX_FILE: &str = "index.json";

/// Renders every configured card and writes the SVGs through a [`Storage`].
pub struct GalleryPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

#[derive(Debug, Serialize)]
struct IndexEntry<'a> {
    file: &'a str,
    domain: &'a str,
    name: &'a str,
    seed: u64,
    width: f64,
    height: f64,
}

impl<S: Storage, C: ConfigProvider> GalleryPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for GalleryPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<CardRequest>> {
        let cards = self.config.cards().to_vec();
        tracing::debug!("Collected {} card requests", cards.len());
        Ok(cards)
    }

    async fn transform(&self, cards: Vec<CardRequest>) -> Result<RenderResult> {
        let defaults = self.config.defaults();
        let mut rendered = Vec::with_capacity(cards.len());
        let mut fallback_domains = 0;

        for request in cards {
            if request.uses_fallback_domain() {
                fallback_domains += 1;
                tracing::debug!(
                    "Unknown domain {:?} for {:?}, rendering as regulatory",
                    request.domain,
                    request.name
                );
            }

            let card = request.resolve(&defaults);
            tracing::debug!(
                file = %card.file,
                domain = %card.domain,
                seed = %card.seed,
                "rendering card"
            );
            rendered.push(card.render());
        }

        Ok(RenderResult {
            cards: rendered,
            fallback_domains,
        })
    }

    async fn load(&self, result: RenderResult) -> Result<String> {
        for rendered in &result.cards {
            self.storage
                .write_file(&rendered.card.file, rendered.svg.as_bytes())
                .await?;
        }

        if self.config.write_index() {
            let entries: Vec<IndexEntry<'_>> = result
                .cards
                .iter()
                .map(|r| IndexEntry {
                    file: &r.card.file,
                    domain: r.card.domain.as_str(),
                    name: &r.card.name,
                    seed: r.card.seed.value(),
                    width: r.card.width,
                    height: r.card.height,
                })
                .collect();
            let json = serde_json::to_vec_pretty(&entries)?;
            self.storage.write_file(INDEX_FILE, &json).await?;
        }

        Ok(self.config.output_path().to_string())
    }
}
