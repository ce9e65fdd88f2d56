//! Seeded, domain-coded SVG artwork for portfolio project cards.
//!
//! The same `(domain, name, width, height)` always renders the same bytes.

pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::{cli::LocalStorage, toml_config::GalleryConfig};

pub use crate::core::{
    dispatcher::{generate_project_image, ImageRequest},
    gallery::{GalleryEngine, GallerySummary},
    pipeline::GalleryPipeline,
    rng::SeededRandom,
    seed::derive_seed,
};
pub use crate::domain::model::{CardRequest, Domain, Seed};
pub use crate::utils::error::{ArtError, Result};
