pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::dispatcher::{ImageRequest, DEFAULT_HEIGHT, DEFAULT_WIDTH};
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

/// Upper bound on either side of a rendered image.
pub const MAX_DIMENSION: f64 = 16_384.0;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "project-art")]
#[command(about = "Render the generative SVG for one portfolio project card")]
pub struct CliConfig {
    /// Content domain: safety, regulatory, social or education (others render as regulatory)
    #[arg(short, long)]
    pub domain: String,

    /// Project name the seed is derived from
    #[arg(short, long)]
    pub name: String,

    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: f64,

    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: f64,

    /// Write the SVG to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn request(&self) -> ImageRequest {
        ImageRequest::new(self.domain.clone(), self.name.clone()).with_size(self.width, self.height)
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_dimension("width", self.width, MAX_DIMENSION)?;
        validation::validate_dimension("height", self.height, MAX_DIMENSION)?;
        if let Some(output) = &self.output {
            validation::validate_output_files("output", std::slice::from_ref(output), &["svg"])?;
        }
        Ok(())
    }
}
