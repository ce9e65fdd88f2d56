use crate::core::seed::derive_seed;
use crate::domain::model::{Domain, Seed};

pub const DEFAULT_WIDTH: f64 = 500.0;
pub const DEFAULT_HEIGHT: f64 = 300.0;

/// Renders the card image for `name` in the recipe selected by `domain`.
///
/// Unknown domain tags render the regulatory recipe; this never fails, and
/// identical arguments always produce identical bytes.
pub fn generate_project_image(domain: &str, name: &str, width: f64, height: f64) -> String {
    let seed = derive_seed(name);
    let resolved = match Domain::parse_known(domain) {
        Some(known) => known,
        None => {
            tracing::trace!(domain, "unrecognized domain, using regulatory recipe");
            Domain::Regulatory
        }
    };
    tracing::debug!(domain = %resolved, %seed, width, height, "generating project image");
    resolved.generate(seed, width, height)
}

/// Arguments of one image, with the dispatcher's default size.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageRequest {
    pub domain: String,
    pub name: String,
    pub width: f64,
    pub height: f64,
}

impl ImageRequest {
    pub fn new(domain: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            name: name.into(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn seed(&self) -> Seed {
        derive_seed(&self.name)
    }

    pub fn domain(&self) -> Domain {
        Domain::from_tag(&self.domain)
    }

    pub fn render(&self) -> String {
        generate_project_image(&self.domain, &self.name, self.width, self.height)
    }
}
