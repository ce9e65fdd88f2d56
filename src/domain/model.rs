use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer that fully determines one generated image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Seed(pub u64);

impl Seed {
    pub fn value(self) -> u64 {
        self.0
    }
}

impl From<u64> for Seed {
    fn from(value: u64) -> Self {
        Seed(value)
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Content category that selects a visual recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Safety,
    Regulatory,
    Social,
    Education,
}

impl Domain {
    pub const ALL: [Domain; 4] = [
        Domain::Safety,
        Domain::Regulatory,
        Domain::Social,
        Domain::Education,
    ];

    /// Strict lookup. Returns `None` for anything but the four known tags.
    pub fn parse_known(tag: &str) -> Option<Domain> {
        match tag {
            "safety" => Some(Domain::Safety),
            "regulatory" => Some(Domain::Regulatory),
            "social" => Some(Domain::Social),
            "education" => Some(Domain::Education),
            _ => None,
        }
    }

    /// Total lookup: unrecognized tags map to `Regulatory`.
    pub fn from_tag(tag: &str) -> Domain {
        match Domain::parse_known(tag) {
            Some(domain) => domain,
            None => Domain::Regulatory,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Domain::Safety => "safety",
            Domain::Regulatory => "regulatory",
            Domain::Social => "social",
            Domain::Education => "education",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Card entry as written in a gallery manifest. Every field but the domain
/// is optional and filled in by [`CardRequest::resolve`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CardRequest {
    pub domain: String,
    pub name: Option<String>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub file: Option<String>,
}

/// Manifest-level fallbacks applied before the built-in placeholder size.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CardDefaults {
    pub width: Option<f64>,
    pub height: Option<f64>,
}

/// A card with every field settled; rendering it needs nothing else.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResolvedCard {
    pub file: String,
    pub domain: Domain,
    pub name: String,
    pub seed: Seed,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone)]
pub struct RenderedCard {
    pub card: ResolvedCard,
    pub svg: String,
}

#[derive(Debug, Clone)]
pub struct RenderResult {
    pub cards: Vec<RenderedCard>,
    pub fallback_domains: usize,
}
