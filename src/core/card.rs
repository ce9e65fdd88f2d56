use crate::core::seed::derive_seed;
use crate::domain::model::{CardDefaults, CardRequest, Domain, RenderedCard, ResolvedCard};
use regex::Regex;
use std::sync::OnceLock;

/// Name used for cards that do not carry one.
pub const DEFAULT_NAME: &str = "default";
/// Size used when neither the card nor the manifest gives one.
pub const PLACEHOLDER_WIDTH: f64 = 800.0;
pub const PLACEHOLDER_HEIGHT: f64 = 280.0;

fn non_zero(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0)
}

/// Lower-cased name with every run of characters that are neither letters
/// nor digits collapsed to `-`. Letters from any script are kept.
pub fn slug(name: &str) -> String {
    static SEPARATORS: OnceLock<Regex> = OnceLock::new();
    let re = SEPARATORS
        .get_or_init(|| Regex::new(r"[^\p{L}\p{N}]+").expect("slug pattern is valid"));
    let lowered = name.to_lowercase();
    let slug = re.replace_all(&lowered, "-");
    let trimmed = slug.trim_matches('-');
    if trimmed.is_empty() {
        DEFAULT_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}

impl CardRequest {
    pub fn new(domain: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// True when the domain tag is not one of the four recipes.
    pub fn uses_fallback_domain(&self) -> bool {
        Domain::parse_known(&self.domain).is_none()
    }

    /// Settles every optional field.
    ///
    /// A zero dimension counts as unset, the same as an unmeasured
    /// placeholder, and falls through to the manifest default and then to
    /// 800×280.
    pub fn resolve(&self, defaults: &CardDefaults) -> ResolvedCard {
        let name = self.name.clone().unwrap_or_else(|| DEFAULT_NAME.to_string());
        let domain = Domain::from_tag(&self.domain);
        let width = non_zero(self.width)
            .or(non_zero(defaults.width))
            .unwrap_or(PLACEHOLDER_WIDTH);
        let height = non_zero(self.height)
            .or(non_zero(defaults.height))
            .unwrap_or(PLACEHOLDER_HEIGHT);
        let file = self
            .file
            .clone()
            .unwrap_or_else(|| format!("{}-{}.svg", domain, slug(&name)));

        ResolvedCard {
            file,
            domain,
            seed: derive_seed(&name),
            name,
            width,
            height,
        }
    }
}

impl ResolvedCard {
    pub fn render(self) -> RenderedCard {
        let svg = self.domain.generate(self.seed, self.width, self.height);
        RenderedCard { card: self, svg }
    }
}
