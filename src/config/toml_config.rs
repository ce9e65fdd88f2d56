use crate::config::MAX_DIMENSION;
use crate::core::ConfigProvider;
use crate::domain::model::{CardDefaults, CardRequest, Domain};
use crate::utils::error::{ArtError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryConfig {
    pub gallery: GallerySection,
    pub output: OutputConfig,
    #[serde(default)]
    pub defaults: CardDefaults,
    #[serde(default)]
    pub cards: Vec<CardRequest>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GallerySection {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: String,
    pub index: Option<bool>,
}

impl GalleryConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ArtError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ArtError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${OUTPUT_DIR})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ArtError::config(e.to_string()))?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("gallery.name", &self.gallery.name)?;
        validation::validate_path("output.path", &self.output.path)?;

        if self.cards.is_empty() {
            return Err(ArtError::MissingConfigError {
                field: "cards".to_string(),
            });
        }

        if let Some(width) = self.defaults.width {
            validation::validate_dimension("defaults.width", width, MAX_DIMENSION)?;
        }
        if let Some(height) = self.defaults.height {
            validation::validate_dimension("defaults.height", height, MAX_DIMENSION)?;
        }

        for (i, card) in self.cards.iter().enumerate() {
            if let Some(width) = card.width {
                validation::validate_dimension(&format!("cards[{}].width", i), width, MAX_DIMENSION)?;
            }
            if let Some(height) = card.height {
                validation::validate_dimension(&format!("cards[{}].height", i), height, MAX_DIMENSION)?;
            }
            if Domain::parse_known(&card.domain).is_none() {
                tracing::warn!(
                    "cards[{}]: unknown domain {:?}, it will be rendered as regulatory",
                    i,
                    card.domain
                );
            }
        }

        let files: Vec<String> = self
            .cards
            .iter()
            .map(|card| card.resolve(&self.defaults).file)
            .collect();
        validation::validate_output_files("cards.file", &files, &["svg"])?;

        Ok(())
    }

    pub fn output_path(&self) -> &str {
        &self.output.path
    }

    pub fn index_enabled(&self) -> bool {
        self.output.index.unwrap_or(true)
    }
}

impl ConfigProvider for GalleryConfig {
    fn output_path(&self) -> &str {
        &self.output.path
    }

    fn cards(&self) -> &[CardRequest] {
        &self.cards
    }

    fn defaults(&self) -> CardDefaults {
        self.defaults.clone()
    }

    fn write_index(&self) -> bool {
        self.index_enabled()
    }
}

impl Validate for GalleryConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const BASIC: &str = r#"
[gallery]
name = "portfolio"
description = "Project cards"

[output]
path = "./generated"

[defaults]
width = 500
height = 300

[[cards]]
domain = "safety"
name = "Holden"

[[cards]]
domain = "social"
name = "Icon Water"
width = 800
file = "icon.svg"
"#;

    #[test]
    fn test_parse_basic_toml_config() {
        let config = GalleryConfig::from_toml_str(BASIC).unwrap();

        assert_eq!(config.gallery.name, "portfolio");
        assert_eq!(config.output_path(), "./generated");
        assert!(config.index_enabled());
        assert_eq!(config.cards.len(), 2);
        assert_eq!(config.cards[1].width, Some(800.0));
        assert_eq!(config.cards[1].file.as_deref(), Some("icon.svg"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("PROJECT_ART_TEST_OUTPUT", "/tmp/cards");

        let toml_content = r#"
[gallery]
name = "env"

[output]
path = "${PROJECT_ART_TEST_OUTPUT}"

[[cards]]
domain = "education"
name = "${PROJECT_ART_UNSET_VARIABLE}"
"#;

        let config = GalleryConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.output.path, "/tmp/cards");
        assert_eq!(
            config.cards[0].name.as_deref(),
            Some("${PROJECT_ART_UNSET_VARIABLE}")
        );

        std::env::remove_var("PROJECT_ART_TEST_OUTPUT");
    }

    #[test]
    fn test_validation_rejects_duplicate_files() {
        let toml_content = r#"
[gallery]
name = "dupes"

[output]
path = "./out"

[[cards]]
domain = "safety"
name = "Holden"

[[cards]]
domain = "safety"
name = "holden"
"#;

        let config = GalleryConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_non_latin_names_do_not_collide() {
        let toml_content = r#"
[gallery]
name = "cities"

[output]
path = "./out"

[[cards]]
domain = "social"
name = "北京"

[[cards]]
domain = "social"
name = "上海"
"#;

        let config = GalleryConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_files_outside_output_path() {
        for file in ["../../escaped.svg", "/tmp/abs.svg"] {
            let toml_content = format!(
                r#"
[gallery]
name = "escape"

[output]
path = "./out"

[[cards]]
domain = "safety"
name = "Holden"
file = "{}"
"#,
                file
            );

            let config = GalleryConfig::from_toml_str(&toml_content).unwrap();
            let err = config.validate().unwrap_err();
            assert!(
                matches!(err, ArtError::InvalidConfigValueError { ref field, .. } if field == "cards.file"),
                "{}: {:?}",
                file,
                err
            );
        }
    }

    #[test]
    fn test_validation_requires_cards() {
        let toml_content = r#"
[gallery]
name = "empty"

[output]
path = "./out"
index = false
"#;

        let config = GalleryConfig::from_toml_str(toml_content).unwrap();
        assert!(!config.index_enabled());
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ArtError::MissingConfigError { .. }));
    }

    #[test]
    fn test_unknown_domain_is_not_a_validation_error() {
        let toml_content = r#"
[gallery]
name = "fallback"

[output]
path = "./out"

[[cards]]
domain = "policy"
name = "DCCEEW"
"#;

        let config = GalleryConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = GalleryConfig::from_toml_str("[gallery\nname = ").unwrap_err();
        assert!(matches!(err, ArtError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_example_manifest_is_usable_as_is() {
        let config = GalleryConfig::from_toml_str(include_str!("../../gallery.example.toml")).unwrap();
        assert!(!config.output_path().contains("${"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(BASIC.as_bytes()).unwrap();

        let config = GalleryConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.gallery.name, "portfolio");
    }
}
