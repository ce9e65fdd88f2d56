use anyhow::Result;
use project_art::{generate_project_image, GalleryConfig, GalleryEngine, GalleryPipeline, LocalStorage};
use project_art::utils::validation::Validate;
use tempfile::TempDir;

fn manifest(output: &str) -> String {
    format!(
        r#"
[gallery]
name = "portfolio"

[output]
path = "{}"

[defaults]
width = 500
height = 300

[[cards]]
domain = "safety"
name = "Holden"

[[cards]]
domain = "marketing"
name = "Border Force"

[[cards]]
domain = "education"
file = "cards/edu.svg"
width = 640
height = 360
"#,
        output
    )
}

#[tokio::test]
async fn test_gallery_writes_cards_and_index() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().to_str().unwrap().replace('\\', "/");

    let config = GalleryConfig::from_toml_str(&manifest(&output_path))?;
    config.validate()?;

    let storage = LocalStorage::new(output_path.clone());
    let pipeline = GalleryPipeline::new(storage, config);
    let summary = GalleryEngine::new(pipeline).run().await?;

    assert_eq!(summary.cards, 3);
    assert_eq!(summary.fallback_domains, 1);
    assert_eq!(summary.output_path, output_path);

    let holden = std::fs::read_to_string(temp_dir.path().join("safety-holden.svg"))?;
    assert_eq!(holden, generate_project_image("safety", "Holden", 500.0, 300.0));

    let border = std::fs::read_to_string(temp_dir.path().join("regulatory-border-force.svg"))?;
    assert_eq!(
        border,
        generate_project_image("marketing", "Border Force", 500.0, 300.0)
    );

    // unnamed card falls back to the "default" name
    let edu = std::fs::read_to_string(temp_dir.path().join("cards/edu.svg"))?;
    assert_eq!(edu, generate_project_image("education", "default", 640.0, 360.0));

    let index: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(temp_dir.path().join("index.json"))?)?;
    let entries = index.as_array().unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0]["file"], "safety-holden.svg");
    assert_eq!(entries[0]["seed"], 2183);
    assert_eq!(entries[1]["domain"], "regulatory");
    assert_eq!(entries[2]["name"], "default");

    Ok(())
}

#[tokio::test]
async fn test_gallery_rerun_is_byte_identical() -> Result<()> {
    let first_dir = TempDir::new()?;
    let second_dir = TempDir::new()?;

    for dir in [&first_dir, &second_dir] {
        let path = dir.path().to_str().unwrap().replace('\\', "/");
        let config = GalleryConfig::from_toml_str(&manifest(&path))?;
        let pipeline = GalleryPipeline::new(LocalStorage::new(path.clone()), config);
        GalleryEngine::new(pipeline).run().await?;
    }

    for file in ["safety-holden.svg", "regulatory-border-force.svg", "cards/edu.svg", "index.json"] {
        let a = std::fs::read(first_dir.path().join(file))?;
        let b = std::fs::read(second_dir.path().join(file))?;
        assert_eq!(a, b, "{} differs between runs", file);
    }

    Ok(())
}

#[tokio::test]
async fn test_gallery_without_index() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().to_str().unwrap().replace('\\', "/");

    let mut config = GalleryConfig::from_toml_str(&manifest(&output_path))?;
    config.output.index = Some(false);

    let pipeline = GalleryPipeline::new(LocalStorage::new(output_path), config);
    GalleryEngine::new(pipeline).run().await?;

    assert!(temp_dir.path().join("safety-holden.svg").exists());
    assert!(!temp_dir.path().join("index.json").exists());
    Ok(())
}
