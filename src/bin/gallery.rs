use clap::Parser;
use project_art::utils::error::ArtError;
use project_art::utils::{logger, validation::Validate};
use project_art::{GalleryConfig, GalleryEngine, GalleryPipeline, LocalStorage};

#[derive(Parser)]
#[command(name = "gallery")]
#[command(about = "Render every project card listed in a TOML gallery manifest")]
struct Args {
    /// Path to TOML gallery manifest
    #[arg(short, long, default_value = "gallery.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,

    /// Override the output directory from the manifest
    #[arg(short, long)]
    output: Option<String>,

    /// Skip writing index.json
    #[arg(long)]
    no_index: bool,

    /// Dry run - show the resolved cards without writing anything
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 初始化日誌
    if args.log_json {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("🚀 Starting gallery render");
    tracing::info!("📁 Loading manifest from: {}", args.config);

    // 載入 TOML 配置
    let mut config = match GalleryConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load manifest '{}': {}", args.config, e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 應用命令列覆蓋設定
    if let Some(output) = &args.output {
        config.output.path = output.clone();
        tracing::info!("🔧 Output path overridden to: {}", output);
    }
    if args.no_index {
        config.output.index = Some(false);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        exit_with(&e);
    }

    tracing::info!("✅ Manifest loaded and validated successfully");

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - nothing will be written");
        perform_dry_run(&config);
        return Ok(());
    }

    let storage = LocalStorage::new(config.output_path().to_string());
    let pipeline = GalleryPipeline::new(storage, config);
    let engine = GalleryEngine::new(pipeline);

    match engine.run().await {
        Ok(summary) => {
            tracing::info!(
                "✅ Rendered {} cards into {}",
                summary.cards,
                summary.output_path
            );
        }
        Err(e) => exit_with(&e),
    }

    Ok(())
}

fn exit_with(e: &ArtError) -> ! {
    tracing::error!(
        "❌ Gallery render failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.severity().exit_code());
}

fn perform_dry_run(config: &GalleryConfig) {
    println!("📋 Gallery: {}", config.gallery.name);
    if let Some(description) = &config.gallery.description {
        println!("  {}", description);
    }
    println!("  Output: {}", config.output_path());
    println!("  Index: {}", config.index_enabled());
    println!();

    for card in &config.cards {
        let resolved = card.resolve(&config.defaults);
        let marker = if card.uses_fallback_domain() {
            format!(" (from {:?})", card.domain)
        } else {
            String::new()
        };
        println!(
            "  {:<32} {:<10}{} seed={:<8} {}x{}",
            resolved.file,
            resolved.domain,
            marker,
            resolved.seed,
            resolved.width,
            resolved.height
        );
    }

    println!();
    println!("✅ Dry run complete: {} cards", config.cards.len());
}
