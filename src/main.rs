use clap::Parser;
use project_art::utils::{logger, validation::Validate};
use project_art::CliConfig;
use std::io::Write;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.severity().exit_code());
    }

    let request = config.request();
    tracing::info!(
        "🎨 Rendering {} card for {:?} (seed {}) at {}x{}",
        request.domain(),
        request.name,
        request.seed(),
        request.width,
        request.height
    );
    let svg = request.render();

    match &config.output {
        Some(path) => {
            if let Some(parent) = std::path::Path::new(path).parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(path, &svg)?;
            tracing::info!("📁 Output saved to: {}", path);
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(svg.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }

    Ok(())
}
