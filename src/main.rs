use clap::Parser;
use salary_stats::config::settings::{read_credential, CREDENTIAL_ENV_VAR};
use salary_stats::config::toml_config::FileConfig;
use salary_stats::utils::error::ErrorSeverity;
use salary_stats::utils::{logger, validation::Validate};
use salary_stats::{build_engine, CliConfig, LocalStorage, ReportExporter, SalaryError, Settings};

fn exit_with(e: &SalaryError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env file is fine; the variable may come from the environment.
    let _ = dotenvy::dotenv();

    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting salary-stats");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let file_config = match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            match FileConfig::from_file(path) {
                Ok(file_config) => Some(file_config),
                Err(e) => exit_with(&e),
            }
        }
        None => None,
    };

    let settings = match Settings::resolve(config.overrides(), file_config) {
        Ok(settings) => settings,
        Err(e) => exit_with(&e),
    };

    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        exit_with(&e);
    }

    let token = match read_credential(CREDENTIAL_ENV_VAR) {
        Ok(token) => token,
        Err(e) => exit_with(&e),
    };

    let engine = match build_engine(&settings, &token) {
        Ok(engine) => engine,
        Err(e) => exit_with(&e),
    };

    let runs = engine.run().await;
    for run in &runs {
        println!("{}", run.render());
    }

    if let Some(dir) = &settings.export_dir {
        let exporter = ReportExporter::new(LocalStorage::new(dir.clone()));
        match exporter.export(&runs).await {
            Ok(files) => tracing::info!("📁 Exported {} to {}", files.join(", "), dir),
            Err(e) => exit_with(&e),
        }
    }

    Ok(())
}
