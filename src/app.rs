use crate::config::CliConfig;
use crate::core::engine::DemoEngine;
use crate::utils::error::SolidError;
use crate::utils::logger;

/// Shared entry point for every binary. Returns the process exit code.
pub fn launch(config: CliConfig) -> i32 {
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting solid-lld");
    tracing::debug!("CLI config: {:?}", config);

    let settings = match config.resolve() {
        Ok(settings) => settings,
        Err(e) => return report(&e),
    };

    let engine = DemoEngine::from_settings(&settings);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match engine.run(&mut out) {
        Ok(count) => {
            tracing::info!("✅ {} demonstration(s) completed", count);
            0
        }
        Err(e) => report(&e),
    }
}

fn report(e: &SolidError) -> i32 {
    tracing::error!(
        "❌ Run failed: {} (Severity: {:?})",
        e,
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    e.exit_code()
}
