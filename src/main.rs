use clap::Parser;
use std::io::Write;
use time_traveler::utils::{logger, validation::Validate};
use time_traveler::{CliConfig, TravelerSession, YearDifferenceCalculator};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_logger(config.verbose, config.log_json);

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let settings = match config.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!(
                "❌ Failed to load config file '{}': {}",
                config.config.as_deref().unwrap_or_default(),
                e
            );
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    if let Some(year) = settings.fixed_year {
        tracing::debug!("🕰️ Using fixed current year {}", year);
    }
    tracing::debug!("Output format: {}", settings.format);

    let calculator = YearDifferenceCalculator::with_clock(settings.clock());
    let session = TravelerSession::new(calculator, settings.format);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if config.periods.is_empty() {
        session.run_interactive(std::io::stdin().lock(), &mut out)?;
        return Ok(());
    }

    let failures = session.run_batch(&config.periods, &mut out, &mut std::io::stderr())?;
    if failures > 0 {
        out.flush()?;
        std::process::exit(1);
    }

    Ok(())
}
