use clap::Parser;
use user_age_check::utils::logger;
use user_age_check::{sample_records, AgeBounds, CliConfig, Driver};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting user-age-check");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let driver = Driver::with_bounds(AgeBounds::default())?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let summary = driver.run(sample_records(), &mut out)?;

    // Rejected records never change the exit status.
    tracing::debug!("Run finished: {:?}", summary);

    Ok(())
}
