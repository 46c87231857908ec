mod config;
mod data;
mod error;
mod report;
#[cfg(test)]
mod test_support;

use anyhow::{Context, Result};
use env_logger::Env;
use log::{debug, warn};

use config::RunConfig;
use data::aggregate::aggregate;
use data::loader::{load_terms, load_time_series};

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    run(&RunConfig::default())
}

fn run(config: &RunConfig) -> Result<()> {
    let store = load_time_series(&config.series_path).with_context(|| {
        format!(
            "loading employment series from {}",
            config.series_path.display()
        )
    })?;
    if store.is_empty() {
        warn!("employment series is empty; every term will report missing data");
    }
    if let Some((first, last)) = store.span() {
        debug!("employment series covers {first} to {last}");
    }

    let registry = load_terms(&config.terms_path)
        .with_context(|| format!("loading terms from {}", config.terms_path.display()))?;
    if registry.is_empty() {
        warn!("no terms loaded from {}", config.terms_path.display());
    }

    let result = aggregate(&registry, &store);

    report::print_summary(&result);
    report::write_report(&config.report_path, &result)?;
    println!("\nWrote {}", config.report_path.display());

    Ok(())
}
