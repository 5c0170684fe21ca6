use anyhow::{Context, Result};
use koneque_contracts::config::Config;
use koneque_contracts::contracts::relationship;
use koneque_contracts::{ContractCategory, Registry};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the manifest (JSON format if LOG_FORMAT=json)
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    if log_format == "json" {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "koneque_contracts=info".into()),
            )
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "koneque_contracts=info".into()),
            )
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    info!("🚀 Koneque contract registry");

    let config = Config::from_env()?;
    let registry = Registry::load(&config)?;

    let network = registry.network();
    info!(
        "📊 {} (chain_id: {}, currency: {})",
        network.name, network.chain_id, network.currency.symbol
    );
    for category in ContractCategory::ALL {
        info!("📦 {}", category);
        for name in category.contracts() {
            let dependencies = relationship(*name)
                .map(|rel| {
                    rel.dependencies
                        .iter()
                        .map(|dep| dep.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                })
                .unwrap_or_default();
            info!(
                "   - {} {} [{}]",
                name,
                registry.explorer_url(*name),
                dependencies
            );
        }
    }

    let deployment = registry.deployment();
    info!(
        "🧾 Deployed {} at blocks {} (v{}, cost {})",
        deployment.date, deployment.block_range, deployment.version, deployment.total_cost
    );

    let manifest = serde_json::to_string_pretty(&registry.manifest())
        .context("Failed to serialize registry manifest")?;
    println!("{}", manifest);

    Ok(())
}
