use std::sync::Arc;

use anyhow::Context;

use restock_eoq::CostPolicy;
use restock_infra::{InMemoryStockStore, PostgresStockStore, StockLedger};

/// Everything the handlers need: the ledger (which owns the store) and
/// the deployment's cost policy.
#[derive(Clone)]
pub struct AppServices {
    pub ledger: StockLedger,
    pub policy: CostPolicy,
}

impl AppServices {
    /// In-memory services (tests, local dev without a database).
    pub fn in_memory(policy: CostPolicy) -> Self {
        Self {
            ledger: StockLedger::new(Arc::new(InMemoryStockStore::new())),
            policy,
        }
    }
}

fn env_f64(name: &str, default: f64) -> f64 {
    match std::env::var(name) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!("{name}={raw} is not a number; using default {default}");
            default
        }),
        Err(_) => default,
    }
}

/// Cost policy from the environment. The defaults are the reference
/// deployment's values: flat order cost 50, holding 20% of unit cost,
/// shortage 10% of unit price.
pub fn policy_from_env() -> CostPolicy {
    CostPolicy::new(
        env_f64("ORDER_COST", 50.0),
        env_f64("HOLDING_RATE", 0.2),
        env_f64("SHORTAGE_RATE", 0.1),
    )
}

/// Build services from the environment: Postgres when `DATABASE_URL` is
/// set, otherwise the in-memory store with a warning.
pub async fn build_services() -> anyhow::Result<AppServices> {
    let policy = policy_from_env();

    match std::env::var("DATABASE_URL") {
        Ok(url) => {
            let store = PostgresStockStore::connect(&url)
                .await
                .context("failed to connect to DATABASE_URL")?;
            store
                .ensure_schema()
                .await
                .context("failed to ensure database schema")?;
            Ok(AppServices {
                ledger: StockLedger::new(Arc::new(store)),
                policy,
            })
        }
        Err(_) => {
            tracing::warn!("DATABASE_URL not set; using volatile in-memory store");
            Ok(AppServices::in_memory(policy))
        }
    }
}
