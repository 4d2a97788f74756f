//! Postgres test harness built on testcontainers.
//!
//! One container is started for the whole test binary and seeded once; every
//! test gets its own pool against it. Tests only read, so they can share rows.

use anyhow::{Context, Result};
use sqlx::PgPool;
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;
use tokio::sync::OnceCell;

use super::fixtures::{SCHEMA, SEED};

struct SharedWarehouse {
    db_url: String,
    // Keeps the container alive for the whole run
    _postgres: ContainerAsync<Postgres>,
}

static SHARED_WAREHOUSE: OnceCell<SharedWarehouse> = OnceCell::const_new();

impl SharedWarehouse {
    async fn init() -> Result<Self> {
        // Run with: RUST_LOG=debug cargo test -- --nocapture
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let postgres = Postgres::default()
            .with_tag("16-alpine")
            .start()
            .await
            .context("Failed to start Postgres container")?;

        let host = postgres.get_host().await?;
        let port = postgres.get_host_port_ipv4(5432).await?;
        let db_url = format!("postgresql://postgres:postgres@{host}:{port}/postgres");

        let pool = PgPool::connect(&db_url)
            .await
            .context("Failed to connect to Postgres for seeding")?;
        for statement in SCHEMA.iter().chain(SEED) {
            sqlx::query(statement)
                .execute(&pool)
                .await
                .with_context(|| format!("Failed to run fixture statement: {statement}"))?;
        }
        pool.close().await;

        Ok(Self {
            db_url,
            _postgres: postgres,
        })
    }

    async fn get() -> &'static Self {
        SHARED_WAREHOUSE
            .get_or_init(|| async {
                Self::init()
                    .await
                    .expect("Failed to initialize shared test warehouse")
            })
            .await
    }
}

/// Per-test handle on the seeded warehouse.
pub struct TestHarness {
    pub db_pool: PgPool,
}

impl TestHarness {
    pub async fn new() -> Result<Self> {
        let warehouse = SharedWarehouse::get().await;
        let db_pool = PgPool::connect(&warehouse.db_url)
            .await
            .context("Failed to connect to test warehouse")?;
        Ok(Self { db_pool })
    }
}
