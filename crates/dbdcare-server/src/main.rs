#[macro_use]
extern crate diesel_migrations;
use crate::db::DbBackend;
use crate::opt::{Commands, Db, Run};
use anyhow::{Context, Result};
use clap::Parser;
use dbdcare_config::seed::SeedBundle;
use dbdcare_core::password::hash_password;
use dbdcare_core::validation::{normalize_username, validate_password, validate_username};
use dbdcare_utils::net::create_listener;
use dbdcare_utils::tracing::TracingConfig;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;

mod app;
mod db;
mod opt;
mod permissions;
mod routes;
mod user;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);
const DEFAULT_PORT: u16 = 3030;

/// Shared, read-only state handed to the handlers as an `Extension`.
#[derive(Clone, Debug)]
pub(crate) struct AppConfig(Arc<SeedBundle>);

impl AppConfig {
    pub(crate) fn new(seed: SeedBundle) -> Self {
        Self(Arc::new(seed))
    }

    /// Content inserted by the seed maintenance action.
    pub fn seed(&self) -> &SeedBundle {
        &self.0
    }
}

/// Migrates the configured database and opens the sea-orm pool on it.
async fn connect(db: &Db) -> Result<DatabaseConnection> {
    let url = DbBackend::url_from_env()?;
    let applied = db::migration(&url).await?;
    tracing::info!(applied = applied.len(), "database schema is up to date");

    let mut options = ConnectOptions::new(url);
    if let Some(min) = db.db_min_connections {
        options.min_connections(min);
    }
    if let Some(max) = db.db_max_connections {
        options.max_connections(max);
    }
    options.sqlx_logging_level(log::LevelFilter::Debug);
    Ok(Database::connect(options).await?)
}

async fn bootstrap_admin(conn: &DatabaseConnection, username: &str, password: &str) -> Result<()> {
    let username = normalize_username(username);
    validate_username(&username)?;
    validate_password(password)?;
    let password_hash = hash_password(password)?;
    db::sea_orm::user::ensure_admin(conn, username, password_hash).await?;
    Ok(())
}

async fn run(opt: Run) -> Result<()> {
    let _guard = dbdcare_utils::tracing::setup(
        TracingConfig::builder()
            .package(env!("CARGO_PKG_NAME"))
            .version(env!("CARGO_PKG_VERSION"))
            .sentry_dsn(opt.sentry_dsn.clone())
            .env(opt.env.clone())
            .build(),
    )?;

    let conn = connect(&opt.db).await?;

    let seed = dbdcare_config::seed::load(opt.seed.as_deref())
        .await
        .context("failed to load the seed bundle")?;
    tracing::info!(
        materials = seed.materials.len(),
        posters = seed.posters.len(),
        leaflets = seed.leaflets.len(),
        videos = seed.videos.len(),
        "loaded seed bundle"
    );

    if let (Some(username), Some(password)) = (&opt.admin_username, &opt.admin_password) {
        bootstrap_admin(&conn, username, password).await?;
    }

    let app = app::create_app(AppConfig::new(seed), &opt.origins, conn)?;
    let listener = create_listener((opt.host, opt.port), (DEFAULT_HOST, DEFAULT_PORT)).await?;
    tracing::info!(local_addr = %listener.local_addr()?, "starting app");
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = opt::Cli::parse();
    let runtime = tokio::runtime::Builder::new_multi_thread().enable_all().build()?;
    runtime.block_on(async {
        match cli.command {
            Commands::Run(run_opt) => run(run_opt).await,
        }
    })
}
