pub(crate) mod error;
#[cfg(feature = "postgres")]
pub(crate) mod postgres;
pub(crate) mod sea_orm;
#[cfg(feature = "sqlite")]
pub(crate) mod sqlite;

use crate::db::error::DbError;
use diesel::Connection;
use diesel::backend::Backend;
use diesel::migration::{MigrationSource, MigrationVersion};
use diesel_migrations::MigrationHarness;
use std::env;
use url::Url;

/// Database engines this build can talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DbBackend {
    #[cfg(feature = "sqlite")]
    Sqlite,
    #[cfg(feature = "postgres")]
    Postgres,
}

impl DbBackend {
    /// Accepts `sqlite`, `postgresql` and `postgres`, also as the prefix of a `name+driver` scheme.
    pub(crate) fn parse(name: &str) -> Result<Self, DbError> {
        match name.split('+').next().unwrap_or_default() {
            #[cfg(feature = "sqlite")]
            "sqlite" => Ok(Self::Sqlite),
            #[cfg(feature = "postgres")]
            "postgresql" | "postgres" => Ok(Self::Postgres),
            "" => Err(DbError::UnknownDbType("NO_TYPE".to_owned())),
            other => Err(DbError::UnknownDbType(other.to_owned())),
        }
    }

    /// Reads `ENGINE_DB_TYPE` and the matching `SQLITE_URL` / `POSTGRESQL_URL`.
    pub(crate) fn url_from_env() -> Result<Url, DbError> {
        let engine = env::var("ENGINE_DB_TYPE").map_err(|_| DbError::MissingEnv("ENGINE_DB_TYPE"))?;
        let key = match Self::parse(&engine)? {
            #[cfg(feature = "sqlite")]
            Self::Sqlite => "SQLITE_URL",
            #[cfg(feature = "postgres")]
            Self::Postgres => "POSTGRESQL_URL",
        };
        let url = env::var(key).map_err(|_| DbError::MissingEnv(key))?;
        Ok(Url::parse(&url)?)
    }
}

pub(crate) fn run_migrations<DB: Backend, C: MigrationHarness<DB>, S: MigrationSource<DB>>(
    conn: &mut C,
    source: S,
) -> Result<Vec<MigrationVersion<'static>>, DbError> {
    let applied = conn
        .run_pending_migrations(source)
        .map_err(|err| DbError::MigrationFailed(err.to_string()))?;
    let applied: Vec<_> = applied.into_iter().map(|version| version.as_owned()).collect();
    tracing::debug!(applied = applied.len(), "ran pending migrations");
    Ok(applied)
}

/// Brings the schema behind `url` up to date and returns the versions that were applied.
pub(crate) async fn migration(url: &Url) -> Result<Vec<MigrationVersion<'static>>, DbError> {
    let result = match DbBackend::parse(url.scheme())? {
        #[cfg(feature = "sqlite")]
        DbBackend::Sqlite => {
            let mut conn = diesel::SqliteConnection::establish(url.as_ref())?;
            run_migrations(&mut conn, sqlite::MIGRATIONS)
        }
        #[cfg(feature = "postgres")]
        DbBackend::Postgres => {
            let mut conn = diesel::PgConnection::establish(url.as_ref())?;
            run_migrations(&mut conn, postgres::MIGRATIONS)
        }
    };
    result.inspect_err(|error| tracing::error!(error = error as &dyn std::error::Error, "failed to migrate db"))
}
