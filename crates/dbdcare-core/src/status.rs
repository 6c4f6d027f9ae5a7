use dbdcare_model::status::ComponentStatus;
use sea_orm::prelude::Expr;
use sea_orm::sea_query::Query;
use sea_orm::{ConnectionTrait, DatabaseConnection};
use std::error::Error;
use std::time::Duration;
use tokio::time::timeout;
use tracing::instrument;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

#[instrument(skip_all)]
pub async fn get_sea_orm_db_status(conn: &DatabaseConnection, duration: Option<Duration>) -> ComponentStatus {
    let mut query = Query::select();
    query.expr(Expr::current_timestamp());
    let ping = conn.execute(conn.get_database_backend().build(&query));
    match timeout(duration.unwrap_or(DEFAULT_TIMEOUT), ping).await {
        Ok(Ok(_)) => ComponentStatus::Ok,
        Ok(Err(error)) => {
            tracing::error!(error = &error as &dyn Error, "db error during health check");
            ComponentStatus::failed(error.to_string())
        }
        Err(error) => {
            tracing::error!(error = &error as &dyn Error, "db health check timed out");
            ComponentStatus::failed("timeout")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult};
    use test_log::test;

    #[test(tokio::test)]
    async fn test_db_ok() {
        let conn = MockDatabase::new(DatabaseBackend::Sqlite)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();
        assert!(get_sea_orm_db_status(&conn, None).await.is_ok());
    }

    #[test(tokio::test)]
    async fn test_db_error() {
        let conn = MockDatabase::new(DatabaseBackend::Sqlite)
            .append_exec_errors([DbErr::Custom("down".to_owned())])
            .into_connection();
        assert!(!get_sea_orm_db_status(&conn, None).await.is_ok());
    }
}
