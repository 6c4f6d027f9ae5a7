use sea_orm::sea_query::{Expr, IntoColumnRef, SimpleExpr};
use sea_orm::{DbErr, TransactionError};
use std::error::Error;

/// Helpers for the result of `TransactionTrait::transaction`.
pub trait TransactionResultExt<T, E> {
    /// Logs an error raised inside the transaction body. Connection errors pass silently.
    #[must_use]
    fn log_transaction_err(self, message: &'static str) -> Self;

    /// Folds connection errors into the body's error type.
    fn flatten_res(self) -> Result<T, E>;
}

impl<T, E> TransactionResultExt<T, E> for Result<T, TransactionError<E>>
where
    E: From<DbErr> + Error + 'static,
{
    fn log_transaction_err(self, message: &'static str) -> Self {
        if let Err(TransactionError::Transaction(error)) = &self {
            tracing::error!(error = error as &dyn Error, "{message}");
        }
        self
    }

    fn flatten_res(self) -> Result<T, E> {
        self.map_err(|error| match error {
            TransactionError::Connection(error) => error.into(),
            TransactionError::Transaction(error) => error,
        })
    }
}

/// `column + 1`, evaluated by the database.
pub(crate) fn increment<C: IntoColumnRef>(column: C) -> SimpleExpr {
    Expr::col(column).add(1)
}

/// `SUM(column)` that is `0` on an empty table and decodes as `i64` on every backend.
pub(crate) fn sum_as_bigint(column: &str) -> SimpleExpr {
    Expr::cust(format!("CAST(COALESCE(SUM({column}), 0) AS BIGINT)"))
}
