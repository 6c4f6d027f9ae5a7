mod sqlite;

pub use sqlite::*;
use std::borrow::Cow;

/// A throwaway database for tests, alive as long as the value.
pub trait TestDb {
    fn db_uri(&self) -> Cow<'_, str>;
}
