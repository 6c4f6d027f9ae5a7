//! Conversions between the sea-orm entities and the API models.
//!
//! Implement `FromDbModel` (entity to API) or `FromModel` (API to active model) and use the
//! blanket `IntoModel` / `IntoDbModel` at call sites. Entities holding JSON columns use the
//! fallible `TryFromDbModel`.

pub mod activity;
pub mod checklist;
pub mod comment;
pub mod document;
pub mod material;
pub mod quiz;
pub mod user;
pub mod video;

/// Entity to API model.
pub trait FromDbModel<T>: Sized {
    fn from_db_model(model: T) -> Self;
}

pub trait IntoModel<T>: Sized {
    fn into_model(self) -> T;
}

impl<T, U> IntoModel<U> for T
where
    U: FromDbModel<T>,
{
    fn into_model(self) -> U {
        U::from_db_model(self)
    }
}

/// API model to active model.
pub trait FromModel<T>: Sized {
    fn from_model(model: T) -> Self;
}

pub trait IntoDbModel<T>: Sized {
    fn into_db_model(self) -> T;
}

impl<T, U> IntoDbModel<U> for T
where
    U: FromModel<T>,
{
    fn into_db_model(self) -> U {
        U::from_model(self)
    }
}

pub trait TryFromDbModel<T>: Sized {
    type Error;

    fn try_from_db_model(model: T) -> Result<Self, Self::Error>;
}

pub trait TryIntoModel<T>: Sized {
    type Error;

    fn try_into_model(self) -> Result<T, Self::Error>;
}

impl<T, U> TryIntoModel<U> for T
where
    U: TryFromDbModel<T>,
{
    type Error = U::Error;

    fn try_into_model(self) -> Result<U, U::Error> {
        U::try_from_db_model(self)
    }
}

/// `Set` for a provided field, `NotSet` for an omitted one.
pub(crate) fn set_if_some<T>(value: Option<T>) -> sea_orm::ActiveValue<T>
where
    T: Into<sea_orm::Value>,
{
    value.map_or(sea_orm::ActiveValue::NotSet, sea_orm::ActiveValue::Set)
}
