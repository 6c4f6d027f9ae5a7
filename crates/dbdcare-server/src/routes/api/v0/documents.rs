//! Shared handling of the two downloadable collections. The route modules `posters` and
//! `leaflets` only bind these to their paths.

use crate::routes::api::v0::error::{ContentError, require, require_if_present};
use axum::Json;
use axum::response::{IntoResponse, Response};
use dbdcare_core::filter::filter;
use dbdcare_db::{leaflet, poster};
use dbdcare_model::document::{Document, NewDocument, UpdateDocument};
use dbdcare_model::filter::ListQuery;
use dbdcare_model_tools::convert::{IntoDbModel, IntoModel};
use http::StatusCode;
use sea_orm::{DatabaseConnection, DbErr};
use uuid::Uuid;

#[derive(Debug, Clone, Copy)]
pub(crate) enum Collection {
    Poster,
    Leaflet,
}

impl Collection {
    fn label(self) -> &'static str {
        match self {
            Self::Poster => "Poster",
            Self::Leaflet => "Leaflet",
        }
    }

    async fn all(self, conn: &DatabaseConnection) -> Result<Vec<Document>, DbErr> {
        let documents = match self {
            Self::Poster => poster::Query::all(conn).await?.into_iter().map(IntoModel::into_model).collect(),
            Self::Leaflet => leaflet::Query::all(conn).await?.into_iter().map(IntoModel::into_model).collect(),
        };
        Ok(documents)
    }

    async fn find(self, conn: &DatabaseConnection, id: Uuid) -> Result<Option<Document>, DbErr> {
        let document = match self {
            Self::Poster => poster::Query::find_by_id(conn, id).await?.map(IntoModel::into_model),
            Self::Leaflet => leaflet::Query::find_by_id(conn, id).await?.map(IntoModel::into_model),
        };
        Ok(document)
    }

    async fn increment_downloads(self, conn: &DatabaseConnection, id: Uuid) -> Result<bool, DbErr> {
        match self {
            Self::Poster => poster::Mutation::increment_downloads(conn, id).await,
            Self::Leaflet => leaflet::Mutation::increment_downloads(conn, id).await,
        }
    }

    async fn create(self, conn: &DatabaseConnection, new: NewDocument) -> Result<Document, DbErr> {
        let document = match self {
            Self::Poster => poster::Mutation::create(conn, new.into_db_model()).await?.into_model(),
            Self::Leaflet => leaflet::Mutation::create(conn, new.into_db_model()).await?.into_model(),
        };
        Ok(document)
    }

    async fn update(self, conn: &DatabaseConnection, id: Uuid, update: UpdateDocument) -> Result<Document, DbErr> {
        let document = match self {
            Self::Poster => poster::Mutation::update(conn, id, update.into_db_model()).await?.into_model(),
            Self::Leaflet => leaflet::Mutation::update(conn, id, update.into_db_model()).await?.into_model(),
        };
        Ok(document)
    }

    async fn delete(self, conn: &DatabaseConnection, id: Uuid) -> Result<bool, DbErr> {
        match self {
            Self::Poster => poster::Mutation::delete(conn, id).await,
            Self::Leaflet => leaflet::Mutation::delete(conn, id).await,
        }
    }
}

pub(crate) async fn list(
    collection: Collection,
    conn: &DatabaseConnection,
    query: &ListQuery,
) -> Result<Response, ContentError> {
    let documents = collection.all(conn).await?;
    Ok(Json(filter(documents, query)).into_response())
}

pub(crate) async fn get(collection: Collection, conn: &DatabaseConnection, id: Uuid) -> Result<Response, ContentError> {
    let document = collection
        .find(conn, id)
        .await?
        .ok_or(ContentError::NotFound(collection.label()))?;
    Ok(Json(document).into_response())
}

pub(crate) async fn download(
    collection: Collection,
    conn: &DatabaseConnection,
    id: Uuid,
) -> Result<Response, ContentError> {
    if !collection.increment_downloads(conn, id).await? {
        return Err(ContentError::NotFound(collection.label()));
    }
    Ok(StatusCode::NO_CONTENT.into_response())
}

pub(crate) async fn create(
    collection: Collection,
    conn: &DatabaseConnection,
    new: NewDocument,
) -> Result<Response, ContentError> {
    require(&new.title, "Judul")?;
    require(&new.file_url, "URL file")?;

    let created = collection.create(conn, new).await?;
    tracing::info!(collection = collection.label(), id = %created.id, "created document");
    Ok((StatusCode::CREATED, Json(created)).into_response())
}

pub(crate) async fn update(
    collection: Collection,
    conn: &DatabaseConnection,
    id: Uuid,
    update: UpdateDocument,
) -> Result<Response, ContentError> {
    require_if_present(update.title.as_ref(), "Judul")?;
    require_if_present(update.file_url.as_ref(), "URL file")?;

    if collection.find(conn, id).await?.is_none() {
        return Err(ContentError::NotFound(collection.label()));
    }
    let updated = collection.update(conn, id, update).await?;
    Ok(Json(updated).into_response())
}

pub(crate) async fn delete(
    collection: Collection,
    conn: &DatabaseConnection,
    id: Uuid,
) -> Result<Response, ContentError> {
    if !collection.delete(conn, id).await? {
        return Err(ContentError::NotFound(collection.label()));
    }
    tracing::info!(collection = collection.label(), %id, "deleted document");
    Ok(StatusCode::NO_CONTENT.into_response())
}
