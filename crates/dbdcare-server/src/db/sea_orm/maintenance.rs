use dbdcare_config::seed::SeedBundle;
use dbdcare_core::media::youtube_id;
use dbdcare_db::util::TransactionResultExt;
use dbdcare_db::{comment, leaflet, material, poster, quiz_response, video};
use dbdcare_model::document::NewDocument;
use dbdcare_model::maintenance::{ClearReport, SeedReport, SeedResult};
use dbdcare_model::material::NewMaterial;
use dbdcare_model::video::NewVideo;
use dbdcare_model_tools::convert::IntoDbModel;
use sea_orm::{ConnectionTrait, DbErr, TransactionTrait};
use std::error::Error;

/// Deletes all content, comments and quiz responses in one transaction. Users, quiz questions,
/// checklist items and activity logs stay.
pub(crate) async fn clear_content<C: TransactionTrait>(conn: &C) -> Result<ClearReport, DbErr> {
    conn.transaction::<_, _, DbErr>(|txn| {
        Box::pin(async move {
            let mut report = ClearReport {
                materials: material::Mutation::delete_all(txn).await?,
                posters: poster::Mutation::delete_all(txn).await?,
                leaflets: leaflet::Mutation::delete_all(txn).await?,
                videos: video::Mutation::delete_all(txn).await?,
                comments: comment::Mutation::delete_all(txn).await?,
                quiz_responses: quiz_response::Mutation::delete_all(txn).await?,
                total: 0,
            };
            report.total = report.materials
                + report.posters
                + report.leaflets
                + report.videos
                + report.comments
                + report.quiz_responses;
            Ok(report)
        })
    })
    .await
    .flatten_res()
}

enum Outcome {
    Created,
    Skipped,
}

fn tally(result: &mut SeedResult, outcome: Result<Outcome, DbErr>, title: &str) {
    match outcome {
        Ok(Outcome::Created) => result.success += 1,
        Ok(Outcome::Skipped) => result.skipped += 1,
        Err(error) => {
            tracing::error!(error = &error as &dyn Error, title, "failed to seed item");
            result.failed += 1;
        }
    }
}

async fn seed_material<C: ConnectionTrait>(conn: &C, new: NewMaterial) -> Result<Outcome, DbErr> {
    if material::Query::find_by_title(conn, &new.title).await?.is_some() {
        return Ok(Outcome::Skipped);
    }
    material::Mutation::create(conn, new.into_db_model()).await?;
    Ok(Outcome::Created)
}

async fn seed_poster<C: ConnectionTrait>(conn: &C, new: NewDocument) -> Result<Outcome, DbErr> {
    if poster::Query::find_by_title(conn, &new.title).await?.is_some() {
        return Ok(Outcome::Skipped);
    }
    poster::Mutation::create(conn, new.into_db_model()).await?;
    Ok(Outcome::Created)
}

async fn seed_leaflet<C: ConnectionTrait>(conn: &C, new: NewDocument) -> Result<Outcome, DbErr> {
    if leaflet::Query::find_by_title(conn, &new.title).await?.is_some() {
        return Ok(Outcome::Skipped);
    }
    leaflet::Mutation::create(conn, new.into_db_model()).await?;
    Ok(Outcome::Created)
}

async fn seed_video<C: ConnectionTrait>(conn: &C, new: NewVideo) -> Result<Outcome, DbErr> {
    if video::Query::find_by_title(conn, &new.title).await?.is_some() {
        return Ok(Outcome::Skipped);
    }
    let Some(id) = youtube_id(&new.youtube_url) else {
        return Err(DbErr::Custom(format!("no video id in {}", new.youtube_url)));
    };
    video::Mutation::create(conn, (new, id).into_db_model()).await?;
    Ok(Outcome::Created)
}

/// Inserts every item of `seed` whose title is not taken yet. Items are inserted one by one, a
/// failing item is counted and the rest continue.
pub(crate) async fn seed_content<C: ConnectionTrait>(conn: &C, seed: &SeedBundle) -> SeedReport {
    let mut report = SeedReport::default();

    for item in seed.materials.iter().cloned() {
        let title = item.title.clone();
        tally(&mut report.materials, seed_material(conn, item.into()).await, &title);
    }
    for item in seed.posters.iter().cloned() {
        let title = item.title.clone();
        tally(&mut report.posters, seed_poster(conn, item.into()).await, &title);
    }
    for item in seed.leaflets.iter().cloned() {
        let title = item.title.clone();
        tally(&mut report.leaflets, seed_leaflet(conn, item.into()).await, &title);
    }
    for item in seed.videos.iter().cloned() {
        let title = item.title.clone();
        tally(&mut report.videos, seed_video(conn, item.into()).await, &title);
    }

    report.total = report.materials;
    report.total += report.posters;
    report.total += report.leaflets;
    report.total += report.videos;
    tracing::info!(total = ?report.total, "seeded content");
    report
}
