//! HTTP handlers for the round collection.
//!
//! Status-code mapping is the contract here: 201 on create, 200 on every
//! other success, 400 for invalid payloads (including the merged result
//! of a patch), 404 for unknown ids. Success bodies wrap the record in a
//! `data` envelope and never carry an `error` field.

use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::domain::rounds::RoundPayload;
use crate::error::AppError;
use crate::extractors::{RoundId, ValidatedJson};
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
struct DataBody<T> {
    data: T,
}

async fn create_round(
    app_state: web::Data<AppState>,
    body: ValidatedJson<RoundPayload>,
) -> Result<HttpResponse, AppError> {
    let payload = body.into_inner();
    let round = app_state.rounds.create(&payload)?;

    tracing::info!(round_id = round.id, "round.created");

    Ok(HttpResponse::Created().json(DataBody { data: round }))
}

async fn list_rounds(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let rounds = app_state.rounds.list();
    Ok(HttpResponse::Ok().json(DataBody { data: rounds }))
}

async fn get_round(
    round_id: RoundId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let round = app_state.rounds.get(round_id.0)?;
    Ok(HttpResponse::Ok().json(DataBody { data: round }))
}

async fn replace_round(
    round_id: RoundId,
    app_state: web::Data<AppState>,
    body: ValidatedJson<RoundPayload>,
) -> Result<HttpResponse, AppError> {
    let payload = body.into_inner();
    let round = app_state.rounds.replace(round_id.0, &payload)?;

    tracing::info!(round_id = round.id, "round.replaced");

    Ok(HttpResponse::Ok().json(DataBody { data: round }))
}

async fn patch_round(
    round_id: RoundId,
    app_state: web::Data<AppState>,
    body: ValidatedJson<RoundPayload>,
) -> Result<HttpResponse, AppError> {
    let payload = body.into_inner();
    let round = app_state.rounds.patch(round_id.0, &payload)?;

    tracing::info!(round_id = round.id, "round.patched");

    Ok(HttpResponse::Ok().json(DataBody { data: round }))
}

async fn delete_round(
    round_id: RoundId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let round = app_state.rounds.delete(round_id.0)?;

    tracing::info!(round_id = round.id, "round.deleted");

    Ok(HttpResponse::Ok().json(DataBody { data: round }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::post().to(create_round))
            .route(web::get().to(list_rounds)),
    )
    .service(
        web::resource("/{round_id}")
            .route(web::get().to(get_round))
            .route(web::put().to(replace_round))
            .route(web::patch().to(patch_round))
            .route(web::delete().to(delete_round)),
    );
}
