use axum::extract::{Path, Query, State};
use axum::Json;
use tracing::info;

use api::request::{ClaimRequest, PrintUpsertBody, PrintsQuery};
use api::response::Upserted;

use crate::error::AppError;
use crate::model::Print;
use crate::result::Result;
use crate::route::AppState;

pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<PrintsQuery>,
) -> Result<Json<Vec<Print>>> {
    Ok(Json(Print::db_find(&state.pool, query.claimed).await?))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<PrintUpsertBody>,
) -> Result<Json<Upserted>> {
    let prints = body.into_vec();
    for print in prints.iter() {
        Print::db_upsert(&state.pool, print).await?;
    }
    info!("ingested {} prints", prints.len());
    Ok(Json(Upserted {
        success: true,
        count: prints.len(),
    }))
}

pub async fn claim(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<ClaimRequest>,
) -> Result<Json<Print>> {
    let user = match req.user {
        Some(user) if !user.is_empty() => user,
        _ => return Err(AppError::BadRequest("user is required".to_string())),
    };
    match Print::db_claim(&state.pool, &id, &user).await? {
        Some(print) => {
            info!("print {} claimed by {}", print.id, user);
            Ok(Json(print))
        }
        None => Err(AppError::PrintNotFoundOrClaimed),
    }
}

pub async fn unclaim(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Print>> {
    match Print::db_unclaim(&state.pool, &id).await? {
        Some(print) => Ok(Json(print)),
        None => Err(AppError::PrintNotFound),
    }
}
