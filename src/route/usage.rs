use axum::extract::State;
use axum::Json;

use api::response::FilamentUsage;

use crate::model::Print;
use crate::result::Result;
use crate::route::AppState;

pub async fn index(State(state): State<AppState>) -> Result<Json<FilamentUsage>> {
    let prints = Print::db_find(&state.pool, Some(true)).await?;
    Ok(Json(crate::usage::aggregate(&prints)))
}
