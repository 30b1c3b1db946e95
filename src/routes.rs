use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::{
    database::{list_institutions, list_programs, list_regions, list_sub_regions},
    error::AppError,
    matching::{match_by_code, match_by_dimension},
    models::{CodeMatch, DimensionMatch, Institution, Program, Region, SubRegion},
    state::AppState,
};

pub async fn root_handler() -> &'static str {
    "API Vocacional funcionando"
}

pub async fn regions_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Region>>, AppError> {
    Ok(Json(list_regions(&state.pool).await?))
}

pub async fn sub_regions_handler(
    State(state): State<Arc<AppState>>,
    Path(region_id): Path<u32>,
) -> Result<Json<Vec<SubRegion>>, AppError> {
    Ok(Json(list_sub_regions(&state.pool, region_id).await?))
}

pub async fn institutions_handler(
    State(state): State<Arc<AppState>>,
    Path(sub_region_id): Path<u32>,
) -> Result<Json<Vec<Institution>>, AppError> {
    Ok(Json(list_institutions(&state.pool, sub_region_id).await?))
}

pub async fn programs_handler(
    State(state): State<Arc<AppState>>,
    Path(institution_id): Path<u32>,
) -> Result<Json<Vec<Program>>, AppError> {
    Ok(Json(list_programs(&state.pool, institution_id).await?))
}

#[derive(Deserialize)]
pub struct MatchParams {
    // A missing `code` is treated as empty and rejected by the engine.
    #[serde(default)]
    code: String,
}

pub async fn match_riasec_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<MatchParams>,
) -> Result<Json<Vec<CodeMatch>>, AppError> {
    Ok(Json(match_by_code(&state.pool, &params.code).await?))
}

pub async fn match_dimension_handler(
    State(state): State<Arc<AppState>>,
    Path(dimension): Path<String>,
) -> Result<Json<Vec<DimensionMatch>>, AppError> {
    Ok(Json(match_by_dimension(&state.pool, &dimension).await?))
}
