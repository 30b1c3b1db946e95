//! # MySQL
//!
//! Read-only access to the catalog tables.
//!
//! ## Schema
//! - `departamentos` (id_departamento, nombre)
//! - `provincias` (id_provincia, nombre, id_departamento)
//! - `instituciones` (id_institucion, nombre, tipo)
//! - `sedes` (id_institucion, id_provincia), one row per physical site
//! - `carreras` (id_carrera, nombre, riasec)
//! - `institucion_carrera` (id_institucion, id_carrera)
//!
//! All queries use positional binds. Candidate ordering for the code match
//! lives in [`crate::matching`], not in SQL.

use std::time::Duration;

use sqlx::{
    MySqlPool,
    mysql::{MySqlConnectOptions, MySqlPoolOptions},
};

use crate::{
    config::Config,
    error::AppError,
    models::{Category, CodeMatch, DimensionMatch, Institution, Program, Region, SubRegion},
};

/// Builds a lazy pool. No connection is attempted here, so the server comes
/// up even when MySQL is down and queries fail per-request instead.
pub fn init_pool(config: &Config) -> MySqlPool {
    let options = MySqlConnectOptions::new()
        .host(&config.mysql_host)
        .port(config.mysql_port)
        .username(&config.mysql_user)
        .password(&config.mysql_password)
        .database(&config.mysql_database);

    MySqlPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(5))
        .connect_lazy_with(options)
}

pub async fn list_regions(pool: &MySqlPool) -> Result<Vec<Region>, AppError> {
    let rows: Vec<(u32, String)> =
        sqlx::query_as("SELECT id_departamento, nombre FROM departamentos")
            .fetch_all(pool)
            .await?;

    Ok(rows.into_iter().map(|(id, name)| Region { id, name }).collect())
}

pub async fn list_sub_regions(pool: &MySqlPool, region_id: u32) -> Result<Vec<SubRegion>, AppError> {
    let rows: Vec<(u32, String, u32)> = sqlx::query_as(
        "SELECT id_provincia, nombre, id_departamento
         FROM provincias
         WHERE id_departamento = ?",
    )
    .bind(region_id)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|(id, name, parent_region_id)| SubRegion {
            id,
            name,
            parent_region_id,
        })
        .collect())
}

/// Institutions with a site in the sub-region. DISTINCT collapses
/// institutions linked through more than one site.
pub async fn list_institutions(
    pool: &MySqlPool,
    sub_region_id: u32,
) -> Result<Vec<Institution>, AppError> {
    let rows: Vec<(u32, String, String)> = sqlx::query_as(
        "SELECT DISTINCT i.id_institucion, i.nombre, i.tipo
         FROM instituciones i
         JOIN sedes s ON i.id_institucion = s.id_institucion
         WHERE s.id_provincia = ?
           AND i.tipo IN ('Universidad', 'Instituto', 'Escuela Policial')",
    )
    .bind(sub_region_id)
    .fetch_all(pool)
    .await?;

    rows.into_iter()
        .map(|(id, name, tipo)| {
            Ok(Institution {
                id,
                name,
                category: Category::from_store(&tipo)?,
            })
        })
        .collect()
}

pub async fn list_programs(
    pool: &MySqlPool,
    institution_id: u32,
) -> Result<Vec<Program>, AppError> {
    let rows: Vec<(u32, String, String)> = sqlx::query_as(
        "SELECT c.id_carrera, c.nombre, c.riasec
         FROM carreras c
         JOIN institucion_carrera ic ON c.id_carrera = ic.id_carrera
         WHERE ic.id_institucion = ?",
    )
    .bind(institution_id)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|(id, name, riasec_code)| Program {
            id,
            name,
            riasec_code,
        })
        .collect())
}

/// Programs whose profile equals the single dimension exactly, name-ordered.
pub async fn list_programs_by_dimension(
    pool: &MySqlPool,
    dimension: char,
) -> Result<Vec<DimensionMatch>, AppError> {
    let rows: Vec<(String, String)> = sqlx::query_as(
        "SELECT c.nombre, i.nombre
         FROM carreras c
         JOIN institucion_carrera ic ON c.id_carrera = ic.id_carrera
         JOIN instituciones i ON ic.id_institucion = i.id_institucion
         WHERE c.riasec = ?
         ORDER BY c.nombre",
    )
    .bind(dimension.to_string())
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|(program_name, institution_name)| DimensionMatch {
            program_name,
            institution_name,
        })
        .collect())
}

/// Every program/institution pair of one category, unordered.
pub async fn list_candidate_programs(
    pool: &MySqlPool,
    category: Category,
) -> Result<Vec<CodeMatch>, AppError> {
    let rows: Vec<(String, String, String)> = sqlx::query_as(
        "SELECT c.nombre, c.riasec, i.nombre
         FROM carreras c
         JOIN institucion_carrera ic ON c.id_carrera = ic.id_carrera
         JOIN instituciones i ON ic.id_institucion = i.id_institucion
         WHERE i.tipo = ?",
    )
    .bind(category.store_name())
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|(program_name, riasec_code, institution_name)| CodeMatch {
            program_name,
            riasec_code,
            institution_name,
            institution_category: category,
        })
        .collect())
}
