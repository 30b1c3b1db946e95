//! Domain records and their JSON shapes.

use serde::Serialize;

use crate::error::AppError;

/// Administrative region (departamento), root of the geographic hierarchy.
#[derive(Debug, Serialize)]
pub struct Region {
    pub id: u32,
    pub name: String,
}

/// Sub-region (provincia), many-to-one with [`Region`].
#[derive(Debug, Serialize)]
pub struct SubRegion {
    pub id: u32,
    pub name: String,
    pub parent_region_id: u32,
}

#[derive(Debug, Serialize)]
pub struct Institution {
    pub id: u32,
    pub name: String,
    pub category: Category,
}

/// Degree program with its RIASEC interest profile.
#[derive(Debug, Serialize)]
pub struct Program {
    pub id: u32,
    pub name: String,
    pub riasec_code: String,
}

/// Institution category, stored in the `tipo` column under its Spanish name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    University,
    Institute,
    PoliceAcademy,
}

impl Category {
    pub fn store_name(self) -> &'static str {
        match self {
            Category::University => "Universidad",
            Category::Institute => "Instituto",
            Category::PoliceAcademy => "Escuela Policial",
        }
    }

    pub fn from_store(raw: &str) -> Result<Self, AppError> {
        match raw {
            "Universidad" => Ok(Category::University),
            "Instituto" => Ok(Category::Institute),
            "Escuela Policial" => Ok(Category::PoliceAcademy),
            _ => Err(AppError::Database(format!(
                "unknown institution category: {raw}"
            ))),
        }
    }
}

/// One row of a `/match_riasec` response.
#[derive(Debug, Clone, Serialize)]
pub struct CodeMatch {
    #[serde(rename = "programName")]
    pub program_name: String,
    pub riasec_code: String,
    #[serde(rename = "institutionName")]
    pub institution_name: String,
    #[serde(rename = "institutionCategory")]
    pub institution_category: Category,
}

/// One row of a `/match/{dimension}` response.
#[derive(Debug, Serialize)]
pub struct DimensionMatch {
    #[serde(rename = "programName")]
    pub program_name: String,
    #[serde(rename = "institutionName")]
    pub institution_name: String,
}
