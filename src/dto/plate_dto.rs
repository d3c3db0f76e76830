//! DTOs del catálogo de matrículas

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::plate::Plate;

/// Parámetros del listado. Los defaults se aplican en el controller:
/// page=1, sort_order="asc", filter ausente.
#[derive(Debug, Default, Deserialize)]
pub struct PlateListQuery {
    pub page: Option<u32>,
    pub sort_order: Option<String>,
    pub filter: Option<String>,
}

/// Request para crear una matrícula
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePlateRequest {
    #[validate(length(min = 1, max = 20))]
    pub registration: String,
    #[validate(range(min = 0.0))]
    pub purchase_price: f64,
    #[validate(range(min = 0.0))]
    pub sale_price: f64,
}

/// Response de matrícula
#[derive(Debug, Serialize)]
pub struct PlateResponse {
    pub id: Uuid,
    pub registration: String,
    pub purchase_price: f64,
    pub sale_price: f64,
    pub reserved: bool,
}

impl From<Plate> for PlateResponse {
    fn from(plate: Plate) -> Self {
        Self {
            id: plate.id,
            registration: plate.registration,
            purchase_price: plate.purchase_price.to_string().parse().unwrap_or(0.0),
            sale_price: plate.sale_price.to_string().parse().unwrap_or(0.0),
            reserved: plate.reserved,
        }
    }
}

/// Response del listado: la página de matrículas más los parámetros
/// de request ecoados como contexto de presentación.
#[derive(Debug, Serialize)]
pub struct PlateListResponse {
    pub plates: Vec<PlateResponse>,
    pub page: u32,
    pub sort_order: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
}

/// Formulario vacío de alta, sin efectos secundarios.
#[derive(Debug, Serialize)]
pub struct PlateFormResponse {
    pub registration: Option<String>,
    pub purchase_price: Option<f64>,
    pub sale_price: Option<f64>,
}

impl PlateFormResponse {
    pub fn empty() -> Self {
        Self {
            registration: None,
            purchase_price: None,
            sale_price: None,
        }
    }
}
