//! Modelo de Plate
//!
//! Este módulo contiene el struct Plate y el vocabulario de ordenación
//! del catálogo. Mapea exactamente al schema PostgreSQL con primary key 'id'.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use rust_decimal::Decimal;
use uuid::Uuid;

/// Plate principal - mapea exactamente a la tabla plates
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Plate {
    pub id: Uuid,
    pub registration: String,
    pub purchase_price: Decimal,
    pub sale_price: Decimal,
    pub reserved: bool,
}

/// Datos de una matrícula nueva, antes de asignarle id.
/// `reserved` siempre se inicializa en false al persistir.
#[derive(Debug, Clone)]
pub struct NewPlate {
    pub registration: String,
    pub purchase_price: Decimal,
    pub sale_price: Decimal,
}

/// Orden de listado por precio de venta.
///
/// El parámetro de request acepta exactamente `"desc"` para descendente;
/// cualquier otro valor (incluido ausente) es ascendente.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some("desc") => SortOrder::Desc,
            _ => SortOrder::Asc,
        }
    }

    pub fn as_param(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn sql_keyword(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}
