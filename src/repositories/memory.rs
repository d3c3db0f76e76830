//! Implementación en memoria de `PlateStore` para tests.
//!
//! Replica el pipeline de consulta etapa por etapa, en el mismo orden y
//! con la misma semántica de matching (substring case-insensitive) que
//! la implementación PostgreSQL.

use async_trait::async_trait;
use std::sync::Mutex;
use uuid::Uuid;

use crate::models::plate::{Plate, SortOrder};
use crate::repositories::plate_repository::{PlateQuery, PlateStore};
use crate::utils::errors::AppError;

#[derive(Default)]
pub struct InMemoryPlateStore {
    plates: Mutex<Vec<Plate>>,
}

impl InMemoryPlateStore {
    pub fn with_plates(plates: Vec<Plate>) -> Self {
        Self {
            plates: Mutex::new(plates),
        }
    }
}

#[async_trait]
impl PlateStore for InMemoryPlateStore {
    async fn query(&self, query: &PlateQuery) -> Result<Vec<Plate>, AppError> {
        let plates = self.plates.lock().unwrap();

        // (1) filtro por substring, case-insensitive como ILIKE
        let filter = query
            .filter
            .as_deref()
            .filter(|f| !f.is_empty())
            .map(str::to_lowercase);
        let mut result: Vec<Plate> = plates
            .iter()
            .filter(|p| match &filter {
                Some(f) => p.registration.to_lowercase().contains(f),
                None => true,
            })
            // (2) exclusión de reservadas
            .filter(|p| !(query.exclude_reserved && p.reserved))
            .cloned()
            .collect();

        // (3) orden por sale_price
        result.sort_by(|a, b| match query.sort {
            SortOrder::Asc => a.sale_price.cmp(&b.sale_price),
            SortOrder::Desc => b.sale_price.cmp(&a.sale_price),
        });

        // (4) paginación 1-based
        let offset = query.offset() as usize;
        let limit = query.limit() as usize;
        Ok(result.into_iter().skip(offset).take(limit).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Plate>, AppError> {
        let plates = self.plates.lock().unwrap();
        Ok(plates.iter().find(|p| p.id == id).cloned())
    }

    async fn insert(&self, plate: Plate) -> Result<Plate, AppError> {
        let mut plates = self.plates.lock().unwrap();
        plates.push(plate.clone());
        Ok(plate)
    }

    async fn set_reserved(&self, id: Uuid, reserved: bool) -> Result<bool, AppError> {
        let mut plates = self.plates.lock().unwrap();
        match plates.iter_mut().find(|p| p.id == id) {
            Some(plate) => {
                plate.reserved = reserved;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
