//! Controller del catálogo de matrículas
//!
//! Adapta los parámetros de request a llamadas al servicio. No contiene
//! lógica de negocio más allá del defaulting de parámetros.

use rust_decimal::Decimal;
use uuid::Uuid;
use validator::Validate;

use crate::dto::plate_dto::{CreatePlateRequest, PlateListQuery, PlateListResponse, PlateResponse};
use crate::models::plate::{NewPlate, SortOrder};
use crate::services::plate_service::PlateService;
use crate::utils::errors::{not_found_error, validation_error, AppError};

/// Tamaño de página fijo del listado.
const PAGE_SIZE: u32 = 20;

pub struct PlateController {
    service: PlateService,
}

impl PlateController {
    pub fn new(service: PlateService) -> Self {
        Self { service }
    }

    /// Listado paginado con los parámetros ecoados como contexto.
    pub async fn list(&self, query: PlateListQuery) -> Result<PlateListResponse, AppError> {
        let page = query.page.unwrap_or(1);
        let sort = SortOrder::from_param(query.sort_order.as_deref());

        let plates = self
            .service
            .get_plates_for_page(page, PAGE_SIZE, sort, query.filter.clone())
            .await?;

        Ok(PlateListResponse {
            plates: plates.into_iter().map(PlateResponse::from).collect(),
            page,
            sort_order: sort.as_param().to_string(),
            filter: query.filter,
        })
    }

    /// Alta de matrícula. Input inválido devuelve errores de campo sin
    /// persistir nada; un fallo de persistencia sube como
    /// `StorageUnavailable` y la capa HTTP lo convierte en un error
    /// genérico sin detalle de la causa.
    pub async fn add(&self, request: CreatePlateRequest) -> Result<PlateResponse, AppError> {
        request.validate()?;

        let purchase_price = Decimal::from_f64_retain(request.purchase_price)
            .ok_or_else(|| validation_error("purchase_price", "Invalid price value"))?;
        let sale_price = Decimal::from_f64_retain(request.sale_price)
            .ok_or_else(|| validation_error("sale_price", "Invalid price value"))?;

        let plate = self
            .service
            .add_plate(NewPlate {
                registration: request.registration,
                purchase_price,
                sale_price,
            })
            .await?;

        Ok(PlateResponse::from(plate))
    }

    /// Lookup puntual; `NotFound` cuando no existe.
    pub async fn get_by_id(&self, id: Uuid) -> Result<PlateResponse, AppError> {
        let plate = self
            .service
            .get_plate_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Plate", &id.to_string()))?;

        Ok(PlateResponse::from(plate))
    }

    /// Alternar el flag de reserva. Un id inexistente es un no-op.
    ///
    /// La negación se calcula sobre el valor leído antes de escribir; dos
    /// toggles concurrentes de la misma matrícula pueden perder una
    /// actualización. El aislamiento queda delegado al store.
    pub async fn toggle_reservation(&self, id: Uuid) -> Result<(), AppError> {
        match self.service.get_plate_by_id(id).await? {
            Some(plate) => {
                self.service
                    .set_plate_reservation_status(id, !plate.reserved)
                    .await
            }
            None => {
                tracing::warn!("Toggle de reserva sobre matrícula inexistente: {}", id);
                Ok(())
            }
        }
    }
}
