//! Servicio de matrículas
//!
//! Único punto de acceso a los datos persistidos del catálogo. Envuelve
//! el pipeline de consulta del repositorio y añade las operaciones de
//! registro único (alta, lookup, cambio de reserva).

use std::sync::Arc;
use uuid::Uuid;

use crate::models::plate::{NewPlate, Plate, SortOrder};
use crate::repositories::plate_repository::{PlateQuery, PlateStore};
use crate::utils::errors::AppError;

pub struct PlateService {
    store: Arc<dyn PlateStore>,
}

impl PlateService {
    pub fn new(store: Arc<dyn PlateStore>) -> Self {
        Self { store }
    }

    /// Página del catálogo en venta: filtro → sin reservadas → orden por
    /// precio de venta → paginación. Páginas fuera de rango devuelven
    /// un vector vacío.
    pub async fn get_plates_for_page(
        &self,
        page: u32,
        page_size: u32,
        sort: SortOrder,
        filter: Option<String>,
    ) -> Result<Vec<Plate>, AppError> {
        self.store
            .query(&PlateQuery {
                filter,
                exclude_reserved: true,
                sort,
                page,
                page_size,
            })
            .await
    }

    /// Alta de una matrícula: id asignado aquí, reserva inicializada en false.
    pub async fn add_plate(&self, new_plate: NewPlate) -> Result<Plate, AppError> {
        let plate = Plate {
            id: Uuid::new_v4(),
            registration: new_plate.registration,
            purchase_price: new_plate.purchase_price,
            sale_price: new_plate.sale_price,
            reserved: false,
        };

        self.store.insert(plate).await
    }

    /// Lookup puntual; ausente es `Ok(None)`.
    pub async fn get_plate_by_id(&self, id: Uuid) -> Result<Option<Plate>, AppError> {
        self.store.find_by_id(id).await
    }

    /// Fijar el flag de reserva de una matrícula existente.
    /// Una escritura de persistencia; `NotFound` si el id no existe.
    pub async fn set_plate_reservation_status(
        &self,
        id: Uuid,
        reserved: bool,
    ) -> Result<(), AppError> {
        if self.store.set_reserved(id, reserved).await? {
            Ok(())
        } else {
            Err(AppError::NotFound(format!(
                "Plate with id '{}' not found",
                id
            )))
        }
    }
}
