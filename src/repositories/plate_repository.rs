//! Repositorio de matrículas
//!
//! Este módulo define la capacidad abstracta `PlateStore` (pipeline de
//! consulta + operaciones de registro único) y su implementación PostgreSQL.
//! El handle del repositorio se pasa explícitamente; no hay contexto de
//! base de datos global.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::plate::{Plate, SortOrder};
use crate::utils::errors::AppError;

/// Parámetros del pipeline de consulta del catálogo.
///
/// El orden de procesamiento es fijo: (1) filtro por substring de
/// `registration`, (2) exclusión de reservadas, (3) orden por `sale_price`,
/// (4) paginación offset/limit. Cada etapa estrecha o reordena la salida
/// de la anterior.
#[derive(Debug, Clone)]
pub struct PlateQuery {
    pub filter: Option<String>,
    pub exclude_reserved: bool,
    pub sort: SortOrder,
    pub page: u32,
    pub page_size: u32,
}

impl PlateQuery {
    /// Offset 1-based. Una página menor que 1 se trata como la página 1.
    pub fn offset(&self) -> i64 {
        (i64::from(self.page.max(1)) - 1) * i64::from(self.page_size)
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.page_size)
    }

    /// Patrón ILIKE con los comodines escapados, para que el filtro sea
    /// un substring literal. None cuando el filtro está ausente o vacío.
    pub fn filter_pattern(&self) -> Option<String> {
        self.filter
            .as_deref()
            .filter(|f| !f.is_empty())
            .map(|f| {
                let escaped = f
                    .replace('\\', "\\\\")
                    .replace('%', "\\%")
                    .replace('_', "\\_");
                format!("%{}%", escaped)
            })
    }
}

/// Capacidad de almacenamiento del catálogo.
///
/// Contrato de matching del filtro: substring case-insensitive. La
/// implementación PostgreSQL usa ILIKE; cualquier otra implementación
/// debe coincidir con esa semántica.
#[async_trait]
pub trait PlateStore: Send + Sync {
    /// Ejecutar el pipeline filtro → exclusión → orden → paginación.
    /// Páginas fuera de rango devuelven un vector vacío, nunca un error.
    async fn query(&self, query: &PlateQuery) -> Result<Vec<Plate>, AppError>;

    /// Lookup puntual. Ausente es `Ok(None)`, nunca un error.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Plate>, AppError>;

    /// Persistir un registro nuevo y devolverlo tal como quedó almacenado.
    async fn insert(&self, plate: Plate) -> Result<Plate, AppError>;

    /// Fijar el flag de reserva. Devuelve false si no existe el registro.
    async fn set_reserved(&self, id: Uuid, reserved: bool) -> Result<bool, AppError>;
}

pub struct SqlPlateRepository {
    pool: PgPool,
}

impl SqlPlateRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlateStore for SqlPlateRepository {
    async fn query(&self, query: &PlateQuery) -> Result<Vec<Plate>, AppError> {
        // ORDER BY no es parametrizable en Postgres; el keyword sale de un
        // enum cerrado, nunca de input del request.
        let order = query.sort.sql_keyword();

        tracing::debug!(
            "Consultando plates: filter={:?} exclude_reserved={} sort={} offset={} limit={}",
            query.filter, query.exclude_reserved, order, query.offset(), query.limit()
        );

        let plates = if let Some(pattern) = query.filter_pattern() {
            sqlx::query_as::<_, Plate>(&format!(
                r#"
                SELECT id, registration, purchase_price, sale_price, reserved
                FROM plates
                WHERE registration ILIKE $1 AND NOT ($2 AND reserved)
                ORDER BY sale_price {}
                LIMIT $3 OFFSET $4
                "#,
                order
            ))
            .bind(pattern)
            .bind(query.exclude_reserved)
            .bind(query.limit())
            .bind(query.offset())
            .fetch_all(&self.pool)
            .await?
        } else {
            sqlx::query_as::<_, Plate>(&format!(
                r#"
                SELECT id, registration, purchase_price, sale_price, reserved
                FROM plates
                WHERE NOT ($1 AND reserved)
                ORDER BY sale_price {}
                LIMIT $2 OFFSET $3
                "#,
                order
            ))
            .bind(query.exclude_reserved)
            .bind(query.limit())
            .bind(query.offset())
            .fetch_all(&self.pool)
            .await?
        };

        Ok(plates)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Plate>, AppError> {
        let plate = sqlx::query_as::<_, Plate>(
            "SELECT id, registration, purchase_price, sale_price, reserved FROM plates WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(plate)
    }

    async fn insert(&self, plate: Plate) -> Result<Plate, AppError> {
        let created = sqlx::query_as::<_, Plate>(
            r#"
            INSERT INTO plates (id, registration, purchase_price, sale_price, reserved)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, registration, purchase_price, sale_price, reserved
            "#,
        )
        .bind(plate.id)
        .bind(plate.registration)
        .bind(plate.purchase_price)
        .bind(plate.sale_price)
        .bind(plate.reserved)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn set_reserved(&self, id: Uuid, reserved: bool) -> Result<bool, AppError> {
        let result = sqlx::query("UPDATE plates SET reserved = $2 WHERE id = $1")
            .bind(id)
            .bind(reserved)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
