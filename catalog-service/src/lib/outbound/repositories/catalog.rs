use async_trait::async_trait;
use sqlx::prelude::FromRow;
use sqlx::SqlitePool;

use crate::catalog::errors::CatalogError;
use crate::catalog::models::CatalogEntity;
use crate::catalog::models::CatalogRecord;
use crate::catalog::models::EntityId;
use crate::catalog::models::Instrument;
use crate::catalog::models::Musician;
use crate::catalog::ports::CatalogRepository;

// One fixed statement per entity; identifiers are only ever bound.
const FETCH_INSTRUMENT_SQL: &str = r#"
    SELECT id, name, description, origin_date, image_uri
    FROM instruments
    WHERE id = ?1
"#;

const FETCH_MUSICIAN_SQL: &str = r#"
    SELECT id, name, nationality, description
    FROM musicians
    WHERE id = ?1
"#;

const DELETE_INSTRUMENT_SQL: &str = r#"
    DELETE FROM instruments
    WHERE id = ?1
"#;

pub struct SqliteCatalogRepository {
    pool: SqlitePool,
}

impl SqliteCatalogRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct InstrumentRow {
    id: i64,
    name: String,
    description: String,
    origin_date: Option<String>,
    image_uri: Option<String>,
}

impl From<InstrumentRow> for Instrument {
    fn from(row: InstrumentRow) -> Self {
        Self {
            id: EntityId(row.id),
            name: row.name,
            description: row.description,
            origin_date: row.origin_date,
            image_uri: row.image_uri,
        }
    }
}

#[derive(Debug, FromRow)]
struct MusicianRow {
    id: i64,
    name: String,
    nationality: Option<String>,
    description: String,
}

impl From<MusicianRow> for Musician {
    fn from(row: MusicianRow) -> Self {
        Self {
            id: EntityId(row.id),
            name: row.name,
            nationality: row.nationality,
            description: row.description,
        }
    }
}

#[async_trait]
impl CatalogRepository for SqliteCatalogRepository {
    async fn find(
        &self,
        entity: CatalogEntity,
        id: &EntityId,
    ) -> Result<Option<CatalogRecord>, CatalogError> {
        let record = match entity {
            CatalogEntity::Instruments => sqlx::query_as::<_, InstrumentRow>(FETCH_INSTRUMENT_SQL)
                .bind(id.0)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| CatalogError::DatabaseError(e.to_string()))?
                .map(|row| CatalogRecord::Instrument(row.into())),
            CatalogEntity::Musicians => sqlx::query_as::<_, MusicianRow>(FETCH_MUSICIAN_SQL)
                .bind(id.0)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| CatalogError::DatabaseError(e.to_string()))?
                .map(|row| CatalogRecord::Musician(row.into())),
        };

        Ok(record)
    }

    async fn delete_instrument(&self, id: &EntityId) -> Result<bool, CatalogError> {
        let result = sqlx::query(DELETE_INSTRUMENT_SQL)
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| CatalogError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}
