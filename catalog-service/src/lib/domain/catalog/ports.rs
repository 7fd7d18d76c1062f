use async_trait::async_trait;

use crate::catalog::errors::CatalogError;
use crate::catalog::models::CatalogEntity;
use crate::catalog::models::CatalogRecord;
use crate::catalog::models::EntityId;

/// Port for catalog fetch operations.
#[async_trait]
pub trait CatalogServicePort: Send + Sync + 'static {
    /// Fetch a single catalog row by entity and identifier.
    ///
    /// # Arguments
    /// * `entity` - Which catalog table to fetch from
    /// * `id` - Row identifier
    ///
    /// # Returns
    /// The full row
    ///
    /// # Errors
    /// * `NotFound` - No row with this identifier
    /// * `DatabaseError` - Database operation failed
    async fn fetch(&self, entity: CatalogEntity, id: &EntityId)
        -> Result<CatalogRecord, CatalogError>;

    /// Delete an instrument row.
    ///
    /// # Arguments
    /// * `id` - Row identifier
    ///
    /// # Errors
    /// * `NotFound` - No row with this identifier
    /// * `DatabaseError` - Database operation failed
    async fn delete_instrument(&self, id: &EntityId) -> Result<(), CatalogError>;
}

/// Persistence operations for catalog rows.
#[async_trait]
pub trait CatalogRepository: Send + Sync + 'static {
    /// Load a catalog row by entity and identifier.
    ///
    /// # Arguments
    /// * `entity` - Which catalog table to read
    /// * `id` - Row identifier
    ///
    /// # Returns
    /// Optional catalog record (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find(
        &self,
        entity: CatalogEntity,
        id: &EntityId,
    ) -> Result<Option<CatalogRecord>, CatalogError>;

    /// Delete an instrument row.
    ///
    /// # Arguments
    /// * `id` - Row identifier
    ///
    /// # Returns
    /// Whether a row was deleted
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn delete_instrument(&self, id: &EntityId) -> Result<bool, CatalogError>;
}
