use std::sync::Arc;

use async_trait::async_trait;

use crate::catalog::errors::CatalogError;
use crate::catalog::models::CatalogEntity;
use crate::catalog::models::CatalogRecord;
use crate::catalog::models::EntityId;
use crate::catalog::ports::CatalogRepository;
use crate::catalog::ports::CatalogServicePort;

/// Domain service implementation for catalog fetches.
pub struct CatalogService<CR>
where
    CR: CatalogRepository,
{
    repository: Arc<CR>,
}

impl<CR> CatalogService<CR>
where
    CR: CatalogRepository,
{
    pub fn new(repository: Arc<CR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<CR> CatalogServicePort for CatalogService<CR>
where
    CR: CatalogRepository,
{
    async fn fetch(
        &self,
        entity: CatalogEntity,
        id: &EntityId,
    ) -> Result<CatalogRecord, CatalogError> {
        self.repository
            .find(entity, id)
            .await?
            .ok_or(CatalogError::NotFound {
                entity: entity.to_string(),
                id: id.to_string(),
            })
    }

    async fn delete_instrument(&self, id: &EntityId) -> Result<(), CatalogError> {
        let deleted = self.repository.delete_instrument(id).await?;

        if !deleted {
            return Err(CatalogError::NotFound {
                entity: CatalogEntity::Instruments.to_string(),
                id: id.to_string(),
            });
        }

        Ok(())
    }
}
