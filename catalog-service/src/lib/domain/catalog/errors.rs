use thiserror::Error;

/// Error for EntityId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EntityIdError {
    #[error("Invalid entity ID: {0}")]
    InvalidFormat(String),
}

/// Top-level error for catalog fetch operations
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    #[error("Invalid entity ID: {0}")]
    InvalidEntityId(#[from] EntityIdError),

    #[error("No {entity} row with ID {id}")]
    NotFound { entity: String, id: String },

    #[error("Database error: {0}")]
    DatabaseError(String),
}
