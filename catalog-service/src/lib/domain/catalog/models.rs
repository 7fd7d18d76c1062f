use std::fmt;

use serde::Serialize;

use crate::catalog::errors::EntityIdError;

/// Closed set of catalog resources that can be fetched by identifier.
///
/// Keeping this an enum means every query below maps to a fixed SQL
/// statement; there is no runtime assembly of table names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogEntity {
    Instruments,
    Musicians,
}

impl CatalogEntity {
    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogEntity::Instruments => "instruments",
            CatalogEntity::Musicians => "musicians",
        }
    }
}

impl fmt::Display for CatalogEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Catalog row identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct EntityId(pub i64);

impl EntityId {
    /// Parse an entity ID from string.
    ///
    /// # Arguments
    /// * `s` - Decimal integer string to parse
    ///
    /// # Returns
    /// Parsed EntityId
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid integer
    pub fn from_string(s: &str) -> Result<Self, EntityIdError> {
        s.parse::<i64>()
            .map(EntityId)
            .map_err(|e| EntityIdError::InvalidFormat(e.to_string()))
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Instrument catalog row.
///
/// Serializes as the full row; this is also the wire shape for fetches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Instrument {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    pub origin_date: Option<String>,
    pub image_uri: Option<String>,
}

/// Musician catalog row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Musician {
    pub id: EntityId,
    pub name: String,
    pub nationality: Option<String>,
    pub description: String,
}

/// A fetched catalog row, tagged by which entity it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CatalogRecord {
    Instrument(Instrument),
    Musician(Musician),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_id_parsing() {
        assert_eq!(EntityId::from_string("17").unwrap(), EntityId(17));
        assert!(EntityId::from_string("seventeen").is_err());
        assert!(EntityId::from_string("1.5").is_err());
        assert!(EntityId::from_string("").is_err());
    }

    #[test]
    fn test_record_serializes_as_bare_row() {
        let record = CatalogRecord::Instrument(Instrument {
            id: EntityId(3),
            name: "Theremin".to_string(),
            description: "Played without touch".to_string(),
            origin_date: Some("1920".to_string()),
            image_uri: None,
        });

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["id"], 3);
        assert_eq!(value["name"], "Theremin");
        // Untagged: no enum wrapper around the row
        assert!(value.get("Instrument").is_none());
    }
}
