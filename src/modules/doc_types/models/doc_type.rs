use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Country-specific category of identity document (passport, national ID).
///
/// Doc types are reference data seeded per country; a doc type is only
/// valid for the country that owns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocType {
    pub id: Uuid,
    pub country_id: Uuid,
    pub code: String,
    pub name: String,
}

impl DocType {
    pub fn belongs_to(&self, country_id: Uuid) -> bool {
        self.country_id == country_id
    }
}
