use std::sync::Arc;

use uuid::Uuid;

use crate::core::Result;
use crate::modules::countries::repositories::CountryRepository;
use crate::modules::doc_types::models::DocType;
use crate::modules::doc_types::repositories::DocTypeRepository;

/// Lookups over the document type catalogue
pub struct DocTypeService {
    doc_type_repo: Arc<dyn DocTypeRepository>,
    country_repo: Arc<dyn CountryRepository>,
}

impl DocTypeService {
    pub fn new(
        doc_type_repo: Arc<dyn DocTypeRepository>,
        country_repo: Arc<dyn CountryRepository>,
    ) -> Self {
        Self {
            doc_type_repo,
            country_repo,
        }
    }

    pub async fn get(&self, id: Uuid) -> Result<DocType> {
        self.doc_type_repo.get(id).await
    }

    /// Doc types of a country; `NOT_FOUND` when the country does not exist
    pub async fn list_by_country(&self, country_id: Uuid) -> Result<Vec<DocType>> {
        self.country_repo.get_by_id(country_id).await?;
        self.doc_type_repo.list_by_country_id(country_id).await
    }

    pub async fn is_valid_for_country(&self, doc_type_id: Uuid, country_id: Uuid) -> Result<bool> {
        self.doc_type_repo
            .is_valid_for_country(doc_type_id, country_id)
            .await
    }
}
