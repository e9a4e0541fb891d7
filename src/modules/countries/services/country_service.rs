use std::sync::Arc;

use uuid::Uuid;

use crate::core::{AppError, Result};
use crate::modules::countries::models::{Country, CreateCountryParams, UpdateCountryParams};
use crate::modules::countries::repositories::CountryRepository;

const SERVICE_ORIGIN: &str = "CountryService";

/// Service for country business logic
pub struct CountryService {
    country_repo: Arc<dyn CountryRepository>,
}

impl CountryService {
    pub fn new(country_repo: Arc<dyn CountryRepository>) -> Self {
        Self { country_repo }
    }

    pub async fn list_all(&self) -> Result<Vec<Country>> {
        self.country_repo.list_all().await
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Country> {
        self.country_repo.get_by_id(id).await
    }

    pub async fn get_by_code(&self, code: &str) -> Result<Country> {
        self.country_repo.get_by_code(code.trim()).await
    }

    /// Create a country, rejecting a code that is already taken.
    ///
    /// The existence check is only an early error; the unique index on
    /// `countries.code` is what actually guarantees uniqueness.
    pub async fn create(&self, params: CreateCountryParams) -> Result<Country> {
        let country = Country::new(params)?;

        if self.country_repo.exists_by_code(&country.code, None).await? {
            tracing::warn!(code = %country.code, "Country code already registered");
            return Err(AppError::duplicate(
                SERVICE_ORIGIN,
                "A country with this code already exists",
            ));
        }

        self.country_repo.create(&country).await?;

        tracing::info!(country_id = %country.id(), code = %country.code, "Country created");
        Ok(country)
    }

    /// Apply a partial update; all supplied fields must be valid or nothing
    /// is written
    pub async fn update(&self, id: Uuid, params: UpdateCountryParams) -> Result<Country> {
        let country = self.country_repo.get_by_id(id).await?;

        if params.is_empty() {
            return Ok(country);
        }

        let mut staged = country.with_changes(params, SERVICE_ORIGIN)?;

        if staged.code != country.code
            && self
                .country_repo
                .exists_by_code(&staged.code, Some(id))
                .await?
        {
            return Err(AppError::duplicate(
                SERVICE_ORIGIN,
                "A country with this code already exists",
            ));
        }

        staged.base.touch();
        self.country_repo.update(&staged).await?;

        tracing::info!(country_id = %id, "Country updated");
        Ok(staged)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        self.country_repo.get_by_id(id).await?;
        self.country_repo.delete(id).await?;

        tracing::info!(country_id = %id, "Country deleted");
        Ok(())
    }
}
