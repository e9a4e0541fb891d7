// Country: the jurisdiction a workspace operates in, with its currency.
// Countries are global (not tenant scoped) and unique by code.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::validator::CountryValidator;
use crate::core::validation::{trimmed, Validator};
use crate::core::{BaseEntity, Result};

pub const COUNTRY_ORIGIN: &str = "Country";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    #[serde(flatten)]
    pub base: BaseEntity,
    /// ISO-style short code, e.g. "US"
    pub code: String,
    pub name: String,
    /// Currency code, e.g. "USD"
    pub coin_code: String,
    pub coin_symbol: String,
}

/// Missing keys deserialize as empty and are reported by the validator
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateCountryParams {
    pub code: String,
    pub name: String,
    pub coin_code: String,
    pub coin_symbol: String,
}

/// Partial update; `None` leaves the field as it is
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateCountryParams {
    pub code: Option<String>,
    pub name: Option<String>,
    pub coin_code: Option<String>,
    pub coin_symbol: Option<String>,
}

impl UpdateCountryParams {
    pub fn is_empty(&self) -> bool {
        self.code.is_none()
            && self.name.is_none()
            && self.coin_code.is_none()
            && self.coin_symbol.is_none()
    }
}

impl Country {
    /// Trim, validate and build a new country
    pub fn new(params: CreateCountryParams) -> Result<Self> {
        let code = trimmed(&params.code);
        let name = trimmed(&params.name);
        let coin_code = trimmed(&params.coin_code);
        let coin_symbol = trimmed(&params.coin_symbol);

        let mut validator = CountryValidator::new();
        validator.validate_code(&code);
        validator.validate_name(&name);
        validator.validate_coin_code(&coin_code);
        validator.validate_coin_symbol(&coin_symbol);
        validator.finish(COUNTRY_ORIGIN)?;

        Ok(Self {
            base: BaseEntity::new(),
            code,
            name,
            coin_code,
            coin_symbol,
        })
    }

    pub fn id(&self) -> Uuid {
        self.base.id
    }

    /// Staged copy with `params` applied, the receiver is left untouched.
    ///
    /// The returned copy is not touched; callers decide whether anything
    /// changed.
    pub fn with_changes(&self, params: UpdateCountryParams, origin: &str) -> Result<Self> {
        let mut staged = self.clone();
        let mut validator = CountryValidator::new();

        if let Some(code) = params.code {
            staged.code = trimmed(&code);
            validator.validate_code(&staged.code);
        }
        if let Some(name) = params.name {
            staged.name = trimmed(&name);
            validator.validate_name(&staged.name);
        }
        if let Some(coin_code) = params.coin_code {
            staged.coin_code = trimmed(&coin_code);
            validator.validate_coin_code(&staged.coin_code);
        }
        if let Some(coin_symbol) = params.coin_symbol {
            staged.coin_symbol = trimmed(&coin_symbol);
            validator.validate_coin_symbol(&staged.coin_symbol);
        }

        validator.finish(origin)?;
        Ok(staged)
    }
}
