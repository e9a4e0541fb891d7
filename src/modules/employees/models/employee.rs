// Employee: a person on a tenant's payroll, attached to one workspace.
//
// Email and document number are unique per tenant. Birth date, gender and
// phone are optional and can be cleared through an update.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::validator::EmployeeValidator;
use crate::core::validation::{trimmed, Validator};
use crate::core::{BaseEntity, Patch, Result};

pub const EMPLOYEE_ORIGIN: &str = "Employee";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "MALE",
            Gender::Female => "FEMALE",
            Gender::Other => "OTHER",
        }
    }

    /// Membership check over the closed set of genders
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|gender| gender.as_str() == value)
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid gender: {}", s))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(flatten)]
    pub base: BaseEntity,
    pub tenant_id: Uuid,
    pub workspace_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address: String,
    pub doc_type_id: Uuid,
    pub doc_number: String,
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateEmployeeParams {
    pub tenant_id: Uuid,
    pub workspace_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address: String,
    pub doc_type_id: Uuid,
    pub doc_number: String,
    pub birth_date: Option<NaiveDate>,
    /// Raw gender code, validated against [`Gender`]
    pub gender: Option<String>,
    pub phone: Option<String>,
}

/// Partial update.
///
/// Required fields use `Option` (`None` leaves them alone). Nullable fields
/// use [`Patch`]; a blank gender or phone also clears the value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateEmployeeParams {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub doc_type_id: Option<Uuid>,
    pub doc_number: Option<String>,
    pub birth_date: Patch<NaiveDate>,
    pub gender: Patch<String>,
    pub phone: Patch<String>,
}

impl UpdateEmployeeParams {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.address.is_none()
            && self.doc_type_id.is_none()
            && self.doc_number.is_none()
            && self.birth_date.is_unchanged()
            && self.gender.is_unchanged()
            && self.phone.is_unchanged()
    }
}

/// Trimmed optional text, blank collapses to `None`
fn optional_text(value: Option<&str>) -> Option<String> {
    value.map(str::trim).filter(|v| !v.is_empty()).map(str::to_string)
}

/// Blank values are a request to clear
fn blank_clears(patch: Patch<String>) -> Patch<String> {
    match patch {
        Patch::Set(value) if value.trim().is_empty() => Patch::Clear,
        Patch::Set(value) => Patch::Set(trimmed(&value)),
        other => other,
    }
}

impl Employee {
    /// Trim, validate and build a new employee
    pub fn new(params: CreateEmployeeParams) -> Result<Self> {
        let first_name = trimmed(&params.first_name);
        let last_name = trimmed(&params.last_name);
        let email = trimmed(&params.email);
        let address = trimmed(&params.address);
        let doc_number = trimmed(&params.doc_number);
        let phone = optional_text(params.phone.as_deref());
        let gender = optional_text(params.gender.as_deref());

        let mut validator = EmployeeValidator::new();
        validator.validate_tenant_id(params.tenant_id);
        validator.validate_workspace_id(params.workspace_id);
        validator.validate_first_name(&first_name);
        validator.validate_last_name(&last_name);
        validator.validate_email(&email);
        validator.validate_address(&address);
        validator.validate_birth_date(params.birth_date);
        validator.validate_doc_type_id(params.doc_type_id);
        validator.validate_doc_number(&doc_number);
        let gender = validator.validate_gender(gender.as_deref());
        validator.validate_phone(phone.as_deref());
        validator.finish(EMPLOYEE_ORIGIN)?;

        Ok(Self {
            base: BaseEntity::new(),
            tenant_id: params.tenant_id,
            workspace_id: params.workspace_id,
            first_name,
            last_name,
            email,
            address,
            doc_type_id: params.doc_type_id,
            doc_number,
            birth_date: params.birth_date,
            gender,
            phone,
        })
    }

    pub fn id(&self) -> Uuid {
        self.base.id
    }

    /// Staged copy with `params` applied, the receiver is left untouched
    pub fn with_changes(&self, params: UpdateEmployeeParams, origin: &str) -> Result<Self> {
        let mut staged = self.clone();
        let mut validator = EmployeeValidator::new();

        if let Some(first_name) = params.first_name {
            staged.first_name = trimmed(&first_name);
            validator.validate_first_name(&staged.first_name);
        }
        if let Some(last_name) = params.last_name {
            staged.last_name = trimmed(&last_name);
            validator.validate_last_name(&staged.last_name);
        }
        if let Some(email) = params.email {
            staged.email = trimmed(&email);
            validator.validate_email(&staged.email);
        }
        if let Some(address) = params.address {
            staged.address = trimmed(&address);
            validator.validate_address(&staged.address);
        }
        if let Some(doc_type_id) = params.doc_type_id {
            staged.doc_type_id = doc_type_id;
            validator.validate_doc_type_id(doc_type_id);
        }
        if let Some(doc_number) = params.doc_number {
            staged.doc_number = trimmed(&doc_number);
            validator.validate_doc_number(&staged.doc_number);
        }

        if let Patch::Set(birth_date) = params.birth_date {
            validator.validate_birth_date(Some(birth_date));
        }
        staged.birth_date = params.birth_date.apply(staged.birth_date);

        staged.gender = match blank_clears(params.gender) {
            Patch::Unchanged => staged.gender,
            Patch::Clear => None,
            Patch::Set(raw) => validator.validate_gender(Some(&raw)),
        };

        let phone = blank_clears(params.phone);
        if let Patch::Set(phone) = &phone {
            validator.validate_phone(Some(phone));
        }
        staged.phone = phone.apply(staged.phone);

        validator.finish(origin)?;
        Ok(staged)
    }
}
