use chrono::{NaiveDate, Utc};
use email_address::EmailAddress;
use uuid::Uuid;

use super::employee::Gender;
use crate::core::validation::{
    char_len, too_long_message, FieldErrors, Validator, MSG_EMPTY, MSG_INVALID, MSG_INVALID_EMAIL,
};

pub const MAX_FIRST_NAME_LENGTH: usize = 50;
pub const MAX_LAST_NAME_LENGTH: usize = 50;
pub const MAX_EMAIL_LENGTH: usize = 100;
pub const MAX_ADDRESS_LENGTH: usize = 200;
pub const MAX_DOC_NUMBER_LENGTH: usize = 50;
pub const MAX_PHONE_LENGTH: usize = 20;

#[derive(Debug, Default)]
pub struct EmployeeValidator {
    errors: FieldErrors,
}

impl EmployeeValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn validate_tenant_id(&mut self, tenant_id: Uuid) {
        self.errors.check_id("TenantID", tenant_id);
    }

    pub fn validate_workspace_id(&mut self, workspace_id: Uuid) {
        self.errors.check_id("WorkspaceID", workspace_id);
    }

    pub fn validate_first_name(&mut self, first_name: &str) {
        self.errors
            .check_required_text("FirstName", first_name, MAX_FIRST_NAME_LENGTH);
    }

    pub fn validate_last_name(&mut self, last_name: &str) {
        self.errors
            .check_required_text("LastName", last_name, MAX_LAST_NAME_LENGTH);
    }

    /// Presence, then length, then RFC 5322 syntax
    pub fn validate_email(&mut self, email: &str) {
        if email.is_empty() {
            self.errors.add("Email", MSG_EMPTY);
        } else if char_len(email) > MAX_EMAIL_LENGTH {
            self.errors.add("Email", too_long_message(MAX_EMAIL_LENGTH));
        } else if !EmailAddress::is_valid(email) {
            self.errors.add("Email", MSG_INVALID_EMAIL);
        }
    }

    pub fn validate_address(&mut self, address: &str) {
        self.errors
            .check_max_len("Address", address, MAX_ADDRESS_LENGTH);
    }

    pub fn validate_doc_type_id(&mut self, doc_type_id: Uuid) {
        self.errors.check_id("DocTypeID", doc_type_id);
    }

    pub fn validate_doc_number(&mut self, doc_number: &str) {
        self.errors
            .check_required_text("DocNumber", doc_number, MAX_DOC_NUMBER_LENGTH);
    }

    pub fn validate_birth_date(&mut self, birth_date: Option<NaiveDate>) {
        if let Some(birth_date) = birth_date {
            self.errors
                .check_not_future("BirthDate", birth_date, Utc::now().date_naive());
        }
    }

    /// Parses a supplied gender, recording an error when it is unknown
    pub fn validate_gender(&mut self, gender: Option<&str>) -> Option<Gender> {
        let raw = gender?;
        let parsed = Gender::parse(raw);
        if parsed.is_none() {
            self.errors.add("Gender", MSG_INVALID);
        }
        parsed
    }

    pub fn validate_phone(&mut self, phone: Option<&str>) {
        if let Some(phone) = phone {
            self.errors.check_max_len("Phone", phone, MAX_PHONE_LENGTH);
        }
    }
}

impl Validator for EmployeeValidator {
    fn field_errors(&self) -> &FieldErrors {
        &self.errors
    }

    fn into_field_errors(self) -> FieldErrors {
        self.errors
    }
}
