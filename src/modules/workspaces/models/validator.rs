use uuid::Uuid;

use super::workspace::WorkspaceStatus;
use crate::core::validation::{FieldErrors, Validator, MSG_INVALID};

pub const MAX_CODE_LENGTH: usize = 20;
pub const MAX_NAME_LENGTH: usize = 100;

#[derive(Debug, Default)]
pub struct WorkspaceValidator {
    errors: FieldErrors,
}

impl WorkspaceValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn validate_tenant_id(&mut self, tenant_id: Uuid) {
        self.errors.check_id("TenantID", tenant_id);
    }

    pub fn validate_country_id(&mut self, country_id: Uuid) {
        self.errors.check_id("CountryID", country_id);
    }

    pub fn validate_code(&mut self, code: &str) {
        self.errors.check_required_text("Code", code, MAX_CODE_LENGTH);
    }

    pub fn validate_name(&mut self, name: &str) {
        self.errors.check_required_text("Name", name, MAX_NAME_LENGTH);
    }

    /// Parses a supplied status, recording an error when it is unknown
    pub fn validate_status(&mut self, status: Option<&str>) -> Option<WorkspaceStatus> {
        let raw = status?;
        let parsed = WorkspaceStatus::parse(raw);
        if parsed.is_none() {
            self.errors.add("Status", MSG_INVALID);
        }
        parsed
    }
}

impl Validator for WorkspaceValidator {
    fn field_errors(&self) -> &FieldErrors {
        &self.errors
    }

    fn into_field_errors(self) -> FieldErrors {
        self.errors
    }
}
