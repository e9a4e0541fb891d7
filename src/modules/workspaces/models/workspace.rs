// Workspace: a tenant's operational unit, scoped to one country.
// Codes are unique per tenant; status defaults to PENDING.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::validator::WorkspaceValidator;
use crate::core::validation::{trimmed, Validator};
use crate::core::{BaseEntity, Result};

pub const WORKSPACE_ORIGIN: &str = "Workspace";

/// Workspace lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum WorkspaceStatus {
    Active,
    Inactive,
    #[default]
    Pending,
}

impl WorkspaceStatus {
    pub const ALL: [WorkspaceStatus; 3] = [
        WorkspaceStatus::Active,
        WorkspaceStatus::Inactive,
        WorkspaceStatus::Pending,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkspaceStatus::Active => "ACTIVE",
            WorkspaceStatus::Inactive => "INACTIVE",
            WorkspaceStatus::Pending => "PENDING",
        }
    }

    /// Membership check over the closed set of statuses
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == value)
    }
}

impl std::fmt::Display for WorkspaceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for WorkspaceStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid workspace status: {}", s))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workspace {
    #[serde(flatten)]
    pub base: BaseEntity,
    pub tenant_id: Uuid,
    pub country_id: Uuid,
    pub code: String,
    pub name: String,
    pub status: WorkspaceStatus,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateWorkspaceParams {
    pub tenant_id: Uuid,
    pub country_id: Uuid,
    pub code: String,
    pub name: String,
    /// Raw status; `None` means PENDING
    pub status: Option<String>,
}

/// Partial update; `None` leaves the field as it is
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateWorkspaceParams {
    pub code: Option<String>,
    pub name: Option<String>,
    pub status: Option<String>,
}

impl UpdateWorkspaceParams {
    pub fn is_empty(&self) -> bool {
        self.code.is_none() && self.name.is_none() && self.status.is_none()
    }
}

impl Workspace {
    /// Trim, validate and build a new workspace
    pub fn new(params: CreateWorkspaceParams) -> Result<Self> {
        let code = trimmed(&params.code);
        let name = trimmed(&params.name);
        let status = params.status.as_deref().map(str::trim);

        let mut validator = WorkspaceValidator::new();
        validator.validate_tenant_id(params.tenant_id);
        validator.validate_code(&code);
        validator.validate_name(&name);
        validator.validate_country_id(params.country_id);
        let status = validator.validate_status(status);
        validator.finish(WORKSPACE_ORIGIN)?;

        Ok(Self {
            base: BaseEntity::new(),
            tenant_id: params.tenant_id,
            country_id: params.country_id,
            code,
            name,
            status: status.unwrap_or_default(),
        })
    }

    pub fn id(&self) -> Uuid {
        self.base.id
    }

    /// Staged copy with `params` applied, the receiver is left untouched
    pub fn with_changes(&self, params: UpdateWorkspaceParams, origin: &str) -> Result<Self> {
        let mut staged = self.clone();
        let mut validator = WorkspaceValidator::new();

        if let Some(code) = params.code {
            staged.code = trimmed(&code);
            validator.validate_code(&staged.code);
        }
        if let Some(name) = params.name {
            staged.name = trimmed(&name);
            validator.validate_name(&staged.name);
        }
        if let Some(status) = params.status {
            if let Some(status) = validator.validate_status(Some(status.trim())) {
                staged.status = status;
            }
        }

        validator.finish(origin)?;
        Ok(staged)
    }
}
