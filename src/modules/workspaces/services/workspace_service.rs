use std::sync::Arc;

use uuid::Uuid;

use crate::core::{AppError, ErrorType, Result};
use crate::modules::countries::repositories::CountryRepository;
use crate::modules::workspaces::models::{CreateWorkspaceParams, UpdateWorkspaceParams, Workspace};
use crate::modules::workspaces::repositories::WorkspaceRepository;

const SERVICE_ORIGIN: &str = "WorkspaceService";
const DUPLICATE_MSG: &str = "a workspace with this code already exists for the given tenant";

/// Service for workspace business logic
pub struct WorkspaceService {
    workspace_repo: Arc<dyn WorkspaceRepository>,
    country_repo: Arc<dyn CountryRepository>,
}

impl WorkspaceService {
    pub fn new(
        workspace_repo: Arc<dyn WorkspaceRepository>,
        country_repo: Arc<dyn CountryRepository>,
    ) -> Self {
        Self {
            workspace_repo,
            country_repo,
        }
    }

    /// Create a workspace in an existing country with a code unused by the
    /// tenant
    pub async fn create(&self, params: CreateWorkspaceParams) -> Result<Workspace> {
        let workspace = Workspace::new(params)?;

        match self.country_repo.get_by_id(workspace.country_id).await {
            Ok(_) => {}
            Err(err) if err.error_type() == Some(ErrorType::NotFound) => {
                tracing::warn!(country_id = %workspace.country_id, "Workspace references unknown country");
                return Err(AppError::invalid_input(SERVICE_ORIGIN, "Invalid CountryID"));
            }
            Err(err) => return Err(err),
        }

        if self
            .workspace_repo
            .exists_by_tenant_id_and_code(workspace.tenant_id, &workspace.code, None)
            .await?
        {
            return Err(AppError::duplicate(SERVICE_ORIGIN, DUPLICATE_MSG));
        }

        self.workspace_repo.create(&workspace).await?;

        tracing::info!(
            workspace_id = %workspace.id(),
            tenant_id = %workspace.tenant_id,
            "Workspace created"
        );
        Ok(workspace)
    }

    pub async fn get(&self, id: Uuid) -> Result<Workspace> {
        self.workspace_repo.get(id).await
    }

    /// Workspace as seen by `tenant_id`; another tenant's workspace is
    /// reported as absent
    pub async fn get_for_tenant(&self, id: Uuid, tenant_id: Uuid) -> Result<Workspace> {
        let workspace = self.workspace_repo.get(id).await?;
        if workspace.tenant_id != tenant_id {
            return Err(AppError::not_found(SERVICE_ORIGIN, "Workspace not found"));
        }
        Ok(workspace)
    }

    pub async fn list_by_tenant(&self, tenant_id: Uuid) -> Result<Vec<Workspace>> {
        self.workspace_repo.list_by_tenant_id(tenant_id).await
    }

    /// Apply a partial update; all supplied fields must be valid or nothing
    /// is written
    pub async fn update(&self, id: Uuid, params: UpdateWorkspaceParams) -> Result<Workspace> {
        let workspace = self.workspace_repo.get(id).await?;

        if params.is_empty() {
            return Ok(workspace);
        }

        let mut staged = workspace.with_changes(params, SERVICE_ORIGIN)?;

        if staged.code != workspace.code
            && self
                .workspace_repo
                .exists_by_tenant_id_and_code(staged.tenant_id, &staged.code, Some(id))
                .await?
        {
            return Err(AppError::duplicate(SERVICE_ORIGIN, DUPLICATE_MSG));
        }

        staged.base.touch();
        self.workspace_repo.update(&staged).await?;

        tracing::info!(workspace_id = %id, status = %staged.status, "Workspace updated");
        Ok(staged)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        self.workspace_repo.get(id).await?;
        self.workspace_repo.delete(id).await?;

        tracing::info!(workspace_id = %id, "Workspace deleted");
        Ok(())
    }
}
