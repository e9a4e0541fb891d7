use std::sync::Arc;

use uuid::Uuid;

use crate::core::{AppError, ErrorType, Result};
use crate::modules::doc_types::repositories::DocTypeRepository;
use crate::modules::employees::models::{CreateEmployeeParams, Employee, UpdateEmployeeParams};
use crate::modules::employees::repositories::EmployeeRepository;
use crate::modules::workspaces::models::Workspace;
use crate::modules::workspaces::repositories::WorkspaceRepository;

const SERVICE_ORIGIN: &str = "EmployeeService";

/// Service for employee business logic.
///
/// Besides field validation, an employee must reference a workspace of its
/// own tenant and a document type issued by that workspace's country.
pub struct EmployeeService {
    employee_repo: Arc<dyn EmployeeRepository>,
    workspace_repo: Arc<dyn WorkspaceRepository>,
    doc_type_repo: Arc<dyn DocTypeRepository>,
}

impl EmployeeService {
    pub fn new(
        employee_repo: Arc<dyn EmployeeRepository>,
        workspace_repo: Arc<dyn WorkspaceRepository>,
        doc_type_repo: Arc<dyn DocTypeRepository>,
    ) -> Self {
        Self {
            employee_repo,
            workspace_repo,
            doc_type_repo,
        }
    }

    pub async fn create(&self, params: CreateEmployeeParams) -> Result<Employee> {
        let employee = Employee::new(params).map_err(|err| {
            tracing::warn!(error = %err, "Failed to create new employee due to validation errors");
            err
        })?;

        let workspace = self
            .resolve_workspace(employee.workspace_id, employee.tenant_id)
            .await?;
        tracing::debug!(workspace_id = %workspace.id(), "Workspace validation successful");

        self.ensure_doc_type_for_country(employee.doc_type_id, workspace.country_id)
            .await?;
        self.ensure_unique_email(employee.tenant_id, &employee.email, None)
            .await?;
        self.ensure_unique_doc_number(employee.tenant_id, &employee.doc_number, None)
            .await?;

        self.employee_repo.create(&employee).await.map_err(|err| {
            tracing::error!(error = %err, "Failed to save employee to repository");
            err
        })?;

        tracing::info!(employee_id = %employee.id(), "Employee created successfully");
        Ok(employee)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Employee> {
        self.employee_repo.get_by_id(id).await
    }

    /// Employee as seen by `tenant_id`; another tenant's employee is
    /// reported as absent
    pub async fn get_for_tenant(&self, id: Uuid, tenant_id: Uuid) -> Result<Employee> {
        let employee = self.employee_repo.get_by_id(id).await?;
        if employee.tenant_id != tenant_id {
            return Err(AppError::not_found(SERVICE_ORIGIN, "Employee not found"));
        }
        Ok(employee)
    }

    pub async fn list_by_workspace_id_and_tenant_id(
        &self,
        workspace_id: Uuid,
        tenant_id: Uuid,
    ) -> Result<Vec<Employee>> {
        self.employee_repo
            .list_by_workspace_id_and_tenant_id(workspace_id, tenant_id)
            .await
    }

    /// Apply a partial update; all supplied fields must be valid or nothing
    /// is written. Changed email, document number or doc type are checked
    /// the same way as on create.
    pub async fn update(&self, id: Uuid, params: UpdateEmployeeParams) -> Result<Employee> {
        let employee = self.employee_repo.get_by_id(id).await.map_err(|err| {
            tracing::error!(error = %err, employee_id = %id, "Failed to get employee for update");
            err
        })?;

        if params.is_empty() {
            return Ok(employee);
        }

        let mut staged = employee
            .with_changes(params, SERVICE_ORIGIN)
            .map_err(|err| {
                tracing::warn!(error = %err, "Failed to update employee due to validation errors");
                err
            })?;

        if staged.doc_type_id != employee.doc_type_id {
            let workspace = self
                .resolve_workspace(staged.workspace_id, staged.tenant_id)
                .await?;
            self.ensure_doc_type_for_country(staged.doc_type_id, workspace.country_id)
                .await?;
        }
        if staged.email != employee.email {
            self.ensure_unique_email(staged.tenant_id, &staged.email, Some(id))
                .await?;
        }
        if staged.doc_number != employee.doc_number {
            self.ensure_unique_doc_number(staged.tenant_id, &staged.doc_number, Some(id))
                .await?;
        }

        staged.base.touch();

        self.employee_repo.update(&staged).await.map_err(|err| {
            tracing::error!(error = %err, employee_id = %id, "Failed to save updated employee to repository");
            err
        })?;

        tracing::info!(employee_id = %id, "Employee updated successfully");
        Ok(staged)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        self.employee_repo.get_by_id(id).await?;
        self.employee_repo.delete(id).await?;

        tracing::info!(employee_id = %id, "Employee deleted");
        Ok(())
    }

    /// The workspace must exist and belong to the employee's tenant
    async fn resolve_workspace(&self, workspace_id: Uuid, tenant_id: Uuid) -> Result<Workspace> {
        let workspace = match self.workspace_repo.get(workspace_id).await {
            Ok(workspace) => workspace,
            Err(err) if err.error_type() == Some(ErrorType::NotFound) => {
                tracing::warn!(workspace_id = %workspace_id, "Employee references unknown workspace");
                return Err(AppError::invalid_input(SERVICE_ORIGIN, "Invalid WorkspaceID"));
            }
            Err(err) => {
                tracing::error!(error = %err, workspace_id = %workspace_id, "Failed to load workspace");
                return Err(err);
            }
        };

        if workspace.tenant_id != tenant_id {
            tracing::warn!(
                workspace_id = %workspace_id,
                tenant_id = %tenant_id,
                "Workspace belongs to another tenant"
            );
            return Err(AppError::invalid_input(SERVICE_ORIGIN, "Invalid WorkspaceID"));
        }

        Ok(workspace)
    }

    async fn ensure_doc_type_for_country(&self, doc_type_id: Uuid, country_id: Uuid) -> Result<()> {
        let is_valid = self
            .doc_type_repo
            .is_valid_for_country(doc_type_id, country_id)
            .await
            .map_err(|err| {
                tracing::error!(error = %err, "Failed to validate document type for country");
                err
            })?;

        if !is_valid {
            let err = AppError::invalid_input(
                SERVICE_ORIGIN,
                "DocType is not valid for the employee's country",
            );
            tracing::warn!(
                doc_type_id = %doc_type_id,
                country_id = %country_id,
                "{}",
                err
            );
            return Err(err);
        }
        Ok(())
    }

    async fn ensure_unique_email(
        &self,
        tenant_id: Uuid,
        email: &str,
        excluding: Option<Uuid>,
    ) -> Result<()> {
        if self
            .employee_repo
            .exists_by_tenant_id_and_email(tenant_id, email, excluding)
            .await?
        {
            return Err(AppError::duplicate(
                SERVICE_ORIGIN,
                "An employee with this email already exists",
            ));
        }
        Ok(())
    }

    async fn ensure_unique_doc_number(
        &self,
        tenant_id: Uuid,
        doc_number: &str,
        excluding: Option<Uuid>,
    ) -> Result<()> {
        if self
            .employee_repo
            .exists_by_tenant_id_and_doc_number(tenant_id, doc_number, excluding)
            .await?
        {
            return Err(AppError::duplicate(
                SERVICE_ORIGIN,
                "An employee with this document number already exists",
            ));
        }
        Ok(())
    }
}
