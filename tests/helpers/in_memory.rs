// In-memory repositories
//
// Rows are never removed; deletes set `deleted_at` like the SQL
// implementations. Unique keys also cover soft-deleted rows, matching the
// database indexes. Keys compare case-insensitively like the `_ci`
// collation.

use std::collections::HashMap;

use async_trait::async_trait;
use payroll::core::{AppError, Result};
use payroll::countries::{Country, CountryRepository};
use payroll::doc_types::{DocType, DocTypeRepository};
use payroll::employees::{Employee, EmployeeRepository};
use payroll::workspaces::{Workspace, WorkspaceRepository};
use tokio::sync::RwLock;
use uuid::Uuid;

fn same_key(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

#[derive(Default)]
pub struct InMemoryCountryRepository {
    rows: RwLock<HashMap<Uuid, Country>>,
}

#[async_trait]
impl CountryRepository for InMemoryCountryRepository {
    async fn create(&self, country: &Country) -> Result<()> {
        let mut rows = self.rows.write().await;
        if rows.values().any(|c| same_key(&c.code, &country.code)) {
            return Err(AppError::duplicate(
                "CountryRepository",
                "a country with this code already exists",
            ));
        }
        rows.insert(country.id(), country.clone());
        Ok(())
    }

    async fn update(&self, country: &Country) -> Result<()> {
        let mut rows = self.rows.write().await;
        if rows
            .values()
            .any(|c| c.id() != country.id() && same_key(&c.code, &country.code))
        {
            return Err(AppError::duplicate(
                "CountryRepository",
                "a country with this code already exists",
            ));
        }
        match rows.get_mut(&country.id()) {
            Some(row) if !row.base.is_deleted() => {
                *row = country.clone();
                Ok(())
            }
            _ => Err(AppError::not_found("CountryRepository", "Country not found")),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        let mut rows = self.rows.write().await;
        match rows.get_mut(&id) {
            Some(row) if !row.base.is_deleted() => {
                row.base.mark_deleted();
                Ok(())
            }
            _ => Err(AppError::not_found("CountryRepository", "Country not found")),
        }
    }

    async fn exists_by_code(&self, code: &str, excluding: Option<Uuid>) -> Result<bool> {
        let rows = self.rows.read().await;
        Ok(rows.values().any(|c| {
            !c.base.is_deleted() && Some(c.id()) != excluding && same_key(&c.code, code)
        }))
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Country> {
        let rows = self.rows.read().await;
        rows.get(&id)
            .filter(|c| !c.base.is_deleted())
            .cloned()
            .ok_or_else(|| AppError::not_found("CountryRepository", "Country not found"))
    }

    async fn get_by_code(&self, code: &str) -> Result<Country> {
        let rows = self.rows.read().await;
        rows.values()
            .find(|c| !c.base.is_deleted() && same_key(&c.code, code))
            .cloned()
            .ok_or_else(|| AppError::not_found("CountryRepository", "Country not found"))
    }

    async fn list_all(&self) -> Result<Vec<Country>> {
        let rows = self.rows.read().await;
        let mut countries: Vec<Country> = rows
            .values()
            .filter(|c| !c.base.is_deleted())
            .cloned()
            .collect();
        countries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(countries)
    }
}

/// Reference data is seeded directly
#[derive(Default)]
pub struct InMemoryDocTypeRepository {
    rows: RwLock<HashMap<Uuid, DocType>>,
}

impl InMemoryDocTypeRepository {
    pub async fn insert(&self, doc_type: DocType) {
        self.rows.write().await.insert(doc_type.id, doc_type);
    }
}

#[async_trait]
impl DocTypeRepository for InMemoryDocTypeRepository {
    async fn is_valid_for_country(&self, doc_type_id: Uuid, country_id: Uuid) -> Result<bool> {
        let rows = self.rows.read().await;
        Ok(rows
            .get(&doc_type_id)
            .is_some_and(|d| d.belongs_to(country_id)))
    }

    async fn get(&self, id: Uuid) -> Result<DocType> {
        let rows = self.rows.read().await;
        rows.get(&id)
            .cloned()
            .ok_or_else(|| AppError::not_found("DocTypeRepository", "Document type not found"))
    }

    async fn list_by_country_id(&self, country_id: Uuid) -> Result<Vec<DocType>> {
        let rows = self.rows.read().await;
        let mut doc_types: Vec<DocType> = rows
            .values()
            .filter(|d| d.belongs_to(country_id))
            .cloned()
            .collect();
        doc_types.sort_by(|a, b| a.code.cmp(&b.code));
        Ok(doc_types)
    }
}

fn workspace_clash(a: &Workspace, b: &Workspace) -> bool {
    a.id() != b.id() && a.tenant_id == b.tenant_id && same_key(&a.code, &b.code)
}

#[derive(Default)]
pub struct InMemoryWorkspaceRepository {
    rows: RwLock<HashMap<Uuid, Workspace>>,
}

impl InMemoryWorkspaceRepository {
    /// Stored row, soft-deleted ones included
    pub async fn raw(&self, id: Uuid) -> Option<Workspace> {
        self.rows.read().await.get(&id).cloned()
    }
}

#[async_trait]
impl WorkspaceRepository for InMemoryWorkspaceRepository {
    async fn create(&self, workspace: &Workspace) -> Result<()> {
        let mut rows = self.rows.write().await;
        if rows
            .values()
            .any(|w| workspace_clash(w, workspace))
        {
            return Err(AppError::duplicate(
                "WorkspaceRepository",
                "a workspace with this code already exists for the given tenant",
            ));
        }
        rows.insert(workspace.id(), workspace.clone());
        Ok(())
    }

    async fn get(&self, id: Uuid) -> Result<Workspace> {
        let rows = self.rows.read().await;
        rows.get(&id)
            .filter(|w| !w.base.is_deleted())
            .cloned()
            .ok_or_else(|| AppError::not_found("WorkspaceRepository", "Workspace not found"))
    }

    async fn update(&self, workspace: &Workspace) -> Result<()> {
        let mut rows = self.rows.write().await;
        if rows.values().any(|w| workspace_clash(w, workspace)) {
            return Err(AppError::duplicate(
                "WorkspaceRepository",
                "a workspace with this code already exists for the given tenant",
            ));
        }
        match rows.get_mut(&workspace.id()) {
            Some(row) if !row.base.is_deleted() => {
                *row = workspace.clone();
                Ok(())
            }
            _ => Err(AppError::not_found("WorkspaceRepository", "Workspace not found")),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        let mut rows = self.rows.write().await;
        match rows.get_mut(&id) {
            Some(row) if !row.base.is_deleted() => {
                row.base.mark_deleted();
                Ok(())
            }
            _ => Err(AppError::not_found("WorkspaceRepository", "Workspace not found")),
        }
    }

    async fn exists_by_tenant_id_and_code(
        &self,
        tenant_id: Uuid,
        code: &str,
        excluding: Option<Uuid>,
    ) -> Result<bool> {
        let rows = self.rows.read().await;
        Ok(rows.values().any(|w| {
            !w.base.is_deleted()
                && Some(w.id()) != excluding
                && w.tenant_id == tenant_id
                && same_key(&w.code, code)
        }))
    }

    async fn list_by_tenant_id(&self, tenant_id: Uuid) -> Result<Vec<Workspace>> {
        let rows = self.rows.read().await;
        let mut workspaces: Vec<Workspace> = rows
            .values()
            .filter(|w| !w.base.is_deleted() && w.tenant_id == tenant_id)
            .cloned()
            .collect();
        workspaces.sort_by(|a, b| a.code.cmp(&b.code));
        Ok(workspaces)
    }
}

#[derive(Default)]
pub struct InMemoryEmployeeRepository {
    rows: RwLock<HashMap<Uuid, Employee>>,
}

impl InMemoryEmployeeRepository {
    pub async fn raw(&self, id: Uuid) -> Option<Employee> {
        self.rows.read().await.get(&id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }
}

fn employee_clash(a: &Employee, b: &Employee) -> bool {
    a.id() != b.id()
        && a.tenant_id == b.tenant_id
        && (same_key(&a.email, &b.email) || same_key(&a.doc_number, &b.doc_number))
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn create(&self, employee: &Employee) -> Result<()> {
        let mut rows = self.rows.write().await;
        if rows.values().any(|e| employee_clash(e, employee)) {
            return Err(AppError::duplicate(
                "EmployeeRepository",
                "an employee with this email or document number already exists",
            ));
        }
        rows.insert(employee.id(), employee.clone());
        Ok(())
    }

    async fn list_by_workspace_id_and_tenant_id(
        &self,
        workspace_id: Uuid,
        tenant_id: Uuid,
    ) -> Result<Vec<Employee>> {
        let rows = self.rows.read().await;
        let mut employees: Vec<Employee> = rows
            .values()
            .filter(|e| {
                !e.base.is_deleted() && e.workspace_id == workspace_id && e.tenant_id == tenant_id
            })
            .cloned()
            .collect();
        employees.sort_by(|a, b| {
            (a.last_name.as_str(), a.first_name.as_str())
                .cmp(&(b.last_name.as_str(), b.first_name.as_str()))
        });
        Ok(employees)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Employee> {
        let rows = self.rows.read().await;
        rows.get(&id)
            .filter(|e| !e.base.is_deleted())
            .cloned()
            .ok_or_else(|| AppError::not_found("EmployeeRepository", "Employee not found"))
    }

    async fn update(&self, employee: &Employee) -> Result<()> {
        let mut rows = self.rows.write().await;
        if rows.values().any(|e| employee_clash(e, employee)) {
            return Err(AppError::duplicate(
                "EmployeeRepository",
                "an employee with this email or document number already exists",
            ));
        }
        match rows.get_mut(&employee.id()) {
            Some(row) if !row.base.is_deleted() => {
                *row = employee.clone();
                Ok(())
            }
            _ => Err(AppError::not_found("EmployeeRepository", "Employee not found")),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        let mut rows = self.rows.write().await;
        match rows.get_mut(&id) {
            Some(row) if !row.base.is_deleted() => {
                row.base.mark_deleted();
                Ok(())
            }
            _ => Err(AppError::not_found("EmployeeRepository", "Employee not found")),
        }
    }

    async fn exists_by_tenant_id_and_doc_number(
        &self,
        tenant_id: Uuid,
        doc_number: &str,
        excluding: Option<Uuid>,
    ) -> Result<bool> {
        let rows = self.rows.read().await;
        Ok(rows.values().any(|e| {
            !e.base.is_deleted()
                && Some(e.id()) != excluding
                && e.tenant_id == tenant_id
                && same_key(&e.doc_number, doc_number)
        }))
    }

    async fn exists_by_tenant_id_and_email(
        &self,
        tenant_id: Uuid,
        email: &str,
        excluding: Option<Uuid>,
    ) -> Result<bool> {
        let rows = self.rows.read().await;
        Ok(rows.values().any(|e| {
            !e.base.is_deleted()
                && Some(e.id()) != excluding
                && e.tenant_id == tenant_id
                && same_key(&e.email, email)
        }))
    }
}
