use std::sync::Arc;

use actix_web::web;
use sqlx::MySqlPool;

pub mod countries;
pub mod doc_types;
pub mod employees;
pub mod health;
pub mod workspaces;

use countries::{CountryRepository, CountryService, MySqlCountryRepository};
use doc_types::{DocTypeRepository, DocTypeService, MySqlDocTypeRepository};
use employees::{EmployeeRepository, EmployeeService, MySqlEmployeeRepository};
use workspaces::{MySqlWorkspaceRepository, WorkspaceRepository, WorkspaceService};

/// Service graph shared by every worker
#[derive(Clone)]
pub struct AppServices {
    pub countries: Arc<CountryService>,
    pub doc_types: Arc<DocTypeService>,
    pub workspaces: Arc<WorkspaceService>,
    pub employees: Arc<EmployeeService>,
}

impl AppServices {
    pub fn new(
        country_repo: Arc<dyn CountryRepository>,
        doc_type_repo: Arc<dyn DocTypeRepository>,
        workspace_repo: Arc<dyn WorkspaceRepository>,
        employee_repo: Arc<dyn EmployeeRepository>,
    ) -> Self {
        Self {
            countries: Arc::new(CountryService::new(country_repo.clone())),
            doc_types: Arc::new(DocTypeService::new(
                doc_type_repo.clone(),
                country_repo.clone(),
            )),
            workspaces: Arc::new(WorkspaceService::new(
                workspace_repo.clone(),
                country_repo,
            )),
            employees: Arc::new(EmployeeService::new(
                employee_repo,
                workspace_repo,
                doc_type_repo,
            )),
        }
    }

    /// Wire every service to its MySQL repository
    pub fn mysql(pool: &MySqlPool) -> Self {
        Self::new(
            Arc::new(MySqlCountryRepository::new(pool.clone())),
            Arc::new(MySqlDocTypeRepository::new(pool.clone())),
            Arc::new(MySqlWorkspaceRepository::new(pool.clone())),
            Arc::new(MySqlEmployeeRepository::new(pool.clone())),
        )
    }

    /// Register the services as application data
    pub fn register(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(web::Data::new(self.countries.clone()))
            .app_data(web::Data::new(self.doc_types.clone()))
            .app_data(web::Data::new(self.workspaces.clone()))
            .app_data(web::Data::new(self.employees.clone()));
    }
}

/// Mount every API route
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::controllers::configure)
        .configure(countries::controllers::configure)
        .configure(doc_types::controllers::configure)
        .service(
            web::scope("/workspaces")
                .configure(workspaces::controllers::configure)
                .configure(employees::controllers::configure_workspace_routes),
        )
        .configure(employees::controllers::configure);
}
