// Test data factory
//
// Generates unique data per call so tests never collide on unique keys.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use chrono::NaiveDate;
use payroll::countries::{Country, CreateCountryParams};
use payroll::doc_types::DocType;
use payroll::employees::CreateEmployeeParams;
use payroll::workspaces::{CreateWorkspaceParams, Workspace};
use payroll::AppServices;
use serde_json::{json, Value};
use uuid::Uuid;

use super::in_memory::*;

/// Next country code index, shared by every test in the binary
static NEXT_COUNTRY_CODE: AtomicUsize = AtomicUsize::new(0);

pub struct TestDataFactory;

impl TestDataFactory {
    /// Short random suffix, uppercase hex
    pub fn suffix(len: usize) -> String {
        Uuid::new_v4().simple().to_string()[..len].to_uppercase()
    }

    /// Three letter code, distinct for the first 26^3 calls in a process
    pub fn country_code() -> String {
        let mut n = NEXT_COUNTRY_CODE.fetch_add(1, Ordering::Relaxed) % (26 * 26 * 26);
        let mut code = [b'A'; 3];
        for slot in code.iter_mut().rev() {
            *slot = b'A' + (n % 26) as u8;
            n /= 26;
        }
        String::from_utf8_lossy(&code).into_owned()
    }

    pub fn country_params() -> CreateCountryParams {
        CreateCountryParams {
            code: Self::country_code(),
            name: format!("Country {}", Self::suffix(6)),
            coin_code: "EUR".to_string(),
            coin_symbol: "€".to_string(),
        }
    }

    pub fn workspace_params(tenant_id: Uuid, country_id: Uuid) -> CreateWorkspaceParams {
        CreateWorkspaceParams {
            tenant_id,
            country_id,
            code: format!("WS-{}", Self::suffix(8)),
            name: "Head Office".to_string(),
            status: None,
        }
    }

    pub fn employee_params(
        tenant_id: Uuid,
        workspace_id: Uuid,
        doc_type_id: Uuid,
    ) -> CreateEmployeeParams {
        let tag = Self::suffix(8).to_lowercase();
        CreateEmployeeParams {
            tenant_id,
            workspace_id,
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            email: format!("grace.{}@example.com", tag),
            address: "1 Navy Yard".to_string(),
            doc_type_id,
            doc_number: format!("DOC{}", tag),
            birth_date: NaiveDate::from_ymd_opt(1906, 12, 9),
            gender: Some("FEMALE".to_string()),
            phone: None,
        }
    }

    /// JSON body for POST /workspaces/{id}/employees
    pub fn employee_payload(doc_type_id: Uuid) -> Value {
        let tag = Self::suffix(8).to_lowercase();
        json!({
            "first_name": "Alan",
            "last_name": "Turing",
            "email": format!("alan.{}@example.com", tag),
            "address": "Bletchley Park",
            "doc_type_id": doc_type_id,
            "doc_number": format!("DOC{}", tag),
            "birth_date": "1912-06-23",
            "gender": "MALE"
        })
    }
}

/// Services over fresh in-memory repositories
pub struct TestEnv {
    pub countries: Arc<InMemoryCountryRepository>,
    pub doc_types: Arc<InMemoryDocTypeRepository>,
    pub workspaces: Arc<InMemoryWorkspaceRepository>,
    pub employees: Arc<InMemoryEmployeeRepository>,
    pub services: AppServices,
}

impl TestEnv {
    pub fn new() -> Self {
        let countries = Arc::new(InMemoryCountryRepository::default());
        let doc_types = Arc::new(InMemoryDocTypeRepository::default());
        let workspaces = Arc::new(InMemoryWorkspaceRepository::default());
        let employees = Arc::new(InMemoryEmployeeRepository::default());

        let services = AppServices::new(
            countries.clone(),
            doc_types.clone(),
            workspaces.clone(),
            employees.clone(),
        );

        Self {
            countries,
            doc_types,
            workspaces,
            employees,
            services,
        }
    }

    pub async fn country(&self) -> Country {
        self.services
            .countries
            .create(TestDataFactory::country_params())
            .await
            .expect("seed country")
    }

    pub async fn doc_type(&self, country_id: Uuid, code: &str) -> DocType {
        let doc_type = DocType {
            id: Uuid::now_v7(),
            country_id,
            code: code.to_string(),
            name: format!("{} document", code),
        };
        self.doc_types.insert(doc_type.clone()).await;
        doc_type
    }

    pub async fn workspace(&self, tenant_id: Uuid, country_id: Uuid) -> Workspace {
        self.services
            .workspaces
            .create(TestDataFactory::workspace_params(tenant_id, country_id))
            .await
            .expect("seed workspace")
    }

    /// A country with one doc type and a workspace for a new tenant
    pub async fn fixture(&self) -> Fixture {
        let country = self.country().await;
        let doc_type = self.doc_type(country.id(), "PAS").await;
        let tenant_id = Uuid::now_v7();
        let workspace = self.workspace(tenant_id, country.id()).await;
        Fixture {
            tenant_id,
            country,
            doc_type,
            workspace,
        }
    }
}

pub struct Fixture {
    pub tenant_id: Uuid,
    pub country: Country,
    pub doc_type: DocType,
    pub workspace: Workspace,
}
