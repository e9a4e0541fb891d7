use std::sync::Arc;

use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::core::error::AppError;
use crate::middleware::tenant::TenantId;
use crate::modules::employees::models::{CreateEmployeeParams, UpdateEmployeeParams};
use crate::modules::employees::services::EmployeeService;

/// List employees of a workspace
/// GET /workspaces/{workspace_id}/employees
pub async fn list_employees(
    service: web::Data<Arc<EmployeeService>>,
    tenant_id: TenantId,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let employees = service
        .list_by_workspace_id_and_tenant_id(path.into_inner(), tenant_id.0)
        .await?;

    Ok(HttpResponse::Ok().json(employees))
}

/// Hire an employee into a workspace
/// POST /workspaces/{workspace_id}/employees
pub async fn create_employee(
    service: web::Data<Arc<EmployeeService>>,
    tenant_id: TenantId,
    path: web::Path<Uuid>,
    request: web::Json<CreateEmployeeParams>,
) -> Result<HttpResponse, AppError> {
    let mut params = request.into_inner();
    params.tenant_id = tenant_id.0;
    params.workspace_id = path.into_inner();

    let employee = service.create(params).await?;

    Ok(HttpResponse::Created().json(employee))
}

/// GET /employees/{id}
pub async fn get_employee(
    service: web::Data<Arc<EmployeeService>>,
    tenant_id: TenantId,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let employee = service
        .get_for_tenant(path.into_inner(), tenant_id.0)
        .await?;

    Ok(HttpResponse::Ok().json(employee))
}

/// PATCH /employees/{id}
pub async fn update_employee(
    service: web::Data<Arc<EmployeeService>>,
    tenant_id: TenantId,
    path: web::Path<Uuid>,
    request: web::Json<UpdateEmployeeParams>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    service.get_for_tenant(id, tenant_id.0).await?;

    let employee = service.update(id, request.into_inner()).await?;

    Ok(HttpResponse::Ok().json(employee))
}

/// DELETE /employees/{id}
pub async fn delete_employee(
    service: web::Data<Arc<EmployeeService>>,
    tenant_id: TenantId,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    service.get_for_tenant(id, tenant_id.0).await?;

    service.delete(id).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// Routes nested in the `/workspaces` scope
pub fn configure_workspace_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/{workspace_id}/employees", web::get().to(list_employees))
        .route("/{workspace_id}/employees", web::post().to(create_employee));
}

/// Configure employee routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/employees")
            .route("/{id}", web::get().to(get_employee))
            .route("/{id}", web::patch().to(update_employee))
            .route("/{id}", web::delete().to(delete_employee)),
    );
}
