use std::sync::Arc;

use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::core::error::AppError;
use crate::middleware::tenant::TenantId;
use crate::modules::workspaces::models::{CreateWorkspaceParams, UpdateWorkspaceParams};
use crate::modules::workspaces::services::WorkspaceService;

/// List the tenant's workspaces
/// GET /workspaces
pub async fn list_workspaces(
    service: web::Data<Arc<WorkspaceService>>,
    tenant_id: TenantId,
) -> Result<HttpResponse, AppError> {
    let workspaces = service.list_by_tenant(tenant_id.0).await?;

    Ok(HttpResponse::Ok().json(workspaces))
}

/// Create a workspace for the tenant
/// POST /workspaces
pub async fn create_workspace(
    service: web::Data<Arc<WorkspaceService>>,
    tenant_id: TenantId,
    request: web::Json<CreateWorkspaceParams>,
) -> Result<HttpResponse, AppError> {
    let mut params = request.into_inner();
    params.tenant_id = tenant_id.0;

    let workspace = service.create(params).await?;

    Ok(HttpResponse::Created().json(workspace))
}

/// GET /workspaces/{id}
pub async fn get_workspace(
    service: web::Data<Arc<WorkspaceService>>,
    tenant_id: TenantId,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let workspace = service
        .get_for_tenant(path.into_inner(), tenant_id.0)
        .await?;

    Ok(HttpResponse::Ok().json(workspace))
}

/// PATCH /workspaces/{id}
pub async fn update_workspace(
    service: web::Data<Arc<WorkspaceService>>,
    tenant_id: TenantId,
    path: web::Path<Uuid>,
    request: web::Json<UpdateWorkspaceParams>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    service.get_for_tenant(id, tenant_id.0).await?;

    let workspace = service.update(id, request.into_inner()).await?;

    Ok(HttpResponse::Ok().json(workspace))
}

/// DELETE /workspaces/{id}
pub async fn delete_workspace(
    service: web::Data<Arc<WorkspaceService>>,
    tenant_id: TenantId,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    service.get_for_tenant(id, tenant_id.0).await?;

    service.delete(id).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// Configure workspace routes.
///
/// Employee routes nested under a workspace are registered by the
/// employees module inside the same scope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(list_workspaces))
        .route("", web::post().to(create_workspace))
        .route("/{id}", web::get().to(get_workspace))
        .route("/{id}", web::patch().to(update_workspace))
        .route("/{id}", web::delete().to(delete_workspace));
}
