use std::sync::Arc;

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use uuid::Uuid;

use crate::core::error::AppError;
use crate::modules::doc_types::services::DocTypeService;

/// Query parameters for listing document types
#[derive(Debug, Deserialize)]
pub struct ListDocTypesQuery {
    pub country_id: Uuid,
}

/// List document types of a country
/// GET /doc-types?country_id={uuid}
pub async fn list_doc_types(
    service: web::Data<Arc<DocTypeService>>,
    query: web::Query<ListDocTypesQuery>,
) -> Result<HttpResponse, AppError> {
    let doc_types = service.list_by_country(query.country_id).await?;

    Ok(HttpResponse::Ok().json(doc_types))
}

/// GET /doc-types/{id}
pub async fn get_doc_type(
    service: web::Data<Arc<DocTypeService>>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let doc_type = service.get(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(doc_type))
}

/// Configure document type routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/doc-types")
            .route("", web::get().to(list_doc_types))
            .route("/{id}", web::get().to(get_doc_type)),
    );
}
