use std::sync::Arc;

use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::core::error::AppError;
use crate::modules::countries::models::{CreateCountryParams, UpdateCountryParams};
use crate::modules::countries::services::CountryService;

/// List all countries
/// GET /countries
pub async fn list_countries(
    service: web::Data<Arc<CountryService>>,
) -> Result<HttpResponse, AppError> {
    let countries = service.list_all().await?;

    Ok(HttpResponse::Ok().json(countries))
}

/// Create a country
/// POST /countries
pub async fn create_country(
    service: web::Data<Arc<CountryService>>,
    request: web::Json<CreateCountryParams>,
) -> Result<HttpResponse, AppError> {
    let country = service.create(request.into_inner()).await?;

    Ok(HttpResponse::Created().json(country))
}

/// GET /countries/{id}
pub async fn get_country(
    service: web::Data<Arc<CountryService>>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let country = service.get_by_id(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(country))
}

/// GET /countries/code/{code}
pub async fn get_country_by_code(
    service: web::Data<Arc<CountryService>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let country = service.get_by_code(&path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(country))
}

/// PATCH /countries/{id}
pub async fn update_country(
    service: web::Data<Arc<CountryService>>,
    path: web::Path<Uuid>,
    request: web::Json<UpdateCountryParams>,
) -> Result<HttpResponse, AppError> {
    let country = service
        .update(path.into_inner(), request.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(country))
}

/// DELETE /countries/{id}
pub async fn delete_country(
    service: web::Data<Arc<CountryService>>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    service.delete(path.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// Configure country routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/countries")
            .route("", web::get().to(list_countries))
            .route("", web::post().to(create_country))
            .route("/code/{code}", web::get().to(get_country_by_code))
            .route("/{id}", web::get().to(get_country))
            .route("/{id}", web::patch().to(update_country))
            .route("/{id}", web::delete().to(delete_country)),
    );
}
