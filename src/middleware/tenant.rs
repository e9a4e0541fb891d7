use actix_web::{dev::Payload, FromRequest, HttpRequest};
use std::future::{ready, Ready};
use uuid::Uuid;

use crate::core::AppError;

pub const TENANT_HEADER: &str = "X-Tenant-ID";

/// Tenant scope of a request, read from the `X-Tenant-ID` header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TenantId(pub Uuid);

impl TenantId {
    fn from_request_headers(req: &HttpRequest) -> Result<Self, AppError> {
        let raw = req
            .headers()
            .get(TENANT_HEADER)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| AppError::invalid_input("TenantId", "Missing X-Tenant-ID header"))?;

        match Uuid::parse_str(raw.trim()) {
            Ok(id) if !id.is_nil() => Ok(TenantId(id)),
            _ => Err(AppError::invalid_input("TenantId", "Invalid X-Tenant-ID header")),
        }
    }
}

impl FromRequest for TenantId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Self::from_request_headers(req))
    }
}
