use std::future::{ready, Ready};
use std::time::Instant;

use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::{HeaderName, HeaderValue},
    Error, HttpMessage,
};
use futures_util::future::LocalBoxFuture;
use tracing::Instrument;
use uuid::Uuid;

use super::tenant::TENANT_HEADER;

pub const REQUEST_ID_HEADER: &str = "X-Request-ID";

/// Longest caller supplied id that is trusted; anything else is replaced
const MAX_REQUEST_ID_LENGTH: usize = 64;

/// Correlation id of the current request, stored in request extensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorrelationId(pub String);

impl CorrelationId {
    fn from_header(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(id)
                if !id.is_empty()
                    && id.len() <= MAX_REQUEST_ID_LENGTH
                    && id.bytes().all(|b| b.is_ascii_graphic()) =>
            {
                Self(id.to_string())
            }
            _ => Self(Uuid::now_v7().to_string()),
        }
    }
}

/// Runs each request inside a span carrying its correlation id and tenant,
/// and echoes the id on the response
pub struct RequestId;

impl<S, B> Transform<S, ServiceRequest> for RequestId
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequestIdMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestIdMiddleware { service }))
    }
}

pub struct RequestIdMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RequestIdMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let correlation_id = CorrelationId::from_header(
            req.headers()
                .get(REQUEST_ID_HEADER)
                .and_then(|h| h.to_str().ok()),
        );
        let tenant = req
            .headers()
            .get(TENANT_HEADER)
            .and_then(|h| h.to_str().ok())
            .unwrap_or("-")
            .to_string();

        let span = tracing::info_span!(
            "request",
            request_id = %correlation_id.0,
            tenant_id = %tenant,
            method = %req.method(),
            path = %req.path(),
        );
        req.extensions_mut().insert(correlation_id.clone());

        let started = Instant::now();
        let fut = {
            let _entered = span.enter();
            tracing::debug!("Request received");
            self.service.call(req)
        };

        Box::pin(
            async move {
                let mut res = fut.await?;

                if let Ok(value) = HeaderValue::from_str(&correlation_id.0) {
                    res.headers_mut()
                        .insert(HeaderName::from_static("x-request-id"), value);
                }

                let status = res.status();
                let elapsed_ms = started.elapsed().as_millis() as u64;
                if status.is_server_error() {
                    tracing::error!(status = %status, elapsed_ms, "Request failed");
                } else {
                    tracing::info!(status = %status, elapsed_ms, "Request completed");
                }

                Ok(res)
            }
            .instrument(span),
        )
    }
}
