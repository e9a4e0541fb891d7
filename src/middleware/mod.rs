pub mod request_id;
pub mod tenant;

pub use request_id::{CorrelationId, RequestId};
pub use tenant::TenantId;
