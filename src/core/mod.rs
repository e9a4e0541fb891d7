pub mod entity;
pub mod error;
pub mod patch;
pub mod validation;

pub use entity::BaseEntity;
pub use error::{AppError, DomainError, ErrorType, Result};
pub use patch::Patch;
pub use validation::{FieldErrors, Validator};
