// Document types module

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::DocType;
pub use repositories::{DocTypeRepository, MySqlDocTypeRepository};
pub use services::DocTypeService;
