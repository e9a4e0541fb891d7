pub mod doc_type_service;

pub use doc_type_service::DocTypeService;
