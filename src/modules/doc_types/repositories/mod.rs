pub mod doc_type_repository;

pub use doc_type_repository::{DocTypeRepository, MySqlDocTypeRepository};
#[cfg(test)]
pub use doc_type_repository::MockDocTypeRepository;
